//! Draft/commit editing over a single authoritative world.
//!
//! The surrounding editor keeps exactly one `Session`: the committed world
//! is the authoritative value, the working world is the draft being edited.
//! There is never a second independently mutated copy of the graph.

use mapwright_foundation::Result;

use crate::world::World;

/// One committed world plus the working draft derived from it.
#[derive(Clone, Debug)]
pub struct Session {
    committed: World,
    working: World,
}

impl Session {
    /// Opens a session on a loaded or freshly created world.
    #[must_use]
    pub fn new(world: World) -> Self {
        Self {
            committed: world.clone(),
            working: world,
        }
    }

    /// The current working snapshot, including uncommitted edits.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.working
    }

    /// The last committed world.
    #[must_use]
    pub fn committed(&self) -> &World {
        &self.committed
    }

    /// Threads a pure mutation through the working world.
    ///
    /// On error the working world is left as it was; the failed mutation
    /// never partially applies.
    ///
    /// # Errors
    ///
    /// Propagates whatever the mutation returns.
    pub fn apply<F>(&mut self, mutate: F) -> Result<()>
    where
        F: FnOnce(&World) -> Result<World>,
    {
        self.working = mutate(&self.working)?;
        Ok(())
    }

    /// Returns true if the working world differs from the committed one.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.working != self.committed
    }

    /// Publishes the working world as the new committed value.
    pub fn commit(&mut self) {
        self.committed = self.working.clone();
    }

    /// Discards uncommitted edits, restoring the committed world.
    pub fn revert(&mut self) {
        self.working = self.committed.clone();
    }
}
