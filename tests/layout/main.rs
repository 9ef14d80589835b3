//! Integration tests for Layer 2: map layout
//!
//! Tests for bounding-border computation and the multi-floor render grid.

mod grid;
