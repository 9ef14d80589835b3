//! Integration tests for Layer 1: the world graph
//!
//! Tests for node mutations, containment, adjacency, and cascading deletion.

mod containment;
