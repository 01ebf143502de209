//! Integration tests for Layer 1: Storage
//!
//! Tests for the contiguous pool, safe cursors, entity pools, and component
//! attachment.

mod entities;
