//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `edge_cases.rs` - Board edges, blocking and en-passant scenarios
//! - `proptest.rs` - Property-based tests
//!
//! Per-component tests live next to their code.
