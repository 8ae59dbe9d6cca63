//! pcmgen End-to-End Test Infrastructure
//!
//! This crate provides integration tests that cross crate boundaries:
//!
//! - Generation: CLI options -> raw PCM file -> decoded statistics
//! - **Determinism**: byte-identical output for identical parameters and seed
//! - Properties: descriptor parsing, codec inverse law, sine range
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p pcmgen-tests
//! ```

pub mod determinism;
pub mod fixtures;

// Re-export commonly used items
pub use determinism::{verify_determinism, DeterminismResult, DiffInfo};
pub use fixtures::{fixture_matrix, Fixture};
