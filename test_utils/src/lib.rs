//! Helpers shared by the tests and benchmarks of the workspace

#[macro_use]
pub mod serialization;
pub mod hex;
