//! cvforge CLI library
//!
//! The binary is a thin wrapper; the generation run itself lives here so
//! integration tests can call it with a fixed reference date.

pub mod app;

pub use app::{generate_all, run_cli};
