//! CLI command handlers.
//!
//! Each subcommand is a clap `Args` struct with an `execute` entry point,
//! so palettes can be generated and formatted from scripts and CI.

pub mod common;
pub mod fmt;
pub mod generate;
pub mod inspect;

// Re-export types used by main.rs and tests
pub use fmt::FmtArgs;
pub use generate::GenerateArgs;
pub use inspect::InspectArgs;
