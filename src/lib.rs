//! ShadeKit Library
//!
//! This library provides core functionality for the ShadeKit palette
//! tooling, including the compact palette text grammar, light/dark scheme
//! configuration, color space conversion, and the shade ramp generation
//! engine.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod convert;
pub mod curve;
pub mod error;
pub mod models;
pub mod parser;
pub mod shade;
pub mod tones;
