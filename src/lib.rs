//! headsup — heads-up preflop equity comparison client.
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point.

pub mod cards;
pub mod config;
pub mod error;
pub mod hands;
pub mod orchestrator;
pub mod service;
pub mod session;
