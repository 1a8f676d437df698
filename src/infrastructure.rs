//! Infrastructure layer
//!
//! Everything that touches the outside world:
//! - Terminal (real and test backends) and the text area engine
//! - CLI arguments and layered configuration
//! - Google translation and speech gateways, system clipboard
//! - Persisted language preferences

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod languages;
pub mod preferences;
pub mod speech;
pub mod translation;
pub mod tui;
