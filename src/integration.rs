//! Integration layer
//!
//! Wires the pure core to the terminal and the gateways:
//! - `Runtime`: message queues, update cycle, command execution
//! - `AppRunner`: event loop over a `TuiLike` and the runtime

pub mod app_runner;
pub mod runtime;
