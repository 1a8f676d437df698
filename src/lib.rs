//! # GoodTranslator - terminal translator with text-to-speech
//!
//! Type text in the source language, press Enter to translate it into the
//! target language, Ctrl+Enter to hear the source text spoken.
//!
//! ## Architecture Overview
//!
//! The crate follows the Elm architecture:
//!
//! - **Model** (`core::state`): `AppState`, owned by the runtime
//! - **Message** (`core::msg`, `core::raw_msg`): terminal events and domain messages
//! - **Update** (`core::update`): pure `(Msg, AppState) -> (AppState, Vec<Cmd>)`
//! - **Command** (`core::cmd`): side effects run by `CmdExecutor`
//! - **View** (`presentation`): stateless components rendering the state
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use goodtranslator::{
//!     core::{msg::{service::ServiceMsg, Msg}, state::AppState, update::update},
//!     domain::language::{LanguageCatalog, LanguagePair},
//! };
//!
//! let catalog = Arc::new(LanguageCatalog::new([("french", "fr"), ("russian", "ru")]));
//! let mut state = AppState::new(LanguagePair::default(), catalog);
//! state.input.insert_str("Bonjour");
//!
//! let (state, commands) = update(Msg::Service(ServiceMsg::TranslateRequested), state);
//! assert!(state.activity.is_busy());
//! assert_eq!(commands.len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`domain`] - text buffer, editing operations, languages, errors
//! - [`core`] - Elm architecture core
//! - [`infrastructure`] - terminal, config, gateways, preferences file
//! - [`integration`] - runtime and application runner
//! - [`presentation`] - components, widgets, keybindings and styles

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod test_helpers;
pub mod utils;

pub use core::{cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, update::update};

/// Result type used throughout the application plumbing
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
