//! Domain logic
//!
//! This module contains the pure translator domain:
//! - Text buffer with cursor, selection and undo history
//! - Editor operations layered on top of the buffer
//! - Language pair and catalog
//! - Domain error kinds

pub mod editing;
pub mod error;
pub mod language;
pub mod text_buffer;
