//! Credstore Error Taxonomy
//!
//! This crate defines the error values exchanged between the credential
//! storage engine and its callers: a base storage fault plus the two
//! specialized kinds callers must handle distinctly.

pub mod error;

pub use error::{Recovery, Result, StorageError};
