//! Error types and error handling for the front-end.
//!
//! This module defines the errors the parser records. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each kind of syntax failure
//! - Error names and suggestions used when rendering diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
