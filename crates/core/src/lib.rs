//! Shared domain types for the movies service.
//!
//! No I/O lives here: only primitive aliases, the domain error enum and the
//! movie lifecycle rules used by both the persistence and HTTP layers.

pub mod error;
pub mod movie;
pub mod types;
