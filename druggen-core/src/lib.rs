//! Shared primitives for the druggen candidate-simulation crates.
//!
//! `druggen-core` provides the foundation the other crates build on:
//!
//! - **Error types**: [`DruggenError`] and [`Result`] for structured error handling
//! - **Traits**: [`Scored`] and [`Summarizable`]
//! - **Random draws**: uniform integer, index and pick helpers over any
//!   injected [`rand::Rng`], see [`random`]

pub mod error;
pub mod random;
pub mod traits;

pub use error::{DruggenError, Result};
pub use traits::*;
