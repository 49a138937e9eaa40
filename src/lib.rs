//! Exact reconstruction of Shamir secrets from threshold shares
//!
//! Shares are `(x, y)` points whose y-values are digit strings in any base from 2 to
//! 36. The secret is the constant term of the interpolating polynomial, computed with
//! exact rational arithmetic over big integers.

#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
pub mod commands;
pub mod document;
pub mod domain;
pub mod error;
pub mod interpolate;
pub mod report;
pub mod wasm;

pub use commands::{Reconstruction, Report, reconstruct, reconstruct_json};
pub use error::{Error, Result};
