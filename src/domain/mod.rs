//! Domain types for Shamir secret reconstruction
//!
//! This module contains validated newtypes and value types used by the core:
//! - [`Radix`] - Base a share value is written in (2..=36)
//! - [`Threshold`] - Minimum shares required for reconstruction (k >= 1)
//! - [`ShareCount`] - Declared total number of shares (n >= 1)
//! - [`SharePoint`] - One `(x, y)` share
//! - [`Fraction`] - Exact rational arithmetic over big integers
//! - [`ReconstructionRequest`] - Parsed shares plus threshold, with point selection

mod fraction;
mod radix;
mod request;
mod share_count;
mod share_point;
mod threshold;

pub use fraction::Fraction;
pub use radix::Radix;
pub use request::ReconstructionRequest;
pub use share_count::ShareCount;
pub use share_point::SharePoint;
pub use threshold::Threshold;
