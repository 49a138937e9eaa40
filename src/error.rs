//! Error kinds raised by the reconstruction core

/// Every failure the reconstruction core can detect
///
/// None of these are recovered from inside the crate: each is raised where it is
/// detected and surfaces unchanged to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A base outside 2..=36, or one that is not an integer at all
    #[error("Unsupported base: {0}")]
    InvalidBase(String),

    /// A digit that is not part of the alphabet of the stated base
    #[error("Invalid digit '{digit}' for base {base} in value '{value}'")]
    InvalidDigit {
        /// the offending character
        digit: char,
        /// the base the value was decoded in
        base: u32,
        /// the original digit string
        value: String,
    },

    /// The document does not follow the expected schema
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Fewer usable points than the threshold requires
    #[error("Not enough points to interpolate: have {available}, need {needed}")]
    InsufficientPoints {
        /// the threshold `k`
        needed: usize,
        /// the number of usable points
        available: usize,
    },

    /// A zero denominator, or a duplicate x-coordinate during interpolation
    #[error("Division by zero in fraction")]
    DivisionByZero,
}

/// Result alias used throughout the reconstruction core
pub type Result<T> = std::result::Result<T, Error>;
