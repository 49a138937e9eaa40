//! `Radix` newtype for share value decoding

use crate::error::{Error, Result};

/// Numeric base a share value is written in (2..=36)
///
/// The digit alphabet is `0-9a-z`, so 36 is the largest base that can be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Radix(u32);

impl Radix {
    /// Smallest supported base
    pub const MIN: u32 = 2;

    /// Largest supported base
    pub const MAX: u32 = 36;

    /// Creates a new radix
    ///
    /// # Errors
    /// Returns [`Error::InvalidBase`] if the base is outside 2..=36
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamir_recover::domain::Radix;
    ///
    /// let hex = Radix::new(16).unwrap();
    /// assert_eq!(*hex, 16);
    ///
    /// assert!(Radix::new(1).is_err());
    /// assert!(Radix::new(37).is_err());
    /// ```
    pub fn new(value: u32) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(Error::InvalidBase(value.to_string()));
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for Radix {
    type Target = u32;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
