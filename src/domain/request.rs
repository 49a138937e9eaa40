//! Parsed reconstruction request and threshold point selection

use crate::error::{Error, Result};

use super::{SharePoint, ShareCount, Threshold};

/// Everything needed to reconstruct one secret
///
/// Points are kept sorted by ascending x-coordinate, so selection does not depend on
/// the order in which shares appeared in the input document.
///
/// `threshold <= share_count` is deliberately not enforced: only the number of
/// points actually available decides whether reconstruction can proceed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconstructionRequest {
    share_count: ShareCount,
    threshold: Threshold,
    points: Vec<SharePoint>,
}

impl ReconstructionRequest {
    /// Creates a request, sorting `points` by ascending x
    ///
    /// # Examples
    ///
    /// ```rust
    /// use num_bigint::BigInt;
    /// use shamir_recover::domain::{ReconstructionRequest, ShareCount, SharePoint, Threshold};
    ///
    /// let point = |x: i64, y: i64| SharePoint::new(BigInt::from(x), BigInt::from(y));
    /// let request = ReconstructionRequest::new(
    ///     ShareCount::new(3).unwrap(),
    ///     Threshold::new(2).unwrap(),
    ///     vec![point(3, 28), point(1, 10), point(2, 16)],
    /// );
    ///
    /// let selected = request.select().unwrap();
    /// assert_eq!(selected, &[point(1, 10), point(2, 16)]);
    /// ```
    #[must_use]
    pub fn new(share_count: ShareCount, threshold: Threshold, mut points: Vec<SharePoint>) -> Self {
        points.sort_by(|a, b| a.x().cmp(b.x()));
        Self {
            share_count,
            threshold,
            points,
        }
    }

    /// Gets the declared share count `n`
    #[must_use]
    pub fn share_count(&self) -> ShareCount {
        self.share_count
    }

    /// Gets the threshold `k`
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Gets all recognized points, sorted by x
    #[must_use]
    pub fn points(&self) -> &[SharePoint] {
        &self.points
    }

    /// Selects the first `k` points by ascending x
    ///
    /// # Errors
    /// Returns [`Error::InsufficientPoints`] if fewer than `k` points are available
    pub fn select(&self) -> Result<&[SharePoint]> {
        let needed = *self.threshold;
        if self.points.len() < needed {
            return Err(Error::InsufficientPoints {
                needed,
                available: self.points.len(),
            });
        }
        Ok(&self.points[..needed])
    }
}
