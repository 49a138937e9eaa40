use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::document::ShareDocument;
use crate::domain::{Fraction, SharePoint, Threshold};
use crate::error::Result;
use crate::interpolate::interpolate_at_zero;
use crate::report::Reporter;

/// Fractional digits shown in the advisory approximation by default
pub const DEFAULT_PRECISION: usize = 20;

/// Outcome of one reconstruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconstruction {
    threshold: Threshold,
    points: Vec<SharePoint>,
    secret: Fraction,
}

impl Reconstruction {
    /// Gets the threshold `k` used for selection
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Gets the selected points in ascending x order
    #[must_use]
    pub fn points(&self) -> &[SharePoint] {
        &self.points
    }

    /// Gets the exact secret f(0)
    #[must_use]
    pub fn secret(&self) -> &Fraction {
        &self.secret
    }

    /// Decimal rendering of a fractional secret, for human convenience only
    ///
    /// Returns `None` when the secret is an integer. The exact value is always
    /// [`Reconstruction::secret`].
    #[must_use]
    pub fn approximation(&self, precision: usize) -> Option<String> {
        (!self.secret.is_integer()).then(|| self.secret.to_decimal(precision))
    }

    /// Builds the serializable report
    #[must_use]
    pub fn report(&self, precision: usize) -> Report {
        Report {
            k: *self.threshold,
            points: self
                .points
                .iter()
                .map(|p| ReportPoint {
                    x: p.x().to_string(),
                    y: p.y().to_string(),
                })
                .collect(),
            secret: self.secret.to_string(),
            approx: self.approximation(precision),
            warnings: Vec::new(),
        }
    }
}

impl fmt::Display for Reconstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        let points = self
            .points
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        writeln!(f, "k = {}", *self.threshold)?;
        writeln!(f, "selected points = {points}")?;
        write!(f, "secret f(0) = {}", self.secret)?;
        if let Some(approx) = self.approximation(precision) {
            write!(f, "\napprox ≈ {approx}")?;
        }
        Ok(())
    }
}

/// JSON form of a [`Reconstruction`]
///
/// Big integers are carried as decimal strings so no consumer has to parse them into
/// a fixed-width number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Threshold used for selection
    pub k: usize,
    /// Selected points, ascending x
    pub points: Vec<ReportPoint>,
    /// Exact secret, `"n"` or `"n/d"`
    pub secret: String,
    /// Advisory decimal value, present only for fractional secrets
    pub approx: Option<String>,
    /// Diagnostics raised while reading the document
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// One selected point in a [`Report`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPoint {
    /// x-coordinate, decimal
    pub x: String,
    /// y-coordinate, decimal
    pub y: String,
}

/// Reconstruct the secret from a parsed share document
///
/// Extracts and sorts the shares, selects the first `k` by ascending x and
/// interpolates them at zero.
///
/// # Errors
/// Returns any error raised while validating the document, selecting points or
/// interpolating; none of them are recovered from
#[instrument(level = "debug", skip_all)]
pub fn reconstruct(
    document: &ShareDocument,
    reporter: &mut impl Reporter,
) -> Result<Reconstruction> {
    let request = document.extract(reporter)?;
    tracing::debug!(
        declared = *request.share_count(),
        found = request.points().len(),
        k = *request.threshold(),
        "extracted share points"
    );

    // Lowest k x-values; the rest of the shares are never consulted
    let points = request.select()?.to_vec();
    let secret = interpolate_at_zero(&points)?;
    tracing::debug!(integer = secret.is_integer(), "interpolated secret");

    Ok(Reconstruction {
        threshold: request.threshold(),
        points,
        secret,
    })
}

/// Reconstruct the secret from JSON document text
///
/// # Errors
/// Returns [`crate::Error::MalformedInput`] if the text is not a JSON object, or any
/// error from [`reconstruct`]
#[instrument(level = "debug", skip_all, fields(len = json.len()))]
pub fn reconstruct_json(json: &str, reporter: &mut impl Reporter) -> Result<Reconstruction> {
    let document = ShareDocument::from_json(json)?;
    reconstruct(&document, reporter)
}
