//! Input document model and share point extraction
//!
//! The document is a JSON object with one metadata entry and one entry per share:
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "16", "value": "a" },
//!   "2": { "base": 10, "value": "16" }
//! }
//! ```
//!
//! Every top-level key other than `keys` is the decimal x-coordinate of a share, and
//! its `value` is the y-coordinate written in `base`. Entries without both `base` and
//! `value` are not shares and are skipped.

use std::collections::BTreeMap;

use num_bigint::BigInt;
use serde::Deserialize;
use serde::de::IgnoredAny;
use serde_json::{Map, Value};

use crate::codec;
use crate::domain::{Radix, ReconstructionRequest, ShareCount, SharePoint, Threshold};
use crate::error::{Error, Result};
use crate::report::{Diagnostic, Reporter};

/// Name of the metadata entry
pub const METADATA_KEY: &str = "keys";

/// A parsed, not yet validated, share document
#[derive(Debug, Clone, Deserialize)]
pub struct ShareDocument {
    #[serde(default)]
    keys: Option<Value>,
    #[serde(flatten)]
    entries: BTreeMap<String, RawEntry>,
}

/// Any top-level entry other than the metadata
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Object(Map<String, Value>),
    Other(IgnoredAny),
}

impl RawEntry {
    /// Returns `(base, value)` when both fields are present and not null
    fn share_fields(&self) -> Option<(&Value, &Value)> {
        let Self::Object(fields) = self else {
            return None;
        };
        let present = |name: &str| fields.get(name).filter(|v| !v.is_null());
        Some((present("base")?, present("value")?))
    }
}

impl ShareDocument {
    /// Parses a document from JSON text
    ///
    /// # Errors
    /// Returns [`Error::MalformedInput`] if the text is not a JSON object or repeats
    /// the `keys` entry
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::MalformedInput(format!("Invalid JSON document: {e}")))
    }

    /// Validates the document and extracts its share points, sorted by x
    ///
    /// A mismatch between `keys.n` and the number of shares found is sent to
    /// `reporter` and does not affect the result.
    ///
    /// # Errors
    /// - [`Error::MalformedInput`] if `keys.n`/`keys.k` are missing or not positive
    ///   integers, if a share key is not a decimal integer, or if a share value is not
    ///   a string
    /// - [`Error::InvalidBase`] if a share's base is not an integer in 2..=36
    /// - [`Error::InvalidDigit`] if a share's value is not valid in its base
    pub fn extract(&self, reporter: &mut impl Reporter) -> Result<ReconstructionRequest> {
        let (share_count, threshold) = self.metadata()?;

        let mut points = Vec::new();
        for (key, entry) in &self.entries {
            // Not a share unless both fields are present; skip silently
            let Some((base, value)) = entry.share_fields() else {
                continue;
            };
            // Once an entry claims to be a share, any bad field is fatal
            points.push(parse_share(key, base, value)?);
        }

        // Only `k` governs feasibility, so a wrong `n` is just a warning
        if points.len() != *share_count {
            reporter.report(Diagnostic::ShareCountMismatch {
                declared: *share_count,
                found: points.len(),
            });
        }

        Ok(ReconstructionRequest::new(share_count, threshold, points))
    }

    fn metadata(&self) -> Result<(ShareCount, Threshold)> {
        let keys = self
            .keys
            .as_ref()
            .and_then(Value::as_object)
            .ok_or_else(|| {
                Error::MalformedInput("JSON must contain keys.n and keys.k as numbers".to_string())
            })?;

        let n = integer_field(keys, "n")?;
        let k = integer_field(keys, "k")?;
        Ok((ShareCount::new(n)?, Threshold::new(k)?))
    }
}

fn integer_field(keys: &Map<String, Value>, name: &str) -> Result<usize> {
    keys.get(name)
        .and_then(Value::as_u64)
        .and_then(|v| usize::try_from(v).ok())
        .ok_or_else(|| {
            Error::MalformedInput(format!(
                "{METADATA_KEY}.{name} must be a non-negative integer"
            ))
        })
}

fn parse_share(key: &str, base: &Value, value: &Value) -> Result<SharePoint> {
    let x = parse_x(key)?;

    let radix = parse_base(base)?;

    let Value::String(digits) = value else {
        return Err(Error::MalformedInput(format!(
            "Share '{key}' must have a string value (got {value})"
        )));
    };

    let y = BigInt::from(codec::decode(digits, radix)?);
    Ok(SharePoint::new(x, y))
}

/// Optional sign followed by ASCII digits, surrounding whitespace allowed
fn parse_x(key: &str) -> Result<BigInt> {
    let trimmed = key.trim();
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);

    // `BigInt::from_str` also skips `_` separators, so check the digits first
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::MalformedInput(format!(
            "Share key '{key}' is not a decimal integer"
        )));
    }

    trimmed.parse().map_err(|_| {
        Error::MalformedInput(format!("Share key '{key}' is not a decimal integer"))
    })
}

/// Accepts a JSON integer or a string holding one
fn parse_base(raw: &Value) -> Result<Radix> {
    let base = match raw {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };

    let base = base
        .and_then(|b| u32::try_from(b).ok())
        .ok_or_else(|| Error::InvalidBase(raw.to_string()))?;

    Radix::new(base)
}
