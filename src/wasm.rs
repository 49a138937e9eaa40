//! WASM bindings for shamir-recover
//!
//! This module provides JavaScript-friendly bindings for secret reconstruction. Big
//! integers cross the boundary as decimal strings.

use wasm_bindgen::prelude::*;

use crate::codec;
use crate::commands::{self, DEFAULT_PRECISION, Report};
use crate::report::Diagnostic;

/// Initialize panic hook for better error messages in the browser console
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Use wee_alloc as the global allocator for smaller WASM binary size
#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Reconstructs the secret and collects warnings into the report
fn reconstruct_report(document: &str) -> Result<Report, String> {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let reconstruction = commands::reconstruct_json(document, &mut diagnostics)
        .map_err(|e| format!("Reconstruction failed: {e}"))?;

    let mut report = reconstruction.report(DEFAULT_PRECISION);
    report.warnings = diagnostics.iter().map(ToString::to_string).collect();
    Ok(report)
}

/// Reconstruct a secret from a JSON share document
///
/// # Arguments
/// * `document` - The share document as JSON text
///
/// # Returns
/// JSON string with `k`, `points`, `secret`, `approx` and (if any) `warnings`, or an
/// error message
///
/// # Example (JavaScript)
/// ```javascript
/// const report = JSON.parse(wasm_reconstruct(documentText));
/// console.log(`secret f(0) = ${report.secret}`);
/// ```
#[wasm_bindgen]
pub fn wasm_reconstruct(document: &str) -> Result<String, JsValue> {
    let report = reconstruct_report(document).map_err(|e| JsValue::from_str(&e))?;

    serde_json::to_string(&report)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {e}")))
}

/// Reconstruct a secret and return the report as a JavaScript object
///
/// Same as [`wasm_reconstruct`] without the JSON round trip on the caller side.
#[wasm_bindgen]
pub fn wasm_reconstruct_value(document: &str) -> Result<JsValue, JsValue> {
    let report = reconstruct_report(document).map_err(|e| JsValue::from_str(&e))?;

    serde_wasm_bindgen::to_value(&report)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {e}")))
}

/// Decode a digit string in `base` (2-36) to its decimal representation
///
/// # Example (JavaScript)
/// ```javascript
/// wasm_decode("1c", 16); // "28"
/// ```
#[wasm_bindgen]
pub fn wasm_decode(digits: &str, base: u32) -> Result<String, JsValue> {
    codec::decode_with_base(digits, base)
        .map(|value| value.to_string())
        .map_err(|e| JsValue::from_str(&format!("Decode failed: {e}")))
}
