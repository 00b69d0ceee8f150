//! Candidate generation bindings: batches, prefixes and full discovery reports.

use druggen_chem::{
    disease_prefix as prefix_for, generate_seeded, run_discovery_seeded, DiscoveryRequest,
};
use druggen_core::DruggenError;

use crate::error::{wasm_ok, wasm_result};

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

/// Generate a ranked candidate batch as JSON.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn generate(count: i64, disease: &str, seed: u64) -> String {
    wasm_result(generate_seeded(count, disease, seed))
}

/// Identifier prefix for a disease name.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn disease_prefix(disease: &str) -> String {
    wasm_ok(&prefix_for(disease))
}

/// Parse a form submission and return the full discovery report.
///
/// A body that is not valid request JSON fails with kind `parse`; a well-formed
/// body with an unknown form value or a blank disease name fails with kind
/// `invalid_argument`.
///
/// Expects `{"diseaseName", "drugProperties", "administrationRoute", "batchSize"}`
/// using the form values (`"oral"`, `"small"`, `"low_toxicity"`, ...).
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn discovery_report(request_json: &str, seed: u64) -> String {
    let report = serde_json::from_str::<DiscoveryRequest>(request_json)
        .map_err(|e| DruggenError::Parse(e.to_string()))
        .and_then(|request| run_discovery_seeded(&request, seed));
    wasm_result(report)
}
