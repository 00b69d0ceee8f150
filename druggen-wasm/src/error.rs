//! Response envelope shared by every binding.
//!
//! A successful call yields `{"ok": <value>}`. A failed call yields
//! `{"error": "<message>", "kind": "<category>"}` where `kind` is
//! [`DruggenError::kind`], so a form can tell a rejected field
//! (`invalid_argument`) from a body that was not JSON at all (`parse`).

use serde::Serialize;

use druggen_core::DruggenError;

#[derive(Serialize)]
#[serde(untagged)]
enum Envelope<'a, T: Serialize> {
    Ok { ok: &'a T },
    Error { error: String, kind: &'static str },
}

impl<T: Serialize> Envelope<'_, T> {
    fn to_json(&self) -> String {
        match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => failure_json(&DruggenError::Other(e.to_string())),
        }
    }
}

fn failure_json(err: &DruggenError) -> String {
    serde_json::json!({ "error": err.to_string(), "kind": err.kind() }).to_string()
}

/// `{"ok": value}`, or an `other` failure if `value` cannot be serialized.
pub fn wasm_ok<T: Serialize>(value: &T) -> String {
    Envelope::Ok { ok: value }.to_json()
}

/// `{"error": message, "kind": category}` for a [`DruggenError`].
pub fn wasm_err(err: &DruggenError) -> String {
    let envelope: Envelope<'_, ()> = Envelope::Error {
        error: err.to_string(),
        kind: err.kind(),
    };
    envelope.to_json()
}

/// Wrap a candidate-engine result in the envelope.
pub fn wasm_result<T: Serialize>(result: druggen_core::Result<T>) -> String {
    match result {
        Ok(value) => wasm_ok(&value),
        Err(err) => wasm_err(&err),
    }
}
