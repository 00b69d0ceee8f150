//! WASM bindings for the druggen candidate generator.
//!
//! In-memory, JSON-based wrappers for hosts without direct access to the
//! Rust API (browsers, sandboxed workers). Every public function accepts
//! simple types (`&str`, `i64`, `u64`) and returns a JSON `String`:
//!
//! - Success: `{"ok": <value>}`
//! - Failure: `{"error": "<message>", "kind": "invalid_argument" | "parse" | "other"}`
//!
//! `#[wasm_bindgen]` annotations are enabled with the `wasm` feature.
//!
//! # Example
//!
//! ```
//! let json = druggen_wasm::generate(2, "cancer", 42);
//! let v: serde_json::Value = serde_json::from_str(&json).unwrap();
//! assert_eq!(v["ok"].as_array().unwrap().len(), 2);
//! ```

pub mod candidates;
pub mod error;

/// Crate version (set from Cargo.toml at compile time).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use candidates::{discovery_report, disease_prefix, generate};
pub use error::{wasm_err, wasm_ok, wasm_result};
