//! Human-readable key notes for a candidate.
//!
//! Threshold notes come first in property order, then one or two draws from
//! [`STRUCTURAL_NOTES`]. A drawn note already present is dropped, not redrawn.

use rand::Rng;

use druggen_core::random::{pick, uniform_int};

use crate::properties::CandidateProperties;

/// Flavor notes appended after the threshold notes.
pub const STRUCTURAL_NOTES: [&str; 8] = [
    "Structurally novel compared to existing drugs",
    "Favorable molecular weight and lipophilicity",
    "Good balance of polar and non-polar groups",
    "Predicted to be easily synthesizable",
    "Favorable 3D conformation for target binding",
    "Low predicted clearance rate",
    "Good predicted protein binding",
    "Favorable predicted half-life",
];

/// Number of structural notes requested, inclusive.
pub const STRUCTURAL_NOTE_DRAWS: (u32, u32) = (1, 2);

fn toxicity_note(v: u32) -> Option<&'static str> {
    if v <= 20 {
        Some("Very low predicted toxicity")
    } else if v <= 30 {
        Some("Low predicted toxicity")
    } else {
        None
    }
}

fn bbb_note(v: u32) -> Option<&'static str> {
    if v >= 85 {
        Some("Excellent blood-brain barrier crossing")
    } else if v >= 75 {
        Some("Strong blood-brain barrier crossing")
    } else if v >= 65 {
        Some("Moderate blood-brain barrier crossing")
    } else {
        None
    }
}

fn bioavailability_note(v: u32) -> Option<&'static str> {
    if v >= 90 {
        Some("High oral bioavailability")
    } else if v >= 80 {
        Some("Moderate oral bioavailability")
    } else {
        None
    }
}

fn solubility_note(v: u32) -> Option<&'static str> {
    if v >= 80 {
        Some("Excellent aqueous solubility")
    } else if v >= 70 {
        Some("Good aqueous solubility")
    } else {
        None
    }
}

fn stability_note(v: u32) -> Option<&'static str> {
    if v >= 85 {
        Some("High metabolic stability")
    } else if v >= 75 {
        Some("Moderate metabolic stability")
    } else {
        None
    }
}

/// Deterministic notes derived from property thresholds.
pub fn threshold_notes(p: &CandidateProperties) -> Vec<String> {
    [
        toxicity_note(p.toxicity),
        bbb_note(p.bbb_penetration),
        bioavailability_note(p.oral_bioavailability),
        solubility_note(p.solubility),
        stability_note(p.metabolic_stability),
    ]
    .into_iter()
    .flatten()
    .map(String::from)
    .collect()
}

/// Full ordered, duplicate-free note list.
pub fn key_notes<R: Rng + ?Sized>(rng: &mut R, p: &CandidateProperties) -> Vec<String> {
    let mut notes = threshold_notes(p);
    let draws = uniform_int(rng, STRUCTURAL_NOTE_DRAWS.0, STRUCTURAL_NOTE_DRAWS.1);
    for _ in 0..draws {
        if let Some(note) = pick(rng, &STRUCTURAL_NOTES) {
            if !notes.iter().any(|n| n == note) {
                notes.push((*note).to_string());
            }
        }
    }
    notes
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
