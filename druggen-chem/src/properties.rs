//! Simulated candidate properties: sampling and cross-property correlation.

use rand::Rng;

use druggen_core::random::uniform_int;
use druggen_core::Summarizable;

use crate::profile::{DiseaseProfile, PropertyRange};

/// Display labels in the fixed property order used by [`CandidateProperties::as_array`].
pub const PROPERTY_LABELS: [&str; 5] = [
    "Toxicity",
    "BBB Penetration",
    "Oral Bioavailability",
    "Solubility",
    "Metabolic Stability",
];

/// Five simulated properties, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CandidateProperties {
    pub toxicity: u32,
    pub bbb_penetration: u32,
    pub oral_bioavailability: u32,
    pub solubility: u32,
    pub metabolic_stability: u32,
}

impl CandidateProperties {
    /// Values in the order of [`PROPERTY_LABELS`].
    pub fn as_array(&self) -> [u32; 5] {
        [
            self.toxicity,
            self.bbb_penetration,
            self.oral_bioavailability,
            self.solubility,
            self.metabolic_stability,
        ]
    }

    /// Whether every property lies inside the matching profile range.
    pub fn within(&self, profile: &DiseaseProfile) -> bool {
        self.as_array()
            .iter()
            .zip(profile.ranges().iter())
            .all(|(v, r)| r.contains(*v))
    }
}

impl Summarizable for CandidateProperties {
    fn summary(&self) -> String {
        format!(
            "Tox={} BBB={} OralBA={} Sol={} MetStab={}",
            self.toxicity,
            self.bbb_penetration,
            self.oral_bioavailability,
            self.solubility,
            self.metabolic_stability,
        )
    }
}

// ---------------------------------------------------------------------------
// Sampling
// ---------------------------------------------------------------------------

fn sample_range<R: Rng + ?Sized>(rng: &mut R, range: PropertyRange) -> u32 {
    uniform_int(rng, range.min(), range.max())
}

/// Draw one independent uniform value per property.
///
/// Draw order: toxicity, BBB, oral bioavailability, solubility, metabolic stability.
pub fn sample_properties<R: Rng + ?Sized>(
    rng: &mut R,
    profile: &DiseaseProfile,
) -> CandidateProperties {
    CandidateProperties {
        toxicity: sample_range(rng, profile.toxicity),
        bbb_penetration: sample_range(rng, profile.bbb_penetration),
        oral_bioavailability: sample_range(rng, profile.oral_bioavailability),
        solubility: sample_range(rng, profile.solubility),
        metabolic_stability: sample_range(rng, profile.metabolic_stability),
    }
}

// ---------------------------------------------------------------------------
// Correlation rules
// ---------------------------------------------------------------------------

/// A single correlation rule: reads a properties value, returns the adjusted one.
pub type CorrelationRule = fn(CandidateProperties) -> CandidateProperties;

/// High BBB penetration raises metabolic stability (capped at 95).
pub fn bbb_boosts_stability(p: CandidateProperties) -> CandidateProperties {
    if p.bbb_penetration > 85 {
        CandidateProperties {
            metabolic_stability: (p.metabolic_stability + 5).min(95),
            ..p
        }
    } else {
        p
    }
}

/// High toxicity lowers metabolic stability (floored at 60).
pub fn toxicity_erodes_stability(p: CandidateProperties) -> CandidateProperties {
    if p.toxicity > 30 {
        CandidateProperties {
            metabolic_stability: p.metabolic_stability.saturating_sub(5).max(60),
            ..p
        }
    } else {
        p
    }
}

/// High solubility raises oral bioavailability (capped at 95).
pub fn solubility_boosts_bioavailability(p: CandidateProperties) -> CandidateProperties {
    if p.solubility > 80 {
        CandidateProperties {
            oral_bioavailability: (p.oral_bioavailability + 5).min(95),
            ..p
        }
    } else {
        p
    }
}

/// Low toxicity raises metabolic stability (capped at 95).
pub fn low_toxicity_boosts_stability(p: CandidateProperties) -> CandidateProperties {
    if p.toxicity < 20 {
        CandidateProperties {
            metabolic_stability: (p.metabolic_stability + 5).min(95),
            ..p
        }
    } else {
        p
    }
}

/// The correlation rules in application order.
///
/// The first and last rule both touch metabolic stability and stack when
/// both fire.
pub const CORRELATION_RULES: [CorrelationRule; 4] = [
    bbb_boosts_stability,
    toxicity_erodes_stability,
    solubility_boosts_bioavailability,
    low_toxicity_boosts_stability,
];

/// Apply [`CORRELATION_RULES`] left to right.
pub fn apply_correlations(p: CandidateProperties) -> CandidateProperties {
    CORRELATION_RULES.iter().fold(p, |acc, rule| rule(acc))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
