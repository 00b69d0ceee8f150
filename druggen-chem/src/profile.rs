//! Disease profiles: per-disease sampling ranges and identifier prefixes.
//!
//! A disease name is lower-cased and matched exactly against the table keys.
//! Names that do not match resolve to the default profile; this is not an
//! error and is never reported as one.

use druggen_core::{DruggenError, Result};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Inclusive integer range `[min, max]` with `0 <= min <= max <= 100`.
///
/// Only constructed through [`PropertyRange::new`]; deserialized ranges are
/// validated the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RangeBounds"))]
pub struct PropertyRange {
    min: u32,
    max: u32,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RangeBounds {
    min: u32,
    max: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RangeBounds> for PropertyRange {
    type Error = DruggenError;

    fn try_from(b: RangeBounds) -> Result<Self> {
        Self::new(b.min, b.max)
    }
}

impl PropertyRange {
    /// Create a validated range.
    ///
    /// # Errors
    ///
    /// Returns [`DruggenError::InvalidArgument`] if `min > max` or `max > 100`.
    pub fn new(min: u32, max: u32) -> Result<Self> {
        if min > max {
            return Err(DruggenError::InvalidArgument(format!(
                "range min {} exceeds max {}",
                min, max
            )));
        }
        if max > 100 {
            return Err(DruggenError::InvalidArgument(format!(
                "range max {} exceeds 100",
                max
            )));
        }
        Ok(Self { min, max })
    }

    const fn fixed(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Lower bound.
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Whether `value` lies inside the range.
    pub fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Sampling ranges for the five simulated properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DiseaseProfile {
    pub toxicity: PropertyRange,
    pub bbb_penetration: PropertyRange,
    pub oral_bioavailability: PropertyRange,
    pub solubility: PropertyRange,
    pub metabolic_stability: PropertyRange,
}

impl DiseaseProfile {
    /// Build a profile from validated ranges.
    pub fn new(
        toxicity: PropertyRange,
        bbb_penetration: PropertyRange,
        oral_bioavailability: PropertyRange,
        solubility: PropertyRange,
        metabolic_stability: PropertyRange,
    ) -> Self {
        Self {
            toxicity,
            bbb_penetration,
            oral_bioavailability,
            solubility,
            metabolic_stability,
        }
    }

    /// Build a profile from `(min, max)` pairs, validating each.
    ///
    /// Order: toxicity, BBB, oral bioavailability, solubility, metabolic stability.
    pub fn from_bounds(bounds: [(u32, u32); 5]) -> Result<Self> {
        let [t, b, o, s, m] = bounds;
        Ok(Self::new(
            PropertyRange::new(t.0, t.1)?,
            PropertyRange::new(b.0, b.1)?,
            PropertyRange::new(o.0, o.1)?,
            PropertyRange::new(s.0, s.1)?,
            PropertyRange::new(m.0, m.1)?,
        ))
    }

    const fn fixed(
        t: (u32, u32),
        b: (u32, u32),
        o: (u32, u32),
        s: (u32, u32),
        m: (u32, u32),
    ) -> Self {
        Self {
            toxicity: PropertyRange::fixed(t.0, t.1),
            bbb_penetration: PropertyRange::fixed(b.0, b.1),
            oral_bioavailability: PropertyRange::fixed(o.0, o.1),
            solubility: PropertyRange::fixed(s.0, s.1),
            metabolic_stability: PropertyRange::fixed(m.0, m.1),
        }
    }

    /// Ranges in the fixed property order.
    pub fn ranges(&self) -> [PropertyRange; 5] {
        [
            self.toxicity,
            self.bbb_penetration,
            self.oral_bioavailability,
            self.solubility,
            self.metabolic_stability,
        ]
    }
}

// ---------------------------------------------------------------------------
// Built-in tables
// ---------------------------------------------------------------------------

/// Profile used for any name without an entry.
pub const DEFAULT_PROFILE: DiseaseProfile =
    DiseaseProfile::fixed((15, 35), (65, 90), (70, 90), (60, 85), (70, 90));

const BUILTIN_PROFILES: &[(&str, DiseaseProfile)] = &[
    ("alzheimers", DiseaseProfile::fixed((10, 25), (80, 95), (75, 90), (70, 85), (80, 95))),
    ("parkinsons", DiseaseProfile::fixed((15, 30), (85, 95), (70, 85), (65, 80), (75, 90))),
    ("cancer", DiseaseProfile::fixed((30, 45), (60, 85), (65, 80), (75, 90), (70, 85))),
    ("diabetes", DiseaseProfile::fixed((10, 25), (50, 70), (85, 95), (80, 95), (80, 95))),
    ("hypertension", DiseaseProfile::fixed((10, 25), (55, 75), (80, 95), (75, 90), (75, 90))),
];

/// Disease key to candidate identifier prefix.
pub const DISEASE_PREFIXES: &[(&str, &str)] = &[
    ("alzheimers", "ALZ"),
    ("parkinsons", "PKD"),
    ("cancer", "CNC"),
    ("diabetes", "DIA"),
    ("hypertension", "HYP"),
    ("arthritis", "ART"),
    ("asthma", "AST"),
    ("depression", "DEP"),
    ("epilepsy", "EPL"),
    ("migraine", "MIG"),
];

/// Prefix for names missing from [`DISEASE_PREFIXES`].
pub const DEFAULT_PREFIX: &str = "DRG";

/// Identifier prefix for a disease name (case-insensitive exact match).
pub fn disease_prefix(disease: &str) -> &'static str {
    let key = disease.to_lowercase();
    DISEASE_PREFIXES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, p)| *p)
        .unwrap_or(DEFAULT_PREFIX)
}

// ---------------------------------------------------------------------------
// Profile table
// ---------------------------------------------------------------------------

/// Lookup table from lower-cased disease keys to profiles.
#[derive(Debug, Clone)]
pub struct ProfileTable {
    entries: Vec<(String, DiseaseProfile)>,
    fallback: DiseaseProfile,
}

impl Default for ProfileTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ProfileTable {
    /// The five built-in disease profiles plus the default fallback.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_PROFILES
                .iter()
                .map(|(k, p)| (k.to_string(), *p))
                .collect(),
            fallback: DEFAULT_PROFILE,
        }
    }

    /// Add or replace the profile for `key`. The key is stored lower-cased.
    ///
    /// # Errors
    ///
    /// Returns [`DruggenError::InvalidArgument`] for an empty key.
    pub fn with_profile(mut self, key: &str, profile: DiseaseProfile) -> Result<Self> {
        let key = key.to_lowercase();
        if key.is_empty() {
            return Err(DruggenError::InvalidArgument(
                "profile key must not be empty".into(),
            ));
        }
        match self.entries.iter().position(|(k, _)| *k == key) {
            Some(i) => self.entries[i].1 = profile,
            None => self.entries.push((key, profile)),
        }
        Ok(self)
    }

    /// Replace the fallback profile used for unmatched names.
    pub fn with_fallback(mut self, profile: DiseaseProfile) -> Self {
        self.fallback = profile;
        self
    }

    /// Resolve a disease name; unmatched names yield the fallback profile.
    pub fn resolve(&self, disease: &str) -> &DiseaseProfile {
        let key = disease.to_lowercase();
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, p)| p)
            .unwrap_or(&self.fallback)
    }

    /// Whether `disease` has its own entry.
    pub fn contains(&self, disease: &str) -> bool {
        let key = disease.to_lowercase();
        self.entries.iter().any(|(k, _)| *k == key)
    }

    /// Registered keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

/// Resolve a disease name against the built-in table.
pub fn resolve_profile(disease: &str) -> DiseaseProfile {
    let key = disease.to_lowercase();
    BUILTIN_PROFILES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, p)| *p)
        .unwrap_or(DEFAULT_PROFILE)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
