//! Composite drug-likeness score and categorical tiers.
//!
//! All functions here are pure and read the post-correlation properties.

use std::fmt;

use crate::properties::CandidateProperties;

// ---------------------------------------------------------------------------
// Composite score
// ---------------------------------------------------------------------------

/// Composite drug-likeness score.
///
/// `floor((100 - toxicity + bbb + oral + solubility + stability) / 5)`.
/// With properties in `[0, 100]` the result lies in `[0, 100]`.
pub fn drug_likeness_score(p: &CandidateProperties) -> u32 {
    let sum = 100 - p.toxicity.min(100)
        + p.bbb_penetration
        + p.oral_bioavailability
        + p.solubility
        + p.metabolic_stability;
    sum / 5
}

// ---------------------------------------------------------------------------
// Tiers
// ---------------------------------------------------------------------------

macro_rules! labelled_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:tt),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $(
                #[cfg_attr(feature = "serde", serde(rename = $label))]
                $variant,
            )+
        }

        impl $name {
            /// Display label.
            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

labelled_enum! {
    /// Toxicity tier: "Very Low" at or below 20, otherwise "Low".
    ToxicityTier { VeryLow => "Very Low", Low => "Low" }
}

labelled_enum! {
    /// BBB penetration tier.
    BbbTier { High => "High", Moderate => "Moderate", Low => "Low" }
}

labelled_enum! {
    /// Oral bioavailability tier.
    BioavailabilityTier { High => "High", Moderate => "Moderate" }
}

labelled_enum! {
    /// Simulated ease of synthesis. Not derived from structure.
    SyntheticFeasibility { Easy => "Easy to synthesize", Moderate => "Moderate synthesis" }
}

impl ToxicityTier {
    pub fn classify(toxicity: u32) -> Self {
        if toxicity <= 20 {
            Self::VeryLow
        } else {
            Self::Low
        }
    }
}

impl BbbTier {
    pub fn classify(bbb: u32) -> Self {
        if bbb >= 85 {
            Self::High
        } else if bbb >= 75 {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

impl BioavailabilityTier {
    pub fn classify(oral: u32) -> Self {
        if oral >= 90 {
            Self::High
        } else {
            Self::Moderate
        }
    }
}

/// Draws strictly above this value label a candidate easy to synthesize (p = 0.7).
pub const EASY_SYNTHESIS_THRESHOLD: f64 = 0.3;

impl SyntheticFeasibility {
    /// Map a uniform draw in `[0, 1)` to a label.
    pub fn from_draw(u: f64) -> Self {
        if u > EASY_SYNTHESIS_THRESHOLD {
            Self::Easy
        } else {
            Self::Moderate
        }
    }
}

/// The three property-derived tiers of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tiers {
    pub toxicity: ToxicityTier,
    pub bbb_penetration: BbbTier,
    pub oral_bioavailability: BioavailabilityTier,
}

/// Classify all three tiers from final properties.
pub fn classify(p: &CandidateProperties) -> Tiers {
    Tiers {
        toxicity: ToxicityTier::classify(p.toxicity),
        bbb_penetration: BbbTier::classify(p.bbb_penetration),
        oral_bioavailability: BioavailabilityTier::classify(p.oral_bioavailability),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
