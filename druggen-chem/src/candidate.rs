//! Candidate records and their assembly.

use rand::Rng;

use druggen_core::random::uniform01;
use druggen_core::{Scored, Summarizable};

use crate::annotation::key_notes;
use crate::druglikeness::{
    classify, drug_likeness_score, BbbTier, BioavailabilityTier, SyntheticFeasibility,
    ToxicityTier, Tiers,
};
use crate::properties::{CandidateProperties, PROPERTY_LABELS};
use crate::structure::generate_structure;

/// One generated drug candidate. Not modified after assembly.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Candidate {
    pub id: String,
    pub drug_likeness_score: u32,
    pub toxicity: ToxicityTier,
    pub bbb_penetration: BbbTier,
    pub oral_bioavailability: BioavailabilityTier,
    pub synthetic_feasibility: SyntheticFeasibility,
    pub smiles: String,
    pub key_notes: Vec<String>,
    pub properties: CandidateProperties,
}

impl Candidate {
    /// Stored tiers.
    pub fn tiers(&self) -> Tiers {
        Tiers {
            toxicity: self.toxicity,
            bbb_penetration: self.bbb_penetration,
            oral_bioavailability: self.oral_bioavailability,
        }
    }

    /// Property values paired with their display labels, in radar-chart order.
    pub fn radar(&self) -> [(&'static str, u32); 5] {
        let values = self.properties.as_array();
        let mut out = [("", 0u32); 5];
        for (slot, (label, value)) in out.iter_mut().zip(PROPERTY_LABELS.iter().zip(values)) {
            *slot = (*label, value);
        }
        out
    }
}

impl Scored for Candidate {
    fn score(&self) -> u32 {
        self.drug_likeness_score
    }
}

impl Summarizable for Candidate {
    fn summary(&self) -> String {
        format!(
            "{} score={} tox={} bbb={} oral={} {}",
            self.id,
            self.drug_likeness_score,
            self.toxicity,
            self.bbb_penetration,
            self.oral_bioavailability,
            self.synthetic_feasibility,
        )
    }
}

/// Candidate identifier: `<PREFIX>-C<seq>` with 1-based `seq` padded to three digits.
pub fn candidate_id(prefix: &str, index: usize) -> String {
    format!("{}-C{:03}", prefix, index + 1)
}

/// Assemble one candidate from final (post-correlation) properties.
///
/// Consumes one feasibility draw, then the structure draws, then the note draws.
pub fn build_candidate<R: Rng + ?Sized>(
    rng: &mut R,
    index: usize,
    prefix: &str,
    properties: CandidateProperties,
) -> Candidate {
    let tiers = classify(&properties);
    let synthetic_feasibility = SyntheticFeasibility::from_draw(uniform01(rng));
    let smiles = generate_structure(rng);
    let key_notes = key_notes(rng, &properties);

    Candidate {
        id: candidate_id(prefix, index),
        drug_likeness_score: drug_likeness_score(&properties),
        toxicity: tiers.toxicity,
        bbb_penetration: tiers.bbb_penetration,
        oral_bioavailability: tiers.oral_bioavailability,
        synthetic_feasibility,
        smiles,
        key_notes,
        properties,
    }
}
