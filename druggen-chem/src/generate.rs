//! Batch generation: resolve, sample, correlate, score, assemble, rank.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use druggen_core::{DruggenError, Result, Summarizable};

use crate::candidate::{build_candidate, Candidate};
use crate::profile::{disease_prefix, ProfileTable};
use crate::properties::{apply_correlations, sample_properties};
use crate::rank::rank_candidates;

/// Largest batch a single call will generate.
pub const MAX_BATCH_SIZE: usize = 1_000_000;

/// Candidate generator configured with a profile table.
#[derive(Debug, Clone, Default)]
pub struct CandidateGenerator {
    pub profiles: ProfileTable,
}

impl CandidateGenerator {
    pub fn new(profiles: ProfileTable) -> Self {
        Self { profiles }
    }

    /// Generate `count` ranked candidates for `disease`.
    ///
    /// Unknown disease names use the fallback profile and the `DRG` prefix.
    ///
    /// # Errors
    ///
    /// Returns [`DruggenError::InvalidArgument`] if `count` is negative or
    /// larger than [`MAX_BATCH_SIZE`]. No randomness is consumed in that case.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: i64,
        disease: &str,
    ) -> Result<Vec<Candidate>> {
        let count = usize::try_from(count).map_err(|_| {
            DruggenError::InvalidArgument(format!("count must be non-negative, got {}", count))
        })?;
        if count > MAX_BATCH_SIZE {
            return Err(DruggenError::InvalidArgument(format!(
                "count {} exceeds the batch limit of {}",
                count, MAX_BATCH_SIZE
            )));
        }

        let profile = self.profiles.resolve(disease);
        let prefix = disease_prefix(disease);
        debug!(
            disease,
            prefix,
            count,
            matched = self.profiles.contains(disease),
            "resolved profile"
        );

        let mut candidates = Vec::with_capacity(count);
        for i in 0..count {
            let properties = apply_correlations(sample_properties(rng, profile));
            let candidate = build_candidate(rng, i, prefix, properties);
            trace!(id = %candidate.id, properties = %properties.summary(), "assembled candidate");
            candidates.push(candidate);
        }

        rank_candidates(&mut candidates);
        debug!(
            count,
            top = ?candidates.first().map(Summarizable::summary),
            "generated candidate batch"
        );
        Ok(candidates)
    }
}

/// Generate `count` ranked candidates using the built-in profiles.
pub fn generate_candidates<R: Rng + ?Sized>(
    rng: &mut R,
    count: i64,
    disease: &str,
) -> Result<Vec<Candidate>> {
    CandidateGenerator::default().generate(rng, count, disease)
}

/// [`generate_candidates`] with a `StdRng` seeded from `seed`.
pub fn generate_seeded(count: i64, disease: &str, seed: u64) -> Result<Vec<Candidate>> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_candidates(&mut rng, count, disease)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::druglikeness::{classify, drug_likeness_score, SyntheticFeasibility, ToxicityTier};
    use crate::profile::{resolve_profile, DiseaseProfile, DEFAULT_PROFILE};
    use rand::rngs::mock::StepRng;
    use std::collections::HashSet;

    fn id_shape_ok(id: &str) -> bool {
        let b = id.as_bytes();
        b.len() == 8
            && b[..3].iter().all(|c| c.is_ascii_uppercase())
            && &b[3..5] == b"-C"
            && b[5..].iter().all(|c| c.is_ascii_digit())
    }

    #[test]
    fn single_cancer_candidate() {
        let out = generate_seeded(1, "cancer", 42).unwrap();
        assert_eq!(out.len(), 1);
        let c = &out[0];
        assert_eq!(c.id, "CNC-C001");
        let p = c.properties;
        assert!((30..=45).contains(&p.toxicity));
        assert!((60..=85).contains(&p.bbb_penetration));
        assert!((75..=90).contains(&p.solubility));
        // oral may gain 5 from solubility; stability may lose 5 from toxicity
        assert!((65..=85).contains(&p.oral_bioavailability));
        assert!((65..=85).contains(&p.metabolic_stability));
        if p.toxicity > 20 {
            assert_eq!(c.toxicity, ToxicityTier::Low);
        }
    }

    #[test]
    fn cancer_exact_on_lowest_draws() {
        let out = generate_candidates(&mut StepRng::new(0, 0), 1, "Cancer").unwrap();
        let c = &out[0];
        assert_eq!(c.id, "CNC-C001");
        assert_eq!(c.properties.as_array(), [30, 60, 65, 75, 70]);
        assert_eq!(c.drug_likeness_score, 68);
        assert_eq!(c.synthetic_feasibility, SyntheticFeasibility::Moderate);
        assert_eq!(c.smiles, "c1ccccc1");
    }

    #[test]
    fn alzheimers_exact_on_highest_draws() {
        let out = generate_candidates(&mut StepRng::new(u64::MAX, 0), 1, "alzheimers").unwrap();
        let c = &out[0];
        assert_eq!(c.id, "ALZ-C001");
        // bbb 95 lifts stability (capped at 95); solubility 85 lifts oral to 95
        assert_eq!(c.properties.as_array(), [25, 95, 95, 85, 95]);
        assert_eq!(c.drug_likeness_score, 89);
        assert_eq!(c.synthetic_feasibility, SyntheticFeasibility::Easy);
        assert_eq!(
            c.key_notes,
            vec![
                "Low predicted toxicity",
                "Excellent blood-brain barrier crossing",
                "High oral bioavailability",
                "Excellent aqueous solubility",
                "High metabolic stability",
                "Favorable predicted half-life",
            ]
        );
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(generate_seeded(0, "anything", 1).unwrap().is_empty());
    }

    #[test]
    fn negative_count_rejected() {
        let err = generate_seeded(-1, "cancer", 1).unwrap_err();
        assert!(matches!(err, DruggenError::InvalidArgument(_)));
    }

    #[test]
    fn oversized_count_rejected_without_allocating() {
        for count in [i64::MAX, MAX_BATCH_SIZE as i64 + 1] {
            let err = generate_seeded(count, "cancer", 1).unwrap_err();
            assert!(matches!(err, DruggenError::InvalidArgument(_)));
            assert!(err.to_string().contains("batch limit"));
        }
    }

    #[test]
    fn oversized_count_consumes_no_draws() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(generate_candidates(&mut rng, i64::MAX, "cancer").is_err());
        let after_reject = generate_candidates(&mut rng, 3, "cancer").unwrap();
        assert_eq!(after_reject, generate_seeded(3, "cancer", 5).unwrap());
    }

    #[test]
    fn unknown_disease_uses_default() {
        let out = generate_seeded(5, "unknownxyz", 9).unwrap();
        assert_eq!(out.len(), 5);
        for c in &out {
            assert!(c.id.starts_with("DRG-C"));
            let p = c.properties;
            assert!((15..=35).contains(&p.toxicity));
            assert!((65..=90).contains(&p.bbb_penetration));
            assert!((60..=85).contains(&p.solubility));
        }
    }

    #[test]
    fn empty_name_uses_default() {
        let out = generate_seeded(3, "", 2).unwrap();
        assert!(out.iter().all(|c| c.id.starts_with("DRG-")));
    }

    #[test]
    fn batch_invariants() {
        let cases = [
            (1u64, "alzheimers"),
            (2, "parkinsons"),
            (3, "diabetes"),
            (4, "hypertension"),
            (5, "migraine"),
        ];
        for (seed, disease) in cases {
            let out = generate_seeded(50, disease, seed).unwrap();
            assert_eq!(out.len(), 50);

            let ids: HashSet<_> = out.iter().map(|c| c.id.clone()).collect();
            assert_eq!(ids.len(), 50);

            for w in out.windows(2) {
                assert!(w[0].drug_likeness_score >= w[1].drug_likeness_score);
            }
            for c in &out {
                assert!(id_shape_ok(&c.id), "bad id {}", c.id);
                assert!(c.properties.as_array().iter().all(|v| *v <= 100));
                assert_eq!(c.drug_likeness_score, drug_likeness_score(&c.properties));
                assert_eq!(c.tiers(), classify(&c.properties));
                let notes: HashSet<_> = c.key_notes.iter().collect();
                assert_eq!(notes.len(), c.key_notes.len());
            }
        }
    }

    #[test]
    fn seeded_runs_repeat() {
        let a = generate_seeded(20, "parkinsons", 77).unwrap();
        let b = generate_seeded(20, "parkinsons", 77).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn custom_profile_table() {
        let bounds = [(10, 10), (90, 90), (90, 90), (90, 90), (90, 90)];
        let fixed = DiseaseProfile::from_bounds(bounds).unwrap();
        let table = ProfileTable::builtin().with_profile("asthma", fixed).unwrap();
        let generator = CandidateGenerator::new(table);
        let out = generator.generate(&mut StdRng::seed_from_u64(3), 4, "ASTHMA").unwrap();
        for c in &out {
            assert!(c.id.starts_with("AST-C"));
            // rules 1, 3 and 4 all fire
            assert_eq!(c.properties.as_array(), [10, 90, 95, 90, 95]);
        }
        assert_eq!(resolve_profile("asthma"), DEFAULT_PROFILE);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::druglikeness::{classify, drug_likeness_score};
    use crate::profile::DISEASE_PREFIXES;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn disease_name() -> impl Strategy<Value = String> {
        prop_oneof![
            proptest::sample::select(
                DISEASE_PREFIXES.iter().map(|(k, _)| k.to_string()).collect::<Vec<_>>()
            ),
            Just("ALZHEIMERS".to_string()),
            "\\PC{0,24}",
        ]
    }

    proptest! {
        #[test]
        fn generate_does_not_panic(count in -5i64..40, name in "\\PC{0,40}", seed in any::<u64>()) {
            let _ = generate_seeded(count, &name, seed);
        }

        #[test]
        fn batch_properties_hold(count in 0i64..60, name in disease_name(), seed in any::<u64>()) {
            let out = generate_seeded(count, &name, seed).unwrap();
            prop_assert_eq!(out.len() as i64, count);

            let prefix = disease_prefix(&name);
            let ids: HashSet<&str> = out.iter().map(|c| c.id.as_str()).collect();
            prop_assert_eq!(ids.len(), out.len());

            for w in out.windows(2) {
                prop_assert!(w[0].drug_likeness_score >= w[1].drug_likeness_score);
            }
            for c in &out {
                prop_assert!(c.id.starts_with(prefix));
                prop_assert!(c.properties.as_array().iter().all(|v| *v <= 100));
                prop_assert_eq!(c.drug_likeness_score, drug_likeness_score(&c.properties));
                prop_assert_eq!(c.tiers(), classify(&c.properties));
                let notes: HashSet<&String> = c.key_notes.iter().collect();
                prop_assert_eq!(notes.len(), c.key_notes.len());
            }
        }

        #[test]
        fn negative_counts_always_rejected(count in i64::MIN..0, seed in any::<u64>()) {
            prop_assert!(generate_seeded(count, "cancer", seed).is_err());
        }

        #[test]
        fn oversized_counts_always_rejected(
            count in (MAX_BATCH_SIZE as i64 + 1)..=i64::MAX,
            seed in any::<u64>(),
        ) {
            prop_assert!(generate_seeded(count, "cancer", seed).is_err());
        }
    }
}
