//! Synthetic drug-candidate generation and ranking.
//!
//! Given a disease name and a count, produces a ranked batch of simulated
//! candidates: five correlated properties sampled from disease-keyed ranges,
//! a composite drug-likeness score, categorical tiers, a pseudo-SMILES
//! structure string and human-readable notes. Nothing here is real
//! cheminformatics; outputs are simulated and reproducible for a given
//! random generator.
//!
//! # Example
//!
//! ```
//! use druggen_chem::generate_seeded;
//!
//! let batch = generate_seeded(3, "cancer", 42).unwrap();
//! assert_eq!(batch.len(), 3);
//! assert!(batch.iter().all(|c| c.id.starts_with("CNC-C")));
//! assert!(batch.windows(2).all(|w| w[0].drug_likeness_score >= w[1].drug_likeness_score));
//!
//! // negative counts are rejected, unknown diseases are not
//! assert!(generate_seeded(-1, "cancer", 42).is_err());
//! assert!(generate_seeded(2, "Alzheimer's Disease", 42).unwrap()[0].id.starts_with("DRG-"));
//! ```

pub mod annotation;
pub mod candidate;
pub mod druglikeness;
pub mod generate;
pub mod profile;
pub mod properties;
pub mod rank;
pub mod report;
pub mod request;
pub mod screening;
pub mod structure;

pub use annotation::{key_notes, threshold_notes, STRUCTURAL_NOTES};
pub use candidate::{build_candidate, candidate_id, Candidate};
pub use druglikeness::{
    classify, drug_likeness_score, BbbTier, BioavailabilityTier, SyntheticFeasibility,
    ToxicityTier, Tiers,
};
pub use generate::{generate_candidates, generate_seeded, CandidateGenerator, MAX_BATCH_SIZE};
pub use profile::{
    disease_prefix, resolve_profile, DiseaseProfile, ProfileTable, PropertyRange,
    DEFAULT_PREFIX, DEFAULT_PROFILE, DISEASE_PREFIXES,
};
pub use properties::{
    apply_correlations, sample_properties, CandidateProperties, CORRELATION_RULES,
    PROPERTY_LABELS,
};
pub use rank::{is_ranked, rank_candidates};
pub use report::{run_discovery, run_discovery_seeded, DiscoveryReport};
pub use request::{AdministrationRoute, BatchSize, DesiredProperty, DiscoveryRequest};
pub use screening::{simulate_screening, ScreeningConfig, ScreeningMetrics, FUNNEL_LABELS};
pub use structure::generate_structure;
