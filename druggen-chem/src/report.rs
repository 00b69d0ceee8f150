//! Discovery runs: a validated request turned into ranked candidates plus
//! screening metrics.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use druggen_core::{DruggenError, Result};

use crate::candidate::Candidate;
use crate::generate::CandidateGenerator;
use crate::request::{AdministrationRoute, DesiredProperty, DiscoveryRequest};
use crate::screening::{simulate_screening, ScreeningConfig, ScreeningMetrics};

/// Results of one discovery run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DiscoveryReport {
    pub disease: String,
    pub administration_route: AdministrationRoute,
    pub desired_properties: Vec<DesiredProperty>,
    pub total_molecules: u32,
    pub top_candidates: usize,
    pub candidates: Vec<Candidate>,
    pub system_metrics: ScreeningMetrics,
}

impl DiscoveryReport {
    /// Look up a candidate by id.
    pub fn find_candidate(&self, id: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }

    /// `(id, score)` pairs in ranked order.
    pub fn score_series(&self) -> Vec<(String, u32)> {
        self.candidates
            .iter()
            .map(|c| (c.id.clone(), c.drug_likeness_score))
            .collect()
    }

    /// Screening funnel stages.
    pub fn funnel(&self) -> [(&'static str, u32); 4] {
        self.system_metrics.funnel()
    }
}

/// Run discovery for `request`.
///
/// Candidates are drawn first, then the screening metrics, from the same
/// generator.
///
/// # Errors
///
/// Propagates request validation and screening configuration errors.
pub fn run_discovery<R: Rng + ?Sized>(
    rng: &mut R,
    generator: &CandidateGenerator,
    request: &DiscoveryRequest,
    screening: &ScreeningConfig,
) -> Result<DiscoveryReport> {
    request.validate()?;
    let count = i64::try_from(request.batch_size.count()).map_err(|_| {
        DruggenError::InvalidArgument(format!("batch size {} out of range", request.batch_size))
    })?;
    let candidates = generator.generate(rng, count, &request.disease_name)?;
    let system_metrics = simulate_screening(rng, screening, candidates.len())?;

    info!(
        disease = %request.disease_name,
        route = request.administration_route.value(),
        candidates = candidates.len(),
        "discovery run complete"
    );

    Ok(DiscoveryReport {
        disease: request.disease_name.clone(),
        administration_route: request.administration_route,
        desired_properties: request.drug_properties.clone(),
        total_molecules: system_metrics.total_molecules_screened,
        top_candidates: candidates.len(),
        candidates,
        system_metrics,
    })
}

/// [`run_discovery`] with default configuration and a seeded `StdRng`.
pub fn run_discovery_seeded(request: &DiscoveryRequest, seed: u64) -> Result<DiscoveryReport> {
    let mut rng = StdRng::seed_from_u64(seed);
    run_discovery(
        &mut rng,
        &CandidateGenerator::default(),
        request,
        &ScreeningConfig::default(),
    )
}
