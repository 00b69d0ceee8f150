//! Simulated screening funnel reported alongside a candidate batch.

use rand::Rng;

use druggen_core::random::uniform_int;
use druggen_core::{DruggenError, Result};

/// Funnel stage labels in display order.
pub const FUNNEL_LABELS: [&str; 4] = ["Total Screened", "Drug-Likeness", "Toxicity", "BBB"];

const PASSED_DRUG_LIKENESS: (u32, u32) = (300, 499);
const FILTERED_BY_TOXICITY: (u32, u32) = (200, 299);
const FILTERED_BY_BBB: (u32, u32) = (100, 149);

/// Screening simulation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreeningConfig {
    /// Molecules nominally screened. Must cover the largest drug-likeness stage.
    pub total_screened: u32,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            total_screened: 1000,
        }
    }
}

/// Simulated counts per screening stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScreeningMetrics {
    pub total_molecules_screened: u32,
    pub passed_drug_likeness: u32,
    pub filtered_by_toxicity: u32,
    pub filtered_by_bbb: u32,
    pub top_candidates_selected: u32,
}

impl ScreeningMetrics {
    /// Stage counts paired with [`FUNNEL_LABELS`].
    pub fn funnel(&self) -> [(&'static str, u32); 4] {
        [
            (FUNNEL_LABELS[0], self.total_molecules_screened),
            (FUNNEL_LABELS[1], self.passed_drug_likeness),
            (FUNNEL_LABELS[2], self.filtered_by_toxicity),
            (FUNNEL_LABELS[3], self.filtered_by_bbb),
        ]
    }
}

/// Draw one set of funnel counts.
///
/// # Errors
///
/// Returns [`DruggenError::InvalidArgument`] if `total_screened` is smaller
/// than the largest possible drug-likeness count.
pub fn simulate_screening<R: Rng + ?Sized>(
    rng: &mut R,
    config: &ScreeningConfig,
    selected: usize,
) -> Result<ScreeningMetrics> {
    if config.total_screened < PASSED_DRUG_LIKENESS.1 + 1 {
        return Err(DruggenError::InvalidArgument(format!(
            "total_screened must be at least {}, got {}",
            PASSED_DRUG_LIKENESS.1 + 1,
            config.total_screened
        )));
    }
    let top_candidates_selected = u32::try_from(selected).map_err(|_| {
        DruggenError::InvalidArgument(format!("selected count {} too large", selected))
    })?;

    Ok(ScreeningMetrics {
        total_molecules_screened: config.total_screened,
        passed_drug_likeness: uniform_int(rng, PASSED_DRUG_LIKENESS.0, PASSED_DRUG_LIKENESS.1),
        filtered_by_toxicity: uniform_int(rng, FILTERED_BY_TOXICITY.0, FILTERED_BY_TOXICITY.1),
        filtered_by_bbb: uniform_int(rng, FILTERED_BY_BBB.0, FILTERED_BY_BBB.1),
        top_candidates_selected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn bounds_on_extreme_draws() {
        let config = ScreeningConfig::default();
        let lo = simulate_screening(&mut StepRng::new(0, 0), &config, 5).unwrap();
        assert_eq!(
            lo.funnel(),
            [("Total Screened", 1000), ("Drug-Likeness", 300), ("Toxicity", 200), ("BBB", 100)]
        );
        let hi = simulate_screening(&mut StepRng::new(u64::MAX, 0), &config, 5).unwrap();
        assert_eq!(hi.passed_drug_likeness, 499);
        assert_eq!(hi.filtered_by_toxicity, 299);
        assert_eq!(hi.filtered_by_bbb, 149);
        assert_eq!(hi.top_candidates_selected, 5);
    }

    #[test]
    fn funnel_is_monotone() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..100 {
            let m = simulate_screening(&mut rng, &ScreeningConfig::default(), 20).unwrap();
            let counts: Vec<u32> = m.funnel().iter().map(|(_, n)| *n).collect();
            assert!(counts.windows(2).all(|w| w[0] >= w[1]), "{:?}", counts);
        }
    }

    #[test]
    fn rejects_small_total() {
        let cfg = ScreeningConfig { total_screened: 400 };
        assert!(matches!(
            simulate_screening(&mut StepRng::new(0, 0), &cfg, 1),
            Err(DruggenError::InvalidArgument(_))
        ));
        let cfg = ScreeningConfig { total_screened: 500 };
        assert!(simulate_screening(&mut StepRng::new(0, 0), &cfg, 1).is_ok());
    }
}
