use crate::core::scoring::calculate_doctor_score;
use crate::models::{DoctorProfile, DoctorRecommendation, RankingQuery, RankingWeights, SeverityTier};
use std::collections::HashSet;

/// Default number of recommendations returned
pub const DEFAULT_LIMIT: usize = 3;

/// Doctor recommendation orchestrator
///
/// # Pipeline Stages
/// 1. De-duplicate catalog entries by id (first occurrence wins)
/// 2. Score every doctor
/// 3. Stable sort by descending score
/// 4. Truncate to the requested limit
#[derive(Debug, Clone)]
pub struct DoctorRanker {
    weights: RankingWeights,
}

impl DoctorRanker {
    pub fn new(weights: RankingWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: RankingWeights::default(),
        }
    }

    pub fn weights(&self) -> &RankingWeights {
        &self.weights
    }

    /// Rank catalog doctors for a query
    ///
    /// Equal scores keep their relative catalog order.
    pub fn rank(&self, catalog: &[DoctorProfile], query: &RankingQuery) -> Vec<DoctorRecommendation> {
        let mut seen = HashSet::new();

        let mut recommendations: Vec<DoctorRecommendation> = catalog
            .iter()
            .filter(|doctor| seen.insert(doctor.id.as_str()))
            .map(|doctor| {
                let (score, reasons) = calculate_doctor_score(doctor, query, &self.weights);
                DoctorRecommendation {
                    doctor: doctor.clone(),
                    score,
                    reasons,
                }
            })
            .collect();

        // sort_by is stable, so ties stay in catalog order
        recommendations.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        recommendations.truncate(query.limit);

        recommendations
    }
}

impl Default for DoctorRanker {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Rank doctors with the default weights
pub fn rank_doctors(
    catalog: &[DoctorProfile],
    severity: Option<SeverityTier>,
    language: &str,
    location: Option<&str>,
    limit: usize,
) -> Vec<DoctorRecommendation> {
    let query = RankingQuery {
        severity,
        language: language.to_string(),
        location: location.map(|l| l.to_string()),
        limit,
    };

    DoctorRanker::with_default_weights().rank(catalog, &query)
}
