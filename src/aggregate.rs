//! Roster Aggregation
//!
//! Quota and status counts derived from the roster in a single pass.

use crate::models::Candidate;
use crate::normalize::is_ppi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CandidateCounts {
    /// Women whose status is "Filiado"
    pub female_affiliated: usize,
    pub confirmed: usize,
    pub negotiation: usize,
    /// Self-declared Preta, Parda or Indígena
    pub ppi: usize,
}

impl CandidateCounts {
    /// Women still needed to reach `quota`
    pub fn missing_women(&self, quota: usize) -> usize {
        quota.saturating_sub(self.female_affiliated)
    }
}

/// Count the real candidates in `roster`. Rows without a server id and the
/// placeholder row are skipped.
pub fn count_candidates(roster: &[Candidate]) -> CandidateCounts {
    roster
        .iter()
        .filter(|candidate| candidate.real_id().is_some())
        .fold(CandidateCounts::default(), |mut acc, candidate| {
            let gender = candidate.gender.trim().to_lowercase();
            let status = candidate.status.trim().to_lowercase();

            if gender == "feminino" && status == "filiado" {
                acc.female_affiliated += 1;
            }

            if status == "filiado" {
                acc.confirmed += 1;
            } else if status == "em negociação" {
                acc.negotiation += 1;
            }

            if is_ppi(&candidate.race) {
                acc.ppi += 1;
            }

            acc
        })
}
