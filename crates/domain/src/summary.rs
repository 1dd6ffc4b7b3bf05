use crate::resolution::ResolutionResult;
use serde::Serialize;

/// Success/failure tally over a batch of lookups.
///
/// Always derived from the results it describes, so
/// `successful + failed` equals the number of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ResolutionSummary {
    pub successful: usize,
    pub failed: usize,
}

impl ResolutionSummary {
    pub fn from_results(results: &[ResolutionResult]) -> Self {
        let successful = results.iter().filter(|r| r.is_resolved()).count();
        Self {
            successful,
            failed: results.len() - successful,
        }
    }

    pub fn total(&self) -> usize {
        self.successful + self.failed
    }
}
