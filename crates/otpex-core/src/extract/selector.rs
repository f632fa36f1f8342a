//! Candidate selection: scoring the pool and picking one best answer.

use tracing::debug;

use crate::models::{Candidate, ExtractionResult, ScoredCandidate};

use super::scorer::ConfidenceScorer;

/// Score every candidate against the original text and pick the best.
///
/// Ties break to the first candidate reaching the maximum, in
/// generation order (pattern order, then left-to-right), so the result
/// is deterministic for identical input. Exact-duplicate values score
/// identically and therefore can never displace their first
/// occurrence; the audit list keeps every raw entry.
pub fn select(
    candidates: Vec<Candidate>,
    text: &str,
    scorer: &ConfidenceScorer,
    with_audit: bool,
) -> ExtractionResult {
    if candidates.is_empty() {
        return ExtractionResult::none();
    }

    let scored: Vec<ScoredCandidate> = candidates
        .into_iter()
        .map(|candidate| {
            let (confidence, signals) = scorer.score_with_signals(text, &candidate.value);
            ScoredCandidate {
                candidate,
                confidence,
                signals,
            }
        })
        .collect();

    let mut best = 0;
    for (index, entry) in scored.iter().enumerate().skip(1) {
        if entry.confidence > scored[best].confidence {
            best = index;
        }
    }

    debug!(
        otp = %scored[best].candidate.value,
        confidence = scored[best].confidence,
        pool = scored.len(),
        "selected candidate"
    );

    ExtractionResult {
        otp: Some(scored[best].candidate.value.clone()),
        confidence: round2(scored[best].confidence),
        method: scored[best].candidate.origin,
        all_candidates: with_audit.then_some(scored),
    }
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
