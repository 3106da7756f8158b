//! Video selection heuristic
//!
//! Picks one candidate from an ordered search result list in a single
//! pass: the first title containing a priority keyword wins, otherwise the
//! first candidate is taken unconditionally. An empty list is reported as
//! its own outcome so the caller can fall back to a generated suggestion.

use crate::services::VideoCandidate;

/// Title substrings that mark a candidate as lecture-style content
const PRIORITY_KEYWORDS: [&str; 3] = ["lecture", "tutorial", "course"];

/// Outcome of scanning an ordered candidate list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// First candidate whose title contains a priority keyword
    KeywordMatch(VideoCandidate),
    /// No title matched a keyword; first candidate returned unconditionally
    FirstResult(VideoCandidate),
    /// The candidate list was empty (distinct from a search error)
    NoCandidates,
}

/// Select one candidate from `candidates`.
///
/// Deterministic and order-preserving: for a given input list the same
/// candidate is always chosen, with no scoring beyond first-match-wins.
pub fn select_candidate(candidates: &[VideoCandidate]) -> Selection {
    for candidate in candidates {
        let title = candidate.title.to_lowercase();
        if PRIORITY_KEYWORDS.iter().any(|keyword| title.contains(keyword)) {
            return Selection::KeywordMatch(candidate.clone());
        }
    }

    match candidates.first() {
        Some(first) => Selection::FirstResult(first.clone()),
        None => Selection::NoCandidates,
    }
}
