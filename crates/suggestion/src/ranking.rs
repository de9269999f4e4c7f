//! Deterministic suggestion ranking.
//!
//! Turns a normalized query and a pre-filtered candidate set into an ordered
//! top-5 list. Scoring is a fixed three-tier policy (exact, prefix,
//! substring) with frequency as the tie-breaker, so identical inputs always
//! produce identical output.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Maximum number of suggestions returned to callers.
pub const MAX_RESULTS: usize = 5;

// =============================================================================
// Types
// =============================================================================

/// A stored suggestion: normalized task text plus its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionEntry {
    pub task_text: String,

    pub frequency: u64,
}

impl SuggestionEntry {
    #[must_use]
    pub fn new(task_text: impl Into<String>, frequency: u64) -> Self {
        Self {
            task_text: task_text.into(),
            frequency,
        }
    }
}

/// A suggestion scored against a query. Exists only within one ranking call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSuggestion {
    pub task_text: String,

    pub frequency: u64,

    pub score: f64,
}

// =============================================================================
// Normalization
// =============================================================================

/// Normalizes task text for storage and matching: trim plus lowercase.
///
/// The suggestion store keys entries by this form, so `"Buy Milk "` and
/// `"buy milk"` collapse into a single counter.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

// =============================================================================
// Scoring
// =============================================================================

/// Scores a candidate against a query. Both inputs must be normalized.
///
/// - `1.0` exact match
/// - `0.8` prefix match (but not exact)
/// - `0.6` substring match (but not prefix)
/// - `0.0` no match
///
/// An empty query is a prefix of everything, so it scores every non-empty
/// candidate at `0.8`; callers relying on an empty query to mean "most
/// frequent entries first" get exactly that, because the score is then
/// uniform and frequency decides the order.
#[must_use]
pub fn match_score(query: &str, candidate: &str) -> f64 {
    if candidate == query {
        1.0
    } else if candidate.starts_with(query) {
        0.8
    } else if candidate.contains(query) {
        0.6
    } else {
        0.0
    }
}

// =============================================================================
// Ranking
// =============================================================================

/// Ranks candidates against a normalized query and keeps the top 5.
///
/// Sort key: score descending, then frequency descending. The sort is
/// stable, so candidates tied on both keys keep their input order (the
/// store returns them frequency-sorted already).
///
/// An empty candidate set produces an empty result, not an error.
#[must_use]
pub fn rank(query: &str, candidates: Vec<SuggestionEntry>) -> Vec<ScoredSuggestion> {
    let mut scored: Vec<ScoredSuggestion> = candidates
        .into_iter()
        .map(|entry| ScoredSuggestion {
            score: match_score(query, &entry.task_text),
            task_text: entry.task_text,
            frequency: entry.frequency,
        })
        .collect();

    scored.sort_by(|left, right| {
        right
            .score
            .partial_cmp(&left.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| right.frequency.cmp(&left.frequency))
    });
    scored.truncate(MAX_RESULTS);
    scored
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    mod normalize {
        use super::*;

        #[rstest]
        fn trims_and_lowercases() {
            assert_eq!(normalize("  Buy Milk "), "buy milk");
        }

        #[rstest]
        fn leaves_normalized_text_unchanged() {
            assert_eq!(normalize("buy milk"), "buy milk");
        }

        #[rstest]
        fn whitespace_only_becomes_empty() {
            assert_eq!(normalize("   "), "");
        }
    }

    mod match_score {
        use super::*;

        #[rstest]
        fn exact_match_scores_one() {
            assert_eq!(match_score("buy milk", "buy milk"), 1.0);
        }

        #[rstest]
        fn prefix_match_scores_point_eight() {
            assert_eq!(match_score("buy milk", "buy milk and eggs"), 0.8);
        }

        #[rstest]
        fn substring_match_scores_point_six() {
            assert_eq!(match_score("buy milk", "remember to buy milk"), 0.6);
        }

        #[rstest]
        fn no_match_scores_zero() {
            assert_eq!(match_score("buy milk", "walk the dog"), 0.0);
        }

        #[rstest]
        fn empty_query_scores_prefix_on_everything() {
            assert_eq!(match_score("", "anything at all"), 0.8);
        }

        #[rstest]
        fn empty_query_against_empty_candidate_is_exact() {
            assert_eq!(match_score("", ""), 1.0);
        }
    }

    mod rank {
        use super::*;

        fn entries(pairs: &[(&str, u64)]) -> Vec<SuggestionEntry> {
            pairs
                .iter()
                .map(|(text, frequency)| SuggestionEntry::new(*text, *frequency))
                .collect()
        }

        #[rstest]
        fn score_beats_frequency() {
            let candidates = entries(&[
                ("buy milk and eggs", 9),
                ("buy milk", 5),
                ("remember to buy milk", 2),
            ]);

            let ranked = rank("buy milk", candidates);

            let texts: Vec<&str> = ranked.iter().map(|s| s.task_text.as_str()).collect();
            assert_eq!(
                texts,
                vec!["buy milk", "buy milk and eggs", "remember to buy milk"]
            );

            let scores: Vec<f64> = ranked.iter().map(|s| s.score).collect();
            assert_eq!(scores, vec![1.0, 0.8, 0.6]);
        }

        #[rstest]
        fn frequency_breaks_score_ties() {
            let candidates = entries(&[("buy bread", 3), ("buy butter", 7)]);

            let ranked = rank("buy", candidates);

            assert_eq!(ranked[0].task_text, "buy butter");
            assert_eq!(ranked[1].task_text, "buy bread");
            assert_eq!(ranked[0].score, ranked[1].score);
        }

        #[rstest]
        fn truncates_to_five() {
            let candidates = entries(&[
                ("task a", 10),
                ("task b", 9),
                ("task c", 8),
                ("task d", 7),
                ("task e", 6),
                ("task f", 5),
                ("task g", 4),
            ]);

            let ranked = rank("task", candidates);

            assert_eq!(ranked.len(), MAX_RESULTS);
            assert_eq!(ranked[0].task_text, "task a");
            assert_eq!(ranked[4].task_text, "task e");
        }

        #[rstest]
        fn empty_candidates_yield_empty_result() {
            assert!(rank("buy milk", Vec::new()).is_empty());
        }

        #[rstest]
        fn empty_query_degenerates_to_frequency_order() {
            let candidates = entries(&[("walk the dog", 4), ("buy milk", 12), ("call mom", 8)]);

            let ranked = rank("", candidates);

            let texts: Vec<&str> = ranked.iter().map(|s| s.task_text.as_str()).collect();
            assert_eq!(texts, vec!["buy milk", "call mom", "walk the dog"]);
        }

        #[rstest]
        fn unmatched_candidates_sink_to_the_bottom() {
            let candidates = entries(&[("walk the dog", 100), ("buy milk", 1)]);

            let ranked = rank("milk", candidates);

            assert_eq!(ranked[0].task_text, "buy milk");
            assert_eq!(ranked[1].score, 0.0);
        }
    }

    mod properties {
        use super::*;

        fn arbitrary_entries() -> impl Strategy<Value = Vec<SuggestionEntry>> {
            prop::collection::vec(("[a-z ]{0,12}", 0_u64..1000), 0..20).prop_map(|pairs| {
                pairs
                    .into_iter()
                    .map(|(text, frequency)| SuggestionEntry::new(text, frequency))
                    .collect()
            })
        }

        proptest! {
            #[test]
            fn output_never_exceeds_five(query in "[a-z ]{0,8}", candidates in arbitrary_entries()) {
                prop_assert!(rank(&query, candidates).len() <= MAX_RESULTS);
            }

            #[test]
            fn output_is_sorted_by_score_then_frequency(
                query in "[a-z ]{0,8}",
                candidates in arbitrary_entries(),
            ) {
                let ranked = rank(&query, candidates);
                for window in ranked.windows(2) {
                    let (first, second) = (&window[0], &window[1]);
                    prop_assert!(
                        first.score > second.score
                            || (first.score == second.score && first.frequency >= second.frequency)
                    );
                }
            }

            #[test]
            fn ranking_is_deterministic(query in "[a-z ]{0,8}", candidates in arbitrary_entries()) {
                prop_assert_eq!(
                    rank(&query, candidates.clone()),
                    rank(&query, candidates)
                );
            }
        }
    }
}
