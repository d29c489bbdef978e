//! Per-document weighted term frequencies.

use std::collections::BTreeMap;

/// Weighted counts for one document, keyed by token.
pub type FrequencyMap = BTreeMap<String, usize>;

/// Default weight of a heading occurrence.
pub const DEFAULT_HEADING_WEIGHT: usize = 3;
/// Default weight of a body occurrence.
pub const DEFAULT_BODY_WEIGHT: usize = 1;

/// Per-occurrence weights for the two text buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    /// Weight added for every heading occurrence.
    pub heading: usize,
    /// Weight added for every body occurrence.
    pub body: usize,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            heading: DEFAULT_HEADING_WEIGHT,
            body: DEFAULT_BODY_WEIGHT,
        }
    }
}

/// Builds the weighted frequency map for one document.
pub fn document_frequency(heading: &[String], body: &[String], weights: Weights) -> FrequencyMap {
    let mut frequency = FrequencyMap::new();
    for (tokens, weight) in [(heading, weights.heading), (body, weights.body)] {
        for token in tokens {
            *frequency.entry(token.clone()).or_insert(0) += weight;
        }
    }
    frequency
}

#[cfg(test)]
mod test {
    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn heading_once_body_twice_is_five() {
        let freq = document_frequency(
            &strings(&["hooks"]),
            &strings(&["hooks", "hooks"]),
            Weights::default(),
        );
        assert_eq!(freq["hooks"], 5);
    }

    #[test]
    fn every_token_has_positive_weight() {
        let heading = strings(&["server", "actions"]);
        let body = strings(&["server", "actions", "perform", "operations"]);
        let freq = document_frequency(&heading, &body, Weights::default());
        assert_eq!(freq.len(), 4);
        assert_eq!(freq["server"], 4);
        assert_eq!(freq["actions"], 4);
        assert_eq!(freq["perform"], 1);
        assert_eq!(freq["operations"], 1);
    }

    #[test]
    fn custom_weights() {
        let weights = Weights {
            heading: 5,
            body: 2,
        };
        let freq = document_frequency(&strings(&["cache"]), &strings(&["cache"]), weights);
        assert_eq!(freq["cache"], 7);
    }

    #[test]
    fn empty_input_is_empty_map() {
        assert!(document_frequency(&[], &[], Weights::default()).is_empty());
    }
}
