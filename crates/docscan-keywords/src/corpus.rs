//! Corpus-wide TF-IDF aggregation.
//!
//! Every document contributes `tf × idf` for each of its terms to a running total, where
//! `tf` is the raw count of the term in the document's token stream and
//!
//! ```text
//! idf(t) = 1 + ln(N / (1 + df(t)))
//! ```
//!
//! with `N` the number of documents and `df(t)` the number of documents containing `t`.
//! The leading `1` keeps the value positive even when a term occurs in every document.
//!
//! Rankings break ties by the order in which terms first appear in the corpus: documents
//! in enumeration order, heading tokens before body tokens.

use std::collections::HashMap;

use crate::{DocumentKeywords, ScoredTerm, TermCount};

/// Inverse document frequency of a term found in `document_frequency` of `documents`.
pub fn idf(documents: usize, document_frequency: usize) -> f64 {
    1.0 + (documents as f64 / (1 + document_frequency) as f64).ln()
}

/// Terms interned in first-appearance order.
#[derive(Debug, Default)]
struct Vocabulary {
    /// Terms by id.
    terms: Vec<String>,
    /// Id of each term.
    ids: HashMap<String, usize>,
}

impl Vocabulary {
    /// Returns the id of `term`, assigning the next one if it is new.
    fn intern(&mut self, term: &str) -> usize {
        if let Some(&id) = self.ids.get(term) {
            return id;
        }
        let id = self.terms.len();
        self.terms.push(term.to_string());
        self.ids.insert(term.to_string(), id);
        id
    }

    /// Returns the id of a known term.
    fn get(&self, term: &str) -> Option<usize> {
        self.ids.get(term).copied()
    }

    /// Number of distinct terms.
    fn len(&self) -> usize {
        self.terms.len()
    }
}

/// Term counts of one document, in first-appearance order.
struct TermCounts {
    /// `(term id, raw count)` pairs.
    counts: Vec<(usize, usize)>,
}

impl TermCounts {
    /// Counts a document's token stream.
    fn count(tokens: &[String], vocabulary: &mut Vocabulary) -> Self {
        let mut counts: Vec<(usize, usize)> = Vec::new();
        let mut slots: HashMap<usize, usize> = HashMap::new();
        for token in tokens {
            let id = vocabulary.intern(token);
            match slots.get(&id) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    slots.insert(id, counts.len());
                    counts.push((id, 1));
                }
            }
        }
        Self { counts }
    }
}

/// The two corpus rankings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorpusRanking {
    /// Terms by descending aggregate TF-IDF.
    pub keywords: Vec<ScoredTerm>,
    /// Terms by descending summed weight.
    pub most_frequent: Vec<TermCount>,
}

/// Ranks all terms of a corpus by TF-IDF and by summed weight.
pub fn rank_corpus(documents: &[DocumentKeywords]) -> CorpusRanking {
    if documents.is_empty() {
        return CorpusRanking::default();
    }

    let mut vocabulary = Vocabulary::default();
    let per_document: Vec<TermCounts> = documents
        .iter()
        .map(|doc| TermCounts::count(&doc.tokens, &mut vocabulary))
        .collect();

    let mut document_frequency = vec![0usize; vocabulary.len()];
    for doc in &per_document {
        for &(id, _) in &doc.counts {
            document_frequency[id] += 1;
        }
    }

    let total = documents.len();
    let mut scores = vec![0.0f64; vocabulary.len()];
    for doc in &per_document {
        for &(id, tf) in &doc.counts {
            scores[id] += tf as f64 * idf(total, document_frequency[id]);
        }
    }

    let mut weights = vec![0usize; vocabulary.len()];
    for doc in documents {
        for (term, weight) in &doc.frequency {
            if let Some(id) = vocabulary.get(term) {
                weights[id] += weight;
            }
        }
    }

    let mut by_score: Vec<usize> = (0..vocabulary.len()).collect();
    by_score.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    let mut by_weight: Vec<usize> = (0..vocabulary.len()).collect();
    by_weight.sort_by(|&a, &b| weights[b].cmp(&weights[a]));

    CorpusRanking {
        keywords: by_score
            .into_iter()
            .map(|id| ScoredTerm {
                term: vocabulary.terms[id].clone(),
                score: scores[id],
            })
            .collect(),
        most_frequent: by_weight
            .into_iter()
            .map(|id| TermCount {
                term: vocabulary.terms[id].clone(),
                count: weights[id],
            })
            .collect(),
    }
}
