//! TF-IDF vector space over recipe ingredient text.
//!
//! Each recipe's raw `ingredients` field is one document. Tokens are runs of
//! two or more word characters, lower-cased, with English stop words
//! removed. Weights use raw term counts and the smoothed inverse document
//! frequency `ln((1 + N) / (1 + df)) + 1`; every vector is L2 normalized.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{RecommendError, RecommendResult};
use crate::stop_words::is_stop_word;

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"));

/// Split text into vocabulary candidates.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|term| !is_stop_word(term))
        .map(str::to_string)
        .collect()
}

/// Sparse vector with entries sorted by term index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    fn from_counts(counts: BTreeMap<usize, f64>) -> Self {
        let mut entries: Vec<(usize, f64)> = counts.into_iter().collect();
        let norm = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, weight) in &mut entries {
                *weight /= norm;
            }
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|(_, w)| *w == 0.0)
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a, wa) = self.entries[i];
            let (b, wb) = other.entries[j];
            match a.cmp(&b) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += wa * wb;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Cosine similarity; zero vectors score `0` against everything.
    pub fn cosine(&self, other: &SparseVector) -> f64 {
        let denom = self.norm() * other.norm();
        if denom == 0.0 {
            return 0.0;
        }
        self.dot(other) / denom
    }
}

/// Fitted term dictionary plus one weighted vector per document.
#[derive(Debug, Clone, Default)]
pub struct IngredientVectorSpace {
    terms: HashMap<String, usize>,
    idf: Vec<f64>,
    documents: Vec<SparseVector>,
}

impl IngredientVectorSpace {
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> RecommendResult<Self> {
        if documents.is_empty() {
            return Err(RecommendError::EmptyCatalog);
        }

        let tokenized: Vec<Vec<String>> =
            documents.iter().map(|doc| tokenize(doc.as_ref())).collect();

        let dictionary: BTreeSet<&str> = tokenized
            .iter()
            .flat_map(|tokens| tokens.iter().map(String::as_str))
            .collect();
        if dictionary.is_empty() {
            return Err(RecommendError::EmptyVocabulary);
        }

        let terms: HashMap<String, usize> = dictionary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.to_string(), i))
            .collect();

        let mut df = vec![0usize; terms.len()];
        for tokens in &tokenized {
            let seen: BTreeSet<usize> = tokens.iter().map(|t| terms[t]).collect();
            for index in seen {
                df[index] += 1;
            }
        }

        let n_docs = documents.len() as f64;
        let idf: Vec<f64> = df
            .iter()
            .map(|&d| ((1.0 + n_docs) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        let mut space = Self {
            terms,
            idf,
            documents: Vec::with_capacity(tokenized.len()),
        };
        space.documents = tokenized
            .iter()
            .map(|tokens| space.weigh(tokens))
            .collect();

        tracing::debug!(
            documents = space.documents.len(),
            terms = space.terms.len(),
            "Ingredient vector space fitted"
        );

        Ok(space)
    }

    /// Vectorize query text with the fitted dictionary. Unknown terms are
    /// dropped, so a query made only of unknown terms is the zero vector.
    pub fn transform(&self, text: &str) -> SparseVector {
        self.weigh(&tokenize(text))
    }

    fn weigh(&self, tokens: &[String]) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for token in tokens {
            if let Some(&index) = self.terms.get(token) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }
        for (index, weight) in counts.iter_mut() {
            *weight *= self.idf[*index];
        }
        SparseVector::from_counts(counts)
    }

    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    pub fn document(&self, index: usize) -> Option<&SparseVector> {
        self.documents.get(index)
    }

    /// Cosine similarity of `query` against every document, in document order.
    pub fn similarities(&self, query: &SparseVector) -> Vec<f64> {
        self.documents.iter().map(|doc| query.cosine(doc)).collect()
    }
}
