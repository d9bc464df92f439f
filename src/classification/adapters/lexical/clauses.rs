//! Clause-level dependency approximation.
//!
//! Text is cut into clauses at punctuation and before contrastive
//! conjunctions. The first content word of a clause becomes its root and
//! every other token of the clause attaches to it, so auxiliaries and
//! negators end up as siblings of the words they modify.

use super::tokenizer::is_punctuation;
use std::ops::Range;

/// Conjunctions that open a new clause.
const CLAUSE_OPENERS: &[&str] = &["but", "however", "although", "though", "yet"];

/// Lemmas that never head a clause.
const FUNCTION_WORDS: &[&str] = &[
    "be", "do", "have", "will", "would", "shall", "should", "can", "could", "may", "might",
    "must", "not", "no", "never", "please", "kindly", "just", "also", "really", "very", "i",
    "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my", "your",
    "his", "its", "our", "their", "this", "that", "these", "those", "the", "a", "an", "and",
    "or", "but", "however", "although", "though", "yet", "so", "to", "there", "here", "if",
    "then",
];

/// Returns the head index of every token, in token order.
pub(super) fn attach_heads(lemmas: &[String]) -> Vec<usize> {
    split_clauses(lemmas)
        .into_iter()
        .flat_map(|clause| {
            let root = clause_root(lemmas, &clause);
            clause.map(move |_| root)
        })
        .collect()
}

fn split_clauses(lemmas: &[String]) -> Vec<Range<usize>> {
    let mut clauses = Vec::new();
    let mut start = 0;
    for (index, lemma) in lemmas.iter().enumerate() {
        if index > start && CLAUSE_OPENERS.contains(&lemma.as_str()) {
            clauses.push(start..index);
            start = index;
        }
        if is_punctuation(lemma) {
            clauses.push(start..index + 1);
            start = index + 1;
        }
    }
    if start < lemmas.len() {
        clauses.push(start..lemmas.len());
    }
    clauses
}

fn clause_root(lemmas: &[String], clause: &Range<usize>) -> usize {
    let members = || {
        lemmas
            .iter()
            .enumerate()
            .skip(clause.start)
            .take(clause.len())
            .filter(|(_, lemma)| !is_punctuation(lemma))
    };
    members()
        .find(|(_, lemma)| !FUNCTION_WORDS.contains(&lemma.as_str()))
        .or_else(|| members().next())
        .map_or(clause.start, |(index, _)| index)
}
