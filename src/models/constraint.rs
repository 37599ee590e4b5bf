//! Pairwise relational constraints and their canonical index.
//!
//! A relation ties two students together with a kind: `Avoid` pairs should
//! sit apart, `Prefer` pairs should sit close. Relations are unordered, so
//! `(a, b)` and `(b, a)` collapse to the same [`StudentPair`] key.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

use super::StudentId;

/// Kind of pairwise relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    /// Penalize the pair for sitting close together.
    Avoid,
    /// Reward the pair for sitting close together.
    Prefer,
}

/// A relation between exactly two students.
///
/// Wire form: `{"students": [id, id], "type": "avoid" | "prefer"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    /// The two related students, in caller order.
    pub students: [StudentId; 2],
    /// Relation kind.
    #[serde(rename = "type")]
    pub kind: RelationKind,
}

impl Relation {
    /// Creates an avoid relation.
    pub fn avoid(a: impl Into<StudentId>, b: impl Into<StudentId>) -> Self {
        Self {
            students: [a.into(), b.into()],
            kind: RelationKind::Avoid,
        }
    }

    /// Creates a prefer relation.
    pub fn prefer(a: impl Into<StudentId>, b: impl Into<StudentId>) -> Self {
        Self {
            students: [a.into(), b.into()],
            kind: RelationKind::Prefer,
        }
    }

    /// Canonical (sorted) pair key.
    pub fn pair(&self) -> StudentPair {
        let [a, b] = &self.students;
        StudentPair::new(a.clone(), b.clone())
    }
}

/// Unordered student pair, stored sorted so that equal pairs compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StudentPair {
    first: StudentId,
    second: StudentId,
}

impl StudentPair {
    /// Creates the canonical pair for `a` and `b`.
    pub fn new(a: StudentId, b: StudentId) -> Self {
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    /// Smaller id of the pair.
    pub fn first(&self) -> &StudentId {
        &self.first
    }

    /// Larger id of the pair.
    pub fn second(&self) -> &StudentId {
        &self.second
    }
}

/// Canonicalized avoid and prefer pair sets.
///
/// No existence check is made against the student list here; pairs naming
/// unknown students simply never score. Use [`ConstraintIndex::unknown_references`]
/// to find them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstraintIndex {
    avoid_pairs: BTreeSet<StudentPair>,
    prefer_pairs: BTreeSet<StudentPair>,
}

impl ConstraintIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index from relation records.
    pub fn from_relations(relations: &[Relation]) -> Self {
        let mut index = Self::new();
        for relation in relations {
            index.add(relation);
        }
        index
    }

    /// Inserts one relation. Repeats of an existing pair are ignored.
    pub fn add(&mut self, relation: &Relation) {
        let pair = relation.pair();
        match relation.kind {
            RelationKind::Avoid => self.avoid_pairs.insert(pair),
            RelationKind::Prefer => self.prefer_pairs.insert(pair),
        };
    }

    /// Avoid pairs in canonical order.
    pub fn avoid_pairs(&self) -> impl Iterator<Item = &StudentPair> {
        self.avoid_pairs.iter()
    }

    /// Prefer pairs in canonical order.
    pub fn prefer_pairs(&self) -> impl Iterator<Item = &StudentPair> {
        self.prefer_pairs.iter()
    }

    /// Number of distinct avoid pairs.
    pub fn avoid_count(&self) -> usize {
        self.avoid_pairs.len()
    }

    /// Number of distinct prefer pairs.
    pub fn prefer_count(&self) -> usize {
        self.prefer_pairs.len()
    }

    /// Whether no pairs are indexed.
    pub fn is_empty(&self) -> bool {
        self.avoid_pairs.is_empty() && self.prefer_pairs.is_empty()
    }

    /// Ids referenced by some pair but absent from `known`, sorted and deduplicated.
    pub fn unknown_references(&self, known: &HashSet<&StudentId>) -> Vec<StudentId> {
        let unknown: BTreeSet<&StudentId> = self
            .avoid_pairs
            .iter()
            .chain(self.prefer_pairs.iter())
            .flat_map(|p| [&p.first, &p.second])
            .filter(|id| !known.contains(id))
            .collect();
        unknown.into_iter().cloned().collect()
    }
}
