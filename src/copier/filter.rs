//! Result filtering and deduplication
//!
//! Every resolved artifact passes through the filter before any copy side
//! effect: artifacts with an excluded classifier are dropped (and never
//! marked done), already-seen identities are silent no-ops, and accepted
//! identities are recorded before the copy so an identity recurring later in
//! the same run cannot be copied twice.

use std::collections::HashSet;

use crate::coordinate::Coordinate;

/// Identity key of an artifact within one run
///
/// The original implementation concatenated the artifact id with itself
/// instead of group + artifact; that collapses distinct groups with the same
/// artifact id into one identity. Corrected here, see DESIGN.md.
pub fn identity_key(coordinate: &Coordinate) -> String {
    let mut key = format!(
        "{}:{}:{}",
        coordinate.group_id, coordinate.artifact_id, coordinate.version
    );
    if let Some(ref classifier) = coordinate.classifier {
        key.push(':');
        key.push_str(classifier);
    }
    key
}

/// What to do with one resolved artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Classifier is excluded; not copied, not marked done
    Excluded,
    /// Identity already copied in this run
    AlreadyCopied,
    /// Forward to the materializer
    Copy,
}

/// Run-scoped filter holding the exclusion set and the seen-set
#[derive(Debug)]
pub struct ResultFilter {
    exclude_classifiers: HashSet<String>,
    seen: HashSet<String>,
}

impl ResultFilter {
    pub fn new(exclude_classifiers: &[String]) -> Self {
        Self {
            exclude_classifiers: exclude_classifiers.iter().cloned().collect(),
            seen: HashSet::new(),
        }
    }

    /// Decide the disposition of one artifact, recording accepted identities
    pub fn check(&mut self, coordinate: &Coordinate) -> Disposition {
        if let Some(ref classifier) = coordinate.classifier {
            if !classifier.is_empty() && self.exclude_classifiers.contains(classifier) {
                return Disposition::Excluded;
            }
        }

        // Insert before the copy side effect so a recurring identity is
        // deduplicated even if the copy itself soft-fails
        if self.seen.insert(identity_key(coordinate)) {
            Disposition::Copy
        } else {
            Disposition::AlreadyCopied
        }
    }
}
