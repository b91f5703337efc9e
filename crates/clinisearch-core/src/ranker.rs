use crate::types::ScoredRecord;
use std::cmp::Ordering;

/// Sort by score descending. Equal scores keep index insertion order.
pub fn rank<'a>(mut scored: Vec<ScoredRecord<'a>>) -> Vec<ScoredRecord<'a>> {
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then(a.position.cmp(&b.position))
    });
    scored
}
