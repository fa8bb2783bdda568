//! Deterministic ordering of a result list.

use super::result::{ResultKind, SearchResult};
use std::cmp::Ordering;

/// Sorts results in place.
///
/// Create-note first, then open-note results by label (ordinal), then other
/// actionable results, then hints. The sort is stable, so results that compare
/// equal keep their input order.
///
/// Note results and command results never share a list, so placing open-note
/// results ahead of commands only keeps the order total.
pub fn rank(results: &mut [SearchResult]) {
    results.sort_by(compare);
}

fn compare(a: &SearchResult, b: &SearchResult) -> Ordering {
    tier(a.kind()).cmp(&tier(b.kind())).then_with(|| {
        if a.kind() == ResultKind::OpenNote && b.kind() == ResultKind::OpenNote {
            a.label().cmp(b.label())
        } else {
            Ordering::Equal
        }
    })
}

fn tier(kind: ResultKind) -> u8 {
    match kind {
        ResultKind::CreateNote => 0,
        ResultKind::OpenNote => 1,
        ResultKind::Invalid => 3,
        _ => 2,
    }
}
