use std::hash::Hash;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Enter/update/exit counts of one layer reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReconcileOutcome {
    pub entered: usize,
    pub updated: usize,
    pub exited: usize,
}

/// Merges keyed data into a persistent element layer.
///
/// Elements whose key is still present are handed to `update` and keep their
/// identity; new keys are created through `enter`; keys absent from `data` are
/// dropped. The resulting layer follows data order. A key repeated in `data`
/// is reconciled once, at its first position.
pub fn reconcile_layer<K, D, E, FEnter, FUpdate>(
    layer: &mut IndexMap<K, E>,
    data: impl IntoIterator<Item = (K, D)>,
    mut enter: FEnter,
    mut update: FUpdate,
) -> ReconcileOutcome
where
    K: Hash + Eq,
    FEnter: FnMut(&K, D) -> E,
    FUpdate: FnMut(&K, &mut E, D),
{
    let mut previous = std::mem::take(layer);
    let mut outcome = ReconcileOutcome::default();

    for (key, datum) in data {
        if layer.contains_key(&key) {
            continue;
        }
        let element = match previous.swap_remove(&key) {
            Some(mut element) => {
                update(&key, &mut element, datum);
                outcome.updated += 1;
                element
            }
            None => {
                outcome.entered += 1;
                enter(&key, datum)
            }
        };
        layer.insert(key, element);
    }

    outcome.exited = previous.len();
    outcome
}
