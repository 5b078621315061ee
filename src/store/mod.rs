pub mod donations;
pub mod seed;
pub mod volunteers;

use dashmap::DashMap;

/// A stored record tagged with its insertion order. Collections are read
/// newest first, so the highest `seq` comes first.
#[derive(Debug, Clone)]
struct Slot<T> {
    seq: u64,
    record: T,
}

fn newest_first<T, F>(map: &DashMap<String, Slot<T>>, mut keep: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let mut slots: Vec<(u64, T)> = map
        .iter()
        .filter(|entry| keep(&entry.value().record))
        .map(|entry| (entry.value().seq, entry.value().record.clone()))
        .collect();

    slots.sort_by(|a, b| b.0.cmp(&a.0));
    slots.into_iter().map(|(_, record)| record).collect()
}
