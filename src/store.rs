// 🗄️ Score Store - identifier → points, in process memory
// Entries are written once and never updated or removed

use crate::error::{ReceiptError, ReceiptResult};
use crate::receipt::{Points, ReceiptId};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::warn;

#[derive(Debug, Default)]
pub struct ScoreStore {
    scores: RwLock<HashMap<ReceiptId, Points>>,
}

impl ScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store points under a freshly generated identifier.
    pub fn insert(&self, points: Points) -> ReceiptId {
        let mut scores = self.write();

        let mut id = ReceiptId::generate();
        while scores.contains_key(&id) {
            id = ReceiptId::generate();
        }

        scores.insert(id.clone(), points);
        id
    }

    /// Points stored for `id`, or `NotFound`.
    pub fn get(&self, id: &str) -> ReceiptResult<Points> {
        self.read().get(id).copied().ok_or(ReceiptError::NotFound)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A writer can only panic before its single insert lands, so a poisoned
    // map is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<ReceiptId, Points>> {
        self.scores.read().unwrap_or_else(|poisoned| {
            warn!("score store lock was poisoned; recovering");
            PoisonError::into_inner(poisoned)
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<ReceiptId, Points>> {
        self.scores.write().unwrap_or_else(|poisoned| {
            warn!("score store lock was poisoned; recovering");
            PoisonError::into_inner(poisoned)
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_insert_then_get() {
        let store = ScoreStore::new();
        let id = store.insert(28);

        assert_eq!(store.get(id.as_str()), Ok(28));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let store = ScoreStore::new();
        store.insert(5);

        assert_eq!(store.get("does-not-exist"), Err(ReceiptError::NotFound));
        assert_eq!(store.get(""), Err(ReceiptError::NotFound));
    }

    #[test]
    fn test_same_points_get_distinct_ids() {
        let store = ScoreStore::new();
        let a = store.insert(109);
        let b = store.insert(109);

        assert_ne!(a, b);
        assert_eq!(store.get(a.as_str()), Ok(109));
        assert_eq!(store.get(b.as_str()), Ok(109));
    }

    #[test]
    fn test_concurrent_inserts() {
        let store = Arc::new(ScoreStore::new());

        let handles: Vec<_> = (0..8)
            .map(|n| {
                let store = Arc::clone(&store);
                thread::spawn(move || (0..50).map(|_| (store.insert(n), n)).collect::<Vec<_>>())
            })
            .collect();

        let ids: Vec<_> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();

        assert_eq!(store.len(), 400);
        for (id, points) in ids {
            assert_eq!(store.get(id.as_str()), Ok(points));
        }
    }
}
