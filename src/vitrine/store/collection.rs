use super::backend::StorageBackend;
use super::{discard_corrupt, write_snapshot, PersistStatus};
use crate::error::{Result, VitrineError};
use crate::model::Record;
use std::collections::HashSet;
use uuid::Uuid;

/// Owns the ordered, fully materialized collection for one record kind and
/// mirrors it to the backing under `R::STORAGE_KEY`.
///
/// Order is insertion order, which is also display order.
pub struct CollectionStore<R: Record, B: StorageBackend> {
    backend: B,
    items: Vec<R>,
    status: PersistStatus,
}

impl<R: Record, B: StorageBackend> CollectionStore<R, B> {
    /// Create the store, reading the backing once.
    ///
    /// Never fails: an absent, unreadable or corrupt value yields `R::seed()`.
    pub fn hydrate(backend: B) -> Self {
        let items = match backend.get(R::STORAGE_KEY) {
            Ok(Some(raw)) => match decode::<R>(&raw) {
                Ok(items) => {
                    tracing::debug!(
                        key = R::STORAGE_KEY,
                        count = items.len(),
                        "hydrated collection"
                    );
                    items
                }
                Err(e) => {
                    discard_corrupt(&backend, R::STORAGE_KEY, &e.to_string());
                    R::seed()
                }
            },
            Ok(None) => R::seed(),
            Err(e) => {
                tracing::error!(
                    key = R::STORAGE_KEY,
                    error = %e,
                    "failed to read persisted data, using defaults"
                );
                R::seed()
            }
        };

        Self {
            backend,
            items,
            status: PersistStatus::Clean,
        }
    }

    pub fn snapshot(&self) -> &[R] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.items.iter().find(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn persist_status(&self) -> &PersistStatus {
        &self.status
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Append a new record built from `draft` and return its id.
    pub fn add(&mut self, draft: R::Draft) -> String {
        let id = self.fresh_id();
        self.items.push(R::from_draft(id.clone(), draft));
        tracing::debug!(kind = R::KIND, id = %id, "record added");
        self.persist();
        id
    }

    /// Replace the record with the same id, keeping its position.
    ///
    /// Unknown ids leave the collection unchanged and are reported.
    pub fn update(&mut self, record: R) -> Result<()> {
        let slot = self
            .items
            .iter_mut()
            .find(|r| r.id() == record.id())
            .ok_or_else(|| not_found::<R>(record.id()))?;
        *slot = record;
        self.persist();
        Ok(())
    }

    /// Remove the record with `id` and return it.
    ///
    /// Unknown ids leave the collection unchanged and are reported.
    pub fn delete(&mut self, id: &str) -> Result<R> {
        let pos = self
            .items
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| not_found::<R>(id))?;
        let removed = self.items.remove(pos);
        tracing::debug!(kind = R::KIND, id, "record deleted");
        self.persist();
        Ok(removed)
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    fn persist(&mut self) {
        let blob = serde_json::to_string(&self.items).map_err(VitrineError::from);
        self.status = write_snapshot(&self.backend, R::STORAGE_KEY, blob);
    }
}

fn not_found<R: Record>(id: &str) -> VitrineError {
    VitrineError::RecordNotFound {
        kind: R::KIND,
        id: id.to_string(),
    }
}

/// Decode a persisted collection: a JSON array of records whose ids are
/// non-empty and unique.
pub fn decode<R: Record>(raw: &str) -> Result<Vec<R>> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    if !value.is_array() {
        return Err(VitrineError::Store(format!(
            "{} data must be a JSON array",
            R::KIND
        )));
    }
    let items: Vec<R> = serde_json::from_value(value)?;

    let mut seen = HashSet::new();
    for item in &items {
        if item.id().is_empty() {
            return Err(VitrineError::Store(format!("{} with empty id", R::KIND)));
        }
        if !seen.insert(item.id()) {
            return Err(VitrineError::Store(format!(
                "duplicate {} id: {}",
                R::KIND,
                item.id()
            )));
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PortfolioDraft, PortfolioItem, ServiceDraft, ServiceItem, TeamMember};
    use crate::store::mem_backend::MemBackend;

    type Portfolio<'a> = CollectionStore<PortfolioItem, &'a MemBackend>;

    fn draft(title: &str) -> PortfolioDraft {
        PortfolioDraft::new(title, "Y", "Z")
    }

    #[test]
    fn absent_key_hydrates_seed_without_writing() {
        let backend = MemBackend::new();
        let store: Portfolio = CollectionStore::hydrate(&backend);
        assert_eq!(store.snapshot(), PortfolioItem::seed().as_slice());
        assert_eq!(backend.write_count(), 0);
        assert_eq!(store.persist_status(), &PersistStatus::Clean);
    }

    #[test]
    fn add_then_delete_restores_seed() {
        let backend = MemBackend::new();
        let mut store: Portfolio = CollectionStore::hydrate(&backend);
        let seed = store.snapshot().to_vec();
        assert_eq!(seed.len(), 4);

        let id = store.add(draft("X"));
        assert_eq!(store.len(), 5);
        assert_eq!(store.snapshot().last().unwrap().title, "X");
        assert_eq!(store.get(&id).unwrap().category, "Y");

        let removed = store.delete(&id).unwrap();
        assert_eq!(removed.title, "X");
        assert_eq!(store.snapshot(), seed.as_slice());
    }

    #[test]
    fn every_add_is_retrievable_by_its_id() {
        let backend = MemBackend::new();
        let mut store: Portfolio = CollectionStore::hydrate(&backend);
        let start = store.len();
        let ids: Vec<String> = (0..10).map(|i| store.add(draft(&format!("P{}", i)))).collect();

        assert_eq!(store.len(), start + 10);
        for (i, id) in ids.iter().enumerate() {
            assert_eq!(store.get(id).unwrap().title, format!("P{}", i));
        }
    }

    #[test]
    fn update_replaces_in_place() {
        let backend = MemBackend::new();
        let mut store: Portfolio = CollectionStore::hydrate(&backend);
        let before = store.snapshot().to_vec();

        let mut changed = before[1].clone();
        changed.title = "Renomeado".into();
        changed.desafio = None;
        store.update(changed.clone()).unwrap();

        let after = store.snapshot();
        assert_eq!(after[1], changed);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2..], before[2..]);
    }

    #[test]
    fn update_unknown_id_is_reported_and_changes_nothing() {
        let backend = MemBackend::new();
        let mut store: Portfolio = CollectionStore::hydrate(&backend);
        let before = store.snapshot().to_vec();

        let mut ghost = before[0].clone();
        ghost.id = "nope".into();
        let err = store.update(ghost).unwrap_err();
        assert!(matches!(err, VitrineError::RecordNotFound { .. }));
        assert_eq!(store.snapshot(), before.as_slice());
        assert_eq!(backend.write_count(), 0);
    }

    #[test]
    fn delete_keeps_relative_order_and_unknown_is_noop() {
        let backend = MemBackend::new();
        let mut store: Portfolio = CollectionStore::hydrate(&backend);

        store.delete("2").unwrap();
        let ids: Vec<&str> = store.snapshot().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "4"]);

        assert!(store.delete("2").is_err());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn every_mutation_writes_a_full_snapshot() {
        let backend = MemBackend::new();
        let mut store: Portfolio = CollectionStore::hydrate(&backend);
        store.add(draft("X"));
        store.delete("1").unwrap();

        assert_eq!(backend.write_count(), 2);
        let persisted: Vec<PortfolioItem> =
            serde_json::from_str(&backend.raw("portfolioData").unwrap()).unwrap();
        assert_eq!(persisted.as_slice(), store.snapshot());
        assert_eq!(store.persist_status(), &PersistStatus::Synced);
    }

    #[test]
    fn round_trip_through_the_backing() {
        let backend = MemBackend::new();
        let mut store: CollectionStore<ServiceItem, _> = CollectionStore::hydrate(&backend);
        store.add(ServiceDraft {
            icon: "<svg></svg>".into(),
            title: "Consultoria".into(),
            description: "Ajuda".into(),
        });
        let expected = store.snapshot().to_vec();

        let rehydrated: CollectionStore<ServiceItem, _> = CollectionStore::hydrate(&backend);
        assert_eq!(rehydrated.snapshot(), expected.as_slice());
    }

    #[test]
    fn corrupt_values_fall_back_to_seed_and_are_cleared() {
        for raw in ["not json", "42", r#"{"id":"1"}"#, r#"[{"title":"missing fields"}]"#] {
            let backend = MemBackend::with_value("portfolioData", raw);
            let store: Portfolio = CollectionStore::hydrate(&backend);
            assert_eq!(store.snapshot(), PortfolioItem::seed().as_slice(), "input: {}", raw);
            assert!(!backend.contains("portfolioData"), "input: {}", raw);
        }
    }

    #[test]
    fn duplicate_or_empty_ids_are_corrupt() {
        let dup = r#"[
            {"id":"a","imageurl":"","title":"","category":""},
            {"id":"a","imageurl":"","title":"","category":""}
        ]"#;
        assert!(decode::<PortfolioItem>(dup).is_err());

        let empty = r#"[{"id":"","imageurl":"","title":"","category":""}]"#;
        assert!(decode::<PortfolioItem>(empty).is_err());
    }

    #[test]
    fn empty_array_is_a_valid_collection() {
        let backend = MemBackend::with_value("teamData", "[]");
        let store: CollectionStore<TeamMember, _> = CollectionStore::hydrate(&backend);
        assert!(store.is_empty());
        assert!(backend.contains("teamData"));
    }

    #[test]
    fn write_failure_keeps_memory_state_and_is_observable() {
        let backend = MemBackend::new();
        let mut store: Portfolio = CollectionStore::hydrate(&backend);

        backend.set_simulate_write_error(true);
        let id = store.add(draft("Offline"));
        assert!(store.get(&id).is_some());
        assert!(store.persist_status().is_failed());
        assert!(!backend.contains("portfolioData"));

        backend.set_simulate_write_error(false);
        store.delete("1").unwrap();
        assert_eq!(store.persist_status(), &PersistStatus::Synced);
        let persisted: Vec<PortfolioItem> =
            serde_json::from_str(&backend.raw("portfolioData").unwrap()).unwrap();
        assert!(persisted.iter().any(|p| p.id == id));
    }
}
