use super::backend::StorageBackend;
use super::{discard_corrupt, write_snapshot, PersistStatus};
use crate::content::{SectionValue, SiteContent};
use crate::error::VitrineError;
use crate::model::Document;

/// Singleton variant of the collection store: one document under
/// `D::STORAGE_KEY`, replaced as a whole or section by section.
pub struct DocumentStore<D: Document, B: StorageBackend> {
    backend: B,
    doc: D,
    status: PersistStatus,
}

impl<D: Document, B: StorageBackend> DocumentStore<D, B> {
    /// Create the store, reading the backing once. Missing fields are filled
    /// from `D::defaults()`; corrupt values are discarded.
    pub fn hydrate(backend: B) -> Self {
        let doc = match backend.get(D::STORAGE_KEY) {
            Ok(Some(raw)) => match D::decode(&raw) {
                Ok(doc) => doc,
                Err(e) => {
                    discard_corrupt(&backend, D::STORAGE_KEY, &e.to_string());
                    D::defaults()
                }
            },
            Ok(None) => D::defaults(),
            Err(e) => {
                tracing::error!(
                    key = D::STORAGE_KEY,
                    error = %e,
                    "failed to read persisted data, using defaults"
                );
                D::defaults()
            }
        };

        Self {
            backend,
            doc,
            status: PersistStatus::Clean,
        }
    }

    pub fn current(&self) -> &D {
        &self.doc
    }

    pub fn persist_status(&self) -> &PersistStatus {
        &self.status
    }

    /// Replace the whole document. Returns `true` when it differed from the
    /// current one. The document is persisted either way.
    pub fn save(&mut self, doc: D) -> bool {
        let changed = doc != self.doc;
        self.doc = doc;
        tracing::debug!(kind = D::KIND, changed, "document saved");
        self.persist();
        changed
    }

    fn persist(&mut self) {
        let blob = serde_json::to_string(&self.doc).map_err(VitrineError::from);
        self.status = write_snapshot(&self.backend, D::STORAGE_KEY, blob);
    }
}

impl<B: StorageBackend> DocumentStore<SiteContent, B> {
    /// Replace exactly one section and persist the whole document.
    /// Returns `true` when the section changed.
    pub fn save_section(&mut self, value: SectionValue) -> bool {
        let next = self.doc.clone().with_section(value);
        self.save(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SectionId;
    use crate::model::SiteSettings;
    use crate::store::mem_backend::MemBackend;
    use serde_json::Value;

    #[test]
    fn absent_key_uses_defaults() {
        let backend = MemBackend::new();
        let store: DocumentStore<SiteContent, _> = DocumentStore::hydrate(&backend);
        assert_eq!(store.current(), &SiteContent::defaults());
        assert_eq!(backend.write_count(), 0);
    }

    #[test]
    fn save_section_touches_only_that_section() {
        let backend = MemBackend::new();
        let mut store: DocumentStore<SiteContent, _> = DocumentStore::hydrate(&backend);
        let before: Value = serde_json::to_value(store.current()).unwrap();

        let mut hero = store.current().hero.clone();
        hero.h1 = "Outro título".into();
        hero.blur = 0.0;
        assert!(store.save_section(SectionValue::Hero(hero)));

        let persisted: Value = serde_json::from_str(&backend.raw("siteContent").unwrap()).unwrap();
        assert_eq!(persisted["hero"]["h1"], "Outro título");
        for section in [SectionId::About, SectionId::Process, SectionId::TechStack] {
            assert_eq!(
                serde_json::to_string(&persisted[section.key()]).unwrap(),
                serde_json::to_string(&before[section.key()]).unwrap(),
            );
        }
    }

    #[test]
    fn saving_identical_section_reports_unchanged_but_still_persists() {
        let backend = MemBackend::new();
        let mut store: DocumentStore<SiteContent, _> = DocumentStore::hydrate(&backend);
        let same = SectionValue::TechStack(store.current().tech_stack.clone());
        assert!(!store.save_section(same));
        assert_eq!(backend.write_count(), 1);
    }

    #[test]
    fn corrupt_document_is_discarded() {
        let backend = MemBackend::with_value("siteContent", "[1, 2, 3]");
        let store: DocumentStore<SiteContent, _> = DocumentStore::hydrate(&backend);
        assert_eq!(store.current(), &SiteContent::defaults());
        assert!(!backend.contains("siteContent"));
    }

    #[test]
    fn settings_round_trip() {
        let backend = MemBackend::new();
        let mut store: DocumentStore<SiteSettings, _> = DocumentStore::hydrate(&backend);
        let mut settings = store.current().clone();
        settings.accent_color = "#ff0000".into();
        assert!(store.save(settings.clone()));

        let rehydrated: DocumentStore<SiteSettings, _> = DocumentStore::hydrate(&backend);
        assert_eq!(rehydrated.current(), &settings);
    }

    #[test]
    fn write_failure_is_contained() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        let mut store: DocumentStore<SiteSettings, _> = DocumentStore::hydrate(&backend);
        let mut settings = store.current().clone();
        settings.site_name = "Offline".into();
        store.save(settings);

        assert_eq!(store.current().site_name, "Offline");
        assert!(store.persist_status().is_failed());
    }
}
