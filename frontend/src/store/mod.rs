//! In-session lead collection and its reconciliation rules.
//!
//! The [`LeadStore`] owns the authoritative `Vec<Lead>` for the page
//! session. Remote I/O happens elsewhere (`spawn_local` futures completing
//! into component messages); the store receives their *results* through the
//! synchronous `apply_*` operations below, which encode the sync policy:
//!
//! - a successful load replaces the collection and persists it;
//! - a failed load degrades silently to the last cached snapshot;
//! - create/update/delete mutate only on remote success (no optimistic
//!   writes), and every successful mutation is persisted wholesale.
//!
//! Duplicate or out-of-order completions are tolerated: applying a delete
//! or update for an identifier that is already gone is a no-op.

pub mod browser;

use crate::api::ApiError;
use common::model::lead::Lead;

/// Durable best-effort mirror of the collection. Whole-snapshot save/load,
/// no merge, no versioning.
pub trait LeadCache {
    fn save(&self, leads: &[Lead]);
    /// Last saved snapshot, or empty if nothing was saved or the stored
    /// value is unreadable.
    fn load(&self) -> Vec<Lead>;
}

pub struct LeadStore<C: LeadCache> {
    leads: Vec<Lead>,
    cache: C,
}

impl<C: LeadCache> LeadStore<C> {
    pub fn new(cache: C) -> Self {
        Self {
            leads: Vec::new(),
            cache,
        }
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn find(&self, id: &str) -> Option<&Lead> {
        self.leads.iter().find(|l| l.id == id)
    }

    /// Outcome of a full remote fetch. On success the collection is
    /// replaced and mirrored to the cache; on failure the last cached
    /// snapshot becomes the collection (empty if the cache is empty).
    pub fn apply_loaded(&mut self, fetched: Result<Vec<Lead>, ApiError>) {
        match fetched {
            Ok(leads) => {
                self.leads = leads;
                self.cache.save(&self.leads);
            }
            Err(_) => {
                self.leads = self.cache.load();
            }
        }
    }

    /// Appends a lead the server confirmed. Caller only invokes this on
    /// remote success, so the collection never holds a lead the backend
    /// does not know about.
    pub fn apply_created(&mut self, lead: Lead) {
        self.leads.push(lead);
        self.cache.save(&self.leads);
    }

    /// Replaces the entry with the server-returned lead. A missing
    /// identifier (deleted meanwhile) is a no-op.
    pub fn apply_updated(&mut self, lead: Lead) {
        if let Some(slot) = self.leads.iter_mut().find(|l| l.id == lead.id) {
            *slot = lead;
            self.cache.save(&self.leads);
        }
    }

    /// Removes the entry with the given identifier. A second delete for the
    /// same id is a no-op.
    pub fn apply_deleted(&mut self, id: &str) {
        let before = self.leads.len();
        self.leads.retain(|l| l.id != id);
        if self.leads.len() != before {
            self.cache.save(&self.leads);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::stage::Stage;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Cache backed by a shared `Vec`, standing in for browser storage.
    #[derive(Clone, Default)]
    struct MemoryCache {
        saved: Rc<RefCell<Vec<Lead>>>,
    }

    impl LeadCache for MemoryCache {
        fn save(&self, leads: &[Lead]) {
            *self.saved.borrow_mut() = leads.to_vec();
        }

        fn load(&self) -> Vec<Lead> {
            self.saved.borrow().clone()
        }
    }

    fn lead(id: &str, stage: Stage) -> Lead {
        Lead {
            id: id.into(),
            first_name: "Ada".into(),
            last_name: id.to_uppercase(),
            company: "Acme".into(),
            position: String::new(),
            email: format!("{id}@acme.example"),
            phone: String::new(),
            deal_value: 100,
            stage,
            notes: String::new(),
            created_at: "2026-08-01T10:00:00".into(),
            updated_at: String::new(),
        }
    }

    fn network_down() -> Result<Vec<Lead>, ApiError> {
        Err(ApiError::Network("fetch failed".into()))
    }

    #[test]
    fn successful_load_replaces_and_persists() {
        let cache = MemoryCache::default();
        let mut store = LeadStore::new(cache.clone());
        store.apply_loaded(Ok(vec![lead("a", Stage::Prospect)]));
        assert_eq!(store.leads().len(), 1);
        assert_eq!(cache.load().len(), 1);
    }

    #[test]
    fn failed_load_falls_back_to_cached_snapshot() {
        let cache = MemoryCache::default();
        let snapshot = vec![lead("a", Stage::Prospect), lead("b", Stage::Closed)];
        cache.save(&snapshot);

        let mut store = LeadStore::new(cache);
        store.apply_loaded(network_down());
        assert_eq!(store.leads(), snapshot.as_slice());
    }

    #[test]
    fn failed_load_with_empty_cache_yields_empty_collection() {
        let mut store = LeadStore::new(MemoryCache::default());
        store.apply_loaded(network_down());
        assert!(store.leads().is_empty());
    }

    #[test]
    fn created_lead_is_appended_and_persisted() {
        let cache = MemoryCache::default();
        let mut store = LeadStore::new(cache.clone());
        store.apply_created(lead("a", Stage::Prospect));
        store.apply_created(lead("b", Stage::Qualified));
        assert_eq!(store.leads()[1].id, "b");
        assert_eq!(cache.load().len(), 2);
    }

    #[test]
    fn update_replaces_only_the_matching_entry() {
        let mut store = LeadStore::new(MemoryCache::default());
        store.apply_loaded(Ok(vec![lead("a", Stage::Prospect), lead("b", Stage::Prospect)]));

        let mut moved = lead("a", Stage::Closed);
        moved.deal_value = 999;
        store.apply_updated(moved);

        assert_eq!(store.find("a").unwrap().stage, Stage::Closed);
        assert_eq!(store.find("a").unwrap().deal_value, 999);
        assert_eq!(store.find("b").unwrap().stage, Stage::Prospect);
    }

    #[test]
    fn update_for_absent_id_is_a_noop() {
        let cache = MemoryCache::default();
        let mut store = LeadStore::new(cache.clone());
        store.apply_loaded(Ok(vec![lead("a", Stage::Prospect)]));
        let persisted = cache.load();

        store.apply_updated(lead("ghost", Stage::Closed));
        assert_eq!(store.leads().len(), 1);
        assert_eq!(cache.load(), persisted);
    }

    #[test]
    fn duplicate_delete_is_a_noop() {
        let mut store = LeadStore::new(MemoryCache::default());
        store.apply_loaded(Ok(vec![lead("a", Stage::Prospect), lead("b", Stage::Prospect)]));

        store.apply_deleted("a");
        store.apply_deleted("a");
        assert_eq!(store.leads().len(), 1);
        assert_eq!(store.leads()[0].id, "b");
    }

    #[test]
    fn stage_move_then_by_stage_reflects_the_move() {
        let mut store = LeadStore::new(MemoryCache::default());
        store.apply_loaded(Ok(vec![lead("a", Stage::Prospect), lead("b", Stage::Prospect)]));

        // The drag-drop path: full replacement with only the stage changed.
        let payload = common::requests::SaveLeadRequest::stage_change(
            store.find("a").unwrap(),
            Stage::Closed,
        );
        let mut confirmed = lead("a", payload.stage);
        confirmed.deal_value = payload.deal_value;
        store.apply_updated(confirmed);

        let slices = common::funnel::by_stage(store.leads());
        assert_eq!(slices[0].count, 1); // prospect
        assert_eq!(slices[3].count, 1); // closed
    }
}
