//! Local-storage implementation of the lead cache.
//!
//! The snapshot is stored under one key as `{ checksum, payload }`, where
//! `payload` is the JSON-serialized collection and `checksum` its MD5 hex
//! digest. A digest mismatch or unparseable payload reads as an empty
//! collection; the cache is best-effort and never surfaces an error.

use super::LeadCache;
use common::model::lead::Lead;
use gloo_console::warn;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

pub const LEADS_KEY: &str = "crm-leads";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    checksum: String,
    payload: String,
}

/// Serializes the collection into a checksummed snapshot.
pub fn encode_snapshot(leads: &[Lead]) -> Option<Snapshot> {
    let payload = serde_json::to_string(leads).ok()?;
    Some(Snapshot {
        checksum: format!("{:x}", md5::compute(&payload)),
        payload,
    })
}

/// Verifies and deserializes a snapshot. Empty on any mismatch.
pub fn decode_snapshot(snapshot: &Snapshot) -> Vec<Lead> {
    if format!("{:x}", md5::compute(&snapshot.payload)) != snapshot.checksum {
        return Vec::new();
    }
    serde_json::from_str(&snapshot.payload).unwrap_or_default()
}

#[derive(Default)]
pub struct BrowserCache;

impl LeadCache for BrowserCache {
    fn save(&self, leads: &[Lead]) {
        if let Some(snapshot) = encode_snapshot(leads) {
            if let Err(e) = LocalStorage::set(LEADS_KEY, snapshot) {
                warn!("Could not persist leads snapshot:", e.to_string());
            }
        }
    }

    fn load(&self) -> Vec<Lead> {
        match LocalStorage::get::<Snapshot>(LEADS_KEY) {
            Ok(snapshot) => decode_snapshot(&snapshot),
            Err(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::stage::Stage;

    fn lead(id: &str) -> Lead {
        Lead {
            id: id.into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            company: "Acme".into(),
            position: String::new(),
            email: format!("{id}@acme.example"),
            phone: String::new(),
            deal_value: 100,
            stage: Stage::Negotiation,
            notes: String::new(),
            created_at: "2026-08-01T10:00:00".into(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn snapshot_round_trips() {
        let leads = vec![lead("a"), lead("b")];
        let snapshot = encode_snapshot(&leads).unwrap();
        assert_eq!(decode_snapshot(&snapshot), leads);
    }

    #[test]
    fn empty_collection_round_trips() {
        let snapshot = encode_snapshot(&[]).unwrap();
        assert!(decode_snapshot(&snapshot).is_empty());
    }

    #[test]
    fn corrupted_payload_decodes_to_empty() {
        let mut snapshot = encode_snapshot(&[lead("a")]).unwrap();
        snapshot.payload.push_str("garbage");
        assert!(decode_snapshot(&snapshot).is_empty());
    }

    #[test]
    fn checksum_mismatch_decodes_to_empty() {
        let mut snapshot = encode_snapshot(&[lead("a")]).unwrap();
        snapshot.checksum = "0".repeat(32);
        assert!(decode_snapshot(&snapshot).is_empty());
    }
}
