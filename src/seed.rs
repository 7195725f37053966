//! Structure Initializer.
//!
//! The baseline documents are static configuration, defined here and written
//! with merge semantics so repeated runs converge instead of clobbering
//! anything a document has picked up since.

use crate::core::{DocPath, FieldMap, FieldValue, Result};
use crate::store::DocumentStore;
use tracing::debug;

/// One hard-coded (path, fields) pair of the baseline structure.
pub struct SeedEntry {
    pub path: &'static str,
    pub fields: FieldMap,
}

/// The fixed baseline documents, in write order.
pub fn initial_documents() -> Vec<SeedEntry> {
    vec![
        SeedEntry {
            path: "site_data/homepage",
            fields: vec![
                ("banner_url".to_string(), FieldValue::text("")),
                ("welcome_text".to_string(), FieldValue::text("أهلاً بك")),
                ("updatedAt".to_string(), FieldValue::ServerTimestamp),
            ],
        },
        SeedEntry {
            path: "site_data/settings",
            fields: vec![
                ("site_title".to_string(), FieldValue::text("My Template Site")),
                ("logo_url".to_string(), FieldValue::text("")),
                ("theme".to_string(), FieldValue::text("default")),
                ("updatedAt".to_string(), FieldValue::ServerTimestamp),
            ],
        },
        SeedEntry {
            path: "assets/images",
            fields: vec![("createdAt".to_string(), FieldValue::ServerTimestamp)],
        },
    ]
}

/// Merge-write every seed entry, strictly in declaration order.
///
/// Writes are independent: no transaction spans them, and the first failure
/// aborts the remaining entries while earlier writes stay committed.
pub async fn apply_seed(store: &dyn DocumentStore) -> Result<()> {
    for entry in initial_documents() {
        let path = DocPath::parse(entry.path);
        debug!(path = entry.path, "seeding document");
        store.set_merge(&path, entry.fields).await?;
    }
    Ok(())
}
