#![allow(dead_code)]

use audit_lens::adapters::static_lookup::StaticLookup;
use audit_lens::domain::audit::{AuditRecord, RawSnapshot};
use audit_lens::domain::error::LookupError;
use audit_lens::domain::id::{AuditId, ReferenceId};
use audit_lens::domain::lookup::{LookupResponse, ReferenceLookup};
use audit_lens::domain::snapshot::Snapshot;
use chrono::{TimeZone, Utc};
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// `json!({...})` → snapshot map. Panics on non-objects.
pub fn snapshot(value: Value) -> Snapshot {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

/// Objects become decoded snapshots, strings stay JSON-encoded.
pub fn raw(value: Value) -> RawSnapshot {
    match value {
        Value::Object(map) => RawSnapshot::Decoded(map),
        Value::String(json) => RawSnapshot::Encoded(json),
        other => panic!("unsupported raw snapshot: {other}"),
    }
}

pub fn make_record(
    id: &str,
    action: Option<&str>,
    table_name: Option<&str>,
    old_values: Option<Value>,
    new_values: Option<Value>,
) -> AuditRecord {
    AuditRecord {
        id: AuditId::new(id),
        action: action.map(str::to_string),
        table_name: table_name.map(str::to_string),
        actor_name: None,
        old_values: old_values.map(raw),
        new_values: new_values.map(raw),
        created_at: Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 0).unwrap(),
    }
}

/// Lookup seeded with the fixtures most tests use.
pub fn fixture_lookup() -> StaticLookup {
    StaticLookup::new()
        .with_name("roles", "r1", "Admin")
        .with_name("roles", "r2", "Editor")
        .with_name("brands", "b1", "Acme")
        .with_name("users", "u1", "Ada Lovelace")
        .with_name("categories", "c1", "Outdoor")
}

// ── Scripted lookup ────────────────────────────────────────────────────────

/// Wraps a [`StaticLookup`], records every call and optionally sleeps
/// before answering (use with a paused tokio clock).
pub struct ScriptedLookup {
    inner: StaticLookup,
    delay: Duration,
    calls: AtomicUsize,
    seen: Mutex<Vec<(String, String)>>,
}

impl ScriptedLookup {
    pub fn new(inner: StaticLookup) -> Self {
        Self {
            inner,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<(String, String)> {
        let mut seen = self.seen.lock().unwrap().clone();
        seen.sort();
        seen
    }
}

impl ReferenceLookup for ScriptedLookup {
    fn lookup<'a>(
        &'a self,
        collection: &'a str,
        id: &'a ReferenceId,
    ) -> Pin<Box<dyn Future<Output = Result<LookupResponse, LookupError>> + Send + 'a>> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen
                .lock()
                .unwrap()
                .push((collection.to_string(), id.as_str().to_string()));
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            self.inner.lookup(collection, id).await
        })
    }
}
