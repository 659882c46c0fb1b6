use {
    super::id::AuditId,
    super::snapshot::Snapshot,
    chrono::{DateTime, Utc},
    serde::{Deserialize, Serialize},
};

/// One before/after snapshot as delivered by the audit log service: either
/// still JSON-encoded text or an already decoded object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawSnapshot {
    Encoded(String),
    Decoded(Snapshot),
}

impl From<Snapshot> for RawSnapshot {
    fn from(map: Snapshot) -> Self {
        Self::Decoded(map)
    }
}

impl From<String> for RawSnapshot {
    fn from(json: String) -> Self {
        Self::Encoded(json)
    }
}

/// Persisted change-log row. Read-only input to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRecord {
    pub id: AuditId,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub table_name: Option<String>,
    #[serde(default)]
    pub actor_name: Option<String>,
    #[serde(default)]
    pub old_values: Option<RawSnapshot>,
    #[serde(default)]
    pub new_values: Option<RawSnapshot>,
    pub created_at: DateTime<Utc>,
}

/// A single field rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayField {
    pub field: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldChange {
    pub field: String,
    pub label: String,
    pub old_display: String,
    pub new_display: String,
}

/// Display-ready view of an [`AuditRecord`]. Built per render, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedRecord {
    #[serde(flatten)]
    pub record: AuditRecord,
    pub actor_display: String,
    pub description: String,
    pub old_values_display: Vec<DisplayField>,
    pub new_values_display: Vec<DisplayField>,
    pub changes: Vec<FieldChange>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EnrichOutcome {
    Enriched(Box<EnrichedRecord>),
    /// Enrichment failed; the record is passed through untouched so the
    /// rest of the audit list still renders.
    Unenriched(AuditRecord),
}

impl EnrichOutcome {
    pub fn is_enriched(&self) -> bool {
        matches!(self, Self::Enriched(_))
    }

    pub fn record(&self) -> &AuditRecord {
        match self {
            Self::Enriched(enriched) => &enriched.record,
            Self::Unenriched(record) => record,
        }
    }

    pub fn enriched(&self) -> Option<&EnrichedRecord> {
        match self {
            Self::Enriched(enriched) => Some(enriched),
            Self::Unenriched(_) => None,
        }
    }
}
