use {
    crate::config::EnrichConfig,
    crate::domain::audit::{AuditRecord, DisplayField, EnrichOutcome, EnrichedRecord},
    crate::domain::describe::{actor_label, describe},
    crate::domain::diff::diff,
    crate::domain::error::EnrichError,
    crate::domain::format::ValueFormatter,
    crate::domain::humanize::humanize,
    crate::domain::lookup::ReferenceLookup,
    crate::domain::snapshot::{Snapshot, sanitize},
    crate::services::reference_resolver::resolve_optional,
    futures::future::join_all,
    std::sync::Arc,
};

/// Turns raw audit records into display-ready ones.
#[derive(Clone)]
pub struct AuditEnricher {
    lookup: Arc<dyn ReferenceLookup>,
    config: EnrichConfig,
    formatter: ValueFormatter,
}

impl AuditEnricher {
    pub fn new(lookup: Arc<dyn ReferenceLookup>, config: EnrichConfig) -> Result<Self, EnrichError> {
        let formatter = config.formatter()?;
        Ok(Self {
            lookup,
            config,
            formatter,
        })
    }

    pub fn with_defaults(lookup: Arc<dyn ReferenceLookup>) -> Self {
        Self {
            lookup,
            config: EnrichConfig::default(),
            formatter: ValueFormatter::default(),
        }
    }

    pub fn config(&self) -> &EnrichConfig {
        &self.config
    }

    /// Sanitize → resolve (old and new concurrently) → diff, display, describe.
    pub async fn try_enrich(&self, record: &AuditRecord) -> Result<EnrichedRecord, EnrichError> {
        let old = sanitize(record.old_values.as_ref())?;
        let new = sanitize(record.new_values.as_ref())?;

        let lookup = &*self.lookup;
        let (old, new) = tokio::join!(resolve_optional(lookup, old), resolve_optional(lookup, new));

        let changes = diff(old.as_ref(), new.as_ref(), &self.formatter);
        let description = describe(
            record.action.as_deref(),
            record.table_name.as_deref(),
            old.as_ref(),
            new.as_ref(),
            &self.config,
        );

        Ok(EnrichedRecord {
            actor_display: actor_label(record, &self.config),
            description,
            old_values_display: self.display_fields(old.as_ref()),
            new_values_display: self.display_fields(new.as_ref()),
            changes,
            record: record.clone(),
        })
    }

    /// Like [`try_enrich`](Self::try_enrich), but a failure hands the record
    /// back unenriched instead of erroring.
    pub async fn enrich(&self, record: AuditRecord) -> EnrichOutcome {
        match self.try_enrich(&record).await {
            Ok(enriched) => {
                tracing::debug!(
                    record_id = %record.id,
                    changes = enriched.changes.len(),
                    "audit record enriched"
                );
                EnrichOutcome::Enriched(Box::new(enriched))
            }
            Err(e) => {
                tracing::error!(
                    record_id = %record.id,
                    error = %e,
                    "audit record enrichment failed, showing raw record"
                );
                EnrichOutcome::Unenriched(record)
            }
        }
    }

    /// Enrich a page of records concurrently. Outcomes keep the input order.
    pub async fn enrich_all(&self, records: Vec<AuditRecord>) -> Vec<EnrichOutcome> {
        join_all(records.into_iter().map(|record| self.enrich(record))).await
    }

    fn display_fields(&self, snapshot: Option<&Snapshot>) -> Vec<DisplayField> {
        snapshot
            .map(|snapshot| {
                snapshot
                    .iter()
                    .map(|(field, value)| DisplayField {
                        field: field.clone(),
                        label: humanize(field),
                        value: self.formatter.format(Some(value)),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}
