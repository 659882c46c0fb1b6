pub mod adapters;
pub mod config;
pub mod domain;
pub mod services;

pub use {
    config::EnrichConfig,
    domain::audit::{AuditRecord, EnrichOutcome, EnrichedRecord, FieldChange, RawSnapshot},
    services::enrichment_pipeline::AuditEnricher,
};
