pub mod enrichment_pipeline;
pub mod reference_resolver;
