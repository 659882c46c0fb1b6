pub mod static_lookup;
