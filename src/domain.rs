pub mod action;
pub mod audit;
pub mod describe;
pub mod diff;
pub mod error;
pub mod format;
pub mod humanize;
pub mod id;
pub mod lookup;
pub mod snapshot;
