//! Reporting utilities: KPIs and formatted terminal output.
//!
//! We keep formatting code in one place so the pipeline stages stay free of
//! presentation concerns and output changes are localized.

pub mod format;
pub mod kpi;

pub use format::*;
pub use kpi::*;
