//! Report generation over the consensus architectures: the compact
//! one-row-per-sequence table, the per-sequence detail blocks, and a JSON
//! export. Domain descriptions come from an external lookup behind the
//! [`DomainNameLookup`] trait.

pub mod formats;
pub mod lookup;

pub use formats::{CompactTableFormatter, DetailReportFormatter, JsonFormatter};
pub use lookup::{DomainNameLookup, NoDescriptions, StaticLookup};
