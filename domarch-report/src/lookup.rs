//! Domain description lookup. Descriptions live outside the engine (a
//! names file downloaded from the reference database); the formatters only
//! need this seam.

use rustc_hash::FxHashMap;

/// Maps a domain label to a human-readable description.
pub trait DomainNameLookup {
    fn describe(&self, label: &str) -> Option<&str>;
}

/// Lookup with no descriptions at all; formatters fall back to the label.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDescriptions;

impl DomainNameLookup for NoDescriptions {
    fn describe(&self, _label: &str) -> Option<&str> {
        None
    }
}

/// In-memory lookup over a pre-loaded label → description table.
#[derive(Debug, Default, Clone)]
pub struct StaticLookup {
    names: FxHashMap<String, String>,
}

impl StaticLookup {
    pub fn new(names: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            names: names.into_iter().collect(),
        }
    }
}

impl DomainNameLookup for StaticLookup {
    fn describe(&self, label: &str) -> Option<&str> {
        self.names.get(label).map(String::as_str)
    }
}
