//! Staged source-set configuration.
//!
//! Each stage of the greedy expander works from a declared set of evidence
//! sources. The sets are written as explicit rules and compiled once at
//! startup into [`StageSourceSet`] values; nothing is re-parsed at runtime.

use serde::{Deserialize, Serialize};

use crate::types::collections::FxHashSet;

/// Declarative rule naming the sources active in one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "rule", content = "sources")]
pub enum StageRule {
    /// Every source that appears in the input.
    All,
    /// Every source except the listed ones.
    AllExcept(Vec<String>),
    /// Only the listed sources.
    Only(Vec<String>),
}

/// Ordered stage rules. Stage 1 seeds the architecture (primary source
/// selection); later stages widen the candidate pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    pub stages: Vec<StageRule>,
}

impl Default for StageConfig {
    /// Three stages: twice everything except the two low-reliability
    /// profile sources, then everything.
    fn default() -> Self {
        let unreliable = vec!["HMMPanther".to_string(), "Gene3D".to_string()];
        Self {
            stages: vec![
                StageRule::AllExcept(unreliable.clone()),
                StageRule::AllExcept(unreliable),
                StageRule::All,
            ],
        }
    }
}

impl StageConfig {
    /// Compile the declared rules into membership sets.
    pub fn compile(&self) -> Vec<StageSourceSet> {
        self.stages.iter().map(StageSourceSet::from_rule).collect()
    }
}

/// Compiled source-set membership for one stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageSourceSet {
    All,
    AllExcept(FxHashSet<String>),
    Only(FxHashSet<String>),
}

impl StageSourceSet {
    fn from_rule(rule: &StageRule) -> Self {
        match rule {
            StageRule::All => StageSourceSet::All,
            StageRule::AllExcept(names) => {
                StageSourceSet::AllExcept(names.iter().cloned().collect())
            }
            StageRule::Only(names) => {
                StageSourceSet::Only(names.iter().cloned().collect())
            }
        }
    }

    pub fn contains(&self, source: &str) -> bool {
        match self {
            StageSourceSet::All => true,
            StageSourceSet::AllExcept(excluded) => !excluded.contains(source),
            StageSourceSet::Only(included) => included.contains(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stages_exclude_unreliable_sources_until_last() {
        let compiled = StageConfig::default().compile();
        assert_eq!(compiled.len(), 3);
        assert!(!compiled[0].contains("HMMPanther"));
        assert!(!compiled[1].contains("Gene3D"));
        assert!(compiled[0].contains("HMMPfam"));
        assert!(compiled[2].contains("HMMPanther"));
    }

    #[test]
    fn only_rule_is_exclusive() {
        let set = StageSourceSet::from_rule(&StageRule::Only(vec!["A".into()]));
        assert!(set.contains("A"));
        assert!(!set.contains("B"));
    }

    #[test]
    fn rules_round_trip_through_toml() {
        let config = StageConfig::default();
        let text = toml::to_string(&config).unwrap();
        let back: StageConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
