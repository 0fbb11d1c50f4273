//! Pipeline orchestration: per-sequence resolution in parallel, then the
//! global similarity-graph stage, then the consensus merge.

use domarch_core::config::DomarchConfig;
use domarch_core::config::StageSourceSet;
use domarch_core::errors::{ConfigError, PipelineResult};
use domarch_core::types::collections::FxHashMap;
use domarch_core::types::{Assignment, Fragment, Sequence};
use rayon::prelude::*;
use tracing::{info, warn};

use crate::architecture::{resolve_architecture, ResolvedArchitecture};
use crate::consensus::{merge_consensus, ConsensusArchitecture};
use crate::filter::{AssignmentFilter, ExclusionLog};
use crate::graph::{
    build_graph, cluster_components, prune_edges, AlignmentRecord, NovelDomain,
    NovelIdCounter,
};
use crate::unassigned::extract_fragments;

/// The engine, configured once and reusable across runs.
pub struct Pipeline {
    config: DomarchConfig,
    stage_sets: Vec<StageSourceSet>,
}

/// Output of the per-sequence half: resolved known architectures (ordered
/// by sequence id) and the fragments left over for novel-domain discovery.
#[derive(Debug, Default)]
pub struct KnownArchitectures {
    pub resolved: Vec<ResolvedArchitecture>,
    pub fragments: Vec<Fragment>,
    pub exclusions: ExclusionLog,
}

/// Output of a full run.
#[derive(Debug, Default)]
pub struct PipelineOutput {
    /// Final architectures in output order (most frequent first).
    pub consensus: Vec<ConsensusArchitecture>,
    pub novel_domains: Vec<NovelDomain>,
    pub exclusions: ExclusionLog,
    /// Counter state after clustering; feed into a later run to keep novel
    /// ordinals unique across runs.
    pub counter: NovelIdCounter,
}

impl Pipeline {
    /// Validate `config` and compile the stage source sets.
    pub fn new(config: DomarchConfig) -> Result<Self, ConfigError> {
        DomarchConfig::validate(&config)?;
        let stage_sets = config.stages.compile();
        Ok(Self { config, stage_sets })
    }

    pub fn config(&self) -> &DomarchConfig {
        &self.config
    }

    /// The per-sequence half: filter assignments, resolve each sequence's
    /// known-domain architecture, and extract unassigned fragments.
    ///
    /// Sequences are independent, so resolution runs in parallel; results
    /// come back in sequence-id order regardless of scheduling.
    pub fn resolve_known(
        &self,
        sequences: &[Sequence],
        assignments: Vec<Assignment>,
    ) -> PipelineResult<KnownArchitectures> {
        let mut result = PipelineResult::<KnownArchitectures>::default();

        let mut ordered: Vec<&Sequence> = sequences.iter().collect();
        ordered.sort_by(|a, b| a.id.cmp(&b.id));
        ordered.dedup_by(|a, b| {
            if a.id == b.id {
                warn!(sequence = %a.id, "duplicate sequence table entry, keeping the first");
                true
            } else {
                false
            }
        });

        let lengths: FxHashMap<String, u32> = ordered
            .iter()
            .map(|seq| (seq.id.clone(), seq.length))
            .collect();

        let filtered =
            AssignmentFilter::new(self.config.filter.clone()).filter(assignments, &lengths);
        for error in filtered.errors {
            result.add_error(error);
        }
        result.data.exclusions = filtered.exclusions;

        let max_overlap = self.config.filter.effective_max_overlap();
        info!(sequences = ordered.len(), "resolving known-domain architectures");
        let resolved: Vec<ResolvedArchitecture> = ordered
            .par_iter()
            .map(|sequence| {
                let sequence_assignments = filtered
                    .by_sequence
                    .get(&sequence.id)
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                resolve_architecture(
                    &sequence.id,
                    sequence.length,
                    sequence_assignments,
                    &self.stage_sets,
                    max_overlap,
                )
            })
            .collect();

        for r in &resolved {
            if r.architecture.is_empty()
                && filtered.by_sequence.contains_key(&r.architecture.sequence_id)
            {
                result.data.exclusions.record(
                    r.architecture.sequence_id.clone(),
                    "no assignments were selected after executing all stages",
                );
            }
        }

        result.data.fragments = resolved
            .iter()
            .flat_map(|r| extract_fragments(&r.architecture, &self.config.fragments))
            .collect();
        info!(
            fragments = result.data.fragments.len(),
            "unassigned fragments extracted"
        );

        result.data.resolved = resolved;
        result
    }

    /// The global half: build the similarity graph over all fragments,
    /// prune it, and cluster the remainder into novel domains. Must not run
    /// until every sequence's fragments are known.
    ///
    /// An empty fragment set is a valid outcome and skips the whole stage.
    pub fn discover_novel(
        &self,
        fragments: &[Fragment],
        records: &[AlignmentRecord],
        counter: NovelIdCounter,
    ) -> PipelineResult<(Vec<NovelDomain>, NovelIdCounter)> {
        if fragments.is_empty() {
            info!("no unassigned fragments, skipping novel-domain discovery");
            return PipelineResult::new((Vec::new(), counter));
        }

        let built = build_graph(fragments, records, &self.config.graph);
        info!(
            nodes = built.graph.node_count(),
            edges = built.graph.edge_count(),
            "similarity graph built"
        );
        let pruned = prune_edges(&built.graph, &self.config.clustering);
        let (domains, counter) = cluster_components(
            &pruned,
            self.config.clustering.effective_min_domain_size(),
            counter,
        );
        info!(domains = domains.len(), "novel domains clustered");

        let mut result = PipelineResult::new((domains, counter));
        for error in built.errors {
            result.add_error(error);
        }
        result
    }

    /// Full run: known-domain resolution, novel-domain discovery, and the
    /// consensus merge. The novel counter starts from the configured base.
    pub fn run(
        &self,
        sequences: &[Sequence],
        assignments: Vec<Assignment>,
        records: &[AlignmentRecord],
    ) -> PipelineResult<PipelineOutput> {
        let mut result = PipelineResult::<PipelineOutput>::default();

        let known = self.resolve_known(sequences, assignments);
        result.errors.extend(known.errors);
        let KnownArchitectures {
            resolved,
            fragments,
            exclusions,
        } = known.data;

        let counter =
            NovelIdCounter::starting_at(self.config.clustering.effective_novel_id_base());
        let novel = self.discover_novel(&fragments, records, counter);
        result.errors.extend(novel.errors);
        let (novel_domains, counter) = novel.data;

        result.data = PipelineOutput {
            consensus: merge_consensus(resolved, &novel_domains),
            novel_domains,
            exclusions,
            counter,
        };
        result
    }
}
