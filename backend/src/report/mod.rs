//! Narrative report boundary
//!
//! The engine exposes a read-only snapshot of the two lanes' statistics plus
//! the active scenario; a narrative collaborator turns that snapshot into a
//! short prose comparison. The collaborator is the trait — transport, retry
//! and rate limiting all live behind it, outside this crate. The one policy
//! the core owns is at the boundary: a failed summarize call is caught, never
//! propagated, and replaced by a fixed fallback string with simulation state
//! untouched.

use crate::models::state::SimulationState;
use crate::models::stats::LaneStats;
use crate::scenario::Scenario;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed text substituted whenever a report request fails
pub const FALLBACK_TEXT: &str =
    "The analysis node is temporarily unreachable. Narrative report offline.";

/// Minimum legacy-lane traffic before a briefing is meaningful
pub const MIN_REPORT_SAMPLE: u64 = 10;

/// Read-only snapshot handed to the narrative collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Legacy lane statistics at capture time
    pub legacy: LaneStats,

    /// Reserved lane statistics at capture time
    pub reserved: LaneStats,

    /// Scenario active at capture time
    pub scenario: Scenario,
}

impl StatsSnapshot {
    /// Capture the current lane statistics and scenario.
    pub fn capture(state: &SimulationState) -> Self {
        Self {
            legacy: state.legacy_stats.clone(),
            reserved: state.reserved_stats.clone(),
            scenario: state.scenario,
        }
    }
}

/// Errors a narrative collaborator may surface
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("not enough traffic to summarize: {total_tx} transactions, need {minimum}")]
    InsufficientData { total_tx: u64, minimum: u64 },

    #[error("report service unavailable: {0}")]
    Unavailable(String),
}

/// Turns a stats snapshot into a prose comparison of the two lanes
///
/// Implementations may fail; callers go through [`summarize_or_fallback`]
/// so failures never escape the boundary.
pub trait NarrativeReporter {
    fn summarize(&self, snapshot: &StatsSnapshot) -> Result<String, ReportError>;
}

/// Run a reporter, substituting the fixed fallback text on any failure.
pub fn summarize_or_fallback(reporter: &dyn NarrativeReporter, snapshot: &StatsSnapshot) -> String {
    reporter
        .summarize(snapshot)
        .unwrap_or_else(|_| FALLBACK_TEXT.to_string())
}

/// Built-in collaborator that renders the briefing locally
///
/// Produces the three-paragraph executive summary (uncertainty cost, how slot
/// reservations remove the spray-and-pray pattern, outlook) directly from the
/// counters. Requires [`MIN_REPORT_SAMPLE`] legacy transactions, mirroring
/// the display layer's gating of the report trigger.
#[derive(Debug, Default)]
pub struct BriefingReporter;

impl BriefingReporter {
    pub fn new() -> Self {
        Self
    }
}

impl NarrativeReporter for BriefingReporter {
    fn summarize(&self, snapshot: &StatsSnapshot) -> Result<String, ReportError> {
        if snapshot.legacy.total_tx < MIN_REPORT_SAMPLE {
            return Err(ReportError::InsufficientData {
                total_tx: snapshot.legacy.total_tx,
                minimum: MIN_REPORT_SAMPLE,
            });
        }

        let legacy = &snapshot.legacy;
        let reserved = &snapshot.reserved;

        let briefing = format!(
            "Under the {scenario} scenario the legacy lane dropped {legacy_rate:.1}% of \
             {legacy_total} submitted transactions while exhibiting {jitter}ms of confirmation \
             jitter. For an institutional desk every dropped or displaced order is unpriced \
             execution risk; the simulation books it as ${mev:.0} of extracted or forfeited value.\n\
             \n\
             The reserved lane processed the identical {reserved_total} transactions with a \
             {reserved_rate:.1}% drop rate and zero jitter. Ahead-of-time slot reservations \
             remove the incentive to spray duplicate submissions into a congested mempool: \
             inclusion is purchased once, in advance, instead of gambled on per slot.\n\
             \n\
             With inclusion and ordering guaranteed, primitives that are unsafe under \
             probabilistic execution become practical — deterministic liquidations, atomic \
             multi-leg settlement, and latency-sensitive market making priced off a \
             {latency}ms confirmation floor.",
            scenario = snapshot.scenario,
            legacy_rate = legacy.drop_rate() * 100.0,
            legacy_total = legacy.total_tx,
            jitter = legacy.jitter_ms,
            mev = legacy.mev_lost,
            reserved_total = reserved.total_tx,
            reserved_rate = reserved.drop_rate() * 100.0,
            latency = reserved.avg_latency_ms,
        );

        Ok(briefing)
    }
}
