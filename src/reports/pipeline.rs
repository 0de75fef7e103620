//! Report pipeline
//!
//! Orchestrates one report generation: plan the query, fetch it through a
//! [`ReportSource`], narrow the rows with the client-side filter, aggregate
//! statistics, and expose the formatted view.
//!
//! # State machine
//!
//! `Idle -> Loading -> {Ready, Failed}`. Any state moves to `Loading` when a
//! new request begins; switching category always returns to `Idle` with
//! cleared state.
//!
//! # Stale responses
//!
//! A new request does not cancel one already in flight. Each request gets a
//! sequence number from [`ReportPipeline::begin`], and
//! [`ReportPipeline::complete`] ignores any response whose number is not the
//! latest issued.

use std::time::Duration;

use tracing::{debug, info, warn};

use super::clock::{Clock, Notice, SystemClock};
use super::filter;
use super::planner::{PlannerConfig, QueryPlanner};
use super::statistics;
use crate::catalog::{ColumnCatalog, FormattedTable};
use crate::config::Settings;
use crate::error::FetchError;
use crate::models::{FilterCriteria, QueryDescriptor, RawRecord, ReportCategory, Statistic};
use crate::source::ReportSource;

/// Message raised when the client-side filter removes every row
pub const EMPTY_AFTER_FILTER_MESSAGE: &str = "No records match the selected filters.";

/// Default lifetime of transient notices
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_secs(3);

/// Where the pipeline is in its cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing requested since the last category switch or reset
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// The last request produced a result (possibly empty)
    Ready,
    /// The last request failed
    Failed,
}

/// The pipeline's working state
#[derive(Debug, Clone, Default)]
pub struct ReportState {
    /// Selected category
    pub category: Option<ReportCategory>,
    /// Filters of the last request
    pub filters: FilterCriteria,
    /// Filtered rows; only present after a successful cycle
    pub result: Option<Vec<RawRecord>>,
    /// Statistics of `result`
    pub statistics: Vec<Statistic>,
    /// Current phase
    pub phase: Phase,
    /// Classified message of the last failure
    pub error: Option<String>,
    /// Transient informational message
    pub notice: Option<Notice>,
}

impl ReportState {
    /// Whether a request is in flight
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Current rows (empty when there is no result)
    pub fn rows(&self) -> &[RawRecord] {
        self.result.as_deref().unwrap_or_default()
    }

    fn clear_output(&mut self) {
        self.result = None;
        self.statistics.clear();
        self.error = None;
        self.notice = None;
    }
}

/// A planned request awaiting its response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFetch {
    /// Sequence number to hand back to [`ReportPipeline::complete`]
    pub seq: u64,
    /// Query to execute
    pub query: QueryDescriptor,
}

/// Drives report generation and owns its state
#[derive(Debug)]
pub struct ReportPipeline<C: Clock = SystemClock> {
    planner: QueryPlanner,
    catalog: ColumnCatalog,
    clock: C,
    notice_duration: Duration,
    state: ReportState,
    latest_seq: u64,
}

impl ReportPipeline<SystemClock> {
    /// Create a pipeline on the wall clock
    pub fn new(planner: QueryPlanner, catalog: ColumnCatalog) -> Self {
        Self::with_clock(planner, catalog, SystemClock)
    }

    /// Create a pipeline configured from user settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            QueryPlanner::new(PlannerConfig::from(settings)),
            ColumnCatalog::new(settings.display.clone()),
        )
        .with_notice_duration(settings.notice_duration())
    }
}

impl<C: Clock> ReportPipeline<C> {
    /// Create a pipeline reading time from `clock`
    pub fn with_clock(planner: QueryPlanner, catalog: ColumnCatalog, clock: C) -> Self {
        Self {
            planner,
            catalog,
            clock,
            notice_duration: DEFAULT_NOTICE_DURATION,
            state: ReportState::default(),
            latest_seq: 0,
        }
    }

    /// Set how long transient notices stay visible
    pub fn with_notice_duration(mut self, duration: Duration) -> Self {
        self.notice_duration = duration;
        self
    }

    /// Current state
    pub fn state(&self) -> &ReportState {
        &self.state
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Current statistics
    pub fn statistics(&self) -> &[Statistic] {
        &self.state.statistics
    }

    /// Message of the last failure
    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    /// The transient notice, unless it has already expired
    pub fn notice(&self) -> Option<&Notice> {
        let now = self.clock.now();
        self.state.notice.as_ref().filter(|n| !n.is_expired(now))
    }

    /// Formatted view of the displayed rows
    pub fn table(&self) -> FormattedTable {
        self.catalog.format_table(self.state.rows())
    }

    /// Switch to another category, clearing everything derived from the old one
    ///
    /// Returns `false` (and changes nothing) for a blank tag. Any request
    /// still in flight is invalidated.
    pub fn select_category(&mut self, tag: &str) -> bool {
        match ReportCategory::parse(tag) {
            Some(category) => {
                self.switch_to(category);
                true
            }
            None => false,
        }
    }

    fn switch_to(&mut self, category: ReportCategory) {
        debug!(category = %category, "switching report category");
        self.latest_seq += 1;
        self.state = ReportState {
            category: Some(category),
            ..ReportState::default()
        };
    }

    /// Clear the filters and the current result
    pub fn reset_filters(&mut self) {
        self.latest_seq += 1;
        self.state.filters = FilterCriteria::default();
        self.state.clear_output();
        self.state.phase = Phase::Idle;
    }

    /// Start a generation
    ///
    /// Returns the query to fetch, or `None` when there is nothing to fetch:
    /// a blank tag (no state change), invalid filters (`Failed`), or a
    /// category without a query (empty `Ready`).
    pub fn begin(&mut self, tag: &str, filters: FilterCriteria) -> Option<PendingFetch> {
        let Some(category) = ReportCategory::parse(tag) else {
            debug!("ignoring report request without a category");
            return None;
        };
        if self.state.category.as_ref() != Some(&category) {
            self.switch_to(category.clone());
        }

        self.latest_seq += 1;
        self.state.filters = filters;
        self.state.clear_output();
        self.state.phase = Phase::Loading;

        if let Err(err) = self.state.filters.validate() {
            warn!(category = %category, error = %err, "rejected report filters");
            self.fail(err.to_string());
            return None;
        }

        match self.planner.plan(&category, &self.state.filters) {
            Some(query) => {
                info!(category = %category, seq = self.latest_seq, query = %query, "report requested");
                Some(PendingFetch {
                    seq: self.latest_seq,
                    query,
                })
            }
            None => {
                info!(category = %category, "no query for category; empty report");
                self.state.result = Some(Vec::new());
                self.state.phase = Phase::Ready;
                None
            }
        }
    }

    /// Apply the outcome of a fetch
    ///
    /// Returns `false` if the response was stale and ignored.
    pub fn complete(&mut self, seq: u64, outcome: Result<Vec<RawRecord>, FetchError>) -> bool {
        if seq != self.latest_seq || self.state.phase != Phase::Loading {
            debug!(seq, latest = self.latest_seq, "discarding stale report response");
            return false;
        }
        let Some(category) = self.state.category.clone() else {
            return false;
        };

        match outcome {
            Ok(raw) => {
                let fetched = raw.len();
                let rows = filter::apply(&category, raw, &self.state.filters);
                self.state.statistics = statistics::aggregate(&category, &rows);

                if fetched > 0 && rows.is_empty() {
                    info!(category = %category, fetched, "filters removed every row");
                    self.state.notice = Some(Notice::new(
                        EMPTY_AFTER_FILTER_MESSAGE,
                        self.clock.now(),
                        self.notice_duration,
                    ));
                }

                info!(category = %category, fetched, shown = rows.len(), "report ready");
                self.state.result = Some(rows);
                self.state.phase = Phase::Ready;
            }
            Err(err) => {
                warn!(category = %category, error = %err, "report fetch failed");
                self.fail(err.to_string());
            }
        }

        true
    }

    fn fail(&mut self, message: String) {
        self.state.clear_output();
        self.state.error = Some(message);
        self.state.phase = Phase::Failed;
    }

    /// Plan, fetch and apply a report in one call
    pub async fn generate<S>(&mut self, tag: &str, filters: FilterCriteria, source: &S) -> &ReportState
    where
        S: ReportSource + ?Sized,
    {
        if let Some(pending) = self.begin(tag, filters) {
            let outcome = source.fetch(&pending.query).await;
            self.complete(pending.seq, outcome);
        }
        &self.state
    }

    /// Apply scheduled transitions that are due
    ///
    /// Returns `true` if a notice was cleared.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        if self.state.notice.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.state.notice = None;
            return true;
        }
        false
    }

    /// When the next scheduled transition is due, if any
    pub fn next_deadline(&self) -> Option<std::time::Instant> {
        self.state.notice.as_ref().map(|n| n.expires_at)
    }
}
