// web_app/listing/orchestrator.rs - Listing page filter and search state
//
// Owns the committed filter, the drafts, the page cursor and the last
// applied result. The listing page keeps one of these in a signal, asks it
// for a `SearchRequest` whenever the search key changes, and hands every
// response back with its ticket.
//
// Sequencing: each request gets a fresh ticket and only the latest ticket
// is ever applied, so a slow earlier response cannot overwrite a newer one.
// Bounds loads carry the mount generation for the same reason.

use std::collections::HashSet;

use super::commit::{self, CommitOutcome};
use super::discrete;
use super::draft::{DraftBuffer, DraftPair};
use super::pagination::{self, PageCursor, PaginationView};
use super::range::{CommittedRange, Dimension, Range, RangeStore};
use crate::web_app::model::{UnifiedUnits, Unit, UnitFilter};

/// Units per page on the listing grid
pub const PAGE_SIZE: u32 = 6;

/// Everything a search depends on. Equal keys never issue twice.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchKey {
    pub filter: UnitFilter,
    pub page: u32,
}

/// A search the page should send to the backend
#[derive(Clone, Debug, PartialEq)]
pub struct SearchRequest {
    pub ticket: u64,
    pub filter: UnitFilter,
    pub take: u32,
    pub skip: u32,
}

/// Identifies the mount a bounds fetch was started from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Generation(u64);

/// What `complete` did with a response
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    /// Result replaced, error cleared
    Applied,
    /// Error recorded, previous result kept
    Failed,
    /// A newer request superseded this one; nothing changed
    Stale,
}

#[derive(Clone, Debug)]
pub struct SearchOrchestrator {
    ranges: RangeStore,
    drafts: DraftBuffer,
    unit_type: Option<String>,
    view: Option<String>,
    unit_types: Vec<String>,
    cursor: PageCursor,
    page_size: u32,
    next_ticket: u64,
    latest_ticket: Option<u64>,
    last_issued: Option<SearchKey>,
    applied_key: Option<SearchKey>,
    generation: u64,
    result: Option<UnifiedUnits>,
    error: Option<String>,
}

impl Default for SearchOrchestrator {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl SearchOrchestrator {
    pub fn new(page_size: u32) -> Self {
        let ranges = RangeStore::new();
        let mut drafts = DraftBuffer::new();
        for dimension in Dimension::ALL {
            drafts.reset_from(dimension, ranges.committed(dimension));
        }

        SearchOrchestrator {
            ranges,
            drafts,
            unit_type: None,
            view: None,
            unit_types: Vec::new(),
            cursor: PageCursor::default(),
            page_size: page_size.max(1),
            next_ticket: 0,
            latest_ticket: None,
            last_issued: None,
            applied_key: None,
            generation: 0,
            result: None,
            error: None,
        }
    }

    // --- bounds -----------------------------------------------------------

    /// Generation to tag bounds fetches with
    pub fn generation(&self) -> Generation {
        Generation(self.generation)
    }

    /// Applies a bounds fetch result; `None` means the fetch failed.
    ///
    /// Returns `false` for responses from a cancelled mount or for
    /// dimensions that already have bounds.
    pub fn load_bounds(
        &mut self,
        generation: Generation,
        dimension: Dimension,
        bounds: Option<Range>,
    ) -> bool {
        if generation.0 != self.generation {
            tracing::debug!(%dimension, "dropping bounds from a cancelled mount");
            return false;
        }

        match bounds {
            Some(range) => {
                if !self.ranges.load_bounds(dimension, range) {
                    return false;
                }
                tracing::info!(%dimension, min = range.min, max = range.max, "bounds loaded");
            }
            None => {
                if self.ranges.is_loaded(dimension) {
                    return false;
                }
                match self.ranges.load_failed(dimension) {
                    Some(fallback) => tracing::warn!(
                        %dimension,
                        min = fallback.min,
                        max = fallback.max,
                        "bounds fetch failed, using fallback range"
                    ),
                    None => tracing::warn!(%dimension, "bounds fetch failed, filter disabled"),
                }
            }
        }

        self.drafts
            .reset_from(dimension, self.ranges.committed(dimension));
        self.cursor.reset();
        true
    }

    /// Shorthand for a failed bounds fetch
    pub fn load_failed(&mut self, generation: Generation, dimension: Dimension) -> bool {
        self.load_bounds(generation, dimension, None)
    }

    /// Installs the unit types offered by the backend.
    pub fn set_unit_types(&mut self, generation: Generation, mut unit_types: Vec<String>) -> bool {
        if generation.0 != self.generation {
            return false;
        }
        let mut seen = HashSet::new();
        unit_types.retain(|t| seen.insert(t.clone()));

        let kept = discrete::retain_known(self.unit_type.clone(), &unit_types);
        if kept != self.unit_type {
            tracing::debug!(dropped = ?self.unit_type, "selected unit type no longer offered");
            self.unit_type = kept;
            self.cursor.reset();
        }
        self.unit_types = unit_types;
        true
    }

    pub fn unit_types(&self) -> &[String] {
        &self.unit_types
    }

    pub fn range(&self, dimension: Dimension) -> Option<Range> {
        self.ranges.range(dimension)
    }

    pub fn ranges(&self) -> &RangeStore {
        &self.ranges
    }

    // --- drafts and commits -----------------------------------------------

    pub fn committed(&self, dimension: Dimension) -> CommittedRange {
        self.ranges.committed(dimension)
    }

    pub fn draft(&self, dimension: Dimension) -> &DraftPair {
        self.drafts.get(dimension)
    }

    pub fn set_draft_min(&mut self, dimension: Dimension, text: impl Into<String>) {
        self.drafts.set_min(dimension, text);
    }

    pub fn set_draft_max(&mut self, dimension: Dimension, text: impl Into<String>) {
        self.drafts.set_max(dimension, text);
    }

    /// Slider thumb positions, or `None` while the dimension has no bounds
    pub fn slider_values(&self, dimension: Dimension) -> Option<(f64, f64)> {
        let range = self.ranges.range(dimension)?;
        Some(commit::slider_values(self.drafts.get(dimension), range, dimension))
    }

    /// Commits the draft of one dimension (blur or slider release).
    pub fn commit(&mut self, dimension: Dimension) -> CommitOutcome {
        let current = self.ranges.committed(dimension);
        let Some(range) = self.ranges.range(dimension) else {
            return CommitOutcome::unchanged(current);
        };

        let resolved = commit::resolve(self.drafts.get(dimension), range, dimension);
        let changed = self.ranges.set_committed(dimension, resolved);
        let draft_rewritten = self
            .drafts
            .replace_if_different(dimension, resolved.to_draft());

        if changed {
            self.cursor.reset();
            tracing::debug!(
                %dimension,
                min = ?resolved.min,
                max = ?resolved.max,
                "filter committed"
            );
        }

        CommitOutcome {
            committed: resolved,
            changed,
            draft_rewritten,
        }
    }

    /// Sets a committed range from outside the input control. The draft is
    /// always resynced so stale text never survives a programmatic change.
    pub fn set_committed(&mut self, dimension: Dimension, committed: CommittedRange) -> bool {
        let changed = self.ranges.set_committed(dimension, committed);
        self.drafts.reset_from(dimension, committed);
        if changed {
            self.cursor.reset();
        }
        changed
    }

    pub fn unit_type(&self) -> Option<&str> {
        self.unit_type.as_deref()
    }

    /// Takes the raw `<select>` value; empty means any type.
    pub fn set_unit_type(&mut self, value: &str) -> bool {
        self.set_discrete(discrete::normalize_unit_type(value), true)
    }

    pub fn view(&self) -> Option<&str> {
        self.view.as_deref()
    }

    pub fn set_view(&mut self, value: &str) -> bool {
        self.set_discrete(discrete::normalize_view(value), false)
    }

    fn set_discrete(&mut self, value: Option<String>, unit_type: bool) -> bool {
        let slot = if unit_type { &mut self.unit_type } else { &mut self.view };
        if *slot == value {
            return false;
        }
        *slot = value;
        self.cursor.reset();
        true
    }

    /// Back to the spans the page started with.
    pub fn reset_filters(&mut self) -> bool {
        let mut changed = false;
        let spans = self.ranges.initial_spans();
        for dimension in Dimension::ALL {
            changed |= self.set_committed(dimension, spans[dimension.index()]);
        }
        changed |= self.set_discrete(None, true);
        changed |= self.set_discrete(None, false);
        changed
    }

    // --- search -----------------------------------------------------------

    /// Request payload built from the committed filter
    pub fn filter(&self) -> UnitFilter {
        let price = self.ranges.committed(Dimension::Price);
        let area = self.ranges.committed(Dimension::Area);
        let floor = self.ranges.committed(Dimension::Floor);
        let parking = self.ranges.committed(Dimension::Parking);

        UnitFilter {
            min_price: price.min,
            max_price: price.max,
            min_area: area.min,
            max_area: area.max,
            min_floor: floor.min,
            max_floor: floor.max,
            min_parking: parking.min,
            max_parking: parking.max,
            unit_type: self.unit_type.clone(),
            view: self.view.clone(),
        }
    }

    pub fn search_key(&self) -> SearchKey {
        SearchKey {
            filter: self.filter(),
            page: self.cursor.get(),
        }
    }

    /// Builds the next request if the search key changed since the last one
    /// and every bounds fetch has resolved.
    pub fn trigger_search(&mut self) -> Option<SearchRequest> {
        if !self.ranges.is_settled() {
            return None;
        }

        let key = self.search_key();
        if self.last_issued.as_ref() == Some(&key) {
            return None;
        }

        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.latest_ticket = Some(ticket);

        let request = SearchRequest {
            ticket,
            filter: key.filter.clone(),
            take: self.page_size,
            skip: self.cursor.skip(self.page_size),
        };
        tracing::debug!(ticket, page = key.page, skip = request.skip, "issuing search");
        self.last_issued = Some(key);
        Some(request)
    }

    /// Whether a request is still awaiting its response
    pub fn is_loading(&self) -> bool {
        self.latest_ticket.is_some()
    }

    /// Hands a response back. Only the latest ticket is applied.
    pub fn complete(&mut self, ticket: u64, outcome: Result<UnifiedUnits, String>) -> Completion {
        if self.latest_ticket != Some(ticket) {
            tracing::debug!(ticket, latest = ?self.latest_ticket, "dropping stale search response");
            return Completion::Stale;
        }
        self.latest_ticket = None;

        match outcome {
            Ok(units) => {
                tracing::info!(ticket, count = units.units.len(), "search applied");
                self.result = Some(units);
                self.applied_key = self.last_issued.clone();
                self.error = None;
                Completion::Applied
            }
            Err(message) => {
                tracing::error!(ticket, %message, "search failed");
                self.error = Some(message);
                Completion::Failed
            }
        }
    }

    /// Invalidates every outstanding search and bounds fetch.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.latest_ticket = None;
        self.last_issued = None;
    }

    pub fn result(&self) -> Option<&UnifiedUnits> {
        self.result.as_ref()
    }

    pub fn units(&self) -> &[Unit] {
        self.result.as_ref().map_or(&[], |r| r.units.as_slice())
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    // --- pagination -------------------------------------------------------

    pub fn page(&self) -> u32 {
        self.cursor.get()
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// `has_next` only holds while the shown result answers the current key
    /// and nothing newer is in flight.
    pub fn pagination(&self) -> PaginationView {
        let current = !self.is_loading() && self.applied_key.as_ref() == Some(&self.search_key());
        PaginationView::derive(
            self.cursor,
            self.result.as_ref().map(|r| &r.pagination),
            current,
        )
    }

    pub fn next_page(&mut self) -> bool {
        let has_next = self.pagination().has_next;
        pagination::next(&mut self.cursor, has_next)
    }

    pub fn previous_page(&mut self) -> bool {
        pagination::previous(&mut self.cursor)
    }
}
