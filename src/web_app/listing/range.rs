// web_app/listing/range.rs - Absolute bounds and committed sub-ranges
//
// Each filterable dimension has an absolute `Range` (from the backend, or a
// constant) and a `CommittedRange` that the next search request carries.

use serde::{Deserialize, Serialize};

/// Parking has no backend endpoint; its bounds are fixed.
pub const PARKING_RANGE: Range = Range { min: 1.0, max: 3.0 };

/// Installed when `available-floors` fails.
pub const FLOOR_FALLBACK_RANGE: Range = Range { min: 0.0, max: 30.0 };

/// Range-filtered dimension of a unit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Price,
    Area,
    Floor,
    Parking,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Price,
        Dimension::Area,
        Dimension::Floor,
        Dimension::Parking,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            Dimension::Price => 0,
            Dimension::Area => 1,
            Dimension::Floor => 2,
            Dimension::Parking => 3,
        }
    }

    /// Floors and parking slots are whole numbers.
    pub fn is_integral(self) -> bool {
        matches!(self, Dimension::Floor | Dimension::Parking)
    }

    /// Whether bounds come from a backend call at mount.
    pub fn is_fetched(self) -> bool {
        !matches!(self, Dimension::Parking)
    }

    /// Bounds to use when the backend call fails, if the dimension has any.
    pub fn fallback_range(self) -> Option<Range> {
        match self {
            Dimension::Floor => Some(FLOOR_FALLBACK_RANGE),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Dimension::Price => "Price Range",
            Dimension::Area => "Area Range",
            Dimension::Floor => "Floor Range",
            Dimension::Parking => "Parking Slots",
        }
    }

    /// Slider step
    pub fn step(self) -> f64 {
        match self {
            Dimension::Price => 1000.0,
            Dimension::Area => 1.0,
            Dimension::Floor | Dimension::Parking => 1.0,
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::Price => write!(f, "price"),
            Dimension::Area => write!(f, "area"),
            Dimension::Floor => write!(f, "floor"),
            Dimension::Parking => write!(f, "parking"),
        }
    }
}

/// Absolute bounds of a dimension
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    /// Builds a range, swapping the ends if the backend sent them reversed.
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Range { min, max }
        } else {
            Range { min: max, max: min }
        }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Selected sub-range. `None` on a side means unbounded on that side,
/// which is not the same as "equal to the absolute bound".
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CommittedRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl CommittedRange {
    pub const UNBOUNDED: CommittedRange = CommittedRange { min: None, max: None };

    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        CommittedRange { min, max }
    }

    /// The whole span of `range`
    pub fn full(range: Range) -> Self {
        CommittedRange {
            min: Some(range.min),
            max: Some(range.max),
        }
    }

    /// Textbox form of the committed values
    pub fn to_draft(&self) -> [String; 2] {
        [format_value(self.min), format_value(self.max)]
    }
}

/// Stringifies a bound the way the inputs display it; `None` is an empty box.
pub fn format_value(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Where a dimension's bounds came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundsSource {
    /// Fetch not resolved yet
    Pending,
    /// Loaded from the backend
    Fetched,
    /// Fetch failed, fallback range installed
    Fallback,
    /// Fetch failed, no fallback
    Missing,
    /// Fixed bounds, never fetched
    Constant,
}

impl BoundsSource {
    fn is_settled(self) -> bool {
        !matches!(self, BoundsSource::Pending)
    }
}

/// Server-provided bounds plus the committed sub-range for every dimension.
///
/// Bounds are written once per dimension; committed ranges are only
/// changed through the orchestrator.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeStore {
    bounds: [Option<Range>; 4],
    committed: [CommittedRange; 4],
    sources: [BoundsSource; 4],
}

impl Default for RangeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeStore {
    pub fn new() -> Self {
        let mut store = RangeStore {
            bounds: [None; 4],
            committed: [CommittedRange::UNBOUNDED; 4],
            sources: [BoundsSource::Pending; 4],
        };
        store.bounds[Dimension::Parking.index()] = Some(PARKING_RANGE);
        store.sources[Dimension::Parking.index()] = BoundsSource::Constant;
        store
    }

    pub fn range(&self, dimension: Dimension) -> Option<Range> {
        self.bounds[dimension.index()]
    }

    pub fn source(&self, dimension: Dimension) -> BoundsSource {
        self.sources[dimension.index()]
    }

    pub fn committed(&self, dimension: Dimension) -> CommittedRange {
        self.committed[dimension.index()]
    }

    /// Returns whether the committed range actually changed.
    pub fn set_committed(&mut self, dimension: Dimension, committed: CommittedRange) -> bool {
        let slot = &mut self.committed[dimension.index()];
        if *slot == committed {
            return false;
        }
        *slot = committed;
        true
    }

    /// Installs bounds from the backend and commits their full span.
    ///
    /// Returns `false` (and changes nothing) if the dimension already has
    /// bounds from an earlier load.
    pub fn load_bounds(&mut self, dimension: Dimension, range: Range) -> bool {
        let i = dimension.index();
        if self.sources[i].is_settled() {
            tracing::warn!(%dimension, "ignoring repeated bounds load");
            return false;
        }
        self.bounds[i] = Some(range);
        self.committed[i] = CommittedRange::full(range);
        self.sources[i] = BoundsSource::Fetched;
        true
    }

    /// Marks a failed bounds fetch as settled and installs the fallback
    /// range when the dimension has one. The committed range stays unbounded.
    pub fn load_failed(&mut self, dimension: Dimension) -> Option<Range> {
        let i = dimension.index();
        if self.sources[i].is_settled() {
            return self.bounds[i];
        }
        self.bounds[i] = dimension.fallback_range();
        self.sources[i] = match self.bounds[i] {
            Some(_) => BoundsSource::Fallback,
            None => BoundsSource::Missing,
        };
        self.bounds[i]
    }

    pub fn is_loaded(&self, dimension: Dimension) -> bool {
        self.sources[dimension.index()].is_settled()
    }

    /// True once every fetched dimension has either loaded or failed.
    pub fn is_settled(&self) -> bool {
        self.sources.iter().all(|s| s.is_settled())
    }

    /// Committed ranges as they were right after the bounds loaded
    pub(crate) fn initial_spans(&self) -> [CommittedRange; 4] {
        let mut spans = [CommittedRange::UNBOUNDED; 4];
        for dimension in Dimension::ALL {
            let i = dimension.index();
            if let (BoundsSource::Fetched, Some(range)) = (self.sources[i], self.bounds[i]) {
                spans[i] = CommittedRange::full(range);
            }
        }
        spans
    }
}
