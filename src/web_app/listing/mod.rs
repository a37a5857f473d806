// web_app/listing/mod.rs - Listing filter and search core
//
// Plain Rust with no Leptos or network types, so it builds and tests
// without any feature enabled. The listing page wraps a `SearchOrchestrator`
// in a signal and drives it from effects.

pub mod commit;
pub mod discrete;
pub mod draft;
pub mod orchestrator;
pub mod pagination;
pub mod range;

pub use commit::{parse_draft, resolve, CommitOutcome};
pub use draft::{DraftBuffer, DraftPair};
pub use orchestrator::{
    Completion, Generation, SearchKey, SearchOrchestrator, SearchRequest, PAGE_SIZE,
};
pub use pagination::{PageCursor, PaginationView};
pub use range::{
    format_value, BoundsSource, CommittedRange, Dimension, Range, RangeStore,
    FLOOR_FALLBACK_RANGE, PARKING_RANGE,
};
