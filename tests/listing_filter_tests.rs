// tests/listing_filter_tests.rs
// End-to-end scenarios for the listing filter state, driven the way the
// listing page drives it: bounds load, commits, searches and responses.

use realty_listings::web_app::listing::*;
use realty_listings::web_app::model::{UnifiedUnits, Unit, UnitPagination};

const PRICE: Range = Range { min: 100000.0, max: 900000.0 };
const AREA: Range = Range { min: 50.0, max: 300.0 };

/// Orchestrator with price and area loaded and the floor fetch failed
fn settled() -> SearchOrchestrator {
    let mut listing = SearchOrchestrator::default();
    let generation = listing.generation();
    assert!(listing.load_bounds(generation, Dimension::Price, Some(PRICE)));
    assert!(listing.load_bounds(generation, Dimension::Area, Some(AREA)));
    assert!(listing.load_failed(generation, Dimension::Floor));
    listing
}

fn unit(code: &str) -> Unit {
    Unit {
        unit_code: code.to_string(),
        project_name: "Nile Crest".to_string(),
        full_payment: 450000.0,
        unit_type: "Apartment".to_string(),
        floor: 3,
        view: "Garden".to_string(),
        total_area: 120.0,
        completion_date: None,
        main_photo_url: None,
    }
}

fn page_of(codes: &[&str], page: u32, has_next: bool) -> UnifiedUnits {
    UnifiedUnits {
        units: codes.iter().map(|c| unit(c)).collect(),
        pagination: UnitPagination {
            current_page: page,
            has_next,
            has_previous: page > 1,
            page_size: PAGE_SIZE,
            total_count: 40,
            total_pages: 7,
            ..Default::default()
        },
    }
}

/// Issues the pending search and answers it
fn answer(listing: &mut SearchOrchestrator, has_next: bool) -> SearchRequest {
    let request = listing.trigger_search().expect("a search should be due");
    let page = listing.page();
    let completion = listing.complete(request.ticket, Ok(page_of(&["A-1"], page, has_next)));
    assert_eq!(completion, Completion::Applied);
    request
}

fn commit_price(listing: &mut SearchOrchestrator, min: &str, max: &str) -> CommitOutcome {
    listing.set_draft_min(Dimension::Price, min);
    listing.set_draft_max(Dimension::Price, max);
    listing.commit(Dimension::Price)
}

#[test]
fn test_price_below_range_clamps_to_minimum() {
    let mut listing = settled();

    let outcome = commit_price(&mut listing, "50000", "900000");

    assert_eq!(outcome.committed, CommittedRange::new(Some(100000.0), Some(900000.0)));
    assert_eq!(listing.draft(Dimension::Price)[0], "100000");
}

#[test]
fn test_inverted_price_collapses_onto_max() {
    let mut listing = settled();

    let outcome = commit_price(&mut listing, "950000", "900000");

    assert_eq!(outcome.committed, CommittedRange::new(Some(900000.0), Some(900000.0)));
    assert!(outcome.changed);
}

#[test]
fn test_committed_values_stay_inside_bounds() {
    let cases = [
        ("0", "2000000"),
        ("850000", "120000"),
        ("100000", "100000"),
        ("-5", "-1"),
        ("899999.5", "900001"),
    ];

    for (min, max) in cases {
        let mut listing = settled();
        let committed = commit_price(&mut listing, min, max).committed;
        let (lo, hi) = (committed.min.unwrap(), committed.max.unwrap());
        assert!(
            PRICE.min <= lo && lo <= hi && hi <= PRICE.max,
            "draft ({}, {}) committed to {:?}",
            min,
            max,
            committed
        );
    }
}

#[test]
fn test_unparseable_side_commits_unbounded() {
    let mut listing = settled();

    let outcome = commit_price(&mut listing, "abc", "500000");

    assert_eq!(outcome.committed, CommittedRange::new(None, Some(500000.0)));
    assert_eq!(listing.draft(Dimension::Price)[0], "");
    assert_eq!(listing.filter().min_price, None);
    assert_eq!(listing.filter().max_price, Some(500000.0));
}

#[test]
fn test_recommitting_same_value_changes_nothing() {
    let mut listing = settled();
    commit_price(&mut listing, "200000", "400000");
    answer(&mut listing, false);
    let key = listing.search_key();

    let again = listing.commit(Dimension::Price);

    assert!(!again.changed);
    assert_eq!(listing.search_key(), key);
    assert!(listing.trigger_search().is_none());
}

#[test]
fn test_filter_change_resets_page_to_one() {
    let mut listing = settled();
    answer(&mut listing, true);
    for _ in 0..4 {
        assert!(listing.next_page());
        answer(&mut listing, true);
    }
    assert_eq!(listing.page(), 5);

    commit_price(&mut listing, "300000", "700000");

    assert_eq!(listing.page(), 1);
    let request = listing.trigger_search().unwrap();
    assert_eq!(request.skip, 0);
    assert_eq!(request.take, PAGE_SIZE);
}

#[test]
fn test_discrete_filters_reset_page_too() {
    let mut listing = settled();
    answer(&mut listing, true);
    listing.next_page();
    assert_eq!(listing.page(), 2);

    assert!(listing.set_unit_type("Villa"));
    assert_eq!(listing.page(), 1);

    listing.next_page();
    assert!(!listing.set_unit_type("Villa"));
}

#[test]
fn test_page_moves_are_bounded() {
    let mut listing = settled();
    assert!(!listing.previous_page());

    answer(&mut listing, false);
    assert!(!listing.next_page());
    assert_eq!(listing.page(), 1);

    assert!(!listing.pagination().has_previous);
    assert!(!listing.pagination().has_next);
}

#[test]
fn test_next_page_request_skips_a_page() {
    let mut listing = settled();
    answer(&mut listing, true);
    listing.next_page();

    let request = listing.trigger_search().unwrap();

    assert_eq!(request.skip, PAGE_SIZE);
    assert_eq!(listing.pagination().label(), "Page 2 of 7");
}

#[test]
fn test_programmatic_commit_resyncs_draft() {
    let mut listing = settled();
    listing.set_draft_min(Dimension::Price, "abc");

    listing.set_committed(Dimension::Price, CommittedRange::new(Some(500.0), Some(1000.0)));

    assert_eq!(listing.draft(Dimension::Price), &["500".to_string(), "1000".to_string()]);
}

#[test]
fn test_stale_response_is_never_applied() {
    let mut listing = settled();
    let first = listing.trigger_search().unwrap();
    commit_price(&mut listing, "200000", "300000");
    let second = listing.trigger_search().unwrap();
    assert!(second.ticket > first.ticket);

    let newest = listing.complete(second.ticket, Ok(page_of(&["NEW"], 1, false)));
    let late = listing.complete(first.ticket, Ok(page_of(&["OLD"], 1, false)));

    assert_eq!(newest, Completion::Applied);
    assert_eq!(late, Completion::Stale);
    assert_eq!(listing.units()[0].unit_code, "NEW");
}

#[test]
fn test_cancel_drops_outstanding_responses() {
    let mut listing = settled();
    let request = listing.trigger_search().unwrap();
    let generation = listing.generation();

    listing.cancel();

    assert_eq!(
        listing.complete(request.ticket, Ok(page_of(&["LATE"], 1, false))),
        Completion::Stale
    );
    assert!(listing.result().is_none());
    assert!(!listing.is_loading());
    assert!(!listing.load_bounds(generation, Dimension::Floor, Some(Range::new(0.0, 10.0))));
}

#[test]
fn test_failure_keeps_units_until_next_success() {
    let mut listing = settled();
    answer(&mut listing, true);
    listing.next_page();

    let failing = listing.trigger_search().unwrap();
    assert_eq!(
        listing.complete(
            failing.ticket,
            Err("Search failed: backend error 502: bad gateway".into())
        ),
        Completion::Failed
    );
    assert_eq!(listing.units().len(), 1);
    assert!(listing.error().unwrap().contains("502"));

    listing.previous_page();
    answer(&mut listing, true);
    assert_eq!(listing.error(), None);
}

#[test]
fn test_floor_failure_uses_fallback_and_stays_unbounded() {
    let listing = settled();

    assert_eq!(listing.range(Dimension::Floor), Some(FLOOR_FALLBACK_RANGE));
    assert_eq!(listing.committed(Dimension::Floor), CommittedRange::UNBOUNDED);
    assert_eq!(listing.ranges().source(Dimension::Floor), BoundsSource::Fallback);

    let filter = listing.filter();
    assert_eq!((filter.min_floor, filter.max_floor), (None, None));
    assert_eq!((filter.min_price, filter.max_price), (Some(PRICE.min), Some(PRICE.max)));
}

#[test]
fn test_reset_filters_restores_loaded_spans() {
    let mut listing = settled();
    commit_price(&mut listing, "200000", "300000");
    listing.set_view(" Sea ");
    assert_eq!(listing.view(), Some("Sea"));

    assert!(listing.reset_filters());

    assert_eq!(listing.committed(Dimension::Price), CommittedRange::full(PRICE));
    assert_eq!(listing.view(), None);
    assert!(!listing.reset_filters());
}

#[test]
fn test_unit_type_dropped_by_backend_resets_page() {
    let mut listing = settled();
    let generation = listing.generation();
    listing.set_unit_types(generation, vec!["Chalet".into(), "Villa".into()]);
    assert!(listing.set_unit_type("Chalet"));
    answer(&mut listing, true);
    listing.next_page();
    answer(&mut listing, true);
    listing.next_page();
    assert_eq!(listing.page(), 3);

    listing.set_unit_types(generation, vec!["Villa".into()]);

    assert_eq!(listing.unit_type(), None);
    assert_eq!(listing.page(), 1);
    let request = listing.trigger_search().unwrap();
    assert_eq!(request.skip, 0);
    assert_eq!(request.filter.unit_type, None);
}

#[test]
fn test_unit_type_still_offered_keeps_page() {
    let mut listing = settled();
    let generation = listing.generation();
    listing.set_unit_type("Villa");
    answer(&mut listing, true);
    listing.next_page();

    listing.set_unit_types(generation, vec!["Apartment".into(), "Villa".into()]);

    assert_eq!(listing.unit_type(), Some("Villa"));
    assert_eq!(listing.page(), 2);
}

#[test]
fn test_unit_types_deduplicated_in_order() {
    let mut listing = settled();
    let generation = listing.generation();

    listing.set_unit_types(
        generation,
        vec!["Villa".into(), "Apartment".into(), "Villa".into(), "Apartment".into()],
    );

    assert_eq!(listing.unit_types(), &["Villa".to_string(), "Apartment".to_string()]);
}

#[test]
fn test_next_waits_for_the_current_page() {
    let mut listing = settled();
    let request = listing.trigger_search().unwrap();
    let mut first = page_of(&["A-1"], 1, true);
    first.pagination.total_pages = 2;
    listing.complete(request.ticket, Ok(first));

    assert!(listing.next_page());
    assert!(!listing.pagination().has_next);
    assert!(!listing.next_page());

    let second = listing.trigger_search().unwrap();
    assert_eq!(second.skip, PAGE_SIZE);
    assert!(listing.is_loading());
    assert!(!listing.next_page());
    assert_eq!(listing.page(), 2);

    let mut last = page_of(&["A-7"], 2, false);
    last.pagination.total_pages = 2;
    listing.complete(second.ticket, Ok(last));
    assert!(!listing.next_page());
    assert_eq!(listing.page(), 2);
    assert!(listing.trigger_search().is_none());
}

#[test]
fn test_next_after_filter_change_waits_for_new_result() {
    let mut listing = settled();
    answer(&mut listing, true);

    commit_price(&mut listing, "200000", "300000");

    assert!(!listing.pagination().has_next);
    assert!(!listing.next_page());
    answer(&mut listing, true);
    assert!(listing.next_page());
}
