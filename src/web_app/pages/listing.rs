// web_app/pages/listing.rs - Unit listing page
//
// Holds the page's `SearchOrchestrator` in one signal. On mount the bounds
// and unit types are fetched; after that every change to the search key
// issues one search. Responses come back through `try_update` so that late
// ones after unmount are dropped.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::app::{report_auth_failure, use_session};
use crate::web_app::components::*;
use crate::web_app::listing::{Dimension, SearchOrchestrator};
use crate::web_app::server_fns::{get_range_bounds, get_unit_types, search_units};

#[component]
pub fn ListingPage() -> impl IntoView {
    let session = use_session();
    let listing = RwSignal::new(SearchOrchestrator::default());

    // Bounds and unit types, tagged with this mount's generation. Reads
    // nothing reactive, so it runs once.
    Effect::new({
        let session = session.clone();
        move |_| {
            let generation = listing.with_untracked(|s| s.generation());
            let token = session.token();

            for dimension in Dimension::ALL.into_iter().filter(|d| d.is_fetched()) {
                let token = token.clone();
                let session = session.clone();
                spawn_local(async move {
                    let bounds = match get_range_bounds(dimension, token).await {
                        Ok(range) => Some(range),
                        Err(e) => {
                            report_auth_failure(&session, &e.to_string());
                            None
                        }
                    };
                    listing.try_update(|s| s.load_bounds(generation, dimension, bounds));
                });
            }

            let session = session.clone();
            spawn_local(async move {
                match get_unit_types(token).await {
                    Ok(unit_types) => {
                        listing.try_update(|s| s.set_unit_types(generation, unit_types));
                    }
                    Err(e) => {
                        if !report_auth_failure(&session, &e.to_string()) {
                            tracing::warn!("unit types unavailable: {}", e);
                        }
                    }
                }
            });
        }
    });

    // Only the settled flag and the search key wake the search effect;
    // drafts and results changing do not.
    let trigger = Memo::new(move |_| listing.with(|s| (s.ranges().is_settled(), s.search_key())));

    Effect::new({
        let session = session.clone();
        move |_| {
            trigger.track();
            let Some(request) = listing.try_update(|s| s.trigger_search()).flatten() else {
                return;
            };

            let token = session.token();
            let session = session.clone();
            spawn_local(async move {
                let outcome = search_units(request.filter, request.take, request.skip, token)
                    .await
                    .map_err(|e| e.to_string());
                if let Err(message) = &outcome {
                    report_auth_failure(&session, message);
                }
                listing.try_update(|s| s.complete(request.ticket, outcome));
            });
        }
    });

    on_cleanup(move || {
        listing.try_update(|s| s.cancel());
    });

    let has_result = move || listing.with(|s| s.result().is_some());

    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <div class="flex flex-col lg:flex-row gap-8 items-start">
                <div class="w-full lg:w-72 flex-shrink-0">
                    <FilterPanel listing=listing />
                </div>

                <section class="flex-1 w-full min-w-0">
                    <UnitGrid listing=listing />
                    <Show when=has_result>
                        <Pagination listing=listing />
                    </Show>
                </section>
            </div>

            <AssistantLauncher />
        </div>
    }
}
