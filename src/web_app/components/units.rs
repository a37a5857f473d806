// web_app/components/units.rs - Listing results
//
// - UnitCard: one unit in the grid, links to its detail page
// - UnitGrid: result grid with empty state and stale-data error banner
// - Pagination: previous/next driven by the page cursor

use leptos::prelude::*;

use super::common::{format_area, format_price, Badge, Loading};
use crate::web_app::listing::SearchOrchestrator;
use crate::web_app::model::Unit;

/// Detail page path for a unit
pub fn unit_href(unit_code: &str) -> String {
    format!("/house/{}", unit_code)
}

#[component]
pub fn UnitCard(unit: Unit) -> impl IntoView {
    let href = unit_href(&unit.unit_code);
    let completion = unit
        .completion_date
        .as_ref()
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string());

    view! {
        <a
            href=href
            class="group bg-white rounded-xl shadow-sm hover:shadow-xl \
                   transition-all duration-300 border border-gray-100 \
                   flex flex-col h-full overflow-hidden transform hover:-translate-y-1"
        >
            {match unit.main_photo_url.clone() {
                Some(url) => view! {
                    <img src=url alt=unit.project_name.clone() class="h-48 w-full object-cover" loading="lazy" />
                }.into_any(),
                None => view! {
                    <div class="h-48 bg-gray-100 flex items-center justify-center text-gray-300">
                        <span class="text-4xl">"🏠"</span>
                    </div>
                }.into_any(),
            }}

            <div class="p-5 flex flex-col flex-1 gap-3">
                <div class="flex justify-between items-start">
                    <h3 class="font-bold text-gray-900 line-clamp-2 text-lg group-hover:text-blue-600 transition-colors">
                        {unit.project_name.clone()}
                    </h3>
                    <Badge variant="blue">{unit.unit_type.clone()}</Badge>
                </div>

                <span class="text-lg font-bold text-blue-600">
                    {format_price(unit.full_payment, None)}
                </span>

                <dl class="grid grid-cols-2 gap-2 text-sm text-gray-600 pt-3 border-t border-gray-100">
                    <dt class="text-gray-400">"Area"</dt>
                    <dd>{format_area(unit.total_area, None)}</dd>
                    <dt class="text-gray-400">"Floor"</dt>
                    <dd>{unit.floor}</dd>
                    <dt class="text-gray-400">"View"</dt>
                    <dd>{unit.view.clone()}</dd>
                    <dt class="text-gray-400">"Delivery"</dt>
                    <dd>{completion}</dd>
                </dl>

                <span class="text-xs text-gray-400 font-mono">{unit.unit_code.clone()}</span>
            </div>
        </a>
    }
}

/// Results of the last applied search.
///
/// A failed search keeps the previous units on screen with the error above
/// them.
#[component]
pub fn UnitGrid(listing: RwSignal<SearchOrchestrator>) -> impl IntoView {
    let units = move || listing.with(|s| s.units().to_vec());
    let has_result = move || listing.with(|s| s.result().is_some());
    let loading = move || listing.with(|s| s.is_loading());
    let error = move || listing.with(|s| s.error().map(str::to_string));
    let total = move || listing.with(|s| s.pagination().total_count);

    view! {
        <div class="w-full space-y-6">
            {move || error().map(|message| view! {
                <div class="bg-red-50 border border-red-200 rounded-lg px-4 py-3 text-sm text-red-700" role="alert">
                    {message}
                </div>
            })}

            <Show
                when=has_result
                fallback=move || view! { <Loading message="Loading units..." /> }
            >
                <div class="flex justify-between items-center">
                    <span class="text-gray-500 font-medium">
                        {move || match total() {
                            1 => "1 unit found".to_string(),
                            count => format!("{} units found", count),
                        }}
                    </span>
                    <Show when=loading>
                        <span class="text-sm text-gray-400 animate-pulse">"Updating..."</span>
                    </Show>
                </div>

                <Show
                    when=move || !units().is_empty()
                    fallback=|| view! {
                        <div class="text-center py-16 bg-white rounded-2xl border border-dashed border-gray-300">
                            <div class="text-gray-300 text-6xl mb-4">"🏘"</div>
                            <h3 class="text-xl font-bold text-gray-900 mb-2">"No units found"</h3>
                            <p class="text-gray-500 max-w-md mx-auto">
                                "Try widening the price or area range, or clearing the unit type."
                            </p>
                        </div>
                    }
                >
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        <For
                            each=units
                            key=|unit| unit.unit_code.clone()
                            children=move |unit| view! { <UnitCard unit=unit /> }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}

/// Previous/next buttons. They only move the cursor; the page's search
/// effect picks up the new page.
#[component]
pub fn Pagination(listing: RwSignal<SearchOrchestrator>) -> impl IntoView {
    let view_model = move || listing.with(|s| s.pagination());

    let go_prev = move |_| {
        listing.update(|s| {
            s.previous_page();
        });
    };
    let go_next = move |_| {
        listing.update(|s| {
            s.next_page();
        });
    };

    let button_class = "px-4 py-2 bg-white border border-gray-200 rounded-lg shadow-sm \
                        disabled:opacity-50 disabled:cursor-not-allowed \
                        hover:bg-gray-50 hover:border-gray-300 transition-all font-medium text-gray-700";

    view! {
        <div class="flex items-center justify-center gap-4 mt-12 mb-8">
            <button
                type="button"
                class=button_class
                disabled=move || !view_model().has_previous
                on:click=go_prev
            >
                "← Previous"
            </button>

            <span class="text-sm font-medium text-gray-600 bg-gray-100 px-4 py-2 rounded-lg">
                {move || view_model().label()}
            </span>

            <button
                type="button"
                class=button_class
                disabled=move || !view_model().has_next || listing.with(|s| s.is_loading())
                on:click=go_next
            >
                "Next →"
            </button>
        </div>
    }
}
