// web_app/components/filters.rs - Listing filter controls
//
// Every control reads and writes the page's `SearchOrchestrator`. Typing
// only touches the draft; blur, Enter or slider release commits it.

use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;

use crate::web_app::listing::{Dimension, SearchOrchestrator};

/// Min/max inputs plus a pair of sliders for one range dimension.
///
/// Hidden until the dimension has bounds.
#[component]
pub fn RangeFilter(
    /// Listing state shared with the page
    listing: RwSignal<SearchOrchestrator>,
    dimension: Dimension,
) -> impl IntoView {
    let range = move || listing.with(|s| s.range(dimension));
    let draft = move |side: usize| listing.with(|s| s.draft(dimension)[side].clone());
    let slider = move |side: usize| {
        listing.with(|s| {
            s.slider_values(dimension)
                .map(|(lo, hi)| if side == 0 { lo } else { hi })
                .unwrap_or_default()
        })
    };

    let set_draft = move |side: usize, text: String| {
        listing.update(|s| {
            if side == 0 {
                s.set_draft_min(dimension, text)
            } else {
                s.set_draft_max(dimension, text)
            }
        })
    };
    let commit = move || {
        listing.update(|s| {
            s.commit(dimension);
        })
    };

    let commit_on_enter = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            commit();
        }
    };

    let input_class = "w-full px-2 py-1.5 border border-gray-200 rounded text-sm focus:ring-2 focus:ring-blue-500";

    view! {
        <Show when=move || range().is_some()>
            <div class="space-y-3" data-dimension=dimension.to_string()>
                <h3 class="font-bold text-gray-900 flex items-center gap-2 text-sm uppercase tracking-wide">
                    <span class="text-blue-500">"▼"</span>
                    {dimension.label()}
                </h3>
                <div class="flex items-center gap-2 bg-white p-1 rounded-lg border border-gray-200">
                    <input
                        type="number"
                        placeholder="Min"
                        class=input_class
                        step=dimension.step()
                        prop:value=move || draft(0)
                        on:input=move |ev| set_draft(0, event_target_value(&ev))
                        on:blur=move |_| commit()
                        on:keydown=commit_on_enter
                    />
                    <span class="text-gray-300">"–"</span>
                    <input
                        type="number"
                        placeholder="Max"
                        class=input_class
                        step=dimension.step()
                        prop:value=move || draft(1)
                        on:input=move |ev| set_draft(1, event_target_value(&ev))
                        on:blur=move |_| commit()
                        on:keydown=commit_on_enter
                    />
                </div>
                <div class="flex flex-col gap-1">
                    <input
                        type="range"
                        class="w-full accent-blue-600"
                        min=move || range().map(|r| r.min).unwrap_or_default()
                        max=move || range().map(|r| r.max).unwrap_or_default()
                        step=dimension.step()
                        prop:value=move || slider(0)
                        on:input=move |ev| set_draft(0, event_target_value(&ev))
                        on:change=move |_| commit()
                    />
                    <input
                        type="range"
                        class="w-full accent-blue-600"
                        min=move || range().map(|r| r.min).unwrap_or_default()
                        max=move || range().map(|r| r.max).unwrap_or_default()
                        step=dimension.step()
                        prop:value=move || slider(1)
                        on:input=move |ev| set_draft(1, event_target_value(&ev))
                        on:change=move |_| commit()
                    />
                </div>
            </div>
        </Show>
    }
}

/// Unit type dropdown fed by `available-unit-types`
#[component]
pub fn UnitTypeSelect(listing: RwSignal<SearchOrchestrator>) -> impl IntoView {
    let options = move || listing.with(|s| s.unit_types().to_vec());
    let selected = move || listing.with(|s| s.unit_type().unwrap_or_default().to_string());

    view! {
        <div class="space-y-3">
            <h3 class="font-bold text-gray-900 text-sm uppercase tracking-wide">"Unit Type"</h3>
            <select
                class="w-full px-4 py-2 border border-gray-300 rounded-lg bg-white \
                       focus:ring-2 focus:ring-blue-500 outline-none cursor-pointer shadow-sm"
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    listing.update(|s| {
                        s.set_unit_type(&value);
                    });
                }
            >
                <option value="" selected=move || selected().is_empty()>"All"</option>
                <For
                    each=options
                    key=|unit_type| unit_type.clone()
                    let:unit_type
                >
                    {
                        let value = unit_type.clone();
                        view! {
                            <option value=unit_type.clone() selected=move || selected() == value>
                                {unit_type.clone()}
                            </option>
                        }
                    }
                </For>
            </select>
        </div>
    }
}

/// Free-text view filter, committed on blur
#[component]
pub fn ViewInput(listing: RwSignal<SearchOrchestrator>) -> impl IntoView {
    let text = RwSignal::new(
        listing.with_untracked(|s| s.view().unwrap_or_default().to_string()),
    );

    // Follow external resets; the memo keeps unrelated updates from
    // clobbering text that has not been committed yet.
    let committed = Memo::new(move |_| listing.with(|s| s.view().unwrap_or_default().to_string()));
    Effect::new(move |_| text.set(committed.get()));

    view! {
        <div class="space-y-3">
            <h3 class="font-bold text-gray-900 text-sm uppercase tracking-wide">"View"</h3>
            <input
                type="text"
                placeholder="e.g. Garden, Sea"
                class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 outline-none"
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
                on:blur=move |_| {
                    let value = text.get_untracked();
                    listing.update(|s| {
                        s.set_view(&value);
                    });
                }
            />
        </div>
    }
}

/// Sidebar with every listing filter
#[component]
pub fn FilterPanel(listing: RwSignal<SearchOrchestrator>) -> impl IntoView {
    let on_reset = move |_| {
        listing.update(|s| {
            s.reset_filters();
        });
    };

    view! {
        <aside class="bg-white rounded-2xl shadow-sm border border-gray-100 p-6 space-y-6">
            <div class="flex items-center justify-between">
                <h2 class="text-lg font-bold text-gray-900">"Filters"</h2>
                <button
                    type="button"
                    class="text-sm text-blue-600 hover:text-blue-800"
                    on:click=on_reset
                >
                    "Reset"
                </button>
            </div>

            {Dimension::ALL
                .into_iter()
                .map(|dimension| view! { <RangeFilter listing=listing dimension=dimension /> })
                .collect_view()}

            <UnitTypeSelect listing=listing />
            <ViewInput listing=listing />
        </aside>
    }
}
