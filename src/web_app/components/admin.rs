// web_app/components/admin.rs - Back-office components
//
// - AdminStats: headline numbers from `admin/dashboard`
// - LocationSearch: geocode a location and count nearby facilities
// - FileDropZone: drag-and-drop or click-to-pick spreadsheet input

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::web_sys;

use super::common::{format_price, group_thousands, StatCard};
use crate::web_app::app::{report_auth_failure, use_session};
use crate::web_app::model::{AdminLocation, DashboardStats};
use crate::web_app::server_fns::search_location;
use crate::web_app::upload::{has_accepted_extension, SelectedFile, ACCEPT_ATTR};

#[component]
pub fn AdminStats(stats: DashboardStats) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
            <StatCard label="Total projects" value=group_thousands(stats.total_projects as f64) />
            <StatCard label="Total units" value=group_thousands(stats.total_units as f64) accent="text-green-600" />
            <StatCard label="Average price" value=format_price(stats.avg_price, None) accent="text-purple-600" />
        </div>
    }
}

#[component]
pub fn LocationSearch() -> impl IntoView {
    let session = use_session();
    let location = RwSignal::new(String::new());
    let result = RwSignal::new(None::<AdminLocation>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_search = move |_| {
        let query = location.get_untracked();
        if query.trim().is_empty() {
            return;
        }
        error.set(None);
        result.set(None);
        loading.set(true);

        let token = session.token();
        let session = session.clone();
        spawn_local(async move {
            match search_location(query, token).await {
                Ok(found) => {
                    result.try_set(Some(found));
                }
                Err(e) => {
                    let message = e.to_string();
                    report_auth_failure(&session, &message);
                    error.try_set(Some("Could not find that location.".to_string()));
                }
            }
            loading.try_set(false);
        });
    };

    view! {
        <div class="bg-white rounded-xl shadow-lg p-6 space-y-6">
            <h2 class="text-xl font-semibold text-purple-600">"Location search"</h2>

            <div class="flex gap-4">
                <input
                    type="text"
                    placeholder="Enter a location"
                    class="flex-1 border border-gray-300 rounded px-4 py-2"
                    prop:value=move || location.get()
                    on:input=move |ev| location.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="bg-purple-600 text-white px-4 py-2 rounded hover:bg-purple-700 transition disabled:opacity-50"
                    disabled=move || loading.get() || location.with(|l| l.trim().is_empty())
                    on:click=on_search
                >
                    {move || if loading.get() { "Searching..." } else { "Search" }}
                </button>
            </div>

            {move || error.get().map(|message| view! { <div class="text-red-500">{message}</div> })}

            {move || result.get().map(|found| view! { <LocationResult found=found /> })}
        </div>
    }
}

#[component]
fn LocationResult(found: AdminLocation) -> impl IntoView {
    let summary = found.facilities_summary;
    let counts = [
        ("Healthcare", summary.healthcare),
        ("Education", summary.education),
        ("Transport", summary.transport),
        ("Shopping", summary.shopping),
        ("Restaurants", summary.restaurants),
    ];

    view! {
        <div class="space-y-4">
            <div class="text-sm text-gray-600">
                <p class="font-semibold text-gray-800">{found.location}</p>
                <p>
                    <strong>"Coordinates: "</strong>
                    {format!("{}, {}", found.coordinates.latitude, found.coordinates.longitude)}
                </p>
                <p>
                    <strong>"Search radius: "</strong>
                    {format!("{} meters", group_thousands(found.search_radius_meters))}
                </p>
            </div>
            <div class="grid grid-cols-2 sm:grid-cols-3 gap-4 pt-4 text-gray-700">
                {counts
                    .into_iter()
                    .map(|(label, count)| view! { <span>{format!("{}: {}", label, count)}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Spreadsheet picker. Files with other extensions are refused here
/// before the form ever sees them.
#[component]
pub fn FileDropZone(
    /// Called with the file contents once they are read
    on_file: Callback<SelectedFile>,
    /// Name of the currently selected file, if any
    #[prop(into)]
    selected: Signal<Option<String>>,
) -> impl IntoView {
    let dragging = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let accept = move |file: web_sys::File| {
        let name = file.name();
        if !has_accepted_extension(&name) {
            error.set(Some(format!("Only files of type {} are allowed.", ACCEPT_ATTR)));
            return;
        }
        error.set(None);
        read_file(file, on_file);
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        dragging.set(false);
        if let Some(file) = ev.data_transfer().and_then(|dt| dt.files()).and_then(|f| f.get(0)) {
            accept(file);
        }
    };

    let on_change = move |ev: leptos::ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|f| f.get(0)) {
            accept(file);
        }
    };

    let label = move || match selected.get() {
        Some(name) => format!("Selected file: {}", name),
        None => "Drag & drop your file here, or click to select".to_string(),
    };

    view! {
        <div>
            <label
                for="file-upload"
                class=move || {
                    let base = "flex flex-col items-center justify-center p-6 border-2 rounded-lg cursor-pointer transition hover:border-blue-400";
                    if dragging.get() {
                        format!("{} border-blue-600 bg-blue-50", base)
                    } else {
                        format!("{} border-gray-300 bg-white", base)
                    }
                }
                on:dragover=move |ev: leptos::ev::DragEvent| {
                    ev.prevent_default();
                    dragging.set(true);
                }
                on:dragleave=move |ev: leptos::ev::DragEvent| {
                    ev.prevent_default();
                    dragging.set(false);
                }
                on:drop=on_drop
            >
                <input id="file-upload" type="file" accept=ACCEPT_ATTR class="hidden" on:change=on_change />
                <span class="text-gray-600 text-sm">{label}</span>
            </label>
            {move || error.get().map(|message| view! { <p class="text-sm text-red-600 mt-2">{message}</p> })}
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn read_file(file: web_sys::File, on_file: Callback<SelectedFile>) {
    use wasm_bindgen_futures::JsFuture;

    spawn_local(async move {
        match JsFuture::from(file.array_buffer()).await {
            Ok(buffer) => {
                let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
                on_file.run(SelectedFile {
                    name: file.name(),
                    bytes,
                });
            }
            Err(e) => tracing::warn!("could not read {}: {:?}", file.name(), e),
        }
    });
}

// Files only exist in the browser
#[cfg(not(feature = "hydrate"))]
fn read_file(_file: web_sys::File, _on_file: Callback<SelectedFile>) {}
