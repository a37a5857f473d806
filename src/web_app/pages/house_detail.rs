// web_app/pages/house_detail.rs - Single unit page
//
// Loads `units/{unit_code}` for the code in the route and shows the unit
// facts, payment plans, areas and what is around the project.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::web_app::app::{report_auth_failure, use_session};
use crate::web_app::components::{
    format_area, format_price, group_thousands, Badge, ErrorDisplay, Loading,
};
use crate::web_app::model::{LocationInfo, UnitDetail};
use crate::web_app::server_fns::get_unit_detail;

#[component]
pub fn HouseDetailPage() -> impl IntoView {
    let session = use_session();
    let params = use_params_map();
    let unit_code = move || params.with(|p| p.get("unit_code").unwrap_or_default());

    // Ok(None) means there is no unit code to look up
    let detail = LocalResource::new(move || {
        let code = unit_code();
        let session = session.clone();
        async move {
            if code.trim().is_empty() {
                return Ok(None);
            }
            match get_unit_detail(code, session.token()).await {
                Ok(detail) => Ok(Some(detail)),
                Err(e) => {
                    let message = e.to_string();
                    report_auth_failure(&session, &message);
                    Err(message)
                }
            }
        }
    });

    view! {
        <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-6">
            <a href="/" class="text-sm text-blue-600 hover:underline">"← Back to listings"</a>
            {move || match detail.get() {
                None => view! { <Loading message="Loading unit..." /> }.into_any(),
                Some(Err(e)) => {
                    view! { <ErrorDisplay error=e title="Could not load this unit" /> }.into_any()
                }
                Some(Ok(None)) => view! { <UnitNotFound /> }.into_any(),
                Some(Ok(Some(detail))) => view! { <UnitDetailView detail=detail /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn UnitNotFound() -> impl IntoView {
    view! {
        <div class="text-center py-16 bg-white rounded-2xl border border-dashed border-gray-300">
            <h2 class="text-xl font-bold text-gray-900 mb-2">"Unit not found"</h2>
            <p class="text-gray-500">"The link does not name a unit."</p>
        </div>
    }
}

#[component]
fn UnitDetailView(detail: UnitDetail) -> impl IntoView {
    let currency = detail.currency.clone();
    let area_unit = detail.area_unit.clone();
    let plans = detail.payment_plans();
    let areas = detail.areas();
    let completion = detail
        .completion_date
        .as_ref()
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string());
    let photo = detail
        .location_info
        .as_ref()
        .and_then(|info| info.photos.as_ref())
        .and_then(|photos| photos.main_photo_url.clone());

    view! {
        <article class="bg-white rounded-2xl shadow-sm border border-gray-100 overflow-hidden">
            {photo.map(|url| view! {
                <img src=url alt=detail.project_name.clone() class="w-full h-72 object-cover" />
            })}

            <div class="p-8 space-y-8">
                <header class="flex flex-wrap items-start justify-between gap-4">
                    <div>
                        <h1 class="text-3xl font-bold text-gray-900">{detail.project_name.clone()}</h1>
                        <p class="text-sm text-gray-400 font-mono mt-1">{detail.unit_code.clone()}</p>
                    </div>
                    <div class="flex gap-2">
                        <Badge variant="blue">{detail.unit_type.clone()}</Badge>
                        {detail.status.clone().map(|status| view! { <Badge variant="green">{status}</Badge> })}
                    </div>
                </header>

                <dl class="grid grid-cols-2 md:grid-cols-3 gap-4 text-sm">
                    <Fact label="Floor" value=detail.floor.to_string() />
                    <Fact label="View" value=detail.view.clone() />
                    <Fact label="Delivery" value=completion />
                </dl>

                <section class="grid md:grid-cols-2 gap-8">
                    <div>
                        <h2 class="text-lg font-semibold text-gray-900 mb-3">"Payment plans"</h2>
                        <ul class="divide-y divide-gray-100">
                            {plans
                                .into_iter()
                                .map(|(label, value)| view! {
                                    <li class="flex justify-between py-2 text-sm">
                                        <span class="text-gray-500">{label}</span>
                                        <span class="font-semibold text-blue-600">
                                            {format_price(value, currency.as_deref())}
                                        </span>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h2 class="text-lg font-semibold text-gray-900 mb-3">"Areas"</h2>
                        <ul class="divide-y divide-gray-100">
                            {areas
                                .into_iter()
                                .map(|(label, value)| view! {
                                    <li class="flex justify-between py-2 text-sm">
                                        <span class="text-gray-500">{label}</span>
                                        <span class="font-semibold">{format_area(value, area_unit.as_deref())}</span>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </section>

                {detail.location_info.clone().map(|info| view! { <LocationPanel info=info /> })}
            </div>
        </article>
    }
}

#[component]
fn Fact(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="bg-gray-50 rounded-lg p-3">
            <dt class="text-gray-400">{label}</dt>
            <dd class="font-medium text-gray-900">{value}</dd>
        </div>
    }
}

#[component]
fn LocationPanel(info: LocationInfo) -> impl IntoView {
    let project = info.project_details.unwrap_or_default();
    let rows = [
        ("Address", project.address),
        ("Builder", project.builder),
        ("Completion", project.completion_date),
        ("Contact", project.contact_info),
    ];
    let counts = info.facilities_data.map(|f| f.counts());

    view! {
        <section class="space-y-4 border-t border-gray-100 pt-6">
            <h2 class="text-lg font-semibold text-gray-900">"Location"</h2>

            <dl class="grid md:grid-cols-2 gap-x-8 gap-y-2 text-sm">
                {rows
                    .into_iter()
                    .filter_map(|(label, value)| value.map(|v| (label, v)))
                    .map(|(label, value)| view! {
                        <div class="flex gap-2">
                            <dt class="text-gray-400 w-28">{label}</dt>
                            <dd class="text-gray-800">{value}</dd>
                        </div>
                    })
                    .collect_view()}
                {project.website.map(|url| view! {
                    <div class="flex gap-2">
                        <dt class="text-gray-400 w-28">"Website"</dt>
                        <dd>
                            <a href=url.clone() target="_blank" rel="noopener noreferrer" class="text-blue-600 hover:underline">
                                {url.clone()}
                            </a>
                        </dd>
                    </div>
                })}
                {info.coordinates.map(|c| view! {
                    <div class="flex gap-2">
                        <dt class="text-gray-400 w-28">"Coordinates"</dt>
                        <dd class="text-gray-800 font-mono">{format!("{:.5}, {:.5}", c.latitude, c.longitude)}</dd>
                    </div>
                })}
            </dl>

            {counts.map(|counts| view! {
                <div>
                    <p class="text-sm text-gray-500 mb-2">
                        {format!(
                            "{} facilities within {} m",
                            info.total_facilities,
                            group_thousands(info.search_radius_meters),
                        )}
                    </p>
                    <div class="grid grid-cols-2 sm:grid-cols-5 gap-3">
                        {counts
                            .into_iter()
                            .map(|(label, count)| view! {
                                <div class="bg-gray-50 rounded-lg p-3 text-center">
                                    <p class="text-2xl font-bold text-indigo-600">{count}</p>
                                    <p class="text-xs text-gray-500 uppercase">{label}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            })}
        </section>
    }
}
