// web_app/pages/dashboard.rs - Price and area statistics

use leptos::prelude::*;

use crate::web_app::app::{report_auth_failure, use_session};
use crate::web_app::components::{
    format_area, format_price, group_thousands, ErrorDisplay, Loading, StatCard,
};
use crate::web_app::model::Distribution;
use crate::web_app::server_fns::get_dashboard;

const HISTOGRAM_BUCKETS: usize = 10;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();

    let dashboard = LocalResource::new(move || {
        let session = session.clone();
        async move {
            get_dashboard(session.token()).await.map_err(|e| {
                let message = e.to_string();
                report_auth_failure(&session, &message);
                message
            })
        }
    });

    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-8">
            <h1 class="text-2xl font-bold text-gray-900">"Market statistics"</h1>
            {move || match dashboard.get() {
                None => view! { <Loading message="Loading statistics..." /> }.into_any(),
                Some(Err(e)) => {
                    view! { <ErrorDisplay error=e title="Could not load statistics" /> }.into_any()
                }
                Some(Ok(data)) => view! {
                    <DistributionCard
                        title="Price distribution"
                        distribution=data.price_distribution.into()
                        format=|v| format_price(v, None)
                    />
                    <DistributionCard
                        title="Area distribution"
                        distribution=data.area_distribution.into()
                        format=|v| format_area(v, None)
                    />
                }.into_any(),
            }}
        </div>
    }
}

/// Summary numbers plus a histogram for one distribution
#[component]
fn DistributionCard(
    title: &'static str,
    distribution: Distribution,
    /// Formats a single value for display
    format: fn(f64) -> String,
) -> impl IntoView {
    let buckets = distribution.histogram(HISTOGRAM_BUCKETS);
    let tallest = buckets.iter().map(|b| b.count).max().unwrap_or(0).max(1);

    view! {
        <section class="bg-white rounded-2xl shadow-sm border border-gray-100 p-6 space-y-6">
            <div class="flex items-baseline justify-between">
                <h2 class="text-lg font-semibold text-gray-900">{title}</h2>
                <span class="text-sm text-gray-500">
                    {format!("{} units", group_thousands(distribution.total as f64))}
                </span>
            </div>

            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                <StatCard label="Minimum" value=format(distribution.min) />
                <StatCard label="Maximum" value=format(distribution.max) />
                <StatCard label="Average" value=format(distribution.avg) accent="text-green-600" />
                <StatCard label="Median" value=format(distribution.median) accent="text-purple-600" />
            </div>

            <div class="flex items-end gap-1 h-48" role="img" aria-label=title>
                {buckets
                    .into_iter()
                    .map(|bucket| {
                        let height = bucket.count as f64 / tallest as f64 * 100.0;
                        let tip = format!("{} – {}: {}", format(bucket.from), format(bucket.to), bucket.count);
                        view! {
                            <div
                                class="flex-1 bg-blue-500 hover:bg-blue-600 rounded-t"
                                style=format!("height: {:.1}%", height)
                                title=tip
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
