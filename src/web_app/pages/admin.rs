// web_app/pages/admin.rs - Back-office pages
//
// - AdminDashboardPage: headline stats and location search
// - UploadPage: template download and spreadsheet upload

use chrono::Local;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::app::{report_auth_failure, use_session};
use crate::web_app::components::{
    AdminStats, Button, ErrorDisplay, FileDropZone, InlineError, Loading, LocationSearch,
    SecondaryButton,
};
use crate::web_app::server_fns::{download_template, get_admin_dashboard, upload_data};
use crate::web_app::upload::{template_data_url, SelectedFile, UploadForm, TEMPLATE_FILE_NAME};

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = use_session();

    let stats = LocalResource::new(move || {
        let session = session.clone();
        async move {
            get_admin_dashboard(session.token()).await.map_err(|e| {
                let message = e.to_string();
                report_auth_failure(&session, &message);
                message
            })
        }
    });

    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-8">
            <h1 class="text-2xl font-bold text-gray-900">"Admin dashboard"</h1>
            {move || match stats.get() {
                None => view! { <Loading message="Loading dashboard..." /> }.into_any(),
                Some(Err(e)) => {
                    view! { <ErrorDisplay error=e title="Could not load dashboard" /> }.into_any()
                }
                Some(Ok(data)) => view! { <AdminStats stats=data.dashboard_stats /> }.into_any(),
            }}
            <LocationSearch />
        </div>
    }
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let session = use_session();
    let form = RwSignal::new(UploadForm::new(Local::now().date_naive()));
    let uploading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    let template_href = RwSignal::new(None::<String>);
    let template_loading = RwSignal::new(false);
    let template_error = RwSignal::new(None::<String>);

    let fetch_template = Callback::new({
        let session = session.clone();
        move |()| {
            template_loading.set(true);
            template_error.set(None);
            let session = session.clone();
            spawn_local(async move {
                match download_template(session.token()).await {
                    Ok(encoded) => {
                        template_href.try_set(Some(template_data_url(&encoded)));
                    }
                    Err(e) => {
                        report_auth_failure(&session, &e.to_string());
                        template_error
                            .try_set(Some("Failed to download the template.".to_string()));
                    }
                }
                template_loading.try_set(false);
            });
        }
    });

    let on_file = Callback::new(move |file: SelectedFile| {
        error.set(None);
        form.update(|f| f.file = Some(file));
    });
    let selected =
        Signal::derive(move || form.with(|f| f.file.as_ref().map(|file| file.name.clone())));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        notice.set(None);
        let request = match form.with_untracked(|f| f.validate()) {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };

        error.set(None);
        uploading.set(true);
        let session = session.clone();
        spawn_local(async move {
            match upload_data(request, session.token()).await {
                Ok(receipt) => {
                    form.try_update(|f| f.reset(Local::now().date_naive()));
                    let message = receipt
                        .message
                        .unwrap_or_else(|| format!("Uploaded {}.", receipt.file_name));
                    notice.try_set(Some(message));
                }
                Err(e) => {
                    report_auth_failure(&session, &e.to_string());
                    error.try_set(Some("Upload failed. Please try again.".to_string()));
                }
            }
            uploading.try_set(false);
        });
    };

    let field_class = "w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 outline-none";

    view! {
        <div class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-8">
            <h1 class="text-2xl font-bold text-gray-900">"Upload data"</h1>

            <section class="bg-white rounded-2xl shadow-sm border border-gray-100 p-6 space-y-4">
                <h2 class="text-lg font-semibold text-gray-900">"Template"</h2>
                <p class="text-sm text-gray-500">"Fill in the spreadsheet template, then upload it below."</p>
                <div class="flex items-center gap-4">
                    <SecondaryButton on_click=fetch_template disabled=template_loading>
                        {move || if template_loading.get() { "Preparing..." } else { "Get template" }}
                    </SecondaryButton>
                    {move || template_href.get().map(|href| view! {
                        <a href=href download=TEMPLATE_FILE_NAME class="text-blue-600 hover:underline text-sm">
                            {format!("Download {}", TEMPLATE_FILE_NAME)}
                        </a>
                    })}
                </div>
                <InlineError message=template_error />
            </section>

            <form
                class="bg-white rounded-2xl shadow-sm border border-gray-100 p-6 space-y-5"
                on:submit=on_submit
            >
                <FileDropZone on_file=on_file selected=selected />

                <div class="space-y-2">
                    <label for="creation-date" class="block text-sm font-medium text-gray-700">"Creation date"</label>
                    <input
                        id="creation-date"
                        type="date"
                        class=field_class
                        prop:value=move || form.with(|f| f.creation_date.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.creation_date = value);
                        }
                    />
                </div>

                <div class="space-y-2">
                    <label for="address" class="block text-sm font-medium text-gray-700">"Address"</label>
                    <input
                        id="address"
                        type="text"
                        placeholder="Project address"
                        class=field_class
                        prop:value=move || form.with(|f| f.address.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.address = value);
                        }
                    />
                </div>

                <InlineError message=error />
                {move || notice.get().map(|message| view! {
                    <p class="text-sm text-green-700 bg-green-50 border border-green-200 rounded-lg px-3 py-2">{message}</p>
                })}

                <Button button_type="submit" class="w-full" disabled=uploading>
                    {move || if uploading.get() { "Uploading..." } else { "Upload" }}
                </Button>
            </form>
        </div>
    }
}
