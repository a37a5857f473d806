// web_app/pages/login.rs - Login form for either realm

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::web_app::app::use_session;
use crate::web_app::components::{Button, InlineError, TextInput};
use crate::web_app::server_fns::login;
use crate::web_app::session::AuthRealm;

#[component]
pub fn LoginPage(realm: AuthRealm) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let user = username.get_untracked();
        let pass = password.get_untracked();
        if user.trim().is_empty() || pass.is_empty() {
            error.set(Some("Please enter both username and password.".to_string()));
            return;
        }

        error.set(None);
        submitting.set(true);

        let session = session.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match login(realm, user.trim().to_string(), pass).await {
                Ok(token) => {
                    session.set_token(&token);
                    navigate(realm.landing_path(), Default::default());
                }
                Err(e) => {
                    tracing::warn!("login failed: {}", e);
                    error.try_set(Some("Invalid username or password.".to_string()));
                }
            }
            submitting.try_set(false);
        });
    };

    let (title, other_href, other_label) = match realm {
        AuthRealm::User => ("Sign in", AuthRealm::Admin.login_path(), "Admin sign in"),
        AuthRealm::Admin => ("Admin sign in", AuthRealm::User.login_path(), "User sign in"),
    };

    view! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <form
                class="w-full max-w-sm bg-white rounded-2xl shadow-sm border border-gray-100 p-8 space-y-5"
                on:submit=on_submit
            >
                <h1 class="text-2xl font-bold text-gray-900">{title}</h1>

                <div class="space-y-2">
                    <label for="username" class="block text-sm font-medium text-gray-700">"Username"</label>
                    <TextInput value=username id="username" placeholder="Username" />
                </div>
                <div class="space-y-2">
                    <label for="password" class="block text-sm font-medium text-gray-700">"Password"</label>
                    <TextInput value=password id="password" input_type="password" placeholder="Password" />
                </div>

                <InlineError message=error />

                <Button button_type="submit" class="w-full" disabled=submitting>
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </Button>

                <a href=other_href class="block text-center text-sm text-blue-600 hover:underline">
                    {other_label}
                </a>
            </form>
        </div>
    }
}
