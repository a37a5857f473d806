// web_app/app.rs - Root application component
//
// Sets up routing, the session context, and the route guards. Guards and
// auth-failure redirects only act in the browser; the server always renders
// the guarded placeholder.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::hooks::use_navigate;
use leptos_router::{path, NavigateOptions};

use crate::web_app::components::Loading;
use crate::web_app::error::is_auth_failure;
use crate::web_app::pages::{
    AdminDashboardPage, DashboardPage, HouseDetailPage, ListingPage, LoginPage, UploadPage,
};
use crate::web_app::session::{AuthRealm, Session};

/// Session from context, or a fresh default one outside the app tree
pub fn use_session() -> Session {
    use_context::<Session>().unwrap_or_default()
}

/// Handles a failed call the way every page does: if the backend rejected
/// the token, drop it and send the browser to the matching login page.
///
/// Returns whether `message` was an auth failure.
pub fn report_auth_failure(session: &Session, message: &str) -> bool {
    if !is_auth_failure(message) {
        return false;
    }
    tracing::warn!("backend rejected the session token");
    session.clear_token();
    redirect_to_login();
    true
}

#[cfg(feature = "hydrate")]
fn redirect_to_login() {
    let Some(location) = leptos::web_sys::window().map(|w| w.location()) else {
        return;
    };
    let path = location.pathname().unwrap_or_default();
    let realm = AuthRealm::for_path(&path);
    if location.set_href(realm.login_path()).is_err() {
        tracing::warn!("could not redirect to {}", realm.login_path());
    }
}

#[cfg(not(feature = "hydrate"))]
fn redirect_to_login() {}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(Session::default());

    view! {
        <Title text="Realty Listings" />
        <Meta name="description" content="Browse, filter and compare residential units" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/realty_listings.css" />

        <Router>
            <main class="min-h-screen bg-gray-50 font-sans text-gray-900">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/login") view=|| view! { <LoginPage realm=AuthRealm::User /> } />
                    <Route path=path!("/admin/login") view=|| view! { <LoginPage realm=AuthRealm::Admin /> } />

                    <Route path=path!("/") view=|| view! {
                        <Protected realm=AuthRealm::User>
                            <ListingPage />
                        </Protected>
                    } />
                    <Route path=path!("/house/:unit_code") view=|| view! {
                        <Protected realm=AuthRealm::User>
                            <HouseDetailPage />
                        </Protected>
                    } />
                    <Route path=path!("/statistics") view=|| view! {
                        <Protected realm=AuthRealm::User>
                            <DashboardPage />
                        </Protected>
                    } />
                    <Route path=path!("/admin/dashboard") view=|| view! {
                        <Protected realm=AuthRealm::Admin>
                            <AdminDashboardPage />
                        </Protected>
                    } />
                    <Route path=path!("/admin/upload") view=|| view! {
                        <Protected realm=AuthRealm::Admin>
                            <UploadPage />
                        </Protected>
                    } />
                </Routes>
            </main>
        </Router>
    }
}

/// Renders `children` with the realm's header once the browser confirms a
/// token is stored; otherwise redirects to the realm's login page.
#[component]
pub fn Protected(realm: AuthRealm, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let authorized = RwSignal::new(false);
    let navigate = use_navigate();

    Effect::new(move |_| {
        if session.is_authenticated() {
            authorized.set(true);
        } else {
            navigate(
                realm.login_path(),
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        <Show
            when=move || authorized.get()
            fallback=|| view! { <Loading message="Checking session..." /> }
        >
            <Header realm=realm />
            {children()}
        </Show>
    }
}

#[component]
fn Header(realm: AuthRealm) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let links: &[(&str, &str)] = match realm {
        AuthRealm::User => &[("/", "Listings"), ("/statistics", "Statistics")],
        AuthRealm::Admin => &[("/admin/dashboard", "Dashboard"), ("/admin/upload", "Upload data")],
    };

    let logout = move |_| {
        session.logout();
        navigate(realm.login_path(), Default::default());
    };

    view! {
        <header class="bg-white shadow-sm sticky top-0 z-40 border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                <div class="flex items-center gap-6">
                    <span class="text-xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-blue-600 to-indigo-600">
                        {if realm == AuthRealm::Admin { "Realty Admin" } else { "Realty Listings" }}
                    </span>
                    <nav class="flex gap-4 text-sm font-medium text-gray-600">
                        {links
                            .iter()
                            .map(|(href, label)| view! { <A href=*href>{*label}</A> })
                            .collect_view()}
                    </nav>
                </div>
                <button
                    type="button"
                    class="text-sm text-gray-500 hover:text-red-600"
                    on:click=logout
                >
                    "Log out"
                </button>
            </div>
        </header>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors"
                >
                    "Back to listings"
                </a>
            </div>
        </div>
    }
}
