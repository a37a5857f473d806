// web_app/mod.rs - Root module for the Leptos web application
//
// Architecture:
// - model/: Wire types shared by client and server
// - listing/: Filter and search state for the listing page (feature-free)
// - chat, session, upload, error: Plain logic behind the pages (feature-free)
// - config, api/: Backend client and its configuration (SSR only)
// - server_fns: Server function declarations (both client and server)
// - components/, pages/, app.rs: Leptos UI (both SSR and hydrate)

pub mod chat;
pub mod error;
pub mod listing;
pub mod model;
pub mod session;
pub mod upload;

#[cfg(feature = "ssr")]
pub mod config;

#[cfg(feature = "ssr")]
pub mod api;

// The #[server] macro generates client stubs that call the server via HTTP
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod server_fns;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
