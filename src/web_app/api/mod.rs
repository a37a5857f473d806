// web_app/api/mod.rs - Server-side access to the listings backend
//
// The binary registers one `BackendClient` at startup. Tests can swap it
// out with `set_test_backend` or by providing one through Leptos context.

pub mod backend;

pub use backend::BackendClient;

use std::sync::{Mutex, OnceLock};

static BACKEND: OnceLock<BackendClient> = OnceLock::new();
static TEST_BACKEND_OVERRIDE: Mutex<Option<BackendClient>> = Mutex::new(None);

/// Register the process-wide backend client
pub fn init_backend(client: BackendClient) {
    tracing::info!("Registering backend client for {}", client.root());
    if BACKEND.set(client).is_err() {
        tracing::warn!("Backend client already registered");
    }
}

/// Set a client override for testing
pub fn set_test_backend(client: Option<BackendClient>) {
    if let Ok(mut guard) = TEST_BACKEND_OVERRIDE.lock() {
        *guard = client;
    }
}

/// The registered client, preferring a test override
pub fn get_backend() -> Option<BackendClient> {
    if let Some(client) = TEST_BACKEND_OVERRIDE.lock().ok().and_then(|g| g.clone()) {
        return Some(client);
    }

    let client = BACKEND.get().cloned();
    if client.is_none() {
        tracing::warn!("No backend client registered");
    }
    client
}
