// web_app/server_fns.rs - Leptos server function declarations
//
// Compiled for both ssr and hydrate. On the server each function forwards
// to the listings backend through `BackendClient`; in the browser the
// #[server] macro turns it into a POST to /api.
//
// The browser owns the session token, so every protected call takes it as
// an argument and the server passes it on as a bearer token.

use leptos::prelude::*;

use crate::web_app::chat::ChatBody;
use crate::web_app::listing::{Dimension, Range};
use crate::web_app::model::*;
use crate::web_app::session::AuthRealm;
use crate::web_app::upload::UploadRequest;

#[cfg(feature = "ssr")]
fn backend() -> Result<crate::web_app::api::BackendClient, ServerFnError> {
    use crate::web_app::api::{get_backend, BackendClient};

    // Context first (tests), then the client registered at startup
    if let Some(client) = use_context::<BackendClient>() {
        return Ok(client);
    }

    get_backend().ok_or_else(|| ServerFnError::new("Backend client not available"))
}

/// Keeps the ApiError text intact so `is_auth_failure` still matches on
/// the client.
#[cfg(feature = "ssr")]
fn failed(action: &str, err: crate::web_app::error::ApiError) -> ServerFnError {
    tracing::error!("{} failed: {}", action, err);
    ServerFnError::new(format!("{} failed: {}", action, err))
}

/// Absolute bounds for one range filter
#[server(GetRangeBounds, "/api")]
pub async fn get_range_bounds(
    dimension: Dimension,
    token: Option<String>,
) -> Result<Range, ServerFnError> {
    let client = backend()?;
    let token = token.as_deref();

    let result = match dimension {
        Dimension::Price => client.price_range(token).await,
        Dimension::Area => client.area_range(token).await,
        Dimension::Floor => client.floor_range(token).await,
        Dimension::Parking => {
            return Err(ServerFnError::new("parking bounds are fixed"));
        }
    };

    match &result {
        Ok(range) => tracing::info!("Bounds for {}: {} - {}", dimension, range.min, range.max),
        Err(e) => tracing::warn!("Bounds for {} unavailable: {}", dimension, e),
    }

    result.map_err(|e| ServerFnError::new(format!("Loading {} bounds failed: {}", dimension, e)))
}

#[server(GetUnitTypes, "/api")]
pub async fn get_unit_types(token: Option<String>) -> Result<Vec<String>, ServerFnError> {
    backend()?
        .unit_types(token.as_deref())
        .await
        .map_err(|e| failed("Loading unit types", e))
}

/// One page of units matching the filter
#[server(SearchUnits, "/api")]
pub async fn search_units(
    filter: UnitFilter,
    take: u32,
    skip: u32,
    token: Option<String>,
) -> Result<UnifiedUnits, ServerFnError> {
    tracing::info!("Search request: take={}, skip={}, filter={:?}", take, skip, filter);

    let results = backend()?
        .search_units(token.as_deref(), &filter, take, skip)
        .await;

    if let Ok(res) = &results {
        tracing::info!(
            "Search successful: {} units on page {}",
            res.units.len(),
            res.pagination.current_page
        );
    }

    results.map_err(|e| failed("Search", e))
}

#[server(GetUnitDetail, "/api")]
pub async fn get_unit_detail(
    unit_code: String,
    token: Option<String>,
) -> Result<UnitDetail, ServerFnError> {
    backend()?
        .unit_detail(token.as_deref(), &unit_code)
        .await
        .map_err(|e| failed("Loading unit", e))
}

/// Sends one question to the assistant
#[server(AskAssistant, "/api")]
pub async fn ask_assistant(
    message: String,
    token: Option<String>,
) -> Result<ChatBody, ServerFnError> {
    let message = message.trim().to_string();
    if message.is_empty() {
        return Err(ServerFnError::new("Message is empty"));
    }

    let reply = backend()?
        .ask(token.as_deref(), &message)
        .await
        .map_err(|e| failed("Chat", e))?;

    if let ChatBody::Unparsed(raw) = &reply {
        tracing::warn!("Assistant reply had an unknown shape: {}", raw);
    }
    Ok(reply)
}

/// Exchanges credentials for an access token
#[server(Login, "/api")]
pub async fn login(
    realm: AuthRealm,
    username: String,
    password: String,
) -> Result<String, ServerFnError> {
    tracing::info!("Login attempt for {:?} realm", realm);

    let credentials = Credentials { username, password };
    backend()?
        .login(realm, &credentials)
        .await
        .map_err(|e| failed("Login", e))
}

#[server(GetDashboard, "/api")]
pub async fn get_dashboard(token: Option<String>) -> Result<DashboardData, ServerFnError> {
    backend()?
        .dashboard(token.as_deref())
        .await
        .map_err(|e| failed("Loading statistics", e))
}

#[server(GetAdminDashboard, "/api")]
pub async fn get_admin_dashboard(
    token: Option<String>,
) -> Result<AdminDashboardData, ServerFnError> {
    backend()?
        .admin_dashboard(token.as_deref())
        .await
        .map_err(|e| failed("Loading admin dashboard", e))
}

#[server(SearchLocation, "/api")]
pub async fn search_location(
    location: String,
    token: Option<String>,
) -> Result<AdminLocation, ServerFnError> {
    backend()?
        .search_location(token.as_deref(), &location)
        .await
        .map_err(|e| failed("Location search", e))
}

/// Spreadsheet template, base64-encoded
#[server(DownloadTemplate, "/api")]
pub async fn download_template(token: Option<String>) -> Result<String, ServerFnError> {
    use crate::web_app::upload::encode_bytes;

    let bytes = backend()?
        .download_template(token.as_deref())
        .await
        .map_err(|e| failed("Template download", e))?;

    tracing::info!("Template downloaded: {} bytes", bytes.len());
    Ok(encode_bytes(&bytes))
}

#[server(UploadData, "/api")]
pub async fn upload_data(
    upload: UploadRequest,
    token: Option<String>,
) -> Result<UploadReceipt, ServerFnError> {
    tracing::info!(
        "Upload request: file='{}', creation_date={}, address='{}'",
        upload.file_name,
        upload.creation_date,
        upload.address
    );

    let receipt = backend()?
        .upload_data(token.as_deref(), &upload)
        .await
        .map_err(|e| failed("Upload", e))?;

    tracing::info!("Upload accepted: {} bytes", receipt.bytes);
    Ok(receipt)
}
