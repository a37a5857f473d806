// web_app/api/backend.rs - HTTP client for the listings REST backend
//
// One pooled reqwest client per process. Every method maps to a single
// backend endpoint under `{API_BASE_URL}api/v1/` and returns typed data or
// an `ApiError`. Nothing is retried.

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::web_app::chat::ChatBody;
use crate::web_app::config::AppConfig;
use crate::web_app::error::ApiError;
use crate::web_app::listing::Range;
use crate::web_app::model::*;
use crate::web_app::session::AuthRealm;
use crate::web_app::upload::UploadRequest;

#[derive(Clone, Debug)]
pub struct BackendClient {
    http: Client,
    root: String,
}

impl BackendClient {
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(config.api_timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(BackendClient {
            http,
            root: config.api_root(),
        })
    }

    /// Versioned API root this client talks to
    pub fn root(&self) -> &str {
        &self.root
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.root, path)
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        self.authorize(self.http.request(method, self.url(path)), token)
    }

    fn authorize(&self, builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token.filter(|t| !t.is_empty()) {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Sends the request and checks the status.
    async fn dispatch(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_status(status.as_u16(), &body);
        tracing::error!("Backend call failed: {}", err);
        Err(err)
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = self.dispatch(builder).await?;
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    // --- listing ----------------------------------------------------------

    pub async fn price_range(&self, token: Option<&str>) -> Result<Range, ApiError> {
        let response: PriceRangeResponse = self
            .send_json(self.request(Method::GET, "stats/price-range", token))
            .await?;
        Ok(response.into())
    }

    pub async fn area_range(&self, token: Option<&str>) -> Result<Range, ApiError> {
        let response: AreaStatisticsResponse = self
            .send_json(self.request(Method::GET, "available-areas", token))
            .await?;
        Ok(response.into())
    }

    pub async fn floor_range(&self, token: Option<&str>) -> Result<Range, ApiError> {
        let response: FloorRangeResponse = self
            .send_json(self.request(Method::GET, "available-floors", token))
            .await?;
        Ok(response.into())
    }

    pub async fn unit_types(&self, token: Option<&str>) -> Result<Vec<String>, ApiError> {
        let response: UnitTypesResponse = self
            .send_json(self.request(Method::GET, "available-unit-types", token))
            .await?;
        Ok(response.available_unit_types)
    }

    pub async fn search_units(
        &self,
        token: Option<&str>,
        filter: &UnitFilter,
        take: u32,
        skip: u32,
    ) -> Result<UnifiedUnits, ApiError> {
        tracing::debug!(take, skip, ?filter, "search/unified");
        let builder = self
            .request(Method::POST, "search/unified", token)
            .query(&[("take", take), ("skip", skip)])
            .json(filter);
        self.send_json(builder).await
    }

    pub async fn unit_detail(
        &self,
        token: Option<&str>,
        unit_code: &str,
    ) -> Result<UnitDetail, ApiError> {
        let unit_code = unit_code.trim();
        if unit_code.is_empty() {
            return Err(ApiError::Invalid("unit code is required".into()));
        }

        let mut url = Url::parse(&self.url("units")).map_err(|e| ApiError::Invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Invalid(format!("cannot extend {}", self.root)))?
            .push(unit_code);

        self.send_json(self.authorize(self.http.get(url), token)).await
    }

    // --- chat -------------------------------------------------------------

    /// Asks the assistant. The reply is classified by shape, never rejected.
    pub async fn ask(&self, token: Option<&str>, message: &str) -> Result<ChatBody, ApiError> {
        let request = ChatRequest {
            message: message.to_string(),
        };
        let value: serde_json::Value = self
            .send_json(self.request(Method::POST, "chatbot/ask", token).json(&request))
            .await?;
        Ok(ChatBody::from_json(value))
    }

    // --- auth -------------------------------------------------------------

    pub async fn login(
        &self,
        realm: AuthRealm,
        credentials: &Credentials,
    ) -> Result<String, ApiError> {
        if credentials.username.trim().is_empty() || credentials.password.is_empty() {
            return Err(ApiError::Invalid("username and password are required".into()));
        }

        let form = [
            ("username", credentials.username.trim()),
            ("password", credentials.password.as_str()),
        ];
        let response: LoginResponse = self
            .send_json(self.http.post(self.url(realm.endpoint())).form(&form))
            .await?;
        Ok(response.access_token)
    }

    // --- dashboards -------------------------------------------------------

    pub async fn dashboard(&self, token: Option<&str>) -> Result<DashboardData, ApiError> {
        self.send_json(self.request(Method::GET, "statistics/dashboard", token))
            .await
    }

    pub async fn admin_dashboard(
        &self,
        token: Option<&str>,
    ) -> Result<AdminDashboardData, ApiError> {
        self.send_json(self.request(Method::GET, "admin/dashboard", token))
            .await
    }

    pub async fn search_location(
        &self,
        token: Option<&str>,
        location: &str,
    ) -> Result<AdminLocation, ApiError> {
        let location = location.trim();
        if location.is_empty() {
            return Err(ApiError::Invalid("location is required".into()));
        }
        let query = LocationQuery {
            location: location.to_string(),
        };
        self.send_json(self.request(Method::POST, "admin/location/search", token).json(&query))
            .await
    }

    // --- admin data -------------------------------------------------------

    pub async fn download_template(&self, token: Option<&str>) -> Result<Vec<u8>, ApiError> {
        let response = self
            .dispatch(self.request(Method::GET, "admin/template/download", token))
            .await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    pub async fn upload_data(
        &self,
        token: Option<&str>,
        upload: &UploadRequest,
    ) -> Result<UploadReceipt, ApiError> {
        let bytes = upload
            .file_bytes()
            .map_err(|e| ApiError::Invalid(e.to_string()))?;
        let size = bytes.len();

        let file = Part::bytes(bytes).file_name(upload.file_name.clone());
        let form = Form::new()
            .part("file", file)
            .text("creation_date", upload.creation_date.clone())
            .text("address", upload.address.clone());

        let response = self
            .dispatch(self.request(Method::POST, "admin/data/upload", token).multipart(form))
            .await?;
        let body = response.text().await.unwrap_or_default();

        Ok(UploadReceipt {
            file_name: upload.file_name.clone(),
            bytes: size,
            message: upload_message(&body),
        })
    }
}

/// The upload endpoint's reply is informational; take `message` or
/// `detail` if it has one.
fn upload_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .or_else(|| value.get("detail"))
        .and_then(|m| m.as_str())
        .map(str::to_string)
}
