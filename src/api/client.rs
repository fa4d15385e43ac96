use std::sync::Mutex;

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{info, warn};
use url::Url;

use crate::config::Config;
use crate::error::ApiError;

use super::types::{
    AnalysisResult, HairRecommendation, HairshopRecommendation, HairshopToggle, HairToggle,
    JobRequest, LatestRequest, LoginResponse, UserInfo, UserProfile,
};
use super::MohittoApi;

const USER_AGENT: &str = "Mohitto/0.1";

/// Error body convention of the backend: non-2xx responses may carry a
/// `detail` message.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

/// reqwest-backed implementation of [`MohittoApi`].
///
/// Holds the bearer token for the current session; the session accessor
/// updates it on login/logout while also persisting it to the OS keyring.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
    token: Mutex<Option<String>>,
}

impl ApiClient {
    pub fn new(config: &Config, token: Option<String>) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ApiError::Network(format!("invalid base URL '{}': {}", config.base_url, e)))?;

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url,
            token: Mutex::new(token),
        })
    }

    pub fn set_token(&self, token: Option<String>) {
        *self.token.lock().unwrap() = token;
    }

    pub fn has_token(&self) -> bool {
        self.token.lock().unwrap().is_some()
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::Network(format!("invalid endpoint '{}': {}", path, e)))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.token.lock().unwrap().as_deref() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Map a non-2xx response to the error taxonomy, extracting the optional
    /// `detail` message for everything that is not a 401/404.
    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        match status {
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthenticated),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            _ => {
                let detail = response
                    .json::<ErrorBody>()
                    .await
                    .ok()
                    .and_then(|body| body.detail);
                warn!("Request failed with {}: {:?}", status, detail);
                Err(ApiError::Api {
                    status: status.as_u16(),
                    detail,
                })
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        let response = self.authorize(self.client.get(url)).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn put_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        let response = self.authorize(self.client.put(url)).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn post<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<Response, ApiError> {
        let url = self.endpoint(path)?;
        let response = self.authorize(self.client.post(url)).json(body).send().await?;
        Self::check(response).await
    }
}

impl MohittoApi for ApiClient {
    async fn user_info(&self) -> Result<UserInfo, ApiError> {
        self.get_json("/user/info").await
    }

    async fn profile(&self) -> Result<UserProfile, ApiError> {
        self.get_json("/user/profile").await
    }

    async fn latest_request_id(&self) -> Result<Option<String>, ApiError> {
        let latest: LatestRequest = self.get_json("/user/latest-request-id").await?;
        Ok(latest.request_id)
    }

    async fn analysis_results(&self, request_id: &str) -> Result<Vec<AnalysisResult>, ApiError> {
        self.get_json(&format!("/user/analysis-results/{}", request_id))
            .await
    }

    async fn hair_recommendations(
        &self,
        request_id: &str,
    ) -> Result<Vec<HairRecommendation>, ApiError> {
        self.get_json(&format!("/user/hair-recommendations/{}", request_id))
            .await
    }

    async fn hairshop_recommendations(
        &self,
        hair_rec_id: &str,
    ) -> Result<Vec<HairshopRecommendation>, ApiError> {
        self.get_json(&format!("/user/hairshop-recommendations/{}", hair_rec_id))
            .await
    }

    async fn toggle_hair_save(&self, hair_rec_id: &str) -> Result<HairToggle, ApiError> {
        info!("Toggling save state for hairstyle {}", hair_rec_id);
        self.put_json(&format!(
            "/user/hair-recommendations/{}/toggle-save",
            hair_rec_id
        ))
        .await
    }

    async fn toggle_hairshop_save(
        &self,
        hairshop_rec_id: &str,
    ) -> Result<HairshopToggle, ApiError> {
        info!("Toggling save state for hairshop {}", hairshop_rec_id);
        self.put_json(&format!(
            "/user/hairshop-recommendations/{}/toggle-save",
            hairshop_rec_id
        ))
        .await
    }

    async fn saved_hairstyles(&self) -> Result<Vec<HairRecommendation>, ApiError> {
        self.get_json("/user/saved-hairstyles").await
    }

    async fn saved_hairshops(&self) -> Result<Vec<HairshopRecommendation>, ApiError> {
        self.get_json("/user/saved-hairshops").await
    }

    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = serde_json::json!({ "email": email, "password": password });
        let response = self.post("/auth/login", &body).await?;
        Ok(response.json().await?)
    }

    async fn signup(&self, email: &str, password: &str, name: &str) -> Result<(), ApiError> {
        let body = serde_json::json!({ "email": email, "password": password, "name": name });
        self.post("/auth/signup", &body).await?;
        Ok(())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let body = serde_json::json!({});
        self.post("/auth/logout", &body).await?;
        Ok(())
    }

    async fn run_hair_simulation(&self, job: &JobRequest) -> Result<(), ApiError> {
        info!(
            "Triggering hair simulation for user {} request {}",
            job.user_id, job.request_id
        );
        self.post("/run-stablehair/", job).await?;
        Ok(())
    }

    async fn run_recommendation(&self, job: &JobRequest) -> Result<(), ApiError> {
        info!(
            "Triggering recommendation generation for user {} request {}",
            job.user_id, job.request_id
        );
        self.post("/run-recommendation/", job).await?;
        Ok(())
    }
}
