pub mod client;
pub mod types;

pub use client::ApiClient;

use crate::error::ApiError;
use types::{
    AnalysisResult, HairRecommendation, HairshopRecommendation, HairshopToggle, HairToggle,
    JobRequest, LoginResponse, UserInfo, UserProfile,
};

/// The backend contract consumed by the screens and controllers.
///
/// Everything above the HTTP layer talks to this trait rather than to reqwest
/// directly, so the loading/toggling/polling flows can be exercised against an
/// in-memory fake.
#[allow(async_fn_in_trait)]
pub trait MohittoApi {
    /// `GET /user/info` — display name for the welcome greeting.
    async fn user_info(&self) -> Result<UserInfo, ApiError>;

    /// `GET /user/profile` — nickname and email for the my-page header.
    async fn profile(&self) -> Result<UserProfile, ApiError>;

    /// `GET /user/latest-request-id`. `Ok(None)` when the user has never
    /// submitted an analysis request.
    async fn latest_request_id(&self) -> Result<Option<String>, ApiError>;

    /// `GET /user/analysis-results/{request_id}`.
    async fn analysis_results(&self, request_id: &str) -> Result<Vec<AnalysisResult>, ApiError>;

    /// `GET /user/hair-recommendations/{request_id}`, in relevance order.
    async fn hair_recommendations(
        &self,
        request_id: &str,
    ) -> Result<Vec<HairRecommendation>, ApiError>;

    /// `GET /user/hairshop-recommendations/{hair_rec_id}`.
    async fn hairshop_recommendations(
        &self,
        hair_rec_id: &str,
    ) -> Result<Vec<HairshopRecommendation>, ApiError>;

    /// `PUT /user/hair-recommendations/{id}/toggle-save`. The response carries
    /// the authoritative state; the client never flips the flag locally.
    async fn toggle_hair_save(&self, hair_rec_id: &str) -> Result<HairToggle, ApiError>;

    /// `PUT /user/hairshop-recommendations/{id}/toggle-save`.
    async fn toggle_hairshop_save(&self, hairshop_rec_id: &str)
        -> Result<HairshopToggle, ApiError>;

    /// `GET /user/saved-hairstyles` — bookmarked styles only.
    async fn saved_hairstyles(&self) -> Result<Vec<HairRecommendation>, ApiError>;

    /// `GET /user/saved-hairshops` — bookmarked salons only.
    async fn saved_hairshops(&self) -> Result<Vec<HairshopRecommendation>, ApiError>;

    /// `POST /auth/login`. Returns the bearer token to persist.
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError>;

    /// `POST /auth/signup`.
    async fn signup(&self, email: &str, password: &str, name: &str) -> Result<(), ApiError>;

    /// `POST /auth/logout` — invalidates the stored token server-side.
    async fn logout(&self) -> Result<(), ApiError>;

    /// `POST /run-stablehair/` — fire-and-forget simulation image job.
    async fn run_hair_simulation(&self, job: &JobRequest) -> Result<(), ApiError>;

    /// `POST /run-recommendation/` — fire-and-forget recommendation job.
    async fn run_recommendation(&self, job: &JobRequest) -> Result<(), ApiError>;
}
