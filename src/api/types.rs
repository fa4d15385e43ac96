use serde::{Deserialize, Serialize};

/// Placeholder the backend returns while a simulation image is still being
/// generated.
pub const SIMULATION_IMAGE_PENDING: &str = "dummy.jpg";

/// One recommended hairstyle, produced by the backend for a single analysis
/// request. List order is relevance rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HairRecommendation {
    pub hair_rec_id: String,
    pub hair_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub simulation_image_url: Option<String>,
    #[serde(default)]
    pub is_saved: bool,
}

impl HairRecommendation {
    /// The simulation image URL, once the backend has actually generated one.
    /// Filters out both a missing URL and the pending sentinel.
    pub fn simulation_image(&self) -> Option<&str> {
        self.simulation_image_url
            .as_deref()
            .filter(|url| !url.is_empty() && *url != SIMULATION_IMAGE_PENDING)
    }
}

/// One recommended hair salon. The same salon may be recommended for more
/// than one hairstyle, so a given `hairshop_rec_id` can appear under several
/// style groupings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HairshopRecommendation {
    pub hairshop_rec_id: String,
    pub hairshop: String,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub mean_score: f64,
    #[serde(default)]
    pub is_saved: bool,
    #[serde(default)]
    pub hair_name: Option<String>,
}

impl HairshopRecommendation {
    /// Review score formatted the way the screens display it.
    pub fn display_score(&self) -> String {
        format!("{:.2}", self.mean_score)
    }
}

/// Face/skin analysis produced once per analysis request.
/// `rec_color` is a comma-delimited list of dye color names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub sex: String,
    #[serde(default)]
    pub face_type: String,
    #[serde(default)]
    pub skin_tone: String,
    #[serde(default)]
    pub rec_color: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub user_image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserProfile {
    pub nickname: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserInfo {
    pub name: String,
}

/// Response of `GET /user/latest-request-id`. A null id is a valid
/// "nothing submitted yet" outcome, not an error.
#[derive(Debug, Clone, Deserialize)]
pub struct LatestRequest {
    #[serde(default)]
    pub request_id: Option<String>,
}

/// Authoritative save state returned by a hairstyle toggle.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HairToggle {
    pub hair_rec_id: String,
    pub is_saved: bool,
}

/// Authoritative save state returned by a hairshop toggle.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HairshopToggle {
    pub is_saved: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// Payload for the generation job triggers (`/run-stablehair/`,
/// `/run-recommendation/`).
#[derive(Debug, Clone, Serialize)]
pub struct JobRequest {
    pub user_id: String,
    pub request_id: String,
}
