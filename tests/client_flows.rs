use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use mohitto::api::types::{
    AnalysisResult, HairRecommendation, HairshopRecommendation, HairshopToggle, HairToggle,
    JobRequest, LoginResponse, UserInfo, UserProfile,
};
use mohitto::api::MohittoApi;
use mohitto::auth::{Navigator, Session, TokenStore};
use mohitto::error::{ApiError, AuthError, LoadError};
use mohitto::recommend::{loader, saves, MAX_DISPLAYED_STYLES};
use mohitto::{jobs, ApiClient, Config};

fn hair(id: &str) -> HairRecommendation {
    HairRecommendation {
        hair_rec_id: id.to_string(),
        hair_name: format!("style {}", id),
        description: String::new(),
        simulation_image_url: None,
        is_saved: false,
    }
}

fn shop(id: &str) -> HairshopRecommendation {
    HairshopRecommendation {
        hairshop_rec_id: id.to_string(),
        hairshop: format!("shop {}", id),
        review_count: 5,
        mean_score: 4.0,
        is_saved: false,
        hair_name: None,
    }
}

/// In-memory stand-in for the backend, recording every call it receives.
#[derive(Default)]
struct MockApi {
    calls: Mutex<Vec<String>>,
    latest: Option<String>,
    hairs: Vec<HairRecommendation>,
    shops: HashMap<String, Vec<HairshopRecommendation>>,
    failing_shop_ids: HashSet<String>,
    analysis: Option<AnalysisResult>,
    analysis_fails: bool,
    profile: Option<UserProfile>,
    hair_toggle: Option<HairToggle>,
    shop_toggle: Option<HairshopToggle>,
    /// Readiness polling: number of fetches that report "not yet" before the
    /// hair list is returned.
    not_ready_fetches: Mutex<u32>,
}

impl MockApi {
    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl MohittoApi for MockApi {
    async fn user_info(&self) -> Result<UserInfo, ApiError> {
        self.record("user_info");
        Ok(UserInfo {
            name: "Mia".to_string(),
        })
    }

    async fn profile(&self) -> Result<UserProfile, ApiError> {
        self.record("profile");
        self.profile.clone().ok_or(ApiError::Unauthenticated)
    }

    async fn latest_request_id(&self) -> Result<Option<String>, ApiError> {
        self.record("latest_request_id");
        Ok(self.latest.clone())
    }

    async fn analysis_results(&self, request_id: &str) -> Result<Vec<AnalysisResult>, ApiError> {
        self.record(format!("analysis_results {}", request_id));
        if self.analysis_fails {
            return Err(ApiError::Network("analysis unavailable".to_string()));
        }
        Ok(self.analysis.clone().into_iter().collect())
    }

    async fn hair_recommendations(
        &self,
        request_id: &str,
    ) -> Result<Vec<HairRecommendation>, ApiError> {
        self.record(format!("hair_recommendations {}", request_id));
        let mut pending = self.not_ready_fetches.lock().unwrap();
        if *pending > 0 {
            *pending -= 1;
            return Err(ApiError::NotFound);
        }
        Ok(self.hairs.clone())
    }

    async fn hairshop_recommendations(
        &self,
        hair_rec_id: &str,
    ) -> Result<Vec<HairshopRecommendation>, ApiError> {
        self.record(format!("hairshop_recommendations {}", hair_rec_id));
        if self.failing_shop_ids.contains(hair_rec_id) {
            return Err(ApiError::Network("connection reset".to_string()));
        }
        Ok(self.shops.get(hair_rec_id).cloned().unwrap_or_default())
    }

    async fn toggle_hair_save(&self, hair_rec_id: &str) -> Result<HairToggle, ApiError> {
        self.record(format!("toggle_hair_save {}", hair_rec_id));
        self.hair_toggle
            .clone()
            .ok_or(ApiError::Network("toggle failed".to_string()))
    }

    async fn toggle_hairshop_save(
        &self,
        hairshop_rec_id: &str,
    ) -> Result<HairshopToggle, ApiError> {
        self.record(format!("toggle_hairshop_save {}", hairshop_rec_id));
        self.shop_toggle
            .clone()
            .ok_or(ApiError::Network("toggle failed".to_string()))
    }

    async fn saved_hairstyles(&self) -> Result<Vec<HairRecommendation>, ApiError> {
        self.record("saved_hairstyles");
        Ok(self.hairs.clone())
    }

    async fn saved_hairshops(&self) -> Result<Vec<HairshopRecommendation>, ApiError> {
        self.record("saved_hairshops");
        Ok(Vec::new())
    }

    async fn login(&self, email: &str, _password: &str) -> Result<LoginResponse, ApiError> {
        self.record(format!("login {}", email));
        Ok(LoginResponse {
            token: Some("test-token".to_string()),
        })
    }

    async fn signup(&self, email: &str, _password: &str, _name: &str) -> Result<(), ApiError> {
        self.record(format!("signup {}", email));
        Ok(())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.record("logout");
        Ok(())
    }

    async fn run_hair_simulation(&self, job: &JobRequest) -> Result<(), ApiError> {
        self.record(format!("run_hair_simulation {}", job.request_id));
        Ok(())
    }

    async fn run_recommendation(&self, job: &JobRequest) -> Result<(), ApiError> {
        self.record(format!("run_recommendation {}", job.request_id));
        Ok(())
    }
}

#[derive(Default)]
struct RecordingNavigator {
    redirects: Mutex<u32>,
}

impl Navigator for RecordingNavigator {
    fn redirect_to_sign_in(&self) {
        *self.redirects.lock().unwrap() += 1;
    }
}

// --- Recommendation loader -------------------------------------------------

#[tokio::test]
async fn missing_request_id_fails_without_further_calls() {
    let api = MockApi::default();

    let err = loader::load(&api).await.unwrap_err();
    assert!(matches!(err, LoadError::NoRequestFound));
    assert_eq!(api.calls(), vec!["latest_request_id"]);
}

#[tokio::test]
async fn empty_hair_list_fails_with_no_recommendations() {
    let api = MockApi {
        latest: Some("42".to_string()),
        ..Default::default()
    };

    let err = loader::load(&api).await.unwrap_err();
    assert!(matches!(err, LoadError::NoRecommendations));
    // No fan-out happened.
    assert!(!api
        .calls()
        .iter()
        .any(|c| c.starts_with("hairshop_recommendations")));
}

#[tokio::test]
async fn five_styles_truncate_to_four_and_fan_out_exactly_four() {
    let api = MockApi {
        latest: Some("42".to_string()),
        hairs: vec![hair("h1"), hair("h2"), hair("h3"), hair("h4"), hair("h5")],
        ..Default::default()
    };

    let view = loader::load(&api).await.unwrap();
    assert_eq!(view.hair_list.len(), MAX_DISPLAYED_STYLES);
    let ids: Vec<&str> = view
        .hair_list
        .iter()
        .map(|h| h.hair_rec_id.as_str())
        .collect();
    assert_eq!(ids, ["h1", "h2", "h3", "h4"]);

    let fanout: Vec<String> = api
        .calls()
        .into_iter()
        .filter(|c| c.starts_with("hairshop_recommendations"))
        .collect();
    assert_eq!(fanout.len(), 4);
    assert!(!fanout.contains(&"hairshop_recommendations h5".to_string()));
}

#[tokio::test]
async fn one_failed_shop_fetch_degrades_to_empty_list() {
    let mut shops = HashMap::new();
    shops.insert("h1".to_string(), vec![shop("s1")]);
    shops.insert("h3".to_string(), vec![shop("s2"), shop("s3")]);

    let api = MockApi {
        latest: Some("42".to_string()),
        hairs: vec![hair("h1"), hair("h2"), hair("h3")],
        shops,
        failing_shop_ids: HashSet::from(["h2".to_string()]),
        ..Default::default()
    };

    let view = loader::load(&api).await.unwrap();
    assert_eq!(view.shops_for("h1").len(), 1);
    assert!(view.shops_for("h2").is_empty());
    assert_eq!(view.shops_for("h3").len(), 2);
}

#[tokio::test]
async fn analysis_failure_never_affects_the_load() {
    let api = MockApi {
        latest: Some("42".to_string()),
        hairs: vec![hair("h1")],
        analysis_fails: true,
        ..Default::default()
    };

    let view = loader::load(&api).await.unwrap();
    assert!(view.analysis.is_none());
    assert_eq!(view.hair_list.len(), 1);
}

#[tokio::test]
async fn analysis_context_is_attached_when_available() {
    let api = MockApi {
        latest: Some("42".to_string()),
        hairs: vec![hair("h1")],
        analysis: Some(AnalysisResult {
            request_id: Some("42".to_string()),
            user_id: Some("u1".to_string()),
            sex: "female".to_string(),
            face_type: "oval".to_string(),
            skin_tone: "#F1C9B0".to_string(),
            rec_color: "Ash Rose, Dark Choco".to_string(),
            summary: "Soft features.".to_string(),
            user_image_url: None,
        }),
        ..Default::default()
    };

    let view = loader::load(&api).await.unwrap();
    assert_eq!(view.analysis.unwrap().face_type, "oval");
}

// --- Save-state toggling ---------------------------------------------------

#[tokio::test]
async fn hair_toggle_reconciles_only_the_matching_entry() {
    let api = MockApi {
        hair_toggle: Some(HairToggle {
            hair_rec_id: "h1".to_string(),
            is_saved: true,
        }),
        ..Default::default()
    };

    let mut list = vec![hair("h1"), hair("h2")];
    let saved = saves::toggle_hair(&api, &mut list, "h1").await.unwrap();
    assert!(saved);
    assert!(list[0].is_saved);
    assert!(!list[1].is_saved);
    assert_eq!(api.calls(), vec!["toggle_hair_save h1"]);
}

#[tokio::test]
async fn failed_toggle_changes_nothing() {
    let api = MockApi::default(); // no toggle result configured -> error

    let mut list = vec![hair("h1")];
    let err = saves::toggle_hair(&api, &mut list, "h1").await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    assert!(!list[0].is_saved);
}

#[tokio::test]
async fn shop_toggle_updates_every_grouping_it_appears_in() {
    let api = MockApi {
        shop_toggle: Some(HairshopToggle { is_saved: true }),
        ..Default::default()
    };

    let mut map = HashMap::new();
    map.insert("h1".to_string(), vec![shop("s1"), shop("s2")]);
    map.insert("h2".to_string(), vec![shop("s1")]);

    let saved = saves::toggle_hairshop(&api, &mut map, "s1").await.unwrap();
    assert!(saved);
    assert!(map["h1"][0].is_saved);
    assert!(!map["h1"][1].is_saved);
    assert!(map["h2"][0].is_saved);
    // Exactly one mutating request was issued.
    assert_eq!(api.calls(), vec!["toggle_hairshop_save s1"]);
}

// --- Session accessor ------------------------------------------------------

#[tokio::test]
async fn invalid_email_is_rejected_before_any_request() {
    let api = MockApi::default();
    let tokens = TokenStore::with_service("mohitto-test-validation");
    let navigator = RecordingNavigator::default();
    let session = Session::new(&api, &tokens, &navigator);

    let err = session.login("not-an-email", "hunter2").await.unwrap_err();
    assert!(matches!(err, AuthError::Validation(_)));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn short_name_is_rejected_before_any_request() {
    let api = MockApi::default();
    let tokens = TokenStore::with_service("mohitto-test-validation");
    let navigator = RecordingNavigator::default();
    let session = Session::new(&api, &tokens, &navigator);

    let err = session.signup("a@b.co", "hunter2", " J ", true).await.unwrap_err();
    assert!(matches!(err, AuthError::Validation(_)));

    let err = session.signup("a@b.co", "hunter2", "Jo", false).await.unwrap_err();
    assert!(matches!(err, AuthError::Validation(_)));

    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn valid_signup_reaches_the_backend() {
    let api = MockApi::default();
    let tokens = TokenStore::with_service("mohitto-test-signup");
    let navigator = RecordingNavigator::default();
    let session = Session::new(&api, &tokens, &navigator);

    session.signup("a@b.co", "hunter2", "Jo", true).await.unwrap();
    assert_eq!(api.calls(), vec!["signup a@b.co"]);
}

#[tokio::test]
async fn unauthenticated_profile_triggers_redirect() {
    let api = MockApi::default(); // no profile configured -> 401
    let tokens = TokenStore::with_service("mohitto-test-profile");
    let navigator = RecordingNavigator::default();
    let session = Session::new(&api, &tokens, &navigator);

    let err = session.profile().await.unwrap_err();
    assert!(matches!(err, AuthError::Api(ApiError::Unauthenticated)));
    assert_eq!(*navigator.redirects.lock().unwrap(), 1);
}

#[tokio::test]
async fn successful_profile_does_not_redirect() {
    let api = MockApi {
        profile: Some(UserProfile {
            nickname: "mia".to_string(),
            email: "a@b.co".to_string(),
        }),
        ..Default::default()
    };
    let tokens = TokenStore::with_service("mohitto-test-profile-ok");
    let navigator = RecordingNavigator::default();
    let session = Session::new(&api, &tokens, &navigator);

    let profile = session.profile().await.unwrap();
    assert_eq!(profile.nickname, "mia");
    assert_eq!(*navigator.redirects.lock().unwrap(), 0);
}

// --- Readiness polling -----------------------------------------------------

#[tokio::test]
async fn poll_keeps_going_through_404_until_ready() {
    let api = MockApi {
        hairs: vec![hair("h1")],
        not_ready_fetches: Mutex::new(2),
        ..Default::default()
    };
    let (_tx, mut rx) = tokio::sync::watch::channel(false);

    let ready =
        jobs::wait_until_ready(&api, "42", Duration::from_millis(5), &mut rx).await;
    assert!(ready);

    let fetches = api
        .calls()
        .iter()
        .filter(|c| c.starts_with("hair_recommendations"))
        .count();
    assert_eq!(fetches, 3);
}

#[tokio::test]
async fn cancelled_poll_reports_not_ready() {
    // The mock never has recommendations, so only cancellation can end this.
    let api = MockApi::default();
    let (tx, mut rx) = tokio::sync::watch::channel(false);

    let poll = jobs::wait_until_ready(&api, "42", Duration::from_millis(5), &mut rx);
    let cancel = async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        let _ = tx.send(true);
    };

    let (ready, ()) = tokio::join!(poll, cancel);
    assert!(!ready);
}

#[tokio::test]
async fn watcher_stop_cancels_the_spawned_poll() {
    // Unroutable backend: every fetch fails, so the poll can only be stopped.
    let config = Config {
        base_url: "http://127.0.0.1:9".to_string(),
        request_timeout_secs: 1,
        ..Config::default()
    };
    let api = std::sync::Arc::new(ApiClient::new(&config, None).unwrap());

    let watcher =
        jobs::RecommendationWatcher::spawn(api, "42".to_string(), Duration::from_millis(10));
    tokio::time::sleep(Duration::from_millis(30)).await;
    watcher.stop().await;
}
