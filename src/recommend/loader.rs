use std::collections::HashMap;

use futures_util::future::join_all;
use tracing::{info, warn};

use crate::api::types::{AnalysisResult, HairRecommendation, HairshopRecommendation};
use crate::api::MohittoApi;
use crate::error::LoadError;

/// The screens show at most this many styles; the backend list is truncated
/// rank-preserving before any per-style work happens.
pub const MAX_DISPLAYED_STYLES: usize = 4;

/// Everything the discover screen needs, assembled by one load pass.
/// Owned by the screen that loaded it and discarded on navigation away.
#[derive(Debug, Default)]
pub struct RecommendationView {
    /// Recommended styles in relevance order, at most [`MAX_DISPLAYED_STYLES`].
    pub hair_list: Vec<HairRecommendation>,
    /// Recommended salons per style, keyed by `hair_rec_id`.
    pub shops_by_hair: HashMap<String, Vec<HairshopRecommendation>>,
    /// Face/skin analysis context; best-effort, may be absent.
    pub analysis: Option<AnalysisResult>,
}

impl RecommendationView {
    pub fn shops_for(&self, hair_rec_id: &str) -> &[HairshopRecommendation] {
        self.shops_by_hair
            .get(hair_rec_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Load the full recommendation view:
///
/// 1. latest request id — absent means the user never submitted an analysis;
/// 2. hair recommendations for it — empty means nothing was generated;
/// 3. per-style hairshop lists, fetched concurrently, where one style's
///    failure degrades to an empty list instead of failing the load;
/// 4. best-effort analysis context, whose failure is ignored entirely.
///
/// There are no automatic retries; the caller re-invokes this to reload,
/// starting again from step 1 on a fresh view.
pub async fn load<G: MohittoApi>(api: &G) -> Result<RecommendationView, LoadError> {
    let request_id = api
        .latest_request_id()
        .await
        .map_err(LoadError::Network)?
        .ok_or(LoadError::NoRequestFound)?;
    info!("Loading recommendations for request {}", request_id);

    let mut hair_list = api
        .hair_recommendations(&request_id)
        .await
        .map_err(LoadError::Network)?;
    if hair_list.is_empty() {
        return Err(LoadError::NoRecommendations);
    }
    hair_list.truncate(MAX_DISPLAYED_STYLES);

    let fetches = hair_list.iter().map(|hair| {
        let id = hair.hair_rec_id.clone();
        async move {
            let shops = match api.hairshop_recommendations(&id).await {
                Ok(shops) => shops,
                Err(e) => {
                    // Partial-failure isolation: this style just shows no shops.
                    warn!("Hairshop fetch failed for style {}: {}", id, e);
                    Vec::new()
                }
            };
            (id, shops)
        }
    });
    let shops_by_hair: HashMap<_, _> = join_all(fetches).await.into_iter().collect();

    let analysis = match api.analysis_results(&request_id).await {
        Ok(results) => results.into_iter().next(),
        Err(e) => {
            info!("Analysis context unavailable: {}", e);
            None
        }
    };

    Ok(RecommendationView {
        hair_list,
        shops_by_hair,
        analysis,
    })
}
