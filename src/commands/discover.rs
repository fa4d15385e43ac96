use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use crate::api::types::JobRequest;
use crate::api::{ApiClient, MohittoApi};
use crate::error::LoadError;
use crate::jobs::{self, RecommendationWatcher};
use crate::recommend::colors::parse_rec_colors;
use crate::recommend::{loader, saves, Pager, RecommendationView};

use super::read_command;

enum ScreenExit {
    Reload,
    Quit,
}

/// Discover screen: load the recommendation view and page through it,
/// toggling saves in place. A failed load renders its message plus a retry
/// prompt; reload restarts the whole sequence on a fresh view.
pub async fn browse(api: &ApiClient) {
    loop {
        match loader::load(api).await {
            Ok(mut view) => match interact(api, &mut view).await {
                ScreenExit::Reload => continue,
                ScreenExit::Quit => return,
            },
            Err(e) => {
                let message = match e {
                    LoadError::NoRequestFound => "No analysis request yet. Submit a photo first.",
                    LoadError::NoRecommendations => "No hairstyles were recommended.",
                    LoadError::Network(ref e) => e.user_message("Failed to load recommendations."),
                };
                println!("{}", message);
                match read_command("[r]etry / [q]uit > ").as_deref() {
                    Some("r") => continue,
                    _ => return,
                }
            }
        }
    }
}

async fn interact(api: &ApiClient, view: &mut RecommendationView) -> ScreenExit {
    let mut pager = Pager::new(view.hair_list.len());

    if let Some(analysis) = &view.analysis {
        render_analysis(analysis);
    }

    loop {
        render_page(view, &pager);
        let line = match read_command("[n]ext [p]rev [s]ave [h <shop-id>] [r]eload [q]uit > ") {
            Some(line) => line,
            None => return ScreenExit::Quit,
        };
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("n"), _) => pager.next(),
            (Some("p"), _) => pager.prev(),
            (Some("s"), id) => {
                let id = id
                    .map(str::to_string)
                    .or_else(|| pager.current(&view.hair_list).map(|h| h.hair_rec_id.clone()));
                if let Some(id) = id {
                    match saves::toggle_hair(api, &mut view.hair_list, &id).await {
                        Ok(saved) => {
                            println!("{} {}", id, if saved { "saved" } else { "unsaved" })
                        }
                        Err(e) => println!("{}", e.user_message("Failed to change save state.")),
                    }
                }
            }
            (Some("h"), Some(id)) => {
                match saves::toggle_hairshop(api, &mut view.shops_by_hair, id).await {
                    Ok(saved) => println!("{} {}", id, if saved { "saved" } else { "unsaved" }),
                    Err(e) => println!("{}", e.user_message("Failed to change save state.")),
                }
            }
            (Some("r"), _) => return ScreenExit::Reload,
            (Some("q"), _) | (None, _) => return ScreenExit::Quit,
            _ => println!("Unknown command."),
        }
    }
}

fn render_analysis(analysis: &crate::api::types::AnalysisResult) {
    println!("Face: {}  Skin tone: {}", analysis.face_type, analysis.skin_tone);
    let colors = parse_rec_colors(&analysis.rec_color);
    if !colors.is_empty() {
        let rendered: Vec<String> = colors
            .iter()
            .map(|c| match c.swatch {
                Some(hex) => format!("{} ({})", c.name, hex),
                None => c.name.clone(),
            })
            .collect();
        println!("Recommended colors: {}", rendered.join(", "));
    }
    if !analysis.summary.is_empty() {
        println!("{}", analysis.summary);
    }
}

fn render_page(view: &RecommendationView, pager: &Pager) {
    let hair = match pager.current(&view.hair_list) {
        Some(hair) => hair,
        None => {
            println!("Nothing to show.");
            return;
        }
    };

    println!();
    println!(
        "[{}] {} {}  ({})",
        pager.position_label(),
        if hair.is_saved { "★" } else { "☆" },
        hair.hair_name,
        hair.hair_rec_id
    );
    match hair.simulation_image() {
        Some(url) => println!("    simulation: {}", url),
        None => println!("    simulation image not generated yet"),
    }
    if !hair.description.is_empty() {
        println!("    {}", hair.description);
    }

    let shops = view.shops_for(&hair.hair_rec_id);
    if shops.is_empty() {
        println!("    no recommended hairshops");
    } else {
        for shop in shops {
            println!(
                "    {} {} ({})  reviews: {}  score: {}",
                if shop.is_saved { "★" } else { "☆" },
                shop.hairshop,
                shop.hairshop_rec_id,
                shop.review_count,
                shop.display_score()
            );
        }
    }
}

/// Trigger simulation-image generation. Failures here are logged but not
/// shown; the user checks back via the readiness poll either way.
pub async fn trigger_simulation(api: &ApiClient, user_id: &str, request_id: &str) {
    let job = JobRequest {
        user_id: user_id.to_string(),
        request_id: request_id.to_string(),
    };
    match jobs::trigger_hair_simulation(api, &job).await {
        Ok(()) => println!("Simulation requested. Check back shortly with `mohitto watch`."),
        Err(e) => warn!("Simulation trigger failed: {}", e),
    }
}

/// Trigger recommendation generation. Unlike the simulation trigger, a
/// failure is surfaced to the user.
pub async fn trigger_recommendation(api: &ApiClient, user_id: &str, request_id: &str) {
    let job = JobRequest {
        user_id: user_id.to_string(),
        request_id: request_id.to_string(),
    };
    match jobs::trigger_recommendation(api, &job).await {
        Ok(()) => println!("Recommendation generation requested."),
        Err(e) => println!("{}", e.user_message("Recommendation request failed.")),
    }
}

/// Poll until the recommendations for a request become ready, stopping on
/// Ctrl-C. Without an explicit request id the latest one is used.
pub async fn watch(api: Arc<ApiClient>, request_id: Option<String>, interval: Duration) {
    let request_id = match request_id {
        Some(id) => id,
        None => match api.latest_request_id().await {
            Ok(Some(id)) => id,
            Ok(None) => {
                println!("No analysis request yet. Submit a photo first.");
                return;
            }
            Err(e) => {
                println!("{}", e.user_message("Failed to look up the latest request."));
                return;
            }
        },
    };

    println!("Waiting for recommendations for request {}...", request_id);
    let watcher = RecommendationWatcher::spawn(api, request_id, interval);
    tokio::select! {
        ready = watcher.wait() => {
            if ready {
                println!("Recommendations are ready. Run `mohitto discover`.");
            } else {
                println!("Stopped waiting.");
            }
        }
        _ = tokio::signal::ctrl_c() => {
            println!("Stopped waiting.");
        }
    }
}
