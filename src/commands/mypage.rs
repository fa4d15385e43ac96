use crate::api::{ApiClient, MohittoApi};
use crate::auth::{Session, TokenStore};
use crate::error::{ApiError, AuthError};
use crate::recommend::saves;

use super::{read_command, TerminalNavigator};

/// Print the my-page header. Returns `false` when the user turned out to be
/// signed out, in which case the screen is not shown at all.
async fn header(api: &ApiClient, tokens: &TokenStore) -> bool {
    let navigator = TerminalNavigator;
    let session = Session::new(api, tokens, &navigator);
    match session.profile().await {
        Ok(profile) => {
            println!("{} <{}>", profile.nickname, profile.email);
            true
        }
        Err(AuthError::Api(ApiError::Unauthenticated)) => false,
        Err(_) => {
            // Alert only; the saved list can still be shown.
            println!("Failed to load profile.");
            true
        }
    }
}

/// Saved hairstyles screen: list bookmarks, unsave entries in place.
/// An entry whose toggle comes back unsaved disappears from the list.
pub async fn saved_styles(api: &ApiClient, tokens: &TokenStore) {
    if !header(api, tokens).await {
        return;
    }

    let mut list = match api.saved_hairstyles().await {
        Ok(list) => list,
        Err(e) => {
            println!("{}", e.user_message("Failed to load saved hairstyles."));
            return;
        }
    };

    loop {
        if list.is_empty() {
            println!("No saved hairstyles.");
            return;
        }
        for hair in &list {
            println!("★ {} ({})", hair.hair_name, hair.hair_rec_id);
        }
        let line = match read_command("[t <id>] toggle / [q]uit > ") {
            Some(line) => line,
            None => return,
        };
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("t"), Some(id)) => match api.toggle_hair_save(id).await {
                Ok(toggle) => saves::apply_saved_hair_toggle(&mut list, &toggle),
                Err(e) => println!("{}", e.user_message("Failed to change save state.")),
            },
            (Some("q"), _) | (None, _) => return,
            _ => println!("Unknown command."),
        }
    }
}

/// Saved hairshops screen.
pub async fn saved_shops(api: &ApiClient, tokens: &TokenStore) {
    if !header(api, tokens).await {
        return;
    }

    let mut list = match api.saved_hairshops().await {
        Ok(list) => list,
        Err(e) => {
            println!("{}", e.user_message("Failed to load saved hairshops."));
            return;
        }
    };

    loop {
        if list.is_empty() {
            println!("No saved hairshops.");
            return;
        }
        for shop in &list {
            let style = shop.hair_name.as_deref().unwrap_or("-");
            println!(
                "★ {} ({})  for: {}  reviews: {}  score: {}",
                shop.hairshop,
                shop.hairshop_rec_id,
                style,
                shop.review_count,
                shop.display_score()
            );
        }
        let line = match read_command("[t <id>] toggle / [q]uit > ") {
            Some(line) => line,
            None => return,
        };
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("t"), Some(id)) => match api.toggle_hairshop_save(id).await {
                Ok(toggle) => saves::apply_saved_hairshop_toggle(&mut list, id, toggle.is_saved),
                Err(e) => println!("{}", e.user_message("Failed to change save state.")),
            },
            (Some("q"), _) | (None, _) => return,
            _ => println!("Unknown command."),
        }
    }
}
