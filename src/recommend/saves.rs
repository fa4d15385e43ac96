//! Save-state toggling and reconciliation.
//!
//! A toggle issues exactly one request and never flips the flag optimistically;
//! the server's response is the authoritative state, which is then patched into
//! whatever list(s) the screen currently holds. On failure nothing changes.

use std::collections::HashMap;

use crate::api::types::{HairRecommendation, HairshopRecommendation, HairToggle};
use crate::api::MohittoApi;
use crate::error::ApiError;

/// Toggle a hairstyle bookmark and reconcile the result into the held list.
/// Returns the new authoritative state.
pub async fn toggle_hair<G: MohittoApi>(
    api: &G,
    hair_list: &mut [HairRecommendation],
    hair_rec_id: &str,
) -> Result<bool, ApiError> {
    let toggle = api.toggle_hair_save(hair_rec_id).await?;
    apply_hair_toggle(hair_list, &toggle);
    Ok(toggle.is_saved)
}

/// Toggle a hairshop bookmark and reconcile the result into the per-style map.
pub async fn toggle_hairshop<G: MohittoApi>(
    api: &G,
    shops_by_hair: &mut HashMap<String, Vec<HairshopRecommendation>>,
    hairshop_rec_id: &str,
) -> Result<bool, ApiError> {
    let toggle = api.toggle_hairshop_save(hairshop_rec_id).await?;
    apply_hairshop_toggle(shops_by_hair, hairshop_rec_id, toggle.is_saved);
    Ok(toggle.is_saved)
}

/// Set the flag on the entry matching the response id, leaving every other
/// entry untouched.
pub fn apply_hair_toggle(hair_list: &mut [HairRecommendation], toggle: &HairToggle) {
    for hair in hair_list
        .iter_mut()
        .filter(|h| h.hair_rec_id == toggle.hair_rec_id)
    {
        hair.is_saved = toggle.is_saved;
    }
}

/// Set the flag on every occurrence of the shop across all style groupings.
/// The same shop can be recommended for more than one style, so a single
/// grouping update would leave the map inconsistent.
pub fn apply_hairshop_toggle(
    shops_by_hair: &mut HashMap<String, Vec<HairshopRecommendation>>,
    hairshop_rec_id: &str,
    is_saved: bool,
) {
    for shops in shops_by_hair.values_mut() {
        for shop in shops
            .iter_mut()
            .filter(|s| s.hairshop_rec_id == hairshop_rec_id)
        {
            shop.is_saved = is_saved;
        }
    }
}

/// Saved-list variant (my page): an entry whose toggle came back unsaved is
/// dropped from the list, since the list shows bookmarks only.
pub fn apply_saved_hair_toggle(list: &mut Vec<HairRecommendation>, toggle: &HairToggle) {
    if toggle.is_saved {
        apply_hair_toggle(list, toggle);
    } else {
        list.retain(|h| h.hair_rec_id != toggle.hair_rec_id);
    }
}

/// Saved-list variant for hairshops.
pub fn apply_saved_hairshop_toggle(
    list: &mut Vec<HairshopRecommendation>,
    hairshop_rec_id: &str,
    is_saved: bool,
) {
    if is_saved {
        for shop in list
            .iter_mut()
            .filter(|s| s.hairshop_rec_id == hairshop_rec_id)
        {
            shop.is_saved = true;
        }
    } else {
        list.retain(|s| s.hairshop_rec_id != hairshop_rec_id);
    }
}
