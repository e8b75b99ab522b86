//! Item matcher — resolves suggested item names back to real inventory
//! records, enforcing at most one chosen item per main category.
//!
//! Greedy and non-backtracking: names are resolved in suggestion order and
//! earlier picks are never revisited. Simplicity over optimal assignment.

use std::collections::HashSet;

use crate::models::clothing::{ClothingItem, MainCategory};

const SCORE_EXACT: u32 = 100;
const SCORE_INVENTORY_CONTAINS: u32 = 80;
const SCORE_SUGGESTION_CONTAINS: u32 = 70;

/// Heuristic name-correspondence score; 0 means no match.
fn match_score(inventory_name: &str, suggested_name: &str) -> u32 {
    if inventory_name == suggested_name {
        SCORE_EXACT
    } else if inventory_name.contains(suggested_name) {
        SCORE_INVENTORY_CONTAINS
    } else if suggested_name.contains(inventory_name) {
        SCORE_SUGGESTION_CONTAINS
    } else {
        0
    }
}

/// Resolves each suggested name, in order, to the best-scoring inventory item
/// whose main category is not yet used. Ties go to the first inventory item
/// reaching the maximum score; unmatched names are silently dropped, so the
/// result may hold fewer items than were suggested.
pub fn match_items(suggested: &[String], inventory: &[ClothingItem]) -> Vec<ClothingItem> {
    let mut matched = Vec::new();
    let mut used_categories: HashSet<MainCategory> = HashSet::new();

    for suggested_name in suggested {
        let wanted = suggested_name.to_lowercase();

        let mut best: Option<&ClothingItem> = None;
        let mut best_score = 0;

        for item in inventory {
            if used_categories.contains(&item.main_category) {
                continue;
            }
            let score = match_score(&item.name.to_lowercase(), &wanted);
            if score > best_score {
                best_score = score;
                best = Some(item);
            }
        }

        if let Some(item) = best {
            used_categories.insert(item.main_category);
            matched.push(item.clone());
        }
    }

    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::clothing::Season;
    use chrono::Utc;
    use uuid::Uuid;

    fn item(name: &str, category: MainCategory) -> ClothingItem {
        ClothingItem {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: name.to_string(),
            main_category: category,
            sub_category: None,
            style: None,
            fit: None,
            size: None,
            color: None,
            seasons: Season::all(),
            image_url: None,
            created_at: Utc::now(),
        }
    }

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_match_beats_substring_candidates() {
        let inventory = vec![
            item("Blue Jeans", MainCategory::Bottoms),
            item("Jeans", MainCategory::Bottoms),
        ];
        let matched = match_items(&names(&["Blue Jeans"]), &inventory);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Blue Jeans");
    }

    #[test]
    fn test_category_uniqueness_is_enforced() {
        let inventory = vec![
            item("Blue Jeans", MainCategory::Bottoms),
            item("Black Jeans", MainCategory::Bottoms),
        ];
        let matched = match_items(&names(&["Blue Jeans", "Black Jeans"]), &inventory);
        assert_eq!(matched.len(), 1, "only one bottoms item may be chosen");
        assert_eq!(matched[0].name, "Blue Jeans");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let inventory = vec![item("White Tee", MainCategory::Tops)];
        let matched = match_items(&names(&["WHITE TEE"]), &inventory);
        assert_eq!(matched.len(), 1);
    }

    #[test]
    fn test_inventory_name_containing_suggestion_scores_80() {
        let inventory = vec![item("Vintage White Tee", MainCategory::Tops)];
        let matched = match_items(&names(&["White Tee"]), &inventory);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Vintage White Tee");
    }

    #[test]
    fn test_suggestion_containing_inventory_name_scores_70() {
        let inventory = vec![item("Tee", MainCategory::Tops)];
        let matched = match_items(&names(&["White Tee (rolled sleeves)"]), &inventory);
        assert_eq!(matched.len(), 1);
    }

    #[test]
    fn test_unmatched_names_are_silently_dropped() {
        let inventory = vec![item("Blue Jeans", MainCategory::Bottoms)];
        let matched = match_items(&names(&["Leather Jacket", "Blue Jeans"]), &inventory);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Blue Jeans");
    }

    #[test]
    fn test_ties_go_to_first_inventory_item() {
        // Both contain "Jeans" at score 80; first-seen must win.
        let inventory = vec![
            item("Slim Jeans", MainCategory::Bottoms),
            item("Baggy Jeans", MainCategory::Bottoms),
        ];
        let matched = match_items(&names(&["Jeans"]), &inventory);
        assert_eq!(matched[0].name, "Slim Jeans");
    }

    #[test]
    fn test_suggestion_order_is_preserved() {
        let inventory = vec![
            item("Sneakers", MainCategory::Footwear),
            item("White Tee", MainCategory::Tops),
            item("Blue Jeans", MainCategory::Bottoms),
        ];
        let matched = match_items(&names(&["White Tee", "Blue Jeans", "Sneakers"]), &inventory);
        let got: Vec<&str> = matched.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(got, vec!["White Tee", "Blue Jeans", "Sneakers"]);
    }

    #[test]
    fn test_used_category_releases_no_later_pick() {
        // After "Blue Jeans" consumes bottoms, a later bottoms-only
        // suggestion finds no candidate and is dropped.
        let inventory = vec![
            item("Blue Jeans", MainCategory::Bottoms),
            item("Khakis", MainCategory::Bottoms),
            item("White Tee", MainCategory::Tops),
        ];
        let matched = match_items(&names(&["Blue Jeans", "Khakis", "White Tee"]), &inventory);
        let got: Vec<&str> = matched.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(got, vec!["Blue Jeans", "White Tee"]);
    }

    #[test]
    fn test_no_two_results_share_a_category() {
        let inventory = vec![
            item("White Tee", MainCategory::Tops),
            item("Black Tee", MainCategory::Tops),
            item("Blue Jeans", MainCategory::Bottoms),
            item("Khakis", MainCategory::Bottoms),
        ];
        let matched = match_items(
            &names(&["White Tee", "Black Tee", "Blue Jeans", "Khakis"]),
            &inventory,
        );
        let mut seen = HashSet::new();
        for item in &matched {
            assert!(seen.insert(item.main_category), "duplicate category");
        }
    }

    #[test]
    fn test_empty_suggestions_match_nothing() {
        let inventory = vec![item("White Tee", MainCategory::Tops)];
        assert!(match_items(&[], &inventory).is_empty());
    }
}
