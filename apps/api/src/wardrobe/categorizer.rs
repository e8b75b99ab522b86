//! Inventory categorizer — partitions one user's items into the five fixed
//! main-category buckets. Pure and order-preserving; recomputed per request.

use crate::models::clothing::{ClothingItem, MainCategory};

/// Inventory partitioned by main category. All five buckets are always
/// present; relative order within a bucket matches input order.
#[derive(Debug, Default)]
pub struct CategorizedInventory<'a> {
    pub tops: Vec<&'a ClothingItem>,
    pub bottoms: Vec<&'a ClothingItem>,
    pub outerwear: Vec<&'a ClothingItem>,
    pub footwear: Vec<&'a ClothingItem>,
    pub accessories: Vec<&'a ClothingItem>,
}

impl<'a> CategorizedInventory<'a> {
    pub fn bucket(&self, category: MainCategory) -> &[&'a ClothingItem] {
        match category {
            MainCategory::Tops => &self.tops,
            MainCategory::Bottoms => &self.bottoms,
            MainCategory::Outerwear => &self.outerwear,
            MainCategory::Footwear => &self.footwear,
            MainCategory::Accessories => &self.accessories,
        }
    }

    pub fn total(&self) -> usize {
        MainCategory::ALL
            .iter()
            .map(|&c| self.bucket(c).len())
            .sum()
    }
}

/// Partitions `items` by main category. The category set is closed at the
/// type level, so nothing can be dropped here — unknown categories are
/// rejected when an item is created.
pub fn categorize(items: &[ClothingItem]) -> CategorizedInventory<'_> {
    let mut categorized = CategorizedInventory::default();
    for item in items {
        match item.main_category {
            MainCategory::Tops => categorized.tops.push(item),
            MainCategory::Bottoms => categorized.bottoms.push(item),
            MainCategory::Outerwear => categorized.outerwear.push(item),
            MainCategory::Footwear => categorized.footwear.push(item),
            MainCategory::Accessories => categorized.accessories.push(item),
        }
    }
    categorized
}
