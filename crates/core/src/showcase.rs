//! Home page showcase carousel content.
//!
//! Each category button swaps the carousel to that category's product set.
//! Unknown keys fall back to the configured default category.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::ShowcaseConfig;

/// One product card in the showcase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowcaseItem {
    pub id: String,
    pub title: String,
    pub image_path: String,
}

impl ShowcaseItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, image_path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image_path: image_path.into(),
        }
    }

    /// Element id given to the rendered image, distinct from any static
    /// element carrying the item id.
    #[must_use]
    pub fn image_element_id(&self) -> String {
        format!("{}_dynamic", self.id)
    }
}

/// Category → items table plus the fallback category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Showcase {
    categories: BTreeMap<String, Vec<ShowcaseItem>>,
    default_category: String,
    current: String,
}

impl Showcase {
    #[must_use]
    pub fn new(categories: BTreeMap<String, Vec<ShowcaseItem>>, config: &ShowcaseConfig) -> Self {
        Self {
            categories,
            default_category: config.default_category.clone(),
            current: config.default_category.clone(),
        }
    }

    /// The storefront's product lineup.
    #[must_use]
    pub fn storefront(config: &ShowcaseConfig) -> Self {
        let skin = vec![
            ShowcaseItem::new("home-p1", "Acne Series", "images/Skin/Acne Series/Skin Care_30.png"),
            ShowcaseItem::new("home-p2", "Whitening Series", "images/Skin/Whitening Series/Skin Care_56.png"),
            ShowcaseItem::new("home-p3", "Anti Aging Series", "images/Skin/Anti Aging Series/Skin Care_13.png"),
            ShowcaseItem::new("home-p4", "Sensitive Series", "images/Skin/Sensitive Series/Skin Care_21.png"),
        ];
        let body = vec![
            ShowcaseItem::new("home-p5", "Body Care Series", "images/Body/Body Care Series/Skin Care_38.png"),
            ShowcaseItem::new("home-p6", "Body Care Series", "images/Body/Body Care Series/Skin Care_39.png"),
            ShowcaseItem::new("home-p7", "Body Care Series", "images/Body/Body Care Series/Skin Care_40.png"),
        ];
        let hair = vec![
            ShowcaseItem::new("home-p8", "Scalp Care Series", "images/Hair/Scalp Care Series/Skin Care_48.png"),
            ShowcaseItem::new("home-p9", "Hair Growth Series", "images/Hair/Hair Growth Series/Skin Care_46.png"),
            ShowcaseItem::new("home-p10", "Scalp Care Series", "images/Hair/Scalp Care Series/Skin Care_49.png"),
        ];
        let all = vec![
            ShowcaseItem::new("home-p1", "Acne Series", "images/Skin/Acne Series/Skin Care_30.png"),
            ShowcaseItem::new("home-p5", "Body Care", "images/Body/Body Care Series/Skin Care_38.png"),
            ShowcaseItem::new("home-p8", "Scalp Care", "images/Hair/Scalp Care Series/Skin Care_48.png"),
            ShowcaseItem::new("home-p2", "Whitening", "images/Skin/Whitening Series/Skin Care_56.png"),
        ];

        let categories = BTreeMap::from([
            ("skin".to_string(), skin),
            ("body".to_string(), body),
            ("hair".to_string(), hair),
            ("all".to_string(), all),
        ]);
        Self::new(categories, config)
    }

    /// Category currently displayed (after fallback).
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Resolve a category key, falling back to the default for unknown keys.
    #[must_use]
    pub fn resolve<'a>(&'a self, category: &'a str) -> &'a str {
        if self.categories.contains_key(category) {
            category
        } else {
            &self.default_category
        }
    }

    /// Items for `category`, or the default category's items for unknown keys.
    #[must_use]
    pub fn items_for(&self, category: &str) -> &[ShowcaseItem] {
        self.categories
            .get(self.resolve(category))
            .map_or(&[], Vec::as_slice)
    }

    /// Make `category` current and return its items.
    pub fn select(&mut self, category: &str) -> &[ShowcaseItem] {
        let resolved = self.resolve(category).to_string();
        if resolved != category {
            tracing::debug!(category, fallback = %resolved, "unknown showcase category");
        }
        self.current = resolved;
        self.items_for(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn showcase() -> Showcase {
        Showcase::storefront(&ShowcaseConfig::default())
    }

    #[test]
    fn test_starts_on_default_category() {
        assert_eq!(showcase().current(), "skin");
    }

    #[test]
    fn test_known_category_items() {
        let s = showcase();
        let titles: Vec<_> = s.items_for("hair").iter().map(|i| i.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Scalp Care Series", "Hair Growth Series", "Scalp Care Series"]
        );
    }

    #[test]
    fn test_unknown_category_falls_back_to_skin() {
        let mut s = showcase();
        let items = s.select("makeup").to_vec();
        assert_eq!(items, s.items_for("skin"));
        assert_eq!(s.current(), "skin");
    }

    #[test]
    fn test_image_element_id() {
        let item = ShowcaseItem::new("home-p3", "Anti Aging Series", "x.png");
        assert_eq!(item.image_element_id(), "home-p3_dynamic");
    }

    #[test]
    fn test_missing_default_yields_empty() {
        let s = Showcase::new(BTreeMap::new(), &ShowcaseConfig::default());
        assert!(s.items_for("skin").is_empty());
    }
}
