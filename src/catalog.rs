use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthScore {
    Good,
    Moderate,
    Poor,
}

impl fmt::Display for HealthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthScore::Good => write!(f, "Good"),
            HealthScore::Moderate => write!(f, "Moderate"),
            HealthScore::Poor => write!(f, "Poor"),
        }
    }
}

/// Static metadata shown for a recognizable item.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub label: String,
    pub display_name: String,
    pub image_asset: String,
    pub score: HealthScore,
    pub calories_kcal: u32,
}

impl CatalogItem {
    pub fn new(
        label: &str,
        display_name: &str,
        image_asset: &str,
        score: HealthScore,
        calories_kcal: u32,
    ) -> Self {
        Self {
            label: label.to_string(),
            display_name: display_name.to_string(),
            image_asset: image_asset.to_string(),
            score,
            calories_kcal,
        }
    }
}

/// The fixed, closed set of labels the classifier can report, in display order.
///
/// Built once at startup and never mutated. Order matters: aggregation and the
/// best-match decision walk labels in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Later items with a label already present are dropped.
    pub fn new(items: Vec<CatalogItem>) -> Self {
        let mut unique: Vec<CatalogItem> = Vec::with_capacity(items.len());
        for item in items {
            if !unique.iter().any(|existing| existing.label == item.label) {
                unique.push(item);
            }
        }
        Self { items: unique }
    }

    pub fn get(&self, label: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.label == label)
    }

    #[allow(dead_code)]
    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.label.as_str())
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(vec![
            CatalogItem::new(
                "apple",
                "Apple",
                "assets/img/items/apple.png",
                HealthScore::Good,
                95,
            ),
            CatalogItem::new(
                "banana",
                "Banana",
                "assets/img/items/banana.png",
                HealthScore::Good,
                105,
            ),
            CatalogItem::new(
                "granola_bar",
                "Granola Bar",
                "assets/img/items/granola_bar.png",
                HealthScore::Moderate,
                190,
            ),
            CatalogItem::new(
                "crisps",
                "Crisps",
                "assets/img/items/crisps.png",
                HealthScore::Poor,
                160,
            ),
            CatalogItem::new(
                "chocolate",
                "Chocolate Bar",
                "assets/img/items/chocolate.png",
                HealthScore::Poor,
                235,
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_labels_keep_first() {
        let catalog = Catalog::new(vec![
            CatalogItem::new("a", "First", "a.png", HealthScore::Good, 1),
            CatalogItem::new("b", "B", "b.png", HealthScore::Poor, 2),
            CatalogItem::new("a", "Second", "a2.png", HealthScore::Poor, 3),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("a").map(|i| i.display_name.as_str()), Some("First"));
        assert_eq!(catalog.labels().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_default_catalog_lookup() {
        let catalog = Catalog::default();

        assert!(catalog.contains("banana"));
        assert!(!catalog.contains("dog"));
        assert_eq!(catalog.get("crisps").map(|i| i.score), Some(HealthScore::Poor));
    }
}
