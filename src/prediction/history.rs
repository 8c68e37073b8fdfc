use crate::catalog::Catalog;
use indexmap::IndexMap;

/// One classifier output for one label, probability in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub label: String,
    pub probability: f64,
}

impl Sample {
    pub fn new(label: &str, probability: f64) -> Self {
        Self {
            label: label.to_string(),
            probability,
        }
    }

    pub fn percentage(&self) -> f64 {
        self.probability * 100.0
    }
}

/// Percentages recorded per catalog label during one session, in recording order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionHistory {
    values: IndexMap<String, Vec<f64>>,
}

impl SessionHistory {
    pub fn new(catalog: &Catalog) -> Self {
        let mut history = Self::default();
        for label in catalog.labels() {
            history.values.insert(label.to_string(), Vec::new());
        }
        history
    }

    /// Appends `probability * 100` for the sample's label.
    ///
    /// Returns `false` when the label is not part of the catalog the history
    /// was built from; such samples are dropped.
    pub fn record(&mut self, sample: &Sample) -> bool {
        match self.values.get_mut(&sample.label) {
            Some(values) => {
                values.push(sample.percentage());
                true
            }
            None => false,
        }
    }

    #[allow(dead_code)]
    pub fn reset(&mut self) {
        for values in self.values.values_mut() {
            values.clear();
        }
    }

    #[allow(dead_code)]
    pub fn values(&self, label: &str) -> Option<&[f64]> {
        self.values.get(label).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.values
            .iter()
            .map(|(label, values)| (label.as_str(), values.as_slice()))
    }

    #[allow(dead_code)]
    pub fn total_samples(&self) -> usize {
        self.values.values().map(Vec::len).sum()
    }

    /// Number of classified frames, given one sample per label per frame.
    pub fn frames_recorded(&self) -> usize {
        self.values.values().map(Vec::len).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogItem, HealthScore};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            CatalogItem::new("a", "A", "a.png", HealthScore::Good, 1),
            CatalogItem::new("b", "B", "b.png", HealthScore::Poor, 2),
        ])
    }

    #[test]
    fn test_new_history_has_every_label_empty() {
        let history = SessionHistory::new(&catalog());

        assert_eq!(history.values("a"), Some(&[][..]));
        assert_eq!(history.values("b"), Some(&[][..]));
        assert_eq!(history.total_samples(), 0);
    }

    #[test]
    fn test_record_appends_percentage() {
        let mut history = SessionHistory::new(&catalog());

        assert!(history.record(&Sample::new("a", 0.25)));
        assert!(history.record(&Sample::new("a", 0.5)));

        assert_eq!(history.values("a"), Some(&[25.0, 50.0][..]));
        assert_eq!(history.values("b"), Some(&[][..]));
    }

    #[test]
    fn test_percentage_keeps_decimal_probabilities_exact() {
        let mut history = SessionHistory::new(&catalog());

        history.record(&Sample::new("a", 0.2));
        history.record(&Sample::new("a", 0.7));
        history.record(&Sample::new("b", 0.5));

        assert_eq!(history.values("a"), Some(&[20.0, 70.0][..]));
        assert_eq!(history.values("b"), Some(&[50.0][..]));
    }

    #[test]
    fn test_duplicates_accumulate() {
        let mut history = SessionHistory::new(&catalog());
        let sample = Sample::new("b", 0.1);

        history.record(&sample);
        history.record(&sample);

        assert_eq!(history.values("b").map(<[f64]>::len), Some(2));
    }

    #[test]
    fn test_unknown_label_is_dropped() {
        let mut history = SessionHistory::new(&catalog());

        assert!(!history.record(&Sample::new("dog", 0.9)));
        assert_eq!(history.values("dog"), None);
        assert_eq!(history.total_samples(), 0);
    }

    #[test]
    fn test_reset_clears_values_but_keeps_labels() {
        let mut history = SessionHistory::new(&catalog());
        history.record(&Sample::new("a", 0.3));

        history.reset();

        assert_eq!(history.values("a"), Some(&[][..]));
        assert_eq!(history.iter().count(), 2);
    }
}
