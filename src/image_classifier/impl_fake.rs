use crate::catalog::Catalog;
use crate::device_camera::interface::Frame;
use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::library::logger::interface::Logger;
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;
use std::time::Duration;

/// Produces a random distribution over the catalog labels, normalised to 1.
pub struct ImageClassifierFake {
    labels: Vec<String>,
    logger: Arc<dyn Logger + Send + Sync>,
    delay: Duration,
    favourite: Option<String>,
}

impl ImageClassifierFake {
    pub fn new(catalog: &Catalog, logger: Arc<dyn Logger + Send + Sync>, delay: Duration) -> Self {
        Self {
            labels: catalog.labels().map(str::to_string).collect(),
            logger: logger.with_namespace("image_classifier").with_namespace("fake"),
            delay,
            favourite: None,
        }
    }

    /// Gives `label` the highest probability on every frame.
    #[allow(dead_code)]
    pub fn with_favourite(mut self, label: &str) -> Self {
        self.favourite = Some(label.to_string());
        self
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn load(&self) -> Result<usize, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Loading model...")?;
        std::thread::sleep(self.delay);
        self.logger
            .info(&format!("Model loaded with {} classes", self.labels.len()))?;
        Ok(self.labels.len())
    }

    fn classify(
        &self,
        _frame: &Frame,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        let mut rng = rand::rng();
        let weight_dist = Uniform::new(0.0f64, 1.0)?;

        let weights: Vec<f64> = self
            .labels
            .iter()
            .map(|label| {
                let weight = weight_dist.sample(&mut rng);
                if self.favourite.as_deref() == Some(label.as_str()) {
                    weight + 1.0
                } else {
                    weight
                }
            })
            .collect();
        let total: f64 = weights.iter().sum();

        let classifications = self
            .labels
            .iter()
            .zip(weights)
            .map(|(label, weight)| Classification {
                label: label.clone(),
                probability: if total > 0.0 { weight / total } else { 0.0 },
            })
            .collect();

        Ok(classifications)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::logger::impl_fake::LoggerFake;

    #[test]
    fn test_fake_distribution_covers_catalog() {
        let catalog = Catalog::default();
        let classifier =
            ImageClassifierFake::new(&catalog, Arc::new(LoggerFake::new()), Duration::ZERO);

        assert_eq!(classifier.load().unwrap(), catalog.len());

        let classifications = classifier.classify(&Frame::blank(2, 2)).unwrap();
        let labels: Vec<&str> = classifications.iter().map(|c| c.label.as_str()).collect();
        let total: f64 = classifications.iter().map(|c| c.probability).sum();

        assert_eq!(labels, catalog.labels().collect::<Vec<_>>());
        assert!(classifications
            .iter()
            .all(|c| (0.0..=1.0).contains(&c.probability)));
        assert!((total - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_favourite_always_wins() {
        let catalog = Catalog::default();
        let classifier =
            ImageClassifierFake::new(&catalog, Arc::new(LoggerFake::new()), Duration::ZERO)
                .with_favourite("banana");

        for _ in 0..20 {
            let classifications = classifier.classify(&Frame::blank(2, 2)).unwrap();
            let best = classifications
                .iter()
                .max_by(|a, b| a.probability.total_cmp(&b.probability))
                .unwrap();
            assert_eq!(best.label, "banana");
        }
    }
}
