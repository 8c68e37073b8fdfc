use crate::device_camera::interface::Frame;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub probability: f64,
}

pub trait ImageClassifier {
    /// Prepares the model and returns how many classes it reports.
    fn load(&self) -> Result<usize, Box<dyn std::error::Error + Send + Sync>>;

    /// One probability per class for the given frame.
    fn classify(
        &self,
        frame: &Frame,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>>;
}
