use crate::config::Config;
use crate::device_camera::interface::DeviceCamera;
use crate::device_input::interface::DeviceInput;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use crate::scanner::core::{Effect, Event};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct RunEffect {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    device_input: Arc<dyn DeviceInput + Send + Sync>,
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
}

impl RunEffect {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        device_input: Arc<dyn DeviceInput + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    ) -> Self {
        Self {
            config,
            logger: logger.with_namespace("effect"),
            device_camera,
            device_input,
            image_classifier,
        }
    }

    pub fn run_effect(&self, effect: Effect, event_sender: Sender<Event>) {
        if !matches!(effect, Effect::CaptureFrame { .. } | Effect::ClassifyFrame { .. }) {
            let _ = self.logger.info(&format!("Running effect: {:?}", effect));
        }

        match effect {
            Effect::SubscribeInput => {
                let commands = self.device_input.events();
                while let Ok(command) = commands.recv() {
                    if event_sender.send(Event::Command(command, Instant::now())).is_err() {
                        break;
                    }
                }
            }
            Effect::SubscribeTick => loop {
                std::thread::sleep(self.config.tick_rate);
                if event_sender.send(Event::Tick(Instant::now())).is_err() {
                    break;
                }
            },
            Effect::StartCamera => {
                let started = self.device_camera.start();
                let _ = event_sender.send(Event::CameraStartDone(started));
            }
            Effect::StopCamera => {
                let stopped = self.device_camera.stop();
                if let Err(e) = &stopped {
                    let _ = self.logger.warn(&format!("Camera stop failed: {}", e));
                }
                let _ = event_sender.send(Event::CameraStopDone(stopped));
            }
            Effect::LoadClassifier { session } => {
                let result = self.image_classifier.load();
                match &result {
                    Ok(classes) if *classes != self.config.catalog.len() => {
                        let _ = self.logger.warn(&format!(
                            "Model reports {} classes but the catalog has {}",
                            classes,
                            self.config.catalog.len()
                        ));
                    }
                    Ok(_) => {}
                    Err(e) => {
                        let _ = self.logger.warn(&format!("Model load failed: {}", e));
                    }
                }
                let _ = event_sender.send(Event::ClassifierLoadDone { session, result });
            }
            Effect::CaptureFrame { session } => {
                let result = self.device_camera.capture_frame();
                if let Err(e) = &result {
                    let _ = self.logger.warn(&format!("Frame capture failed: {}", e));
                }
                let _ = event_sender.send(Event::FrameCaptureDone { session, result });
            }
            Effect::ClassifyFrame { session, frame } => {
                let result = self.image_classifier.classify(&frame);
                match &result {
                    Ok(classifications) => {
                        for c in classifications {
                            let _ = self.logger.info(&format!("{}: {:.2}", c.label, c.probability));
                        }
                    }
                    Err(e) => {
                        let _ = self.logger.warn(&format!("Classification failed: {}", e));
                    }
                }
                let _ = event_sender.send(Event::FrameClassifyDone { session, result });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogItem, HealthScore};
    use crate::device_camera::impl_fake::DeviceCameraFake;
    use crate::device_input::impl_fake::DeviceInputFake;
    use crate::image_classifier::impl_fake::ImageClassifierFake;
    use crate::library::logger::impl_fake::LoggerFake;
    use std::sync::mpsc::channel;
    use std::time::Duration;

    fn run_load(model_catalog: &Catalog) -> (LoggerFake, Event) {
        let config = Config::default();
        let logger = LoggerFake::new();
        let run_effect = RunEffect::new(
            config,
            Arc::new(logger.clone()),
            Arc::new(DeviceCameraFake::new(Arc::new(logger.clone()), Duration::ZERO)),
            Arc::new(DeviceInputFake::new(vec![])),
            Arc::new(ImageClassifierFake::new(
                model_catalog,
                Arc::new(logger.clone()),
                Duration::ZERO,
            )),
        );
        let (sender, receiver) = channel();

        run_effect.run_effect(Effect::LoadClassifier { session: 7 }, sender);

        (logger, receiver.recv().unwrap())
    }

    #[test]
    fn test_load_warns_on_class_count_mismatch() {
        let model_catalog = Catalog::new(vec![CatalogItem::new(
            "apple",
            "Apple",
            "apple.png",
            HealthScore::Good,
            95,
        )]);

        let (logger, event) = run_load(&model_catalog);

        assert!(matches!(
            event,
            Event::ClassifierLoadDone {
                session: 7,
                result: Ok(1)
            }
        ));
        assert!(logger
            .lines()
            .iter()
            .any(|line| line.starts_with("WARN") && line.contains("1 classes")));
    }

    #[test]
    fn test_load_with_matching_catalog_does_not_warn() {
        let (logger, event) = run_load(&Catalog::default());

        assert!(matches!(event, Event::ClassifierLoadDone { result: Ok(_), .. }));
        assert!(logger.lines().iter().all(|line| !line.starts_with("WARN")));
    }
}
