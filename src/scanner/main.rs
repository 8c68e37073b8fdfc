use crate::config::Config;
use crate::device_camera::interface::DeviceCamera;
use crate::device_display::interface::DeviceDisplay;
use crate::device_input::interface::DeviceInput;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use crate::library::state_machine::StateMachine;
use crate::scanner::core::{init, transition, Event, Model};
use crate::scanner::render::Render;
use crate::scanner::run_effect::RunEffect;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct Scanner {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    pub device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    pub device_input: Arc<dyn DeviceInput + Send + Sync>,
    pub image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
}

impl Scanner {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
        device_input: Arc<dyn DeviceInput + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    ) -> Self {
        Self {
            config,
            logger: logger.with_namespace("scanner"),
            device_camera,
            device_display,
            device_input,
            image_classifier,
        }
    }

    /// Runs until the user quits and returns the final model.
    pub fn run(&self) -> Result<Model, Box<dyn std::error::Error + Send + Sync>> {
        let config = self.config.clone();
        let logger = self.logger.clone();
        let transition_fn = move |model: Model, event: Event| {
            let noisy = event.is_noisy();
            if !noisy {
                let _ = logger.info(&format!("event: {:?}", event));
            }
            let previous_notice = model.notice.clone();
            let (new_model, effects) = transition(&config, model, event);
            let new_notice = new_model
                .notice
                .as_ref()
                .filter(|notice| Some(*notice) != previous_notice.as_ref());
            if let Some(notice) = new_notice {
                let _ = match notice.cause() {
                    Some(cause) => logger.warn(&format!("{} ({})", notice, cause)),
                    None => logger.warn(&notice.to_string()),
                };
            }
            if !noisy && !effects.is_empty() {
                let _ = logger.info(&format!("effects: {:?}", effects));
            }
            (new_model, effects)
        };

        let render = Render::new(self.device_display.clone(), self.config.clone());
        let render_logger = self.logger.clone();
        let render_fn = move |model: &Model| {
            if let Err(e) = render.render(model) {
                let _ = render_logger.warn(&format!("Render failed: {}", e));
            }
        };

        let run_effect = RunEffect::new(
            self.config.clone(),
            self.logger.clone(),
            self.device_camera.clone(),
            self.device_input.clone(),
            self.image_classifier.clone(),
        );
        let run_effect_fn = move |effect, event_sender| run_effect.run_effect(effect, event_sender);

        let state_machine = StateMachine::new(init(), transition_fn, render_fn, run_effect_fn);
        let model = state_machine.run(|model: &Model| model.exiting)?;

        if let Some(summary) = model.last_summary() {
            let _ = self.logger.info(&format!(
                "Last session: {:?} after {} frames",
                summary.decision, summary.frames_sampled
            ));
        }

        Ok(model)
    }
}
