use crate::device_input::interface::{Command, DeviceInput};
use std::sync::mpsc;
use std::time::Duration;

/// Replays a fixed script, waiting the given duration before each command.
#[allow(dead_code)]
pub struct DeviceInputFake {
    script: Vec<(Duration, Command)>,
}

#[allow(dead_code)]
impl DeviceInputFake {
    pub fn new(script: Vec<(Duration, Command)>) -> Self {
        Self { script }
    }
}

impl DeviceInput for DeviceInputFake {
    fn events(&self) -> mpsc::Receiver<Command> {
        let (tx, rx) = mpsc::channel();
        let script = self.script.clone();

        std::thread::spawn(move || {
            for (delay, command) in script {
                std::thread::sleep(delay);
                if tx.send(command).is_err() {
                    break;
                }
            }
        });

        rx
    }
}
