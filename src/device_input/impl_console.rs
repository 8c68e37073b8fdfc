use crate::device_input::interface::{Command, DeviceInput};
use std::io::BufRead;
use std::sync::mpsc;

pub const HELP: &str =
    "keys: w=webcam d=display l=labels i=info s=start/stop c=close notice +=like -=dislike q=quit";

/// Reads one command per line from stdin.
pub struct DeviceInputConsole {}

impl DeviceInputConsole {
    pub fn new() -> Self {
        Self {}
    }
}

impl DeviceInput for DeviceInputConsole {
    fn events(&self) -> mpsc::Receiver<Command> {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else {
                    break;
                };
                let Some(command) = parse_command(&line) else {
                    println!("{}", HELP);
                    continue;
                };
                if tx.send(command).is_err() || command == Command::Quit {
                    break;
                }
            }
        });

        rx
    }
}

pub fn parse_command(line: &str) -> Option<Command> {
    match line.trim() {
        "w" => Some(Command::ToggleWebcam),
        "d" => Some(Command::ToggleDisplay),
        "l" => Some(Command::ToggleLabels),
        "i" => Some(Command::ToggleInfo),
        "s" => Some(Command::ToggleSession),
        "c" => Some(Command::CloseNotice),
        "+" => Some(Command::Feedback { liked: true }),
        "-" => Some(Command::Feedback { liked: false }),
        "q" => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command(" s\n"), Some(Command::ToggleSession));
        assert_eq!(parse_command("-"), Some(Command::Feedback { liked: false }));
        assert_eq!(parse_command("q"), Some(Command::Quit));
        assert_eq!(parse_command("start"), None);
        assert_eq!(parse_command(""), None);
    }
}
