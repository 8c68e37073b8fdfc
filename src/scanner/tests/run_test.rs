#[cfg(test)]
mod run_test {

    use std::time::Duration;

    use crate::device_input::interface::Command;
    use crate::error::SessionError;
    use crate::scanner::core::CameraState;
    use crate::scanner::tests::fixture::Fixture;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_session_recommends_best_match() {
        let fixture = Fixture::new(vec![
            (ms(0), Command::ToggleWebcam),
            (ms(100), Command::ToggleSession),
            (ms(300), Command::ToggleSession),
            (ms(50), Command::Quit),
        ]);

        let model = fixture.scanner.run().unwrap();

        let summary = model.last_summary().expect("session summary");
        assert_eq!(summary.decision, Some("banana".to_string()));
        assert!(summary.frames_sampled > 0);

        let screen = fixture.device_display.last_screen().expect("screen drawn");
        assert_eq!(
            screen.section("Recommendation").map(|s| s.lines[0].clone()),
            Some("Best match: Banana".to_string())
        );

        assert!(fixture
            .logger
            .lines()
            .iter()
            .any(|line| line.contains("banana: ")));
    }

    #[test]
    fn test_denied_camera_blocks_prediction() {
        let fixture = Fixture::with_camera_denied(vec![
            (ms(0), Command::ToggleWebcam),
            (ms(100), Command::ToggleSession),
            (ms(50), Command::Quit),
        ]);

        let model = fixture.scanner.run().unwrap();

        assert_eq!(model.camera, CameraState::Off);
        assert!(model.last_summary().is_none());
        assert_eq!(model.notice, Some(SessionError::CameraInactive));

        let screen = fixture.device_display.last_screen().expect("screen drawn");
        assert_eq!(
            screen.notice.as_deref(),
            Some("Enable camera to start model prediction")
        );
    }
}
