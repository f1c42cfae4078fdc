// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end scenarios driving a `SmartHome` through its public API.

use std::sync::Arc;

use parking_lot::Mutex;
use smart_home::{
    DeviceEvent, DeviceStatus, HomeCommand, HomeConfig, SmartDevice, SmartHome, SmartLight,
    SmartTv, Subscribable,
};

fn recorded(home: &SmartHome) -> Arc<Mutex<Vec<String>>> {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let sink = lines.clone();
    home.on_event(move |event| sink.lock().push(event.to_string()));
    lines
}

// ============================================================================
// Demo script
// ============================================================================

mod demo {
    use super::*;

    #[test]
    fn demo_script_output() {
        let mut home = SmartHome::default();
        let lines = recorded(&home);

        for command in HomeCommand::DEMO {
            home.execute(command);
        }

        assert_eq!(
            *lines.lock(),
            vec![
                "Android TV is turned on. Speaker volume is set to 10 and channel number is set to 1.",
                "Speaker volume increased to 11.",
                "Speaker volume decreased to 10.",
                "Channel number increased to 2.",
                "Channel number decreased to 1.",
                "Device name: Android TV, category: Entertainment, type: Smart TV",
                "Google Light turned on. The brightness level is 15.",
                "Brightness increased to 16.",
                "Brightness decreased to 15.",
                "Device name: Google Light, category: Utility, type: Smart Light",
                "Android TV turned off",
                "Google Light turned off",
                "Android TV is offline; speaker volume not changed.",
                "Android TV turned off",
            ]
        );
        assert_eq!(home.device_turn_on_count(), -1);
    }

    #[test]
    fn commands_parse_from_cli_text() {
        let script: Vec<HomeCommand> = ["turn-on-tv", "VOLUME-UP", "tv-info"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        let mut home = SmartHome::default();
        for command in script {
            home.execute(command);
        }
        assert_eq!(home.tv().volume(), 11);
    }
}

// ============================================================================
// Guard and counter
// ============================================================================

mod guard {
    use super::*;

    fn offline_home() -> SmartHome {
        SmartHome::new(
            SmartTv::new("Android TV", "Entertainment", DeviceStatus::Offline),
            SmartLight::new("Google Light", "Utility", DeviceStatus::Offline),
        )
    }

    #[test]
    fn volume_guard_lifts_after_turn_on() {
        let mut home = offline_home();
        let lines = recorded(&home);

        home.increase_tv_volume();
        assert_eq!(home.tv().volume(), 10);

        home.turn_on_tv();
        home.increase_tv_volume();
        assert_eq!(home.tv().volume(), 11);

        home.turn_off_tv();
        home.decrease_tv_volume();
        assert_eq!(home.tv().volume(), 11);

        let rejection = "Android TV is offline; speaker volume not changed.";
        let lines = lines.lock();
        assert_eq!(lines.first().map(String::as_str), Some(rejection));
        assert_eq!(lines.last().map(String::as_str), Some(rejection));
    }

    #[test]
    fn rejected_events_carry_command_and_status() {
        let mut home = offline_home();
        match home.decrease_tv_volume() {
            DeviceEvent::CommandRejected {
                command, status, ..
            } => {
                assert_eq!(command, HomeCommand::DecreaseTvVolume);
                assert_eq!(status, DeviceStatus::Offline);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn counter_drifts_below_zero() {
        let mut home = SmartHome::default();
        home.turn_off_tv();
        assert_eq!(home.device_turn_on_count(), -1);
        home.turn_off_all_devices();
        assert_eq!(home.device_turn_on_count(), -3);
    }
}

// ============================================================================
// Subscriptions
// ============================================================================

mod subscriptions {
    use super::*;

    #[test]
    fn device_and_home_subscribers_both_notified() {
        let mut home = SmartHome::default();
        let home_lines = recorded(&home);

        let tv_statuses = Arc::new(Mutex::new(Vec::new()));
        let sink = tv_statuses.clone();
        home.tv().on_status_changed(move |_, status| sink.lock().push(status));

        home.turn_off_tv();
        home.turn_on_tv();

        assert_eq!(home_lines.lock().len(), 2);
        assert_eq!(
            *tv_statuses.lock(),
            vec![DeviceStatus::Offline, DeviceStatus::Online]
        );
    }

    #[test]
    fn unsubscribed_callback_is_silent() {
        let mut home = SmartHome::default();
        let count = Arc::new(Mutex::new(0_u32));
        let sink = count.clone();
        let id = home.on_event(move |_| *sink.lock() += 1);

        home.turn_on_light();
        assert!(home.unsubscribe(id));
        home.turn_off_light();

        assert_eq!(*count.lock(), 1);
    }

    #[test]
    fn level_subscribers_see_values() {
        let mut home = SmartHome::default();
        let values = Arc::new(Mutex::new(Vec::new()));
        let sink = values.clone();
        home.on_level_changed(move |change| sink.lock().push(change.value()));

        home.turn_on_light();
        home.increase_light_brightness();
        home.change_tv_channel_to_next();

        assert_eq!(*values.lock(), vec![16, 2]);
    }
}

// ============================================================================
// Configuration
// ============================================================================

mod config {
    use super::*;

    #[test]
    fn home_built_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("home.toml");
        std::fs::write(
            &path,
            r#"
                [tv]
                name = "Den TV"
                status = "offline"
                volume = { initial = 48, min = 0, max = 50 }

                [light]
                name = "Porch"
                on_level = 40
            "#,
        )
        .unwrap();

        let config = HomeConfig::load(&path).unwrap();
        let mut home = SmartHome::from_config(&config).unwrap();

        assert_eq!(home.tv().name(), "Den TV");
        assert!(home.increase_tv_volume().is_rejection());

        home.turn_on_tv();
        home.increase_tv_volume();
        home.increase_tv_volume();
        home.increase_tv_volume();
        assert_eq!(home.tv().volume(), 50);

        home.turn_on_light();
        assert_eq!(home.light().brightness(), 40);
    }

    #[test]
    fn missing_file_gives_default_home() {
        let dir = tempfile::tempdir().unwrap();
        let config = HomeConfig::load(dir.path().join("absent.toml")).unwrap();
        let home = SmartHome::from_config(&config).unwrap();
        assert_eq!(home.tv().name(), "Android TV");
        assert_eq!(home.light().name(), "Google Light");
        assert_eq!(home.tv().status(), DeviceStatus::Online);
    }

    #[test]
    fn configured_light_always_turns_off_to_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("light.toml");

        std::fs::write(
            &path,
            "[light]\nbrightness = { initial = 5, min = 5, max = 20 }\non_level = 15\n",
        )
        .unwrap();
        let err = HomeConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("light.brightness"));

        std::fs::write(
            &path,
            "[light]\nbrightness = { initial = 5, min = 0, max = 20 }\non_level = 15\n",
        )
        .unwrap();
        let config = HomeConfig::load(&path).unwrap();
        let mut home = SmartHome::from_config(&config).unwrap();
        home.turn_on_light();
        assert_eq!(home.light().brightness(), 15);
        home.turn_off_light();
        assert_eq!(home.light().brightness(), 0);
    }

    #[test]
    fn invalid_bounds_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[tv]\nchannel = { initial = 1, min = 9, max = 2 }\n").unwrap();

        let err = HomeConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("tv.channel"));
    }
}
