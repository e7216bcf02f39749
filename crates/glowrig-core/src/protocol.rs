//! Wire protocol for the rig's device socket and settings endpoint.
//!
//! JSON frames both directions, discriminated by a `type` tag. The rig sends
//! `ServerEvent`s (live counter/status pushes and sound cues); the panel sends
//! `ClientCommand`s. Frames with an unrecognized tag fail to parse and are
//! dropped by the link, never surfaced.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Frame pushed by the rig over the device socket.
///
/// `CounterUpdate` and `StatusUpdate` carry the same payload shape; they are the
/// live-value tags of the two panel page variants and each feeds its own display
/// slot. The value is string-or-number on the wire, so it is kept as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum ServerEvent {
    CounterUpdate { value: Value },
    StatusUpdate { value: Value },
    PlaySound { name: String },
}

/// Frame sent by the panel over the device socket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum ClientCommand {
    /// Flash the alert sequence and cue the alert sound.
    RedAlert,
    /// Stop the running LED sequence and blank the strip.
    #[serde(rename = "LEDReset")]
    LedReset,
    /// Zero the stepper's step counter.
    StepperReset,
    /// Turn the stepper to an absolute step position.
    StepperStep { step: i64 },
    /// Full LED settings. `mode` is lowercase on the wire; build this via
    /// [`LedSettings::to_socket_command`] rather than by hand.
    UpdateSettings {
        r: u8,
        g: u8,
        b: u8,
        mode: String,
        speed: f32,
        repeat: bool,
    },
    /// Light the three player segments of the table.
    PlayerTable { p1: String, p2: String, p3: String },
}

/// LED settings as edited in the panel. Doubles as the JSON body of the
/// one-shot `POST /led/settings` submission, where `mode` keeps whatever case
/// the form produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedSettings {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub mode: String,
    pub speed: f32,
    pub repeat: bool,
}

impl LedSettings {
    /// Socket rendering of the same submission. The rig deserializes modes with
    /// `rename_all = "lowercase"`, so the mode string is lowercased here.
    pub fn to_socket_command(&self) -> ClientCommand {
        ClientCommand::UpdateSettings {
            r: self.r,
            g: self.g,
            b: self.b,
            mode: self.mode.to_lowercase(),
            speed: self.speed,
            repeat: self.repeat,
        }
    }
}

/// LED sequence modes offered by the rig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkMode {
    Static,
    Blink,
    Dot,
    Custom,
}

impl WorkMode {
    pub const ALL: [WorkMode; 4] = [
        WorkMode::Static,
        WorkMode::Blink,
        WorkMode::Dot,
        WorkMode::Custom,
    ];

    /// Human label for the mode select.
    pub fn label(self) -> &'static str {
        match self {
            WorkMode::Static => "Static",
            WorkMode::Blink => "Blink",
            WorkMode::Dot => "Dot",
            WorkMode::Custom => "Custom",
        }
    }

    /// Lowercase name as the rig expects it.
    pub fn wire_name(self) -> &'static str {
        match self {
            WorkMode::Static => "static",
            WorkMode::Blink => "blink",
            WorkMode::Dot => "dot",
            WorkMode::Custom => "custom",
        }
    }
}

/// Colors selectable for the player-table segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerColor {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    White,
}

impl PlayerColor {
    pub const ALL: [PlayerColor; 6] = [
        PlayerColor::Red,
        PlayerColor::Green,
        PlayerColor::Blue,
        PlayerColor::Yellow,
        PlayerColor::Purple,
        PlayerColor::White,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PlayerColor::Red => "Red",
            PlayerColor::Green => "Green",
            PlayerColor::Blue => "Blue",
            PlayerColor::Yellow => "Yellow",
            PlayerColor::Purple => "Purple",
            PlayerColor::White => "White",
        }
    }

    pub fn wire_name(self) -> &'static str {
        match self {
            PlayerColor::Red => "red",
            PlayerColor::Green => "green",
            PlayerColor::Blue => "blue",
            PlayerColor::Yellow => "yellow",
            PlayerColor::Purple => "purple",
            PlayerColor::White => "white",
        }
    }
}

/// Display rendering of a live value: strings verbatim (no quotes), everything
/// else in its canonical JSON form.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn trigger_frames_carry_only_the_type_tag() {
        for (cmd, tag) in [
            (ClientCommand::RedAlert, "RedAlert"),
            (ClientCommand::LedReset, "LEDReset"),
            (ClientCommand::StepperReset, "StepperReset"),
        ] {
            let frame = serde_json::to_value(&cmd).unwrap();
            assert_eq!(frame, json!({ "type": tag }));
            assert_eq!(frame.as_object().unwrap().len(), 1);
        }
    }

    #[test]
    fn stepper_step_frame_shape() {
        let frame = serde_json::to_value(ClientCommand::StepperStep { step: 5 }).unwrap();
        assert_eq!(frame, json!({ "type": "StepperStep", "step": 5 }));
    }

    #[test]
    fn player_table_frame_shape() {
        let frame = serde_json::to_value(ClientCommand::PlayerTable {
            p1: PlayerColor::Red.wire_name().into(),
            p2: PlayerColor::Green.wire_name().into(),
            p3: PlayerColor::Blue.wire_name().into(),
        })
        .unwrap();
        assert_eq!(
            frame,
            json!({ "type": "PlayerTable", "p1": "red", "p2": "green", "p3": "blue" })
        );
    }

    fn sample_settings() -> LedSettings {
        LedSettings {
            r: 255,
            g: 0,
            b: 128,
            mode: "Pulse".into(),
            speed: 2.5,
            repeat: true,
        }
    }

    #[test]
    fn socket_settings_lowercase_the_mode() {
        let frame = serde_json::to_value(sample_settings().to_socket_command()).unwrap();
        assert_eq!(
            frame,
            json!({
                "type": "UpdateSettings",
                "r": 255, "g": 0, "b": 128,
                "mode": "pulse",
                "speed": 2.5,
                "repeat": true
            })
        );
    }

    #[test]
    fn http_body_keeps_the_mode_case() {
        let body = serde_json::to_value(sample_settings()).unwrap();
        assert_eq!(
            body,
            json!({ "r": 255, "g": 0, "b": 128, "mode": "Pulse", "speed": 2.5, "repeat": true })
        );
    }

    #[test]
    fn parses_counter_and_status_updates() {
        let counter: ServerEvent =
            serde_json::from_str(r#"{"type":"CounterUpdate","value":"12 seconds"}"#).unwrap();
        assert_eq!(
            counter,
            ServerEvent::CounterUpdate {
                value: json!("12 seconds")
            }
        );

        let status: ServerEvent =
            serde_json::from_str(r#"{"type":"StatusUpdate","value":42}"#).unwrap();
        assert_eq!(status, ServerEvent::StatusUpdate { value: json!(42) });
    }

    #[test]
    fn parses_play_sound() {
        let event: ServerEvent =
            serde_json::from_str(r#"{"type":"PlaySound","name":"reset.mp3"}"#).unwrap();
        assert_eq!(
            event,
            ServerEvent::PlaySound {
                name: "reset.mp3".into()
            }
        );
    }

    #[test]
    fn unknown_tags_fail_to_parse() {
        assert!(serde_json::from_str::<ServerEvent>(r#"{"type":"Bogus","value":1}"#).is_err());
        assert!(serde_json::from_str::<ServerEvent>("not json").is_err());
    }

    #[test]
    fn work_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_value(WorkMode::Blink).unwrap(), json!("blink"));
        assert_eq!(WorkMode::Blink.label(), "Blink");
        assert_eq!(WorkMode::Blink.wire_name(), "blink");
    }

    #[test]
    fn value_text_renders_strings_unquoted() {
        assert_eq!(value_text(&json!("3 minutes")), "3 minutes");
        assert_eq!(value_text(&json!(42)), "42");
        assert_eq!(value_text(&json!(2.5)), "2.5");
    }
}
