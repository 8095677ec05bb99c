//! Configuration loading, defaults, and validation.

use std::fs;

use anyhow::Result;
use tempfile::tempdir;

use glyphgate::config::{ConfigError, GameConfig};
use glyphgate::constants::{ALARM_DURATION_SECS, DOOR_DURATION_SECS, IDLE_THRESHOLD_SECS};
use glyphgate::effects::NullEffects;
use glyphgate::game::Game;
use glyphgate::room::Alphabet;
use glyphgate::types::Color;

use crate::helpers::ScriptedClassifier;

#[test]
fn test_load_from_file() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("rooms.json");
    fs::write(
        &path,
        r#"{
            "rooms": [
                {
                    "name": "vault",
                    "code": { "alphabet": "digits", "length": 3, "seed": 9 },
                    "door": {},
                    "alarm": {},
                    "panel": {},
                    "message": "vault-unlocked"
                },
                {
                    "name": "annex",
                    "code": { "alphabet": "fruits", "length": 2 },
                    "door": { "duration": 1.25, "slide_width": 2.5 }
                }
            ]
        }"#,
    )?;

    let config = GameConfig::from_path(&path)?;
    assert_eq!(config.rooms.len(), 2);

    let vault = &config.rooms[0];
    assert_eq!(vault.name, "vault");
    let code = vault.code.unwrap();
    assert_eq!(code.alphabet, Alphabet::Digits);
    assert_eq!(code.seed, Some(9));
    assert_eq!(vault.door.unwrap().duration, DOOR_DURATION_SECS);
    assert_eq!(vault.alarm.unwrap().duration, ALARM_DURATION_SECS);
    assert_eq!(vault.panel.unwrap().idle_threshold, IDLE_THRESHOLD_SECS);
    assert_eq!(vault.message.as_deref(), Some("vault-unlocked"));

    let annex = &config.rooms[1];
    let code = annex.code.unwrap();
    assert_eq!(code.alphabet, Alphabet::Fruits);
    assert_eq!(code.length, 2);
    assert_eq!(code.seed, None);
    assert_eq!(annex.door.unwrap().duration, 1.25);
    assert_eq!(annex.door.unwrap().slide_width, 2.5);
    assert!(annex.alarm.is_none());
    assert!(annex.panel.is_none());
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() -> Result<()> {
    let dir = tempdir()?;
    let err = GameConfig::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
    Ok(())
}

#[test]
fn test_malformed_json_is_parse_error() {
    let err = GameConfig::from_json(r#"{ "rooms": ["#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_defaults_fill_missing_fields() {
    let config = GameConfig::from_json(r#"{ "rooms": [ { "alarm": {}, "panel": {} } ] }"#).unwrap();

    let room = &config.rooms[0];
    assert_eq!(room.name, "");
    assert!(room.code.is_none());
    assert_eq!(room.clue_count, None);
    assert_eq!(room.alarm.unwrap().duration, ALARM_DURATION_SECS);
    assert_eq!(room.alarm.unwrap().light_color, Color::WHITE);
    assert_eq!(room.panel.unwrap().idle_threshold, IDLE_THRESHOLD_SECS);
}

#[test]
fn test_fruit_alphabet_round_trips() {
    let config =
        GameConfig::from_json(r#"{ "rooms": [ { "code": { "alphabet": "fruits" } } ] }"#).unwrap();

    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains(r#""alphabet":"fruits""#), "lowercase wire form: {json}");

    let reparsed = GameConfig::from_json(&json).unwrap();
    assert_eq!(reparsed.rooms[0].code.unwrap().alphabet, Alphabet::Fruits);
}

#[test]
fn test_validation_error_messages_name_the_room() {
    let json = r#"{ "rooms": [ { "code": {} }, { "code": { "length": 0 } } ] }"#;
    let err = GameConfig::from_json(json).unwrap_err();

    assert!(matches!(err, ConfigError::EmptyCode { room: 1 }));
    assert_eq!(err.to_string(), "room 1: code length must be at least 1");
}

#[test]
fn test_alarm_timing_must_be_positive() {
    let json = r#"{ "rooms": [ { "alarm": { "duration": -1.0 } } ] }"#;
    let err = GameConfig::from_json(json).unwrap_err();

    assert!(matches!(
        err,
        ConfigError::NonPositiveTiming { room: 0, field: "alarm duration", .. }
    ));
}

#[test]
fn test_game_rejects_invalid_config_at_build() {
    let (classifier, _script) = ScriptedClassifier::new();
    let config = GameConfig { rooms: Vec::new() };

    let err = Game::new(&config, Box::new(classifier), Box::new(NullEffects)).unwrap_err();
    assert!(matches!(err, ConfigError::NoRooms));
}
