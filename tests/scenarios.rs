use std::{io::Write, path::PathBuf};

use kevin::{
    AssistantParts, ConfigError, KevinConfig,
    env::EnvSnapshot,
    providers::{HotkeyWaker, Waker},
};

#[test]
fn text_only_assistant_needs_just_a_token() {
    let env = EnvSnapshot::from_pairs([
        ("KEVIN_HUGGINGFACE_TOKEN", "abc"),
        ("KEVIN_TEXT_OUTPUT", "true"),
        ("KEVIN_TEXT_INPUT", "true"),
    ]);
    let config = KevinConfig::load(&env).expect("config should load");

    assert_eq!(config.resolve_stt(), None);
    assert_eq!(config.resolve_tts(), None);
    assert_eq!(
        config.resolve_waker(),
        Waker::Hotkey(HotkeyWaker {
            hotkey: "alt+shift+/".to_owned()
        })
    );
    assert_eq!(config.resolve_system_prompts().unwrap(), None);
    assert!(config.include_default_system_prompt());
}

#[test]
fn porcupine_without_keys_fails_to_load() {
    let env = EnvSnapshot::from_pairs([
        ("KEVIN_HUGGINGFACE_TOKEN", "abc"),
        ("KEVIN_TEXT_OUTPUT", "true"),
        ("KEVIN_TEXT_INPUT", "true"),
        ("KEVIN_WAKER", "porcupine"),
    ]);

    let error = KevinConfig::load(&env).unwrap_err();
    assert!(matches!(error, ConfigError::MissingCompanion { .. }));
}

#[test]
fn definitions_file_supplies_defaults_for_full_voice_setup() {
    let dir = tempfile::tempdir().expect("temp dir");
    let env_path = dir.path().join(".env");
    let mut file = std::fs::File::create(&env_path).expect("create .env");
    writeln!(file, "KEVIN_HUGGINGFACE_TOKEN=from-file").unwrap();
    writeln!(file, "KEVIN_PIPER_VOICE_PATH=/voices/amy.onnx").unwrap();
    writeln!(file, "KEVIN_FASTER_WHISPER_MODEL=base.en").unwrap();
    writeln!(file, "KEVIN_USERNAME=FileUser").unwrap();
    drop(file);

    let process = vec![
        ("KEVIN_USERNAME".to_owned(), "ShellUser".to_owned()),
        ("KEVIN_WAKE_HOTKEY".to_owned(), "ctrl+k".to_owned()),
    ];
    let env = EnvSnapshot::layered(&env_path, true, process).expect("env should layer");
    let config = KevinConfig::load(&env).expect("config should load");
    let parts = AssistantParts::from_config(&config).expect("parts should build");

    assert_eq!(parts.username, "ShellUser");
    assert_eq!(parts.inference.token, "from-file");
    assert_eq!(config.whisper_model(), Some("base.en"));
    assert_eq!(
        config.piper_voice_path(),
        Some(PathBuf::from("/voices/amy.onnx").as_path())
    );
    assert_eq!(parts.waker.kind(), "hotkey");
}
