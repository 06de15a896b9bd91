use super::*;
use tempfile::TempDir;

#[test]
fn test_defaults_match_booth_constants() {
    let config = BoothConfig::default();

    assert_eq!(config.capture.facing, FacingMode::User);
    assert_eq!(config.capture.ideal_width, 1280);
    assert_eq!(config.capture.ideal_height, 720);
    assert!(config.capture.audio);
    assert_eq!(config.recording.duration_secs, 10);
    assert_eq!(config.recording.countdown_from, 3);
    assert_eq!(config.recording.extension, "webm");
    assert_eq!(config.gallery.cap, 10);
    assert_eq!(config.gallery.storage_key, "videos");
    assert_eq!(config.share.window_secs, 30);
    assert_eq!(config.share.code_width, 200);
    assert_eq!(config.share.correction, ErrorCorrection::High);
    assert_eq!(config.download.file_prefix, "video_360_");
}

#[test]
fn test_load_missing_file_returns_defaults() {
    let temp = TempDir::new().unwrap();
    let path = BoothConfig::path(temp.path());

    let config = BoothConfig::load(&path).unwrap();
    assert_eq!(config.recording.duration_secs, 10);
}

#[test]
fn test_save_and_load_round_trip() {
    let temp = TempDir::new().unwrap();
    let path = BoothConfig::path(temp.path());

    let mut config = BoothConfig::default();
    config.recording.duration_secs = 15;
    config.share.window_secs = 60;
    config.gallery.cap = 5;
    config.save(&path).unwrap();

    let loaded = BoothConfig::load(&path).unwrap();
    assert_eq!(loaded.recording.duration_secs, 15);
    assert_eq!(loaded.share.window_secs, 60);
    assert_eq!(loaded.gallery.cap, 5);
}

#[test]
fn test_partial_toml_fills_missing_sections_with_defaults() {
    let config: BoothConfig = toml::from_str("[recording]\nduration_secs = 5\n").unwrap();

    assert_eq!(config.recording.duration_secs, 5);
    assert_eq!(config.recording.countdown_from, 3);
    assert_eq!(config.gallery.cap, 10);
}

#[test]
fn test_validate_flags_zero_values() {
    let mut config = BoothConfig::default();
    config.recording.duration_secs = 0;
    config.gallery.cap = 0;

    let errors = config.validate();
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_with_defaults_for_invalid_repairs_zero_values() {
    let mut config = BoothConfig::default();
    config.recording.duration_secs = 0;
    config.share.window_secs = 0;
    config.gallery.cap = 7;

    let repaired = config.with_defaults_for_invalid();
    assert_eq!(repaired.recording.duration_secs, 10);
    assert_eq!(repaired.share.window_secs, 30);
    assert_eq!(repaired.gallery.cap, 7);
    assert!(repaired.validate().is_empty());
}
