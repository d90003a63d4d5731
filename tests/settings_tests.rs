// Tests for startup settings: every key is optional, a missing file means
// defaults, and bad values fall back instead of failing startup.

use std::path::PathBuf;
use tso_config::{Configs, RenderMode, Settings, SettingsError};

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("tsoview-{}-{name}", std::process::id()))
}

#[test]
fn missing_file_gives_defaults() {
    let path = scratch_path("does-not-exist.toml");
    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn defaults_match_the_config_records() {
    let settings = Settings::default();
    assert_eq!(settings.client_size, [800, 600]);
    assert!(settings.windowed);
    assert_eq!(settings.fovy, 30.0);
    assert_eq!(settings.render_mode(), RenderMode::Main);
    assert_eq!(settings.record_step(), 5);

    let configs = Configs::from_settings(&settings);
    assert_eq!(configs.camera.fovy_degree.get(), 30.0);
    assert_eq!(configs.camera.roll_degree.get(), 0.0);
    assert_eq!(configs.depth_map.znear_plane.get(), 15.0);
    assert_eq!(configs.depth_map.zfar_plane.get(), 50.0);
    assert_eq!(configs.occlusion.intensity.get(), 0.5);
    assert_eq!(configs.occlusion.radius.get(), 2.5);
    assert_eq!(configs.diffusion.intensity.get(), 0.5);
    assert_eq!(configs.diffusion.extent.get(), 1.0);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let settings = Settings::from_toml(
        r#"
        fovy = 45.0
        windowed = false
        render_mode = "shadow"
        "#,
    )
    .unwrap();
    assert_eq!(settings.fovy, 45.0);
    assert!(!settings.windowed);
    assert_eq!(settings.render_mode(), RenderMode::Shadow);
    assert_eq!(settings.client_size, [800, 600]);
    assert_eq!(settings.depth_map_format, "R32F");

    let configs = Configs::from_settings(&settings);
    assert_eq!(configs.camera.fovy_degree.get(), 45.0);
}

#[test]
fn load_reads_an_existing_file() {
    let path = scratch_path("settings.toml");
    std::fs::write(&path, "client_size = [1024, 768]\nscreen_color = [0, 0, 255]\n").unwrap();
    let settings = Settings::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(settings.client_size, [1024, 768]);
    assert_eq!(settings.screen_color_rgba(), [0.0, 0.0, 1.0, 1.0]);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let err = Settings::from_toml("fovy = [not toml").unwrap_err();
    assert!(matches!(err, SettingsError::Parse(_)));

    let err = Settings::from_toml("fovy = \"wide\"").unwrap_err();
    assert!(matches!(err, SettingsError::Parse(_)));
}

#[test]
fn unknown_render_mode_falls_back() {
    let settings = Settings::from_toml("render_mode = \"wireframe\"").unwrap();
    assert_eq!(settings.render_mode(), RenderMode::Main);
}

#[test]
fn record_step_is_never_zero() {
    let settings = Settings::from_toml("record_step = 0").unwrap();
    assert_eq!(settings.record_step(), 1);
}
