use std::fs;
use std::path::Path;

use rfid_door_diagrams::config::MIN_PRINT_DPI;
use rfid_door_diagrams::error::{ArtifactError, RenderError};
use rfid_door_diagrams::{Config, GenerateError, OutputFormat, generate_diagrams};

fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn default_run_writes_two_high_resolution_pngs() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::default();
    let saved = generate_diagrams(dir.path(), OutputFormat::Png, &config).unwrap();

    assert_eq!(
        dir_entries(dir.path()),
        ["rfid_door_structural.png", "rfid_door_technical.png"]
    );
    for figure in &saved {
        let (width, height) = figure.pixel_size.expect("png output has a pixel size");
        assert!(width.max(height) >= 3000, "{width}x{height}");
        assert_eq!((width, height), (4350, 3150));
        let bytes = fs::read(&figure.path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
    assert!(config.render.dpi >= MIN_PRINT_DPI);
}

#[test]
fn missing_output_directory_fails_without_stray_files() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("not-there");
    let err = generate_diagrams(&target, OutputFormat::Png, &Config::default()).unwrap_err();
    assert!(matches!(err, GenerateError::OutputUnavailable { .. }));
    assert!(err.to_string().contains("not writable"));
    assert!(dir_entries(dir.path()).is_empty());
}

#[test]
fn file_in_place_of_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("occupied");
    fs::write(&target, b"not a directory").unwrap();
    let err = generate_diagrams(&target, OutputFormat::Svg, &Config::default()).unwrap_err();
    assert!(matches!(err, GenerateError::OutputUnavailable { .. }));
    assert_eq!(dir_entries(dir.path()), ["occupied"]);
}

#[test]
fn second_failure_is_reported_apart_from_first_success() {
    let dir = tempfile::tempdir().unwrap();
    // A directory squatting on the second artifact's name makes its rename fail.
    fs::create_dir(dir.path().join("rfid_door_technical.svg")).unwrap();

    let err = generate_diagrams(dir.path(), OutputFormat::Svg, &Config::default()).unwrap_err();
    let GenerateError::Artifact {
        artifact,
        saved,
        source,
    } = &err
    else {
        panic!("expected an artifact failure, got {err}");
    };
    assert_eq!(artifact, "rfid_door_technical.svg");
    assert_eq!(saved, &[dir.path().join("rfid_door_structural.svg")]);
    assert!(matches!(source, ArtifactError::Render(RenderError::Io(_))));
    assert!(err.to_string().contains("already saved"));

    // no temporary files left behind
    assert_eq!(
        dir_entries(dir.path()),
        ["rfid_door_structural.svg", "rfid_door_technical.svg"]
    );
    assert!(dir.path().join("rfid_door_technical.svg").is_dir());
}
