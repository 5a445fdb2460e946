//! Integration tests for on-disk validation and the CLI commands

use std::io::Write;
use std::path::Path;

use rasterguard::cli::build_cli;
use rasterguard::commands::{CommandFactory, RasterguardCommandFactory};
use rasterguard::utils::logger::Logger;
use rasterguard::{
    CandidateFile, FileFormatValidator, LocalFile, Locale, ValidationErrorKind, ValidatorConfig,
};

fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> String {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(bytes).unwrap();
    path.to_str().unwrap().to_string()
}

#[tokio::test]
async fn test_local_geotiff_workflow() {
    let dir = tempfile::tempdir().unwrap();

    // Little-endian TIFF header with the first IFD at offset 8
    let good = write_file(dir.path(), "scene.tif", &[0x49, 0x49, 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00]);
    let renamed_png = write_file(dir.path(), "scene.tiff", &[0x89, 0x50, 0x4E, 0x47]);
    let truncated = write_file(dir.path(), "tiny.TIF", &[0x4D, 0x4D]);

    let validator = FileFormatValidator::default();

    let file = LocalFile::with_guessed_type(&good);
    assert_eq!(file.declared_type(), "image/tiff");
    assert!(validator.validate(&file).await.is_valid());

    let result = validator.validate(&LocalFile::with_guessed_type(&renamed_png)).await;
    assert_eq!(result.kind(), Some(ValidationErrorKind::InvalidTiffHeader));

    let result = validator.validate(&LocalFile::with_guessed_type(&truncated)).await;
    assert_eq!(result.kind(), Some(ValidationErrorKind::InvalidTiffHeader));
}

#[tokio::test]
async fn test_declared_type_overrides_guess() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "photo.jpg", &[0xFF, 0xD8, 0xFF, 0xE0]);

    let validator = FileFormatValidator::default();
    let result = validator.validate(&LocalFile::new(&path, "image/png")).await;
    assert_eq!(result.kind(), Some(ValidationErrorKind::MimeMismatch));
}

#[tokio::test]
async fn test_missing_file_is_rejected_not_an_error() {
    let validator = FileFormatValidator::default();
    let result = validator
        .validate(&LocalFile::new("/nonexistent/scene.tif", "image/tiff"))
        .await;
    assert_eq!(result.kind(), Some(ValidationErrorKind::InvalidTiffHeader));

    // Non-TIFF files are never opened by default
    let result = validator
        .validate(&LocalFile::new("/nonexistent/photo.png", "image/png"))
        .await;
    assert!(result.is_valid());
}

#[tokio::test]
async fn test_validate_command_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_file(dir.path(), "a.tif", &[0x4D, 0x4D, 0x00, 0x2A]);
    let bad = write_file(dir.path(), "b.tif", &[0x00, 0x00, 0x00, 0x00]);
    let audit = dir.path().join("audit.log");
    let audit = audit.to_str().unwrap();

    let logger = Logger::new(audit).unwrap();
    let factory = RasterguardCommandFactory::new();

    let matches = build_cli().try_get_matches_from(["rasterguard", good.as_str()]).unwrap();
    let command = factory.create_command(&matches, &logger).unwrap();
    assert!(command.execute().await.unwrap());

    let matches = build_cli()
        .try_get_matches_from(["rasterguard", good.as_str(), bad.as_str()])
        .unwrap();
    let command = factory.create_command(&matches, &logger).unwrap();
    assert!(!command.execute().await.unwrap());

    let contents = std::fs::read_to_string(audit).unwrap();
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("ACCEPT"));
    assert!(lines[2].starts_with("REJECT"));
    assert!(lines[2].contains("invalid-tiff-header"));
}

#[tokio::test]
async fn test_strict_flag_and_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let fake_png = write_file(dir.path(), "fake.png", b"GIF89a");
    let config = write_file(dir.path(), "rasterguard.toml", b"strict_signatures = true\nlocale = \"zh-CN\"\n");

    let logger = Logger::disabled();
    let factory = RasterguardCommandFactory::new();

    let matches = build_cli().try_get_matches_from(["rasterguard", fake_png.as_str()]).unwrap();
    assert!(factory.create_command(&matches, &logger).unwrap().execute().await.unwrap());

    let matches = build_cli()
        .try_get_matches_from(["rasterguard", "--strict", fake_png.as_str()])
        .unwrap();
    assert!(!factory.create_command(&matches, &logger).unwrap().execute().await.unwrap());

    let matches = build_cli()
        .try_get_matches_from(["rasterguard", "--config", config.as_str(), fake_png.as_str()])
        .unwrap();
    assert!(!factory.create_command(&matches, &logger).unwrap().execute().await.unwrap());

    let loaded = ValidatorConfig::from_file(&config).unwrap();
    assert_eq!(loaded.locale, Locale::SimplifiedChinese);
}

#[test]
fn test_bad_locale_fails_command_creation() {
    let logger = Logger::disabled();
    let matches = build_cli()
        .try_get_matches_from(["rasterguard", "--locale", "fr", "a.png"])
        .unwrap();
    assert!(RasterguardCommandFactory::new().create_command(&matches, &logger).is_err());
}

#[test]
fn test_cli_requires_files() {
    assert!(build_cli().try_get_matches_from(["rasterguard"]).is_err());
}

#[tokio::test]
async fn test_inspect_command() {
    let dir = tempfile::tempdir().unwrap();
    let tiff = write_file(dir.path(), "scene.tif", &[0x49, 0x49, 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00]);

    let logger = Logger::disabled();
    let matches = build_cli()
        .try_get_matches_from(["rasterguard", "--inspect", tiff.as_str()])
        .unwrap();
    let command = RasterguardCommandFactory::new().create_command(&matches, &logger).unwrap();
    assert!(command.execute().await.unwrap());

    let matches = build_cli()
        .try_get_matches_from(["rasterguard", "-i", "/nonexistent/scene.tif"])
        .unwrap();
    let command = RasterguardCommandFactory::new().create_command(&matches, &logger).unwrap();
    assert!(command.execute().await.is_err());
}
