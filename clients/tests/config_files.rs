//! Loading client configuration files from disk.

use std::fs;
use std::path::Path;

use protege_clients::{ClientConfig, ConfigError};

fn write(dir: &Path, text: &str) -> std::path::PathBuf {
    let path = dir.join("protege.toml");
    if let Err(e) = fs::write(&path, text) {
        panic!("cannot write {}: {e}", path.display());
    }
    path
}

fn tempdir() -> tempfile::TempDir {
    match tempfile::tempdir() {
        Ok(dir) => dir,
        Err(e) => panic!("cannot create a temporary directory: {e}"),
    }
}

#[test]
fn explicit_file_is_loaded() {
    let dir = tempdir();
    let path = write(
        dir.path(),
        "log_filter = \"protege_frame=trace\"\nlabel_language = \"fr\"\n",
    );
    match ClientConfig::load(Some(&path)) {
        Ok(config) => {
            assert_eq!(config.log_filter(), "protege_frame=trace");
            assert_eq!(config.label_language.as_deref(), Some("fr"));
            assert!(config.settings_dir.is_none());
        }
        Err(e) => panic!("config must load: {e}"),
    }
}

#[test]
fn type_errors_name_the_file() {
    let dir = tempdir();
    let path = write(dir.path(), "settings_dir = 7\n");
    match ClientConfig::load(Some(&path)) {
        Err(err @ ConfigError::Parse { .. }) => {
            assert!(err.to_string().contains("protege.toml"));
        }
        other => panic!("expected a parse error, got {other:?}"),
    }
}
