//! File-backed `env_logger` setup.
//!
//! The terminal belongs to the UI, so log records go to a file. The
//! filter is read from `RUST_LOG` and defaults to `info`.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

use env_logger::{Builder, Env, Target};

/// Opens (creating if needed) the log file for appending.
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Installs the global logger writing to `path`.
///
/// Returns `false` if logging is disabled, the file cannot be opened, or
/// a logger is already installed. The app runs either way.
#[mutants::skip]
pub fn init(path: Option<&Path>) -> bool {
    let Some(path) = path else {
        return false;
    };
    let file = match open_log_file(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("warning: logging disabled, cannot open {}: {e}", path.display());
            return false;
        }
    };
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("app.log");
        open_log_file(&path).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn open_appends_to_existing_file() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn init_without_path_is_disabled() {
        assert!(!init(None));
    }
}
