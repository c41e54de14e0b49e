//! File logging.
//!
//! The TUI owns stdout, so tracing output goes to
//! `~/.tracker-shell/tracker-shell.log`. Lines can carry the user's email
//! and push token; the file is `0600` and the data directory `0700`.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{data_dir, ShellConfig};

/// Filter used when `TRACKER_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Install the global subscriber.
///
/// Logging is skipped (with a note on stderr) when the file cannot be opened.
pub fn init(config: &ShellConfig) {
    let path = match config.resolved_log_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Logging disabled: {}", e);
            return;
        }
    };
    let private_dir = match data_dir() {
        Ok(dir) => path.parent() == Some(dir.as_path()),
        Err(_) => false,
    };
    let file = match open_log_file(&path, private_dir) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Logging disabled: cannot open {}: {}", path.display(), e);
            return;
        }
    };

    let filter = EnvFilter::try_from_env("TRACKER_LOG")
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let format = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .init();
}

/// Open `path` for appending with owner-only permissions.
///
/// A missing parent is created `0700`; with `private_dir` an existing one
/// is tightened to `0700` as well.
pub fn open_log_file(path: &Path, private_dir: bool) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o700);
        }
        builder.create(parent)?;
        if private_dir {
            restrict(parent, 0o700)?;
        }
    }

    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let file = options.open(path)?;
    // mode() only applies when the file is created
    restrict(path, 0o600)?;
    Ok(file)
}

#[cfg(unix)]
fn restrict(path: &Path, mode: u32) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn restrict(_path: &Path, _mode: u32) -> io::Result<()> {
    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn mode(path: &Path) -> u32 {
        fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[test]
    fn test_new_log_file_is_owner_only() {
        let dir = TempDir::new().unwrap();
        let data = dir.path().join(".tracker-shell");
        let path = data.join("tracker-shell.log");

        open_log_file(&path, true).unwrap();

        assert_eq!(mode(&path), 0o600);
        assert_eq!(mode(&data), 0o700);
    }

    #[test]
    fn test_existing_log_and_dir_are_tightened() {
        let dir = TempDir::new().unwrap();
        let data = dir.path().join(".tracker-shell");
        fs::create_dir_all(&data).unwrap();
        fs::set_permissions(&data, fs::Permissions::from_mode(0o755)).unwrap();
        let path = data.join("tracker-shell.log");
        fs::write(&path, "old line\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        open_log_file(&path, true).unwrap();

        assert_eq!(mode(&path), 0o600);
        assert_eq!(mode(&data), 0o700);
        assert_eq!(fs::read_to_string(&path).unwrap(), "old line\n");
    }

    #[test]
    fn test_shared_parent_is_left_alone() {
        let dir = TempDir::new().unwrap();
        fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o755)).unwrap();

        open_log_file(&dir.path().join("custom.log"), false).unwrap();

        assert_eq!(mode(dir.path()), 0o755);
    }
}
