//! Platform path resolution.
//!
//! Configuration and log locations follow the platform conventions exposed by
//! the `dirs` crate, falling back to the home directory and finally to the
//! working directory when a platform directory is unknown.

use std::path::{Path, PathBuf};

/// Directory name used under the platform config and data directories.
pub const APP_DIR_NAME: &str = "resume-analyzer";

/// File name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

fn home_or_cwd() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Returns the configuration directory, e.g. `~/.config/resume-analyzer`.
#[must_use]
pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(home_or_cwd)
        .join(APP_DIR_NAME)
}

/// Returns the data directory holding the log file, e.g.
/// `~/.local/share/resume-analyzer`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(home_or_cwd)
        .join(APP_DIR_NAME)
}

/// Path of the configuration file read when `--config` is not given.
#[must_use]
pub fn default_config_path() -> PathBuf {
    get_config_dir().join(CONFIG_FILE_NAME)
}

/// Expands a leading `~` to the home directory.
///
/// Paths without a leading `~`, and `~user` forms, are returned unchanged.
/// If the home directory is unknown the path is returned unchanged too.
///
/// # Examples
///
/// ```
/// use resume_analyzer::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
/// assert_eq!(expand_tilde("relative/cv.pdf"), PathBuf::from("relative/cv.pdf"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let Some(home) = dirs::home_dir() else {
        return PathBuf::from(path);
    };

    if path == "~" {
        home
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}

/// Final path component for display, or the whole path if it has none.
#[must_use]
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_expands_to_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~"), home);
            assert_eq!(expand_tilde("~/cv.pdf"), home.join("cv.pdf"));
        }
        assert_eq!(expand_tilde("~other/cv.pdf"), PathBuf::from("~other/cv.pdf"));
    }

    #[test]
    fn app_directories_are_namespaced() {
        assert!(get_config_dir().ends_with(APP_DIR_NAME));
        assert!(get_data_dir().ends_with(APP_DIR_NAME));
        assert!(default_config_path().ends_with("resume-analyzer/config.toml"));
    }

    #[test]
    fn display_name_uses_file_name() {
        assert_eq!(display_name(Path::new("/tmp/cv.pdf")), "cv.pdf");
    }
}
