use std::path::{Path, PathBuf};

use tracing::debug;

const CONFIG_FILE: &str = "config.xml";

/// Locate the daemon's `config.xml`. An explicit home directory restricts
/// the search to that directory alone; otherwise the standard locations are
/// probed in order and the first existing file wins.
pub fn find_config_file(home_override: Option<&Path>) -> Option<PathBuf> {
    if let Some(home) = home_override {
        let path = home.join(CONFIG_FILE);
        debug!(path = %path.display(), "checking explicit home directory");
        return path.is_file().then_some(path);
    }

    for dir in candidate_dirs() {
        let path = dir.join(CONFIG_FILE);
        debug!(path = %path.display(), "probing for daemon config");
        if path.is_file() {
            return Some(path);
        }
    }

    None
}

/// Standard daemon config locations, most recent layout first:
/// the XDG state dir (daemon default since v1.29.3), the Windows Scoop
/// persist dir, the user config dir, the user cache dir (Windows AppData
/// Local), and finally the directory of the running executable.
fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs_to_check = Vec::new();

    if let Some(home) = dirs::home_dir() {
        dirs_to_check.push(home.join(".local").join("state").join("syncthing"));
        dirs_to_check.push(
            home.join("scoop")
                .join("persist")
                .join("syncthing")
                .join("config"),
        );
    }
    if let Some(config) = dirs::config_dir() {
        dirs_to_check.push(config.join("syncthing"));
    }
    if let Some(cache) = dirs::cache_dir() {
        dirs_to_check.push(cache.join("syncthing"));
    }
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            dirs_to_check.push(dir.to_path_buf());
        }
    }

    dirs_to_check
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn explicit_home_directory_is_the_only_place_searched() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(find_config_file(Some(dir.path())), None);

        let path = dir.path().join("config.xml");
        fs::write(&path, "<configuration></configuration>").unwrap();
        assert_eq!(find_config_file(Some(dir.path())), Some(path));
    }

    #[test]
    fn missing_file_in_explicit_home_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("no-such-subdir");
        assert_eq!(find_config_file(Some(&nested)), None);
    }
}
