//! Data directory resolution.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "mentorship";
const DB_FILE: &str = "mentorship.db";

/// Get the data directory following the XDG Base Directory layout.
///
/// Uses `$XDG_DATA_HOME/mentorship`, falling back to
/// `$HOME/.local/share/mentorship`, then to `./mentorship` when neither
/// variable is set.
pub fn get_data_dir() -> PathBuf {
    let data_home = env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|home| PathBuf::from(home).join(".local/share")))
        .unwrap_or_else(|_| PathBuf::from("."));

    data_home.join(APP_DIR)
}

/// Get the default database file path (data_dir/mentorship.db).
pub fn get_db_path() -> PathBuf {
    get_data_dir().join(DB_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_get_data_dir_ends_with_app_dir() {
        let path = get_data_dir();
        assert!(path.ends_with("mentorship"));
    }

    #[test]
    fn test_get_db_path_ends_with_db_file() {
        let path = get_db_path();
        assert!(path.ends_with("mentorship/mentorship.db"));
    }

    #[test]
    #[serial]
    fn test_get_data_dir_respects_xdg_data_home() {
        let previous = env::var("XDG_DATA_HOME").ok();
        unsafe {
            env::set_var("XDG_DATA_HOME", "/tmp/xdg-mentorship-test");
        }

        assert_eq!(
            get_data_dir(),
            PathBuf::from("/tmp/xdg-mentorship-test/mentorship")
        );

        unsafe {
            match previous {
                Some(value) => env::set_var("XDG_DATA_HOME", value),
                None => env::remove_var("XDG_DATA_HOME"),
            }
        }
    }
}
