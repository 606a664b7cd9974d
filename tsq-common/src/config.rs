//! Configuration loading and root folder resolution

use std::path::{Path, PathBuf};

/// Name of the SQLite database file inside the root folder
pub const DATABASE_FILE_NAME: &str = "townsquare.db";

/// Environment variable overriding the root folder
pub const ROOT_FOLDER_ENV_VAR: &str = "TSQ_ROOT_FOLDER";

/// Root folder resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. `TSQ_ROOT_FOLDER` environment variable
/// 3. `root_folder` key in the TOML config file
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_root_folder(cli_arg: Option<&str>) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(ROOT_FOLDER_ENV_VAR) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: TOML config file
    if let Some(config_path) = find_config_file() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(root_folder) = config.get("root_folder").and_then(|v| v.as_str()) {
                    return PathBuf::from(root_folder);
                }
            }
        }
    }

    // Priority 4: OS-dependent compiled default
    default_root_folder()
}

/// Full path of the database file inside a root folder
pub fn database_path(root_folder: &Path) -> PathBuf {
    root_folder.join(DATABASE_FILE_NAME)
}

/// Locate the configuration file for the platform
///
/// Linux also consults /etc/townsquare/config.toml when no per-user file
/// exists.
fn find_config_file() -> Option<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("townsquare").join("config.toml"));
    if let Some(path) = user_config {
        if path.exists() {
            return Some(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/townsquare/config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }

    None
}

/// Get OS-dependent default root folder path
fn default_root_folder() -> PathBuf {
    if cfg!(target_os = "linux") {
        // ~/.local/share/townsquare (or /var/lib/townsquare system-wide)
        dirs::data_local_dir()
            .map(|d| d.join("townsquare"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/townsquare"))
    } else if cfg!(target_os = "macos") {
        // ~/Library/Application Support/townsquare
        dirs::data_dir()
            .map(|d| d.join("townsquare"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/townsquare"))
    } else if cfg!(target_os = "windows") {
        // %LOCALAPPDATA%\townsquare
        dirs::data_local_dir()
            .map(|d| d.join("townsquare"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\townsquare"))
    } else {
        PathBuf::from("./townsquare_data")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_cli_argument_wins() {
        std::env::set_var(ROOT_FOLDER_ENV_VAR, "/tmp/from-env");
        let resolved = resolve_root_folder(Some("/tmp/from-cli"));
        std::env::remove_var(ROOT_FOLDER_ENV_VAR);
        assert_eq!(resolved, PathBuf::from("/tmp/from-cli"));
    }

    #[test]
    #[serial]
    fn test_env_var_beats_default() {
        std::env::set_var(ROOT_FOLDER_ENV_VAR, "/tmp/from-env");
        let resolved = resolve_root_folder(None);
        std::env::remove_var(ROOT_FOLDER_ENV_VAR);
        assert_eq!(resolved, PathBuf::from("/tmp/from-env"));
    }

    #[test]
    #[serial]
    fn test_empty_env_var_is_ignored() {
        std::env::set_var(ROOT_FOLDER_ENV_VAR, "");
        let resolved = resolve_root_folder(None);
        std::env::remove_var(ROOT_FOLDER_ENV_VAR);
        assert_ne!(resolved, PathBuf::from(""));
    }

    #[test]
    fn test_database_path_appends_file_name() {
        let path = database_path(Path::new("/data/townsquare"));
        assert_eq!(path, PathBuf::from("/data/townsquare/townsquare.db"));
    }
}
