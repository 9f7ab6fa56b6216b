//! XDG-style path utilities for the configuration directory.
//!
//! Prefers XDG Base Directory conventions over OS-specific locations,
//! so `~/.config/tlx` is used on macOS too.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Returns the configuration directory for tlx.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/tlx` if `XDG_CONFIG_HOME` is set and non-empty
/// 2. `~/.config/tlx` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join("tlx")),
        _ => Ok(home_dir()?.join(".config").join("tlx")),
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn with_xdg_config_home<F: FnOnce()>(value: Option<&str>, f: F) {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        // SAFETY: env-mutating tests are serialized
        unsafe {
            match value {
                Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
        }

        f();

        unsafe {
            match original {
                Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
        }
    }

    #[test]
    #[serial]
    fn test_config_dir_default() {
        with_xdg_config_home(None, || {
            let dir = config_dir().unwrap();
            assert!(dir.ends_with(".config/tlx"));
        });
    }

    #[test]
    #[serial]
    fn test_config_dir_xdg_override() {
        with_xdg_config_home(Some("/custom/config"), || {
            assert_eq!(config_dir().unwrap(), PathBuf::from("/custom/config/tlx"));
        });
    }

    #[test]
    #[serial]
    fn test_config_dir_empty_xdg_ignored() {
        with_xdg_config_home(Some(""), || {
            assert!(config_dir().unwrap().ends_with(".config/tlx"));
        });
    }
}
