//! Base directories the two artifacts land in.
//!
//! These are external configuration for the planner: the wrapper script goes
//! into a per-user configuration directory and the shortcut into the shell's
//! per-user integration directory. Both can be overridden through environment
//! variables, which is also how the end-to-end tests redirect the tool into
//! temporary directories.

use std::env;
use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::{IntegrateError, Result};
use crate::model::Platform;

pub const SCRIPT_DIR_ENV: &str = "INTEGRATETHIS_SCRIPT_DIR";
pub const SENDTO_DIR_ENV: &str = "INTEGRATETHIS_SENDTO_DIR";

#[derive(Debug, Clone)]
pub struct ArtifactDirs {
    pub script_dir: PathBuf,
    pub shortcut_dir: PathBuf,
}

impl ArtifactDirs {
    /// Determine the artifact directories for `platform`.
    ///
    /// Windows: scripts go to `~\bin` when that directory exists (people who
    /// maintain one want it used), otherwise to the Roaming AppData folder;
    /// shortcuts go to the Explorer SendTo folder. Unix: scripts go to the
    /// XDG config directory, links to `~/bin`.
    pub fn discover(platform: Platform) -> Result<Self> {
        let env_script = env::var_os(SCRIPT_DIR_ENV).map(PathBuf::from);
        let env_shortcut = env::var_os(SENDTO_DIR_ENV).map(PathBuf::from);
        if let (Some(script_dir), Some(shortcut_dir)) = (env_script.clone(), env_shortcut.clone()) {
            return Ok(Self {
                script_dir,
                shortcut_dir,
            });
        }

        let base = BaseDirs::new().ok_or_else(|| {
            IntegrateError::UnsupportedPlatform("could not determine the home directory".to_string())
        })?;
        let home = base.home_dir();

        let (script_dir, shortcut_dir) = match platform {
            Platform::Windows => {
                let roaming = home.join("AppData").join("Roaming");
                let bin = home.join("bin");
                let script_dir = if bin.is_dir() { bin } else { roaming.clone() };
                let shortcut_dir = roaming
                    .join("Microsoft")
                    .join("Windows")
                    .join("SendTo");
                (script_dir, shortcut_dir)
            }
            Platform::Unix => (base.config_dir().to_path_buf(), home.join("bin")),
        };

        Ok(Self {
            script_dir: env_script.unwrap_or(script_dir),
            shortcut_dir: env_shortcut.unwrap_or(shortcut_dir),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test touches the process environment, so everything env-related
    // lives in it to keep the suite parallel-safe.
    #[test]
    fn discovery_and_env_overrides() {
        // Path derivation is plain joining, so the Windows layout is
        // checkable on any host.
        let dirs = ArtifactDirs::discover(Platform::Windows).unwrap();
        assert!(dirs.shortcut_dir.ends_with("Microsoft/Windows/SendTo"));

        env::set_var(SCRIPT_DIR_ENV, "/tmp/integratethis-scripts");
        env::set_var(SENDTO_DIR_ENV, "/tmp/integratethis-sendto");

        let dirs = ArtifactDirs::discover(Platform::Unix).unwrap();
        assert_eq!(dirs.script_dir, PathBuf::from("/tmp/integratethis-scripts"));
        assert_eq!(dirs.shortcut_dir, PathBuf::from("/tmp/integratethis-sendto"));

        env::remove_var(SCRIPT_DIR_ENV);
        env::remove_var(SENDTO_DIR_ENV);
    }
}
