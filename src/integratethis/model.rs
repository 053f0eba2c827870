use std::fmt;
use std::path::PathBuf;

use crate::error::{IntegrateError, Result};

/// The operating-system flavour the tool is running on. Determines which
/// parameter templates, base directories and shortcut mechanism apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    pub fn current() -> Result<Self> {
        if cfg!(windows) {
            Ok(Platform::Windows)
        } else if cfg!(unix) {
            Ok(Platform::Unix)
        } else {
            Err(IntegrateError::UnsupportedPlatform(
                "only Windows and Unix-like systems are supported".to_string(),
            ))
        }
    }
}

/// The shell mechanism a command gets integrated into.
///
/// `WindowsExplorer` places a `.lnk` file in the Explorer "Send To" folder;
/// `Thunar` places a symbolic link in `~/bin` where Thunar custom actions
/// pick it up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    WindowsExplorer,
    Thunar,
}

impl Target {
    pub fn name(&self) -> &'static str {
        match self {
            Target::WindowsExplorer => "windowsexplorer",
            Target::Thunar => "thunar",
        }
    }

    pub fn platform(&self) -> Platform {
        match self {
            Target::WindowsExplorer => Platform::Windows,
            Target::Thunar => Platform::Unix,
        }
    }

    /// Parse a `--into` value. Matching is case-insensitive; the original
    /// spelling is kept for the error message.
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "windowsexplorer" => Ok(Target::WindowsExplorer),
            "thunar" => Ok(Target::Thunar),
            _ => Err(IntegrateError::UnsupportedTarget(name.to_string())),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// User-supplied overrides for the preset values. Any field that is set wins
/// over the preset's corresponding field, and only that field.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub parameters: Option<String>,
    pub target: Option<Target>,
    pub display_name: Option<String>,
}

/// The fully merged description of one integration, determined before any
/// filesystem mutation happens.
///
/// Invariants upheld by [`crate::plan::build`]:
/// - `wrapper_script_path` is set only when `parameters` is set; without
///   parameters the shortcut points straight at `resolved_path`.
/// - `wrapper_script_path` and `shortcut_path` are derived together from
///   `target`; both are `None` when no target could be determined.
#[derive(Debug, Clone)]
pub struct IntegrationPlan {
    /// The logical command as the user typed it. May differ from the resolved
    /// executable (`time2name` runs `date2name`).
    pub command_name: String,
    pub resolved_path: PathBuf,
    pub parameters: Option<String>,
    pub wrapper_script_path: Option<PathBuf>,
    pub shortcut_path: Option<PathBuf>,
    pub target: Option<Target>,
    pub display_name: Option<String>,
}
