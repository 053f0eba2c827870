//! Pre-configured integration settings for known commands.
//!
//! The table is built once at first use and is read-only afterwards. Lookup
//! is exact-match on the lower-cased command name and never fails: unknown
//! commands yield an empty preset, which pushes the burden of supplying
//! `--parameter`/`--into` onto the caller.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::model::{Platform, Target};

/// Defaults for one known command, already narrowed to a platform.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preset {
    /// Parameter string appended to the invocation. `%*` (Windows) and
    /// `"${*}"` (Unix) are the placeholders the shell expands to the selected
    /// files.
    pub parameters: Option<&'static str>,
    pub target: Option<Target>,
    /// Executable to resolve instead of the command name itself.
    pub run_as: Option<&'static str>,
}

struct Entry {
    windows_parameters: &'static str,
    unix_parameters: &'static str,
    run_as: Option<&'static str>,
}

static PRESETS: Lazy<HashMap<&'static str, Entry>> = Lazy::new(|| {
    HashMap::from([
        (
            "filetags",
            Entry {
                windows_parameters: "--interactive %*",
                unix_parameters: "--interactive \"${*}\"",
                run_as: None,
            },
        ),
        (
            // time2name is date2name with a time-stamp, under its own
            // artifact name.
            "time2name",
            Entry {
                windows_parameters: "--withtime %*",
                unix_parameters: "--withtime \"${*}\"",
                run_as: Some("date2name"),
            },
        ),
        (
            "date2name",
            Entry {
                windows_parameters: "%*",
                unix_parameters: "\"${*}\"",
                run_as: None,
            },
        ),
        (
            "appendfilename",
            Entry {
                windows_parameters: "%*",
                unix_parameters: "\"${*}\"",
                run_as: None,
            },
        ),
    ])
});

/// Look up the preset for `command` on `platform`. The command name is
/// lower-cased for the lookup only; callers keep the original spelling for
/// everything user-facing.
pub fn lookup(command: &str, platform: Platform) -> Preset {
    let key = command.to_lowercase();
    match PRESETS.get(key.as_str()) {
        Some(entry) => Preset {
            parameters: Some(match platform {
                Platform::Windows => entry.windows_parameters,
                Platform::Unix => entry.unix_parameters,
            }),
            target: Some(match platform {
                Platform::Windows => Target::WindowsExplorer,
                Platform::Unix => Target::Thunar,
            }),
            run_as: entry.run_as,
        },
        None => Preset::default(),
    }
}
