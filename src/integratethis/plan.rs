//! Merges a preset with user overrides into an [`IntegrationPlan`].
//!
//! Pure function of its inputs; nothing here touches the filesystem. The
//! artifact manager in `commands/` consumes the plan afterwards.

use std::path::PathBuf;

use crate::model::{IntegrationPlan, Overrides, Target};
use crate::paths::ArtifactDirs;
use crate::presets::Preset;

/// Build the plan for `command`. Override wins per field; the display name
/// falls back to the command name itself, which keeps `time2name` artifacts
/// named `time2name` even though the resolved executable is `date2name`.
pub fn build(
    command: &str,
    resolved_path: PathBuf,
    preset: &Preset,
    overrides: &Overrides,
    dirs: &ArtifactDirs,
) -> IntegrationPlan {
    let parameters = overrides
        .parameters
        .clone()
        .or_else(|| preset.parameters.map(str::to_string));
    let target = overrides.target.or(preset.target);
    let display_name = overrides.display_name.clone();
    let stem = display_name.as_deref().unwrap_or(command);

    let (wrapper_script_path, shortcut_path) = match target {
        Some(Target::WindowsExplorer) => (
            Some(dirs.script_dir.join(format!("{stem}.bat"))),
            Some(dirs.shortcut_dir.join(format!("{stem}.lnk"))),
        ),
        Some(Target::Thunar) => (
            Some(dirs.script_dir.join(format!("{stem}.sh"))),
            Some(dirs.shortcut_dir.join(stem)),
        ),
        None => (None, None),
    };

    // Parameters presence is the sole trigger for needing a wrapper; without
    // them the shortcut points straight at the executable.
    let wrapper_script_path = if parameters.is_some() {
        wrapper_script_path
    } else {
        None
    };

    IntegrationPlan {
        command_name: command.to_string(),
        resolved_path,
        parameters,
        wrapper_script_path,
        shortcut_path,
        target,
        display_name,
    }
}
