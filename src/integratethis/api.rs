//! The API facade, the single entry point for both operations.
//!
//! Generic over [`CommandLocator`] and [`ShortcutWriter`] so tests can run
//! the full pipeline against fixed paths and a recording writer. The facade
//! only wires preset lookup, override merging and PATH resolution together;
//! the business logic lives in `commands/`.

use crate::commands::{self, CmdResult};
use crate::error::{IntegrateError, Result};
use crate::locate::CommandLocator;
use crate::model::{IntegrationPlan, Overrides, Platform, Target};
use crate::paths::ArtifactDirs;
use crate::plan;
use crate::presets;
use crate::shortcut::ShortcutWriter;

/// Everything one invocation asks for, straight from the CLI.
#[derive(Debug, Clone, Default)]
pub struct IntegrateRequest {
    pub command: String,
    pub parameters: Option<String>,
    pub into: Option<String>,
    pub display_name: Option<String>,
    pub overwrite: bool,
    pub confirm: bool,
}

pub struct IntegrateApi<L: CommandLocator, W: ShortcutWriter> {
    locator: L,
    writer: W,
    dirs: ArtifactDirs,
    platform: Platform,
}

impl<L: CommandLocator, W: ShortcutWriter> IntegrateApi<L, W> {
    pub fn new(locator: L, writer: W, dirs: ArtifactDirs, platform: Platform) -> Self {
        Self {
            locator,
            writer,
            dirs,
            platform,
        }
    }

    pub fn integrate(&self, request: &IntegrateRequest) -> Result<CmdResult> {
        let plan = self.build_plan(request)?;
        commands::create::run(&self.writer, &plan, request.overwrite, request.confirm)
    }

    pub fn remove(&self, request: &IntegrateRequest) -> Result<CmdResult> {
        let plan = self.build_plan(request)?;
        commands::delete::run(&plan)
    }

    /// Preset lookup, PATH resolution and override merge. The command name is
    /// lower-cased for lookup and resolution only; artifact names and
    /// messages keep the user's spelling.
    fn build_plan(&self, request: &IntegrateRequest) -> Result<IntegrationPlan> {
        let key = request.command.to_lowercase();
        let preset = presets::lookup(&key, self.platform);
        let executable = preset.run_as.unwrap_or(key.as_str());
        let resolved = self.locator.resolve(executable)?;

        let overrides = Overrides {
            parameters: request.parameters.clone(),
            target: request.into.as_deref().map(Target::parse).transpose()?,
            display_name: request.display_name.clone(),
        };
        let plan = plan::build(&request.command, resolved, &preset, &overrides, &self.dirs);

        if let Some(target) = plan.target {
            if target.platform() != self.platform {
                return Err(IntegrateError::UnsupportedTarget(target.name().to_string()));
            }
        }
        Ok(plan)
    }
}
