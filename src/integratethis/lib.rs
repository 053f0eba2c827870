//! # integratethis
//!
//! Integrates arbitrary commands into a desktop shell's context menu, e.g.
//! adding `filetags` to the "Send To" folder of the Windows File Explorer so
//! it can be run on selected files.
//!
//! ## Architecture
//!
//! ```text
//! CLI layer (args.rs, wired by main.rs)
//!   - parses arguments, prints messages, owns exit codes
//! API layer (api.rs)
//!   - preset lookup + override merge + PATH resolution -> IntegrationPlan
//! Command layer (commands/{create,delete}.rs)
//!   - artifact lifecycle; returns CmdResult, never prints
//! Leaf modules
//!   - presets: the built-in command table
//!   - plan: pure merge of preset and overrides
//!   - script: wrapper script rendering
//!   - locate: PATH resolution behind the CommandLocator trait
//!   - shortcut: symlink / .lnk creation behind the ShortcutWriter trait
//!   - paths: per-user artifact directories
//! ```
//!
//! The two trait seams (`CommandLocator`, `ShortcutWriter`) isolate every
//! OS-specific call, so the whole pipeline is testable without touching the
//! real shell. The only durable state is the two generated files on disk.

pub mod api;
pub mod commands;
pub mod error;
pub mod locate;
pub mod model;
pub mod paths;
pub mod plan;
pub mod presets;
pub mod script;
pub mod shortcut;
