use clap::Parser;
use colored::*;
use integratethis::api::{IntegrateApi, IntegrateRequest};
use integratethis::commands::{CmdMessage, CmdResult, MessageLevel};
use integratethis::error::Result;
use integratethis::locate::PathLocator;
use integratethis::model::Platform;
use integratethis::paths::ArtifactDirs;
use integratethis::shortcut::{ExplorerShortcutWriter, ShortcutWriter, SymlinkWriter};

mod args;
use args::Cli;

fn main() {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(result) => print_messages(&result.messages, &cli),
        Err(e) => {
            eprintln!("{} {}", "ERROR".red().bold(), e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: &Cli) -> Result<CmdResult> {
    let platform = Platform::current()?;
    let writer = shortcut_writer(platform);
    writer.available()?;

    let dirs = ArtifactDirs::discover(platform)?;
    let api = IntegrateApi::new(PathLocator, writer, dirs, platform);

    let request = IntegrateRequest {
        command: cli.command.clone(),
        parameters: cli.parameter.clone(),
        into: cli.into.clone(),
        display_name: cli.displayname.clone(),
        overwrite: cli.overwrite,
        confirm: cli.confirm,
    };

    if cli.delete {
        api.remove(&request)
    } else {
        api.integrate(&request)
    }
}

fn shortcut_writer(platform: Platform) -> Box<dyn ShortcutWriter> {
    match platform {
        Platform::Windows => Box::new(ExplorerShortcutWriter),
        Platform::Unix => Box::new(SymlinkWriter),
    }
}

fn print_messages(messages: &[CmdMessage], cli: &Cli) {
    for message in messages {
        match message.level {
            MessageLevel::Debug if !cli.verbose => {}
            MessageLevel::Debug => println!("{}", message.content.dimmed()),
            MessageLevel::Info | MessageLevel::Success | MessageLevel::Warning if cli.quiet => {}
            MessageLevel::Info => println!("{}", message.content.normal()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}
