use clap::Parser;

const LONG_ABOUT: &str = "\
This program integrates arbitrary commands to various tools. For example, you
can add a program named \"filetags\" to the \"Send to\" folder of the context
menu of the Windows File Explorer via

    integratethis filetags

The integration method differs from tool to tool. For the Windows Explorer, a
batch file is placed within the AppData\\Roaming folder in case additional
parameters have to be added to the command, and a lnk file to it is created in
the \"Send to\" folder. If no additional parameters are required, a lnk file to
the command itself is placed there instead. On Unix-like systems a shell
script and a symbolic link in ~/bin are used.

Pre-configured parameters can be overwritten using the command line options.";

#[derive(Parser, Debug)]
#[command(name = "integratethis", version)]
#[command(about = "Integrate arbitrary commands into the file manager's context menu")]
#[command(long_about = LONG_ABOUT)]
pub struct Cli {
    /// The command to integrate. For a defined set of tools, parameters are
    /// pre-configured: filetags, appendfilename, date2name, time2name
    /// (date2name but with time-stamp). The command has to be found in the
    /// PATH of the current environment.
    pub command: String,

    /// Do not stop when a previous wrapper script or shortcut would be
    /// overwritten; replace it instead
    #[arg(long)]
    pub overwrite: bool,

    /// Optional parameter string which gets appended after the command when
    /// being invoked, e.g. '--interactive "${*}"'
    #[arg(long, value_name = "PARAMETERS", allow_hyphen_values = true)]
    pub parameter: Option<String>,

    /// Ask the user to confirm by pressing RETURN/ENTER before the wrapper
    /// script closes its window
    #[arg(long)]
    pub confirm: bool,

    /// Explicitly define where to integrate the program to. Valid values
    /// (according to your operating system): windowsexplorer, thunar
    #[arg(long, value_name = "PROGRAM")]
    pub into: Option<String>,

    /// Optional name that should be used instead of the command name when
    /// being linked
    #[arg(long, value_name = "NAME")]
    pub displayname: Option<String>,

    /// Instead of integrating the program, remove its integration. Command or
    /// displayname has to match the existing integration point
    #[arg(long)]
    pub delete: bool,

    /// Enable verbose mode
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,
}
