//! Hand-rolled CLI argument parsing.
//!
//! The surface is one subcommand word plus flags; with no command the
//! default is `list` with both filters on and the progress bar shown.

/// CLI arguments parsed from the command line.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Subcommand to execute.
    pub command: Option<Command>,
    /// Positional argument: the description for `add`, the 1-based position
    /// for `remove`/`toggle`.
    pub arg: Option<String>,
    /// Path to the task file (overrides `TODO_FILE` and the default).
    pub file: Option<String>,
    /// Priority for `add`.
    pub priority: Option<String>,
    /// Due date for `add`.
    pub due: Option<String>,
    /// List only done tasks.
    pub done: bool,
    /// List only undone tasks.
    pub undone: bool,
    /// Hide the progress bar.
    pub no_progress: bool,
    /// Show help.
    pub help: bool,
    /// Show version.
    pub version: bool,
}

/// todo subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Add a new task.
    Add,
    /// Remove the task at a 1-based position.
    Remove,
    /// Toggle done for the task at a 1-based position.
    Toggle,
    /// Open the task file in `$EDITOR`.
    Edit,
    /// List tasks (the default).
    List,
}

impl Command {
    /// Parse command from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "add" => Some(Self::Add),
            "remove" | "rm" => Some(Self::Remove),
            "toggle" => Some(Self::Toggle),
            "edit" => Some(Self::Edit),
            "list" | "ls" => Some(Self::List),
            _ => None,
        }
    }
}

/// Parse CLI arguments from an iterator.
pub fn parse_args<I>(args: I) -> CliArgs
where
    I: IntoIterator<Item = String>,
{
    let mut cli = CliArgs::default();
    let mut args = args.into_iter();

    // Skip program name
    args.next();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => cli.help = true,
            "-V" | "--version" => cli.version = true,
            "-f" | "--file" => cli.file = args.next(),
            "-p" | "--priority" => cli.priority = args.next(),
            "-d" | "--due" => cli.due = args.next(),
            "--done" => cli.done = true,
            "--undone" => cli.undone = true,
            "--no-progress" => cli.no_progress = true,
            _ if !arg.starts_with('-') => {
                if cli.command.is_none() {
                    cli.command = Command::from_str(&arg);
                } else if cli.arg.is_none() {
                    cli.arg = Some(arg);
                }
            }
            _ => {} // Ignore unknown flags
        }
    }

    cli
}
