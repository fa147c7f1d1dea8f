use std::env;
use std::process;

use mowtodo::cli::{self, CliArgs, Command};
use mowtodo::color;
use mowtodo::config::Config;
use mowtodo::editor;
use mowtodo::render::{self, ListOptions};
use mowtodo::store::TaskStore;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let args: Vec<String> = env::args().collect();
    let cli = cli::parse_args(args);

    if cli.help {
        print_help();
        return;
    }

    if cli.version {
        println!("todo {}", VERSION);
        return;
    }

    // Default command is List if none specified
    let command = cli.command.unwrap_or(Command::List);

    let result = run(command, &cli);
    if let Err(e) = result {
        eprintln!("{} {}", color::error("error:"), e);
        process::exit(1);
    }
}

fn run(command: Command, cli: &CliArgs) -> Result<(), String> {
    let config = Config::load(cli).map_err(|e| e.to_string())?;

    match command {
        Command::Add => cmd_add(&config, cli),
        Command::Remove => cmd_remove(&config, cli),
        Command::Toggle => cmd_toggle(&config, cli),
        Command::Edit => cmd_edit(&config),
        Command::List => cmd_list(&config, cli),
    }
}

fn cmd_add(config: &Config, cli: &CliArgs) -> Result<(), String> {
    let description = cli
        .arg
        .as_deref()
        .ok_or("add needs a task description")?;
    let priority = cli.priority.as_deref().unwrap_or("low");
    let due = cli.due.as_deref().unwrap_or("");

    let mut store = TaskStore::open(&config.tasks_file).map_err(|e| e.to_string())?;
    store
        .add(description, priority, due)
        .map_err(|e| e.to_string())?;
    print_list(&store, cli);
    Ok(())
}

fn cmd_remove(config: &Config, cli: &CliArgs) -> Result<(), String> {
    let position = parse_position(cli, "remove")?;
    let mut store = TaskStore::open(&config.tasks_file).map_err(|e| e.to_string())?;
    store.remove(position).map_err(|e| e.to_string())?;
    print_list(&store, cli);
    Ok(())
}

fn cmd_toggle(config: &Config, cli: &CliArgs) -> Result<(), String> {
    let position = parse_position(cli, "toggle")?;
    let mut store = TaskStore::open(&config.tasks_file).map_err(|e| e.to_string())?;
    store.toggle(position).map_err(|e| e.to_string())?;
    print_list(&store, cli);
    Ok(())
}

fn cmd_edit(config: &Config) -> Result<(), String> {
    // Make sure the file exists before handing it to the editor.
    TaskStore::open(&config.tasks_file).map_err(|e| e.to_string())?;
    editor::open(&config.tasks_file).map_err(|e| e.to_string())
}

fn cmd_list(config: &Config, cli: &CliArgs) -> Result<(), String> {
    let store = TaskStore::open(&config.tasks_file).map_err(|e| e.to_string())?;
    print_list(&store, cli);
    Ok(())
}

fn parse_position(cli: &CliArgs, command: &str) -> Result<usize, String> {
    let raw = cli
        .arg
        .as_deref()
        .ok_or_else(|| format!("{} needs a 1-based task position", command))?;
    raw.parse()
        .map_err(|_| format!("{} needs a 1-based task position (got {:?})", command, raw))
}

fn print_list(store: &TaskStore, cli: &CliArgs) {
    let options = ListOptions {
        show_done: !cli.undone || cli.done,
        show_undone: !cli.done || cli.undone,
        show_progress: !cli.no_progress,
    };
    let (output, _) = render::list(store.tasks(), &options);
    print!("{}", output);
}

fn print_help() {
    println!(
        r#"todo - flat-file command-line task tracker

USAGE:
    todo [OPTIONS] [COMMAND]

COMMANDS:
    add <description>     Add a task
    remove <position>     Remove the task at a 1-based position
    toggle <position>     Toggle done for the task at a 1-based position
    edit                  Open the task file in $EDITOR
    list                  List tasks (default)

OPTIONS:
    -h, --help            Show this help message
    -V, --version         Show version
    -f, --file <PATH>     Path to the task file [default: ~/.config/todo/todo.txt]
    -p, --priority <P>    Priority for add: low, medium, high [default: low]
    -d, --due <DATE>      Due date for add (YYYY-MM-DD)
    --done                List only done tasks
    --undone              List only undone tasks
    --no-progress         Hide the progress bar

EXAMPLES:
    todo add "Buy milk" -p high -d 2026-09-01
    todo toggle 2
    todo list --undone"#
    );
}
