//! choice CLI
//!
//! Ask menus and questions from the shell, or walk through the demo.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use choice::items::load_items;
use choice::report::{format_answer, format_selection};
use choice::types::{labels, Item, OutputFormat};
use choice::{parsed, validate, Binary, Console, Input, Menu};

#[derive(Parser)]
#[command(name = "choice")]
#[command(about = "Plain-text console menus and prompts")]
#[command(version)]
struct Cli {
    /// Read answers from this file instead of stdin, one per line
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Output format for the final answer
    #[arg(long, value_enum, default_value = "human", global = true)]
    format: OutputFormatArg,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through every kind of prompt
    Demo,

    /// Pick one of several choices, optionally followed by an action
    Menu {
        /// Choices to list (combined with --items)
        choices: Vec<String>,

        /// Action offered after a choice; `id=label` or `label`
        #[arg(long = "action")]
        actions: Vec<String>,

        /// Global action listed under every page; `id=label` or `label`
        #[arg(long = "global")]
        globals: Vec<String>,

        /// Heading shown above the choices
        #[arg(long)]
        title: Option<String>,

        /// JSON file with more choices: ["name", ["id", "name"], ...]
        #[arg(long)]
        items: Option<PathBuf>,
    },

    /// Ask a yes/no question
    Confirm {
        /// The question
        prompt: String,

        /// Answer used when the reply is empty
        #[arg(long, value_enum)]
        default: Option<DefaultArg>,
    },

    /// Ask for a value and keep asking until it is valid
    Input {
        /// The question
        prompt: String,

        /// Kind of value expected
        #[arg(long, value_enum, default_value = "text")]
        kind: KindArg,

        /// Only accept text containing this substring
        #[arg(long)]
        contains: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum DefaultArg {
    Yes,
    No,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Int,
    Float,
    Text,
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    let format: OutputFormat = cli.format.into();

    let result = match &cli.input {
        Some(path) => match Console::replay(path) {
            Ok(mut console) => dispatch(cli.command, format, &mut console),
            Err(e) => Err(format!("Cannot read answers from {}: {}", path.display(), e)),
        },
        None => dispatch(cli.command, format, &mut Console::stdio()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr, filtered by RUST_LOG (default: warn).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn dispatch<R: BufRead, W: Write>(
    command: Commands,
    format: OutputFormat,
    console: &mut Console<R, W>,
) -> Result<(), String> {
    match command {
        Commands::Demo => cmd_demo(console),
        Commands::Menu {
            choices,
            actions,
            globals,
            title,
            items,
        } => cmd_menu(choices, actions, globals, title, items, format, console),
        Commands::Confirm { prompt, default } => cmd_confirm(prompt, default, format, console),
        Commands::Input {
            prompt,
            kind,
            contains,
        } => cmd_input(prompt, kind, contains, format, console),
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_menu<R: BufRead, W: Write>(
    choices: Vec<String>,
    actions: Vec<String>,
    globals: Vec<String>,
    title: Option<String>,
    items: Option<PathBuf>,
    format: OutputFormat,
    console: &mut Console<R, W>,
) -> Result<(), String> {
    let mut all_choices = labels(choices);
    if let Some(path) = items {
        let loaded = load_items(&path)
            .map_err(|e| format!("Cannot load items from {}: {}", path.display(), e))?;
        all_choices.extend(loaded);
    }
    if all_choices.is_empty() {
        return Err("Give at least one choice or --items".to_string());
    }

    let mut menu = Menu::new(all_choices)
        .with_actions(actions.iter().map(|a| parse_item(a)).collect())
        .with_global_actions(globals.iter().map(|g| parse_item(g)).collect());
    if let Some(title) = title {
        menu = menu.with_title(title);
    }

    let selection = menu.ask_on(console).map_err(|e| e.to_string())?;
    print!("{}", format_selection(&selection, format));
    Ok(())
}

fn cmd_confirm<R: BufRead, W: Write>(
    prompt: String,
    default: Option<DefaultArg>,
    format: OutputFormat,
    console: &mut Console<R, W>,
) -> Result<(), String> {
    let mut question = Binary::new(prompt);
    match default {
        Some(DefaultArg::Yes) => question = question.with_default(true),
        Some(DefaultArg::No) => question = question.with_default(false),
        None => {}
    }

    let answer = question.ask_on(console).map_err(|e| e.to_string())?;
    print!("{}", format_answer("confirmed", &answer, format));
    Ok(())
}

fn cmd_input<R: BufRead, W: Write>(
    prompt: String,
    kind: KindArg,
    contains: Option<String>,
    format: OutputFormat,
    console: &mut Console<R, W>,
) -> Result<(), String> {
    let out = match kind {
        KindArg::Int => {
            let value = Input::new(prompt, parsed::<i64>())
                .ask_on(console)
                .map_err(|e| e.to_string())?;
            format_answer("value", &value, format)
        }
        KindArg::Float => {
            let value = Input::new(prompt, parsed::<f64>())
                .ask_on(console)
                .map_err(|e| e.to_string())?;
            format_answer("value", &value, format)
        }
        KindArg::Text => {
            let needle = contains.unwrap_or_default();
            let value = Input::new(prompt, validate(move |s| s.contains(needle.as_str())))
                .ask_on(console)
                .map_err(|e| e.to_string())?;
            format_answer("value", &value, format)
        }
    };
    print!("{}", out);
    Ok(())
}

/// The walkthrough: one of each prompt, in the order a first-time user
/// would want to see them.
fn cmd_demo<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), String> {
    let err = |e: choice::PromptError| e.to_string();

    let confirm = Binary::new("Are you sure you want to delete?")
        .with_default(false)
        .ask_on(console)
        .map_err(err)?;
    if confirm {
        console.line("Delete confirmed").map_err(err)?;
    }

    let pies = Input::new("How many pies?", parsed::<i64>())
        .ask_on(console)
        .map_err(err)?;
    console
        .line(&format!("You ordered {} pies", pies))
        .map_err(err)?;

    let entree = Menu::new(labels(["steak", "potatoes", "eggplant"]))
        .ask_on(console)
        .map_err(err)?;
    console
        .lines(format_selection(&entree, OutputFormat::Human).lines())
        .map_err(err)?;

    let posts: Vec<String> = (0..15).map(|n| format!("post {}", n)).collect();
    let post = Menu::new(labels(posts))
        .with_actions(labels(["edit", "delete", "publish"]))
        .with_global_actions(labels(["newpost", "exit"]))
        .ask_on(console)
        .map_err(err)?;
    console
        .lines(format_selection(&post, OutputFormat::Human).lines())
        .map_err(err)?;

    Input::new("Enter an integer", parsed::<i64>())
        .ask_on(console)
        .map_err(err)?;
    Input::new("Enter a string with \"a\" in it", validate(|s| s.contains('a')))
        .ask_on(console)
        .map_err(err)?;

    Binary::new("Yes or no?").with_default(true).ask_on(console).map_err(err)?;
    Binary::new("yes or No?").with_default(false).ask_on(console).map_err(err)?;
    Binary::new("yes or no?").ask_on(console).map_err(err)?;

    Ok(())
}

/// `id=label` keeps both; a bare word is its own id.
fn parse_item(raw: &str) -> Item<String> {
    match raw.split_once('=') {
        Some((id, label)) => Item::new(id.to_string(), label),
        None => Item::named(raw),
    }
}
