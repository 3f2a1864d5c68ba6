//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::bower::cli::DEFAULT_BOWER_PROGRAM;
use crate::output::ListFormat;

/// bower-concat - bundle Bower components
///
/// Resolve installed Bower components into an ordered list of JavaScript main files.
#[derive(Parser, Debug)]
#[command(
    name = "bower-concat",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Resolve Bower components into ordered JavaScript main files",
    long_about = "bower-concat asks Bower for the installed components, picks each \
                  component's main JavaScript file and orders the files so that \
                  dependencies come before the components using them.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  bower-concat resolve\n    \
                  bower-concat resolve --exclude modernizr --format json\n    \
                  bower-concat concat --dest dist/bower.js\n    \
                  bower-concat concat --dependency app=lib,jquery --dest dist/app.js"
)]
pub struct Cli {
    /// Project directory holding bower.json (defaults to current directory)
    #[arg(long, short = 'w', global = true)]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the ordered main files
    Resolve(ResolveArgs),

    /// Concatenate the ordered main files into one bundle
    Concat(ConcatArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Options shared by every bundle task
#[derive(Args, Debug, Clone, Default)]
pub struct TaskArgs {
    /// Task configuration file (defaults to bower-concat.yaml when present)
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only bundle these components (repeatable)
    #[arg(long, value_name = "NAME", num_args = 1..)]
    pub include: Vec<String>,

    /// Never bundle these components (repeatable)
    #[arg(long, value_name = "NAME", num_args = 1..)]
    pub exclude: Vec<String>,

    /// Override a component's dependencies, e.g. --dependency app=lib,jquery
    #[arg(long = "dependency", value_name = "NAME=DEPS")]
    pub dependencies: Vec<String>,

    /// Use a strict topological sort that fails on cycles
    #[arg(long)]
    pub strict_order: bool,

    /// Bower executable
    #[arg(long, value_name = "PROGRAM", env = "BOWER_CONCAT_BOWER", default_value = DEFAULT_BOWER_PROGRAM)]
    pub bower: String,

    /// Read the map listing from a saved `bower list --map --json` output
    #[arg(long, value_name = "JSON", requires = "paths_file")]
    pub map_file: Option<PathBuf>,

    /// Read the paths listing from a saved `bower list --paths --json` output
    #[arg(long, value_name = "JSON", requires = "map_file")]
    pub paths_file: Option<PathBuf>,
}

/// Arguments for the resolve command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print main files in bundle order:\n    bower-concat resolve\n\n\
                  Skip a component:\n    bower-concat resolve --exclude modernizr\n\n\
                  Use saved listings:\n    bower-concat resolve --map-file map.json --paths-file paths.json")]
pub struct ResolveArgs {
    #[command(flatten)]
    pub task: TaskArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = ListFormat::Lines)]
    pub format: ListFormat,
}

/// Arguments for the concat command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Write the bundle:\n    bower-concat concat --dest dist/bower.js\n\n\
                  Separate files with semicolons:\n    bower-concat concat --dest dist/bower.js --separator ';\\n'")]
pub struct ConcatArgs {
    #[command(flatten)]
    pub task: TaskArgs,

    /// Bundle file to write (defaults to `dest` from the config file)
    #[arg(long, short = 'o', value_name = "FILE")]
    pub dest: Option<PathBuf>,

    /// Text inserted between files
    #[arg(long, default_value = "\n")]
    pub separator: String,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    bower-concat completions bash > ~/.bash_completion.d/bower-concat\n\n\
                  Generate zsh completions:\n    bower-concat completions zsh > ~/.zfunc/_bower-concat")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
