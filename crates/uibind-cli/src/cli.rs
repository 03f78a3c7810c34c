//! CLI argument definitions for uibind.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "uibind",
    version,
    about = "Generate LVGL producer/consumer bindings from a UI header",
    long_about = "Collect symbols from 'extern lv_obj_t *' declarations in the UI header,\n\
                  classify them by their three character prefix, and generate\n\
                  <binding_name>.cpp with producer, consumer and group registrations.\n\
                  Settings are kept in <binding_name>.json between runs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub project: ProjectArgs,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

/// Where the project lives and how symbols are classified.
#[derive(Args)]
pub struct ProjectArgs {
    /// Directory containing the UI header and generated files.
    #[arg(
        short = 'w',
        long = "working-dir",
        value_name = "DIR",
        default_value = ".",
        global = true
    )]
    pub working_dir: PathBuf,

    /// UI header to scan, relative to the working directory.
    #[arg(
        short = 'i',
        long = "include",
        value_name = "FILE",
        default_value = "ui.h",
        global = true
    )]
    pub include_file: String,

    /// Stem of the generated .cpp and .json files.
    #[arg(
        short = 'b',
        long = "binding-name",
        value_name = "NAME",
        default_value = "ui_binding",
        global = true
    )]
    pub binding_name: String,

    /// Constant prefix removed from every symbol before classification.
    #[arg(
        short = 'p',
        long = "prefix",
        value_name = "PREFIX",
        default_value = "ui_",
        global = true
    )]
    pub constant_prefix: String,

    /// Accept symbols without a recognized prefix (as labels).
    #[arg(short = 'a', long = "all", global = true)]
    pub accept_all: bool,

    /// Pointee type of the declarations to collect.
    #[arg(
        long = "object-type",
        value_name = "TYPE",
        default_value = "lv_obj_t",
        global = true
    )]
    pub object_type: String,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show discovered symbols with their current settings.
    List(ListArgs),

    /// Change fields of one symbol, then save and regenerate.
    Edit(EditArgs),

    /// Save settings and regenerate the binding source.
    Generate(GenerateArgs),

    /// Show notes from scanning and loading.
    Notes,

    /// List prefixes, control types and events.
    Types,
}

#[derive(Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ListFormatArg,
}

#[derive(Args)]
pub struct EditArgs {
    /// Symbol identifier as declared in the header (e.g. ui_btn_submit).
    #[arg(value_name = "IDENTIFIER")]
    pub identifier: String,

    /// Field assignments: name=, type=, event=, pro=, con=, grp=.
    #[arg(value_name = "FIELD=VALUE", required = true)]
    pub assignments: Vec<String>,

    #[command(flatten)]
    pub output: GenerateArgs,
}

#[derive(Args, Clone, Copy)]
pub struct GenerateArgs {
    /// Write commented placeholders for disabled calls.
    #[arg(long = "diagnostic")]
    pub diagnostic: bool,

    /// Omit the generator banner comment.
    #[arg(long = "no-banner")]
    pub no_banner: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ListFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
