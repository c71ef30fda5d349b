//! CLI argument definitions for the catalog browser.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use catalog_ingest::DEFAULT_BASE_URL;

#[derive(Parser)]
#[command(
    name = "catalog",
    version,
    about = "Product catalog browser - search, filter, and sort a remote catalog",
    long_about = "Browse a product catalog fetched from a remote source.\n\n\
                  Narrows the catalog by free-text search and category, orders it\n\
                  by price, and renders the grouped result."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

#[derive(Subcommand)]
pub enum Command {
    /// Browse the catalog with search, category, and sort controls.
    Browse(BrowseArgs),

    /// List the selectable categories of the current catalog.
    Categories(SourceArgs),
}

/// Where the raw item collection comes from.
#[derive(Args)]
pub struct SourceArgs {
    /// Read the product payload from a local JSON file instead of
    /// fetching it.
    #[arg(long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Base URL of the products endpoint.
    #[arg(long = "base-url", value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

#[derive(Args)]
pub struct BrowseArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Keep only items whose title, description, or category contains
    /// this text (case-insensitive).
    #[arg(long = "search", value_name = "TERM")]
    pub search: Option<String>,

    /// Show only this category ("all" for every category).
    #[arg(long = "category", value_name = "LABEL", default_value = "all")]
    pub category: String,

    /// Price sort direction.
    #[arg(long = "sort", value_enum, default_value = "asc")]
    pub sort: SortArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SortArg {
    /// Price: low to high.
    Asc,
    /// Price: high to low.
    Desc,
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
