//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text. No validation logic lives here: mode, libraries, and
//! standard are accepted as plain strings and handed to `nexpp_core`, so the
//! domain — not clap — owns the failure semantics ("Mode argument is
//! invalid", "Unknown library 'x'", the C++23 standard fallback).

use clap::{Args, Parser};

use nexpp_core::RawOptions;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "nexpp",
    bin_name = "nexpp",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Nexpp - A tool to simplify the generation of modern C++ project structures",
    after_help = "EXAMPLES:\n\
        \x20 nexpp -n MyProject\n\
        \x20 nexpp -n MyProject -d ~/code -s 20 -f\n\
        \x20 nexpp -n MyProject -l qt,gtest"
)]
pub struct Cli {
    /// Flags that shape output and logging.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// How Nexpp will run: graphical interface (gui) or command line
    /// interface (cli).
    #[arg(
        short = 'm',
        long = "mode",
        value_name = "cli|gui",
        help = "Run mode: cli (default) or gui"
    )]
    pub mode: Option<String>,

    /// The name of your project.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    /// Output directory where the generated project will be created.
    #[arg(
        short = 'd',
        long = "destination",
        value_name = "PATH",
        help = "Destination directory (default: current directory)"
    )]
    pub destination: Option<String>,

    /// Libraries to include, comma-separated. Allowed values: qt, gtest.
    #[arg(
        short = 'l',
        long = "libraries",
        value_name = "LIBS",
        help = "Comma-separated libraries (qt, gtest)"
    )]
    pub libraries: Option<String>,

    /// C++ standard for the project. Allowed values: 14, 17, 20, 23.
    #[arg(
        short = 's',
        long = "standard",
        value_name = "STD",
        help = "C++ standard (14, 17, 20, 23; default 23)"
    )]
    pub standard: Option<String>,

    /// Enable additional strict compile-time flags (e.g. warnings as
    /// errors, extra warnings).
    #[arg(short = 'f', long = "flags", help = "Enable strict compiler warnings")]
    pub flags: bool,
}

impl Cli {
    /// Hand the raw option values to the domain parser untouched.
    pub fn raw_options(&self) -> RawOptions {
        RawOptions {
            mode: self.mode.clone(),
            name: self.name.clone(),
            destination: self.destination.clone(),
            libraries: self.libraries.clone(),
            standard: self.standard.clone(),
            flags: self.flags,
        }
    }
}

// ── Global arguments ──────────────────────────────────────────────────────────

/// Global arguments that apply to every invocation.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-v`), twice for DEBUG (`-vv`), three times for
    /// TRACE (`-vvv`). Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Automatically honoured when `NO_COLOR` is set in the environment
    /// (see <https://no-color.org>).
    #[arg(long = "no-color", env = "NO_COLOR", help = "Disable colored output")]
    pub no_color: bool,
}

// ── tests ─────────────────────────────────────────────────────────────────────
