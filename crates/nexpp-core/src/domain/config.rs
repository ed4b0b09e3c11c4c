//! Configuration parsing and validation.
//!
//! [`parse`] is the single constructor for [`ProjectConfig`]: it turns raw
//! option values into a validated, immutable configuration or fails with a
//! [`DomainError`]. There is no partially-built state — construction either
//! fully succeeds or fails atomically.
//!
//! # Validation policy
//!
//! Fatal (abort construction):
//! - mode value other than "cli"/"gui"
//! - missing or empty project name
//! - any library token outside the allow-list
//!
//! Advisory (returned as [`Notice`]s, never alter control flow):
//! - destination unset → defaults to "./"
//! - unrecognized standard → falls back to C++23
//!
//! The unrecognized-standard fallback being non-fatal while an unrecognized
//! library is fatal is a deliberate quirk carried over from the original
//! behavior; tests pin it.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::error::DomainError;
use crate::domain::value_objects::{AppMode, Library, Standard};

/// Default destination when `-d` is not given.
const DEFAULT_DESTINATION: &str = "./";

// ── Raw input ────────────────────────────────────────────────────────────────

/// Raw option values as extracted from the command line, before validation.
///
/// The front-end layer owns tokenization (short/long names, `--help`,
/// `--version`); this struct is the seam between it and the domain. Every
/// value-bearing option arrives as an untouched `Option<String>` so that the
/// domain — not the argument tokenizer — owns the failure semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOptions {
    /// `-m/--mode`: "cli" or "gui", case-insensitive.
    pub mode: Option<String>,
    /// `-n/--name`: the project name. Mandatory.
    pub name: Option<String>,
    /// `-d/--destination`: where the project tree will be created.
    pub destination: Option<String>,
    /// `-l/--libraries`: comma-separated library list.
    pub libraries: Option<String>,
    /// `-s/--standard`: C++ standard year.
    pub standard: Option<String>,
    /// `-f/--flags`: strict compile flags, presence-only.
    pub flags: bool,
}

// ── Validated output ─────────────────────────────────────────────────────────

/// A validated, immutable project configuration.
///
/// Constructed exactly once per invocation by [`parse`]; read-only
/// thereafter. Invariants upheld by construction:
///
/// - `project_name` is non-empty
/// - `libraries` contains only allow-listed entries, no duplicates,
///   first-seen order preserved
/// - `standard` is always one of the four enumerated values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectConfig {
    mode: AppMode,
    project_name: String,
    destination: PathBuf,
    libraries: Vec<Library>,
    standard: Standard,
    has_flags: bool,
}

impl ProjectConfig {
    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn libraries(&self) -> &[Library] {
        &self.libraries
    }

    pub fn standard(&self) -> Standard {
        self.standard
    }

    pub fn has_flags(&self) -> bool {
        self.has_flags
    }
}

// ── Advisory notices ─────────────────────────────────────────────────────────

/// Non-fatal diagnostics emitted while parsing.
///
/// A notice records that a default was silently substituted. Notices never
/// abort execution; the front-end decides how to display them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// No `-d` given; destination defaulted to "./".
    DestinationDefaulted,
    /// `-s` value was not one of {14, 17, 20, 23}; fell back to C++23.
    StandardFallback { given: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DestinationDefaulted => {
                write!(f, "No destination provided, using the current directory")
            }
            Self::StandardFallback { given } => {
                write!(f, "Unrecognized standard '{given}', falling back to C++23")
            }
        }
    }
}

/// The result of a successful parse: the configuration plus any advisory
/// notices collected along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub config: ProjectConfig,
    pub notices: Vec<Notice>,
}

// ── Parser ───────────────────────────────────────────────────────────────────

/// Parse raw option values into a [`ProjectConfig`].
///
/// Pure except for `tracing` events: identical input always yields an
/// identical outcome.
pub fn parse(raw: RawOptions) -> Result<ParseOutcome, DomainError> {
    let mut notices = Vec::new();

    let mode = match raw.mode.as_deref() {
        None => AppMode::default(),
        Some(value) => value.parse()?,
    };

    let project_name = match raw.name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(DomainError::MissingProjectName),
    };

    let destination = match raw.destination {
        Some(path) => PathBuf::from(path),
        None => {
            let notice = Notice::DestinationDefaulted;
            warn!("{notice}");
            notices.push(notice);
            PathBuf::from(DEFAULT_DESTINATION)
        }
    };

    let libraries = match raw.libraries.as_deref() {
        None | Some("") => Vec::new(),
        Some(list) => parse_libraries(list)?,
    };

    let standard = match raw.standard {
        None => Standard::default(),
        Some(value) => match value.trim().parse::<u32>().ok().and_then(Standard::from_year) {
            Some(standard) => standard,
            None => {
                let notice = Notice::StandardFallback { given: value };
                warn!("{notice}");
                notices.push(notice);
                Standard::default()
            }
        },
    };

    let config = ProjectConfig {
        mode,
        project_name,
        destination,
        libraries,
        standard,
        has_flags: raw.flags,
    };

    debug!(
        mode = %config.mode,
        name = %config.project_name,
        destination = %config.destination.display(),
        standard = %config.standard,
        flags = config.has_flags,
        "Configuration parsed"
    );

    Ok(ParseOutcome { config, notices })
}

/// Split a comma-separated library list, validating each token against the
/// allow-list and collapsing case-insensitive duplicates while preserving
/// first-seen order.
fn parse_libraries(list: &str) -> Result<Vec<Library>, DomainError> {
    let mut libraries = Vec::new();
    for token in list.split(',') {
        let library: Library = token.parse()?;
        if !libraries.contains(&library) {
            libraries.push(library);
        }
    }
    Ok(libraries)
}
