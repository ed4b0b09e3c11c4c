//! Domain value objects: AppMode, Standard, Library.
//!
//! # Design
//!
//! These are pure value types — `Copy`, equality-by-value, no identity.
//! Each small allow-list the tool validates against is a closed enum here,
//! so adding a supported library or standard is a compile-time-checked
//! extension rather than a string-matching patch.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Done — parsing, display, and validation all follow

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── AppMode ──────────────────────────────────────────────────────────────────

/// How the tool presents itself after configuration parsing.
///
/// The core never branches on this — dispatch lives in the front-end layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppMode {
    #[default]
    Cli,
    Gui,
}

impl AppMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cli => "cli",
            Self::Gui => "gui",
        }
    }
}

impl fmt::Display for AppMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cli" => Ok(Self::Cli),
            "gui" => Ok(Self::Gui),
            other => Err(DomainError::InvalidMode {
                value: other.to_string(),
            }),
        }
    }
}

// ── Standard ─────────────────────────────────────────────────────────────────

/// A supported C++ language standard.
///
/// Unrecognized input does NOT produce an error at the parse layer: the
/// configuration parser degrades to [`Standard::default`] with an advisory
/// notice instead. `from_year` is total over `u32` for that reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Standard {
    Cpp14,
    Cpp17,
    Cpp20,
    #[default]
    Cpp23,
}

impl Standard {
    /// Two-digit token as rendered into the manifest ("14", "17", ...).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cpp14 => "14",
            Self::Cpp17 => "17",
            Self::Cpp20 => "20",
            Self::Cpp23 => "23",
        }
    }

    /// Map a standard year to its variant; `None` for anything outside the
    /// allow-list (the caller decides the fallback policy).
    pub const fn from_year(year: u32) -> Option<Self> {
        match year {
            14 => Some(Self::Cpp14),
            17 => Some(Self::Cpp17),
            20 => Some(Self::Cpp20),
            23 => Some(Self::Cpp23),
            _ => None,
        }
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Library ──────────────────────────────────────────────────────────────────

/// A third-party library the generated project may request.
///
/// Validated against the allow-list at parse time; currently recorded on
/// the configuration but not yet wired into manifest generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Library {
    Qt,
    GTest,
}

impl Library {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Qt => "qt",
            Self::GTest => "gtest",
        }
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Library {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "qt" => Ok(Self::Qt),
            "gtest" => Ok(Self::GTest),
            other => Err(DomainError::UnknownLibrary {
                library: other.to_string(),
            }),
        }
    }
}
