//! Domain validation errors.
//!
//! Every variant here is fatal: configuration construction either fully
//! succeeds or fails with one of these. Non-fatal conditions (defaulted
//! destination, unrecognized standard) are `config::Notice`s, not errors —
//! the asymmetry is deliberate and pinned by tests.

use thiserror::Error;

/// Fatal validation errors raised while building a `ProjectConfig`.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Actionable (provide suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// `-m` was given a value other than "cli"/"gui".
    #[error("Mode argument is invalid: '{value}'")]
    InvalidMode { value: String },

    /// `-n` was absent or empty.
    #[error("Project name is required")]
    MissingProjectName,

    /// A `-l` token is outside the allow-list.
    #[error("Unknown library '{library}'")]
    UnknownLibrary { library: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidMode { value } => vec![
                format!("'{value}' is not a recognized mode"),
                "Allowed modes:".into(),
                "  • cli - run in the terminal (default)".into(),
                "  • gui - launch the graphical interface".into(),
                "Example: nexpp -n MyProject -m cli".into(),
            ],
            Self::MissingProjectName => vec![
                "Pass a project name with -n / --name".into(),
                "Example: nexpp -n MyProject".into(),
            ],
            Self::UnknownLibrary { library } => vec![
                format!("'{library}' is not a supported library"),
                "Supported libraries:".into(),
                "  • qt    - Qt widgets and tooling".into(),
                "  • gtest - GoogleTest unit-testing framework".into(),
                "Example: nexpp -n MyProject -l qt,gtest".into(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_mode_message_names_value() {
        let err = DomainError::InvalidMode {
            value: "repl".into(),
        };
        assert_eq!(err.to_string(), "Mode argument is invalid: 'repl'");
    }

    #[test]
    fn missing_name_message_is_stable() {
        assert_eq!(
            DomainError::MissingProjectName.to_string(),
            "Project name is required"
        );
    }

    #[test]
    fn unknown_library_suggestions_list_allowed() {
        let err = DomainError::UnknownLibrary {
            library: "boost".into(),
        };
        let suggestions = err.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("qt")));
        assert!(suggestions.iter().any(|s| s.contains("gtest")));
    }
}
