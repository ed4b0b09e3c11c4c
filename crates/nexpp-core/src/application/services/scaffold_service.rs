//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the project-creation workflow:
//! 1. Resolve the project root from the configuration
//! 2. Create the directory skeleton (`src/`, `include/<name>/`)
//! 3. Render the CMake manifest and write it with a starter `main.cpp`
//!
//! It uses the driven [`Filesystem`] port for every disk mutation, so the
//! whole workflow runs unchanged against the in-memory test adapter.

use std::path::PathBuf;

use tracing::{info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{config::ProjectConfig, manifest},
    error::NexppResult,
};

/// What the scaffold produced, for display by the front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// Root of the generated project tree.
    pub project_root: PathBuf,
    /// Files written, relative to `project_root`.
    pub files: Vec<PathBuf>,
}

/// Main scaffolding service.
///
/// Orchestrates skeleton creation and manifest writing on top of a
/// [`Filesystem`] adapter.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Scaffold a new project.
    ///
    /// This is the main use case - materializes the configuration into a
    /// project tree at `destination/<project_name>/`. Fails with
    /// [`ApplicationError::ProjectExists`] rather than touching an existing
    /// directory.
    #[instrument(
        skip_all,
        fields(project = %config.project_name(), destination = %config.destination().display())
    )]
    pub fn scaffold(&self, config: &ProjectConfig) -> NexppResult<ScaffoldReport> {
        let name = config.project_name();
        let project_root = config.destination().join(name);

        if self.filesystem.exists(&project_root) {
            return Err(ApplicationError::ProjectExists { path: project_root }.into());
        }

        info!("Scaffolding C++{} project", config.standard());

        self.filesystem.create_dir_all(&project_root)?;
        self.filesystem.create_dir_all(&project_root.join("src"))?;
        self.filesystem
            .create_dir_all(&project_root.join("include").join(name))?;

        let cmake_path = project_root.join("CMakeLists.txt");
        self.filesystem
            .write_file(&cmake_path, &manifest::render(config))?;

        let main_path = project_root.join("src").join("main.cpp");
        self.filesystem.write_file(&main_path, &starter_main(name))?;

        info!("Scaffold completed successfully");

        Ok(ScaffoldReport {
            project_root,
            files: vec![PathBuf::from("CMakeLists.txt"), PathBuf::from("src/main.cpp")],
        })
    }
}

/// Starter translation unit so the generated tree compiles as-is.
fn starter_main(project_name: &str) -> String {
    format!(
        "#include <iostream>\n\
         \n\
         int main()\n\
         {{\n\
         \x20 std::cout << \"Hello from {project_name}!\\n\";\n\
         \x20 return 0;\n\
         }}\n"
    )
}
