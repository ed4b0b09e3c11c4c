//! The single Nexpp use case: parse options, generate, write.
//!
//! Responsibility: hand raw option values to the core parser, surface
//! advisory notices, dispatch on the run mode, and display results. No
//! validation logic lives here.

use tracing::{debug, info, instrument};

use nexpp_adapters::LocalFilesystem;
use nexpp_core::{AppMode, ProjectConfig, ScaffoldService, domain::config};

use crate::{
    cli::Cli,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute a Nexpp invocation.
///
/// Dispatch sequence:
/// 1. Validate raw options into a `ProjectConfig` (fatal errors abort here)
/// 2. Print any advisory notices (defaulted destination, standard fallback)
/// 3. Dispatch on the run mode
/// 4. CLI mode: scaffold the project tree and print next steps
#[instrument(skip_all)]
pub fn execute(cli: Cli, output: &OutputManager) -> CliResult<()> {
    let outcome = config::parse(cli.raw_options()).map_err(nexpp_core::NexppError::from)?;

    for notice in &outcome.notices {
        output.warning(&notice.to_string())?;
    }

    let config = outcome.config;
    debug!(
        mode = %config.mode(),
        project = config.project_name(),
        standard = %config.standard(),
        "Configuration validated"
    );

    match config.mode() {
        AppMode::Cli => scaffold(&config, output),
        // The graphical front-end is an external collaborator; this binary
        // only validates the configuration for it.
        AppMode::Gui => Err(CliError::FeatureNotAvailable { feature: "gui" }),
    }
}

fn scaffold(config: &ProjectConfig, output: &OutputManager) -> CliResult<()> {
    let name = config.project_name();

    output.header(&format!("Creating '{name}'..."))?;
    info!(project = name, "Scaffold started");

    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));
    let report = service.scaffold(config)?;

    output.success(&format!(
        "Project '{name}' created at {}",
        report.project_root.display()
    ))?;

    for file in &report.files {
        output.info(&format!("  {}", file.display()))?;
    }

    if !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", report.project_root.display()))?;
        output.print("  cmake -S . -B build")?;
        output.print("  cmake --build build")?;
    }

    Ok(())
}
