//! CMake manifest generation.
//!
//! [`render`] is a pure function over [`ProjectConfig`]: no clock, no
//! environment, no randomness. Identical configurations produce
//! byte-identical output, so the manifest is trivially regenerable.
//!
//! Two sections:
//! - the base section, always emitted: minimum CMake version, project
//!   declaration, language standard, executable target and include path
//! - the strict-flags section, appended only when `has_flags` is set
//!
//! Selected libraries are validated upstream but not yet reflected here;
//! wiring them into `target_link_libraries` sections is the designated
//! extension point.

use tracing::debug;

use crate::domain::config::ProjectConfig;

/// Strict diagnostic options, in emission order. Not alphabetized — the
/// order is part of the output contract.
const STRICT_FLAGS: [&str; 14] = [
    "-Wall",
    "-Wextra",
    "-Wpedantic",
    "-Werror",
    "-Wshadow",
    "-Wnon-virtual-dtor",
    "-Wold-style-cast",
    "-Wcast-align",
    "-Wunused",
    "-Wconversion",
    "-Wsign-conversion",
    "-Wnull-dereference",
    "-Wdouble-promotion",
    "-Wimplicit-fallthrough",
];

/// Render the CMake manifest for a validated configuration.
pub fn render(config: &ProjectConfig) -> String {
    let name = config.project_name();

    let mut manifest = format!(
        "cmake_minimum_required(VERSION 3.28)\n\
         project({name})\n\
         \n\
         set(CMAKE_CXX_STANDARD {standard})\n\
         \n\
         add_executable(\n\
         \x20 {name}\n\
         \x20 src/main.cpp\n\
         )\n\
         \n\
         target_include_directories(\n\
         \x20 {name}\n\
         \x20 PRIVATE\n\
         \x20 ${{CMAKE_CURRENT_SOURCE_DIR}}/include\n\
         )\n",
        standard = config.standard(),
    );

    if config.has_flags() {
        manifest.push_str(&format!(
            "\ntarget_compile_options(\n\x20 {name}\n\x20 PRIVATE\n"
        ));
        for flag in STRICT_FLAGS {
            manifest.push_str("  ");
            manifest.push_str(flag);
            manifest.push('\n');
        }
        manifest.push_str(")\n");
    }

    debug!(
        project = name,
        bytes = manifest.len(),
        strict = config.has_flags(),
        "Manifest rendered"
    );

    manifest
}
