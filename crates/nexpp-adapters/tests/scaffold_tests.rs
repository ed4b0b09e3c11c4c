//! Scaffold service exercised against the in-memory filesystem adapter.

use std::path::Path;

use nexpp_adapters::MemoryFilesystem;
use nexpp_core::{
    ApplicationError, Filesystem, NexppError, RawOptions, ScaffoldService, domain::config,
};

fn parse(raw: RawOptions) -> nexpp_core::ProjectConfig {
    config::parse(raw).unwrap().config
}

fn demo_config(destination: &str) -> nexpp_core::ProjectConfig {
    parse(RawOptions {
        name: Some("Demo".into()),
        destination: Some(destination.into()),
        standard: Some("17".into()),
        flags: true,
        ..RawOptions::default()
    })
}

#[test]
fn scaffold_creates_tree_and_manifest() {
    let fs = MemoryFilesystem::new();
    let service = ScaffoldService::new(Box::new(fs.clone()));

    let report = service.scaffold(&demo_config("/workspace")).unwrap();
    assert_eq!(report.project_root, Path::new("/workspace/Demo"));

    assert!(fs.exists(Path::new("/workspace/Demo/src")));
    assert!(fs.exists(Path::new("/workspace/Demo/include/Demo")));

    let cmake = fs
        .read_file(Path::new("/workspace/Demo/CMakeLists.txt"))
        .unwrap();
    assert!(cmake.contains("project(Demo)"));
    assert!(cmake.contains("set(CMAKE_CXX_STANDARD 17)"));
    assert!(cmake.contains("-Werror"));

    let main_cpp = fs
        .read_file(Path::new("/workspace/Demo/src/main.cpp"))
        .unwrap();
    assert!(main_cpp.contains("Hello from Demo!"));
}

#[test]
fn scaffold_refuses_existing_project_directory() {
    let fs = MemoryFilesystem::new();
    fs.create_dir_all(Path::new("/workspace/Demo")).unwrap();

    let service = ScaffoldService::new(Box::new(fs));
    let err = service.scaffold(&demo_config("/workspace")).unwrap_err();
    assert!(matches!(
        err,
        NexppError::Application(ApplicationError::ProjectExists { .. })
    ));
}

#[test]
fn scaffold_without_flags_omits_strict_section() {
    let fs = MemoryFilesystem::new();
    let service = ScaffoldService::new(Box::new(fs.clone()));

    let config = parse(RawOptions {
        name: Some("Plain".into()),
        destination: Some("/out".into()),
        ..RawOptions::default()
    });
    service.scaffold(&config).unwrap();

    let cmake = fs.read_file(Path::new("/out/Plain/CMakeLists.txt")).unwrap();
    assert!(!cmake.contains("target_compile_options"));
    assert!(cmake.contains("set(CMAKE_CXX_STANDARD 23)"));
}
