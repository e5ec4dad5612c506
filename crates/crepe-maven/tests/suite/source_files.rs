use std::path::{Path, PathBuf};

use crepe_build_model::{BuildModelError, SourceFilesConfiguration};
use crepe_maven::{Artifact, MavenError, MavenProject, MavenSourceFilesConfiguration, Resource};
use crepe_source_files::{ResolveError, ResolvedSourceFiles};

fn write(path: &Path) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, b"x").unwrap();
}

/// A built standard-layout project: sources, resources and what `mvn compile` left behind.
fn built_project(basedir: &Path) -> MavenProject {
    write(&basedir.join("src/main/java/App.java"));
    write(&basedir.join("src/main/java/Pending.java"));
    write(&basedir.join("src/main/resources/app.properties"));
    write(&basedir.join("src/main/resources/dev-only.properties"));
    write(&basedir.join("target/classes/App.java"));
    write(&basedir.join("target/classes/app.properties"));

    let mut project = MavenProject::standard(basedir);
    project.artifact_id = Some("demo".to_string());
    project.artifacts = vec![
        Artifact::new("org.slf4j", "slf4j-api", "2.0.9")
            .with_file(basedir.join("m2/org/slf4j/slf4j-api-2.0.9.jar")),
        Artifact::new("com.google.guava", "guava", "33.0.0-jre")
            .with_file(basedir.join("m2/com/google/guava/guava-33.0.0-jre.jar")),
    ];
    project
}

#[test]
fn maven_project_is_classified() {
    let tmp = tempfile::tempdir().unwrap();
    let basedir = tmp.path();
    let project = built_project(basedir);

    let config = MavenSourceFilesConfiguration::new(&project).unwrap();

    assert_eq!(
        config.dependencies_files(),
        &[
            basedir.join("m2/com/google/guava/guava-33.0.0-jre.jar"),
            basedir.join("m2/org/slf4j/slf4j-api-2.0.9.jar"),
        ]
    );
    assert_eq!(
        config.resources_files(),
        &[basedir.join("target/classes/app.properties")]
    );
    assert_eq!(
        config.classes_files(),
        &[basedir.join("target/classes/App.java")]
    );
    assert_eq!(config.dependencies_path_on_image(), PathBuf::from("app/libs"));
    assert_eq!(config.resources_path_on_image(), PathBuf::from("app/resources"));
    assert_eq!(config.classes_path_on_image(), PathBuf::from("app/classes"));
}

#[test]
fn maven_configuration_matches_generic_resolution() {
    let tmp = tempfile::tempdir().unwrap();
    let project = built_project(tmp.path());

    let config = MavenSourceFilesConfiguration::new(&project).unwrap();
    let generic = ResolvedSourceFiles::from_provider(&project).unwrap();

    assert_eq!(config.resolved(), &generic);
    assert_eq!(config.into_resolved(), generic);
}

#[test]
fn extra_resource_directories_are_included() {
    let tmp = tempfile::tempdir().unwrap();
    let basedir = tmp.path();
    let mut project = built_project(basedir);
    write(&basedir.join("src/main/config/banner.txt"));
    write(&basedir.join("target/classes/banner.txt"));
    project
        .resources
        .push(Resource::new(basedir.join("src/main/config")));

    let config = MavenSourceFilesConfiguration::new(&project).unwrap();

    assert_eq!(
        config.resources_files(),
        &[
            basedir.join("target/classes/app.properties"),
            basedir.join("target/classes/banner.txt"),
        ]
    );
}

#[test]
fn unresolved_artifact_aborts_configuration() {
    let tmp = tempfile::tempdir().unwrap();
    let mut project = built_project(tmp.path());
    project
        .artifacts
        .push(Artifact::new("com.example", "missing", "1.0"));

    let err = MavenSourceFilesConfiguration::new(&project).unwrap_err();

    assert!(
        matches!(
            err,
            MavenError::Model(BuildModelError::ArtifactWithoutFile { .. })
        ),
        "{err}"
    );
}

#[test]
fn project_without_sources_fails_to_resolve() {
    let tmp = tempfile::tempdir().unwrap();
    let project = MavenProject::standard(tmp.path());

    let err = MavenSourceFilesConfiguration::new(&project).unwrap_err();

    assert!(
        matches!(err, MavenError::Resolve(ResolveError::Io { .. })),
        "{err}"
    );
}
