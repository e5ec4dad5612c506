use std::path::PathBuf;

use crepe_build_model::{LayerEntry, LayerKind, SourceInputs};
use crepe_source_files::ResolvedSourceFiles;

use super::support::{mkdir, touch};

#[test]
fn entries_place_files_under_their_roots() {
    let tmp = tempfile::tempdir().unwrap();
    let out = mkdir(tmp.path(), "target/classes");
    let java = mkdir(tmp.path(), "src/main/java");
    let res = mkdir(tmp.path(), "src/main/resources");
    touch(&java, "com/example/Main.java");
    touch(&out, "com/example/Main.class");
    touch(&res, "logback.xml");
    touch(&out, "logback.xml");

    let inputs = SourceInputs::new(&out, &java)
        .with_resource_dir(&res)
        .with_dependency("/m2/org/slf4j/slf4j-api/2.0.9/slf4j-api-2.0.9.jar");
    let files = ResolvedSourceFiles::resolve(&inputs).unwrap();

    assert_eq!(
        files.layer_entries(LayerKind::Dependencies).unwrap(),
        vec![LayerEntry {
            source: PathBuf::from("/m2/org/slf4j/slf4j-api/2.0.9/slf4j-api-2.0.9.jar"),
            path_on_image: PathBuf::from("app/libs/slf4j-api-2.0.9.jar"),
        }]
    );
    assert_eq!(
        files.layer_entries(LayerKind::Resources).unwrap(),
        vec![LayerEntry {
            source: out.join("logback.xml"),
            path_on_image: PathBuf::from("app/resources/logback.xml"),
        }]
    );
    assert_eq!(
        files.layer_entries(LayerKind::Classes).unwrap(),
        vec![LayerEntry {
            source: out.join("com"),
            path_on_image: PathBuf::from("app/classes/com"),
        }]
    );
}

#[test]
fn dependency_entries_follow_sorted_order() {
    let tmp = tempfile::tempdir().unwrap();
    let src = mkdir(tmp.path(), "src");
    let inputs = SourceInputs::new(tmp.path().join("out"), &src)
        .with_dependency("/lib/z.jar")
        .with_dependency("/lib/a.jar");

    let entries = ResolvedSourceFiles::resolve(&inputs)
        .unwrap()
        .layer_entries(LayerKind::Dependencies)
        .unwrap();
    let targets: Vec<_> = entries.into_iter().map(|e| e.path_on_image).collect();

    assert_eq!(
        targets,
        vec![
            PathBuf::from("app/libs/a.jar"),
            PathBuf::from("app/libs/z.jar")
        ]
    );
}
