// Copyright (c) Contributors to the Kiln project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;

use super::*;

#[rstest]
fn test_parse_minimal_recipe() {
    let yaml = r#"
api: kiln/v0
name: hello
git: https://example.com/hello.git
versions:
  - label: main
    branch: main
"#;
    let recipe = Recipe::from_yaml(yaml).expect("Should parse minimal recipe");
    assert_eq!(recipe.api, ApiVersion::V0);
    assert_eq!(recipe.name, "hello");
    assert!(recipe.depends.is_empty());
    assert!(recipe.configure.is_none());
    assert!(recipe.source_path.is_none());
}

#[rstest]
fn test_parse_full_recipe() {
    let yaml = r#"
api: kiln/v0
name: p3a
description: "C++17 library supporting HPC physics applications"
homepage: https://github.com/sandialabs/p3a
git: https://github.com/sandialabs/p3a.git
versions:
  - label: main
    branch: main
depends:
  - mpicpp
  - kokkos
"#;
    let recipe = Recipe::from_yaml(yaml).expect("Should parse full recipe");
    assert_eq!(recipe.name, "p3a");
    assert_eq!(
        recipe.homepage.as_deref(),
        Some("https://github.com/sandialabs/p3a")
    );
    assert_eq!(recipe.git, "https://github.com/sandialabs/p3a.git");
    assert_eq!(recipe.depends, vec!["mpicpp", "kokkos"]);

    let version = recipe.find_version("main").expect("main should exist");
    assert_eq!(
        version.source,
        VersionSource::Branch(BranchSource {
            branch: "main".to_string()
        })
    );
    assert!(version.source.is_tracking());
}

#[rstest]
fn test_parse_version_sources() {
    let yaml = r#"
api: kiln/v0
name: mixed
git: https://example.com/mixed.git
versions:
  - label: main
    branch: main
  - label: "1.2.0"
    tag: v1.2.0
  - label: pinned
    commit: 0123abcd
"#;
    let recipe = Recipe::from_yaml(yaml).expect("Should parse version sources");
    assert_eq!(recipe.versions.len(), 3);

    assert!(recipe.versions[0].source.is_tracking());
    assert_eq!(recipe.versions[0].source.describe(), "branch main");

    assert!(!recipe.versions[1].source.is_tracking());
    assert_eq!(recipe.versions[1].source.describe(), "tag v1.2.0");

    assert!(!recipe.versions[2].source.is_tracking());
    assert_eq!(recipe.versions[2].source.describe(), "commit 0123abcd");
}

#[rstest]
fn test_api_defaults_to_v0_when_missing() {
    let yaml = r#"
name: hello
git: https://example.com/hello.git
versions:
  - label: main
    branch: main
"#;
    let recipe = Recipe::from_yaml(yaml).expect("Should parse without api field");
    assert_eq!(recipe.api, ApiVersion::V0);
}

#[rstest]
fn test_parse_invalid_yaml() {
    let yaml = r#"
api: kiln/v0
versions: [
  unclosed bracket
"#;
    let result = Recipe::from_yaml(yaml);
    assert!(result.is_err(), "Should fail on invalid YAML");
}

#[rstest]
fn test_validate_empty_name() {
    let recipe = Recipe {
        git: "https://example.com/x.git".to_string(),
        ..Default::default()
    };
    assert!(matches!(
        recipe.validate(),
        Err(crate::Error::ValidationFailed(_))
    ));
}

#[rstest]
fn test_validate_missing_git() {
    let recipe = Recipe {
        name: "hello".to_string(),
        ..Default::default()
    };
    assert!(matches!(
        recipe.validate(),
        Err(crate::Error::ValidationFailed(_))
    ));
}

#[rstest]
fn test_validate_requires_a_version() {
    let recipe = Recipe {
        name: "hello".to_string(),
        git: "https://example.com/hello.git".to_string(),
        ..Default::default()
    };
    assert!(matches!(
        recipe.validate(),
        Err(crate::Error::ValidationFailed(_))
    ));
}

#[rstest]
fn test_validate_duplicate_version_labels() {
    let yaml = r#"
api: kiln/v0
name: dup
git: https://example.com/dup.git
versions:
  - label: main
    branch: main
  - label: main
    tag: v1.0
"#;
    let recipe = Recipe::from_yaml(yaml).expect("Should parse");
    assert!(matches!(
        recipe.validate(),
        Err(crate::Error::ValidationFailed(_))
    ));
}

#[rstest]
fn test_validate_duplicate_dependency() {
    let yaml = r#"
api: kiln/v0
name: dup
git: https://example.com/dup.git
versions:
  - label: main
    branch: main
depends:
  - zlib
  - zlib
"#;
    let recipe = Recipe::from_yaml(yaml).expect("Should parse");
    assert!(matches!(
        recipe.validate(),
        Err(crate::Error::ValidationFailed(_))
    ));
}

#[rstest]
fn test_validate_undeclared_configure_root() {
    let yaml = r#"
api: kiln/v0
name: bad
git: https://example.com/bad.git
versions:
  - label: main
    branch: main
depends:
  - mpicpp
configure:
  roots:
    - mpicpp
    - kokkos
"#;
    let recipe = Recipe::from_yaml(yaml).expect("Should parse");
    match recipe.validate() {
        Err(crate::Error::UndeclaredConfigureRoot { recipe, root }) => {
            assert_eq!(recipe, "bad");
            assert_eq!(root, "kokkos");
        }
        other => panic!("Expected UndeclaredConfigureRoot, got: {:?}", other),
    }
}

#[rstest]
fn test_validate_unused_dependency() {
    let yaml = r#"
api: kiln/v0
name: bad
git: https://example.com/bad.git
versions:
  - label: main
    branch: main
depends:
  - mpicpp
  - kokkos
configure:
  roots:
    - mpicpp
"#;
    let recipe = Recipe::from_yaml(yaml).expect("Should parse");
    match recipe.validate() {
        Err(crate::Error::UnusedDependency { recipe, dependency }) => {
            assert_eq!(recipe, "bad");
            assert_eq!(dependency, "kokkos");
        }
        other => panic!("Expected UnusedDependency, got: {:?}", other),
    }
}

#[rstest]
fn test_validate_explicit_roots_may_reorder() {
    let yaml = r#"
api: kiln/v0
name: reordered
git: https://example.com/reordered.git
versions:
  - label: main
    branch: main
depends:
  - mpicpp
  - kokkos
configure:
  roots:
    - kokkos
    - mpicpp
"#;
    let recipe = Recipe::from_yaml(yaml).expect("Should parse");
    recipe.validate().expect("Reordering declared deps is valid");
    assert_eq!(recipe.configure_roots(), ["kokkos", "mpicpp"]);
}

#[rstest]
fn test_configure_roots_default_to_depends_order() {
    let yaml = r#"
api: kiln/v0
name: ordered
git: https://example.com/ordered.git
versions:
  - label: main
    branch: main
depends:
  - mpicpp
  - kokkos
"#;
    let recipe = Recipe::from_yaml(yaml).expect("Should parse");
    recipe.validate().expect("Should validate");
    assert_eq!(recipe.configure_roots(), ["mpicpp", "kokkos"]);
}

#[rstest]
fn test_load_records_source_path() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("hello.yaml");
    std::fs::write(
        &path,
        r#"
api: kiln/v0
name: hello
git: https://example.com/hello.git
versions:
  - label: main
    branch: main
"#,
    )
    .unwrap();

    let recipe = Recipe::load(&path).expect("Should load recipe file");
    assert_eq!(recipe.name, "hello");
    assert_eq!(recipe.source_path.as_deref(), Some(path.as_path()));
}

#[rstest]
fn test_load_missing_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let result = Recipe::load(tmp.path().join("nope.yaml"));
    assert!(matches!(result, Err(crate::Error::ReadFailed { .. })));
}

#[rstest]
fn test_default_recipe() {
    let recipe = Recipe::default();
    assert_eq!(recipe.api, ApiVersion::V0);
    assert!(recipe.name.is_empty());
    assert!(recipe.versions.is_empty());
    assert!(recipe.depends.is_empty());
    assert!(recipe.configure.is_none());
    assert!(recipe.source_path.is_none());
}
