// Copyright (c) Contributors to the Kiln project.
// SPDX-License-Identifier: Apache-2.0

//! Compiled-in recipes shipped with the library.

use once_cell::sync::Lazy;

use crate::recipe::{BranchSource, Recipe, Version, VersionSource};
use crate::registry::Registry;

static BUILTIN_REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let mut registry = Registry::new();
    for recipe in [p3a()] {
        registry
            .insert(recipe)
            .expect("compiled-in recipes must validate");
    }
    registry
});

/// Registry of all compiled-in recipes, built once and shared read-only.
pub fn builtin_registry() -> &'static Registry {
    &BUILTIN_REGISTRY
}

/// Recipe for p3a, a C++17 library supporting HPC physics applications.
///
/// Builds against MPI and Kokkos, so both install prefixes are forwarded
/// to the configure step.
pub fn p3a() -> Recipe {
    Recipe {
        name: "p3a".to_string(),
        description: Some(
            "C++17 library meant to support High Performance Computing physics applications"
                .to_string(),
        ),
        homepage: Some("https://github.com/sandialabs/p3a".to_string()),
        git: "https://github.com/sandialabs/p3a.git".to_string(),
        versions: vec![Version {
            label: "main".to_string(),
            source: VersionSource::Branch(BranchSource {
                branch: "main".to_string(),
            }),
        }],
        depends: vec!["mpicpp".to_string(), "kokkos".to_string()],
        ..Default::default()
    }
}
