// Copyright (c) Contributors to the Kiln project.
// SPDX-License-Identifier: Apache-2.0

//! Resolved dependency prefixes and configure-argument derivation.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::recipe::Recipe;

#[cfg(test)]
#[path = "./configure_test.rs"]
mod configure_test;

/// Install prefixes for resolved dependencies, keyed by dependency name.
///
/// Built by the host once every declared dependency of a recipe has been
/// installed. Recipes never create or mutate this table themselves.
#[derive(Debug, Clone, Default)]
pub struct ResolvedPrefixes {
    prefixes: IndexMap<String, PathBuf>,
}

impl ResolvedPrefixes {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the install prefix for a dependency.
    pub fn insert<N, P>(&mut self, name: N, prefix: P)
    where
        N: Into<String>,
        P: Into<PathBuf>,
    {
        self.prefixes.insert(name.into(), prefix.into());
    }

    /// Look up the install prefix for a dependency.
    pub fn get(&self, name: &str) -> Option<&Path> {
        self.prefixes.get(name).map(PathBuf::as_path)
    }

    /// Number of resolved dependencies.
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

impl<N, P> FromIterator<(N, P)> for ResolvedPrefixes
where
    N: Into<String>,
    P: Into<PathBuf>,
{
    fn from_iter<T: IntoIterator<Item = (N, P)>>(iter: T) -> Self {
        let mut resolved = Self::new();
        for (name, prefix) in iter {
            resolved.insert(name, prefix);
        }
        resolved
    }
}

/// Derive the configure arguments for a recipe from its resolved dependencies.
///
/// Emits one `-D<name>_ROOT=<prefix>` argument per configure root, in the
/// recipe-defined order. Every referenced dependency must have an entry in
/// `resolved`: a missing entry means the host skipped a declared dependency,
/// which is a contract violation reported as a fatal error rather than an
/// omitted flag.
///
/// Pure function over its inputs. Performs no filesystem or network access;
/// cloning sources and invoking the native build tool are the host's job.
pub fn derive_build_args(
    recipe: &Recipe,
    resolved: &ResolvedPrefixes,
) -> crate::Result<Vec<String>> {
    let roots = recipe.configure_roots();
    let mut args = Vec::with_capacity(roots.len());

    for name in roots {
        let prefix = resolved
            .get(name)
            .ok_or_else(|| crate::Error::MissingDependency {
                recipe: recipe.name.clone(),
                dependency: name.clone(),
            })?;
        args.push(format!("-D{}_ROOT={}", name, prefix.display()));
    }

    Ok(args)
}
