// Copyright (c) Contributors to the Kiln project.
// SPDX-License-Identifier: Apache-2.0

//! Load-time registry of recipes, keyed by package name.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::recipe::Recipe;
use crate::RECIPE_FILE_EXTENSION;

#[cfg(test)]
#[path = "./registry_test.rs"]
mod registry_test;

/// An insertion-ordered collection of recipes.
///
/// The host populates a registry once at load time and treats it as
/// read-only afterwards, so it can be shared across concurrent operations
/// without locking.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    recipes: IndexMap<String, Recipe>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a recipe, validating it first.
    pub fn insert(&mut self, recipe: Recipe) -> crate::Result<()> {
        recipe.validate()?;
        if self.recipes.contains_key(&recipe.name) {
            return Err(crate::Error::DuplicateRecipe(recipe.name));
        }
        self.recipes.insert(recipe.name.clone(), recipe);
        Ok(())
    }

    /// Load every recipe file from a repository directory.
    ///
    /// One recipe per `*.yaml` file; other files are skipped. Files are
    /// loaded in filename order so registration order is deterministic.
    /// Returns the number of recipes loaded.
    pub fn load_dir<P: AsRef<Path>>(&mut self, dir: P) -> crate::Result<usize> {
        let dir = resolve_repo_path(dir.as_ref())?;

        let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path.extension() == Some(OsStr::new(RECIPE_FILE_EXTENSION))
            })
            .collect();
        paths.sort();

        let mut loaded = 0;
        for path in paths {
            tracing::debug!(path = %path.display(), "loading recipe file");
            let recipe = Recipe::load(&path)?;
            self.insert(recipe)?;
            loaded += 1;
        }

        Ok(loaded)
    }

    /// Look up a recipe by name, suggesting near misses on failure.
    pub fn get(&self, name: &str) -> crate::Result<&Recipe> {
        self.recipes
            .get(name)
            .ok_or_else(|| crate::Error::UnknownRecipe {
                name: name.to_string(),
                similar: self.similar_names(name),
            })
    }

    /// Registered recipe names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.recipes.keys().map(String::as_str)
    }

    /// Registered recipes, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.values()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    fn similar_names(&self, name: &str) -> Vec<String> {
        let needle = name.to_ascii_lowercase();
        self.recipes
            .keys()
            .filter(|known| {
                let known = known.to_ascii_lowercase();
                known.contains(&needle) || needle.contains(&known)
            })
            .cloned()
            .collect()
    }
}

/// Resolve a repository path (absolute, home-relative, or relative).
fn resolve_repo_path(dir: &Path) -> crate::Result<PathBuf> {
    let expanded = match dir.to_str().and_then(|s| s.strip_prefix("~/")) {
        Some(rel) => {
            let home = dirs::home_dir().ok_or_else(|| {
                crate::Error::ValidationFailed("Cannot resolve ~ without HOME".to_string())
            })?;
            home.join(rel)
        }
        None => dir.to_path_buf(),
    };

    dunce::canonicalize(&expanded).map_err(|_| crate::Error::NotFoundAtPath(expanded))
}
