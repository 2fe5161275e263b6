// Copyright (c) Contributors to the Kiln project.
// SPDX-License-Identifier: Apache-2.0

//! Recipe file parsing and data types for package build recipes.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "./recipe_test.rs"]
mod recipe_test;

/// API version for recipe files.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub enum ApiVersion {
    #[serde(rename = "kiln/v0")]
    V0,
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::V0
    }
}

/// Helper for two-stage deserialization to determine API version first.
#[derive(Deserialize)]
struct ApiVersionMapping {
    #[serde(default)]
    api: ApiVersion,
}

/// Where the sources for one version come from.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum VersionSource {
    Branch(BranchSource),
    Tag(TagSource),
    Commit(CommitSource),
}

/// A tracked branch, checked out at its current head on every fetch.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct BranchSource {
    pub branch: String,
}

/// A fixed tag.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct TagSource {
    pub tag: String,
}

/// A fixed revision id.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct CommitSource {
    pub commit: String,
}

impl VersionSource {
    /// Short human-readable description of the source.
    pub fn describe(&self) -> String {
        match self {
            Self::Branch(b) => format!("branch {}", b.branch),
            Self::Tag(t) => format!("tag {}", t.tag),
            Self::Commit(c) => format!("commit {}", c.commit),
        }
    }

    /// Whether this source tracks a moving head rather than a fixed point.
    pub fn is_tracking(&self) -> bool {
        matches!(self, Self::Branch(_))
    }
}

/// A single available version of a package.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Version {
    /// Display label for this version (e.g. "main", "1.2.0").
    pub label: String,

    /// Where the host obtains sources for this version.
    #[serde(flatten)]
    pub source: VersionSource,
}

/// Configure-step settings for a recipe.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConfigureSection {
    /// Dependencies whose install prefixes are forwarded to the native
    /// build tool, in forwarding order. Defaults to the depends order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roots: Vec<String>,
}

/// A build recipe: how the host fetches, configures, and builds one package.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Recipe {
    /// API version identifier.
    #[serde(default)]
    pub api: ApiVersion,

    /// Package name.
    pub name: String,

    /// Optional human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Project homepage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,

    /// Source-control URL the host clones from.
    pub git: String,

    /// Available versions, in preference order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<Version>,

    /// Build-time dependencies installed by the host before configuring.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends: Vec<String>,

    /// Configure-step settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configure: Option<ConfigureSection>,

    /// Path to the file this was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Recipe {
    /// Parse a recipe from a YAML string.
    pub fn from_yaml<S: Into<String>>(yaml: S) -> crate::Result<Self> {
        let yaml = yaml.into();

        // Stage 1: Parse to get API version
        let value: serde_yaml::Value =
            serde_yaml::from_str(&yaml).map_err(|e| crate::Error::InvalidYaml {
                error: e,
                yaml_content: yaml.clone(),
            })?;

        let with_version: ApiVersionMapping =
            serde_yaml::from_value(value.clone()).map_err(|e| crate::Error::InvalidYaml {
                error: e,
                yaml_content: yaml.clone(),
            })?;

        // Stage 2: Deserialize based on version
        match with_version.api {
            ApiVersion::V0 => {
                serde_yaml::from_value(value).map_err(|e| crate::Error::InvalidYaml {
                    error: e,
                    yaml_content: yaml,
                })
            }
        }
    }

    /// Load a recipe from a file path.
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| crate::Error::ReadFailed {
            path: path.to_path_buf(),
            error: e,
        })?;

        let mut recipe = Self::from_yaml(yaml)?;
        recipe.source_path = Some(path.to_path_buf());
        Ok(recipe)
    }

    /// Validate the recipe after loading.
    ///
    /// Beyond structural checks, this enforces that the configure step and
    /// the dependency declarations agree: every forwarded root must be
    /// declared, and every declared dependency must be forwarded.
    pub fn validate(&self) -> crate::Result<()> {
        if self.name.is_empty() {
            return Err(crate::Error::ValidationFailed(
                "recipe name cannot be empty".to_string(),
            ));
        }
        if self.git.is_empty() {
            return Err(crate::Error::ValidationFailed(format!(
                "recipe '{}' has no git source",
                self.name
            )));
        }
        if self.versions.is_empty() {
            return Err(crate::Error::ValidationFailed(format!(
                "recipe '{}' declares no versions",
                self.name
            )));
        }

        let mut labels = HashSet::new();
        for version in &self.versions {
            if !labels.insert(version.label.as_str()) {
                return Err(crate::Error::ValidationFailed(format!(
                    "recipe '{}' declares version '{}' more than once",
                    self.name, version.label
                )));
            }
        }

        let mut declared = HashSet::new();
        for dep in &self.depends {
            if !declared.insert(dep.as_str()) {
                return Err(crate::Error::ValidationFailed(format!(
                    "recipe '{}' declares dependency '{}' more than once",
                    self.name, dep
                )));
            }
        }

        let mut referenced = HashSet::new();
        for root in self.configure_roots() {
            if !declared.contains(root.as_str()) {
                return Err(crate::Error::UndeclaredConfigureRoot {
                    recipe: self.name.clone(),
                    root: root.clone(),
                });
            }
            if !referenced.insert(root.as_str()) {
                return Err(crate::Error::ValidationFailed(format!(
                    "recipe '{}' forwards '{}' to configure more than once",
                    self.name, root
                )));
            }
        }
        for dep in &self.depends {
            if !referenced.contains(dep.as_str()) {
                return Err(crate::Error::UnusedDependency {
                    recipe: self.name.clone(),
                    dependency: dep.clone(),
                });
            }
        }

        Ok(())
    }

    /// Ordered dependency names forwarded to the native build tool.
    ///
    /// Uses the explicit `configure.roots` order when present, otherwise
    /// the declaration order of `depends`.
    pub fn configure_roots(&self) -> &[String] {
        match &self.configure {
            Some(section) if !section.roots.is_empty() => &section.roots,
            _ => &self.depends,
        }
    }

    /// Find a declared version by label.
    pub fn find_version(&self, label: &str) -> Option<&Version> {
        self.versions.iter().find(|v| v.label == label)
    }
}

impl Default for Recipe {
    fn default() -> Self {
        Self {
            api: ApiVersion::default(),
            name: String::new(),
            description: None,
            homepage: None,
            git: String::new(),
            versions: Vec::new(),
            depends: Vec::new(),
            configure: None,
            source_path: None,
        }
    }
}
