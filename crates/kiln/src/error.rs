// Copyright (c) Contributors to the Kiln project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for kiln operations.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience Result type with kiln Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during kiln operations.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Recipe file or repository directory not found
    #[error("Recipe path not found: {0:?}")]
    #[diagnostic(code(kiln::not_found_at_path))]
    NotFoundAtPath(PathBuf),

    /// Invalid YAML in recipe file
    #[error("Invalid recipe file: {error}")]
    #[diagnostic(
        code(kiln::invalid_yaml),
        help("Check YAML syntax and ensure 'api: kiln/v0' is present")
    )]
    InvalidYaml {
        #[source]
        error: serde_yaml::Error,
        yaml_content: String,
    },

    /// Failed to read file
    #[error("Failed to read file: {path:?}")]
    #[diagnostic(code(kiln::read_failed))]
    ReadFailed {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// Validation error
    #[error("Validation failed: {0}")]
    #[diagnostic(code(kiln::validation_failed))]
    ValidationFailed(String),

    /// Configure step references a dependency the recipe never declared
    #[error("Recipe '{recipe}' forwards '{root}' to configure but does not declare it")]
    #[diagnostic(
        code(kiln::undeclared_configure_root),
        help("Add '{root}' to the depends list, or remove it from configure.roots")
    )]
    UndeclaredConfigureRoot { recipe: String, root: String },

    /// Declared dependency never forwarded to the configure step
    #[error("Recipe '{recipe}' declares '{dependency}' but never forwards it to configure")]
    #[diagnostic(
        code(kiln::unused_dependency),
        help("Add '{dependency}' to configure.roots, or drop the declaration")
    )]
    UnusedDependency { recipe: String, dependency: String },

    /// Host supplied no install prefix for a declared dependency
    #[error("No resolved prefix for dependency '{dependency}' of recipe '{recipe}'")]
    #[diagnostic(
        code(kiln::missing_dependency),
        help("The host must install and resolve every declared dependency before configuring")
    )]
    MissingDependency { recipe: String, dependency: String },

    /// Two recipes registered under the same name
    #[error("Recipe '{0}' is already registered")]
    #[diagnostic(
        code(kiln::duplicate_recipe),
        help("Recipe names must be unique within a registry")
    )]
    DuplicateRecipe(String),

    /// Unknown recipe name
    #[error("Unknown recipe: {name}")]
    #[diagnostic(
        code(kiln::unknown_recipe),
        help("{}", suggestion_message(similar))
    )]
    UnknownRecipe {
        name: String,
        similar: Vec<String>,
    },

    /// IO error passthrough
    #[error(transparent)]
    #[diagnostic(code(kiln::io_error))]
    Io(#[from] std::io::Error),
}

fn suggestion_message(similar: &[String]) -> String {
    if similar.is_empty() {
        "Check that the recipe name is correct".to_string()
    } else {
        format!("Did you mean one of: {}?", similar.join(", "))
    }
}
