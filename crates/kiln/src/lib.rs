// Copyright (c) Contributors to the Kiln project.
// SPDX-License-Identifier: Apache-2.0

//! kiln - Package Build Recipe Library
//!
//! This crate provides the core library for describing how a
//! package-management host fetches, configures, and builds source packages
//! through declarative recipe files.
//!
//! # Overview
//!
//! A recipe names a package, the source-control location of its code, the
//! versions available for checkout, and the dependencies the host must
//! install first. Once the host has resolved those dependencies to install
//! prefixes, [`derive_build_args`] turns the recipe into the configure
//! arguments forwarded to the native build tool.
//!
//! The recipe itself performs no fetching, resolution, or building; those
//! belong to the host. It is static data plus one pure derivation.
//!
//! # Example
//!
//! ```yaml
//! # p3a.yaml
//! api: kiln/v0
//! name: p3a
//! homepage: https://github.com/sandialabs/p3a
//! git: https://github.com/sandialabs/p3a.git
//!
//! versions:
//!   - label: main
//!     branch: main
//!
//! # Installed by the host before the configure step runs
//! depends:
//!   - mpicpp
//!   - kokkos
//! ```

pub mod builtin;
pub mod configure;
pub mod error;
pub mod recipe;
pub mod registry;

pub use builtin::{builtin_registry, p3a};
pub use configure::{derive_build_args, ResolvedPrefixes};
pub use error::{Error, Result};
pub use recipe::{
    ApiVersion, BranchSource, CommitSource, ConfigureSection, Recipe, TagSource, Version,
    VersionSource,
};
pub use registry::Registry;

/// File extension recognized for recipe files.
pub const RECIPE_FILE_EXTENSION: &str = "yaml";
