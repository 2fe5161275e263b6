// Copyright (c) Contributors to the Kiln project.
// SPDX-License-Identifier: Apache-2.0

//! Derive native build-tool arguments for a recipe.

use clap::Args;
use miette::Result;

/// Derive configure arguments from resolved dependencies
#[derive(Debug, Args)]
pub struct CmdConfigure {
    /// Recipe name
    name: String,

    /// Resolved dependency prefix (repeatable)
    #[clap(long = "with", value_name = "NAME=PREFIX")]
    with: Vec<String>,

    /// Recipe source selection flags
    #[clap(flatten)]
    repos: crate::RepoFlags,
}

impl CmdConfigure {
    pub fn run(&mut self) -> Result<i32> {
        let registry = self.repos.load_registry()?;
        let recipe = registry.get(&self.name)?;

        let mut resolved = kiln::ResolvedPrefixes::new();
        for pair in &self.with {
            let (name, prefix) = parse_with(pair)?;
            resolved.insert(name, prefix);
        }

        let args = kiln::derive_build_args(recipe, &resolved)?;
        for arg in &args {
            println!("{}", arg);
        }

        Ok(0)
    }
}

/// Split a NAME=PREFIX pair from a --with flag.
fn parse_with(pair: &str) -> Result<(&str, &str)> {
    match pair.split_once('=') {
        Some((name, prefix)) if !name.is_empty() && !prefix.is_empty() => Ok((name, prefix)),
        _ => Err(miette::miette!(
            "Invalid --with value '{}': expected NAME=PREFIX",
            pair
        )),
    }
}
