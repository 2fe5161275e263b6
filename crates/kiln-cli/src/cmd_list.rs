// Copyright (c) Contributors to the Kiln project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `kiln list` command.

use clap::Args;
use colored::Colorize;
use miette::Result;

/// List known recipes
#[derive(Debug, Args)]
pub struct CmdList {
    /// Recipe source selection flags
    #[clap(flatten)]
    repos: crate::RepoFlags,

    /// Print names only, one per line
    #[clap(long)]
    names: bool,
}

impl CmdList {
    pub fn run(&mut self) -> Result<i32> {
        let registry = self.repos.load_registry()?;

        if self.names {
            for name in registry.names() {
                println!("{}", name);
            }
            return Ok(0);
        }

        println!("{}", "Known Recipes:".bold());
        println!();

        for (i, recipe) in registry.iter().enumerate() {
            let origin = match &recipe.source_path {
                Some(path) => path.display().to_string(),
                None => "<builtin>".to_string(),
            };

            println!("  {}. {} ({})", i + 1, recipe.name.cyan(), origin.dimmed());

            if let Some(desc) = &recipe.description {
                println!("     {}", desc.dimmed());
            }
        }

        println!();
        println!("Total: {} recipe(s)", registry.len());

        Ok(0)
    }
}
