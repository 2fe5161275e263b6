// Copyright (c) Contributors to the Kiln project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `kiln show` command.

use clap::Args;
use colored::Colorize;
use miette::Result;

/// Display one recipe
#[derive(Debug, Args)]
pub struct CmdShow {
    /// Recipe name
    name: String,

    /// Recipe source selection flags
    #[clap(flatten)]
    repos: crate::RepoFlags,

    /// Output format: table, yaml, json
    #[clap(long, default_value = "table")]
    format: String,
}

impl CmdShow {
    pub fn run(&mut self) -> Result<i32> {
        let registry = self.repos.load_registry()?;
        let recipe = registry.get(&self.name)?;

        if self.format == "yaml" {
            self.show_yaml(recipe)?;
        } else if self.format == "json" {
            self.show_json(recipe)?;
        } else {
            self.show_table(recipe)?;
        }

        Ok(0)
    }

    fn show_table(&self, recipe: &kiln::Recipe) -> Result<()> {
        println!("{}", recipe.name.bold());
        if let Some(desc) = &recipe.description {
            println!("  {}", desc.dimmed());
        }
        println!();

        if let Some(homepage) = &recipe.homepage {
            println!("  homepage: {}", homepage.cyan());
        }
        println!("  git:      {}", recipe.git.cyan());

        println!();
        println!("{}", "Versions:".bold());
        for version in &recipe.versions {
            let tracking = if version.source.is_tracking() {
                " [tracking]"
            } else {
                ""
            };
            println!(
                "  {} ({}){}",
                version.label.green(),
                version.source.describe(),
                tracking.yellow()
            );
        }

        println!();
        println!("{}", "Dependencies:".bold());
        if recipe.depends.is_empty() {
            println!("  {}", "(none)".dimmed());
        }
        for dep in &recipe.depends {
            println!("  {}", dep.green());
        }

        println!();
        println!("{}", "Configure arguments:".bold());
        for root in recipe.configure_roots() {
            println!("  -D{}_ROOT=<{} prefix>", root, root);
        }

        Ok(())
    }

    fn show_yaml(&self, recipe: &kiln::Recipe) -> Result<()> {
        let yaml = serde_yaml::to_string(recipe)
            .map_err(|e| miette::miette!("Failed to serialize recipe: {e}"))?;
        print!("{}", yaml);
        Ok(())
    }

    fn show_json(&self, recipe: &kiln::Recipe) -> Result<()> {
        // Simple manual JSON output to avoid serde_json dependency in CLI
        println!("{{");
        println!("  \"name\": \"{}\",", recipe.name);
        println!("  \"git\": \"{}\",", recipe.git);
        println!(
            "  \"versions\": [{}],",
            recipe
                .versions
                .iter()
                .map(|v| format!("\"{}\"", v.label))
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!(
            "  \"depends\": [{}]",
            recipe
                .depends
                .iter()
                .map(|d| format!("\"{}\"", d))
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!("}}");
        Ok(())
    }
}
