// Copyright (c) Contributors to the Kiln project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `kiln init` command.

use clap::Args;
use miette::Result;
use std::path::PathBuf;

/// Create a new recipe file
#[derive(Debug, Args)]
pub struct CmdInit {
    /// Package name for the new recipe
    name: String,

    /// Directory to create the file in
    #[clap(short = 'd', long, default_value = ".")]
    dir: PathBuf,

    /// Add initial dependency
    #[clap(long = "depends")]
    depends: Vec<String>,

    /// Template to use: minimal, standard
    #[clap(long, default_value = "standard")]
    template: String,
}

impl CmdInit {
    pub fn run(&mut self) -> Result<i32> {
        let recipe_path = self
            .dir
            .join(format!("{}.{}", self.name, kiln::RECIPE_FILE_EXTENSION));

        // Check if file already exists
        if recipe_path.exists() {
            return Err(miette::miette!(
                "Recipe file already exists at {:?}",
                recipe_path
            ));
        }

        // Generate template based on option
        let content = match self.template.as_str() {
            "minimal" => self.generate_minimal_template(),
            _ => self.generate_standard_template(),
        };

        // Write file
        std::fs::write(&recipe_path, content)
            .map_err(|e| miette::miette!("Failed to write recipe file: {}", e))?;

        println!("Created recipe at {:?}", recipe_path);
        println!();
        println!("Next steps:");
        println!("  1. Edit the file to point at the real source repository");
        println!("  2. Run 'kiln check {}' to validate it", recipe_path.display());
        println!(
            "  3. Run 'kiln show {} --repo {}' to preview it",
            self.name,
            self.dir.display()
        );

        Ok(0)
    }

    fn generate_minimal_template(&self) -> String {
        format!(
            "api: kiln/v0\n\
            name: {name}\n\
            git: https://example.com/{name}.git\n\
            \n\
            versions:\n\
            \x20 - label: main\n\
            \x20   branch: main\n",
            name = self.name
        )
    }

    fn generate_standard_template(&self) -> String {
        let depends_section = if self.depends.is_empty() {
            "# depends:\n\
            #   - mpicpp\n\
            #   - kokkos\n"
                .to_string()
        } else {
            format!(
                "depends:\n{}\n",
                self.depends
                    .iter()
                    .map(|d| format!("  - {}", d))
                    .collect::<Vec<_>>()
                    .join("\n")
            )
        };

        format!(
            "# kiln build recipe\n\
            # One package per file; the host installs depends before configuring\n\
            \n\
            api: kiln/v0\n\
            \n\
            name: {name}\n\
            \n\
            # Optional: Human-readable description\n\
            # description: \"What this package provides\"\n\
            \n\
            # Optional: Project homepage\n\
            # homepage: https://example.com/{name}\n\
            \n\
            # Source repository the host clones from\n\
            git: https://example.com/{name}.git\n\
            \n\
            # Available versions: a tracked branch, or a fixed tag/commit\n\
            versions:\n\
            \x20 - label: main\n\
            \x20   branch: main\n\
            #  - label: \"1.0.0\"\n\
            #    tag: v1.0.0\n\
            \n\
            # Build-time dependencies; each becomes a -D<name>_ROOT=<prefix>\n\
            # argument at configure time\n\
            {depends}\
            \n\
            # Optional: forwarding order override for configure arguments\n\
            # configure:\n\
            #   roots:\n\
            #     - kokkos\n\
            #     - mpicpp\n",
            name = self.name,
            depends = depends_section,
        )
    }
}
