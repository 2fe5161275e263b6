// Copyright (c) Contributors to the Kiln project.
// SPDX-License-Identifier: Apache-2.0

//! Validate recipe files and repository directories.

use std::ffi::OsStr;
use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use miette::Result;

/// Validate recipe files
#[derive(Debug, Args)]
pub struct CmdCheck {
    /// Recipe files or repository directories to check
    #[clap(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Exit with error on any failure
    #[clap(long)]
    strict: bool,
}

impl CmdCheck {
    pub fn run(&mut self) -> Result<i32> {
        let mut checked = 0usize;
        let mut failures = 0usize;

        for path in &self.paths {
            let files = if path.is_dir() {
                recipe_files(path)?
            } else {
                vec![path.clone()]
            };

            for file in files {
                checked += 1;
                if !check_file(&file) {
                    failures += 1;
                }
            }
        }

        if checked == 0 {
            println!("Warning: No recipe files found");
            return Ok(2);
        }

        if failures == 0 {
            println!("✓ {} recipe(s) ok", checked);
            return Ok(0);
        }

        if self.strict {
            eprintln!("Error: {} of {} recipe(s) failed validation", failures, checked);
            return Ok(1);
        }

        println!("Warning: {} of {} recipe(s) failed validation", failures, checked);
        Ok(2)
    }
}

/// Load and validate one file, reporting the outcome.
fn check_file(path: &std::path::Path) -> bool {
    let result = kiln::Recipe::load(path).and_then(|recipe| {
        recipe.validate()?;
        Ok(recipe)
    });

    match result {
        Ok(recipe) => {
            println!("  {} {} ({})", "✓".green(), path.display(), recipe.name);
            true
        }
        Err(err) => {
            println!("  {} {}: {}", "✗".red(), path.display(), err);
            false
        }
    }
}

/// Recipe files in a directory, in filename order.
fn recipe_files(dir: &std::path::Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(|e| miette::miette!("Failed to read directory {:?}: {e}", dir))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path.extension() == Some(OsStr::new(kiln::RECIPE_FILE_EXTENSION))
        })
        .collect();
    files.sort();
    Ok(files)
}
