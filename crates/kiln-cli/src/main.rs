// Copyright (c) Contributors to the Kiln project.
// SPDX-License-Identifier: Apache-2.0

//! kiln - Package Build Recipe Manager CLI

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::Result;

mod cmd_check;
mod cmd_configure;
mod cmd_init;
mod cmd_list;
mod cmd_show;

use cmd_check::CmdCheck;
use cmd_configure::CmdConfigure;
use cmd_init::CmdInit;
use cmd_list::CmdList;
use cmd_show::CmdShow;

#[derive(Parser)]
#[clap(
    name = "kiln",
    about = "Package build recipe manager",
    version,
    long_about = "Inspect, validate, and exercise declarative build recipes for source packages"
)]
struct Opt {
    #[clap(flatten)]
    logging: Logging,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Parser)]
struct Logging {
    /// Increase verbosity (-v, -vv, -vvv)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[clap(short, long)]
    quiet: bool,
}

#[derive(Parser, Clone, Debug, Default)]
pub struct RepoFlags {
    /// Additional recipe repository directories
    #[clap(long = "repo", short = 'r', env = "KILN_RECIPE_PATH")]
    pub repos: Vec<PathBuf>,

    /// Skip the compiled-in recipes
    #[clap(long = "no-builtin", env = "KILN_NO_BUILTIN")]
    pub no_builtin: bool,
}

impl RepoFlags {
    /// Build a registry from the selected recipe sources.
    pub fn load_registry(&self) -> Result<kiln::Registry> {
        let mut registry = if self.no_builtin {
            kiln::Registry::new()
        } else {
            kiln::builtin_registry().clone()
        };

        for dir in &self.repos {
            let loaded = registry.load_dir(dir)?;
            tracing::debug!(dir = %dir.display(), loaded, "loaded recipe repository");
        }

        Ok(registry)
    }
}

#[derive(Subcommand)]
enum Command {
    /// Create a new recipe file
    Init(CmdInit),

    /// List known recipes
    List(CmdList),

    /// Display one recipe
    Show(CmdShow),

    /// Validate recipe files
    Check(CmdCheck),

    /// Derive configure arguments from resolved dependencies
    Configure(CmdConfigure),
}

impl Opt {
    fn run(self) -> Result<i32> {
        // Setup logging
        let log_level = match (self.logging.quiet, self.logging.verbose) {
            (true, _) => tracing::Level::ERROR,
            (false, 0) => tracing::Level::WARN,
            (false, 1) => tracing::Level::INFO,
            (false, 2) => tracing::Level::DEBUG,
            (false, _) => tracing::Level::TRACE,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .init();

        // Dispatch to command
        match self.cmd {
            Command::Init(mut cmd) => cmd.run(),
            Command::List(mut cmd) => cmd.run(),
            Command::Show(mut cmd) => cmd.run(),
            Command::Check(mut cmd) => cmd.run(),
            Command::Configure(mut cmd) => cmd.run(),
        }
    }
}

fn main() -> Result<()> {
    let opt = Opt::parse();
    let code = opt.run()?;
    std::process::exit(code);
}
