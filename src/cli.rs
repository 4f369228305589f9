//! `linecode-toolbox` CLI application
//!
//! The CLI application is organized in several subcommands. The
//! supported subcommands can be seen by running `linecode-toolbox`.
//! See the modules below for examples and more information about
//! how to use each subcommand.

use clap::Parser;
use std::error::Error;

pub mod chart;
pub mod encode;
pub mod schemes;

/// Trait to run a CLI subcommand
pub trait Run {
    /// Run the CLI subcommand
    fn run(&self) -> Result<(), Box<dyn Error>>;
}

/// CLI arguments.
#[derive(Debug, Parser)]
#[command(author, version, name = "linecode-toolbox", about = "Line code toolbox")]
pub enum Args {
    /// chart subcommand
    Chart(chart::Args),
    /// encode subcommand
    Encode(encode::Args),
    /// schemes subcommand
    Schemes(schemes::Args),
}

impl Run for Args {
    fn run(&self) -> Result<(), Box<dyn Error>> {
        match self {
            Args::Chart(x) => x.run(),
            Args::Encode(x) => x.run(),
            Args::Schemes(x) => x.run(),
        }
    }
}
