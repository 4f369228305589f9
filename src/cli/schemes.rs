//! Schemes CLI subcommand.
//!
//! This command lists the supported line code schemes together with the name
//! to pass to `--scheme` and the number of signal samples each scheme emits
//! per message bit.

use crate::{cli::Run, encoder::Scheme};
use clap::{Parser, ValueEnum};
use std::error::Error;

/// Schemes CLI arguments.
#[derive(Debug, Parser)]
#[command(about = "Lists the supported line code schemes")]
pub struct Args {}

impl Run for Args {
    fn run(&self) -> Result<(), Box<dyn Error>> {
        for scheme in enum_iterator::all::<Scheme>() {
            let value = scheme.to_possible_value();
            let flag = value.as_ref().map(|v| v.get_name()).unwrap_or_default();
            println!(
                "{:<24} {} ({} samples/bit)",
                flag,
                scheme,
                scheme.samples_per_bit()
            );
        }
        Ok(())
    }
}
