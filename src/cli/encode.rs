//! Encode CLI subcommand.
//!
//! This command encodes a binary message with one line code scheme, or with
//! all six, and prints the resulting signal levels.
//!
//! # Examples
//!
//! ```shell
//! $ linecode-toolbox encode 1011
//! $ linecode-toolbox encode --scheme bipolar-ami --final-state 1101
//! ```

use crate::{bits, cli::Run, encoder::Scheme};
use clap::Parser;
use std::error::Error;

/// Encode CLI arguments.
#[derive(Debug, Parser)]
#[command(about = "Encodes a binary message into signal levels")]
pub struct Args {
    /// Binary message (e.g. "1011001")
    pub data: String,
    /// Scheme to use (all schemes if omitted)
    #[arg(long)]
    pub scheme: Option<Scheme>,
    /// Append a repeated final sample, as the stepped charts do
    #[arg(long)]
    pub final_state: bool,
}

impl Run for Args {
    fn run(&self) -> Result<(), Box<dyn Error>> {
        let message = bits::parse(&self.data)?;
        let schemes: Vec<Scheme> = match self.scheme {
            Some(scheme) => vec![scheme],
            None => enum_iterator::all().collect(),
        };
        for scheme in schemes {
            let mut signal = scheme.encode(&message);
            if self.final_state {
                signal = crate::chart::append_final_state(signal);
            }
            let levels = signal
                .iter()
                .map(|level| level.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            println!("{}: {}", scheme, levels);
        }
        Ok(())
    }
}
