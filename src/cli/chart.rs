//! Chart CLI subcommand.
//!
//! This command renders the stepped waveform chart of a binary message for
//! one line code scheme, or for all six, with the message bits as labels
//! under the chart. The message can be given directly or generated randomly
//! with a reproducible seed.
//!
//! # Examples
//!
//! ```shell
//! $ linecode-toolbox chart 1011001
//! $ linecode-toolbox chart --scheme manchester 1011001
//! $ linecode-toolbox chart --random 16 --seed 42
//! ```

use crate::{
    bits::{self, Bit},
    chart,
    cli::Run,
    encoder::Scheme,
    rand::random_message,
};
use clap::Parser;
use console::{style, Term};
use std::error::Error;

/// Chart CLI arguments.
#[derive(Debug, Parser)]
#[command(about = "Renders stepped waveform charts for a binary message")]
pub struct Args {
    /// Binary message (e.g. "1011001")
    #[arg(required_unless_present = "random")]
    pub data: Option<String>,
    /// Scheme to chart (all schemes if omitted)
    #[arg(long)]
    pub scheme: Option<Scheme>,
    /// Chart a random message with this many bits instead of DATA
    #[arg(long, conflicts_with = "data")]
    pub random: Option<usize>,
    /// Seed for the random message
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

impl Args {
    fn message(&self) -> Result<Vec<Bit>, Box<dyn Error>> {
        let message = match (&self.data, self.random) {
            (_, Some(len)) => random_message(len, self.seed),
            (Some(data), None) => bits::parse(data)?,
            (None, None) => unreachable!("clap requires DATA or --random"),
        };
        if message.is_empty() {
            return Err("the message must contain at least one bit".into());
        }
        Ok(message)
    }
}

impl Run for Args {
    fn run(&self) -> Result<(), Box<dyn Error>> {
        let message = self.message()?;
        let schemes: Vec<Scheme> = match self.scheme {
            Some(scheme) => vec![scheme],
            None => enum_iterator::all().collect(),
        };
        let term = Term::stdout();
        let text: String = message.iter().map(|bit| bit.to_string()).collect();
        term.write_line(&format!("message: {}", text))?;
        for scheme in schemes {
            let signal = chart::append_final_state(scheme.encode(&message));
            let labels = chart::labels(&message, scheme);
            term.write_line("")?;
            term.write_line(&style(scheme).bold().to_string())?;
            term.write_line(&chart::render_with_labels(&signal, &labels))?;
        }
        Ok(())
    }
}
