//! # Line code toolbox
//!
//! `linecode_toolbox` is a collection of Rust utilities to work with classic
//! digital baseband line codes: NRZ-L, NRZ-I, Bipolar-AMI, Pseudoternary,
//! Manchester, and Differential Manchester. It encodes binary messages into
//! signal level sequences and renders the resulting waveforms as stepped
//! charts in the terminal.
//!
//! It can be used as a Rust library or as a CLI tool that allows access from
//! the command line to the encoders and the chart renderer. See [`cli`] for
//! documentation about the usage of the CLI tool.

#![warn(missing_docs)]

pub mod bits;
pub mod chart;
pub mod cli;
pub mod encoder;
pub mod rand;
