//! Stepped waveform charts.
//!
//! This module contains the presentation helpers layered on top of the
//! encoders: the final-state append, the per-sample label generator, and a
//! renderer that draws a signal as a stepped chart made of box-drawing
//! characters, suitable for printing to a terminal.
//!
//! None of this is part of the encoding semantics. In particular
//! [`append_final_state`] only exists so that a stepped chart draws a full
//! horizontal segment for the last bit interval; the encoders themselves
//! never emit it.
//!
//! # Examples
//! ```
//! use linecode_toolbox::{bits, chart, encoder};
//!
//! let message = bits::parse("1011").unwrap();
//! let signal = chart::append_final_state(encoder::nrz_i(&message));
//! println!("{}", chart::render(&signal));
//! ```

use crate::bits::Bit;
use crate::encoder::{Level, Scheme};

/// Number of chart columns occupied by each signal sample.
const SAMPLE_WIDTH: usize = 4;

/// Width of the level gutter at the left of each chart row.
const GUTTER_WIDTH: usize = 3;

/// Appends a copy of the last sample to a signal.
///
/// A stepped chart draws each sample as a horizontal segment starting at the
/// sample's position, so without this the final bit interval would have no
/// visible segment. An empty signal is returned unchanged.
pub fn append_final_state(mut signal: Vec<Level>) -> Vec<Level> {
    if let Some(&last) = signal.last() {
        signal.push(last);
    }
    signal
}

/// Generates one chart label per signal sample.
///
/// Each message bit labels the sample at the start of its interval, and one
/// trailing blank aligns with the sample added by [`append_final_state`]. For
/// the double-rate schemes every label (including the trailing blank) is
/// followed by an interleaved blank, so the mid-bit samples stay unlabeled.
pub fn labels(message: &[Bit], scheme: Scheme) -> Vec<String> {
    let mut labels: Vec<String> = message.iter().map(|bit| bit.to_string()).collect();
    labels.push(String::new());
    if scheme.samples_per_bit() == 2 {
        labels
            .into_iter()
            .flat_map(|label| [label, String::new()])
            .collect()
    } else {
        labels
    }
}

/// Renders a signal as a stepped chart.
///
/// Each distinct level in the signal gets one chart row, topmost level first,
/// with a `+1`/` 0`/`-1` gutter. Samples are drawn as horizontal runs and
/// level changes as vertical connectors at the sample boundary. The output is
/// plain text with no trailing whitespace; an empty signal renders as an
/// empty string.
pub fn render(signal: &[Level]) -> String {
    render_with_labels(signal, &[])
}

/// Renders a signal as a stepped chart with a label row underneath.
///
/// Labels are placed at the boundary column of their sample, i.e. a bit label
/// sits at the start of the bit interval. Labels beyond the signal length
/// (the trailing blanks produced by [`labels`] for double-rate schemes) are
/// ignored. Passing an empty label slice omits the label row.
pub fn render_with_labels(signal: &[Level], labels: &[String]) -> String {
    if signal.is_empty() {
        return String::new();
    }
    let max = signal.iter().copied().max().unwrap_or(0);
    let min = signal.iter().copied().min().unwrap_or(0);
    let num_rows = (max - min + 1) as usize;
    let num_cols = SAMPLE_WIDTH * signal.len();
    let row_of = |level: Level| (max - level) as usize;

    let mut grid = vec![vec![' '; num_cols]; num_rows];
    for (j, &level) in signal.iter().enumerate() {
        let col = SAMPLE_WIDTH * j;
        match signal[..j].last() {
            Some(&previous) if previous != level => {
                // Vertical connector at the sample boundary.
                let (lo, hi) = (previous.min(level), previous.max(level));
                for l in lo + 1..hi {
                    grid[row_of(l)][col] = '│';
                }
                if level < previous {
                    grid[row_of(previous)][col] = '┐';
                    grid[row_of(level)][col] = '└';
                } else {
                    grid[row_of(previous)][col] = '┘';
                    grid[row_of(level)][col] = '┌';
                }
            }
            _ => grid[row_of(level)][col] = '─',
        }
        for c in col + 1..col + SAMPLE_WIDTH {
            grid[row_of(level)][c] = '─';
        }
    }

    let mut out = String::new();
    for (row, cells) in grid.iter().enumerate() {
        let level = max - row as Level;
        let gutter = match level {
            1 => "+1 ",
            0 => " 0 ",
            _ => "-1 ",
        };
        out.push_str(gutter);
        let line: String = cells.iter().collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    if !labels.is_empty() {
        let mut line = vec![' '; GUTTER_WIDTH + num_cols];
        for (j, label) in labels.iter().enumerate().take(signal.len()) {
            if let Some(c) = label.chars().next() {
                line[GUTTER_WIDTH + SAMPLE_WIDTH * j] = c;
            }
        }
        let line: String = line.into_iter().collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    // Drop the final newline so the caller decides the separator.
    out.pop();
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bits::parse;
    use crate::encoder;

    #[test]
    fn append_final_state_empty() {
        assert_eq!(append_final_state(Vec::new()), Vec::new());
    }

    #[test]
    fn append_final_state_repeats_last() {
        assert_eq!(append_final_state(vec![1, -1, 0]), vec![1, -1, 0, 0]);
    }

    #[test]
    fn label_counts() {
        let message = parse("10110").unwrap();
        assert_eq!(labels(&message, Scheme::NrzL).len(), 6);
        assert_eq!(labels(&message, Scheme::Manchester).len(), 12);
    }

    #[test]
    fn labels_single_rate() {
        let message = parse("10").unwrap();
        assert_eq!(labels(&message, Scheme::NrzI), vec!["1", "0", ""]);
    }

    #[test]
    fn labels_double_rate_interleaves_blanks() {
        let message = parse("10").unwrap();
        assert_eq!(
            labels(&message, Scheme::DifferentialManchester),
            vec!["1", "", "0", "", "", ""]
        );
    }

    #[test]
    fn render_empty_signal() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn render_flat_signal() {
        assert_eq!(render(&[0]), " 0 ────");
    }

    #[test]
    fn render_nrz_i_waveform() {
        let signal = append_final_state(encoder::nrz_i(&parse("1011").unwrap()));
        assert_eq!(signal, vec![1, 1, 0, 1, 1]);
        let expected = "\
+1 ────────┐   ┌───────
 0         └───┘";
        assert_eq!(render(&signal), expected);
    }

    #[test]
    fn render_three_level_waveform() {
        let signal = append_final_state(encoder::bipolar_ami(&parse("1101").unwrap()));
        assert_eq!(signal, vec![1, -1, 0, 1, 1]);
        let expected = "\
+1 ────┐       ┌───────
 0     │   ┌───┘
-1     └───┘";
        assert_eq!(render(&signal), expected);
    }

    #[test]
    fn render_places_labels_at_bit_starts() {
        let message = parse("1011").unwrap();
        let signal = append_final_state(encoder::nrz_i(&message));
        let chart = render_with_labels(&signal, &labels(&message, Scheme::NrzI));
        let expected = "\
+1 ────────┐   ┌───────
 0         └───┘
   1   0   1   1";
        assert_eq!(chart, expected);
    }

    #[test]
    fn render_double_rate_labels() {
        let message = parse("01").unwrap();
        let signal = append_final_state(encoder::manchester(&message));
        assert_eq!(signal, vec![1, 0, 0, 1, 1]);
        let chart = render_with_labels(&signal, &labels(&message, Scheme::Manchester));
        let expected = "\
+1 ────┐       ┌───────
 0     └───────┘
   0       1";
        assert_eq!(chart, expected);
    }
}
