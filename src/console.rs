//! Line-oriented console I/O.
//!
//! Stdin is read on a dedicated OS thread and forwarded through an unbounded
//! channel. Waiting on the channel can be abandoned at any time (the game does
//! so when the clock runs out) without losing or tearing a line.

use crate::session::GameError;
use std::io::{BufRead, Write};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

/// Spawn the stdin reader thread.
///
/// The returned receiver yields one entry per line without its terminator, and
/// closes when stdin reaches end of stream or becomes unreadable.
pub fn spawn_stdin_reader() -> UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || forward_lines(std::io::stdin().lock(), tx));
    rx
}

fn forward_lines(reader: impl BufRead, tx: UnboundedSender<String>) {
    for line in reader.lines() {
        match line {
            Ok(line) => {
                if tx.send(line).is_err() {
                    // Game is over; nobody is listening
                    return;
                }
            }
            Err(e) => {
                warn!("Failed to read from stdin: {}", e);
                return;
            }
        }
    }
    debug!("Stdin reached end of stream");
}

/// Input channel plus an output sink.
pub struct Console<W: Write> {
    input: UnboundedReceiver<String>,
    output: W,
}

impl<W: Write> Console<W> {
    pub fn new(input: UnboundedReceiver<String>, output: W) -> Self {
        Self { input, output }
    }

    /// Wait for the next line, lowercased.
    ///
    /// Cancel safe: dropping the future before it completes leaves any pending
    /// line in the channel for the next call.
    pub async fn read_line(&mut self) -> Result<String, GameError> {
        let line = self.input.recv().await.ok_or(GameError::InputClosed)?;
        Ok(normalize(&line))
    }

    /// Drop every line already queued without waiting for more.
    ///
    /// Returns how many lines were dropped. A closed channel is left for the
    /// next `read_line` to report.
    pub fn discard_pending(&mut self) -> usize {
        let mut dropped = 0;
        while self.input.try_recv().is_ok() {
            dropped += 1;
        }
        dropped
    }

    /// Write one line and flush, so prompts show before the game blocks on input.
    pub fn say(&mut self, message: &str) -> Result<(), GameError> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Strip any stray line terminator and lowercase.
fn normalize(line: &str) -> String {
    line.trim_end_matches(['\r', '\n']).to_lowercase()
}
