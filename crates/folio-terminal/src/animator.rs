//! Typing animator: reveals a finished text block one unit per tick.
//!
//! A `Reveal` owns the pacing state of one line. It is driven by elapsed
//! milliseconds rather than wall-clock timers, so the same sequence of
//! `advance` calls always produces the same buffer states.

use folio_types::config::{Granularity, PacingConfig};

use crate::buffer::{LineBuffer, LineId, LineKind};

/// Split `text` into reveal units.
///
/// Character granularity yields one unit per `char`. Word granularity yields
/// maximal runs of non-whitespace and of whitespace, so concatenating the
/// units always restores `text` exactly.
pub fn split_units(text: &str, granularity: Granularity) -> Vec<String> {
    match granularity {
        Granularity::Char => text.chars().map(String::from).collect(),
        Granularity::Word => {
            let mut units: Vec<String> = Vec::new();
            let mut current = String::new();
            let mut current_ws = false;
            for ch in text.chars() {
                let ws = ch.is_whitespace();
                if !current.is_empty() && ws != current_ws {
                    units.push(std::mem::take(&mut current));
                }
                current_ws = ws;
                current.push(ch);
            }
            if !current.is_empty() {
                units.push(current);
            }
            units
        },
    }
}

/// Delay before the first unit of a reveal.
pub fn initial_delay(pacing: &PacingConfig) -> u32 {
    match pacing.granularity {
        Granularity::Char => pacing.base_ms,
        Granularity::Word => pacing.word_ms,
    }
}

/// Delay after `unit` has been revealed, before the next one.
pub fn delay_after(unit: &str, pacing: &PacingConfig) -> u32 {
    if pacing.granularity == Granularity::Word {
        return pacing.word_ms;
    }
    match unit.chars().next() {
        Some(' ') => pacing.space_ms,
        Some('\n') => pacing.newline_ms,
        Some('.' | '!' | '?') => pacing.sentence_ms,
        Some(',' | ';' | ':') => pacing.clause_ms,
        _ => pacing.base_ms,
    }
}

/// Result of advancing a reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// More units remain; all of the elapsed time was consumed.
    Running,
    /// The last unit was shown. `leftover_ms` of the elapsed time is unused.
    Done { leftover_ms: u32 },
    /// The target line is no longer in the buffer. Nothing was mutated.
    Orphaned,
}

/// In-flight reveal of one line.
#[derive(Debug)]
pub struct Reveal {
    line: LineId,
    units: Vec<String>,
    revealed: usize,
    shown: String,
    wait_ms: u32,
}

impl Reveal {
    /// Append an empty line of `kind` and prepare to reveal `text` into it.
    ///
    /// The line is appended before this returns. Returns `None` when `text`
    /// is empty: the line is appended already complete and never animates.
    pub fn start(
        buffer: &mut LineBuffer,
        text: &str,
        kind: LineKind,
        pacing: &PacingConfig,
    ) -> Option<Self> {
        if text.is_empty() {
            buffer.append(kind, "", false);
            return None;
        }
        let line = buffer.append(kind, "", true);
        log::trace!("reveal {line:?} started ({} chars)", text.len());
        Some(Self {
            line,
            units: split_units(text, pacing.granularity),
            revealed: 0,
            shown: String::with_capacity(text.len()),
            wait_ms: initial_delay(pacing),
        })
    }

    /// Line this reveal writes into.
    pub fn line(&self) -> LineId {
        self.line
    }

    /// Spend `dt_ms` of elapsed time, revealing as many units as are due.
    pub fn advance(&mut self, buffer: &mut LineBuffer, dt_ms: u32, pacing: &PacingConfig) -> Progress {
        let mut budget = dt_ms;
        loop {
            if budget < self.wait_ms {
                self.wait_ms -= budget;
                return Progress::Running;
            }
            budget -= self.wait_ms;

            if !buffer.contains(self.line) {
                log::trace!("reveal {:?} orphaned", self.line);
                return Progress::Orphaned;
            }

            let unit = &self.units[self.revealed];
            self.shown.push_str(unit);
            self.revealed += 1;
            self.wait_ms = delay_after(unit, pacing);
            buffer.replace_text(self.line, &self.shown);

            if self.revealed == self.units.len() {
                buffer.finish(self.line);
                log::trace!("reveal {:?} done", self.line);
                return Progress::Done {
                    leftover_ms: budget,
                };
            }
        }
    }
}
