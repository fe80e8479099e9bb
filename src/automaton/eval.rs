use std::fmt;

use log::trace;
use serde::Serialize;

use super::label::Label;
use super::model::Automaton;

/// Outcome of running an input through an automaton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    /// Every symbol was consumed and the run ended in an accepting state.
    Accepted,
    /// Every symbol was consumed but the run ended in a non-accepting state.
    Rejected,
    /// No transition for `symbol` out of `state`; the rest of the input was not read.
    Stuck {
        state: String,
        symbol: String,
        position: usize,
    },
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accepted => write!(f, "accepted"),
            Verdict::Rejected => write!(f, "rejected"),
            Verdict::Stuck {
                state,
                symbol,
                position,
            } => write!(
                f,
                "rejected: no transition from {state:?} on {symbol:?} at position {position}"
            ),
        }
    }
}

/// Trace of a single evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run<'a> {
    /// Visited states, starting with the initial state.
    pub path: Vec<&'a Label>,
    /// Number of symbols consumed before the run ended.
    pub consumed: usize,
    pub verdict: Verdict,
}

impl<'a> Run<'a> {
    pub fn accepted(&self) -> bool {
        self.verdict.is_accepted()
    }

    /// State the run stopped in.
    pub fn final_state(&self) -> Option<&'a Label> {
        self.path.last().copied()
    }
}

impl Automaton {
    /// Target of the first transition listed for `(state, symbol)`.
    pub fn next_state(&self, state: &Label, symbol: &str) -> Option<&Label> {
        self.transitions()
            .iter()
            .find(|t| t.from == *state && t.input.matches_str(symbol))
            .map(|t| &t.to)
    }

    /// Follow `symbols` from the initial state, stopping at the first symbol
    /// that has no transition.
    pub fn run<I, S>(&self, symbols: I) -> Run<'_>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut current = self.initial_state();
        let mut path = vec![current];

        for (position, symbol) in symbols.into_iter().enumerate() {
            let symbol = symbol.as_ref();
            match self.next_state(current, symbol) {
                Some(next) => {
                    trace!("{current} --{symbol}--> {next}");
                    current = next;
                    path.push(current);
                }
                None => {
                    trace!("{current} has no transition on {symbol:?}");
                    return Run {
                        path,
                        consumed: position,
                        verdict: Verdict::Stuck {
                            state: current.to_string(),
                            symbol: symbol.to_string(),
                            position,
                        },
                    };
                }
            }
        }

        let verdict = if self.is_accepting(current) {
            Verdict::Accepted
        } else {
            Verdict::Rejected
        };
        Run {
            consumed: path.len() - 1,
            path,
            verdict,
        }
    }

    /// Whether the automaton accepts `symbols`.
    pub fn accepts<I, S>(&self, symbols: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.run(symbols).accepted()
    }
}

/// Split a command-line string into symbols.
///
/// Without a separator every character is one symbol. With a separator the
/// string is split on it and empty pieces are dropped, so `"ab,cd,"` with
/// `","` yields `["ab", "cd"]`.
pub fn split_symbols(input: &str, separator: Option<&str>) -> Vec<String> {
    match separator {
        Some(sep) if !sep.is_empty() => input
            .split(sep)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
        _ => input.chars().map(String::from).collect(),
    }
}
