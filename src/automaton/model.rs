use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::label::Label;
use crate::error::FsaError;

/// A single `(from, input) -> to` rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub from: Label,
    pub input: Label,
    pub to: Label,
}

/// The automaton document exactly as it appears on disk, before validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAutomaton {
    pub states: Vec<Label>,
    pub alphabet: Vec<Label>,
    pub transitions: Vec<Transition>,
    pub initial_state: Label,
    pub accept_states: Vec<Label>,
}

impl RawAutomaton {
    /// Interpret an already-parsed JSON document. Any shape mismatch
    /// (missing field, wrong type) is reported as [`FsaError::MalformedInput`].
    pub fn from_value(value: serde_json::Value) -> Result<Self, FsaError> {
        serde_json::from_value(value).map_err(|e| FsaError::MalformedInput(e.to_string()))
    }
}

/// Knobs for [`Automaton::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Reject accept states that are not declared in `states`.
    pub strict_accept_states: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            strict_accept_states: true,
        }
    }
}

impl BuildOptions {
    pub fn lenient() -> Self {
        Self {
            strict_accept_states: false,
        }
    }
}

/// A validated finite-state automaton.
///
/// Built once by [`Automaton::build`] and never mutated afterwards. All
/// sequences keep the order of the source document; transition order
/// decides which rule wins when a `(state, symbol)` pair is duplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    states: Vec<Label>,
    alphabet: Vec<Label>,
    transitions: Vec<Transition>,
    initial_state: Label,
    accept_states: Vec<Label>,
}

impl Automaton {
    /// Validate a raw description and produce the canonical automaton.
    ///
    /// Checks run in order and the first failure is returned:
    /// 1. the initial state is declared,
    /// 2. every transition references declared states and a declared symbol
    ///    (stops at the first bad transition),
    /// 3. when `options.strict_accept_states` is set, every accept state is declared.
    pub fn build(raw: RawAutomaton, options: &BuildOptions) -> Result<Self, FsaError> {
        if !raw.states.contains(&raw.initial_state) {
            return Err(FsaError::InvalidInitialState {
                state: raw.initial_state.to_string(),
            });
        }

        if let Some((index, t)) = raw.transitions.iter().enumerate().find(|(_, t)| {
            !raw.states.contains(&t.from)
                || !raw.states.contains(&t.to)
                || !raw.alphabet.contains(&t.input)
        }) {
            return Err(FsaError::InvalidTransition {
                index,
                from: t.from.to_string(),
                input: t.input.to_string(),
                to: t.to.to_string(),
            });
        }

        if options.strict_accept_states
            && let Some(state) = raw.accept_states.iter().find(|s| !raw.states.contains(*s))
        {
            return Err(FsaError::InvalidAcceptState {
                state: state.to_string(),
            });
        }

        let automaton = Self {
            states: raw.states,
            alphabet: raw.alphabet,
            transitions: raw.transitions,
            initial_state: raw.initial_state,
            accept_states: raw.accept_states,
        };

        for (from, input) in automaton.nondeterministic_pairs() {
            warn!("multiple transitions from {from} on {input}, the first one listed is used");
        }
        debug!(
            "built automaton with {} states, {} symbols and {} transitions",
            automaton.states.len(),
            automaton.alphabet.len(),
            automaton.transitions.len()
        );

        Ok(automaton)
    }

    pub fn states(&self) -> &[Label] {
        &self.states
    }

    pub fn alphabet(&self) -> &[Label] {
        &self.alphabet
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn initial_state(&self) -> &Label {
        &self.initial_state
    }

    pub fn accept_states(&self) -> &[Label] {
        &self.accept_states
    }

    pub fn is_accepting(&self, state: &Label) -> bool {
        self.accept_states.contains(state)
    }

    /// `(state, symbol)` pairs that have more than one outgoing transition,
    /// each reported once in order of first appearance.
    pub fn nondeterministic_pairs(&self) -> Vec<(&Label, &Label)> {
        let mut pairs = Vec::new();
        for (i, t) in self.transitions.iter().enumerate() {
            let key = (&t.from, &t.input);
            let repeated = self.transitions[..i]
                .iter()
                .any(|earlier| earlier.from == t.from && earlier.input == t.input);
            if repeated && !pairs.contains(&key) {
                pairs.push(key);
            }
        }
        pairs
    }
}
