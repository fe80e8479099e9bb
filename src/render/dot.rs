use std::fmt;

use crate::automaton::Automaton;

const ACCEPT_FILL: &str = "lightgreen";
const STATE_FILL: &str = "skyblue";

/// Graphviz DOT view of an automaton.
///
/// One node per state and one edge per transition. Parallel edges are kept
/// as separate edges so every label stays visible. The initial state gets an
/// incoming arrow from an invisible start node.
pub struct Dot<'a>(pub &'a Automaton);

/// Render `automaton` as a DOT digraph.
pub fn to_dot(automaton: &Automaton) -> String {
    Dot(automaton).to_string()
}

impl fmt::Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fsa = self.0;
        let start = start_node_name(fsa);

        writeln!(f, "digraph fsa {{")?;
        writeln!(f, "  rankdir=LR;")?;
        writeln!(
            f,
            "  node [shape=circle, style=filled, fontname=\"Helvetica-Bold\", fontsize=12];"
        )?;
        writeln!(f, "  edge [arrowsize=1.2];")?;
        writeln!(f, "  \"{}\" [shape=point, style=invis];", escape(&start))?;

        for state in fsa.states() {
            if fsa.is_accepting(state) {
                writeln!(
                    f,
                    "  \"{}\" [shape=doublecircle, fillcolor=\"{ACCEPT_FILL}\"];",
                    escape(state)
                )?;
            } else {
                writeln!(f, "  \"{}\" [fillcolor=\"{STATE_FILL}\"];", escape(state))?;
            }
        }

        writeln!(
            f,
            "  \"{}\" -> \"{}\";",
            escape(&start),
            escape(fsa.initial_state())
        )?;

        for t in fsa.transitions() {
            writeln!(
                f,
                "  \"{}\" -> \"{}\" [label=\"{}\"];",
                escape(&t.from),
                escape(&t.to),
                escape(&t.input)
            )?;
        }

        writeln!(f, "}}")
    }
}

// A node name for the start arrow that cannot clash with a state.
fn start_node_name(fsa: &Automaton) -> String {
    let mut name = String::from("__start");
    while fsa.states().iter().any(|s| s.to_string() == name) {
        name.push('_');
    }
    name
}

fn escape(id: &impl fmt::Display) -> String {
    id.to_string().replace('\\', "\\\\").replace('"', "\\\"")
}
