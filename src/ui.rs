//! Interface de terminal do fsaviz — spinner e saída colorida.
//!
//! Usa as crates `indicatif` para o spinner de renderização e `console` para
//! estilização com cores. Toda a saída destinada ao usuário passa por aqui;
//! diagnósticos internos vão para o `log`.

use std::path::Path;
use std::time::Duration;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::automaton::{Automaton, Label, Run};
use crate::error::FsaError;
use crate::report::EvaluationRecord;

/// Imprime o veredito de uma avaliação, com o caminho percorrido.
pub fn print_verdict(input: &str, run: &Run<'_>) {
    let (mark, style) = if run.accepted() {
        ("✓", Style::new().green().bold())
    } else {
        ("✗", Style::new().red().bold())
    };
    let dim = Style::new().dim();

    println!(
        "  {} Is the string {input:?} accepted? : {}",
        style.apply_to(mark),
        style.apply_to(run.accepted())
    );
    println!(
        "    {} {}",
        dim.apply_to(join(run.path.iter().copied(), " → ")),
        dim.apply_to(format!("({})", run.verdict))
    );
}

/// Imprime um resumo do autômato validado.
pub fn print_summary(path: &Path, automaton: &Automaton) {
    let green = Style::new().green().bold();
    let yellow = Style::new().yellow();

    println!("  {} {} is a valid automaton", green.apply_to("✓"), path.display());
    println!("    states:      {}", join(automaton.states(), ", "));
    println!("    alphabet:    {}", join(automaton.alphabet(), ", "));
    println!("    transitions: {}", automaton.transitions().len());
    println!("    initial:     {}", automaton.initial_state());
    println!("    accepting:   {}", join(automaton.accept_states(), ", "));
    println!(
        "    empty input: {}",
        if automaton.accepts(std::iter::empty::<&str>()) {
            "accepted"
        } else {
            "rejected"
        }
    );

    for (state, symbol) in automaton.nondeterministic_pairs() {
        println!(
            "  {} several transitions from {state} on {symbol}; the first listed wins",
            yellow.apply_to("!")
        );
    }
}

/// Imprime os registros de avaliação em JSON formatado.
pub fn print_records(records: &[EvaluationRecord]) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(records)?);
    Ok(())
}

// Junta rótulos com o separador informado.
fn join<'a>(labels: impl IntoIterator<Item = &'a Label>, separator: &str) -> String {
    labels
        .into_iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Imprime um erro em vermelho, com a classificação quando disponível.
pub fn print_error(err: &anyhow::Error) {
    let red = Style::new().red().bold();
    match err.downcast_ref::<FsaError>() {
        Some(fsa_err) => {
            eprintln!("  {} {err:#} [{}]", red.apply_to("✗"), fsa_err.kind());
            if fsa_err.is_validation() {
                eprintln!("    Fix the automaton definition and try again.");
            }
        }
        None => eprintln!("  {} {err:#}", red.apply_to("✗")),
    }
}

/// Indicador visual enquanto o Graphviz desenha o autômato.
pub struct RenderProgress {
    // Spinner do indicatif.
    pb: ProgressBar,
}

impl RenderProgress {
    /// Inicia o spinner para o destino informado.
    pub fn start(destination: &Path) -> Self {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(format!("Rendering {}", destination.display()));
        pb.enable_steady_tick(Duration::from_millis(100));
        Self { pb }
    }

    /// Finaliza o spinner e mostra o destino gerado.
    pub fn finish(&self, destination: &Path) {
        self.pb.finish_and_clear();
        println!(
            "  {} Rendered {}",
            Style::new().green().bold().apply_to("✓"),
            destination.display()
        );
    }

    /// Remove o spinner sem mensagem, deixando o erro para o chamador.
    pub fn abandon(&self) {
        self.pb.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::{BuildOptions, load_from_str, split_symbols};

    #[test]
    fn join_uses_label_spelling() {
        let labels = [Label::from("q0"), Label::from(1u64), Label::Bool(true)];
        assert_eq!(join(&labels, ", "), "q0, 1, true");
        assert_eq!(join(&[] as &[Label], ", "), "");
    }

    #[test]
    fn print_records_reports_success() {
        let fsa = load_from_str(
            r#"{"states": [0], "alphabet": ["a"], "transitions": [],
                "initialState": 0, "acceptStates": [0]}"#,
            &BuildOptions::default(),
        )
        .unwrap();
        let symbols = split_symbols("", None);
        let run = fsa.run(&symbols);
        let record = EvaluationRecord::new("", symbols.clone(), &run);

        assert!(print_records(&[record]).is_ok());
    }
}
