//! Interface de linha de comando do fsaviz baseada em clap.
//!
//! Define a struct [`Cli`] com subcomandos [`Command`] (run, check, eval, render)
//! e flags globais (--config, --lenient, --verbose).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// fsaviz — Carrega, avalia e desenha autômatos finitos.
#[derive(Debug, Parser)]
#[command(name = "fsaviz", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Caminho para o arquivo de configuração (padrão: ./fsaviz.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Aceita estados de aceitação não declarados em `states`.
    #[arg(long, global = true, default_value_t = false)]
    pub lenient: bool,

    /// Habilita saída detalhada (verbose).
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Executa o pipeline completo: carrega, avalia a string de exemplo e desenha.
    Run {
        /// Arquivo JSON com o autômato.
        #[arg(long)]
        input: Option<PathBuf>,

        /// String avaliada contra o autômato.
        #[arg(long)]
        example: Option<String>,

        /// Destino da imagem (a extensão define o formato).
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Separador de símbolos da string de exemplo.
        #[arg(long)]
        separator: Option<String>,

        /// Não abre o visualizador após desenhar.
        #[arg(long, default_value_t = false)]
        no_view: bool,
    },

    /// Valida um autômato e mostra um resumo.
    Check {
        /// Arquivo JSON com o autômato.
        file: PathBuf,
    },

    /// Avalia uma ou mais strings contra um autômato.
    Eval {
        /// Arquivo JSON com o autômato.
        file: PathBuf,

        /// Strings de entrada; cada caractere é um símbolo, salvo com --separator.
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Separador de símbolos para alfabetos com símbolos de vários caracteres.
        #[arg(long)]
        separator: Option<String>,

        /// Imprime os resultados em JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Desenha o autômato com Graphviz.
    Render {
        /// Arquivo JSON com o autômato.
        file: PathBuf,

        /// Destino da imagem (a extensão define o formato).
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Não abre o visualizador após desenhar.
        #[arg(long, default_value_t = false)]
        no_view: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_run_with_defaults() {
        let cli = Cli::parse_from(["fsaviz", "run"]);
        match cli.command {
            Command::Run {
                input,
                example,
                output,
                separator,
                no_view,
            } => {
                assert!(input.is_none());
                assert!(example.is_none());
                assert!(output.is_none());
                assert!(separator.is_none());
                assert!(!no_view);
            }
            _ => panic!("expected Run command"),
        }
    }

    #[test]
    fn cli_parses_eval_with_empty_input() {
        let cli = Cli::parse_from(["fsaviz", "eval", "fsa.json", "ab", "", "--json"]);
        match cli.command {
            Command::Eval {
                file, inputs, json, ..
            } => {
                assert_eq!(file, PathBuf::from("fsa.json"));
                assert_eq!(inputs, vec!["ab".to_string(), String::new()]);
                assert!(json);
            }
            _ => panic!("expected Eval command"),
        }
    }

    #[test]
    fn cli_parses_global_flags() {
        let cli = Cli::parse_from([
            "fsaviz",
            "--config",
            "alt.toml",
            "--lenient",
            "--verbose",
            "render",
            "fsa.json",
            "-o",
            "fsa.svg",
            "--no-view",
        ]);
        assert!(cli.verbose);
        assert!(cli.lenient);
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
        match cli.command {
            Command::Render { output, no_view, .. } => {
                assert_eq!(output, Some(PathBuf::from("fsa.svg")));
                assert!(no_view);
            }
            _ => panic!("expected Render command"),
        }
    }

    #[test]
    fn eval_requires_an_input() {
        assert!(Cli::try_parse_from(["fsaviz", "eval", "fsa.json"]).is_err());
    }

    #[test]
    fn cli_verify() {
        Cli::command().debug_assert();
    }
}
