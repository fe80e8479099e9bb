//! Configuração do fsaviz carregada a partir de `fsaviz.toml`.
//!
//! A struct [`FsaConfig`] contém todos os parâmetros configuráveis.
//! Valores não presentes no arquivo usam defaults sensíveis.
//! A variável de ambiente `FSAVIZ_DOT` tem precedência sobre o arquivo.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::automaton::BuildOptions;
use crate::error::FsaError;
use crate::render::Renderer;

/// Nome do arquivo de configuração procurado no diretório atual.
pub const CONFIG_FILE: &str = "fsaviz.toml";

/// Configuração de nível superior carregada de `fsaviz.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct FsaConfig {
    /// Arquivo JSON com a definição do autômato.
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// String de exemplo avaliada pelo comando `run`.
    #[serde(default = "default_example")]
    pub example: String,

    /// Destino da imagem gerada.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Executável do Graphviz.
    #[serde(default = "default_dot_command")]
    pub dot_command: String,

    /// Visualizador de imagens; usa o padrão da plataforma se ausente.
    #[serde(default)]
    pub viewer: Option<String>,

    /// Abre a imagem após a renderização.
    #[serde(default = "default_true")]
    pub view: bool,

    /// Rejeita estados de aceitação não declarados em `states`.
    #[serde(default = "default_true")]
    pub strict_accept_states: bool,

    /// Separador de símbolos; sem ele cada caractere é um símbolo.
    #[serde(default)]
    pub separator: Option<String>,
}

fn default_input() -> PathBuf {
    PathBuf::from("fsa_model.json")
}

fn default_example() -> String {
    "abb".to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("fsa.png")
}

fn default_dot_command() -> String {
    "dot".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for FsaConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            example: default_example(),
            output: default_output(),
            dot_command: default_dot_command(),
            viewer: None,
            view: true,
            strict_accept_states: true,
            separator: None,
        }
    }
}

impl FsaConfig {
    /// Carrega a configuração de `path`, ou de `fsaviz.toml` no diretório atual.
    ///
    /// Sem caminho explícito, a ausência do arquivo resulta nos valores padrão.
    /// Um caminho explícito inexistente é um erro.
    pub fn load(path: Option<&Path>) -> Result<Self, FsaError> {
        let mut config = match path {
            Some(path) if !path.exists() => {
                return Err(FsaError::Config(format!(
                    "config file {} does not exist",
                    path.display()
                )));
            }
            Some(path) => Self::from_file(path)?,
            None if Path::new(CONFIG_FILE).exists() => Self::from_file(Path::new(CONFIG_FILE))?,
            None => Self::default(),
        };

        // Variável de ambiente tem precedência sobre o arquivo de configuração.
        if let Ok(dot) = std::env::var("FSAVIZ_DOT")
            && !dot.is_empty()
        {
            config.dot_command = dot;
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, FsaError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str::<FsaConfig>(&contents)?)
    }

    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            strict_accept_states: self.strict_accept_states,
        }
    }

    pub fn renderer(&self) -> Renderer {
        Renderer::new(self.dot_command.clone(), self.viewer.clone())
    }
}
