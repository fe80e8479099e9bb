use thiserror::Error;

#[derive(Debug, Error)]
pub enum FsaError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Malformed automaton definition: {0}")]
    MalformedInput(String),

    #[error("Invalid initial state: {state:?} is not a declared state")]
    InvalidInitialState { state: String },

    #[error("Invalid transition #{index}: ({from:?}, {input:?}) -> {to:?}")]
    InvalidTransition {
        index: usize,
        from: String,
        input: String,
        to: String,
    },

    #[error("Invalid accept state: {state:?} is not a declared state")]
    InvalidAcceptState { state: String },

    #[error("Renderer `{command}` not found. Is Graphviz installed?")]
    RendererNotFound { command: String },

    #[error("Renderer `{command}` exited with {status}: {stderr}")]
    RendererFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("Could not open viewer `{command}`: {source}")]
    Viewer {
        command: String,
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl FsaError {
    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            FsaError::FileNotFound { .. } => "file_not_found",
            FsaError::Io(_) => "io",
            FsaError::Parse(_) => "parse",
            FsaError::MalformedInput(_) => "malformed_input",
            FsaError::InvalidInitialState { .. } => "invalid_initial_state",
            FsaError::InvalidTransition { .. } => "invalid_transition",
            FsaError::InvalidAcceptState { .. } => "invalid_accept_state",
            FsaError::RendererNotFound { .. } => "renderer_not_found",
            FsaError::RendererFailed { .. } => "renderer_failed",
            FsaError::Viewer { .. } => "viewer",
            FsaError::Config(_) => "config",
            FsaError::Toml(_) => "toml",
        }
    }

    /// Whether the error came from validating the automaton itself, as
    /// opposed to reading it or drawing it.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            FsaError::MalformedInput(_)
                | FsaError::InvalidInitialState { .. }
                | FsaError::InvalidTransition { .. }
                | FsaError::InvalidAcceptState { .. }
        )
    }
}
