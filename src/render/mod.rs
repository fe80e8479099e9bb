//! Drawing automata through Graphviz.
//!
//! [`to_dot`] turns an [`Automaton`] into DOT text. [`Renderer`] hands that
//! text to the Graphviz `dot` executable, which does the layout and writes
//! the image, and can then open the result in the desktop viewer.

mod dot;

use std::io::{ErrorKind, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use log::{debug, info};

use crate::automaton::Automaton;
use crate::error::FsaError;

pub use dot::to_dot;

/// What to produce at a destination path, derived from its extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain DOT text, written without running Graphviz.
    Dot,
    /// Any Graphviz `-T` output format (`png`, `svg`, `pdf`, ...).
    Image(String),
}

impl OutputFormat {
    /// Infer the format from the file extension. Paths without an
    /// extension default to PNG.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
        {
            Some(ext) if ext == "dot" || ext == "gv" => OutputFormat::Dot,
            Some(ext) => OutputFormat::Image(ext),
            None => OutputFormat::Image("png".to_string()),
        }
    }
}

/// Runs Graphviz and the image viewer.
#[derive(Debug, Clone)]
pub struct Renderer {
    /// Graphviz executable used for layout and export.
    pub dot_command: String,
    /// Program used to display the exported image. Platform default when `None`.
    pub viewer: Option<String>,
}

impl Renderer {
    pub fn new(dot_command: impl Into<String>, viewer: Option<String>) -> Self {
        Self {
            dot_command: dot_command.into(),
            viewer,
        }
    }

    /// Draw `automaton` into `destination`.
    pub fn render(&self, automaton: &Automaton, destination: &Path) -> Result<(), FsaError> {
        let dot = to_dot(automaton);

        match OutputFormat::from_path(destination) {
            OutputFormat::Dot => {
                std::fs::write(destination, dot)?;
            }
            OutputFormat::Image(format) => {
                self.run_graphviz(&dot, &format, destination)?;
            }
        }

        info!("wrote {}", destination.display());
        Ok(())
    }

    fn run_graphviz(&self, dot: &str, format: &str, destination: &Path) -> Result<(), FsaError> {
        debug!(
            "running {} -T{format} -o {}",
            self.dot_command,
            destination.display()
        );

        let mut child = Command::new(&self.dot_command)
            .arg(format!("-T{format}"))
            .arg("-o")
            .arg(destination)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => FsaError::RendererNotFound {
                    command: self.dot_command.clone(),
                },
                _ => FsaError::Io(e),
            })?;

        // Graphviz may exit before reading its input (bad -T format, for
        // example); the exit status and stderr below explain why.
        if let Some(mut stdin) = child.stdin.take()
            && let Err(e) = stdin.write_all(dot.as_bytes())
        {
            if e.kind() != ErrorKind::BrokenPipe {
                let _ = child.kill();
                let _ = child.wait();
                return Err(FsaError::Io(e));
            }
            debug!("{} closed its input early", self.dot_command);
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(FsaError::RendererFailed {
                command: self.dot_command.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }

    /// Open `path` in the image viewer without waiting for it to close.
    pub fn show(&self, path: &Path) -> Result<(), FsaError> {
        let viewer = self
            .viewer
            .clone()
            .unwrap_or_else(|| default_viewer().to_string());
        debug!("opening {} with {viewer}", path.display());

        Command::new(&viewer)
            .arg(path)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| FsaError::Viewer {
                command: viewer.clone(),
                source,
            })?;
        Ok(())
    }
}

fn default_viewer() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "explorer"
    } else {
        "xdg-open"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::load_from_str;
    use crate::automaton::BuildOptions;

    fn sample() -> Automaton {
        load_from_str(
            r#"{
                "states": ["q0", "q1"],
                "alphabet": ["a", "b"],
                "transitions": [
                    {"from": "q0", "input": "a", "to": "q1"},
                    {"from": "q1", "input": "b", "to": "q1"}
                ],
                "initialState": "q0",
                "acceptStates": ["q1"]
            }"#,
            &BuildOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("fsa.png")), OutputFormat::Image("png".into()));
        assert_eq!(OutputFormat::from_path(Path::new("out/FSA.SVG")), OutputFormat::Image("svg".into()));
        assert_eq!(OutputFormat::from_path(Path::new("fsa.gv")), OutputFormat::Dot);
        assert_eq!(OutputFormat::from_path(Path::new("fsa.dot")), OutputFormat::Dot);
        assert_eq!(OutputFormat::from_path(Path::new("fsa")), OutputFormat::Image("png".into()));
    }

    #[test]
    fn dot_destination_skips_graphviz() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("fsa.dot");
        let renderer = Renderer::new("no-such-graphviz-binary", None);

        renderer.render(&sample(), &dest).unwrap();

        let written = std::fs::read_to_string(&dest).unwrap();
        assert_eq!(written, to_dot(&sample()));
    }

    #[test]
    fn missing_graphviz_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("fsa.png");
        let renderer = Renderer::new("no-such-graphviz-binary", None);

        let err = renderer.render(&sample(), &dest).unwrap_err();
        assert!(matches!(err, FsaError::RendererNotFound { ref command } if command == "no-such-graphviz-binary"));
        assert!(!dest.exists());
    }

    #[cfg(unix)]
    #[test]
    fn failing_graphviz_reports_exit_status() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("fsa.png");
        let renderer = Renderer::new("false", None);

        let err = renderer.render(&sample(), &dest).unwrap_err();
        assert_eq!(err.kind(), "renderer_failed");
        match err {
            FsaError::RendererFailed { command, .. } => assert_eq!(command, "false"),
            other => panic!("expected RendererFailed, got {other:?}"),
        }
    }

    #[test]
    fn missing_viewer_is_reported() {
        let renderer = Renderer::new("dot", Some("no-such-viewer-binary".into()));
        let err = renderer.show(Path::new("fsa.png")).unwrap_err();
        assert_eq!(err.kind(), "viewer");
    }
}
