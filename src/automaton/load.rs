use std::io::ErrorKind;
use std::path::Path;

use log::info;

use super::{Automaton, BuildOptions, RawAutomaton};
use crate::error::FsaError;

/// Read, parse and validate an automaton from a JSON file.
pub fn load_from_file(path: impl AsRef<Path>, options: &BuildOptions) -> Result<Automaton, FsaError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => FsaError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => FsaError::Io(e),
    })?;

    info!("loading automaton from {}", path.display());
    load_from_str(&contents, options)
}

/// Parse and validate an automaton from JSON text.
///
/// Text that is not JSON at all fails with [`FsaError::Parse`]; JSON that
/// does not describe an automaton fails with [`FsaError::MalformedInput`].
pub fn load_from_str(contents: &str, options: &BuildOptions) -> Result<Automaton, FsaError> {
    let value: serde_json::Value = serde_json::from_str(contents)?;
    let raw = RawAutomaton::from_value(value)?;
    Automaton::build(raw, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"{
        "states": ["q0", "q1"],
        "alphabet": ["a", "b"],
        "transitions": [
            {"from": "q0", "input": "a", "to": "q1"},
            {"from": "q1", "input": "b", "to": "q1"}
        ],
        "initialState": "q0",
        "acceptStates": ["q1"]
    }"#;

    #[test]
    fn loads_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let fsa = load_from_file(file.path(), &BuildOptions::default()).unwrap();
        assert_eq!(fsa.states().len(), 2);
        assert!(fsa.accepts(["a", "b", "b"]));
    }

    #[test]
    fn missing_file_is_reported_by_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fsa_model.json");

        let err = load_from_file(&path, &BuildOptions::default()).unwrap_err();
        match err {
            FsaError::FileNotFound { path: reported } => assert!(reported.ends_with("fsa_model.json")),
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn loads_numeric_state_ids() {
        let fsa = load_from_str(
            r#"{"states":[0,1],"alphabet":["a"],"transitions":[{"from":0,"input":"a","to":1}],"initialState":0,"acceptStates":[1]}"#,
            &BuildOptions::default(),
        )
        .unwrap();
        assert_eq!(fsa.states().len(), 2);
        assert!(fsa.accepts(["a"]));
        assert!(!fsa.accepts(["a", "a"]));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = load_from_str("{ \"states\": [", &BuildOptions::default()).unwrap_err();
        assert_eq!(err.kind(), "parse");
    }

    #[test]
    fn well_formed_but_wrong_document_is_malformed() {
        let err = load_from_str(r#"{"states": []}"#, &BuildOptions::default()).unwrap_err();
        assert_eq!(err.kind(), "malformed_input");
    }

    #[test]
    fn validation_errors_pass_through() {
        let doc = SAMPLE.replace(r#""initialState": "q0""#, r#""initialState": "qX""#);
        let err = load_from_str(&doc, &BuildOptions::default()).unwrap_err();
        assert_eq!(err.kind(), "invalid_initial_state");
    }
}
