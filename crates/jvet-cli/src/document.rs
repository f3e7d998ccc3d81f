//! # Document Loading
//!
//! Boundary-layer concerns for the `jvet` binary: reading schema and
//! instance files, the instance payload size cap, and YAML-to-JSON
//! conversion. None of this belongs in the engine crates — the engine
//! consumes already-parsed values and performs no I/O.

use std::path::Path;

use serde_json::Value;
use thiserror::Error;

/// Instance payloads must be strictly smaller than this to be accepted;
/// a payload of exactly this size is already rejected, before parsing.
pub const MAX_INSTANCE_BYTES: usize = 256_000;

/// Error loading a schema or instance document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file could not be read.
    #[error("cannot read '{path}': {reason}")]
    Read {
        /// Path to the document.
        path: String,
        /// Reason the read failed.
        reason: String,
    },

    /// The file could not be parsed in its declared format.
    #[error("cannot parse '{path}': {reason}")]
    Parse {
        /// Path to the document.
        path: String,
        /// Reason the parse failed.
        reason: String,
    },

    /// The instance payload exceeds the size cap.
    #[error("payload '{path}' is {size} bytes, at or above the {limit}-byte limit")]
    PayloadTooLarge {
        /// Path to the document.
        path: String,
        /// Observed payload size in bytes.
        size: usize,
        /// The enforced limit.
        limit: usize,
    },
}

/// Load a schema document. Schemas are always JSON.
pub fn load_schema(path: &Path) -> Result<Value, DocumentError> {
    let content = read(path)?;
    parse_json(path, &content)
}

/// Load an instance document, enforcing the payload size cap before any
/// parsing. YAML is accepted by extension (`.yaml`/`.yml`) and converted
/// to a JSON value tree; everything else is parsed as JSON.
pub fn load_instance(path: &Path) -> Result<Value, DocumentError> {
    let content = read(path)?;
    check_payload_size(path, content.len())?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext {
        "yaml" | "yml" => {
            let yaml: serde_yaml::Value =
                serde_yaml::from_str(&content).map_err(|e| DocumentError::Parse {
                    path: path.display().to_string(),
                    reason: format!("invalid YAML: {e}"),
                })?;
            yaml_to_json_value(&yaml).map_err(|reason| DocumentError::Parse {
                path: path.display().to_string(),
                reason,
            })
        }
        _ => parse_json(path, &content),
    }
}

/// Reject payloads at or above [`MAX_INSTANCE_BYTES`].
pub fn check_payload_size(path: &Path, size: usize) -> Result<(), DocumentError> {
    if size >= MAX_INSTANCE_BYTES {
        return Err(DocumentError::PayloadTooLarge {
            path: path.display().to_string(),
            size,
            limit: MAX_INSTANCE_BYTES,
        });
    }
    Ok(())
}

fn read(path: &Path) -> Result<String, DocumentError> {
    std::fs::read_to_string(path).map_err(|e| DocumentError::Read {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn parse_json(path: &Path, content: &str) -> Result<Value, DocumentError> {
    serde_json::from_str(content).map_err(|e| DocumentError::Parse {
        path: path.display().to_string(),
        reason: format!("invalid JSON: {e}"),
    })
}

/// Convert a parsed YAML document into the engine's JSON value model.
///
/// Instance documents use only the JSON-compatible subset of YAML:
/// string mapping keys, finite numbers, no tags. Anything outside that
/// subset is a parse failure here, never a silent coercion — the engine
/// must see exactly the document the author wrote.
fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, String> {
    use serde_yaml::Value as Yaml;

    match yaml {
        Yaml::Null => Ok(Value::Null),
        Yaml::Bool(b) => Ok(Value::Bool(*b)),
        Yaml::Number(n) => yaml_number_to_json(n),
        Yaml::String(s) => Ok(Value::String(s.clone())),
        Yaml::Sequence(elements) => elements
            .iter()
            .map(yaml_to_json_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        Yaml::Mapping(mapping) => {
            let mut fields = serde_json::Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                let Yaml::String(key) = key else {
                    return Err(format!("non-string mapping key: {key:?}"));
                };
                fields.insert(key.clone(), yaml_to_json_value(value)?);
            }
            Ok(Value::Object(fields))
        }
        Yaml::Tagged(tagged) => Err(format!("unsupported YAML tag: {}", tagged.tag)),
    }
}

fn yaml_number_to_json(n: &serde_yaml::Number) -> Result<Value, String> {
    if let Some(i) = n.as_i64() {
        return Ok(Value::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Ok(Value::from(u));
    }
    n.as_f64()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| format!("number {n} has no JSON representation"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_payload_cap() {
        let path = PathBuf::from("instance.json");
        assert!(check_payload_size(&path, MAX_INSTANCE_BYTES - 1).is_ok());
        // The boundary itself is invalid: only payloads strictly smaller
        // than the limit pass.
        let err = check_payload_size(&path, MAX_INSTANCE_BYTES).unwrap_err();
        match err {
            DocumentError::PayloadTooLarge { size, limit, .. } => {
                assert_eq!(size, MAX_INSTANCE_BYTES);
                assert_eq!(limit, MAX_INSTANCE_BYTES);
            }
            other => panic!("Expected PayloadTooLarge, got: {other}"),
        }
        assert!(check_payload_size(&path, MAX_INSTANCE_BYTES + 1).is_err());
    }

    #[test]
    fn test_yaml_to_json_conversion() {
        let yaml_str = r#"
caseType: COMP
caseData:
  - name: channel
    value: EMAIL
count: 42
enabled: true
"#;
        let yaml: serde_yaml::Value = serde_yaml::from_str(yaml_str).unwrap();
        let json = yaml_to_json_value(&yaml).unwrap();

        assert_eq!(json["caseType"], "COMP");
        assert_eq!(json["caseData"][0]["value"], "EMAIL");
        assert_eq!(json["count"], 42);
        assert_eq!(json["enabled"], true);
    }

    #[test]
    fn test_yaml_float_values_convert() {
        let yaml: serde_yaml::Value = serde_yaml::from_str("score: 3.25").unwrap();
        let json = yaml_to_json_value(&yaml).unwrap();
        assert_eq!(json["score"], 3.25);
    }

    #[test]
    fn test_yaml_non_string_keys_rejected() {
        let yaml: serde_yaml::Value = serde_yaml::from_str("1: one").unwrap();
        let err = yaml_to_json_value(&yaml).unwrap_err();
        assert!(err.contains("non-string mapping key"));
    }

    #[test]
    fn test_yaml_tags_rejected() {
        let yaml: serde_yaml::Value = serde_yaml::from_str("value: !custom 5").unwrap();
        let err = yaml_to_json_value(&yaml).unwrap_err();
        assert!(err.contains("unsupported YAML tag"));
    }
}
