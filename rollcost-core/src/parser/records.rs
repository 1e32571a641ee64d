//! Loading of part records and shop settings from JSON files.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ShopSettings;
use crate::error::{EngineError, Result};
use crate::model::{Part, WorkOrder};

/// Parse a work order from a file.
///
/// The file holds either a work order object with a `parts` array or a bare
/// array of parts.
pub fn load_work_order(path: &Path) -> Result<WorkOrder> {
    let content = read_file(path)?;
    parse_work_order(&content, path)
}

/// Parse a work order from JSON text. `origin` is only used in errors.
pub fn parse_work_order(content: &str, origin: &Path) -> Result<WorkOrder> {
    let mut raw: Value = from_json(content, origin)?;
    match &mut raw {
        Value::Array(parts) => parts.iter_mut().for_each(merge_form_data),
        Value::Object(order) => {
            if let Some(Value::Array(parts)) = order.get_mut("parts") {
                parts.iter_mut().for_each(merge_form_data);
            }
        }
        _ => {
            return Err(EngineError::InvalidRecord {
                path: origin.to_path_buf(),
                message: "expected a work order object or an array of parts".to_string(),
            })
        }
    }

    let order = if raw.is_array() {
        WorkOrder::new(from_record::<Vec<Part>>(raw, origin)?)
    } else {
        from_record::<WorkOrder>(raw, origin)?
    };
    tracing::debug!("Loaded {} part(s) from {}", order.parts.len(), origin.display());
    Ok(order)
}

/// Parse shop settings from a file.
pub fn load_settings(path: &Path) -> Result<ShopSettings> {
    let content = read_file(path)?;
    from_json(&content, path)
}

/// Load shop settings, treating any failure as an empty mapping.
pub fn load_settings_or_empty(path: &Path) -> ShopSettings {
    match load_settings(path) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Settings unavailable ({}), continuing without rates", e);
            ShopSettings::empty()
        }
    }
}

/// Form edits are kept under `formData`; they override the top-level fields.
fn merge_form_data(part: &mut Value) {
    let Value::Object(fields) = part else {
        return;
    };
    if let Some(Value::Object(form)) = fields.remove("formData") {
        for (key, value) in form {
            fields.insert(key, value);
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(EngineError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(EngineError::EmptyFile {
            path: path.to_path_buf(),
        });
    }
    Ok(content)
}

fn from_record<T: DeserializeOwned>(value: Value, origin: &Path) -> Result<T> {
    serde_json::from_value(value).map_err(|e| EngineError::InvalidRecord {
        path: origin.to_path_buf(),
        message: e.to_string(),
    })
}

fn from_json<T: DeserializeOwned>(content: &str, origin: &Path) -> Result<T> {
    serde_json::from_str(content).map_err(|e| EngineError::ParseError {
        path: origin.to_path_buf(),
        line: e.line(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::model::PartType;

    #[test]
    fn test_parse_bare_array() {
        let json = r#"[{"id": 1, "partType": "plate_roll"}, {"id": 2, "partType": "fab_service"}]"#;
        let order = parse_work_order(json, Path::new("inline")).unwrap();
        assert_eq!(order.parts.len(), 2);
        assert_eq!(order.parts[1].part_type, PartType::FabService);
    }

    #[test]
    fn test_parse_order_object() {
        let json = r#"{"truckingCost": "75", "parts": [{"id": 1, "partType": "flat_bar"}]}"#;
        let order = parse_work_order(json, Path::new("inline")).unwrap();
        assert_eq!(order.parts.len(), 1);
        assert_eq!(order.trucking(), 75.0);
    }

    #[test]
    fn test_form_data_overrides_top_level() {
        let json = r#"[{"id": 1, "partType": "plate_roll", "thickness": "1/4\"",
                        "formData": {"thickness": "1/2\"", "_rollValue": "30"}}]"#;
        let order = parse_work_order(json, Path::new("inline")).unwrap();
        let part = &order.parts[0];
        assert_eq!(part.thickness, "1/2\"");
        assert_eq!(part.roll_value, "30");
        assert!(!part.extra.contains_key("formData"));
    }

    #[test]
    fn test_parse_error_reports_line() {
        let json = "[\n{\"id\": 1,\n\"partType\": }\n]";
        let err = parse_work_order(json, Path::new("bad.json")).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ParseError);
        match err {
            EngineError::ParseError { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_record_shape_errors_carry_no_line() {
        let err = parse_work_order(r#"{"parts": "none"}"#, Path::new("order.json")).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ParseError);
        assert!(matches!(err, EngineError::InvalidRecord { .. }));
        assert!(!err.to_string().contains("line"), "{err}");

        let err = parse_work_order("42", Path::new("order.json")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid record in order.json: expected a work order object or an array of parts"
        );
    }

    #[test]
    fn test_missing_settings_fall_back_to_empty() {
        let settings = load_settings_or_empty(Path::new("/nonexistent/settings.json"));
        assert_eq!(settings, ShopSettings::empty());
    }

    #[test]
    fn test_missing_file_error() {
        let err = load_work_order(Path::new("/nonexistent/parts.json")).unwrap_err();
        assert_eq!(err.code(), ErrorCode::FileNotFound);
    }
}
