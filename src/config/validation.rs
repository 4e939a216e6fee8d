use std::path::Path;

use crate::classifier::WeightClassTable;
use crate::error::AppError;

/// Validates the configuration settings
///
/// # Arguments
/// * `weight_classes` - The weight-class threshold table to validate
/// * `log_file_path` - Optional log file path to validate
///
/// # Validation Rules
/// - Every weight threshold must be finite and positive
/// - Division keys and class names cannot be empty
/// - If a log file path is provided, it cannot be empty and its parent
///   directory must exist or be creatable
pub fn validate_config(
    weight_classes: &WeightClassTable,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    for (division, classes) in weight_classes {
        if division.trim().is_empty() {
            return Err(AppError::config_error(
                "Weight class table contains an empty division key",
            ));
        }
        for (class_name, max_weight) in classes {
            if class_name.trim().is_empty() {
                return Err(AppError::config_error(format!(
                    "Division '{division}' has a weight class with an empty name"
                )));
            }
            if !max_weight.is_finite() || *max_weight <= 0.0 {
                return Err(AppError::config_error(format!(
                    "Weight class '{class_name}' in division '{division}' has invalid max weight {max_weight}"
                )));
            }
        }
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            // Try to create the directory to validate the path
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_empty_table_is_valid() {
        assert!(validate_config(&WeightClassTable::new(), &None).is_ok());
    }

    #[test]
    fn test_valid_table_passes() {
        let mut classes = HashMap::new();
        classes.insert("-60kg".to_string(), 60.0);
        let mut table = WeightClassTable::new();
        table.insert("18+ MALE".to_string(), classes);
        assert!(validate_config(&table, &None).is_ok());
    }

    #[test]
    fn test_nonpositive_threshold_is_rejected() {
        let mut classes = HashMap::new();
        classes.insert("-60kg".to_string(), 0.0);
        let mut table = WeightClassTable::new();
        table.insert("18+ MALE".to_string(), classes);
        assert!(validate_config(&table, &None).is_err());
    }

    #[test]
    fn test_empty_class_name_is_rejected() {
        let mut classes = HashMap::new();
        classes.insert("  ".to_string(), 60.0);
        let mut table = WeightClassTable::new();
        table.insert("18+ MALE".to_string(), classes);
        assert!(validate_config(&table, &None).is_err());
    }

    #[test]
    fn test_empty_log_path_is_rejected() {
        let err = validate_config(&WeightClassTable::new(), &Some(String::new()));
        assert!(err.is_err());
    }
}
