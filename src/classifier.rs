//! Division classification.
//!
//! This module maps one player's raw attributes to a division label:
//! - Gender is normalized (trim + uppercase) and must be MALE or FEMALE
//! - Age and weight are coerced from their spreadsheet text forms
//! - Ages under 14 share one undifferentiated bucket per age
//! - Older ages land in gendered bands: 14-15, 16-17, 18+
//! - An optional per-band weight-class table can refine the label further
//!
//! Any record that fails normalization or coercion gets the sentinel label
//! [`UNCATEGORIZED`]; classification is total and never errors out.

use std::collections::HashMap;

use crate::constants::{UNCATEGORIZED, age_bands};

/// Pluggable weight-class thresholds: division key to (class name -> max
/// weight). Ships empty, in which case no record ever receives a
/// weight-qualified label. Populated through the config file.
pub type WeightClassTable = HashMap<String, HashMap<String, f64>>;

/// Player gender after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parses a raw gender value by trimming whitespace and upper-casing.
    /// Anything other than MALE or FEMALE is rejected.
    ///
    /// # Examples
    /// ```
    /// use bracket_sheets::classifier::Gender;
    ///
    /// assert_eq!(Gender::parse(" male "), Some(Gender::Male));
    /// assert_eq!(Gender::parse("FEMALE"), Some(Gender::Female));
    /// assert_eq!(Gender::parse("other"), None);
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_uppercase().as_str() {
            "MALE" => Some(Gender::Male),
            "FEMALE" => Some(Gender::Female),
            _ => None,
        }
    }

    /// Label fragment used in gendered division labels.
    pub fn as_label(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
        }
    }
}

/// Coerces a spreadsheet age value to whole years.
///
/// Accepts integer text and float text with zero fraction (spreadsheet exports
/// commonly render ages as `"12.0"`). Anything else is non-numeric.
fn coerce_age(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if let Ok(age) = trimmed.parse::<i64>() {
        return Some(age);
    }
    match trimmed.parse::<f64>() {
        Ok(age) if age.is_finite() && age.fract() == 0.0 => Some(age as i64),
        _ => None,
    }
}

/// Coerces a spreadsheet weight value to kilograms.
fn coerce_weight(raw: &str) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(weight) if weight.is_finite() => Some(weight),
        _ => None,
    }
}

/// Computes the age-band label for a successfully coerced record.
fn age_band_label(age: i64, gender: Gender) -> String {
    if age <= age_bands::YOUTH_MAX {
        // Pre-teens share one bucket per age, with no gender or weight
        // qualifier
        age.to_string()
    } else if age <= age_bands::JUNIOR_MAX {
        format!("{} {}", age_bands::JUNIOR_LABEL, gender.as_label())
    } else if age <= age_bands::CADET_MAX {
        format!("{} {}", age_bands::CADET_LABEL, gender.as_label())
    } else {
        format!("{} {}", age_bands::SENIOR_LABEL, gender.as_label())
    }
}

/// Looks up a weight-class suffix for the given band, if the table has one.
///
/// Classes are consulted in ascending threshold order so the tightest class
/// wins regardless of how the config file ordered them. A weight above every
/// threshold, or a band with no table entry, yields no suffix.
fn weight_class_suffix(band: &str, weight: f64, table: &WeightClassTable) -> Option<String> {
    let classes = table.get(band)?;
    let mut ordered: Vec<(&String, &f64)> = classes.iter().collect();
    ordered.sort_by(|a, b| a.1.total_cmp(b.1).then_with(|| a.0.cmp(b.0)));

    ordered
        .into_iter()
        .find(|(_, max_weight)| weight <= **max_weight)
        .map(|(class_name, _)| class_name.clone())
}

/// Maps one player's raw attributes to a division label.
///
/// Deterministic and total: the same inputs always yield the same label, and
/// invalid input yields the [`UNCATEGORIZED`] sentinel rather than an error.
/// Gender is checked first; when it is invalid, age and weight are not even
/// inspected.
///
/// # Arguments
/// * `age` - Raw age text from the roster (may be `"12"` or `"12.0"`)
/// * `weight` - Raw weight text from the roster
/// * `gender` - Raw gender text, normalized by trim + uppercase
/// * `table` - Weight-class thresholds; empty means no weight qualifiers
///
/// # Examples
/// ```
/// use bracket_sheets::classifier::{WeightClassTable, classify};
///
/// let table = WeightClassTable::new();
/// assert_eq!(classify("16", "57.0", " male ", &table), "16-17 MALE");
/// assert_eq!(classify("12", "40.0", "FEMALE", &table), "12");
/// assert_eq!(classify("16", "57.0", "unknown", &table), "Uncategorized");
/// ```
pub fn classify(age: &str, weight: &str, gender: &str, table: &WeightClassTable) -> String {
    let Some(gender) = Gender::parse(gender) else {
        return UNCATEGORIZED.to_string();
    };

    let Some(age) = coerce_age(age) else {
        return UNCATEGORIZED.to_string();
    };
    let Some(weight) = coerce_weight(weight) else {
        return UNCATEGORIZED.to_string();
    };

    let band = age_band_label(age, gender);

    match weight_class_suffix(&band, weight, table) {
        Some(class_name) => format!("{band} {class_name}"),
        None => band,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_normalization() {
        assert_eq!(Gender::parse("male"), Some(Gender::Male));
        assert_eq!(Gender::parse(" MALE "), Some(Gender::Male));
        assert_eq!(Gender::parse("Female"), Some(Gender::Female));
        assert_eq!(Gender::parse(""), None);
        assert_eq!(Gender::parse("m"), None);
        assert_eq!(Gender::parse("nonbinary"), None);
    }

    #[test]
    fn test_invalid_gender_short_circuits() {
        let table = WeightClassTable::new();
        // Age and weight are valid here; gender alone decides
        assert_eq!(classify("16", "57.0", "unknown", &table), UNCATEGORIZED);
        // And with garbage age/weight the answer is the same sentinel
        assert_eq!(classify("abc", "xyz", "unknown", &table), UNCATEGORIZED);
    }

    #[test]
    fn test_non_numeric_age_or_weight() {
        let table = WeightClassTable::new();
        assert_eq!(classify("twelve", "40.0", "male", &table), UNCATEGORIZED);
        assert_eq!(classify("12", "heavy", "male", &table), UNCATEGORIZED);
        assert_eq!(classify("", "", "female", &table), UNCATEGORIZED);
    }

    #[test]
    fn test_age_band_boundaries() {
        let table = WeightClassTable::new();
        assert_eq!(classify("13", "50.0", "male", &table), "13");
        assert_eq!(classify("14", "50.0", "male", &table), "14-15 MALE");
        assert_eq!(classify("15", "50.0", "female", &table), "14-15 FEMALE");
        assert_eq!(classify("16", "50.0", "male", &table), "16-17 MALE");
        assert_eq!(classify("17", "50.0", "female", &table), "16-17 FEMALE");
        assert_eq!(classify("18", "50.0", "male", &table), "18+ MALE");
        assert_eq!(classify("42", "50.0", "female", &table), "18+ FEMALE");
    }

    #[test]
    fn test_preteens_share_one_bucket_regardless_of_gender_and_weight() {
        let table = WeightClassTable::new();
        assert_eq!(classify("12", "30.0", "male", &table), "12");
        assert_eq!(classify("12", "60.0", "female", &table), "12");
    }

    #[test]
    fn test_float_exported_age_is_accepted() {
        let table = WeightClassTable::new();
        assert_eq!(classify("12.0", "40.0", "male", &table), "12");
        assert_eq!(classify("16.0", "57.0", " male ", &table), "16-17 MALE");
        // Fractional ages stay non-numeric
        assert_eq!(classify("12.5", "40.0", "male", &table), UNCATEGORIZED);
    }

    #[test]
    fn test_empty_table_yields_bare_band_label() {
        let table = WeightClassTable::new();
        assert_eq!(classify("16", "57.0", " male ", &table), "16-17 MALE");
    }

    fn table_with_classes() -> WeightClassTable {
        let mut classes = HashMap::new();
        classes.insert("-60kg".to_string(), 60.0);
        classes.insert("-66kg".to_string(), 66.0);
        let mut table = WeightClassTable::new();
        table.insert("18+ MALE".to_string(), classes);
        table
    }

    #[test]
    fn test_weight_class_suffix_picks_tightest_class() {
        let table = table_with_classes();
        assert_eq!(classify("20", "58.0", "male", &table), "18+ MALE -60kg");
        assert_eq!(classify("20", "60.0", "male", &table), "18+ MALE -60kg");
        assert_eq!(classify("20", "63.0", "male", &table), "18+ MALE -66kg");
    }

    #[test]
    fn test_weight_above_every_threshold_falls_back_to_band() {
        let table = table_with_classes();
        assert_eq!(classify("20", "90.0", "male", &table), "18+ MALE");
    }

    #[test]
    fn test_table_only_applies_to_its_own_band() {
        let table = table_with_classes();
        assert_eq!(classify("20", "58.0", "female", &table), "18+ FEMALE");
        assert_eq!(classify("16", "58.0", "male", &table), "16-17 MALE");
    }

    #[test]
    fn test_classify_is_deterministic() {
        let table = table_with_classes();
        let first = classify("20", "58.0", "male", &table);
        for _ in 0..10 {
            assert_eq!(classify("20", "58.0", "male", &table), first);
        }
    }
}
