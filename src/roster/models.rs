use serde::{Deserialize, Serialize};

/// One tournament entrant, exactly as read from the roster file.
///
/// All fields are kept as text: spreadsheets deliver ages like `"12"` or
/// `"12.0"` and weights like `"63.5"`, and deciding what is numeric is the
/// classifier's job, not the reader's. A record is never mutated after it is
/// read; classification derives a division label from it.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PlayerRecord {
    pub name: String,
    pub age: String,
    pub weight: String,
    pub gender: String,
    pub club: String,
    pub city: String,
    pub state: String,
}

impl PlayerRecord {
    /// Age as printed on the pool sheet: whole years when the raw value is
    /// numeric, the raw text otherwise (an uncategorized entry still gets a
    /// row on its sheet).
    pub fn age_display(&self) -> String {
        match self.age.trim().parse::<f64>() {
            Ok(age) if age.is_finite() => format!("{}", age.trunc() as i64),
            _ => self.age.clone(),
        }
    }

    /// Weight as printed on the pool sheet, trimmed of surrounding whitespace.
    pub fn weight_display(&self) -> String {
        self.weight.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PlayerRecord {
        PlayerRecord {
            name: "Aino Korhonen".to_string(),
            age: "16".to_string(),
            weight: "57.5".to_string(),
            gender: "female".to_string(),
            club: "Turku Judo".to_string(),
            city: "Turku".to_string(),
            state: "Varsinais-Suomi".to_string(),
        }
    }

    #[test]
    fn test_player_record_serialization() {
        let player = sample();

        let json = serde_json::to_string(&player).unwrap();
        assert!(json.contains("\"name\":\"Aino Korhonen\""));
        assert!(json.contains("\"weight\":\"57.5\""));

        let deserialized: PlayerRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, player);
    }

    #[test]
    fn test_age_display_truncates_float_exports() {
        let mut player = sample();
        player.age = "12.0".to_string();
        assert_eq!(player.age_display(), "12");

        player.age = " 14 ".to_string();
        assert_eq!(player.age_display(), "14");
    }

    #[test]
    fn test_age_display_keeps_raw_text_when_not_numeric() {
        let mut player = sample();
        player.age = "unknown".to_string();
        assert_eq!(player.age_display(), "unknown");
    }

    #[test]
    fn test_weight_display_trims() {
        let mut player = sample();
        player.weight = " 63.5 ".to_string();
        assert_eq!(player.weight_display(), "63.5");
    }
}
