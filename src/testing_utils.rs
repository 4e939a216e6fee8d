use crate::roster::PlayerRecord;

/// Test utilities for creating mock roster data and testing scenarios
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a player with the given identity fields and placeholder
    /// affiliation. Club and city are derived from the name so that distinct
    /// players never clash on club by accident.
    pub fn player(name: &str, age: &str, weight: &str, gender: &str) -> PlayerRecord {
        PlayerRecord {
            name: name.to_string(),
            age: age.to_string(),
            weight: weight.to_string(),
            gender: gender.to_string(),
            club: format!("{name} Club"),
            city: "Testville".to_string(),
            state: "Testland".to_string(),
        }
    }

    /// Creates a player with explicit club and state, for exercising the
    /// anti-clustering swap.
    pub fn player_with_affiliation(
        name: &str,
        age: &str,
        weight: &str,
        gender: &str,
        club: &str,
        state: &str,
    ) -> PlayerRecord {
        PlayerRecord {
            name: name.to_string(),
            age: age.to_string(),
            weight: weight.to_string(),
            gender: gender.to_string(),
            club: club.to_string(),
            city: "Testville".to_string(),
            state: state.to_string(),
        }
    }

    /// Creates a roster CSV body (header plus one line per player) for
    /// boundary tests.
    pub fn roster_csv(players: &[PlayerRecord]) -> String {
        let mut csv = String::from("name,age,weight,gender,club,city,state\n");
        for p in players {
            csv.push_str(&format!(
                "{},{},{},{},{},{},{}\n",
                p.name, p.age, p.weight, p.gender, p.club, p.city, p.state
            ));
        }
        csv
    }
}
