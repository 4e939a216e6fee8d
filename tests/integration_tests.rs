use std::io::Write;

use bracket_sheets::{
    WeightClassTable, bucket_players, build_pools,
    roster::{CsvRoster, PlayerSource},
    sheet_ui::{JsonAssignmentRenderer, SheetRenderer, TextSheetRenderer},
};
use tempfile::NamedTempFile;

fn write_roster(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Full run over a mixed roster: CSV in, assignment sequence out.
#[test]
fn test_roster_to_pools_end_to_end() {
    let file = write_roster(
        "name,age,weight,gender,club,city,state\n\
         Aino,16,52.0,female,Club Alpha,Pori,Satakunta\n\
         Bea,16,54.0,female,Club Beta,Pori,Satakunta\n\
         Cia,17,55.0,female,Club Alpha,Oulu,Pohjois-Pohjanmaa\n\
         Dora,17,57.0,female,Club Beta,Oulu,Pohjois-Pohjanmaa\n\
         Elsa,16,58.0,female,Club Gamma,Vaasa,Pohjanmaa\n\
         Frans,12,39.0,male,Club Alpha,Pori,Satakunta\n\
         Greta,12,41.0,female,Club Beta,Pori,Satakunta\n\
         Henrik,twelve,40.0,male,Club Delta,Espoo,Uusimaa\n\
         Iiro,18,73.0,neither,Club Delta,Espoo,Uusimaa\n",
    );

    let players = CsvRoster::new(file.path()).players().unwrap();
    let buckets = bucket_players(players, &WeightClassTable::new());
    let pools = build_pools(&buckets);

    let headings: Vec<String> = pools.iter().map(|p| p.heading()).collect();
    assert_eq!(
        headings,
        vec![
            // Divisions appear in the order they were first populated
            "16-17 FEMALE - Group 1".to_string(),
            "16-17 FEMALE - Group 2".to_string(),
            "12 - Group 1".to_string(),
            "Uncategorized - Group 1".to_string(),
        ]
    );

    // The first cadet pool clashed on both state pairs (Satakunta/Satakunta,
    // Pohjois-Pohjanmaa/Pohjois-Pohjanmaa), so positions 2 and 4 were swapped
    let cadet_pool: Vec<&str> = pools[0].players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(cadet_pool, vec!["Aino", "Dora", "Cia", "Bea"]);

    // Trailing remainder pool of one, untouched
    assert_eq!(pools[1].players.len(), 1);
    assert_eq!(pools[1].players[0].name, "Elsa");

    // Pre-teens share one bucket regardless of gender
    let youth: Vec<&str> = pools[2].players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(youth, vec!["Frans", "Greta"]);

    // Non-numeric age and unrecognized gender both land in the sentinel
    let uncategorized: Vec<&str> = pools[3].players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(uncategorized, vec!["Henrik", "Iiro"]);
}

/// The rendered document carries one page per pool with the roster data laid
/// out on it.
#[test]
fn test_roster_to_printed_sheets_end_to_end() {
    let file = write_roster(
        "name,age,weight,gender,club,city,state\n\
         Aino,16,52.0,female,Club Alpha,Pori,Satakunta\n\
         Bea,16,54.0,female,Club Beta,Tampere,Pirkanmaa\n",
    );

    let players = CsvRoster::new(file.path()).players().unwrap();
    let buckets = bucket_players(players, &WeightClassTable::new());
    let pools = build_pools(&buckets);

    let mut out = Vec::new();
    TextSheetRenderer::new("Winter Cup")
        .without_timestamp()
        .render(&pools, &mut out)
        .unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("Winter Cup"));
    assert!(text.contains("16-17 FEMALE - Group 1"));
    assert!(text.contains("Aino"));
    assert!(text.contains("Club Beta"));
    assert!(text.contains("Winner name: _______________________"));
    // Single pool, so no page break
    assert!(!text.contains('\u{c}'));
}

/// The JSON export is exactly the assignment sequence, machine-readable.
#[test]
fn test_json_export_end_to_end() {
    let file = write_roster(
        "name,age,weight,gender,club,city,state\n\
         Aino,16,52.0,female,Club Alpha,Pori,Satakunta\n\
         Ben,20,73.0,male,Club Beta,Tampere,Pirkanmaa\n",
    );

    let players = CsvRoster::new(file.path()).players().unwrap();
    let buckets = bucket_players(players, &WeightClassTable::new());
    let pools = build_pools(&buckets);

    let mut out = Vec::new();
    JsonAssignmentRenderer.render(&pools, &mut out).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(parsed.as_array().unwrap().len(), 2);
    assert_eq!(parsed[0]["division"], "16-17 FEMALE");
    assert_eq!(parsed[1]["division"], "18+ MALE");
    assert_eq!(parsed[1]["group_index"], 1);
    assert_eq!(parsed[1]["players"][0]["club"], "Club Beta");
}

/// Spreadsheet float exports ("16.0") classify the same as integer text.
#[test]
fn test_float_exported_ages_classify_normally() {
    let file = write_roster(
        "name,age,weight,gender,club,city,state\n\
         Aino,16.0,52.0,female,Club Alpha,Pori,Satakunta\n",
    );

    let players = CsvRoster::new(file.path()).players().unwrap();
    let buckets = bucket_players(players, &WeightClassTable::new());
    let pools = build_pools(&buckets);

    assert_eq!(pools[0].division, "16-17 FEMALE");
    // And the printed age is whole years
    let mut out = Vec::new();
    TextSheetRenderer::new("T")
        .without_timestamp()
        .render(&pools, &mut out)
        .unwrap();
    let text = String::from_utf8(out).unwrap();
    let row = text.lines().find(|l| l.contains("Aino")).unwrap();
    assert!(row.contains("16 "));
    assert!(!row.contains("16.0"));
}
