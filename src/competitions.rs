use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One competition+season row from the StatsBomb open-data competitions file.
/// `competition_id` repeats across seasons of the same competition, so it is
/// not a unique key on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitionRecord {
    pub competition_id: i64,
    pub season_id: i64,
    pub country_name: String,
    pub competition_name: String,
    pub competition_gender: String,
    pub competition_youth: bool,
    pub competition_international: bool,
    pub season_name: String,
    pub match_updated: Option<String>,
    pub match_updated_360: Option<String>,
    pub match_available_360: Option<String>,
    pub match_available: Option<String>,
}

/// Name/ID pair used by the competition listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitionEntry {
    pub name: String,
    pub id: i64,
}

pub fn load_competitions(path: &Path) -> Result<Vec<CompetitionRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read competitions file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("parse competitions file {}", path.display()))
}

/// Map competition name to its name/ID pair. Records are scanned in file
/// order, so a duplicated name keeps the last record's ID.
pub fn list_competitions(records: &[CompetitionRecord]) -> HashMap<String, CompetitionEntry> {
    let mut out = HashMap::with_capacity(records.len());
    for rec in records {
        out.insert(
            rec.competition_name.clone(),
            CompetitionEntry {
                name: rec.competition_name.clone(),
                id: rec.competition_id,
            },
        );
    }
    out
}

/// All seasons of the competition with the given ID, in file order.
pub fn competitions_by_id(records: &[CompetitionRecord], id: i64) -> Vec<&CompetitionRecord> {
    records
        .iter()
        .filter(|rec| rec.competition_id == id)
        .collect()
}

/// All seasons of the competition with the given name (exact match), in file order.
pub fn competitions_by_name<'a>(
    records: &'a [CompetitionRecord],
    name: &str,
) -> Vec<&'a CompetitionRecord> {
    records
        .iter()
        .filter(|rec| rec.competition_name == name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stub_record(id: i64, season_id: i64, name: &str) -> CompetitionRecord {
        CompetitionRecord {
            competition_id: id,
            season_id,
            country_name: "England".to_string(),
            competition_name: name.to_string(),
            competition_gender: "female".to_string(),
            competition_youth: false,
            competition_international: false,
            season_name: "2020/2021".to_string(),
            match_updated: Some("2022-08-16T02:10:37.220648".to_string()),
            match_updated_360: None,
            match_available_360: None,
            match_available: Some("2022-08-16T02:10:37.220648".to_string()),
        }
    }

    #[test]
    fn listing_keeps_last_record_on_duplicate_name() {
        let records = vec![
            stub_record(11, 1, "Serie A"),
            stub_record(12, 1, "La Liga"),
            stub_record(99, 2, "Serie A"),
        ];
        let listing = list_competitions(&records);
        assert_eq!(listing.len(), 2);
        assert_eq!(listing["Serie A"].id, 99);
        assert_eq!(listing["La Liga"].id, 12);
    }

    #[test]
    fn by_id_returns_every_season() {
        let records = vec![
            stub_record(37, 90, "FA Women's Super League"),
            stub_record(49, 3, "NWSL"),
            stub_record(37, 42, "FA Women's Super League"),
        ];
        let hits = competitions_by_id(&records, 37);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].season_id, 90);
        assert_eq!(hits[1].season_id, 42);
        assert!(competitions_by_id(&records, 20).is_empty());
    }

    #[test]
    fn by_name_is_exact_match() {
        let records = vec![stub_record(49, 3, "NWSL")];
        assert_eq!(competitions_by_name(&records, "NWSL").len(), 1);
        assert!(competitions_by_name(&records, "nwsl").is_empty());
        assert!(competitions_by_name(&records, "NWS").is_empty());
    }

    #[test]
    fn record_roundtrips_nullable_fields_as_null() {
        let raw = r#"{
            "competition_id": 49,
            "season_id": 3,
            "country_name": "United States of America",
            "competition_name": "NWSL",
            "competition_gender": "female",
            "competition_youth": false,
            "competition_international": false,
            "season_name": "2018",
            "match_updated": "2021-11-06T05:53:29.435016",
            "match_updated_360": "2021-06-13T16:17:31.694",
            "match_available_360": null,
            "match_available": "2021-11-06T05:53:29.435016"
        }"#;
        let rec: CompetitionRecord = serde_json::from_str(raw).expect("record should parse");
        assert_eq!(rec.competition_id, 49);
        assert!(rec.match_available_360.is_none());

        let back = serde_json::to_value(&rec).expect("record should serialize");
        assert_eq!(back["match_available_360"], serde_json::Value::Null);
        assert_eq!(back["season_name"], "2018");
    }
}
