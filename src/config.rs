use crate::model::TimelineEntry;
use eyre::{Result, WrapErr};
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub database: Database,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
}

#[derive(Debug, Deserialize)]
pub struct Database {
    pub url: String,
}

impl Config {
    pub fn load(file_name: &str) -> Result<Config> {
        let content = fs::read_to_string(file_name).context("cannot load configuration file")?;
        toml::from_str(&content).context("cannot parse configuration file")
    }
}

#[test]
fn test_parse_config() {
    let config: Config = toml::from_str(
        r#"
        [database]
        url = "sqlite://portfolio.db"

        [[timeline]]
        year = "2021"
        title = "Computer science degree"
        institution = "Some university"
        description = "Studied things"
        "#,
    )
    .unwrap();
    assert_eq!(config.database.url, "sqlite://portfolio.db");
    assert_eq!(config.timeline.len(), 1);
    assert_eq!(config.timeline[0].company, None);
    assert_eq!(config.timeline[0].affiliation(), Some("Some university"));
}

#[test]
fn test_timeline_defaults_to_empty() {
    let config: Config = toml::from_str("[database]\nurl = \"mysql://localhost/folio\"").unwrap();
    assert!(config.timeline.is_empty());
}
