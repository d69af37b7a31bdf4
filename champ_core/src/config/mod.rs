//! Configuration loading - champion/item JSON, build-plan TOML, sample data

use crate::build::BuildPlan;
use crate::model::{ChampionRecord, ItemRecord, StatModel};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Failed to parse TOML: {0}")]
    TomlError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a JSON file and deserialize it
pub fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let value: T = serde_json::from_str(&content)?;
    Ok(value)
}

/// Load a JSON string and deserialize it
pub fn parse_json<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let value: T = serde_json::from_str(content)?;
    Ok(value)
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let value: T = toml::from_str(&content)?;
    Ok(value)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let value: T = toml::from_str(content)?;
    Ok(value)
}

/// Load a champion record from a JSON file
pub fn load_champion(path: &Path) -> Result<ChampionRecord, ConfigError> {
    let champion: ChampionRecord = load_json(path)?;
    validate_champion(&champion)?;
    Ok(champion)
}

/// Load a champion record from a JSON string
pub fn parse_champion(content: &str) -> Result<ChampionRecord, ConfigError> {
    let champion: ChampionRecord = parse_json(content)?;
    validate_champion(&champion)?;
    Ok(champion)
}

fn validate_champion(champion: &ChampionRecord) -> Result<(), ConfigError> {
    if champion.abilities.is_empty() {
        return Err(ConfigError::ValidationError(format!(
            "champion '{}' has no abilities",
            champion.id
        )));
    }
    let mut seen = HashSet::new();
    for ability in &champion.abilities {
        if !seen.insert(ability.key) {
            return Err(ConfigError::ValidationError(format!(
                "champion '{}' has duplicate ability key {}",
                champion.id, ability.key
            )));
        }
    }
    Ok(())
}

/// Container for an item catalog file
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ItemSet {
    pub items: Vec<ItemRecord>,
}

/// Load an item catalog from a JSON file
pub fn load_item_set(path: &Path) -> Result<Vec<ItemRecord>, ConfigError> {
    let set: ItemSet = load_json(path)?;
    Ok(set.items)
}

/// Load an item catalog from a JSON string
pub fn parse_item_set(content: &str) -> Result<Vec<ItemRecord>, ConfigError> {
    let set: ItemSet = parse_json(content)?;
    Ok(set.items)
}

/// Load a build plan from a TOML file
pub fn load_build_plan(path: &Path) -> Result<BuildPlan, ConfigError> {
    load_toml(path)
}

/// Load a build plan from a TOML string
pub fn parse_build_plan(content: &str) -> Result<BuildPlan, ConfigError> {
    parse_toml(content)
}

/// Get the bundled sample champion
pub fn sample_champion() -> ChampionRecord {
    let json = include_str!("../../data/annie.json");
    parse_champion(json).unwrap_or_else(|_| ChampionRecord {
        id: "Annie".to_string(),
        name: "Annie".to_string(),
        title: String::new(),
        tags: Vec::new(),
        partype: None,
        stats: StatModel::default(),
        abilities: Vec::new(),
    })
}

/// Get the bundled sample item catalog
pub fn sample_items() -> Vec<ItemRecord> {
    let json = include_str!("../../data/items.json");
    parse_item_set(json).unwrap_or_default()
}
