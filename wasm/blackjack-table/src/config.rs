use log::LevelFilter;
use serde::Deserialize;

use crate::game::GameRules;

fn default_dealer_stands_on() -> u8 {
    17
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableConfig {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub player_score: u32,
    #[serde(default)]
    pub dealer_score: u32,
    #[serde(default = "default_dealer_stands_on")]
    pub dealer_stands_on: u8,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub selectors: Selectors,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            seed: None,
            player_score: 0,
            dealer_score: 0,
            dealer_stands_on: default_dealer_stands_on(),
            log_level: default_log_level(),
            selectors: Selectors::default(),
        }
    }
}

/// CSS selectors of the page elements the table draws into.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub player_points: String,
    pub dealer_points: String,
    pub player_hand: String,
    pub dealer_hand: String,
    pub player_score: String,
    pub dealer_score: String,
    pub hit: String,
    pub stand: String,
    pub restart: String,
    pub game_result: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Selectors {
            player_points: ".player-points".to_string(),
            dealer_points: ".dealer-points".to_string(),
            player_hand: ".player-hand".to_string(),
            dealer_hand: ".dealer-hand".to_string(),
            player_score: ".player-score".to_string(),
            dealer_score: ".dealer-score".to_string(),
            hit: ".hit".to_string(),
            stand: ".stand".to_string(),
            restart: ".restart".to_string(),
            game_result: ".game-result".to_string(),
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !(12..=21).contains(&self.dealer_stands_on) {
            return Err(format!(
                "dealerStandsOn must be between 12 and 21, got {}",
                self.dealer_stands_on
            ));
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, String> {
        match self.log_level.to_ascii_lowercase().as_str() {
            "off" => Ok(LevelFilter::Off),
            "error" => Ok(LevelFilter::Error),
            "warn" => Ok(LevelFilter::Warn),
            "info" => Ok(LevelFilter::Info),
            "debug" => Ok(LevelFilter::Debug),
            "trace" => Ok(LevelFilter::Trace),
            other => Err(format!("unknown log level {other:?}")),
        }
    }

    pub fn to_game_rules(&self) -> GameRules {
        GameRules {
            dealer_stands_on: self.dealer_stands_on,
        }
    }
}
