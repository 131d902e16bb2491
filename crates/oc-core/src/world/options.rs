//! Game options and configuration
//!
//! Options are read from an rc-style file:
//!
//! ```text
//! # comment
//! OPTIONS=name:Adrian,seed:42,pace:3000
//! OPTIONS=spawns:3,droprule:inverted,!manacheck
//! ```

use std::path::Path;
use std::str::FromStr;

use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

use crate::consts::{DEFAULT_BATTLE_PACE_MS, MAIN_SPAWN_SPOTS, PLAYER_NAME};

/// How a drop-table rate is compared against the loot roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum DropRule {
    /// Item drops when the roll is at or above the rate, so a 0.7 rate drops 30% of the time
    #[default]
    Inverted,
    /// Item drops when the roll is below the rate: the rate is the drop chance
    Direct,
}

impl DropRule {
    /// Whether `roll` (in `[0, 1)`) grants an item listed at `rate`
    pub fn grants(self, roll: f64, rate: f64) -> bool {
        match self {
            DropRule::Inverted => roll >= rate,
            DropRule::Direct => roll < rate,
        }
    }
}

/// User-configurable game options
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Player name
    pub name: String,

    /// RNG seed, entropy when unset
    pub seed: Option<u64>,

    /// Pause between battle rounds, in milliseconds
    pub battle_pace_ms: u64,

    /// Mobs spawned on the main map
    pub spawn_spots: usize,

    /// Loot roll comparison
    pub drop_rule: DropRule,

    /// Refuse to cast skills the caster cannot afford
    pub mana_check: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            name: PLAYER_NAME.to_string(),
            seed: None,
            battle_pace_ms: DEFAULT_BATTLE_PACE_MS,
            spawn_spots: MAIN_SPAWN_SPOTS,
            drop_rule: DropRule::default(),
            mana_check: false,
        }
    }
}

impl GameOptions {
    /// Load options from a file
    pub fn load_from_file(path: &Path) -> Result<Self, OptionsError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| OptionsError::IoError(e.to_string()))?;

        Self::parse_config(&contents)
    }

    /// Parse options from a config string
    pub fn parse_config(contents: &str) -> Result<Self, OptionsError> {
        let mut options = Self::default();

        for line in contents.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match line.strip_prefix("OPTIONS=") {
                Some(opts) => {
                    for opt in opts.split(',').map(str::trim).filter(|o| !o.is_empty()) {
                        options.parse_option(opt)?;
                    }
                }
                None => return Err(OptionsError::ParseError(line.to_string())),
            }
        }

        Ok(options)
    }

    /// Parse a single option
    fn parse_option(&mut self, opt: &str) -> Result<(), OptionsError> {
        if let Some((key, value)) = opt.split_once(':').or_else(|| opt.split_once('=')) {
            return self.set_option(key.trim(), value.trim());
        }

        let (negated, opt_name) = if let Some(name) = opt.strip_prefix('!') {
            (true, name)
        } else if let Some(name) = opt.strip_prefix("no") {
            (true, name)
        } else {
            (false, opt)
        };

        self.set_bool_option(opt_name, !negated)
    }

    fn set_bool_option(&mut self, name: &str, value: bool) -> Result<(), OptionsError> {
        match name {
            "manacheck" => self.mana_check = value,
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), OptionsError> {
        if value.is_empty() {
            return Err(OptionsError::MissingValue(name.to_string()));
        }
        let invalid = || OptionsError::InvalidValue(name.to_string(), value.to_string());

        match name {
            "name" => self.name = value.to_string(),
            "seed" => self.seed = Some(value.parse().map_err(|_| invalid())?),
            "pace" => self.battle_pace_ms = value.parse().map_err(|_| invalid())?,
            "spawns" => self.spawn_spots = value.parse().map_err(|_| invalid())?,
            "droprule" => {
                self.drop_rule = DropRule::from_str(&value.to_lowercase()).map_err(|_| invalid())?
            }
            "manacheck" => {
                self.mana_check = match value.to_lowercase().as_str() {
                    "true" | "on" | "1" => true,
                    "false" | "off" | "0" => false,
                    _ => return Err(invalid()),
                }
            }
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Serialize back to the rc format
    pub fn to_config_string(&self) -> String {
        let mut opts = vec![
            format!("name:{}", self.name),
            format!("pace:{}", self.battle_pace_ms),
            format!("spawns:{}", self.spawn_spots),
            format!("droprule:{}", self.drop_rule),
            if self.mana_check { "manacheck" } else { "!manacheck" }.to_string(),
        ];
        if let Some(seed) = self.seed {
            opts.insert(1, format!("seed:{seed}"));
        }
        format!("OPTIONS={}\n", opts.join(","))
    }
}

/// Options parsing error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Unknown option: {0}")]
    UnknownOption(String),
    #[error("Invalid value '{1}' for option '{0}'")]
    InvalidValue(String, String),
    #[error("Missing value for option '{0}'")]
    MissingValue(String),
}
