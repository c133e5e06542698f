//! Magic reference data.
//!
//! Spell accuracy depends on two pieces of policy that belong to game data
//! rather than to the formula: how far a sunfire rune lowers the target's
//! magic defence level, and which defence column a spell is checked against
//! for a given spellbook. Resolvers only ever reach them through
//! [`MagicReference`].
//!
//! [`AccuracyConfig`] is the JSON-backed implementation.
//!
//! # Example
//!
//! ```
//! use combat_commons::{BonusColumn, SpellId, Spellbook};
//! use combat_formulas::{AccuracyConfig, MagicReference};
//!
//! let config = AccuracyConfig::from_json_str(
//!     r#"{
//!         "sunfire_defence_reduction": 10,
//!         "spellbook_defence_columns": { "ancients": "crush" }
//!     }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.sunfire_defence_reduction(), 10);
//! assert_eq!(
//!     config.spell_defence_column(SpellId::new(1), Spellbook::Ancients),
//!     BonusColumn::Crush
//! );
//! assert_eq!(
//!     config.spell_defence_column(SpellId::new(1), Spellbook::Standard),
//!     BonusColumn::Magic
//! );
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use combat_commons::{BonusColumn, SpellId, Spellbook};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Reference data consulted by magic resolvers.
pub trait MagicReference: Send + Sync {
    /// Levels removed from the defender's magic defence level when a sunfire
    /// rune is used.
    fn sunfire_defence_reduction(&self) -> i32;

    /// Defence bonus column a cast of `spell` from `spellbook` is checked
    /// against.
    fn spell_defence_column(&self, spell: SpellId, spellbook: Spellbook) -> BonusColumn;
}

/// Errors raised while loading an [`AccuracyConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read accuracy config {path}: {source}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config is not valid JSON or does not match the schema
    #[error("invalid accuracy config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A sunfire reduction below zero would raise defence
    #[error("sunfire defence reduction must not be negative (got {0})")]
    NegativeSunfireReduction(i32),
}

/// Defence column per spellbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellbookColumns {
    /// Column for standard spells
    pub standard: BonusColumn,
    /// Column for ancient magicks
    pub ancients: BonusColumn,
    /// Column for lunar spells
    pub lunar: BonusColumn,
    /// Column for arceuus spells
    pub arceuus: BonusColumn,
}

impl SpellbookColumns {
    /// Column for `spellbook`.
    #[must_use]
    pub const fn get(&self, spellbook: Spellbook) -> BonusColumn {
        match spellbook {
            Spellbook::Standard => self.standard,
            Spellbook::Ancients => self.ancients,
            Spellbook::Lunar => self.lunar,
            Spellbook::Arceuus => self.arceuus,
        }
    }
}

impl Default for SpellbookColumns {
    fn default() -> Self {
        Self {
            standard: BonusColumn::Magic,
            ancients: BonusColumn::Magic,
            lunar: BonusColumn::Magic,
            arceuus: BonusColumn::Magic,
        }
    }
}

/// Accuracy reference data.
///
/// Every field has a default, so an empty JSON object is a valid config:
/// no sunfire reduction and every spell checked against magic defence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccuracyConfig {
    /// Levels removed from the target's magic defence by a sunfire rune
    pub sunfire_defence_reduction: i32,
    /// Defence column per spellbook
    pub spellbook_defence_columns: SpellbookColumns,
    /// Per-spell column overrides, taking precedence over the spellbook
    pub spell_defence_columns: BTreeMap<SpellId, BonusColumn>,
}

impl AccuracyConfig {
    /// Parses and validates a JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and any error from
    /// [`AccuracyConfig::validate`].
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        debug!(
            sunfire_defence_reduction = config.sunfire_defence_reduction,
            spell_overrides = config.spell_defence_columns.len(),
            "Loaded accuracy config"
        );
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise as
    /// [`AccuracyConfig::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Checks value ranges serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NegativeSunfireReduction`] when the sunfire
    /// reduction is below zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sunfire_defence_reduction < 0 {
            return Err(ConfigError::NegativeSunfireReduction(
                self.sunfire_defence_reduction,
            ));
        }
        Ok(())
    }
}

impl MagicReference for AccuracyConfig {
    fn sunfire_defence_reduction(&self) -> i32 {
        self.sunfire_defence_reduction
    }

    fn spell_defence_column(&self, spell: SpellId, spellbook: Spellbook) -> BonusColumn {
        self.spell_defence_columns
            .get(&spell)
            .copied()
            .unwrap_or_else(|| self.spellbook_defence_columns.get(spellbook))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        let config = AccuracyConfig::from_json_str("{}").unwrap();
        assert_eq!(config, AccuracyConfig::default());
        assert_eq!(config.sunfire_defence_reduction(), 0);
        assert_eq!(
            config.spell_defence_column(SpellId::new(9), Spellbook::Arceuus),
            BonusColumn::Magic
        );
    }

    #[test]
    fn spell_override_beats_spellbook() {
        let json = r#"{
            "spellbook_defence_columns": { "ancients": "slash" },
            "spell_defence_columns": { "77": "stab" }
        }"#;
        let config = AccuracyConfig::from_json_str(json).unwrap();
        assert_eq!(
            config.spell_defence_column(SpellId::new(77), Spellbook::Ancients),
            BonusColumn::Stab
        );
        assert_eq!(
            config.spell_defence_column(SpellId::new(78), Spellbook::Ancients),
            BonusColumn::Slash
        );
    }

    #[test]
    fn negative_reduction_rejected() {
        let err = AccuracyConfig::from_json_str(r#"{"sunfire_defence_reduction": -4}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::NegativeSunfireReduction(-4)));
        assert_eq!(
            err.to_string(),
            "sunfire defence reduction must not be negative (got -4)"
        );
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = AccuracyConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_column_is_parse_error() {
        let err = AccuracyConfig::from_json_str(
            r#"{"spellbook_defence_columns": {"lunar": "fire"}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = AccuracyConfig::from_path("/nonexistent/accuracy.json").unwrap_err();
        match err {
            ConfigError::Io { path, .. } => {
                assert_eq!(path, PathBuf::from("/nonexistent/accuracy.json"));
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn loads_from_file() {
        let path = std::env::temp_dir().join(format!(
            "combat-formulas-accuracy-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"sunfire_defence_reduction": 7}"#).unwrap();
        let config = AccuracyConfig::from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.sunfire_defence_reduction, 7);
    }
}
