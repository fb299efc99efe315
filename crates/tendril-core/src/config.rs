use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::BlockKind;

/// Named set of cell kinds a spreader may convert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceableSet {
    /// Tag name for debug display.
    pub name: String,
    pub kinds: Vec<BlockKind>,
}

impl ReplaceableSet {
    pub fn new(name: impl Into<String>, kinds: impl IntoIterator<Item = BlockKind>) -> Self {
        Self {
            name: name.into(),
            kinds: kinds.into_iter().collect(),
        }
    }

    pub fn contains(&self, kind: BlockKind) -> bool {
        self.kinds.contains(&kind)
    }
}

/// Immutable parameters for one kind of spreader.
///
/// Only `is_world_generation` is read by the engine itself. The remaining
/// values are policy knobs handed through to block capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpreaderConfig {
    /// Disables merging and bounds cursor movement radius.
    pub is_world_generation: bool,
    /// Cells eligible as conversion targets.
    pub replaceable_set: ReplaceableSet,
    /// Charge spent when a capability spawns an auxiliary growth.
    pub growth_spawn_cost: i32,
    /// Radius around the origin inside which nothing grows.
    pub no_growth_radius: i32,
    /// One-in-N chance per action that charge is spent at all.
    pub charge_decay_rate: i32,
    /// One-in-N chance that a non-growing action also decays charge.
    pub additional_decay_rate: i32,
}

impl SpreaderConfig {
    /// In-place growth around a catalyst: slow decay, dense growth.
    pub fn level(replaceable_set: ReplaceableSet) -> Self {
        Self {
            is_world_generation: false,
            replaceable_set,
            growth_spawn_cost: 10,
            no_growth_radius: 4,
            charge_decay_rate: 10,
            additional_decay_rate: 5,
        }
    }

    /// Spatially bounded growth during structure generation: fast decay,
    /// aggressive growth.
    pub fn world_generation(replaceable_set: ReplaceableSet) -> Self {
        Self {
            is_world_generation: true,
            replaceable_set,
            growth_spawn_cost: 50,
            no_growth_radius: 1,
            charge_decay_rate: 5,
            additional_decay_rate: 10,
        }
    }

    /// Validate parameter ranges. Rates are used as one-in-N bounds and must
    /// be at least 1.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks: [(&'static str, i32, i32); 4] = [
            ("growth_spawn_cost", self.growth_spawn_cost, 1),
            ("no_growth_radius", self.no_growth_radius, 0),
            ("charge_decay_rate", self.charge_decay_rate, 1),
            ("additional_decay_rate", self.additional_decay_rate, 1),
        ];
        for (field, value, min) in checks {
            if value < min {
                return Err(ConfigError::BelowMinimum { field, min, value });
            }
        }

        let set = &self.replaceable_set;
        if set.kinds.is_empty() {
            return Err(ConfigError::EmptyReplaceableSet(set.name.clone()));
        }
        if set.kinds.iter().any(|k| k.is_air()) {
            return Err(ConfigError::AirReplaceable(set.name.clone()));
        }
        Ok(())
    }
}

/// Parse and validate a spreader config from a RON string.
pub fn load_config_from_str(ron_str: &str) -> Result<SpreaderConfig, ConfigError> {
    let options = ron::Options::default();
    let config: SpreaderConfig = options
        .from_str(ron_str)
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;
    config.validate()?;
    Ok(config)
}
