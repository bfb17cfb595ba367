//! Zone configuration: serde structs for config.json and their normalized form.
//!
//! `RawConfig` mirrors the document as authored: camelCase keys, optional
//! bounds, optional effect level and type. `Config` is what the generators
//! consume. Getting from one to the other sorts the gain steps, fills effect
//! defaults, and rejects zones without any bound, so no generator ever sees
//! a half-specified zone.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::names::{self, ZoneKind};
use crate::serde_integral;

// ---------------------------------------------------------------------------
// Raw schema
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawConfig {
    pub insanity_gain: Vec<RawGainStep>,
    pub distance_zones: Vec<RawDistanceZone>,
    pub insanity_zones: Vec<RawInsanityZone>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawGainStep {
    #[serde(deserialize_with = "serde_integral::deserialize")]
    pub distance: i64,
    #[serde(deserialize_with = "serde_integral::deserialize")]
    pub amount: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDistanceZone {
    #[serde(default, deserialize_with = "serde_integral::option::deserialize")]
    pub min_distance: Option<i64>,
    #[serde(default, deserialize_with = "serde_integral::option::deserialize")]
    pub max_distance: Option<i64>,
    pub effect: RawEffect,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInsanityZone {
    #[serde(default, deserialize_with = "serde_integral::option::deserialize")]
    pub min_insanity: Option<i64>,
    #[serde(default, deserialize_with = "serde_integral::option::deserialize")]
    pub max_insanity: Option<i64>,
    pub effect: RawEffect,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawEffect {
    pub id: String,
    /// 1-based potency as shown in game.
    pub level: Option<i32>,
    #[serde(rename = "type")]
    pub kind: Option<RawEffectType>,
}

/// `"constant"` or `{ "period": .., "pulse": .. }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawEffectType {
    Keyword(EffectKeyword),
    Periodic { period: u32, pulse: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum EffectKeyword {
    #[serde(rename = "constant")]
    Constant,
}

// ---------------------------------------------------------------------------
// Normalized model
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Sorted ascending by distance. The partitioner relies on this order.
    pub gain_steps: Vec<InsanityGainStep>,
    pub distance_zones: Vec<Zone>,
    pub insanity_zones: Vec<Zone>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsanityGainStep {
    pub distance: i64,
    pub amount: i64,
}

/// Zone bounds with at least one side set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounds {
    /// Within `max` of zero.
    Below { max: i64 },
    /// At least `min` away from zero.
    Above { min: i64 },
    /// Within `max` but not within `min`.
    Between { min: i64, max: i64 },
}

impl Bounds {
    /// `None` when neither side is set.
    pub fn new(min: Option<i64>, max: Option<i64>) -> Option<Self> {
        match (min, max) {
            (None, None) => None,
            (None, Some(max)) => Some(Bounds::Below { max }),
            (Some(min), None) => Some(Bounds::Above { min }),
            (Some(min), Some(max)) => Some(Bounds::Between { min, max }),
        }
    }

    pub fn min(&self) -> Option<i64> {
        match *self {
            Bounds::Below { .. } => None,
            Bounds::Above { min } | Bounds::Between { min, .. } => Some(min),
        }
    }

    pub fn max(&self) -> Option<i64> {
        match *self {
            Bounds::Above { .. } => None,
            Bounds::Below { max } | Bounds::Between { max, .. } => Some(max),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    pub kind: ZoneKind,
    pub bounds: Bounds,
    pub effect: Effect,
}

impl Zone {
    /// Identifier shared by the zone's predicate and its effect function.
    pub fn name(&self) -> String {
        names::zone_name(self.kind, &self.bounds)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Effect {
    pub id: String,
    /// 0-based amplifier as used by `effect give`.
    pub amplifier: i32,
    pub kind: EffectKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    /// Refreshed every tick of the constant-effects function.
    Constant,
    /// Given for `pulse` seconds, once every `period` seconds.
    Periodic { period: u32, pulse: u32 },
}

impl EffectKind {
    pub fn is_periodic(&self) -> bool {
        matches!(self, EffectKind::Periodic { .. })
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

impl RawEffect {
    pub fn normalize(self) -> Effect {
        let kind = match self.kind {
            None | Some(RawEffectType::Keyword(EffectKeyword::Constant)) => EffectKind::Constant,
            Some(RawEffectType::Periodic { period, pulse }) => EffectKind::Periodic { period, pulse },
        };
        Effect {
            id: self.id,
            amplifier: self.level.map_or(0, |level| level.saturating_sub(1)),
            kind,
        }
    }
}

fn normalize_zone(
    kind: ZoneKind,
    index: usize,
    min: Option<i64>,
    max: Option<i64>,
    effect: RawEffect,
) -> Result<Zone> {
    let bounds = Bounds::new(min, max).ok_or_else(|| Error::unbounded_zone(kind, index))?;
    Ok(Zone {
        kind,
        bounds,
        effect: effect.normalize(),
    })
}

impl RawConfig {
    pub fn normalize(self) -> Result<Config> {
        let mut gain_steps: Vec<InsanityGainStep> = self
            .insanity_gain
            .into_iter()
            .map(|s| InsanityGainStep {
                distance: s.distance,
                amount: s.amount,
            })
            .collect();
        gain_steps.sort_by_key(|s| s.distance);

        let distance_zones = self
            .distance_zones
            .into_iter()
            .enumerate()
            .map(|(i, z)| normalize_zone(ZoneKind::Distance, i, z.min_distance, z.max_distance, z.effect))
            .collect::<Result<Vec<_>>>()?;

        let insanity_zones = self
            .insanity_zones
            .into_iter()
            .enumerate()
            .map(|(i, z)| normalize_zone(ZoneKind::Insanity, i, z.min_insanity, z.max_insanity, z.effect))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            gain_steps = gain_steps.len(),
            distance_zones = distance_zones.len(),
            insanity_zones = insanity_zones.len(),
            "normalized config"
        );

        Ok(Config {
            gain_steps,
            distance_zones,
            insanity_zones,
        })
    }
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(json)?;
        raw.normalize()
    }

    /// Load and normalize from a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::config_read(path, e))?;
        Self::from_json_str(&content)
    }

    /// All user zones in generation order: insanity zones, then distance zones.
    pub fn effect_zones(&self) -> impl Iterator<Item = &Zone> {
        self.insanity_zones.iter().chain(self.distance_zones.iter())
    }
}
