//! Identifier derivation shared by every generator.
//!
//! A zone or gain step is never looked up by loading a generated file back;
//! predicate files, effect functions, and scheduling commands agree on names
//! only because they all go through these functions. A missing bound renders
//! as `0` (min) or `inf` (max). That is an identifier convention only and has
//! nothing to do with how the bound is evaluated.

use std::fmt;

use crate::config::Bounds;

/// Datapack namespace all generated resources live under.
pub const NAMESPACE: &str = "softborder";

/// Function directory (relative to the namespace) for generated functions.
pub const GEN_FUNCTION_DIR: &str = "private/gen";

/// Which axis a user-declared zone is measured on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneKind {
    Distance,
    Insanity,
}

impl ZoneKind {
    pub fn prefix(self) -> &'static str {
        match self {
            ZoneKind::Distance => "dz",
            ZoneKind::Insanity => "iz",
        }
    }
}

impl fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneKind::Distance => write!(f, "distance"),
            ZoneKind::Insanity => write!(f, "insanity"),
        }
    }
}

/// Name of the gain-step band starting at `lower`.
///
/// Bands are contiguous, so the upper edge is implied by the next step.
pub fn insanity_gain_name(lower: i64) -> String {
    format!("ig_zone_{}", lower)
}

pub fn distance_zone_name(min: Option<i64>, max: Option<i64>) -> String {
    bounded_zone_name(ZoneKind::Distance, min, max)
}

pub fn insanity_zone_name(min: Option<i64>, max: Option<i64>) -> String {
    bounded_zone_name(ZoneKind::Insanity, min, max)
}

pub fn zone_name(kind: ZoneKind, bounds: &Bounds) -> String {
    bounded_zone_name(kind, bounds.min(), bounds.max())
}

fn bounded_zone_name(kind: ZoneKind, min: Option<i64>, max: Option<i64>) -> String {
    let min = min.map_or_else(|| "0".to_string(), |v| v.to_string());
    let max = max.map_or_else(|| "inf".to_string(), |v| v.to_string());
    format!("{}_zone_{}_{}", kind.prefix(), min, max)
}

/// `softborder:<name>`, how commands refer to a predicate.
pub fn predicate_ref(name: &str) -> String {
    format!("{}:{}", NAMESPACE, name)
}

/// `softborder:private/gen/<name>`, how commands refer to a generated function.
pub fn function_ref(name: &str) -> String {
    format!("{}:{}/{}", NAMESPACE, GEN_FUNCTION_DIR, name)
}

/// Scoreboard objectives the datapack's hand-written functions maintain.
pub mod objectives {
    /// Player x offset from the border origin.
    pub const PLAYER_DX: &str = "sb_player_dx";
    /// Player z offset from the border origin.
    pub const PLAYER_DZ: &str = "sb_player_dz";
    pub const INSANITY: &str = "sb_insanity";
    /// 1 or more while the player has a roof over their head.
    pub const UNDER_COVER: &str = "sb_player_under_cover";
}
