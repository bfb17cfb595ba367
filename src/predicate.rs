//! Zone membership predicates.
//!
//! A predicate is built as a typed condition tree and serialized with
//! serde_json at the file boundary. Shapes per bounds:
//!
//! ```text
//! Below { max }        inside(max)
//! Above { min }        inverted(inside(min))
//! Between { min, max } [inside(max), inverted(inside(min))]
//! ```
//!
//! `inside(r)` checks every objective of the axis against `[-r, r]`. For
//! distance that is a square around the origin on x and z; for insanity it is
//! the single score.

use std::collections::BTreeMap;

use serde::Serialize;
use softborder_core::{objectives, Bounds, ZoneKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityTarget {
    This,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreRange {
    pub min: i64,
    pub max: i64,
}

impl ScoreRange {
    pub fn symmetric(radius: i64) -> Self {
        Self {
            min: radius.saturating_neg(),
            max: radius,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "condition")]
pub enum Condition {
    #[serde(rename = "minecraft:entity_scores")]
    EntityScores {
        entity: EntityTarget,
        scores: BTreeMap<String, ScoreRange>,
    },
    #[serde(rename = "minecraft:inverted")]
    Inverted { term: Box<Condition> },
}

impl Condition {
    pub fn inverted(self) -> Self {
        Condition::Inverted {
            term: Box::new(self),
        }
    }
}

/// A predicate file body: one condition, or a list the runtime ANDs together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Predicate {
    Single(Condition),
    All(Vec<Condition>),
}

impl Predicate {
    pub fn for_bounds(kind: ZoneKind, bounds: &Bounds) -> Self {
        match *bounds {
            Bounds::Below { max } => Predicate::Single(inside(kind, max)),
            Bounds::Above { min } => Predicate::Single(outside(kind, min)),
            Bounds::Between { min, max } => Predicate::All(vec![inside(kind, max), outside(kind, min)]),
        }
    }

    /// Pretty JSON with a trailing newline.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

fn axis_objectives(kind: ZoneKind) -> &'static [&'static str] {
    match kind {
        ZoneKind::Distance => &[objectives::PLAYER_DX, objectives::PLAYER_DZ],
        ZoneKind::Insanity => &[objectives::INSANITY],
    }
}

pub fn inside(kind: ZoneKind, radius: i64) -> Condition {
    let scores = axis_objectives(kind)
        .iter()
        .map(|objective| (objective.to_string(), ScoreRange::symmetric(radius)))
        .collect();
    Condition::EntityScores {
        entity: EntityTarget::This,
        scores,
    }
}

/// "At least `radius` away", expressed as NOT inside(radius).
pub fn outside(kind: ZoneKind, radius: i64) -> Condition {
    inside(kind, radius).inverted()
}
