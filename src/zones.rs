//! Gain-step partitioning.
//!
//! The sorted gain-step distances become the boundary sequence
//! `[0, d1, .., dn, inf]`, giving `n + 1` contiguous bands. A band is named
//! after its lower edge only; the upper edge is the next band's lower edge.

use softborder_core::{insanity_gain_name, Bounds, InsanityGainStep};

/// One contiguous distance band `[lower, upper)`; `upper` is `None` for the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GainBand {
    pub lower: i64,
    pub upper: Option<i64>,
}

impl GainBand {
    pub fn name(&self) -> String {
        insanity_gain_name(self.lower)
    }

    /// The lower edge is always set, so this is never unbounded.
    pub fn bounds(&self) -> Bounds {
        match self.upper {
            Some(max) => Bounds::Between {
                min: self.lower,
                max,
            },
            None => Bounds::Above { min: self.lower },
        }
    }
}

/// Partition `steps` (sorted ascending by distance) into gain bands.
///
/// Equal adjacent distances yield an empty band rather than an error.
pub fn partition(steps: &[InsanityGainStep]) -> Vec<GainBand> {
    let edges: Vec<i64> = std::iter::once(0).chain(steps.iter().map(|s| s.distance)).collect();

    edges
        .iter()
        .enumerate()
        .map(|(i, &lower)| GainBand {
            lower,
            upper: edges.get(i + 1).copied(),
        })
        .collect()
}
