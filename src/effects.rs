//! Effect and insanity command generation.
//!
//! Constant effects are collected into a single function that the pack's
//! tick loop runs, refreshing a short effect so it reads as continuous.
//! Periodic effects each get their own function that gives the effect and
//! schedules itself again with `replace`, so starting a loop twice never
//! stacks two schedules.

use softborder_core::{
    function_ref, insanity_gain_name, objectives, Config, EffectKind, InsanityGainStep, Zone,
};
use tracing::debug;

use crate::command::{Command, ExecuteCondition, MatchRange, McFunction, Selector};

/// Seconds a constant effect is given for on each refresh.
pub const CONSTANT_EFFECT_SECONDS: u32 = 5;

/// Generated function names (under `private/gen`).
pub const UPDATE_INSANITY: &str = "update_insanity";
pub const APPLY_CONST_EFFECTS: &str = "apply_const_effects";
pub const START_PERIODIC_EFFECTS: &str = "start_periodic_effects";
pub const STOP_PERIODIC_EFFECTS: &str = "stop_periodic_effects";

/// A zone's self-rescheduling effect loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodicLoop {
    pub name: String,
    pub function: McFunction,
}

/// Every effect function derived from a config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectFunctions {
    pub constant: McFunction,
    pub periodic: Vec<PeriodicLoop>,
    pub start: McFunction,
    pub stop: McFunction,
}

impl EffectFunctions {
    /// Insanity zones are processed before distance zones.
    pub fn from_config(config: &Config) -> Self {
        let mut constant = McFunction::new();
        let mut periodic = Vec::new();

        for zone in config.effect_zones() {
            match zone.effect.kind {
                EffectKind::Constant => constant.push(constant_effect(zone)),
                EffectKind::Periodic { period, pulse } => {
                    let name = zone.name();
                    debug!(zone = %name, period, pulse, "periodic effect");
                    periodic.push(PeriodicLoop {
                        function: periodic_effect(zone, period, pulse),
                        name,
                    });
                }
            }
        }

        let names: Vec<&str> = periodic.iter().map(|p| p.name.as_str()).collect();
        let start = start_periodic_effects(&names);
        let stop = stop_periodic_effects(&names);
        Self {
            constant,
            periodic,
            start,
            stop,
        }
    }
}

pub fn constant_effect(zone: &Zone) -> Command {
    Command::EffectGive {
        targets: Selector::matching(&zone.name()),
        effect: zone.effect.id.clone(),
        seconds: CONSTANT_EFFECT_SECONDS,
        amplifier: zone.effect.amplifier,
        hide_particles: true,
    }
}

/// Give the effect for `pulse` seconds, then run again in `period` seconds.
pub fn periodic_effect(zone: &Zone, period: u32, pulse: u32) -> McFunction {
    let name = zone.name();
    let mut function = McFunction::new();
    function.push(Command::EffectGive {
        targets: Selector::matching(&name),
        effect: zone.effect.id.clone(),
        seconds: pulse,
        amplifier: zone.effect.amplifier,
        hide_particles: true,
    });
    function.push(Command::Schedule {
        function: function_ref(&name),
        delay_secs: period,
        replace: true,
    });
    function
}

pub fn start_periodic_effects(names: &[&str]) -> McFunction {
    names
        .iter()
        .map(|name| Command::Function {
            function: function_ref(name),
        })
        .collect()
}

pub fn stop_periodic_effects(names: &[&str]) -> McFunction {
    names
        .iter()
        .map(|name| Command::ScheduleClear {
            function: function_ref(name),
        })
        .collect()
}

/// Insanity tick: reset anyone under cover in the innermost band, then add
/// each step's amount to players in that step's band.
///
/// The lines are independent, so a player reset by the first line can still
/// gain on a later one in the same pass. The order is kept as is.
pub fn update_insanity(steps: &[InsanityGainStep]) -> McFunction {
    let mut function = McFunction::new();
    function.push(Command::Execute {
        executor: Selector::AllPlayers,
        conditions: vec![
            ExecuteCondition::IfPredicate(insanity_gain_name(0)),
            ExecuteCondition::IfScore {
                target: Selector::Executor,
                objective: objectives::UNDER_COVER.to_string(),
                range: MatchRange::AtLeast(1),
            },
        ],
        run: Box::new(Command::ScoreboardSet {
            target: Selector::Executor,
            objective: objectives::INSANITY.to_string(),
            value: 0,
        }),
    });

    for step in steps {
        function.push(Command::Execute {
            executor: Selector::AllPlayers,
            conditions: vec![ExecuteCondition::IfPredicate(insanity_gain_name(step.distance))],
            run: Box::new(Command::ScoreboardAdd {
                target: Selector::Executor,
                objective: objectives::INSANITY.to_string(),
                amount: step.amount,
            }),
        });
    }
    function
}
