//! Command builder for `.mcfunction` files.
//!
//! Generators assemble `Command` values; text only appears when a function is
//! rendered, one command per line.

use std::fmt;

use softborder_core::predicate_ref;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `@a`
    AllPlayers,
    /// `@s`
    Executor,
    /// `@a[predicate=<ns>:<name>]`
    PlayersMatching { predicate: String },
}

impl Selector {
    pub fn matching(predicate_name: &str) -> Self {
        Selector::PlayersMatching {
            predicate: predicate_name.to_string(),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::AllPlayers => write!(f, "@a"),
            Selector::Executor => write!(f, "@s"),
            Selector::PlayersMatching { predicate } => {
                write!(f, "@a[predicate={}]", predicate_ref(predicate))
            }
        }
    }
}

/// Score match range; only the open-ended form is needed so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRange {
    AtLeast(i64),
}

impl fmt::Display for MatchRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchRange::AtLeast(n) => write!(f, "{}..", n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecuteCondition {
    IfPredicate(String),
    IfScore {
        target: Selector,
        objective: String,
        range: MatchRange,
    },
}

impl fmt::Display for ExecuteCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecuteCondition::IfPredicate(name) => write!(f, "if predicate {}", predicate_ref(name)),
            ExecuteCondition::IfScore {
                target,
                objective,
                range,
            } => write!(f, "if score {} {} matches {}", target, objective, range),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    EffectGive {
        targets: Selector,
        effect: String,
        seconds: u32,
        amplifier: i32,
        hide_particles: bool,
    },
    ScoreboardSet {
        target: Selector,
        objective: String,
        value: i64,
    },
    ScoreboardAdd {
        target: Selector,
        objective: String,
        amount: i64,
    },
    Execute {
        executor: Selector,
        conditions: Vec<ExecuteCondition>,
        run: Box<Command>,
    },
    /// Call a function; `function` is a full resource location.
    Function { function: String },
    Schedule {
        function: String,
        delay_secs: u32,
        replace: bool,
    },
    ScheduleClear { function: String },
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::EffectGive {
                targets,
                effect,
                seconds,
                amplifier,
                hide_particles,
            } => write!(
                f,
                "effect give {} {} {} {} {}",
                targets, effect, seconds, amplifier, hide_particles
            ),
            Command::ScoreboardSet {
                target,
                objective,
                value,
            } => write!(f, "scoreboard players set {} {} {}", target, objective, value),
            Command::ScoreboardAdd {
                target,
                objective,
                amount,
            } => write!(f, "scoreboard players add {} {} {}", target, objective, amount),
            Command::Execute {
                executor,
                conditions,
                run,
            } => {
                write!(f, "execute as {}", executor)?;
                for condition in conditions {
                    write!(f, " {}", condition)?;
                }
                write!(f, " run {}", run)
            }
            Command::Function { function } => write!(f, "function {}", function),
            Command::Schedule {
                function,
                delay_secs,
                replace,
            } => {
                write!(f, "schedule function {} {}s", function, delay_secs)?;
                if *replace {
                    write!(f, " replace")?;
                } else {
                    write!(f, " append")?;
                }
                Ok(())
            }
            Command::ScheduleClear { function } => write!(f, "schedule clear {}", function),
        }
    }
}

/// An ordered command list, rendered as one `.mcfunction` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct McFunction {
    commands: Vec<Command>,
}

impl McFunction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Each command on its own `\n`-terminated line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for command in &self.commands {
            out.push_str(&command.to_string());
            out.push('\n');
        }
        out
    }
}

impl FromIterator<Command> for McFunction {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}
