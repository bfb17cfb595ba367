//! Softborder datapack generator.
//!
//! Reads a zone config and emits the generated half of the softborder
//! datapack: membership predicates for every gain band and zone, and the
//! functions that apply effects and accumulate insanity.

pub mod command;
pub mod effects;
pub mod pack;
pub mod predicate;
pub mod zones;

pub use pack::{
    check_preflight, generate, preflight, Datapack, DatapackLayout, GenerationReport, PreflightFailed,
    PreflightIssue,
};
