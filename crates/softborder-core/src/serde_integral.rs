//! Integer fields that also accept whole-number floats (`10.0`).
//!
//! Use with `#[serde(deserialize_with = "serde_integral::deserialize")]`, or
//! `serde_integral::option::deserialize` together with `#[serde(default)]`.

use serde::de::Error;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberInput {
    Integer(i64),
    Float(f64),
}

fn to_i64<E: Error>(input: NumberInput) -> Result<i64, E> {
    match input {
        NumberInput::Integer(value) => Ok(value),
        // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
        NumberInput::Float(value)
            if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 =>
        {
            Ok(value as i64)
        }
        NumberInput::Float(value) => Err(E::custom(format!(
            "expected a whole number, found {}",
            value
        ))),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    to_i64(NumberInput::deserialize(deserializer)?)
}

pub mod option {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<NumberInput>::deserialize(deserializer)?
            .map(to_i64)
            .transpose()
    }
}
