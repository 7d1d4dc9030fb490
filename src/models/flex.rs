// src/models/flex.rs

//! Lenient integer fields: quiz front ends send ids and difficulties either as
//! JSON numbers or as the string value of a `<select>`.

use serde::{Deserialize, Deserializer, de};

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

fn to_int<T, E>(value: IntOrString) -> Result<T, E>
where
    T: TryFrom<i64>,
    E: de::Error,
{
    let n = match value {
        IntOrString::Int(n) => n,
        IntOrString::Str(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| E::custom(format!("expected an integer, found {:?}", s)))?,
    };
    T::try_from(n).map_err(|_| E::custom(format!("integer {} out of range", n)))
}

/// Deserializes a required integer given as a number or numeric string.
pub fn int<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    to_int(IntOrString::deserialize(deserializer)?)
}

/// Reads an integer already held as raw JSON, e.g. a field whose presence
/// was checked before its type. `None` if it is neither form.
pub fn int_value<T>(value: &serde_json::Value) -> Option<T>
where
    T: TryFrom<i64>,
{
    to_int::<T, serde_json::Error>(IntOrString::deserialize(value).ok()?).ok()
}
