//! Forgiving deserializers for hand-edited spawn data.
//!
//! Numbers may arrive as JSON numbers, numeric strings, `null`, or be missing entirely.
//! Anything that does not read as a finite number becomes `0` (or `None` for optional
//! fields). Flags only count when they are literally `true`. Collections and nested
//! objects given as `null` read as empty.
use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;

enum Loose {
    Number(f64),
    Flag(bool),
    Nothing,
}

struct LooseVisitor;

impl<'de> Visitor<'de> for LooseVisitor {
    type Value = Loose;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number, numeric string, boolean, or null")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Loose, E> {
        Ok(if v.is_finite() {
            Loose::Number(v)
        } else {
            Loose::Nothing
        })
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Loose, E> {
        Ok(Loose::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Loose, E> {
        Ok(Loose::Number(v as f64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Loose, E> {
        match v.trim().parse::<f64>() {
            Ok(n) => self.visit_f64(n),
            Err(_) => Ok(Loose::Nothing),
        }
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Loose, E> {
        Ok(Loose::Flag(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Loose, E> {
        Ok(Loose::Nothing)
    }

    fn visit_none<E: de::Error>(self) -> Result<Loose, E> {
        Ok(Loose::Nothing)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Loose, D::Error> {
        d.deserialize_any(LooseVisitor)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Loose, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Loose::Nothing)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Loose, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Loose::Nothing)
    }
}

fn loose<'de, D: Deserializer<'de>>(d: D) -> Result<Loose, D::Error> {
    d.deserialize_any(LooseVisitor)
}

/// A number that defaults to `0.0` when missing or non-numeric.
pub fn number<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    Ok(optional_number(d)?.unwrap_or(0.0))
}

/// Pixel-space variant of [`number`].
pub fn number_f32<'de, D: Deserializer<'de>>(d: D) -> Result<f32, D::Error> {
    Ok(number(d)? as f32)
}

/// Image dimension; negative and fractional values saturate towards zero.
pub fn dimension<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    Ok(number(d)? as u32)
}

/// A number that stays `None` when missing or non-numeric.
pub fn optional_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    Ok(match loose(d)? {
        Loose::Number(n) => Some(n),
        Loose::Flag(_) | Loose::Nothing => None,
    })
}

/// A flag that only holds when the value is the literal `true`.
pub fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    Ok(matches!(loose(d)?, Loose::Flag(true)))
}

/// A collection or nested object where `null` means the default (empty) value.
pub fn or_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}
