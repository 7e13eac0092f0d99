// Author: Dustin Pilgrim
// License: MIT
//
// Text <-> typed option values.
//
// Operands arrive as raw command-line text; the kind they are parsed as is
// either given by the user (declare) or revealed by the compositor's reply
// (set, modify).

use crate::error::{OptionError, Result};
use crate::value::{OptionValue, ValueKind};

/// Parse `raw` as a value of `kind`.
pub fn parse(raw: &str, kind: ValueKind) -> Result<OptionValue> {
    match kind {
        ValueKind::Int => parse_int(raw).map(OptionValue::Int),
        ValueKind::Uint => parse_uint(raw).map(OptionValue::Uint),
        ValueKind::Fixed => parse_fixed(raw).map(OptionValue::Fixed),
        ValueKind::String => Ok(OptionValue::String(parse_string(raw))),
    }
}

/// Apply the relative operand `raw` to `current`.
///
/// Signed values wrap on overflow. Unsigned values accept a negative delta
/// and never go below zero; a result past `u32::MAX` is rejected.
pub fn modify(current: &OptionValue, raw: &str) -> Result<OptionValue> {
    match current {
        OptionValue::Int(v) => {
            let delta = parse_int(raw)?;
            Ok(OptionValue::Int(v.wrapping_add(delta)))
        }
        OptionValue::Uint(v) => {
            let delta: i32 = raw
                .parse()
                .map_err(|_| OptionError::InvalidUint(raw.to_string()))?;
            let sum = (i64::from(*v) + i64::from(delta)).max(0);
            u32::try_from(sum)
                .map(OptionValue::Uint)
                .map_err(|_| OptionError::InvalidUint(raw.to_string()))
        }
        OptionValue::Fixed(v) => {
            let delta = parse_fixed(raw)?;
            Ok(OptionValue::Fixed(v + delta))
        }
        OptionValue::String(_) => Err(OptionError::UnsupportedOperation(
            "can not modify string options",
        )),
    }
}

/// Render a value the way `get-option` prints it. An unset string renders
/// as nothing at all.
pub fn format(value: &OptionValue) -> Option<String> {
    match value {
        OptionValue::Int(v) => Some(v.to_string()),
        OptionValue::Uint(v) => Some(v.to_string()),
        OptionValue::Fixed(v) => Some(v.to_string()),
        OptionValue::String(s) => s.clone(),
    }
}

fn parse_int(raw: &str) -> Result<i32> {
    raw.parse()
        .map_err(|_| OptionError::InvalidInt(raw.to_string()))
}

// Read as a signed 32-bit number, the same way deltas are read.
fn parse_uint(raw: &str) -> Result<u32> {
    raw.parse::<i32>()
        .ok()
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| OptionError::InvalidUint(raw.to_string()))
}

fn parse_fixed(raw: &str) -> Result<f64> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(OptionError::InvalidFixed(raw.to_string())),
    }
}

fn parse_string(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}
