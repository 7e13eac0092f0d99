// Author: Dustin Pilgrim
// License: MIT

#[cfg(feature = "clap")]
use clap::ValueEnum;

/// The four option types the compositor knows about.
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Int,
    Uint,
    Fixed,
    String,
}

/// A typed option value as it travels on the wire.
///
/// The variant is decided by whoever declared the option, so a client only
/// learns it from the reply to a handle.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Int(i32),
    Uint(u32),
    /// Decimal value; the wire carries it as 24.8 fixed point.
    Fixed(f64),
    /// `None` is the unset string.
    String(Option<String>),
}

impl OptionValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            OptionValue::Int(_) => ValueKind::Int,
            OptionValue::Uint(_) => ValueKind::Uint,
            OptionValue::Fixed(_) => ValueKind::Fixed,
            OptionValue::String(_) => ValueKind::String,
        }
    }
}

/// The single terminal event an option handle receives.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionReply {
    /// Nobody declared this option (for this scope).
    Unset,
    Value(OptionValue),
}
