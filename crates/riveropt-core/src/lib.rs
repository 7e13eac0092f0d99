// Author: Dustin Pilgrim
// License: MIT

pub mod codec;
pub mod command;
pub mod error;
pub mod scope;
pub mod session;
pub mod value;

#[cfg(test)]
mod fake;

pub use command::{Outcome, declare, get, modify, set};
pub use error::{OptionError, Result};
pub use scope::{OutputIdentity, Scope, ScopeFlags, resolve_scope};
pub use session::{HandleRequest, OptionSession};
pub use value::{OptionReply, OptionValue, ValueKind};
