// Author: Dustin Pilgrim
// License: MIT

use crate::error::{OptionError, Result};
use crate::session::OptionSession;

/// An output together with the name the compositor reported for it.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputIdentity<O> {
    pub output: O,

    /// Compositor-provided name (e.g. "DP-1"), when it has arrived.
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Scope<O> {
    Global,
    Output(OutputIdentity<O>),
}

impl<O> Scope<O> {
    pub fn output(&self) -> Option<&O> {
        match self {
            Scope::Global => None,
            Scope::Output(id) => Some(&id.output),
        }
    }

    /// Name used in user-facing messages; `None` for global scope.
    pub fn display_name(&self) -> Option<String> {
        match self {
            Scope::Global => None,
            Scope::Output(id) => Some(id.name.clone().unwrap_or_else(|| "(unnamed)".into())),
        }
    }
}

/// Scope selection as given on the command line. The parser guarantees at
/// most one of the two is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeFlags {
    pub output: Option<String>,
    pub focused_output: bool,
}

impl ScopeFlags {
    pub fn is_global(&self) -> bool {
        self.output.is_none() && !self.focused_output
    }
}

pub fn resolve_scope<S: OptionSession>(
    session: &mut S,
    flags: &ScopeFlags,
) -> Result<Scope<S::Output>> {
    if let Some(name) = &flags.output {
        return session
            .outputs()?
            .into_iter()
            .find(|id| id.name.as_deref() == Some(name.as_str()))
            .map(Scope::Output)
            .ok_or_else(|| OptionError::UnknownOutput(name.clone()));
    }

    if flags.focused_output {
        return session
            .focused_output()?
            .map(Scope::Output)
            .ok_or(OptionError::NoOutputFocused);
    }

    Ok(Scope::Global)
}
