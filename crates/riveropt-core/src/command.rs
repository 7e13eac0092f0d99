// Author: Dustin Pilgrim
// License: MIT
//
// The four option commands.
//
// Each command resolves its scope, opens exactly one handle and (except for
// declare) waits for that handle's single reply before acting on it. Nothing
// here exits the process; the caller turns the returned outcome into output
// and an exit code.

use crate::codec;
use crate::error::{OptionError, Result};
use crate::scope::{Scope, ScopeFlags, resolve_scope};
use crate::session::{HandleRequest, OptionSession};
use crate::value::{OptionReply, OptionValue, ValueKind};

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Text for `get-option` to print; `None` prints nothing.
    Value(Option<String>),

    /// The value sent to the compositor.
    Sent(OptionValue),
}

/// A handle waiting on (or holding) its reply.
struct Pending<S: OptionSession> {
    key: String,
    scope: Scope<S::Output>,
    handle: S::Handle,
}

impl<S: OptionSession> Pending<S> {
    fn open(session: &mut S, key: &str, flags: &ScopeFlags) -> Result<Self> {
        let scope = resolve_scope(session, flags)?;
        let handle = session.acquire(key, &scope)?;
        Ok(Self {
            key: key.to_string(),
            scope,
            handle,
        })
    }

    /// Wait for the reply; an undeclared option ends the exchange here.
    fn current_value(&self, session: &mut S) -> Result<OptionValue> {
        match session.await_reply(&self.handle)? {
            OptionReply::Value(value) => Ok(value),
            OptionReply::Unset => Err(OptionError::OptionNotDeclared {
                key: self.key.clone(),
                output: self.scope.display_name(),
            }),
        }
    }

    /// Send the new value and close the exchange.
    fn commit(self, session: &mut S, value: OptionValue) -> Result<Outcome> {
        session.send(&self.handle, HandleRequest::SetValue(value.clone()))?;
        session.release(self.handle);
        session.flush()?;
        Ok(Outcome::Sent(value))
    }
}

/// Declare `key` with a value of the given kind. Does not wait for a reply.
pub fn declare<S: OptionSession>(
    session: &mut S,
    key: &str,
    kind: ValueKind,
    raw: &str,
    flags: &ScopeFlags,
    output_default: bool,
) -> Result<Outcome> {
    if output_default && !flags.is_global() {
        return Err(OptionError::OutputDefaultNotGlobal);
    }

    let scope = resolve_scope(session, flags)?;
    let value = codec::parse(raw, kind)?;

    // The value declares the option; only a declared option can become the
    // output default.
    let handle = session.acquire(key, &scope)?;
    session.send(&handle, HandleRequest::SetValue(value.clone()))?;
    if output_default {
        session.send(&handle, HandleRequest::SetOutputDefault)?;
    }
    session.release(handle);
    session.flush()?;

    Ok(Outcome::Sent(value))
}

pub fn get<S: OptionSession>(session: &mut S, key: &str, flags: &ScopeFlags) -> Result<Outcome> {
    let pending = Pending::open(session, key, flags)?;
    let value = pending.current_value(session);
    session.release(pending.handle);

    Ok(Outcome::Value(codec::format(&value?)))
}

/// Set `key` to `raw`, parsed as whatever type the compositor reports.
pub fn set<S: OptionSession>(
    session: &mut S,
    key: &str,
    raw: &str,
    flags: &ScopeFlags,
) -> Result<Outcome> {
    let pending = Pending::open(session, key, flags)?;
    let current = pending.current_value(session)?;

    let value = codec::parse(raw, current.kind())?;
    pending.commit(session, value)
}

/// Add `raw` to the current value of `key`.
pub fn modify<S: OptionSession>(
    session: &mut S,
    key: &str,
    raw: &str,
    flags: &ScopeFlags,
) -> Result<Outcome> {
    let pending = Pending::open(session, key, flags)?;
    let current = pending.current_value(session)?;

    let value = codec::modify(&current, raw)?;
    pending.commit(session, value)
}
