// Author: Dustin Pilgrim
// License: MIT

use crate::error::Result;
use crate::scope::{OutputIdentity, Scope};
use crate::value::{OptionReply, OptionValue};

/// Requests a client can send on an option handle.
#[derive(Debug, Clone, PartialEq)]
pub enum HandleRequest {
    /// Mark a global option as the default for outputs.
    SetOutputDefault,
    SetValue(OptionValue),
}

/// Everything the commands need from a compositor connection.
///
/// Implemented over Wayland by `riveropt-wayland`; tests use an in-memory
/// compositor instead.
pub trait OptionSession {
    /// Opaque reference to one of the compositor's outputs.
    type Output: Clone;

    /// One live (key, scope) request/reply exchange.
    type Handle;

    /// Every known output, after a roundtrip so their names have arrived.
    fn outputs(&mut self) -> Result<Vec<OutputIdentity<Self::Output>>>;

    /// The output holding the seat's focus, if any.
    fn focused_output(&mut self) -> Result<Option<OutputIdentity<Self::Output>>>;

    fn acquire(&mut self, key: &str, scope: &Scope<Self::Output>) -> Result<Self::Handle>;

    /// Block until the handle's single reply arrives.
    fn await_reply(&mut self, handle: &Self::Handle) -> Result<OptionReply>;

    fn send(&mut self, handle: &Self::Handle, request: HandleRequest) -> Result<()>;

    /// Push queued requests out to the compositor.
    fn flush(&mut self) -> Result<()>;

    fn release(&mut self, handle: Self::Handle);
}
