// Author: Dustin Pilgrim
// License: MIT
//
// In-memory compositor used by the unit tests.

use std::collections::{HashMap, HashSet};

use crate::error::{OptionError, Result};
use crate::scope::{OutputIdentity, Scope};
use crate::session::{HandleRequest, OptionSession};
use crate::value::{OptionReply, OptionValue};

#[derive(Debug)]
pub struct FakeHandle {
    key: String,
    output: Option<usize>,
}

pub struct FakeCompositor {
    pub outputs: Vec<String>,
    pub focused: Option<usize>,
    pub options_manager: bool,
    pub seat_status: bool,
    /// Make the next dispatch fail as if the connection broke.
    pub fail_dispatch: bool,

    values: HashMap<(String, Option<usize>), OptionValue>,
    output_defaults: HashSet<String>,

    pub sent: Vec<HandleRequest>,
    pub roundtrips: usize,
    pub flushes: usize,
    pub acquired: usize,
    pub released: usize,
}

impl FakeCompositor {
    pub fn new() -> Self {
        Self::with_outputs(&[])
    }

    pub fn with_outputs(names: &[&str]) -> Self {
        Self {
            outputs: names.iter().map(|n| n.to_string()).collect(),
            focused: None,
            options_manager: true,
            seat_status: true,
            fail_dispatch: false,
            values: HashMap::new(),
            output_defaults: HashSet::new(),
            sent: Vec::new(),
            roundtrips: 0,
            flushes: 0,
            acquired: 0,
            released: 0,
        }
    }

    /// Declare an option the way another client would have.
    pub fn declare(&mut self, key: &str, output: Option<usize>, value: OptionValue) {
        self.values.insert((key.to_string(), output), value);
    }

    pub fn value(&self, key: &str, output: Option<usize>) -> Option<&OptionValue> {
        self.values.get(&(key.to_string(), output)).or_else(|| {
            // Outputs inherit global options marked as output defaults.
            if output.is_some() && self.output_defaults.contains(key) {
                self.values.get(&(key.to_string(), None))
            } else {
                None
            }
        })
    }

    pub fn is_output_default(&self, key: &str) -> bool {
        self.output_defaults.contains(key)
    }

    fn identity(&self, index: usize) -> OutputIdentity<usize> {
        OutputIdentity {
            output: index,
            name: self.outputs.get(index).cloned(),
        }
    }
}

impl OptionSession for FakeCompositor {
    type Output = usize;
    type Handle = FakeHandle;

    fn outputs(&mut self) -> Result<Vec<OutputIdentity<usize>>> {
        self.roundtrips += 1;
        Ok((0..self.outputs.len()).map(|i| self.identity(i)).collect())
    }

    fn focused_output(&mut self) -> Result<Option<OutputIdentity<usize>>> {
        if !self.seat_status {
            return Err(OptionError::MissingCapability("zriver_status_manager_v1"));
        }
        self.roundtrips += 1;
        Ok(self.focused.map(|i| self.identity(i)))
    }

    fn acquire(&mut self, key: &str, scope: &Scope<usize>) -> Result<FakeHandle> {
        if !self.options_manager {
            return Err(OptionError::MissingCapability("zriver_options_manager_v1"));
        }
        self.acquired += 1;
        Ok(FakeHandle {
            key: key.to_string(),
            output: scope.output().copied(),
        })
    }

    fn await_reply(&mut self, handle: &FakeHandle) -> Result<OptionReply> {
        if self.fail_dispatch {
            return Err(OptionError::Transport("dispatch: connection reset".into()));
        }
        Ok(match self.value(&handle.key, handle.output) {
            Some(v) => OptionReply::Value(v.clone()),
            None => OptionReply::Unset,
        })
    }

    fn send(&mut self, handle: &FakeHandle, request: HandleRequest) -> Result<()> {
        match &request {
            HandleRequest::SetOutputDefault => {
                if !self.values.contains_key(&(handle.key.clone(), None)) {
                    return Err(OptionError::Transport(
                        "protocol error: request_while_undeclared".into(),
                    ));
                }
                self.output_defaults.insert(handle.key.clone());
            }
            HandleRequest::SetValue(value) => {
                self.values
                    .insert((handle.key.clone(), handle.output), value.clone());
            }
        }
        self.sent.push(request);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }

    fn release(&mut self, _handle: FakeHandle) {
        self.released += 1;
    }
}
