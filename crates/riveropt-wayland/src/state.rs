// Author: Dustin Pilgrim
// License: MIT
//
// Event-side state of a session: what the dispatch loop has learned so far.

use std::collections::HashMap;

use eventline::debug;
use riveropt_core::{OptionReply, OptionValue};
use smithay_client_toolkit::{
    output::{OutputHandler, OutputState},
    registry::{ProvidesRegistryState, RegistryState},
    registry_handlers,
};
use wayland_client::{
    Connection, Dispatch, Proxy, QueueHandle,
    backend::ObjectId,
    protocol::{wl_output, wl_seat},
};

use crate::protocol::options::{zriver_option_handle_v1, zriver_options_manager_v1};
use crate::protocol::status::{zriver_seat_status_v1, zriver_status_manager_v1};

pub(crate) struct SessionState {
    // SCTK state
    pub registry_state: RegistryState,
    pub output_state: OutputState,

    // Wayland globals
    pub options_manager: Option<zriver_options_manager_v1::ZriverOptionsManagerV1>,
    pub status_manager: Option<zriver_status_manager_v1::ZriverStatusManagerV1>,
    pub seat: Option<wl_seat::WlSeat>,

    // Replies
    pub focused_output: Option<wl_output::WlOutput>,
    pub replies: HashMap<ObjectId, OptionReply>,
}

impl SessionState {
    pub fn new(registry_state: RegistryState, output_state: OutputState) -> Self {
        Self {
            registry_state,
            output_state,
            options_manager: None,
            status_manager: None,
            seat: None,
            focused_output: None,
            replies: HashMap::new(),
        }
    }

    /// Name the compositor gave `output`, if it has arrived yet.
    pub fn output_name(&self, output: &wl_output::WlOutput) -> Option<String> {
        self.output_state.info(output).and_then(|info| info.name)
    }
}

impl ProvidesRegistryState for SessionState {
    fn registry(&mut self) -> &mut RegistryState {
        &mut self.registry_state
    }

    registry_handlers![OutputState];
}

impl OutputHandler for SessionState {
    fn output_state(&mut self) -> &mut OutputState {
        &mut self.output_state
    }

    fn new_output(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _output: wl_output::WlOutput,
    ) {
    }

    fn update_output(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _output: wl_output::WlOutput,
    ) {
    }

    fn output_destroyed(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        output: wl_output::WlOutput,
    ) {
        if self.focused_output.as_ref() == Some(&output) {
            self.focused_output = None;
        }
    }
}

impl Dispatch<wl_seat::WlSeat, ()> for SessionState {
    fn event(
        _state: &mut Self,
        _seat: &wl_seat::WlSeat,
        _event: wl_seat::Event,
        _data: &(),
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
    ) {
    }
}

impl Dispatch<zriver_options_manager_v1::ZriverOptionsManagerV1, ()> for SessionState {
    fn event(
        _state: &mut Self,
        _manager: &zriver_options_manager_v1::ZriverOptionsManagerV1,
        _event: zriver_options_manager_v1::Event,
        _data: &(),
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
    ) {
    }
}

impl Dispatch<zriver_option_handle_v1::ZriverOptionHandleV1, ()> for SessionState {
    fn event(
        state: &mut Self,
        handle: &zriver_option_handle_v1::ZriverOptionHandleV1,
        event: zriver_option_handle_v1::Event,
        _data: &(),
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
    ) {
        use zriver_option_handle_v1::Event;

        let reply = match event {
            Event::Unset => OptionReply::Unset,
            Event::IntValue { value } => OptionReply::Value(OptionValue::Int(value)),
            Event::UintValue { value } => OptionReply::Value(OptionValue::Uint(value)),
            Event::FixedValue { value } => OptionReply::Value(OptionValue::Fixed(value)),
            Event::StringValue { value } => OptionReply::Value(OptionValue::String(value)),
        };

        debug!("option handle {}: {:?}", handle.id(), reply);

        // Later events are value changes made by others; only the first one
        // answers our request.
        state.replies.entry(handle.id()).or_insert(reply);
    }
}

impl Dispatch<zriver_status_manager_v1::ZriverStatusManagerV1, ()> for SessionState {
    fn event(
        _state: &mut Self,
        _manager: &zriver_status_manager_v1::ZriverStatusManagerV1,
        _event: zriver_status_manager_v1::Event,
        _data: &(),
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
    ) {
    }
}

impl Dispatch<zriver_seat_status_v1::ZriverSeatStatusV1, ()> for SessionState {
    fn event(
        state: &mut Self,
        _status: &zriver_seat_status_v1::ZriverSeatStatusV1,
        event: zriver_seat_status_v1::Event,
        _data: &(),
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
    ) {
        use zriver_seat_status_v1::Event;

        match event {
            Event::FocusedOutput { output } => {
                debug!("seat focused output {}", output.id());
                state.focused_output = Some(output);
            }
            Event::UnfocusedOutput { output } => {
                if state.focused_output.as_ref() == Some(&output) {
                    state.focused_output = None;
                }
            }
            Event::FocusedView { .. } => {}
        }
    }
}

smithay_client_toolkit::delegate_output!(SessionState);
smithay_client_toolkit::delegate_registry!(SessionState);
