// Author: Dustin Pilgrim
// License: MIT
//
// A blocking compositor session over a single Wayland connection.
//
// Everything runs on the calling thread: requests are queued on the
// connection and replies are pulled in by dispatching the event queue until
// the one we wait for has arrived. There is no timeout; a compositor that
// never answers keeps us blocked.

use eventline::debug;
use riveropt_core::{
    HandleRequest, OptionError, OptionReply, OptionSession, OptionValue, OutputIdentity, Result,
    Scope,
};
use smithay_client_toolkit::{output::OutputState, registry::RegistryState};
use wayland_client::{
    Connection, EventQueue, Proxy, QueueHandle,
    globals::registry_queue_init,
    protocol::{wl_output, wl_seat},
};

use crate::protocol::options::{zriver_option_handle_v1, zriver_options_manager_v1};
use crate::protocol::status::zriver_status_manager_v1;
use crate::state::SessionState;

pub struct WaylandSession {
    conn: Connection,
    queue: EventQueue<SessionState>,
    qh: QueueHandle<SessionState>,
    state: SessionState,
}

impl WaylandSession {
    /// Connect to `$WAYLAND_DISPLAY` and bind the globals we may need.
    ///
    /// Missing river globals are not an error here; the command that needs
    /// one reports it.
    pub fn connect() -> Result<Self> {
        let conn = Connection::connect_to_env().map_err(transport("wayland connect"))?;

        let (globals, mut queue) =
            registry_queue_init(&conn).map_err(transport("registry init"))?;
        let qh = queue.handle();

        let registry_state = RegistryState::new(&globals);
        let output_state = OutputState::new(&globals, &qh);

        let mut state = SessionState::new(registry_state, output_state);

        state.options_manager = globals
            .bind::<zriver_options_manager_v1::ZriverOptionsManagerV1, _, _>(&qh, 1..=1, ())
            .ok();
        state.status_manager = globals
            .bind::<zriver_status_manager_v1::ZriverStatusManagerV1, _, _>(&qh, 1..=1, ())
            .ok();
        state.seat = globals.bind::<wl_seat::WlSeat, _, _>(&qh, 1..=7, ()).ok();

        debug!(
            "globals: options_manager={} status_manager={} seat={}",
            state.options_manager.is_some(),
            state.status_manager.is_some(),
            state.seat.is_some()
        );

        // Outputs announce themselves in response to the binds above.
        queue.roundtrip(&mut state).map_err(transport("roundtrip"))?;

        Ok(Self {
            conn,
            queue,
            qh,
            state,
        })
    }

    fn roundtrip(&mut self) -> Result<()> {
        self.queue
            .roundtrip(&mut self.state)
            .map_err(transport("roundtrip"))?;
        Ok(())
    }

    fn identify(&self, output: wl_output::WlOutput) -> OutputIdentity<wl_output::WlOutput> {
        OutputIdentity {
            name: self.state.output_name(&output),
            output,
        }
    }
}

impl OptionSession for WaylandSession {
    type Output = wl_output::WlOutput;
    type Handle = zriver_option_handle_v1::ZriverOptionHandleV1;

    fn outputs(&mut self) -> Result<Vec<OutputIdentity<wl_output::WlOutput>>> {
        // xdg-output names arrive one roundtrip after the outputs themselves.
        self.roundtrip()?;

        let outputs: Vec<_> = self.state.output_state.outputs().collect();
        debug!("compositor reports {} output(s)", outputs.len());

        Ok(outputs.into_iter().map(|o| self.identify(o)).collect())
    }

    fn focused_output(&mut self) -> Result<Option<OutputIdentity<wl_output::WlOutput>>> {
        let status = {
            let manager = self
                .state
                .status_manager
                .as_ref()
                .ok_or(OptionError::MissingCapability("zriver_status_manager_v1"))?;
            let seat = self
                .state
                .seat
                .as_ref()
                .ok_or(OptionError::MissingCapability("wl_seat"))?;
            manager.get_river_seat_status(seat, &self.qh, ())
        };

        // The current focus is sent right after creation.
        self.roundtrip()?;
        status.destroy();

        let focused = self.state.focused_output.take();
        Ok(focused.map(|o| self.identify(o)))
    }

    fn acquire(
        &mut self,
        key: &str,
        scope: &Scope<wl_output::WlOutput>,
    ) -> Result<zriver_option_handle_v1::ZriverOptionHandleV1> {
        let manager = self
            .state
            .options_manager
            .as_ref()
            .ok_or(OptionError::MissingCapability("zriver_options_manager_v1"))?;

        let handle = manager.get_option_handle(key.to_string(), scope.output(), &self.qh, ());
        debug!("requested handle {} for '{}'", handle.id(), key);
        Ok(handle)
    }

    fn await_reply(
        &mut self,
        handle: &zriver_option_handle_v1::ZriverOptionHandleV1,
    ) -> Result<OptionReply> {
        let id = handle.id();
        loop {
            if let Some(reply) = self.state.replies.remove(&id) {
                return Ok(reply);
            }
            self.queue
                .blocking_dispatch(&mut self.state)
                .map_err(transport("dispatch"))?;
        }
    }

    fn send(
        &mut self,
        handle: &zriver_option_handle_v1::ZriverOptionHandleV1,
        request: HandleRequest,
    ) -> Result<()> {
        debug!("handle {}: {:?}", handle.id(), request);

        match request {
            HandleRequest::SetOutputDefault => handle.set_output_default(),
            HandleRequest::SetValue(OptionValue::Int(v)) => handle.set_int_value(v),
            HandleRequest::SetValue(OptionValue::Uint(v)) => handle.set_uint_value(v),
            HandleRequest::SetValue(OptionValue::Fixed(v)) => handle.set_fixed_value(v),
            HandleRequest::SetValue(OptionValue::String(s)) => handle.set_string_value(s),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.conn.flush().map_err(transport("flush"))
    }

    fn release(&mut self, handle: zriver_option_handle_v1::ZriverOptionHandleV1) {
        self.state.replies.remove(&handle.id());
        handle.destroy();
    }
}

fn transport<E: std::fmt::Display>(what: &'static str) -> impl FnOnce(E) -> OptionError {
    move |e| OptionError::Transport(format!("{what}: {e}"))
}
