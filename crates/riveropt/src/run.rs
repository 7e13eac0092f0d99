// Author: Dustin Pilgrim
// License: MIT

use eventline::{debug, error, info};

use riveropt_core::{OptionError, OptionSession, Outcome, ScopeFlags};
use riveropt_wayland::WaylandSession;

use crate::cli::{Args, Cmd};

pub fn run(args: Args) -> Result<(), String> {
    info!("starting client");
    debug!("parsed args: {:?}", args.cmd);

    let result = WaylandSession::connect().and_then(|mut session| execute(&mut session, args.cmd));

    match result {
        Ok(outcome) => {
            print_outcome(&outcome);
            info!("client done");
            Ok(())
        }
        Err(e) => {
            error!("command failed: {e}");
            Err(e.to_string())
        }
    }
}

/// Drive one command against `session` to its terminal reply.
pub fn execute<S: OptionSession>(session: &mut S, cmd: Cmd) -> Result<Outcome, OptionError> {
    match cmd {
        Cmd::DeclareOption {
            scope,
            output_default,
            key,
            kind,
            value,
        } => {
            debug!("declare-option {key} ({kind:?}) = {value:?}, output_default={output_default}");
            riveropt_core::declare(
                session,
                &key,
                kind,
                &value,
                &ScopeFlags::from(scope),
                output_default,
            )
        }

        Cmd::GetOption { scope, key } => {
            debug!("get-option {key}");
            riveropt_core::get(session, &key, &ScopeFlags::from(scope))
        }

        Cmd::SetOption { scope, key, value } => {
            debug!("set-option {key} = {value:?}");
            riveropt_core::set(session, &key, &value, &ScopeFlags::from(scope))
        }

        Cmd::ModOption { scope, key, delta } => {
            debug!("mod-option {key} by {delta:?}");
            riveropt_core::modify(session, &key, &delta, &ScopeFlags::from(scope))
        }
    }
}

fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Value(Some(text)) => println!("{text}"),
        Outcome::Value(None) => {}
        Outcome::Sent(value) => debug!("sent {:?}", value),
    }
}
