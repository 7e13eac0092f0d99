// Author: Dustin Pilgrim
// License: MIT

pub mod protocol;
pub mod session;
mod state;

pub use session::WaylandSession;
