//! JTAG session context for JTAP.
//!
//! A [`Chain`] represents one debugging session: the attached cable (if
//! any) and its wired configuration. Command handlers never talk to a
//! cable driver directly; they go through the chain.

mod cable;
mod chain;

/// Transport abstraction implemented by every cable driver.
pub use cable::Cable;
/// Simulated cable driver backed by in-process state.
pub use cable::SimCable;
/// Open a cable driver by name.
pub use cable::{cable_drivers, open_cable};
/// One debugging session: attached cable plus configuration.
pub use chain::Chain;
