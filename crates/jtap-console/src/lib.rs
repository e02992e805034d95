//! Command registry and dispatch for the JTAP console.
//!
//! The console is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered in a fixed order at startup. The
//! dispatcher resolves a typed name (exact match first, then unique
//! prefix), and the completion enumerator walks the same registry for the
//! interactive front end.

mod commands;
mod dispatch;
mod number;

/// Register all built-in commands into a registry.
pub use commands::register_builtins;
/// A single executable command trait.
pub use dispatch::Command;
/// Output produced by a command (text, nothing, or the quit signal).
pub use dispatch::CommandOutput;
/// Registry of available commands with dispatch and completion.
pub use dispatch::CommandRegistry;
/// Caller-owned state for one tab-completion session.
pub use dispatch::CompletionCursor;
/// Guard used by transport-dependent commands.
pub use dispatch::require_cable;
/// Strict unsigned literal parser (`0x` hex or decimal).
pub use number::parse_uint;
