//! Command table and handlers for a REPL console attached to a running
//! microservice runtime.
//!
//! The line-reading loop and the socket transport live elsewhere. This crate
//! provides the pieces they dispatch into:
//!
//! - [`CommandRegistry`] - exact-match table from command name to handler
//! - [`SessionContext`] - per-connection state the handlers read and mutate
//! - [`ReplOptions`] - the REPL's own live option set
//! - [`Runtime`] / [`Transport`] - the capabilities consumed from the host
//!
//! ```text
//! let registry = CommandRegistry::global();
//! let mut ctx = SessionContext::new(runtime, transport, registry.command_map());
//! let mut opts = ReplOptions::default();
//!
//! match registry.dispatch("set a.b 5", &mut ctx, &mut opts) {
//!     Some(Ok(output)) => println!("{}", ctx.inspect(&output.into_value())),
//!     Some(Err(err)) => println!("{err}"),
//!     None => { /* not a command, submit as an action */ }
//! }
//! ```

pub mod commands;
pub mod context;
pub mod error;
pub mod inspect;
pub mod options;
pub mod query;
pub mod runtime;

pub use commands::{
    CommandHandler,
    CommandInfo,
    CommandKind,
    CommandRegistry,
    CommandResult,
    CommandSpec,
    Output,
};
pub use context::SessionContext;
pub use error::CommandError;
pub use inspect::{
    InspectOptions,
    Inspector,
};
pub use options::ReplOptions;
pub use runtime::{
    ActionDef,
    Runtime,
    Transport,
};
