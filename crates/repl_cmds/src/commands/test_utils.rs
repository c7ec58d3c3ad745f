//! Test utilities for command tests

use std::sync::Arc;
use std::sync::atomic::{
    AtomicUsize,
    Ordering,
};

use serde_json::json;

use super::{
    CommandHandler,
    CommandRegistry,
    CommandResult,
    CommandSpec,
};
use crate::context::SessionContext;
use crate::options::ReplOptions;
use crate::runtime::Transport;
use crate::runtime::memory::MemoryRuntime;

/// Transport that counts how many times it was ended
#[derive(Debug)]
pub struct RecordingTransport {
    ends: Arc<AtomicUsize>,
}

impl RecordingTransport {
    pub fn with_counter() -> (Self, Arc<AtomicUsize>) {
        let ends = Arc::new(AtomicUsize::new(0));
        (
            Self {
                ends: Arc::clone(&ends),
            },
            ends,
        )
    }
}

impl Transport for RecordingTransport {
    fn end(&mut self) {
        self.ends.fetch_add(1, Ordering::SeqCst);
    }
}

/// Create a session over an empty runtime, returning the transport's end counter
pub fn test_session() -> (SessionContext, Arc<AtomicUsize>) {
    test_session_with(MemoryRuntime::new(json!({})))
}

/// Create a session over `runtime`, returning the transport's end counter
pub fn test_session_with(runtime: MemoryRuntime) -> (SessionContext, Arc<AtomicUsize>) {
    let (transport, ends) = RecordingTransport::with_counter();
    let ctx = SessionContext::new(
        Arc::new(runtime),
        Box::new(transport),
        CommandRegistry::global().command_map(),
    );
    (ctx, ends)
}

/// Runtime with a few user and entity actions registered
pub fn sample_runtime() -> MemoryRuntime {
    let runtime = MemoryRuntime::new(json!({"tag": "sample"}));
    for (pattern, plugin) in [
        ("role:user,cmd:login", "user"),
        ("role:user,cmd:logout", "user"),
        ("role:entity,cmd:save", "entity"),
    ] {
        if let Err(err) = runtime.add_action(pattern, plugin, None) {
            panic!("bad sample pattern {pattern}: {err}");
        }
    }
    runtime
}

/// Run `handler` with default REPL options
pub fn run(handler: &dyn CommandHandler, argstr: &str, context: &mut SessionContext) -> CommandResult {
    run_with(handler, argstr, context, &mut ReplOptions::default())
}

pub fn run_with(
    handler: &dyn CommandHandler,
    argstr: &str,
    context: &mut SessionContext,
    options: &mut ReplOptions,
) -> CommandResult {
    handler.execute(CommandSpec {
        argstr,
        context,
        options,
    })
}
