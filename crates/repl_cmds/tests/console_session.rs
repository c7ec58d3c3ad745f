use std::sync::Arc;
use std::sync::atomic::Ordering;

use indoc::indoc;
use repl_cmds::commands::test_utils::{
    sample_runtime,
    test_session_with,
};
use repl_cmds::runtime::memory::MemoryRuntime;
use repl_cmds::{
    CommandRegistry,
    Output,
    ReplOptions,
    SessionContext,
};
use serde_json::{
    Value,
    json,
};

/// Feed a line through the registry the way the console loop does: record
/// it, expand aliases, dispatch.
fn enter(ctx: &mut SessionContext, options: &mut ReplOptions, line: &str) -> Result<Output, String> {
    ctx.record_history(line);
    let line = ctx.resolve_alias(line);
    match CommandRegistry::global().dispatch(&line, ctx, options) {
        Some(result) => result.map_err(|err| err.to_string()),
        None => panic!("{line:?} is not a console command"),
    }
}

#[test]
fn test_configuration_round_trip() {
    let (mut ctx, _ends) = test_session_with(MemoryRuntime::new(json!({"timeout": 22000})));
    let mut options = ReplOptions::default();

    assert_eq!(enter(&mut ctx, &mut options, "get timeout"), Ok(Output::Json(json!(22000))));
    assert_eq!(enter(&mut ctx, &mut options, "set a.b 5"), Ok(Output::Empty));
    assert_eq!(enter(&mut ctx, &mut options, "get a.b"), Ok(Output::Json(json!(5))));
    assert_eq!(enter(&mut ctx, &mut options, "get a.missing"), Ok(Output::Undefined));
    assert_eq!(
        enter(&mut ctx, &mut options, "set a.b"),
        Err("ERROR: expected set <path> <value>".to_string())
    );
    assert_eq!(enter(&mut ctx, &mut options, "get a.b"), Ok(Output::Json(json!(5))));
}

#[test]
fn test_repl_options_drive_depth() {
    let (mut ctx, _ends) = test_session_with(MemoryRuntime::new(json!({})));
    let mut options = ReplOptions::from_json_str(indoc! {r#"
        {
            "inspect": { "depth": 4, "breakLength": 120 }
        }
    "#})
    .unwrap();

    enter(&mut ctx, &mut options, "set repl.inspect.colors true").unwrap();
    assert_eq!(
        enter(&mut ctx, &mut options, "depth 1"),
        Ok(Output::Text("Inspection depth set to 1".to_string()))
    );
    let inspect = ctx.inspekt.options();
    assert_eq!(inspect.depth, Some(1));
    assert_eq!(inspect.break_length, 120);
    assert!(inspect.colors);

    assert_eq!(
        enter(&mut ctx, &mut options, "depth abc"),
        Ok(Output::Text("Inspection depth set to null".to_string()))
    );
    let after_abc = ctx.inspekt.clone();
    enter(&mut ctx, &mut options, "depth").unwrap();
    assert_eq!(ctx.inspekt, after_abc);
    assert_eq!(ctx.inspekt.depth(), None);
}

#[test]
fn test_action_queries() {
    let runtime = sample_runtime();
    runtime.add_action("role:user,cmd:login", "audit", Some("audit.js:3")).unwrap();
    let (mut ctx, _ends) = test_session_with(runtime);
    let mut options = ReplOptions::default();

    let Ok(Output::Json(Value::Array(users))) = enter(&mut ctx, &mut options, "list role:user") else {
        panic!("list should return patterns");
    };
    assert_eq!(users.len(), 2);

    let Ok(Output::Json(found)) = enter(&mut ctx, &mut options, "find cmd:login,role:user") else {
        panic!("find should return a definition");
    };
    assert_eq!(found["plugin_fullname"], "audit");

    let Ok(Output::Json(Value::Array(priors))) = enter(&mut ctx, &mut options, "prior role:user cmd:login") else {
        panic!("prior should return a chain");
    };
    let plugins: Vec<&str> = priors.iter().filter_map(|p| p["plugin"].as_str()).collect();
    assert_eq!(plugins, vec!["audit", "user"]);
    assert_eq!(priors[0]["callpoint"], "audit.js:3");
    assert!(priors[1].get("callpoint").is_none());
}

#[test]
fn test_aliases_and_history() {
    let (mut ctx, _ends) = test_session_with(sample_runtime());
    let mut options = ReplOptions::default();

    enter(&mut ctx, &mut options, "alias users list role:user\r\n").unwrap();
    assert_eq!(ctx.alias["users"], "list role:user");

    let Ok(Output::Json(Value::Array(users))) = enter(&mut ctx, &mut options, "users") else {
        panic!("alias should expand to list");
    };
    assert_eq!(users.len(), 2);

    assert_eq!(
        enter(&mut ctx, &mut options, "alias users"),
        Err("ERROR: expected alias <name> <command>".to_string())
    );

    assert_eq!(
        enter(&mut ctx, &mut options, "history"),
        Ok(Output::Text("alias users list role:user\r\n\nusers\nalias users\nhistory".to_string()))
    );
}

#[test]
fn test_toggles_log_and_quit() {
    let (mut ctx, ends) = test_session_with(sample_runtime());
    let mut options = ReplOptions::default();

    enter(&mut ctx, &mut options, "plain").unwrap();
    enter(&mut ctx, &mut options, "trace").unwrap();
    assert!(ctx.plain && ctx.act_trace);
    enter(&mut ctx, &mut options, "plain").unwrap();
    enter(&mut ctx, &mut options, "trace").unwrap();
    assert!(!ctx.plain && !ctx.act_trace);

    enter(&mut ctx, &mut options, "log match cmd:login").unwrap();
    assert!(ctx.log_capture);
    assert_eq!(ctx.log_match.as_deref(), Some("cmd:login"));
    enter(&mut ctx, &mut options, "log").unwrap();
    assert_eq!(ctx.log_match.as_deref(), Some("cmd:login"));

    let Ok(Output::Json(help)) = enter(&mut ctx, &mut options, "help") else {
        panic!("help should return the command map");
    };
    assert!(help.get("quit").is_some());

    assert_eq!(enter(&mut ctx, &mut options, "quit"), Ok(Output::Empty));
    assert_eq!(ends.load(Ordering::SeqCst), 1);
}

#[test]
fn test_sessions_are_isolated() {
    let runtime = Arc::new(sample_runtime());
    let registry = CommandRegistry::global();
    let mut options = ReplOptions::default();

    let (t1, _) = repl_cmds::commands::test_utils::RecordingTransport::with_counter();
    let (t2, _) = repl_cmds::commands::test_utils::RecordingTransport::with_counter();
    let mut first = SessionContext::new(runtime.clone(), Box::new(t1), registry.command_map());
    let mut second = SessionContext::new(runtime, Box::new(t2), registry.command_map());

    registry.dispatch("alias a list", &mut first, &mut options);
    registry.dispatch("trace", &mut first, &mut options);
    registry.dispatch("set shared 1", &mut first, &mut options);

    assert!(second.alias.is_empty());
    assert!(!second.act_trace);
    assert_eq!(
        registry.dispatch("get shared", &mut second, &mut options).map(|r| r.ok()),
        Some(Some(Output::Json(json!(1))))
    );
}
