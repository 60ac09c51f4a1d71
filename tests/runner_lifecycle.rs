//! End-to-end lifecycle tests: hook ordering, exit codes, context capture.

use std::time::Duration;

use clirail::prelude::*;

/// Records every lifecycle event plus what the hooks observed.
#[derive(Default)]
struct Recorder {
    verdict: Option<std::result::Result<ReturnValue, String>>,
    events: Vec<&'static str>,
    seen_outcome: Option<String>,
    seen_duration: Option<Duration>,
    seen_error: Option<String>,
}

impl Recorder {
    fn returning(value: ReturnValue) -> Self {
        Self {
            verdict: Some(Ok(value)),
            ..Self::default()
        }
    }

    fn raising(message: &str) -> Self {
        Self {
            verdict: Some(Err(message.to_string())),
            ..Self::default()
        }
    }
}

impl Application for Recorder {
    fn title(&self) -> String {
        "recorder".to_string()
    }

    fn main(&mut self, observables: &mut Observables) -> std::result::Result<ReturnValue, RoutineError> {
        self.events.push("main");
        observables.set("step", "done");
        match self.verdict.take().expect("main runs exactly once") {
            Ok(value) => Ok(value),
            Err(message) => Err(message.into()),
        }
    }

    fn on_success(&mut self, context: &ExecutionContext) -> std::result::Result<(), RoutineError> {
        self.events.push("on_success");
        self.seen_outcome = Some(context.outcome().label().to_string());
        Ok(())
    }

    fn on_failure(&mut self, context: &ExecutionContext) -> std::result::Result<(), RoutineError> {
        self.events.push("on_failure");
        self.seen_outcome = Some(context.outcome().label().to_string());
        self.seen_error = context.outcome().raised_error().map(ToString::to_string);
        Ok(())
    }

    fn on_finish(&mut self, context: &ExecutionContext) -> std::result::Result<(), RoutineError> {
        self.events.push("on_finish");
        self.seen_duration = Some(context.duration());
        Ok(())
    }
}

fn runner() -> Runner<StaticConsole> {
    Runner::new(StaticConsole::plain(80))
}

#[test]
fn unit_return_runs_success_then_finish() {
    let mut app = Recorder::returning(ReturnValue::Unit);
    let report = runner().try_run(&mut app).unwrap();

    assert_eq!(report.exit_code, 0);
    assert_eq!(app.events, vec!["main", "on_success", "on_finish"]);
    assert_eq!(app.seen_outcome.as_deref(), Some("success"));
}

#[test]
fn false_return_runs_failure_then_finish() {
    let mut app = Recorder::returning(ReturnValue::Bool(false));
    let report = runner().try_run(&mut app).unwrap();

    assert_eq!(report.exit_code, 1);
    assert_eq!(app.events, vec!["main", "on_failure", "on_finish"]);
    assert_eq!(app.seen_outcome.as_deref(), Some("failure"));
}

#[test]
fn zero_return_maps_to_exit_code_one() {
    let mut app = Recorder::returning(ReturnValue::Int(0));
    let report = runner().try_run(&mut app).unwrap();
    assert_eq!(report.exit_code, 1);
}

#[test]
fn truthy_returns_map_to_exit_code_zero() {
    for value in [
        ReturnValue::Bool(true),
        ReturnValue::Int(7),
        ReturnValue::Text("output".into()),
        ReturnValue::Count(3),
    ] {
        let mut app = Recorder::returning(value);
        let report = runner().try_run(&mut app).unwrap();
        assert_eq!(report.exit_code, 0);
    }
}

#[test]
fn falsy_returns_map_to_exit_code_one() {
    for value in [
        ReturnValue::Bool(false),
        ReturnValue::Int(0),
        ReturnValue::Text(String::new()),
        ReturnValue::Count(0),
    ] {
        let mut app = Recorder::returning(value);
        let report = runner().try_run(&mut app).unwrap();
        assert_eq!(report.exit_code, 1);
    }
}

#[test]
fn raised_routine_reaches_on_failure_with_the_error() {
    let mut app = Recorder::raising("disk on fire");
    let report = runner().try_run(&mut app).unwrap();

    assert_eq!(report.exit_code, 1);
    assert_eq!(app.events, vec!["main", "on_failure", "on_finish"]);
    assert_eq!(app.seen_outcome.as_deref(), Some("raised"));
    assert_eq!(app.seen_error.as_deref(), Some("disk on fire"));
}

#[test]
fn resurface_policy_returns_the_error_after_hooks() {
    let mut app = Recorder::raising("boom");
    let err = runner()
        .with_raised_policy(RaisedPolicy::Resurface)
        .try_run(&mut app)
        .unwrap_err();

    assert_eq!(err.to_string(), "boom");
    assert_eq!(app.events, vec!["main", "on_failure", "on_finish"]);
}

#[test]
fn duration_is_consistent_with_the_timestamps() {
    let mut app = Recorder::returning(ReturnValue::Unit);
    let report = runner().try_run(&mut app).unwrap();

    let context = &report.context;
    assert!(context.end_time() >= context.start_time());
    let derived = (context.end_time() - context.start_time())
        .to_std()
        .unwrap_or_default();
    assert_eq!(context.duration(), derived);
    assert_eq!(app.seen_duration, Some(derived));
}

#[test]
fn observables_survive_into_the_frozen_context() {
    let mut app = Recorder::returning(ReturnValue::Unit);
    let report = runner().try_run(&mut app).unwrap();

    assert_eq!(
        report.context.observables().get("step"),
        Some(&serde_json::Value::from("done"))
    );
    assert_eq!(report.context.observables().len(), 1);
}

#[test]
fn context_carries_the_application_title() {
    let mut app = Recorder::returning(ReturnValue::Unit);
    let report = runner().try_run(&mut app).unwrap();
    assert_eq!(report.context.title(), "recorder");
}

/// A sleepy routine to pin down a strictly positive duration.
struct Sleeper;

impl Application for Sleeper {
    fn main(&mut self, _observables: &mut Observables) -> std::result::Result<ReturnValue, RoutineError> {
        std::thread::sleep(Duration::from_millis(15));
        Ok(ReturnValue::Unit)
    }
}

#[test]
fn elapsed_work_shows_up_in_the_duration() {
    let report = runner().try_run(&mut Sleeper).unwrap();
    assert!(report.context.duration() >= Duration::from_millis(10));
}
