//! The application trait and the run harness driving it.

use chrono::Utc;
use colored::Colorize;

use crate::app::context::{ExecutionContext, Observables, Outcome, ReturnValue};
use crate::console::adapter::Console;
use crate::console::panel::Panel;
use crate::console::rule::Rule;
use crate::core::errors::RoutineError;

/// A user-defined unit of work with a main routine and lifecycle hooks.
///
/// Implement [`Application::main`]; everything else has defaults. The
/// routine records hook-visible state through the [`Observables`] it is
/// handed, and its return value is classified by [`Application::has_failed`].
pub trait Application {
    /// Title shown in the divider. Defaults to the implementing type's name.
    fn title(&self) -> String
    where
        Self: Sized,
    {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full).to_string()
    }

    /// The unit of work. Runs exactly once per [`Runner::try_run`] call.
    fn main(&mut self, observables: &mut Observables) -> Result<ReturnValue, RoutineError>;

    /// Classify a non-[`Unit`](ReturnValue::Unit) return value as a failure.
    ///
    /// The default applies ordinary truthiness; override to narrow the
    /// policy, e.g. to only honor integer exit-style returns.
    fn has_failed(&self, value: &ReturnValue) -> bool {
        value.is_falsy()
    }

    /// Called when the outcome is [`Outcome::Success`].
    fn on_success(&mut self, _context: &ExecutionContext) -> Result<(), RoutineError> {
        Ok(())
    }

    /// Called when the outcome is [`Outcome::Failure`] or [`Outcome::Raised`].
    fn on_failure(&mut self, _context: &ExecutionContext) -> Result<(), RoutineError> {
        Ok(())
    }

    /// Always called, after the other hooks.
    fn on_finish(&mut self, _context: &ExecutionContext) -> Result<(), RoutineError> {
        Ok(())
    }
}

/// What to do with a raised routine error once the hooks have run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RaisedPolicy {
    /// Fold the error into exit code 1 and report it only on the console.
    #[default]
    Absorb,
    /// Hand the error back to the caller of [`Runner::try_run`] after the
    /// hooks complete.
    Resurface,
}

/// Result of a completed run: derived exit code plus the frozen context.
#[derive(Debug)]
pub struct RunReport {
    /// Process exit code derived from the outcome.
    pub exit_code: i32,
    /// The context the hooks observed.
    pub context: ExecutionContext,
}

/// Drives one application run: divider, routine, classification, hooks.
///
/// Exit-code derivation is pure; actual process termination happens only in
/// [`Runner::run`], so everything else is testable in-process.
#[derive(Debug, Clone)]
pub struct Runner<C: Console> {
    console: C,
    divider_pattern: Option<String>,
    divider_fill: char,
    width: Option<usize>,
    raised_policy: RaisedPolicy,
}

impl<C: Console> Runner<C> {
    /// Runner printing through the given console.
    #[must_use]
    pub fn new(console: C) -> Self {
        Self {
            console,
            divider_pattern: None,
            divider_fill: '-',
            width: None,
            raised_policy: RaisedPolicy::default(),
        }
    }

    /// Use a custom divider pattern containing `{title}`.
    #[must_use]
    pub fn with_divider_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.divider_pattern = Some(pattern.into());
        self
    }

    /// Use a different divider fill character.
    #[must_use]
    pub fn with_divider_fill(mut self, fill: char) -> Self {
        self.divider_fill = fill;
        self
    }

    /// Pin the divider width instead of using the console width.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Choose what happens to a raised error after the hooks.
    #[must_use]
    pub fn with_raised_policy(mut self, policy: RaisedPolicy) -> Self {
        self.raised_policy = policy;
        self
    }

    /// Run the application through the full lifecycle without terminating
    /// the process.
    ///
    /// Returns the [`RunReport`] carrying the derived exit code. With
    /// [`RaisedPolicy::Resurface`], a raised routine error comes back as
    /// `Err` once the hooks have completed.
    pub fn try_run<A: Application>(&self, app: &mut A) -> Result<RunReport, RoutineError> {
        let title = app.title();
        let divider = self.divider(&title);
        let decorate = self.console.decorations_enabled();

        let start_time = Utc::now();
        if decorate {
            println!("\n{}\n", divider.render(&self.console));
        }

        let mut observables = Observables::default();
        let routine = app.main(&mut observables);
        let end_time = Utc::now();

        let outcome = self.classify(app, routine, decorate);

        if decorate {
            println!("\n{}\n", divider.render(&self.console));
        }

        let context = ExecutionContext::new(title, start_time, end_time, outcome, observables);

        if context.outcome.is_success() {
            self.dispatch("on_success", app.on_success(&context));
        } else {
            self.dispatch("on_failure", app.on_failure(&context));
        }
        self.dispatch("on_finish", app.on_finish(&context));

        let exit_code = context.outcome.exit_code();
        if self.raised_policy == RaisedPolicy::Resurface {
            if let Outcome::Raised(err) = context.outcome {
                return Err(err);
            }
        }
        Ok(RunReport { exit_code, context })
    }

    /// Run the application and terminate the process with its exit code.
    ///
    /// With [`RaisedPolicy::Resurface`] the resurfaced error is printed to
    /// stderr before exiting; this is the outermost boundary, so the exit
    /// call lives here and nowhere else.
    pub fn run<A: Application>(&self, app: &mut A) -> ! {
        match self.try_run(app) {
            Ok(report) => std::process::exit(report.exit_code),
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1)
            }
        }
    }

    fn divider(&self, title: &str) -> Rule {
        let mut rule = Rule::new()
            .with_title(title)
            .with_fill(self.divider_fill);
        if let Some(pattern) = &self.divider_pattern {
            rule = rule.with_pattern(pattern.clone());
        }
        if let Some(width) = self.width {
            rule = rule.with_width(width);
        }
        rule
    }

    /// Classify the routine result, reporting raised errors on the console.
    fn classify<A: Application>(
        &self,
        app: &A,
        routine: Result<ReturnValue, RoutineError>,
        decorate: bool,
    ) -> Outcome {
        match routine {
            Ok(ReturnValue::Unit) => Outcome::Success,
            Ok(value) => {
                if decorate && !value.is_conventional() {
                    self.warn(&format!(
                        "the application routine should return a boolean or an integer (got {value:?})"
                    ));
                }
                if app.has_failed(&value) {
                    Outcome::Failure
                } else {
                    Outcome::Success
                }
            }
            Err(err) => {
                let panel = Panel::new(err.to_string()).with_title("Application Error");
                println!("{}", panel.render(&self.console));
                Outcome::Raised(err)
            }
        }
    }

    /// Report a hook error without disturbing the already-decided outcome.
    fn dispatch(&self, hook: &'static str, result: Result<(), RoutineError>) {
        if let Err(err) = result {
            self.warn(&format!("'{hook}' hook failed: {err}"));
        }
    }

    fn warn(&self, message: &str) {
        let line = format!("warning: {message}");
        if self.console.colors_enabled() {
            eprintln!("{}", line.yellow());
        } else {
            eprintln!("{line}");
        }
    }
}
