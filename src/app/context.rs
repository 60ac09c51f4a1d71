//! Run outcome classification and the frozen per-run execution context.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::core::errors::RoutineError;

/// What an application routine handed back when it returned normally.
///
/// Models the loosely-typed return conventions of shell-style scripts as an
/// explicit enum so classification stays in one place instead of ad hoc
/// truthiness checks at the call sites.
#[derive(Debug, Clone, PartialEq)]
pub enum ReturnValue {
    /// The routine returned nothing. Always classified as success.
    Unit,
    /// Explicit boolean verdict.
    Bool(bool),
    /// Numeric verdict; zero is falsy.
    Int(i64),
    /// Numeric verdict; zero is falsy.
    Float(f64),
    /// Textual result; the empty string is falsy.
    Text(String),
    /// Size of a produced collection; zero is falsy.
    Count(usize),
}

impl ReturnValue {
    /// Ordinary truthiness: `false`, zero, and empty map to falsy.
    ///
    /// [`ReturnValue::Unit`] is never falsy; "returned nothing" means the
    /// routine simply had no verdict to report.
    #[must_use]
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Unit => false,
            Self::Bool(b) => !b,
            Self::Int(n) => *n == 0,
            Self::Float(n) => *n == 0.0,
            Self::Text(s) => s.is_empty(),
            Self::Count(n) => *n == 0,
        }
    }

    /// Whether the value is one of the conventional verdict types.
    ///
    /// The harness warns about other returns, mirroring scripts that hand
    /// back arbitrary data instead of a boolean or an exit-style integer.
    #[must_use]
    pub const fn is_conventional(&self) -> bool {
        matches!(self, Self::Unit | Self::Bool(_) | Self::Int(_))
    }
}

impl From<bool> for ReturnValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ReturnValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ReturnValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for ReturnValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ReturnValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ReturnValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<()> for ReturnValue {
    fn from((): ()) -> Self {
        Self::Unit
    }
}

/// Classified result of one application run.
#[derive(Debug)]
pub enum Outcome {
    /// The routine returned and was classified as successful.
    Success,
    /// The routine returned a value classified as a failure.
    Failure,
    /// The routine raised; the error is captured, not propagated.
    Raised(RoutineError),
}

impl Outcome {
    /// Process exit code: `0` for success, `1` otherwise.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Failure | Self::Raised(_) => 1,
        }
    }

    /// Whether the run succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// The captured error, when the routine raised.
    #[must_use]
    pub fn raised_error(&self) -> Option<&RoutineError> {
        match self {
            Self::Raised(err) => Some(err),
            _ => None,
        }
    }

    /// Short human label for logs and summaries.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
            Self::Raised(_) => "raised",
        }
    }
}

/// Named values a routine explicitly exposes to its lifecycle hooks.
///
/// This replaces implicit call-frame introspection: the routine writes what
/// it wants visible, and the runner freezes the map into the
/// [`ExecutionContext`] the moment the routine returns or raises.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Observables {
    entries: BTreeMap<String, Value>,
}

impl Observables {
    /// Record a named value for the hooks to see.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Record any serializable value.
    ///
    /// A value that fails to serialize is recorded as an explanatory string
    /// instead of being dropped, so hooks still see that the name exists.
    pub fn set_serialized<T: serde::Serialize>(&mut self, name: impl Into<String>, value: &T) {
        let value = serde_json::to_value(value)
            .unwrap_or_else(|e| Value::String(format!("<unserializable: {e}>")));
        self.entries.insert(name.into(), value);
    }

    /// Look up a recorded value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Number of recorded values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate recorded values in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }
}

/// Frozen record of one application run, handed read-only to hooks.
#[derive(Debug)]
pub struct ExecutionContext {
    pub(crate) title: String,
    pub(crate) start_time: DateTime<Utc>,
    pub(crate) end_time: DateTime<Utc>,
    pub(crate) duration: Duration,
    pub(crate) outcome: Outcome,
    pub(crate) observables: Observables,
}

impl ExecutionContext {
    pub(crate) fn new(
        title: String,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        outcome: Outcome,
        observables: Observables,
    ) -> Self {
        // Wall clocks can step backwards; the duration contract is >= 0.
        let duration = (end_time - start_time).to_std().unwrap_or_default();
        Self {
            title,
            start_time,
            end_time,
            duration,
            outcome,
            observables,
        }
    }

    /// Title of the application this run belongs to.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Wall-clock instant the run started.
    #[must_use]
    pub const fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    /// Wall-clock instant the routine returned or raised.
    #[must_use]
    pub const fn end_time(&self) -> DateTime<Utc> {
        self.end_time
    }

    /// Elapsed wall-clock time of the routine, never negative.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Classified outcome of the run.
    #[must_use]
    pub const fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Values the routine exposed for the hooks, frozen at completion.
    #[must_use]
    pub const fn observables(&self) -> &Observables {
        &self.observables
    }

    /// One-line summary with RFC 3339 timestamps, for logs.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} [{}] started {} finished {} ({:.3}s)",
            self.title,
            self.outcome.label(),
            self.start_time
                .to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            self.end_time
                .to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            self.duration.as_secs_f64(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness_table() {
        assert!(!ReturnValue::Unit.is_falsy());
        assert!(ReturnValue::Bool(false).is_falsy());
        assert!(!ReturnValue::Bool(true).is_falsy());
        assert!(ReturnValue::Int(0).is_falsy());
        assert!(!ReturnValue::Int(-3).is_falsy());
        assert!(ReturnValue::Float(0.0).is_falsy());
        assert!(ReturnValue::Text(String::new()).is_falsy());
        assert!(!ReturnValue::Text("x".into()).is_falsy());
        assert!(ReturnValue::Count(0).is_falsy());
        assert!(!ReturnValue::Count(7).is_falsy());
    }

    #[test]
    fn conventional_returns_are_unit_bool_int() {
        assert!(ReturnValue::Unit.is_conventional());
        assert!(ReturnValue::Bool(true).is_conventional());
        assert!(ReturnValue::Int(5).is_conventional());
        assert!(!ReturnValue::Text("data".into()).is_conventional());
        assert!(!ReturnValue::Float(1.5).is_conventional());
        assert!(!ReturnValue::Count(2).is_conventional());
    }

    #[test]
    fn outcome_exit_codes() {
        assert_eq!(Outcome::Success.exit_code(), 0);
        assert_eq!(Outcome::Failure.exit_code(), 1);
        assert_eq!(Outcome::Raised("boom".into()).exit_code(), 1);
    }

    #[test]
    fn raised_outcome_carries_the_error() {
        let outcome = Outcome::Raised("disk on fire".into());
        let err = outcome.raised_error().expect("error present");
        assert_eq!(err.to_string(), "disk on fire");
        assert!(Outcome::Success.raised_error().is_none());
    }

    #[test]
    fn observables_round_trip_in_name_order() {
        let mut obs = Observables::default();
        obs.set("zeta", 1);
        obs.set("alpha", "text");
        obs.set("alpha", "overwritten");

        assert_eq!(obs.len(), 2);
        assert_eq!(obs.get("alpha"), Some(&Value::from("overwritten")));
        let names: Vec<&str> = obs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn serialized_observables_become_structured_values() {
        #[derive(serde::Serialize)]
        struct Stats {
            copied: u32,
            skipped: u32,
        }

        let mut obs = Observables::default();
        obs.set_serialized(
            "stats",
            &Stats {
                copied: 12,
                skipped: 3,
            },
        );
        let stats = obs.get("stats").expect("recorded");
        assert_eq!(stats["copied"], Value::from(12));
        assert_eq!(stats["skipped"], Value::from(3));
    }

    #[test]
    fn duration_is_derived_and_clamped() {
        let start = Utc::now();
        let end = start + chrono::Duration::milliseconds(250);
        let ctx = ExecutionContext::new(
            "t".into(),
            start,
            end,
            Outcome::Success,
            Observables::default(),
        );
        assert_eq!(ctx.duration(), Duration::from_millis(250));

        // A clock that stepped backwards clamps to zero instead of panicking.
        let ctx = ExecutionContext::new(
            "t".into(),
            end,
            start,
            Outcome::Success,
            Observables::default(),
        );
        assert_eq!(ctx.duration(), Duration::ZERO);
    }

    #[test]
    fn summary_mentions_title_and_outcome() {
        let now = Utc::now();
        let ctx = ExecutionContext::new(
            "backup".into(),
            now,
            now,
            Outcome::Failure,
            Observables::default(),
        );
        let line = ctx.summary();
        assert!(line.contains("backup"));
        assert!(line.contains("[failure]"));
    }
}
