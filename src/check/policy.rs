//! Verdict policy applied by the caller of a check.
//!
//! - any unresolved critical request → `Fail`
//! - any other unresolved request → `Warn` (`Fail` when strict)
//! - dead interactions never change the verdict

use std::fmt;

use serde::Serialize;

use crate::report::CheckReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

impl Verdict {
    pub fn exit_code(self) -> u8 {
        match self {
            Verdict::Pass | Verdict::Warn => 0,
            Verdict::Fail => 1,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => f.write_str("pass"),
            Verdict::Warn => f.write_str("warn"),
            Verdict::Fail => f.write_str("fail"),
        }
    }
}

pub fn verdict(report: &CheckReport, strict: bool) -> Verdict {
    if report.critical_failures().next().is_some() {
        Verdict::Fail
    } else if report.failures.is_empty() {
        Verdict::Pass
    } else if strict {
        Verdict::Fail
    } else {
        Verdict::Warn
    }
}

/// Segment-aware prefix test: `onboarding` covers `onboarding/step-1` but
/// not `onboarding-tips`.
pub fn is_critical_origin(origin: &str, critical_origins: &[String]) -> bool {
    let origin: Vec<&str> = segments(origin).collect();
    critical_origins.iter().any(|prefix| {
        let prefix: Vec<&str> = segments(prefix).collect();
        !prefix.is_empty() && origin.starts_with(&prefix)
    })
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}
