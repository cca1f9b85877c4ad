// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! A message is split into header and body, its header is split into
//! component and description, and every enabled rule is run over the
//! result unless the ignore policy exempts the whole message.

mod builtin;
mod case;
mod engine;
mod ignore;
mod report;
mod verbs;

pub use builtin::*;
pub use case::CaseStyle;
pub use engine::{ConfiguredRule, RuleEngine, RuleSet};
pub use ignore::{IgnorePolicy, IgnorePredicate};
pub use report::{EvaluationReport, ReportEntry, RuleResult};
pub use verbs::{Allowlist, COMMON_VERBS, PROJECT_VERBS};
