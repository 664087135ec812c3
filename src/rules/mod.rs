// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit message validation.
//!
//! This module provides the declarative rule model and the pure
//! evaluator that checks a parsed commit message against it.

mod builtin;
mod engine;
mod violation;

pub use builtin::{CaseStyle, RuleId, RuleParam};
pub use engine::{ConfiguredRule, RuleSet, When};
pub use violation::{LintReport, Severity, Violation};
