//! Query assembly for objectives.
//!
//! Three queries are produced per objective:
//!
//! ```text
//! total        sum(increase(<metric>{<base>}[<window>]))
//! errors       sum(increase(<metric>{<base>,<errors>}[<window>]))
//! error budget (((100 - T)/100) - (errors / total)) / ((100 - T)/100)
//! ```
//!
//! The error budget query evaluates to the fraction of budget left: `1` with
//! no errors, `0` when the budget is used up, negative once the objective
//! is breached.

use std::time::Duration;

use super::duration::format_duration;
use super::resolve::resolve;
use super::selector::render_selectors;
use crate::compile::CompileResult;
use crate::model::Objective;

/// Format a target percentage with exactly three decimals.
pub fn format_target(target: f64) -> String {
    format!("{:.3}", target)
}

/// `sum(increase(<metric><selectors>[<window>]))`
fn volume<S: AsRef<str>>(metric: &str, selectors: &[S], window: Duration) -> String {
    format!(
        "sum(increase({}{}[{}]))",
        metric,
        render_selectors(selectors),
        format_duration(window)
    )
}

/// Total event volume over the objective window.
pub fn query_total(objective: &Objective) -> CompileResult<String> {
    let resolved = resolve(&objective.indicator)?;
    Ok(volume(&resolved.metric, &resolved.selectors, objective.window))
}

/// Error event volume over the objective window.
pub fn query_errors(objective: &Objective) -> CompileResult<String> {
    let resolved = resolve(&objective.indicator)?;
    Ok(volume(
        &resolved.metric,
        &resolved.all_error_selectors(),
        objective.window,
    ))
}

/// Fraction of error budget remaining over the objective window.
pub fn query_error_budget(objective: &Objective) -> CompileResult<String> {
    let errors = query_errors(objective)?;
    let total = query_total(objective)?;
    let budget = format!("((100 - {})/100)", format_target(objective.target));
    Ok(format!(
        "({} - ({} / {})) / {}",
        budget, errors, total, budget
    ))
}

impl Objective {
    /// See [`query_total`].
    pub fn query_total(&self) -> CompileResult<String> {
        query_total(self)
    }

    /// See [`query_errors`].
    pub fn query_errors(&self) -> CompileResult<String> {
        query_errors(self)
    }

    /// See [`query_error_budget`].
    pub fn query_error_budget(&self) -> CompileResult<String> {
        query_error_budget(self)
    }
}
