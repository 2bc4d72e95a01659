use crate::terminal::category::CommandCategory;
use crate::terminal::responses::Response;
use crate::terminal::template::{CommandInfo, Fill};

/// Semantic color class of a simulated output line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Plain program output.
    #[default]
    Output,
    /// Completed successfully.
    Success,
    /// Non-fatal problem.
    Warning,
    /// Failure.
    Error,
    /// Progress or informational note.
    Info,
}

/// One simulated line of command output.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct OutputLine {
    /// Line text. May be empty, which the compositor treats as a spacer.
    pub text: String,
    /// Semantic class.
    pub severity: Severity,
    /// Delay after the command finishes typing; non-decreasing within one response.
    pub delay_secs: f64,
}

impl OutputLine {
    /// `true` for spacer lines that take vertical room but reveal nothing.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Static output line with `{key}` placeholders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct LineTemplate {
    pub text: &'static str,
    pub severity: Severity,
    pub delay_secs: f64,
}

pub(crate) const fn line(text: &'static str, severity: Severity, delay_secs: f64) -> LineTemplate {
    LineTemplate {
        text,
        severity,
        delay_secs,
    }
}

/// Fabricate plausible output for `command` within an already chosen `category`.
///
/// Never fails. Blank commands and silent commands (`cd`, `git add`, `clear`, ...) return an
/// empty list; any other unrecognized command yields one `command not found` error line.
pub fn simulate(command: &str, category: CommandCategory) -> Vec<OutputLine> {
    let info = CommandInfo::parse(command);
    if info.is_blank() {
        return Vec::new();
    }
    let response = Response::select(category, &info);
    let mut fill = Fill::new(&info);
    let lines: Vec<OutputLine> = response
        .lines()
        .iter()
        .map(|t| OutputLine {
            text: fill.render(t.text),
            severity: t.severity,
            delay_secs: t.delay_secs,
        })
        .collect();
    tracing::trace!(
        category = %category,
        response = ?response,
        lines = lines.len(),
        "simulated command output"
    );
    lines
}

/// [`crate::classify`] followed by [`simulate`].
pub fn simulate_command(command: &str) -> (CommandCategory, Vec<OutputLine>) {
    let category = crate::terminal::category::classify(command);
    (category, simulate(command, category))
}

#[cfg(test)]
#[path = "../../tests/unit/terminal/output.rs"]
mod tests;
