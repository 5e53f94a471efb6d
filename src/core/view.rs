//! View models handed to the presentation surface.
//!
//! A `ViewModel` is everything a front-end needs to draw one screen: the
//! revealed state, feedback lines, a terminal flag, and at most one notice.
//! No markup or layout crosses this boundary.

use serde::{Deserialize, Serialize};

/// Severity of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    /// Neutral information (hints, reports).
    Info,
    /// The player won or an action succeeded.
    Success,
    /// Input was rejected; nothing changed.
    Warning,
    /// The player lost, or an action failed.
    Error,
}

/// A single message for the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Message text.
    pub text: String,
}

impl Notice {
    /// Informational notice.
    pub fn info(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, text: text.into() }
    }

    /// Success notice.
    pub fn success(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, text: text.into() }
    }

    /// Warning notice.
    pub fn warning(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, text: text.into() }
    }

    /// Error notice.
    pub fn error(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, text: text.into() }
    }
}

/// One rendered screen.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewModel {
    /// Screen title.
    pub title: String,
    /// How to play.
    pub instructions: String,
    /// Revealed state (masked word, hands, memory dump...), one entry per line.
    pub board: Vec<String>,
    /// Feedback log, most relevant first.
    pub feedback: Vec<String>,
    /// What the engine expects next, if anything.
    pub prompt: Option<String>,
    /// True once the engine accepts no further moves until reset.
    pub terminal: bool,
    /// Outcome of the last action.
    pub notice: Option<Notice>,
}

impl ViewModel {
    /// Start a view with a title and instructions.
    pub fn new(title: impl Into<String>, instructions: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            instructions: instructions.into(),
            ..Self::default()
        }
    }

    /// Append a board line.
    #[must_use]
    pub fn with_board_line(mut self, line: impl Into<String>) -> Self {
        self.board.push(line.into());
        self
    }

    /// Set the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Set the terminal flag.
    #[must_use]
    pub fn terminal(mut self, terminal: bool) -> Self {
        self.terminal = terminal;
        self
    }

    /// Attach a notice, replacing any previous one.
    #[must_use]
    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }
}
