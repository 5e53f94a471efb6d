//! The single discrete action a front-end sends per interaction.

/// A user action, independent of which engine receives it.
#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display)]
pub enum Command {
    /// Re-render without changing anything.
    #[display("show")]
    Show,
    /// Free text: a letter, a code, a password, a ciphertext, a ticket.
    #[display("{_0}")]
    Submit(String),
    /// Ask for a hint.
    #[display(":hint")]
    Hint,
    /// Expand the full result list.
    #[display(":all")]
    ShowAll,
    /// Start a blackjack hand.
    #[display("deal {_0}")]
    Deal(u32),
    /// Take a card.
    #[display("hit")]
    Hit,
    /// End the turn.
    #[display("stand")]
    Stand,
    /// Start the current engine over.
    #[display(":reset")]
    Reset,
}

impl Command {
    /// Read one input line.
    ///
    /// Recognized keywords are case-insensitive and may carry surrounding
    /// whitespace. Everything else is passed through as `Submit` untouched,
    /// so a ciphertext keeps its leading and trailing spaces.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let text = line.trim();
        let lower = text.to_ascii_lowercase();
        match lower.as_str() {
            "" | ":show" => Command::Show,
            ":hint" => Command::Hint,
            ":all" => Command::ShowAll,
            ":reset" => Command::Reset,
            "hit" => Command::Hit,
            "stand" => Command::Stand,
            _ => lower
                .strip_prefix("deal ")
                .and_then(|wager| wager.trim().parse().ok())
                .map_or_else(|| Command::Submit(line.to_string()), Command::Deal),
        }
    }

    /// The text this command carries when an engine wants free text.
    ///
    /// Table keywords read as plain words outside blackjack, so a Caesar
    /// message like "HIT" still gets decrypted.
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        match self {
            Command::Submit(text) => Some(text.clone()),
            Command::Deal(_) | Command::Hit | Command::Stand => Some(self.to_string()),
            Command::Show | Command::Hint | Command::ShowAll | Command::Reset => None,
        }
    }
}
