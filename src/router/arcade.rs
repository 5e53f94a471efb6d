//! Dispatch from (session, route, command) to an engine.

use tracing::{debug, instrument, warn};

use super::command::Command;
use super::route::{home_view, Route};
use crate::core::{ArcadeConfig, ArcadeError, GameRng, Notice, Result, ViewModel};
use crate::games::bagels::BagelsOutcome;
use crate::games::blackjack::BlackjackAction;
use crate::games::caesar::{self, CaesarReport, DEFAULT_CIPHERTEXT};
use crate::games::hacking::HackingOutcome;
use crate::games::hangman::HangmanOutcome;
use crate::games::powerball;
use crate::rules::GameEngine;
use crate::session::{Session, SessionId, SessionStore};

/// The arcade: a session store plus the routing rules.
///
/// Every call locks the caller's session for its whole duration, so the
/// engines behind it see one action at a time.
#[derive(Debug)]
pub struct Arcade {
    store: SessionStore,
}

impl Arcade {
    /// An arcade with no sessions yet.
    #[must_use]
    pub fn new(config: ArcadeConfig) -> Self {
        Self {
            store: SessionStore::new(config),
        }
    }

    /// The underlying session store.
    #[must_use]
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Apply one command on one route for one session and render the result.
    ///
    /// Engines start lazily, so the first command on a route always works.
    /// Only an exhausted deck comes back as an error; every other refusal
    /// is reported through the view's notice.
    #[instrument(skip_all, fields(session_id = %session_id, route = %route))]
    pub fn handle(&self, session_id: &SessionId, route: Route, command: Command) -> Result<ViewModel> {
        debug!(%command, "Handling command");
        if route == Route::Home {
            return Ok(home(&command));
        }
        self.store
            .with_session(session_id, |session| dispatch(session, route, command))
    }
}

fn dispatch(session: &mut Session, route: Route, command: Command) -> Result<ViewModel> {
    if command == Command::Reset {
        session.reset(route);
        let view = dispatch(session, route, Command::Show)?;
        let notice = if route.is_stateful() {
            Notice::info("Started over.")
        } else {
            Notice::info("Nothing to reset.")
        };
        return Ok(view.with_notice(notice));
    }

    match route {
        Route::Home => Ok(home(&command)),
        Route::Hangman => hangman(session, command),
        Route::Bagels => bagels(session, command),
        Route::Hacking => hacking(session, command),
        Route::Caesar => Ok(caesar(session, command)),
        Route::Blackjack => blackjack(session, command),
        Route::Powerball => Ok(powerball(&command)),
    }
}

/// Current view plus a warning that `command` means nothing here.
fn unsupported(view: ViewModel, command: &Command, route: Route) -> ViewModel {
    warn!(%command, %route, "Command does not apply");
    view.with_notice(Notice::warning(format!("\"{}\" does nothing in {}.", command, route)))
}

/// Apply a text action, trimmed, and render with the outcome's notice.
fn play<E>(
    engine: &mut E,
    text: String,
    rng: &mut GameRng,
    notice: impl Fn(&E::Outcome) -> Notice,
) -> Result<ViewModel>
where
    E: GameEngine<Action = String>,
{
    let outcome = engine.apply(text.trim().to_string(), rng)?;
    Ok(engine.view().with_notice(notice(&outcome)))
}

fn home(command: &Command) -> ViewModel {
    match command {
        Command::Show => home_view(),
        other => unsupported(home_view(), other, Route::Home),
    }
}

fn hangman(session: &mut Session, command: Command) -> Result<ViewModel> {
    let (game, rng) = session.hangman();
    match command {
        Command::Show => Ok(game.view()),
        Command::Hint => Ok(game.view().with_notice(game.hint())),
        other => match other.as_text() {
            Some(text) => play(game, text, rng, HangmanOutcome::notice),
            None => Ok(unsupported(game.view(), &other, Route::Hangman)),
        },
    }
}

fn bagels(session: &mut Session, command: Command) -> Result<ViewModel> {
    let (game, rng) = session.bagels();
    match command {
        Command::Show => Ok(game.view()),
        Command::Hint => Ok(game.view().with_notice(game.hint())),
        other => match other.as_text() {
            Some(text) => play(game, text, rng, BagelsOutcome::notice),
            None => Ok(unsupported(game.view(), &other, Route::Bagels)),
        },
    }
}

fn hacking(session: &mut Session, command: Command) -> Result<ViewModel> {
    let (game, rng) = session.hacking();
    match command {
        Command::Show => Ok(game.view()),
        other => match other.as_text() {
            Some(text) => play(game, text, rng, HackingOutcome::notice),
            None => Ok(unsupported(game.view(), &other, Route::Hacking)),
        },
    }
}

/// Report for the last submitted ciphertext, or the sample message.
fn caesar_report(session: &Session) -> CaesarReport {
    caesar::decrypt(session.last_ciphertext().unwrap_or(DEFAULT_CIPHERTEXT))
}

fn caesar(session: &mut Session, command: Command) -> ViewModel {
    match command {
        Command::Show => caesar_report(session).view(false),
        Command::ShowAll => caesar_report(session).view(true),
        other => match other.as_text() {
            Some(text) => {
                let report = caesar::decrypt(&text);
                session.set_last_ciphertext(text);
                report.view(false)
            }
            None => unsupported(caesar_report(session).view(false), &other, Route::Caesar),
        },
    }
}

fn blackjack(session: &mut Session, command: Command) -> Result<ViewModel> {
    let config = session.config().clone();
    let (table, rng) = session.blackjack();
    let action = match command {
        Command::Show => return Ok(table.view()),
        Command::Deal(wager) => BlackjackAction::Deal(wager),
        Command::Hit => BlackjackAction::Hit,
        Command::Stand => BlackjackAction::Stand,
        // "deal" alone bets the suggested amount; a bare number is a wager.
        Command::Submit(text) if text.trim().eq_ignore_ascii_case("deal") => {
            BlackjackAction::Deal(config.suggested_wager(table.bankroll()))
        }
        Command::Submit(text) => match text.trim().parse() {
            Ok(wager) => BlackjackAction::Deal(wager),
            Err(_) => return Ok(unsupported(table.view(), &Command::Submit(text), Route::Blackjack)),
        },
        other => return Ok(unsupported(table.view(), &other, Route::Blackjack)),
    };

    match table.apply(action, rng) {
        Ok(outcome) => Ok(table.view().with_notice(outcome.notice())),
        Err(ArcadeError::DeckExhausted) => Err(ArcadeError::DeckExhausted),
        Err(err) => {
            warn!(%err, ?action, "Blackjack action refused");
            let notice = match err {
                ArcadeError::Broke { .. } => Notice::error(err.to_string()),
                _ => Notice::warning(err.to_string()),
            };
            Ok(table.view().with_notice(notice))
        }
    }
}

fn powerball(command: &Command) -> ViewModel {
    match command {
        Command::Show => powerball::view(),
        other => match other.as_text() {
            Some(text) => powerball::run(&text),
            None => unsupported(powerball::view(), other, Route::Powerball),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NoticeLevel;

    fn arcade() -> Arcade {
        Arcade::new(ArcadeConfig::default().with_seed(42))
    }

    fn level(view: &ViewModel) -> Option<NoticeLevel> {
        view.notice.as_ref().map(|n| n.level)
    }

    #[test]
    fn test_first_show_starts_engine() {
        let arcade = arcade();
        let id = SessionId::from("s1");
        let view = arcade.handle(&id, Route::Hangman, Command::Show).unwrap();
        assert_eq!(view.title, "Hangman");
        assert!(!view.terminal);
        assert!(arcade.store().with_session(&id, |s| s.is_started(Route::Hangman)));
    }

    #[test]
    fn test_home_ignores_session() {
        let arcade = arcade();
        let view = arcade.handle(&SessionId::from("s"), Route::Home, Command::Show).unwrap();
        assert_eq!(view.title, "Arcade Hub");
        assert!(arcade.store().is_empty());
    }

    #[test]
    fn test_unsupported_command_warns() {
        let arcade = arcade();
        let id = SessionId::from("s");
        let view = arcade.handle(&id, Route::Hacking, Command::Hint).unwrap();
        assert_eq!(level(&view), Some(NoticeLevel::Warning));
        assert_eq!(view.title, "Terminal Hacking");
    }

    #[test]
    fn test_caesar_remembers_last_ciphertext() {
        let arcade = arcade();
        let id = SessionId::from("s");
        let view = arcade.handle(&id, Route::Caesar, Command::Submit("KHOOR".into())).unwrap();
        assert!(view.feedback.is_empty());
        let all = arcade.handle(&id, Route::Caesar, Command::ShowAll).unwrap();
        assert_eq!(all.feedback.len(), 26);
        assert!(all.board[0].contains("KHOOR"));
    }

    #[test]
    fn test_caesar_keeps_surrounding_spaces() {
        let arcade = arcade();
        let id = SessionId::from("s");
        let secret = format!("  {} ", caesar::encrypt("YOU ARE NOT WITH THIS", 5));
        let view = arcade.handle(&id, Route::Caesar, Command::parse(&secret)).unwrap();
        assert_eq!(view.board[0], format!("Ciphertext: {}", secret));
        assert_eq!(view.board[1], "Best match: Key 5:   YOU ARE NOT WITH THIS ");

        let view = arcade.handle(&id, Route::Bagels, Command::parse(" 123 ")).unwrap();
        assert_eq!(view.prompt.as_deref(), Some("Guess (2/10):"));
    }

    #[test]
    fn test_blackjack_bad_wager_is_a_notice() {
        let arcade = arcade();
        let id = SessionId::from("s");
        let view = arcade.handle(&id, Route::Blackjack, Command::Deal(5)).unwrap();
        assert_eq!(level(&view), Some(NoticeLevel::Warning));
        assert!(view.board[0].contains("$1000"));

        let view = arcade.handle(&id, Route::Blackjack, Command::Hit).unwrap();
        assert_eq!(level(&view), Some(NoticeLevel::Warning));
    }

    #[test]
    fn test_blackjack_bare_number_deals() {
        let arcade = arcade();
        let id = SessionId::from("s");
        let view = arcade
            .handle(&id, Route::Blackjack, Command::Submit("100".into()))
            .unwrap();
        assert!(view.board.iter().any(|l| l == "Wager: $100"));
    }

    #[test]
    fn test_blackjack_plain_deal_uses_default_wager() {
        let arcade = arcade();
        let id = SessionId::from("s");
        let view = arcade.handle(&id, Route::Blackjack, Command::parse("deal")).unwrap();
        assert!(view.board.iter().any(|l| l == "Wager: $100"));
    }

    #[test]
    fn test_reset_starts_over() {
        let arcade = arcade();
        let id = SessionId::from("s");
        arcade.handle(&id, Route::Bagels, Command::Submit("123".into())).unwrap();
        let view = arcade.handle(&id, Route::Bagels, Command::Reset).unwrap();
        assert!(view.feedback.is_empty());
        assert_eq!(view.notice.unwrap().text, "Started over.");
    }
}
