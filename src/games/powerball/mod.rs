//! Powerball ticket check.
//!
//! Validates a pick of five distinct white balls and one Powerball, then
//! returns a canned report on the odds. Holds no state.

use std::ops::RangeInclusive;

use smallvec::SmallVec;
use tracing::debug;

use crate::core::{Notice, ViewModel};

/// Range for the five white balls.
pub const WHITE_BALLS: RangeInclusive<u32> = 1..=69;

/// Range for the Powerball.
pub const POWERBALL: RangeInclusive<u32> = 1..=26;

/// White balls per ticket.
pub const PICKS: usize = 5;

/// The fixed simulation summary.
pub const REPORT: &str = "Simulation complete: 1,000 plays. Cost: $2,000. Winnings: $0. \
Jackpot Probability: 1 in 292.2 Million.";

const INSTRUCTIONS: &str = "Pick 5 unique numbers (1-69) and 1 Powerball (1-26). The simulation \
will run 1,000 plays to demonstrate your actual chances of winning.";

/// A valid ticket.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ticket {
    /// White balls, sorted.
    pub numbers: SmallVec<[u32; PICKS]>,
    /// Powerball.
    pub powerball: u32,
}

/// Why a ticket was refused.
#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display)]
pub enum TicketProblem {
    /// Something that isn't a whole number.
    #[display("{_0:?} is not a number")]
    NotANumber(String),
    /// Wrong count of numbers.
    #[display("Enter 5 numbers followed by the Powerball (got {_0})")]
    WrongCount(usize),
    /// White ball outside 1-69.
    #[display("{_0} is outside 1-69")]
    WhiteOutOfRange(u32),
    /// Powerball outside 1-26.
    #[display("Powerball {_0} is outside 1-26")]
    PowerballOutOfRange(u32),
    /// A white ball picked twice.
    #[display("{_0} was picked twice")]
    Duplicate(u32),
}

/// Parse `"n1 n2 n3 n4 n5 pb"` (spaces or commas) into a ticket.
pub fn parse_ticket(input: &str) -> Result<Ticket, TicketProblem> {
    let values = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<u32>().map_err(|_| TicketProblem::NotANumber(s.to_string())))
        .collect::<Result<Vec<u32>, _>>()?;

    if values.len() != PICKS + 1 {
        return Err(TicketProblem::WrongCount(values.len()));
    }

    let (whites, pb) = values.split_at(PICKS);
    let mut numbers: SmallVec<[u32; PICKS]> = SmallVec::new();
    for &n in whites {
        if !WHITE_BALLS.contains(&n) {
            return Err(TicketProblem::WhiteOutOfRange(n));
        }
        if numbers.contains(&n) {
            return Err(TicketProblem::Duplicate(n));
        }
        numbers.push(n);
    }
    numbers.sort_unstable();

    let powerball = pb[0];
    if !POWERBALL.contains(&powerball) {
        return Err(TicketProblem::PowerballOutOfRange(powerball));
    }

    Ok(Ticket { numbers, powerball })
}

/// Check a ticket and render the result.
#[must_use]
pub fn run(input: &str) -> ViewModel {
    let screen = view();
    match parse_ticket(input) {
        Ok(ticket) => {
            debug!(?ticket, "Powerball ticket accepted");
            let numbers: Vec<String> = ticket.numbers.iter().map(ToString::to_string).collect();
            screen
                .with_board_line(format!("Numbers: {}  Powerball: {}", numbers.join(" "), ticket.powerball))
                .with_notice(Notice::info(REPORT))
        }
        Err(problem) => screen.with_notice(Notice::warning(problem.to_string())),
    }
}

/// The blank ticket screen.
#[must_use]
pub fn view() -> ViewModel {
    ViewModel::new("Powerball Simulator", INSTRUCTIONS)
        .with_prompt("Select 5 (1-69) then the Powerball (1-26):")
}
