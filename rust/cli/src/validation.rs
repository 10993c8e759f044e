//! Input parsing for the interactive play command.
//!
//! This module turns user input lines into table commands. Parsing is
//! intentionally permissive about which commands it accepts; whether a
//! command is legal for the current hand status is decided by the play
//! loop against [`Hand::available_actions`](blackjack_engine::hand::Hand::available_actions).

/// A command entered at the table prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum TableCommand {
    /// Place a bet; `None` means the configured default stake
    Bet(Option<u32>),
    /// Draw one more card
    Hit,
    /// Keep the current total and end the turn
    Stick,
    /// Raise the stake and draw exactly one card; `None` doubles the bet
    Double(Option<u32>),
    /// Give up the hand for half the stake
    Surrender,
    /// Sit the round out without betting
    Abstain,
}

/// Result type for parsing user input at the table prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseResult {
    /// Valid table command parsed from input
    Command(TableCommand),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input string into a TableCommand or special commands.
///
/// Accepts the following input formats (case-insensitive):
/// - "bet" or "bet X" → Bet (default or explicit stake)
/// - "h" or "hit" → Hit
/// - "s", "stick" or "stand" → Stick
/// - "d", "double" or "double X" → Double (full or partial raise)
/// - "surrender" → Surrender
/// - "abstain" → Abstain
/// - "q" or "quit" → Quit command
///
/// # Example
///
/// ```rust
/// # use blackjack_cli::validation::{parse_table_command, ParseResult, TableCommand};
/// assert_eq!(
///     parse_table_command("bet 25"),
///     ParseResult::Command(TableCommand::Bet(Some(25)))
/// );
/// assert_eq!(parse_table_command("hit"), ParseResult::Command(TableCommand::Hit));
/// assert_eq!(parse_table_command("q"), ParseResult::Quit);
///
/// match parse_table_command("fold") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_table_command(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    // Check for quit commands first
    if parts[0] == "q" || parts[0] == "quit" {
        return ParseResult::Quit;
    }

    match parts[0] {
        "hit" | "h" => ParseResult::Command(TableCommand::Hit),
        "stick" | "stand" | "s" => ParseResult::Command(TableCommand::Stick),
        "surrender" => ParseResult::Command(TableCommand::Surrender),
        "abstain" => ParseResult::Command(TableCommand::Abstain),
        "bet" => match parse_optional_amount(&parts, "bet") {
            Ok(amount) => ParseResult::Command(TableCommand::Bet(amount)),
            Err(msg) => ParseResult::Invalid(msg),
        },
        "double" | "d" => match parse_optional_amount(&parts, "double") {
            Ok(amount) => ParseResult::Command(TableCommand::Double(amount)),
            Err(msg) => ParseResult::Invalid(msg),
        },
        _ => ParseResult::Invalid(format!(
            "Unrecognized command '{}'. Valid commands: bet [amount], hit, stick, double [amount], surrender, abstain, q",
            parts[0]
        )),
    }
}

fn parse_optional_amount(parts: &[&str], verb: &str) -> Result<Option<u32>, String> {
    if parts.len() < 2 {
        return Ok(None);
    }
    match parts[1].parse::<u32>() {
        Ok(amount) if amount > 0 => Ok(Some(amount)),
        Ok(_) => Err(format!("{} amount must be positive", verb)),
        Err(_) => Err(format!("Invalid {} amount", verb)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bet_with_and_without_amount() {
        assert_eq!(
            parse_table_command("bet"),
            ParseResult::Command(TableCommand::Bet(None))
        );
        assert_eq!(
            parse_table_command("BET 100"),
            ParseResult::Command(TableCommand::Bet(Some(100)))
        );
    }

    #[test]
    fn test_parse_play_commands() {
        assert_eq!(
            parse_table_command("hit"),
            ParseResult::Command(TableCommand::Hit)
        );
        assert_eq!(
            parse_table_command("stand"),
            ParseResult::Command(TableCommand::Stick)
        );
        assert_eq!(
            parse_table_command("d 5"),
            ParseResult::Command(TableCommand::Double(Some(5)))
        );
        assert_eq!(
            parse_table_command("surrender"),
            ParseResult::Command(TableCommand::Surrender)
        );
    }

    #[test]
    fn test_parse_quit() {
        assert_eq!(parse_table_command("q"), ParseResult::Quit);
        assert_eq!(parse_table_command("quit"), ParseResult::Quit);
    }

    #[test]
    fn test_zero_amount_is_rejected() {
        assert!(matches!(
            parse_table_command("bet 0"),
            ParseResult::Invalid(_)
        ));
    }

    #[test]
    fn test_garbage_amount_is_rejected() {
        assert!(matches!(
            parse_table_command("double xyz"),
            ParseResult::Invalid(_)
        ));
    }

    #[test]
    fn test_unknown_command_lists_valid_ones() {
        match parse_table_command("fold") {
            ParseResult::Invalid(msg) => {
                assert!(msg.contains("Unrecognized"));
                assert!(msg.contains("surrender"));
            }
            other => panic!("Expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input_is_invalid() {
        assert_eq!(
            parse_table_command("   "),
            ParseResult::Invalid("Empty input".to_string())
        );
    }
}
