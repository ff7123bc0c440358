//! Simple interactive CLI mode
//!
//! Text-based command loop around a [`Game`]. Command handling lives on
//! [`Session`] so it can be driven without a terminal.

use crate::core::{Dictionary, FeedbackEncoding, UsageTable, Word};
use crate::output::display::print_ranked;
use crate::output::formatters::format_confirmed;
use crate::solver::{FrequencyIndex, Game, GameError, Recommendation};
use colored::Colorize;
use std::io::{self, Write};

/// How many top candidates the `candidates` and `finish` commands list
pub const PRINT_N_BEST_CANDIDATES: usize = 8;
/// How many bottom candidates the `candidates` command lists
pub const PRINT_N_WORST_CANDIDATES: usize = 2;

/// Outcome of one command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    Success,
    Help,
    Exit,
    Noop,
    Reset,
}

/// One interactive solving session
///
/// Holds the current game and the guess the next `result` applies to. A
/// reset replaces the game but keeps the debug setting.
pub struct Session<'a> {
    dictionary: &'a Dictionary,
    index: &'a FrequencyIndex,
    usage: Option<&'a UsageTable>,
    encoding: FeedbackEncoding,
    debug: bool,
    game: Game<'a>,
    guess: Option<String>,
}

impl<'a> Session<'a> {
    #[must_use]
    pub fn new(
        dictionary: &'a Dictionary,
        index: &'a FrequencyIndex,
        usage: Option<&'a UsageTable>,
        encoding: FeedbackEncoding,
    ) -> Self {
        Self {
            dictionary,
            index,
            usage,
            encoding,
            debug: false,
            game: Game::new(dictionary, index, usage),
            guess: None,
        }
    }

    /// The guess the next `result` command applies to
    #[must_use]
    pub fn guess(&self) -> Option<&str> {
        self.guess.as_deref()
    }

    pub fn game(&mut self) -> &mut Game<'a> {
        &mut self.game
    }

    pub const fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
        self.game.set_debug(debug);
    }

    /// Start a fresh game
    pub fn reset(&mut self) {
        self.game = Game::new(self.dictionary, self.index, self.usage);
        self.game.set_debug(self.debug);
        self.guess = None;
    }

    /// Pick the best candidate as the current guess and print it
    pub fn recommend(&mut self) -> CommandResult {
        match self.game.best_candidate() {
            Ok(best) => self.show(best.into()),
            Err(e) => {
                println!("{} {e}", "error:".red());
                CommandResult::Noop
            }
        }
    }

    /// Handle one command line
    pub fn execute(&mut self, line: &str) -> CommandResult {
        let line = line.trim();
        let (command, argument) = match line.split_once(' ') {
            Some((command, rest)) => (command, Some(rest)),
            None => (line, None),
        };

        match (command.to_lowercase().as_str(), argument) {
            ("", _) => CommandResult::Help,
            ("result", Some(feedback)) => self.apply_result(feedback),
            ("guess", Some(word)) => self.override_guess(word.trim()),
            ("candidates", None) => self.print_candidates(),
            ("finish", None) => self.print_finish(),
            ("reset" | "restart" | "retry" | "begin", None) => CommandResult::Reset,
            ("denied", None) => self.deny_guess(),
            ("debug", None) => {
                self.set_debug(!self.debug);
                let state = if self.debug { "on" } else { "off" };
                println!("debug output {state}");
                CommandResult::Noop
            }
            ("exit" | "quit" | "q", None) => CommandResult::Exit,
            _ => CommandResult::Help,
        }
    }

    fn apply_result(&mut self, feedback: &str) -> CommandResult {
        let Some(guess) = self.guess.clone() else {
            println!("{} no current guess; use 'guess <word>'", "error:".red());
            return CommandResult::Noop;
        };

        match self.game.apply_feedback(&guess, feedback, self.encoding) {
            Ok(recommendation) => self.show(recommendation),
            Err(GameError::Validation(e)) => {
                println!("{} invalid format: {e}", "error:".red());
                CommandResult::Noop
            }
            Err(e) => {
                println!("{} {e}", "error:".red());
                CommandResult::Noop
            }
        }
    }

    fn override_guess(&mut self, word: &str) -> CommandResult {
        let length = self.game.word_length();
        match Word::new(word) {
            Ok(word) if word.len() == length => {
                self.guess = Some(word.text().to_string());
                CommandResult::Success
            }
            _ => {
                println!("{} guess must be a {length}-letter word", "error:".red());
                CommandResult::Noop
            }
        }
    }

    fn deny_guess(&mut self) -> CommandResult {
        let Some(guess) = self.guess.take() else {
            println!("{} no current guess", "error:".red());
            return CommandResult::Noop;
        };

        if let Err(e) = self.game.remove_candidate(&guess) {
            println!("{} {e}", "error:".red());
            self.guess = Some(guess);
            return CommandResult::Noop;
        }
        self.print_candidates();
        self.recommend()
    }

    fn print_candidates(&mut self) -> CommandResult {
        let ranked = match self.game.best_candidates() {
            Ok(ranked) => ranked,
            Err(e) => {
                println!("{} {e}", "error:".red());
                return CommandResult::Noop;
            }
        };

        let best = &ranked[..ranked.len().min(PRINT_N_BEST_CANDIDATES)];
        print_ranked("best candidates:", best);

        let worst = &ranked[ranked.len().saturating_sub(PRINT_N_WORST_CANDIDATES)..];
        if ranked.len() > PRINT_N_BEST_CANDIDATES {
            print_ranked("worst candidates:", worst);
        }
        CommandResult::Success
    }

    fn print_finish(&mut self) -> CommandResult {
        match self.game.best_candidates_to_finish() {
            Ok(ranked) => {
                let best = &ranked[..ranked.len().min(PRINT_N_BEST_CANDIDATES)];
                print_ranked("most likely answers:", best);
                CommandResult::Success
            }
            Err(e) => {
                println!("{} {e}", "error:".red());
                CommandResult::Noop
            }
        }
    }

    fn show(&mut self, recommendation: Recommendation<'a>) -> CommandResult {
        match recommendation {
            Recommendation::Guess(word) => {
                self.guess = Some(word.text().to_string());
                let count = self.game.candidate_count();
                println!(
                    "recommended guess is {} ({count} candidates, known {})",
                    word.text().to_uppercase().bright_green().bold(),
                    format_confirmed(self.game.confirmed())
                );
                CommandResult::Success
            }
            Recommendation::Exhausted => {
                println!("{} no words left; resetting", "error:".red());
                CommandResult::Reset
            }
        }
    }
}

fn print_help() {
    println!(
        "
commands:
  result <feedback>
    apply the feedback for the current guess
    colors encoding: g (green), y (yellow), b/_/space (missing)
    case encoding:   LETTER (green), letter (yellow), anything else (missing)
  guess <word>
    override the recommended guess
  candidates
    print the best and worst candidates by score
  finish
    print the most likely answers by real-world usage
  reset | restart
    begin a new game
  denied
    remove the current guess as a valid word and try again
  debug
    toggle diagnostic output
  exit"
    );
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a fresh
/// game has no candidates at all.
pub fn run_simple(session: &mut Session) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Wordle Assistant - Interactive Mode             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Type 'help' for commands.\n");

    if session.recommend() == CommandResult::Reset {
        return Err("The dictionary has no candidates".to_string());
    }

    loop {
        let Some(line) = get_user_input(">")? else {
            println!();
            return Ok(());
        };

        match session.execute(&line) {
            CommandResult::Help => print_help(),
            CommandResult::Reset => {
                session.reset();
                println!("\n🔄 New game started!\n");
                if session.recommend() == CommandResult::Reset {
                    return Err("The dictionary has no candidates".to_string());
                }
            }
            CommandResult::Exit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            CommandResult::Success | CommandResult::Noop => {}
        }
    }
}

/// Get user input with a prompt, `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt} ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok((read > 0).then(|| input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(texts: &[&str]) -> (Dictionary, FrequencyIndex) {
        let words = texts.iter().map(|t| Word::new(*t).unwrap());
        let dictionary = Dictionary::new(words, 5).unwrap();
        let index = FrequencyIndex::build(&dictionary);
        (dictionary, index)
    }

    #[test]
    fn recommend_sets_guess() {
        let (dictionary, index) = setup(&["arose", "tilde", "mince", "wince"]);
        let mut session = Session::new(&dictionary, &index, None, FeedbackEncoding::Case);

        assert_eq!(session.recommend(), CommandResult::Success);
        assert_eq!(session.guess(), Some("mince"));
    }

    #[test]
    fn result_applies_to_current_guess() {
        let (dictionary, index) = setup(&["arose", "tilde", "mince", "wince"]);
        let mut session = Session::new(&dictionary, &index, None, FeedbackEncoding::Case);

        assert_eq!(session.execute("guess AROSE"), CommandResult::Success);
        assert_eq!(session.guess(), Some("arose"));
        assert_eq!(session.execute("result ____E"), CommandResult::Success);
        assert_eq!(session.guess(), Some("mince"));
        assert_eq!(session.game().candidate_count(), 3);
    }

    #[test]
    fn yellow_result_requires_letter_elsewhere() {
        let (dictionary, index) = setup(&["wince", "crane", "since", "icons"]);
        let mut session = Session::new(&dictionary, &index, None, FeedbackEncoding::Colors);

        assert_eq!(session.execute("guess ibbbe"), CommandResult::Success);
        assert_eq!(session.execute("result y___g"), CommandResult::Success);
        assert_eq!(session.game().candidate_count(), 2);
        assert_eq!(session.guess(), Some("since"));
    }

    #[test]
    fn short_result_is_padded() {
        let (dictionary, index) = setup(&["mince", "wince", "since"]);
        let mut session = Session::new(&dictionary, &index, None, FeedbackEncoding::Colors);
        session.execute("guess mince");

        // trailing positions are treated as missing
        assert_eq!(session.execute("result _g"), CommandResult::Reset);
    }

    #[test]
    fn invalid_result_is_noop() {
        let (dictionary, index) = setup(&["mince", "wince", "since"]);
        let mut session = Session::new(&dictionary, &index, None, FeedbackEncoding::Colors);
        session.recommend();

        assert_eq!(session.execute("result G?Y__"), CommandResult::Noop);
        assert_eq!(session.game().candidate_count(), 3);
        assert_eq!(session.guess(), Some("mince"));
    }

    #[test]
    fn result_without_guess_is_noop() {
        let (dictionary, index) = setup(&["mince", "wince"]);
        let mut session = Session::new(&dictionary, &index, None, FeedbackEncoding::Colors);

        assert_eq!(session.execute("result ggggg"), CommandResult::Noop);
    }

    #[test]
    fn denied_removes_guess_and_recommends_next() {
        let (dictionary, index) = setup(&["mince", "wince", "since"]);
        let mut session = Session::new(&dictionary, &index, None, FeedbackEncoding::Colors);
        session.recommend();

        assert_eq!(session.execute("denied"), CommandResult::Success);
        assert_eq!(session.guess(), Some("wince"));
        assert_eq!(session.game().candidate_count(), 2);
    }

    #[test]
    fn denied_last_candidate_resets() {
        let (dictionary, index) = setup(&["mince"]);
        let mut session = Session::new(&dictionary, &index, None, FeedbackEncoding::Colors);
        session.recommend();

        assert_eq!(session.execute("denied"), CommandResult::Reset);
    }

    #[test]
    fn exhausting_feedback_requests_reset() {
        let (dictionary, index) = setup(&["mince", "wince"]);
        let mut session = Session::new(&dictionary, &index, None, FeedbackEncoding::Colors);
        session.recommend();

        assert_eq!(session.execute("result bbbbb"), CommandResult::Reset);
        session.reset();
        assert_eq!(session.guess(), None);
        assert_eq!(session.game().candidate_count(), 2);
    }

    #[test]
    fn command_grammar() {
        let (dictionary, index) = setup(&["mince", "wince"]);
        let mut session = Session::new(&dictionary, &index, None, FeedbackEncoding::Colors);

        assert_eq!(session.execute(""), CommandResult::Help);
        assert_eq!(session.execute("bogus"), CommandResult::Help);
        assert_eq!(session.execute("result"), CommandResult::Help);
        assert_eq!(session.execute("guess ab"), CommandResult::Noop);
        assert_eq!(session.execute("candidates"), CommandResult::Success);
        assert_eq!(session.execute("finish"), CommandResult::Success);
        assert_eq!(session.execute("restart"), CommandResult::Reset);
        assert_eq!(session.execute("EXIT"), CommandResult::Exit);
    }

    #[test]
    fn debug_toggle_survives_reset() {
        let (dictionary, index) = setup(&["mince", "wince"]);
        let mut session = Session::new(&dictionary, &index, None, FeedbackEncoding::Colors);

        assert_eq!(session.execute("debug"), CommandResult::Noop);
        assert!(session.game().debug());
        session.reset();
        assert!(session.game().debug());
    }
}
