//! TUI application state and logic

use crate::core::Puzzle;
use crate::engine::Validator;
use crate::output::formatters::word_count;
use crate::spell::SpellCheck;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest answer the input box will hold
const MAX_INPUT_LEN: usize = 24;

/// Messages kept in the message panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a, C: SpellCheck> {
    validator: Validator<C>,
    pool: &'a [String],
    rng: StdRng,
    pub puzzle: Puzzle,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub attempts: usize,
    pub accepted: usize,
}

impl<'a, C: SpellCheck> App<'a, C> {
    #[must_use]
    pub fn new(checker: C, pool: &'a [String], mut rng: StdRng) -> Self {
        let validator = Validator::new(checker);
        let puzzle = validator.start_puzzle(pool, &mut rng);

        let mut app = Self {
            validator,
            pool,
            rng,
            puzzle,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics {
                games_played: 1,
                ..Statistics::default()
            },
            should_quit: false,
        };

        app.add_message(
            "Welcome! Make words from the letters above.",
            MessageStyle::Info,
        );
        app.add_message(
            "Type an answer and press Enter. Ctrl+N deals a new word.",
            MessageStyle::Info,
        );
        app
    }

    /// Submit the current input buffer as an answer
    pub fn submit_answer(&mut self) {
        let answer = self.input_buffer.trim().to_string();
        self.input_buffer.clear();

        if answer.is_empty() {
            return;
        }

        self.stats.attempts += 1;

        match self.validator.validate(&mut self.puzzle, &answer) {
            Ok(accepted) => {
                self.stats.accepted += 1;
                let found = word_count(self.puzzle.accepted().len());
                self.add_message(
                    &format!("✓ {} accepted ({found})", accepted.word),
                    MessageStyle::Success,
                );
            }
            Err(reason) => {
                let text = format!(
                    "{}: {}",
                    reason.title(),
                    reason.message(self.puzzle.base_word())
                );
                self.add_message(&text, MessageStyle::Error);
            }
        }
    }

    /// Replace the puzzle with a fresh random base word
    pub fn new_game(&mut self) {
        self.puzzle = self.validator.start_puzzle(self.pool, &mut self.rng);
        self.input_buffer.clear();
        self.messages.clear();
        self.stats.games_played += 1;
        self.add_message("New word dealt. Good luck!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Base-word letters paired with whether the current input consumes them
    ///
    /// Greedy left-to-right matching, one occurrence per typed letter, the
    /// same consumption rule the validator applies.
    #[must_use]
    pub fn letter_states(&self) -> Vec<(char, bool)> {
        let mut states: Vec<(char, bool)> = self
            .puzzle
            .base_word()
            .chars()
            .map(|letter| (letter, false))
            .collect();

        for letter in self.input_buffer.to_lowercase().chars() {
            if let Some(slot) = states
                .iter_mut()
                .find(|(candidate, used)| *candidate == letter && !*used)
            {
                slot.1 = true;
            }
        }

        states
    }

    pub fn push_input(&mut self, c: char) {
        if self.input_buffer.len() < MAX_INPUT_LEN && !c.is_control() {
            self.input_buffer.push(c);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui<C: SpellCheck>(app: App<'_, C>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, C: SpellCheck>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, C>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.new_game();
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Enter => {
                    app.submit_answer();
                }
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Char(c) => {
                    app.push_input(c);
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spell::DictionaryChecker;
    use rand::SeedableRng;

    fn test_app(pool: &[String]) -> App<'_, DictionaryChecker> {
        let checker = DictionaryChecker::from_words(["silk", "worm", "milk"]);
        App::new(checker, pool, StdRng::seed_from_u64(1))
    }

    fn silkworm_pool() -> Vec<String> {
        vec!["silkworm".to_string()]
    }

    #[test]
    fn submit_accepts_and_clears_input() {
        let pool = silkworm_pool();
        let mut app = test_app(&pool);

        app.input_buffer = "silk".to_string();
        app.submit_answer();

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.puzzle.accepted(), &["silk"]);
        assert_eq!(app.stats.attempts, 1);
        assert_eq!(app.stats.accepted, 1);
    }

    #[test]
    fn submit_rejection_keeps_puzzle_and_counts_attempt() {
        let pool = silkworm_pool();
        let mut app = test_app(&pool);

        app.input_buffer = "quartz".to_string();
        app.submit_answer();

        assert!(app.puzzle.accepted().is_empty());
        assert_eq!(app.stats.attempts, 1);
        assert_eq!(app.stats.accepted, 0);
        assert!(
            app.messages
                .last()
                .is_some_and(|m| m.text.contains("Word not possible"))
        );
    }

    #[test]
    fn submit_empty_input_is_a_no_op() {
        let pool = silkworm_pool();
        let mut app = test_app(&pool);

        app.input_buffer = "   ".to_string();
        app.submit_answer();

        assert_eq!(app.stats.attempts, 0);
    }

    #[test]
    fn new_game_resets_puzzle_state() {
        let pool = silkworm_pool();
        let mut app = test_app(&pool);

        app.input_buffer = "silk".to_string();
        app.submit_answer();
        app.new_game();

        assert!(app.puzzle.accepted().is_empty());
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.stats.games_played, 2);
    }

    #[test]
    fn letter_states_consume_left_to_right() {
        let pool = silkworm_pool();
        let mut app = test_app(&pool);

        app.input_buffer = "silk".to_string();
        let states = app.letter_states();

        // s-i-l-k consumed, w-o-r-m free
        assert_eq!(
            states,
            vec![
                ('s', true),
                ('i', true),
                ('l', true),
                ('k', true),
                ('w', false),
                ('o', false),
                ('r', false),
                ('m', false),
            ]
        );
    }

    #[test]
    fn letter_states_do_not_double_consume() {
        let pool = vec!["doorbell".to_string()];
        let checker = DictionaryChecker::from_words(["doorbell"]);
        let mut app = App::new(checker, &pool, StdRng::seed_from_u64(1));

        app.input_buffer = "ooo".to_string();
        let states = app.letter_states();

        // only the two 'o's in doorbell get consumed
        let consumed = states.iter().filter(|(_, used)| *used).count();
        assert_eq!(consumed, 2);
    }

    #[test]
    fn input_is_capped() {
        let pool = silkworm_pool();
        let mut app = test_app(&pool);

        for _ in 0..100 {
            app.push_input('a');
        }
        assert_eq!(app.input_buffer.len(), MAX_INPUT_LEN);
    }
}
