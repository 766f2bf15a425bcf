//! TUI rendering with ratatui
//!
//! The original game's screen, in terminal form: base word as the title,
//! accepted answers as a reverse-chronological list, an answer input box,
//! and rejection dialogs rendered as styled messages.

use super::app::{App, MessageStyle};
use crate::output::formatters::word_count;
use crate::spell::SpellCheck;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<C: SpellCheck>(f: &mut Frame, app: &App<'_, C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header: the base word
            Constraint::Min(8),    // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Accepted answers
            Constraint::Percentage(45), // Letters / stats / messages
        ])
        .split(chunks[1]);

    render_accepted(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header<C: SpellCheck>(f: &mut Frame, app: &App<'_, C>, area: Rect) {
    let spaced: String = app
        .puzzle
        .base_word()
        .to_uppercase()
        .chars()
        .flat_map(|c| [c, ' '])
        .collect();

    let header = Paragraph::new(spaced.trim_end().to_string())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word Scramble ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_accepted<C: SpellCheck>(f: &mut Frame, app: &App<'_, C>, area: Rect) {
    let items: Vec<ListItem> = app
        .puzzle
        .accepted()
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let style = if i == 0 {
                // newest entry on top, highlighted
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>3}. ", app.puzzle.accepted().len() - i), Style::default().fg(Color::DarkGray)),
                Span::styled(word.clone(), style),
            ]))
        })
        .collect();

    let title = format!(" Words Found ({}) ", app.puzzle.accepted().len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(list, area);
}

fn render_info_panel<C: SpellCheck>(f: &mut Frame, app: &App<'_, C>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Letter bank
            Constraint::Length(5), // Statistics
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_letters(f, app, chunks[0]);
    render_stats(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_letters<C: SpellCheck>(f: &mut Frame, app: &App<'_, C>, area: Rect) {
    let mut spans = Vec::new();
    for (letter, consumed) in app.letter_states() {
        let style = if consumed {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        };
        spans.push(Span::styled(letter.to_uppercase().to_string(), style));
        spans.push(Span::raw(" "));
    }

    let letters = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Letters ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(letters, area);
}

fn render_stats<C: SpellCheck>(f: &mut Frame, app: &App<'_, C>, area: Rect) {
    let content = vec![
        Line::from(format!("Game:     {}", app.stats.games_played)),
        Line::from(format!("Attempts: {}", app.stats.attempts)),
        Line::from(format!("Accepted: {}", app.stats.accepted)),
    ];

    let stats = Paragraph::new(content).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(stats, area);
}

fn render_messages<C: SpellCheck>(f: &mut Frame, app: &App<'_, C>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<C: SpellCheck>(f: &mut Frame, app: &App<'_, C>, area: Rect) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Enter answer ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_status<C: SpellCheck>(f: &mut Frame, app: &App<'_, C>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let found = Paragraph::new(word_count(app.puzzle.accepted().len()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(found, chunks[0]);

    let base = Paragraph::new(app.puzzle.base_word().to_string())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(base, chunks[1]);

    let keys = Paragraph::new("Enter submit │ Ctrl+N new │ Esc quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(keys, chunks[2]);
}
