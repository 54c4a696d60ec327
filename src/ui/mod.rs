mod fishing_scene;
mod stats_panel;

use crate::constants::MESSAGE_LOG_CAPACITY;
use crate::fishing::logic::FishingSession;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Main UI drawing function.
pub fn draw_ui(frame: &mut Frame, session: &FishingSession, messages: &[String]) {
    let size = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                              // Header with score
            Constraint::Min(10),                                // Water scene or stats view
            Constraint::Length(MESSAGE_LOG_CAPACITY as u16 + 2), // Recent events
            Constraint::Length(3),                              // Controls footer
        ])
        .split(size);

    draw_header(frame, chunks[0], session);

    if session.stats_view {
        stats_panel::draw_stats_panel(frame, chunks[1], session);
    } else {
        fishing_scene::render_fishing_scene(frame, chunks[1], session);
    }

    draw_message_log(frame, chunks[2], messages);
    draw_footer(frame, chunks[3]);
}

/// Draws the header with total points and lifetime catch count.
fn draw_header(frame: &mut Frame, area: Rect, session: &FishingSession) {
    let header_text = vec![Line::from(vec![
        Span::styled(
            "ANGLER",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(
            format!("Points: {}", session.total_points),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" | "),
        Span::styled(
            format!("Fish caught: {}", session.total_catches()),
            Style::default().fg(Color::Green),
        ),
    ])];

    let header = Paragraph::new(header_text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    frame.render_widget(header, area);
}

/// Draws the recent-events log, newest entry last.
fn draw_message_log(frame: &mut Frame, area: Rect, messages: &[String]) {
    let lines: Vec<Line> = messages
        .iter()
        .map(|m| Line::from(Span::styled(m.clone(), Style::default().fg(Color::Gray))))
        .collect();

    let log = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Log "));

    frame.render_widget(log, area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let footer_text = vec![Line::from(vec![Span::styled(
        "[Space] Cast / Catch   [Tab] Catch History   [R] Reset Stats   [Esc] Quit",
        Style::default().fg(Color::DarkGray),
    )])];

    let footer = Paragraph::new(footer_text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
