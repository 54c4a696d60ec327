//! Fishing scene UI rendering.
//!
//! Displays the water with a bobber that reacts to the fishing phase, the
//! current status line, and the catch-window countdown.

use crate::constants::CATCH_WINDOW_SECONDS;
use crate::fishing::logic::FishingSession;
use crate::fishing::types::FishingPhase;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders the fishing scene.
///
/// # Layout
/// ```text
/// +---------------------------------------+
/// |     ~ ~ ~ ~ ~ ~ ~ ~ ~ ~ ~ ~ ~         |
/// |       ~~~~~~ O ~~~~~~                 |
/// |     ~ ~ ~ ~ ~|~ ~ ~ ~ ~ ~ ~           |
/// |              |                        |
/// +---------------------------------------+
/// |  Hooked! Press Space to catch         |
/// |  Catch window: ██████░░░░ 1.2s        |
/// +---------------------------------------+
/// ```
pub fn render_fishing_scene(frame: &mut Frame, area: Rect, session: &FishingSession) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Water with bobber
            Constraint::Length(4), // Status line + catch window bar
        ])
        .split(area);

    draw_water_scene(frame, chunks[0], session);
    draw_status(frame, chunks[1], session);
}

/// Draws the ASCII water scene with bobber.
fn draw_water_scene(frame: &mut Frame, area: Rect, session: &FishingSession) {
    let hooked = session.phase == FishingPhase::CatchWindow;
    let line_cast = session.phase != FishingPhase::Idle;

    let bobber_style = if hooked {
        // Fish is on - the bobber flashes red
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let mut water_lines = vec![Line::from(Span::styled(
        "    ~ ~ ~ ~ ~ ~ ~ ~ ~ ~ ~ ~ ~",
        Style::default().fg(Color::Blue),
    ))];

    if line_cast {
        water_lines.push(Line::from(vec![
            Span::styled("      ~~~~~~", Style::default().fg(Color::Blue)),
            Span::styled(" O ", bobber_style),
            Span::styled("~~~~~~", Style::default().fg(Color::Blue)),
        ]));
        water_lines.push(Line::from(vec![
            Span::styled("    ~ ~ ~ ~ ~", Style::default().fg(Color::Blue)),
            Span::styled("|", Style::default().fg(Color::DarkGray)),
            Span::styled(" ~ ~ ~ ~ ~ ~", Style::default().fg(Color::Blue)),
        ]));
        water_lines.push(Line::from(Span::styled(
            "             |",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        water_lines.push(Line::from(Span::styled(
            "      ~~~~~~~~~~~~~~~",
            Style::default().fg(Color::Blue),
        )));
        water_lines.push(Line::from(Span::styled(
            "    ~ ~ ~ ~ ~ ~ ~ ~ ~ ~ ~",
            Style::default().fg(Color::Blue),
        )));
    }

    let water = Paragraph::new(water_lines)
        .block(Block::default().borders(Borders::ALL).title(" The Lake "))
        .alignment(Alignment::Left);

    frame.render_widget(water, area);
}

/// Draws the status line, the catch-window countdown, and the debug readout
/// of the drawn bite interval.
fn draw_status(frame: &mut Frame, area: Rect, session: &FishingSession) {
    let status_style = match session.phase {
        FishingPhase::CatchWindow => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
        _ => Style::default().fg(Color::White),
    };

    let mut lines = vec![Line::from(Span::styled(
        session.status_message(),
        status_style,
    ))];

    if session.phase == FishingPhase::CatchWindow {
        let remaining = session.catch_timer.max(0.0);
        lines.push(Line::from(vec![
            Span::raw("Catch window: "),
            Span::styled(
                progress_bar(remaining / CATCH_WINDOW_SECONDS, 10),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(format!(" {:.1}s", remaining)),
        ]));
    } else {
        lines.push(Line::from(Span::styled(
            format!("Bite interval: {:.0}s", session.bite_interval),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let status = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    frame.render_widget(status, area);
}

/// Renders a filled/empty bar for a 0.0..=1.0 fraction.
fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0)) * width as f64).round() as usize;
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(width - filled));
    bar
}
