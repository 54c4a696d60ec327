//! Catch-history panel.
//!
//! Lists every catalogue species in order with its sprite, lifetime catch
//! count, and configured point value. Sprites are presentation data keyed
//! by species name; the session knows nothing about them.

use crate::fishing::logic::FishingSession;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws the catch-history view in place of the water scene.
pub fn draw_stats_panel(frame: &mut Frame, area: Rect, session: &FishingSession) {
    let mut lines = vec![
        Line::from(Span::styled(
            "CATCH HISTORY",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for species in session.catalogue() {
        let count = session
            .catch_counts
            .get(&species.name)
            .copied()
            .unwrap_or(0);

        let count_style = if count > 0 {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        lines.push(Line::from(vec![
            Span::styled(
                format!("{:10}", species_sprite(&species.name)),
                Style::default().fg(Color::Blue),
            ),
            Span::styled(format!("{:10}", species.name), Style::default().fg(Color::White)),
            Span::styled(format!("x{:<5}", count), count_style),
            Span::styled(
                format!("{} pts each", species.points),
                Style::default().fg(Color::Yellow),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("Total: "),
        Span::styled(
            format!(
                "{} fish, {} points",
                session.total_catches(),
                session.total_points
            ),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    let panel = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Stats "))
        .alignment(Alignment::Center);

    frame.render_widget(panel, area);
}

/// ASCII sprite for a species. Unknown names get a generic fish.
fn species_sprite(name: &str) -> &'static str {
    match name {
        "Minnow" => "<·((<",
        "Perch" => "<°))><",
        "Trout" => "<°)))><",
        "Salmon" => "<©))))><",
        "Pike" => "<≡}}}}>≤",
        "Old Boot" => "[_=7",
        _ => "<°))><",
    }
}
