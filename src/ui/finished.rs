use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{
        Block, Borders, Paragraph,
        canvas::{Canvas, Circle, Points},
    },
};

use crate::app::App;
use crate::fireworks::{self, Fireworks};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_summary(frame, chunks[0], app);
    if let Some(show) = app.fireworks() {
        render_fireworks(frame, chunks[1], show);
    }
    render_controls(frame, chunks[2]);
}

fn render_summary(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let (score, total) = session.tally();

    let verdict = if session.is_perfect() {
        format!("Amazing job! You got all {} right in this session.", session.table().len())
    } else {
        "You've answered all the regions in this session!".to_string()
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "ALL DONE!",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(verdict, Style::default().fg(Color::Yellow))),
        Line::from(Span::styled(
            format!("Final score: {} / {}", score, total),
            Style::default().fg(Color::Green).bold(),
        )),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_fireworks(frame: &mut Frame, area: Rect, show: &Fireworks) {
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, fireworks::WIDTH])
        .y_bounds([0.0, fireworks::HEIGHT])
        .paint(|ctx| {
            for burst in show.bursts() {
                ctx.draw(&Circle {
                    x: burst.x,
                    y: burst.y,
                    radius: burst.radius,
                    color: burst.color,
                });
                ctx.draw(&Points {
                    coords: &burst.sparks,
                    color: burst.color,
                });
            }
        });
    frame.render_widget(canvas, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("r play again  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
