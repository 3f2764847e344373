use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::{App, Tone};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_progress(frame, chunks[0], app);
    render_instructions(frame, chunks[1]);
    render_region(frame, chunks[2], app.current_region_name().unwrap_or(""));
    render_input(frame, chunks[3], app);
    render_feedback(frame, chunks[4], app);
    render_learned(frame, chunks[5], app);
    render_controls(frame, chunks[6]);
}

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Neutral => Color::Cyan,
        Tone::Positive => Color::Green,
        Tone::Negative => Color::Red,
        Tone::Warning => Color::Yellow,
    }
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let (score, total) = session.tally();

    let halves = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let score_widget = Paragraph::new(format!("Score: {}/{}", score, total))
        .fg(Color::White)
        .bold();
    frame.render_widget(score_widget, halves[0]);

    let progress = match session.remaining() {
        Some(remaining) => format!("{} to go", remaining.len()),
        None => "endless".to_string(),
    };
    let progress_widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(progress_widget, halves[1]);
}

fn render_instructions(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("Type the capital for the region below:")
        .alignment(Alignment::Center)
        .fg(Color::Gray);
    frame.render_widget(widget, area);
}

fn render_region(frame: &mut Frame, area: Rect, name: &str) {
    let widget = Paragraph::new(name)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow).bold())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray),
        );
    frame.render_widget(widget, area);
}

fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let cursor_color = if app.is_advance_pending() {
        Color::DarkGray
    } else {
        Color::Yellow
    };

    let line = Line::from(vec![
        Span::styled("Capital: ", Style::default().fg(Color::White)),
        Span::styled(app.input(), Style::default().fg(Color::Yellow)),
        Span::styled("_", Style::default().fg(cursor_color)),
    ]);

    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_feedback(frame: &mut Frame, area: Rect, app: &App) {
    let feedback = app.feedback();
    let widget = Paragraph::new(feedback.text.as_str())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .fg(tone_color(feedback.tone));
    frame.render_widget(widget, area);
}

fn render_learned(frame: &mut Frame, area: Rect, app: &App) {
    let table = app.table();
    let learned = app.session().learned();

    let mut spans = Vec::with_capacity(learned.len() * 2);
    for (index, &region) in learned.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled("  ·  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            table.capital_of(region),
            Style::default().fg(Color::Green),
        ));
    }

    let widget = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .title(format!(" Capitals learned {}/{} ", learned.len(), table.len()))
                .title_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("enter check  ·  tab skip  ·  ctrl+f facts  ·  esc quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
