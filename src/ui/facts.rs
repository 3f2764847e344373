//! Popup with the current region's capital, flower and bird.

use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};

use crate::app::App;

const POPUP_WIDTH: u16 = 48;
const POPUP_HEIGHT: u16 = 10;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let [popup] = Layout::horizontal([Constraint::Length(POPUP_WIDTH)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::vertical([Constraint::Length(POPUP_HEIGHT)])
        .flex(Flex::Center)
        .areas(popup);

    let (title, content) = match app.facts() {
        Some(facts) => (
            format!(" {} Facts ", facts.region),
            vec![
                fact_line("Region", facts.region),
                fact_line("Capital", facts.capital),
                Line::from(""),
                fact_line("Flower", facts.flower),
                fact_line("Bird", facts.bird),
            ],
        ),
        None => (
            " Facts ".to_string(),
            vec![Line::from("No region selected yet!".fg(Color::Yellow))],
        ),
    };

    let widget = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::Magenta)
            .title(title)
            .title_style(Style::default().fg(Color::Magenta).bold())
            .title_bottom(Line::from(" any key to close ").centered())
            .padding(Padding::uniform(1)),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(widget, popup);
}

fn fact_line<'a>(label: &'a str, value: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<13}", format!("{}:", label)), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(Color::White).bold()),
    ])
}
