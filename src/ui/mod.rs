mod facts;
mod finished;
mod quiz;
mod welcome;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::Screen;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.screen {
        Screen::Welcome => welcome::render(frame, area, app),
        Screen::Quiz => quiz::render(frame, area, app),
        Screen::Finished => finished::render(frame, area, app),
    }

    if app.is_showing_facts() {
        facts::render(frame, area, app);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ratatui::backend::TestBackend;

    use super::*;
    use crate::config::QuizConfig;
    use crate::models::{FactTable, RegionFacts};
    use crate::session::Session;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
            .to_lowercase()
    }

    #[test]
    fn test_custom_table_wording_is_region_neutral() {
        let table = FactTable::new(vec![
            RegionFacts::new("Ontario", "Toronto").with_secondary("Trillium", "Common loon"),
            RegionFacts::new("Quebec", "Quebec City"),
        ])
        .unwrap();
        let mut app = App::new(Session::new(
            Arc::new(table),
            QuizConfig::default().with_seed(Some(5)),
        ));

        let welcome = screen_text(&app);
        assert!(welcome.contains("capitals quiz"));
        assert!(!welcome.contains("state"));

        app.start_quiz();
        let quiz = screen_text(&app);
        assert!(quiz.contains("region below"));
        assert!(!quiz.contains("state"));

        app.toggle_facts();
        let facts = screen_text(&app);
        assert!(facts.contains("flower"));
        assert!(facts.contains("bird"));
        assert!(!facts.contains("state"));
    }
}
