use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::COLOR_ACCENT;
use crate::game::GameState;

const CONTROLS_HINT: &str = "arrows/WASD turn · Q quit";

/// Renders the score row and the controls hint under the board.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState) {
    let [score_area, hint_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(score_line(state.score(), state.snake().len()))
            .alignment(Alignment::Center),
        score_area,
    );
    frame.render_widget(
        Paragraph::new(CONTROLS_HINT)
            .alignment(Alignment::Center)
            .style(Style::new().add_modifier(Modifier::DIM)),
        hint_area,
    );
}

fn score_line(score: usize, length: usize) -> Line<'static> {
    let value = Style::new().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD);
    Line::from(vec![
        Span::raw("Score "),
        Span::styled(score.to_string(), value),
        Span::raw("   Length "),
        Span::styled(length.to_string(), value),
    ])
}
