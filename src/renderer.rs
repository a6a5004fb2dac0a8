use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::config::{COLOR_BOARD, COLOR_INK, GLYPH_FOOD, GLYPH_SNAKE, GridSize};
use crate::game::GameState;
use crate::grid::Position;
use crate::ui::hud::render_hud;
use crate::ui::menu::render_game_over_menu;

/// Terminal columns per board cell.
const CELL_WIDTH: u16 = 2;

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState) {
    let bounds = state.bounds();
    let board_width = bounds.width.saturating_mul(CELL_WIDTH).saturating_add(2);
    let board_height = bounds.height.saturating_add(2);

    let [column] = Layout::horizontal([Constraint::Length(board_width)])
        .flex(Flex::Center)
        .areas(frame.area());
    let [board_area, hud_area] = Layout::vertical([
        Constraint::Length(board_height),
        Constraint::Length(2),
    ])
    .flex(Flex::Center)
    .areas(column);

    let block = Block::bordered()
        .border_style(Style::new().fg(COLOR_INK))
        .style(Style::new().bg(COLOR_BOARD));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    if let Some(food) = state.food() {
        paint_cell(frame, inner, bounds, food, GLYPH_FOOD);
    }
    for segment in state.snake().segments() {
        paint_cell(frame, inner, bounds, *segment, GLYPH_SNAKE);
    }

    render_hud(frame, hud_area, state);

    if state.is_game_over() {
        render_game_over_menu(frame, board_area, state.score());
    }
}

fn paint_cell(frame: &mut Frame<'_>, inner: Rect, bounds: GridSize, cell: Position, glyph: &str) {
    let Some((x, y)) = logical_to_terminal(inner, bounds, cell) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, glyph, Style::new().fg(COLOR_INK).bg(COLOR_BOARD));
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.saturating_mul(CELL_WIDTH);
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
