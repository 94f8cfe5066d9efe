//! Map display widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Widget};

use wn_core::dungeon::{Level, Point};

use crate::glyphs::GlyphMode;

/// Widget painting the floor cells of a level, the agent, and the target
/// marker. Cells outside the floor set stay void.
pub struct MapWidget<'a> {
    level: &'a Level,
    agent: Point,
    target: Point,
    glyphs: GlyphMode,
}

impl<'a> MapWidget<'a> {
    pub fn new(level: &'a Level, agent: Point, target: Point, glyphs: GlyphMode) -> Self {
        Self {
            level,
            agent,
            target,
            glyphs,
        }
    }

    fn cell_display(&self, point: Point) -> (char, Style) {
        if point == self.agent {
            return ('@', Style::default().fg(Color::White).bold());
        }
        if point == self.target {
            return ('x', Style::default().fg(Color::Yellow));
        }
        if self.level.is_floor(point) {
            return (self.glyphs.floor_char(), Style::default().fg(Color::Gray));
        }
        (' ', Style::default())
    }
}

impl Widget for MapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" warren (seed {}) ", self.level.seed()));
        let inner = block.inner(area);
        block.render(area, buf);

        let width = self.level.width().min(inner.width as i32);
        let height = self.level.height().min(inner.height as i32);

        for y in 0..height {
            for x in 0..width {
                let (symbol, style) = self.cell_display(Point::new(x, y));
                if let Some(cell) =
                    buf.cell_mut(Position::new(inner.x + x as u16, inner.y + y as u16))
                {
                    cell.set_char(symbol);
                    cell.set_style(style);
                }
            }
        }
    }
}
