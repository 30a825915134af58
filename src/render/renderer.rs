use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine},
        Block, BorderType, Borders, Paragraph,
    },
    Frame,
};

use crate::game::{Cell, GameState, Grid, SegmentRole};

const GRID_COLOR: Color = Color::Rgb(221, 221, 221);
const HEAD_COLOR: Color = Color::Rgb(0, 0, 255);
const BODY_COLOR: Color = Color::Rgb(135, 206, 235);
const FOOD_COLOR: Color = Color::Rgb(255, 0, 0);
const HUD_COLOR: Color = Color::Rgb(0, 0, 255);

/// Axis-aligned rectangle in canvas space (origin bottom-left)
#[derive(Debug, Clone, Copy, PartialEq)]
struct CanvasRect {
    left: f64,
    bottom: f64,
    width: f64,
    height: f64,
}

/// Canvas rectangle for an on-grid cell; off-grid cells are never drawn
fn board_rect(grid: &Grid, cell: Cell) -> Option<CanvasRect> {
    if !grid.in_bounds(cell) {
        return None;
    }

    let rect = grid.cell_to_pixel(cell);
    let board_height = f64::from(grid.height_px());
    Some(CanvasRect {
        left: f64::from(rect.x),
        bottom: board_height - f64::from(rect.y) - f64::from(rect.height),
        width: f64::from(rect.width),
        height: f64::from(rect.height),
    })
}

/// Fill a rectangle with horizontal strokes
fn fill(ctx: &mut Context, rect: CanvasRect, color: Color) {
    let step = (rect.height / 8.0).max(1.0);
    let mut y = rect.bottom + 1.0;
    while y < rect.bottom + rect.height {
        ctx.draw(&CanvasLine {
            x1: rect.left + 1.0,
            y1: y,
            x2: rect.left + rect.width - 1.0,
            y2: y,
            color,
        });
        y += step;
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render<R>(&self, frame: &mut Frame, state: &GameState<R>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // HUD
                Constraint::Min(0),    // Board
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_hud(state), chunks[0]);
        self.render_board(frame, chunks[1], state);
        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_board<R>(&self, frame: &mut Frame, area: Rect, state: &GameState<R>) {
        let grid = *state.grid();
        let width = f64::from(grid.width_px());
        let height = f64::from(grid.height_px());
        let cell_size = grid.cell_size().max(1) as usize;

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .marker(Marker::Braille)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(move |ctx| {
                for x in (0..=grid.width_px() as usize).step_by(cell_size) {
                    ctx.draw(&CanvasLine {
                        x1: x as f64,
                        y1: 0.0,
                        x2: x as f64,
                        y2: height,
                        color: GRID_COLOR,
                    });
                }
                for y in (0..=grid.height_px() as usize).step_by(cell_size) {
                    ctx.draw(&CanvasLine {
                        x1: 0.0,
                        y1: y as f64,
                        x2: width,
                        y2: y as f64,
                        color: GRID_COLOR,
                    });
                }
                ctx.layer();

                // Tail first so the head stays on top when segments overlap
                for segment in state.snake().segments().iter().rev() {
                    let color = match segment.role {
                        SegmentRole::Head => HEAD_COLOR,
                        SegmentRole::Body => BODY_COLOR,
                    };
                    if let Some(rect) = board_rect(&grid, segment.position) {
                        fill(ctx, rect, color);
                    }
                }

                if let Some(rect) = board_rect(&grid, state.food().position()) {
                    fill(ctx, rect, FOOD_COLOR);
                }
            });

        frame.render_widget(canvas, area);
    }

    fn render_hud<R>(&self, state: &GameState<R>) -> Paragraph<'_> {
        let head = state.snake().head();
        let style = Style::default().fg(HUD_COLOR).add_modifier(Modifier::BOLD);

        let text = vec![Line::from(vec![
            Span::styled(format!("SNAKE: {},{}", head.x, head.y), style),
            Span::raw("    "),
            Span::styled(format!("LENGTH: {}", state.snake().len()), style),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
