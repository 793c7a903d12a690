//! Half-block image rendering.
//!
//! Each terminal cell shows two vertically stacked pixels: the upper one as the
//! `▀` glyph's foreground, the lower one as its background.

use crewgate_core::assets::PixelGrid;
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

use super::BackdropState;

const UPPER_HALF: &str = "▀";

/// Fill used when no image is available.
pub const FALLBACK_FILL: Color = Color::Rgb(14, 17, 22);

/// Draws a `PixelGrid` with its top-left corner at the area's origin.
///
/// Cells not covered by the grid are filled with `FALLBACK_FILL` when `fill`
/// is set, otherwise left untouched.
#[derive(Debug, Clone, Copy)]
pub struct HalfBlockImage<'a> {
    grid: &'a PixelGrid,
    fill: bool,
}

impl<'a> HalfBlockImage<'a> {
    pub fn new(grid: &'a PixelGrid) -> Self {
        Self { grid, fill: false }
    }

    #[must_use]
    pub fn fill_uncovered(mut self) -> Self {
        self.fill = true;
        self
    }
}

fn rgb(px: [u8; 3]) -> Color {
    Color::Rgb(px[0], px[1], px[2])
}

impl Widget for HalfBlockImage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..area.height {
            for col in 0..area.width {
                let top = self.grid.pixel(col, row * 2);
                let bottom = self.grid.pixel(col, row * 2 + 1);
                let style = match (top, bottom) {
                    (Some(top), Some(bottom)) => Style::default().fg(rgb(top)).bg(rgb(bottom)),
                    (Some(top), None) => Style::default().fg(rgb(top)).bg(FALLBACK_FILL),
                    _ if self.fill => Style::default().fg(FALLBACK_FILL).bg(FALLBACK_FILL),
                    _ => continue,
                };
                buf.set_string(area.x + col, area.y + row, UPPER_HALF, style);
            }
        }
    }
}

/// Paints the full-screen background (dark fill until an image is decoded).
pub fn render_backdrop(frame: &mut Frame, backdrop: &BackdropState) {
    let area = frame.area();
    frame.render_widget(HalfBlockImage::new(backdrop.background()).fill_uncovered(), area);
}

/// Paints the logo centered horizontally at row `y`; returns the rows used.
pub fn render_logo(frame: &mut Frame, backdrop: &BackdropState, y: u16) -> u16 {
    let grid = backdrop.logo();
    if grid.is_empty() {
        return 0;
    }
    let area = frame.area();
    let width = grid.width().min(area.width);
    let height = grid.rows().min(area.height.saturating_sub(y));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    frame.render_widget(HalfBlockImage::new(grid), Rect::new(x, area.y + y, width, height));
    height
}
