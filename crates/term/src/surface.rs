//! Canvas drawing: the renderer side of the engine interface.
//!
//! A frame is described in canvas pixels. The canvas is
//! `COLS * BLOCK_SIZE` by `ROWS * BLOCK_SIZE`; each occupied cell becomes a
//! `BLOCK_SIZE` square at `(col * BLOCK_SIZE, row * BLOCK_SIZE)`, filled and
//! then stroked. Any backend that can fill and stroke rectangles can show the
//! game by implementing [`DrawSurface`].

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BLOCK_SIZE, COLS, ROWS};

/// Fill colour of locked board cells
pub const BOARD_FILL: Rgb = Rgb::new(0, 255, 255);

/// Fill colour of the active piece
pub const ACTIVE_FILL: Rgb = Rgb::new(255, 0, 0);

/// Outline colour of every block
pub const STROKE: Rgb = Rgb::new(0, 0, 0);

/// Something rectangles can be drawn on, in canvas pixels.
pub trait DrawSurface {
    /// Erase the whole canvas
    fn clear(&mut self);
    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgb);
    fn stroke_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgb);
}

/// One recorded drawing call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    Clear,
    Fill { x: u32, y: u32, w: u32, h: u32, color: Rgb },
    Stroke { x: u32, y: u32, w: u32, h: u32, color: Rgb },
}

/// A display list records calls instead of drawing them.
impl DrawSurface for Vec<DrawCommand> {
    fn clear(&mut self) {
        self.push(DrawCommand::Clear);
    }

    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgb) {
        self.push(DrawCommand::Fill { x, y, w, h, color });
    }

    fn stroke_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgb) {
        self.push(DrawCommand::Stroke { x, y, w, h, color });
    }
}

fn draw_block(surface: &mut impl DrawSurface, row: usize, col: usize, fill: Rgb) {
    let x = col as u32 * BLOCK_SIZE;
    let y = row as u32 * BLOCK_SIZE;
    surface.fill_rect(x, y, BLOCK_SIZE, BLOCK_SIZE, fill);
    surface.stroke_rect(x, y, BLOCK_SIZE, BLOCK_SIZE, STROKE);
}

/// Redraw the whole canvas from a snapshot.
///
/// Clears, draws every locked cell, then the active piece on top. Active
/// cells outside the board (above row 0) are not drawn.
pub fn draw_frame(snap: &GameSnapshot, surface: &mut impl DrawSurface) {
    surface.clear();

    for row in 0..ROWS {
        for col in 0..COLS {
            if snap.is_locked(row, col) {
                draw_block(surface, row, col, BOARD_FILL);
            }
        }
    }

    for (row, col) in snap.active.cells() {
        if row < 0 || col < 0 || row as usize >= ROWS || col as usize >= COLS {
            continue;
        }
        draw_block(surface, row as usize, col as usize, ACTIVE_FILL);
    }
}

/// [`DrawSurface`] over a region of a terminal framebuffer.
///
/// One block maps to `cell_w` x `cell_h` terminal cells. Fill sets the
/// background colour; stroke draws `[` `]` at the block's left and right
/// edge in the stroke colour.
pub struct TermSurface<'a> {
    fb: &'a mut FrameBuffer,
    origin_x: u16,
    origin_y: u16,
    cell_w: u16,
    cell_h: u16,
    background: CellStyle,
}

impl<'a> TermSurface<'a> {
    pub fn new(
        fb: &'a mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        cell_w: u16,
        cell_h: u16,
    ) -> Self {
        Self {
            fb,
            origin_x,
            origin_y,
            cell_w,
            cell_h,
            background: CellStyle {
                dim: true,
                ..CellStyle::new(Rgb::new(90, 90, 100), Rgb::new(30, 30, 40))
            },
        }
    }

    /// Terminal size of the whole canvas (columns, rows)
    pub fn term_size(&self) -> (u16, u16) {
        (COLS as u16 * self.cell_w, ROWS as u16 * self.cell_h)
    }

    /// Blocks covered by a pixel span, as a block index range
    fn blocks(start: u32, len: u32) -> std::ops::Range<u16> {
        let first = start / BLOCK_SIZE;
        let end = (start + len).div_ceil(BLOCK_SIZE);
        first as u16..end as u16
    }

    fn for_each_block(&mut self, x: u32, y: u32, w: u32, h: u32, mut f: impl FnMut(&mut Self, u16, u16)) {
        for by in Self::blocks(y, h) {
            for bx in Self::blocks(x, w) {
                if (bx as usize) < COLS && (by as usize) < ROWS {
                    f(self, bx, by);
                }
            }
        }
    }

    fn block_origin(&self, bx: u16, by: u16) -> (u16, u16) {
        (
            self.origin_x + bx * self.cell_w,
            self.origin_y + by * self.cell_h,
        )
    }
}

impl DrawSurface for TermSurface<'_> {
    fn clear(&mut self) {
        let (w, h) = self.term_size();
        for dy in 0..h {
            for dx in 0..w {
                // Grid dot in the first column of each block.
                let ch = if dx % self.cell_w == 0 { '·' } else { ' ' };
                self.fb
                    .put_char(self.origin_x + dx, self.origin_y + dy, ch, self.background);
            }
        }
    }

    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgb) {
        self.for_each_block(x, y, w, h, |s, bx, by| {
            let (tx, ty) = s.block_origin(bx, by);
            let style = CellStyle::new(color, color);
            s.fb.fill_rect(tx, ty, s.cell_w, s.cell_h, ' ', style);
        });
    }

    fn stroke_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgb) {
        self.for_each_block(x, y, w, h, |s, bx, by| {
            let (tx, ty) = s.block_origin(bx, by);
            let right = tx + s.cell_w - 1;
            for dy in 0..s.cell_h {
                for (cx, ch) in [(tx, '['), (right, ']')] {
                    if let Some(cell) = s.fb.get_mut(cx, ty + dy) {
                        cell.ch = ch;
                        cell.style.fg = color;
                    }
                }
            }
        });
    }
}
