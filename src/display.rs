/// Rendering layer: all terminal I/O lives here.
///
/// Receives a `Scene` built by the library and maps world units onto
/// terminal cells.  No game logic is performed here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use extreme_platformer::render::{Scene, Shape};

const C_HINT: Color = Color::DarkGrey;
const C_PAUSED: Color = Color::Yellow;

/// Terminal viewport: cell grid plus the world-space view it shows.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    pub view_width: f32,
    pub view_height: f32,
}

impl Viewport {
    /// Rows available to the scene (the last row holds the controls hint).
    fn scene_rows(&self) -> u16 {
        self.rows.saturating_sub(1)
    }

    fn sx(&self) -> f32 {
        self.cols as f32 / self.view_width
    }

    fn sy(&self) -> f32 {
        self.scene_rows() as f32 / self.view_height
    }

    /// Cell span covered by `[start, start + len)` along one axis.
    fn span(start: f32, len: f32, scale: f32, limit: u16) -> Option<(u16, u16)> {
        let a = (start * scale).floor();
        let b = ((start + len) * scale).ceil().max(a + 1.0);
        if b <= 0.0 || a >= limit as f32 {
            return None;
        }
        Some((a.max(0.0) as u16, b.min(limit as f32) as u16))
    }
}

fn rgb(color: u32) -> Color {
    Color::Rgb {
        r: (color >> 16) as u8,
        g: (color >> 8) as u8,
        b: color as u8,
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    scene: &Scene,
    view: &Viewport,
    paused: bool,
) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(rgb(scene.background)))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for shape in &scene.world {
        draw_shape(out, shape, scene.camera_x, view)?;
    }
    for shape in &scene.overlay {
        draw_shape(out, shape, 0.0, view)?;
    }

    if paused {
        draw_paused(out, view)?;
    }
    draw_controls_hint(out, view)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Shapes ────────────────────────────────────────────────────────────────────

fn draw_shape<W: Write>(
    out: &mut W,
    shape: &Shape,
    offset_x: f32,
    view: &Viewport,
) -> std::io::Result<()> {
    match shape {
        Shape::Rect { x, y, w, h, color } => {
            let Some((c0, c1)) = Viewport::span(x - offset_x, *w, view.sx(), view.cols) else {
                return Ok(());
            };
            let Some((r0, r1)) = Viewport::span(*y, *h, view.sy(), view.scene_rows()) else {
                return Ok(());
            };
            let row: String = "█".repeat((c1 - c0) as usize);
            out.queue(style::SetForegroundColor(rgb(*color)))?;
            for r in r0..r1 {
                out.queue(cursor::MoveTo(c0, r))?;
                out.queue(Print(&row))?;
            }
        }
        Shape::Circle { x, y, color, .. } => {
            let col = ((x - offset_x) * view.sx()).floor();
            let row = (y * view.sy()).floor();
            if col < 0.0 || row < 0.0 || col >= view.cols as f32 || row >= view.scene_rows() as f32 {
                return Ok(());
            }
            out.queue(cursor::MoveTo(col as u16, row as u16))?;
            out.queue(style::SetForegroundColor(rgb(*color)))?;
            out.queue(Print("●"))?;
        }
        Shape::Text { x, y, text, color } => {
            let col = ((x - offset_x) * view.sx()).max(0.0) as u16;
            let row = (y * view.sy()) as u16;
            if row >= view.scene_rows() || col >= view.cols {
                return Ok(());
            }
            let room = (view.cols - col) as usize;
            let clipped: String = text.chars().take(room).collect();
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(style::SetForegroundColor(rgb(*color)))?;
            out.queue(Print(clipped))?;
        }
    }
    Ok(())
}

// ── Pause overlay ─────────────────────────────────────────────────────────────

fn draw_paused<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let msg = "║  PAUSED · P to resume  ║";
    let col = (view.cols / 2).saturating_sub(msg.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, view.rows / 2))?;
    out.queue(style::SetForegroundColor(C_PAUSED))?;
    out.queue(Print(msg))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(
        "← → / A D : Move   SPACE : Jump   P : Pause   N : Next   M : Sound   Q : Quit",
    ))?;
    Ok(())
}
