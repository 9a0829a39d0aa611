//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{row_letter, Pos, Token};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// Prompt and message lines drawn under the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudView<'a> {
    /// Question for the current prompt stage
    pub question: &'a str,
    /// Text typed so far
    pub typed: &'a str,
    /// First cell of a half-entered move
    pub selected: Option<Pos>,
    pub status: Option<(&'a str, StatusKind)>,
}

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const LABEL: Style = Style::fg(Rgb::new(160, 160, 170));
const BORDER: Style = Style::fg(Rgb::new(200, 200, 200));
const PANEL_LABEL: Style = Style::fg(Rgb::new(220, 220, 220)).bold();
const PANEL_VALUE: Style = Style::fg(Rgb::new(200, 200, 200));
const SELECTED_BG: Rgb = Rgb::new(90, 90, 120);

/// Width reserved on each side of the frame for row letters.
const LABEL_GUTTER: u16 = 2;

/// A lightweight terminal renderer for the board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 3 columns per cell leaves room for two-digit column labels.
        Self {
            cell_w: 3,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Frame size (border included) for a board of the given dimensions.
    pub fn frame_size(&self, rows: usize, cols: usize) -> (u16, u16) {
        let w = (cols as u16).saturating_mul(self.cell_w).saturating_add(2);
        let h = (rows as u16).saturating_mul(self.cell_h).saturating_add(2);
        (w, h)
    }

    /// Top-left corner of the board frame for this viewport.
    pub fn frame_origin(&self, rows: usize, cols: usize, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size(rows, cols);
        // Column labels above and below, prompt and status lines under those.
        let total_w = frame_w + 2 * LABEL_GUTTER;
        let total_h = frame_h + 4;

        let x = viewport.width.saturating_sub(total_w) / 2 + LABEL_GUTTER;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        } + 1;
        (x, y)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: &HudView<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let rows = snap.board.height();
        let cols = snap.board.width();
        let (frame_w, frame_h) = self.frame_size(rows, cols);
        let (start_x, start_y) = self.frame_origin(rows, cols, viewport);

        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            Style::default().on(BOARD_BG),
        );
        self.draw_border(fb, start_x, start_y, frame_w, frame_h);
        self.draw_labels(fb, rows, cols, start_x, start_y, frame_w, frame_h);

        for (r, row) in snap.board.rows().enumerate() {
            for (c, &token) in row.iter().enumerate() {
                let selected = hud.selected == Some(Pos::new(r, c));
                self.draw_token(fb, start_x, start_y, r as u16, c as u16, token, selected);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);
        self.draw_hud(fb, hud, start_x, start_y + frame_h + 1);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: &HudView<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(x + w - 1, y, '┐', BORDER);
        fb.put_char(x, y + h - 1, '└', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', BORDER);
            fb.put_char(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', BORDER);
            fb.put_char(x + w - 1, y + dy, '│', BORDER);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_labels(
        &self,
        fb: &mut FrameBuffer,
        rows: usize,
        cols: usize,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        // Row letters on both sides.
        for r in 0..rows as u16 {
            let y = start_y + 1 + r * self.cell_h + self.cell_h / 2;
            let letter = row_letter(r as usize);
            if let Some(left) = start_x.checked_sub(LABEL_GUTTER) {
                fb.put_char(left, y, letter, LABEL);
            }
            fb.put_char(start_x + frame_w + 1, y, letter, LABEL);
        }

        // Column numbers above and below.
        for c in 0..cols as u16 {
            let number = u32::from(c) + 1;
            let digits = if number >= 10 { 2 } else { 1 };
            let x = start_x + 1 + c * self.cell_w + self.cell_w.saturating_sub(digits) / 2;
            if let Some(top) = start_y.checked_sub(1) {
                fb.put_u32(x, top, number, LABEL);
            }
            fb.put_u32(x, start_y + frame_h, number, LABEL);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_token(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        token: Token,
        selected: bool,
    ) {
        let bg = if selected { SELECTED_BG } else { BOARD_BG };
        let px = start_x + 1 + col * self.cell_w;
        let py = start_y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', Style::default().on(bg));

        let style = Style::fg(token_color(token)).on(bg).bold();
        fb.put_char(px + self.cell_w / 2, py + self.cell_h / 2, '●', style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x
            .saturating_add(frame_w)
            .saturating_add(LABEL_GUTTER)
            .saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", PANEL_LABEL);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, PANEL_VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", PANEL_LABEL);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.moves, PANEL_VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LAST", PANEL_LABEL);
        y = y.saturating_add(1);
        match &snap.last_report {
            Some(report) => {
                let mut x = panel_x;
                for (i, n) in report.batches.iter().enumerate() {
                    if i > 0 {
                        x = fb.put_str(x, y, "+", PANEL_VALUE);
                    }
                    x = fb.put_u32(x, y, *n as u32, PANEL_VALUE);
                }
                y = y.saturating_add(1);
                let x = fb.put_str(panel_x, y, "+", PANEL_VALUE.bold());
                fb.put_u32(x, y, report.score_delta, PANEL_VALUE.bold());
            }
            None => {
                fb.put_str(panel_x, y, "-", PANEL_VALUE);
            }
        }
        y = y.saturating_add(2);

        if let Some(seed) = snap.seed {
            fb.put_str(panel_x, y, "SEED", PANEL_LABEL);
            y = y.saturating_add(1);
            fb.put_u32(panel_x, y, seed, PANEL_VALUE.dim());
        }
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, hud: &HudView<'_>, x: u16, y: u16) {
        let left = x.saturating_sub(LABEL_GUTTER);
        let cx = fb.put_str(left, y, hud.question, PANEL_LABEL);
        let cx = fb.put_str(cx, y, hud.typed, PANEL_VALUE);
        fb.put_char(cx, y, '_', PANEL_VALUE.dim());

        if let Some((text, kind)) = hud.status {
            let style = match kind {
                StatusKind::Info => Style::fg(Rgb::new(140, 220, 140)),
                StatusKind::Error => Style::fg(Rgb::new(240, 100, 100)).bold(),
            };
            fb.put_str(left, y.saturating_add(1), text, style);
        }
    }
}

fn token_color(token: Token) -> Rgb {
    match token {
        Token::Red => Rgb::new(230, 70, 70),
        Token::Magenta => Rgb::new(210, 90, 210),
        Token::Yellow => Rgb::new(240, 215, 70),
        Token::Green => Rgb::new(90, 210, 110),
        Token::Blue => Rgb::new(80, 130, 240),
    }
}
