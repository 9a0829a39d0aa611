//! Glyph grid that the board view draws into.
//!
//! Coordinates are terminal columns (`x`) and rows (`y`). Every write is
//! clipped to the buffer, so callers can draw partly off-screen when the
//! terminal is too small for the board.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const LIGHT_GRAY: Rgb = Rgb::new(220, 220, 220);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Colors and attributes of one glyph. Built with const chained setters:
/// `Style::fg(color).on(bg).bold()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Style {
    /// Light gray on black, no attributes
    pub const PLAIN: Style = Style::fg(Rgb::LIGHT_GRAY);

    pub const fn fg(fg: Rgb) -> Self {
        Self {
            fg,
            bg: Rgb::BLACK,
            bold: false,
            dim: false,
        }
    }

    pub const fn on(self, bg: Rgb) -> Self {
        Self { bg, ..self }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn dim(self) -> Self {
        Self { dim: true, ..self }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::PLAIN
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Glyph {
    pub const BLANK: Glyph = Glyph {
        ch: ' ',
        style: Style::PLAIN,
    };
}

impl Default for Glyph {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Row-major glyph grid, `width x height`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::BLANK; usize::from(width) * usize::from(height)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Change the size in place. Glyphs are left stale; the view clears the
    /// whole buffer before every frame.
    pub fn resize(&mut self, width: u16, height: u16) {
        (self.width, self.height) = (width, height);
        self.glyphs
            .resize(usize::from(width) * usize::from(height), Glyph::BLANK);
    }

    fn offset(&self, x: u16, y: u16) -> usize {
        usize::from(y) * usize::from(self.width) + usize::from(x)
    }

    fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.in_bounds(x, y).then(|| self.glyphs[self.offset(x, y)])
    }

    pub fn set(&mut self, x: u16, y: u16, glyph: Glyph) {
        if self.in_bounds(x, y) {
            let i = self.offset(x, y);
            self.glyphs[i] = glyph;
        }
    }

    pub fn clear(&mut self, glyph: Glyph) {
        self.glyphs.fill(glyph);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: Style) {
        self.set(x, y, Glyph { ch, style });
    }

    /// Write `s` starting at `x`; returns the column just past the text.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: Style) -> u16 {
        s.chars().fold(x, |cx, ch| {
            self.put_char(cx, y, ch, style);
            cx.saturating_add(1)
        })
    }

    /// Decimal `value` starting at `x`; returns the column just past it.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: Style) -> u16 {
        let width = value.checked_ilog10().unwrap_or(0) as u16 + 1;
        let mut rest = value;
        for i in (0..width).rev() {
            let digit = char::from(b'0' + (rest % 10) as u8);
            self.put_char(x.saturating_add(i), y, digit, style);
            rest /= 10;
        }
        x.saturating_add(width)
    }

    /// Fill the clipped rectangle at `(x, y)` of size `w x h`.
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: Style) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        if x >= x_end {
            return;
        }
        let glyph = Glyph { ch, style };
        for row in y..y_end {
            let start = self.offset(x, row);
            let len = usize::from(x_end - x);
            self.glyphs[start..start + len].fill(glyph);
        }
    }

    /// Characters of row `y`, empty when `y` is off the buffer
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = self.offset(0, y);
        self.glyphs[start..start + usize::from(self.width)]
            .iter()
            .map(|g| g.ch)
            .collect()
    }
}
