/// Approximate width of one terminal cell in CSS pixels.
pub const PX_PER_COLUMN: u32 = 8;

const FOLD_MAX_PX: u32 = 384;
const MOBILE_MAX_PX: u32 = 768;

/// Which view to render for the available width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Folded phone screen (about 4 inches): compact summary only.
    Fold,
    /// Summary and transaction register.
    Mobile,
    /// Summary, register and the income/expense split.
    Desktop,
}

impl Layout {
    pub fn for_width(px: u32) -> Self {
        if px <= FOLD_MAX_PX {
            Layout::Fold
        } else if px <= MOBILE_MAX_PX {
            Layout::Mobile
        } else {
            Layout::Desktop
        }
    }

    pub fn for_columns(columns: u16) -> Self {
        Self::for_width(u32::from(columns) * PX_PER_COLUMN)
    }

    /// Layout for the current terminal, falling back to 80 columns when the
    /// size can't be read (output piped to a file, for instance).
    pub fn for_terminal() -> Self {
        let (width, _) = crossterm::terminal::size().unwrap_or((80, 24));
        Self::for_columns(width)
    }

    pub fn shows_register(self) -> bool {
        self != Layout::Fold
    }

    pub fn shows_breakdown(self) -> bool {
        self == Layout::Desktop
    }
}
