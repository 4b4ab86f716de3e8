use bitflags::bitflags;

use crate::renderer::charset::BorderChars;

/// Horizontal justification of a cell's text within its column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellPadding {
    /// Text hugs the left edge
    Left,
    /// Text is centered, odd leftover column on the right
    Center,
    /// Text hugs the right edge
    #[default]
    Right,
}

/// Vertical placement of a cell's text within a multi-line row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellAlignment {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl CellAlignment {
    /// Index of the content line carrying the text in a row of `height` lines
    pub fn line_index(self, height: usize) -> usize {
        match self {
            CellAlignment::Top => 0,
            CellAlignment::Middle => height.saturating_sub(1) / 2,
            CellAlignment::Bottom => height.saturating_sub(1),
        }
    }
}

bitflags! {
    /// Sides of a cell that carry a border segment.
    ///
    /// Combine with bitwise OR: `CellBorder::TOP | CellBorder::LEFT`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CellBorder: u8 {
        const NONE = 0;
        const TOP = 1 << 0;
        const RIGHT = 1 << 1;
        const BOTTOM = 1 << 2;
        const LEFT = 1 << 3;
        const ALL = Self::TOP.bits() | Self::RIGHT.bits() | Self::BOTTOM.bits() | Self::LEFT.bits();
    }
}

/// How an outline combines with borders already present on a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutlineMode {
    /// Merge the outline into the existing flags
    Overlap,
    /// Replace the existing flags with the outline
    #[default]
    Override,
}

/// Presentation attributes of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellConfig {
    pub padding: CellPadding,
    pub alignment: CellAlignment,
    pub border: CellBorder,
}

impl CellConfig {
    pub const DEFAULT: CellConfig = CellConfig {
        padding: CellPadding::Right,
        alignment: CellAlignment::Top,
        border: CellBorder::NONE,
    };

    /// Replace the border flags
    pub fn replace_border(&mut self, border: CellBorder) {
        self.border = border;
    }

    /// OR `border` into the existing flags; never clears a side
    pub fn merge_border(&mut self, border: CellBorder) {
        self.border |= border;
    }

    /// Apply `border` according to `mode`
    pub fn apply_border(&mut self, border: CellBorder, mode: OutlineMode) {
        match mode {
            OutlineMode::Overlap => self.merge_border(border),
            OutlineMode::Override => self.replace_border(border),
        }
    }
}

/// Content and presentation of one grid position
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cell {
    pub value: String,
    pub config: CellConfig,
}

impl Cell {
    /// Create a cell holding `value` with default presentation
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            config: CellConfig::DEFAULT,
        }
    }

    pub fn set_value(&mut self, value: impl ToString) -> &mut Self {
        self.value = value.to_string();
        self
    }

    pub fn set_padding(&mut self, padding: CellPadding) -> &mut Self {
        self.config.padding = padding;
        self
    }

    pub fn set_alignment(&mut self, alignment: CellAlignment) -> &mut Self {
        self.config.alignment = alignment;
        self
    }

    pub fn set_border(&mut self, border: CellBorder) -> &mut Self {
        self.config.border = border;
        self
    }

    /// Update several attributes at once; `None` leaves an attribute unchanged
    pub fn configure(
        &mut self,
        value: Option<&str>,
        padding: Option<CellPadding>,
        alignment: Option<CellAlignment>,
        border: Option<CellBorder>,
    ) -> &mut Self {
        if let Some(value) = value {
            self.value = value.to_string();
        }
        if let Some(padding) = padding {
            self.config.padding = padding;
        }
        if let Some(alignment) = alignment {
            self.config.alignment = alignment;
        }
        if let Some(border) = border {
            self.config.border = border;
        }
        self
    }
}

/// Sizing of one table row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowConfig {
    /// Number of text lines the row occupies
    pub height: usize,
}

impl RowConfig {
    pub const DEFAULT: RowConfig = RowConfig { height: 1 };
}

impl Default for RowConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Sizing of one table column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColConfig {
    /// Character width of the column's content area
    pub width: usize,
}

impl ColConfig {
    pub const DEFAULT: ColConfig = ColConfig { width: 16 };
}

impl Default for ColConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Glyph theme selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    /// `+`, `-` and `|`
    Ascii,
    /// Single-line box drawing
    #[default]
    Single,
    /// Double-line box drawing
    Double,
    Custom(BorderChars),
}

impl BorderStyle {
    /// Resolve the style to its glyph set
    pub fn chars(&self) -> BorderChars {
        match self {
            BorderStyle::Ascii => BorderChars::ASCII,
            BorderStyle::Single => BorderChars::BOX,
            BorderStyle::Double => BorderChars::DOUBLE_BOX,
            BorderStyle::Custom(chars) => *chars,
        }
    }
}

/// Options for rendering a table
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Use ASCII characters instead of Unicode, regardless of `style`
    pub ascii: bool,
    /// Border glyph theme
    pub style: BorderStyle,
}

impl RenderOptions {
    /// Glyph set these options select
    pub fn border_chars(&self) -> BorderChars {
        if self.ascii {
            BorderChars::ASCII
        } else {
            self.style.chars()
        }
    }
}
