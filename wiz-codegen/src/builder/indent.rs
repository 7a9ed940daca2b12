//! Indentation configuration for generated sources.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation (Solidity, Cairo, Rust).
    pub const FOUR: Self = Self::Spaces(4);

    /// Tab indentation.
    pub const TAB: Self = Self::Tab;

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(4) => "    ",
            Self::Spaces(8) => "        ",
            // Fallback to 4 whitespaces
            Self::Spaces(_) => "    ",
            Self::Tab => "\t",
        }
    }

    /// Column width of one indent level.
    pub fn width(&self) -> usize {
        self.as_str().chars().count()
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::FOUR
    }
}
