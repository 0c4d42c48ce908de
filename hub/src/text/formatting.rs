use std::fmt;

/// Character that introduces a legacy formatting code.
pub const CODE_PREFIX: char = '§';

/// Legacy formatting codes: sixteen colors, five decorations and reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Formatting {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
    Obfuscated,
    Bold,
    Strikethrough,
    Underline,
    Italic,
    Reset,
}

impl Formatting {
    pub const ALL: [Formatting; 22] = [
        Formatting::Black,
        Formatting::DarkBlue,
        Formatting::DarkGreen,
        Formatting::DarkAqua,
        Formatting::DarkRed,
        Formatting::DarkPurple,
        Formatting::Gold,
        Formatting::Gray,
        Formatting::DarkGray,
        Formatting::Blue,
        Formatting::Green,
        Formatting::Aqua,
        Formatting::Red,
        Formatting::LightPurple,
        Formatting::Yellow,
        Formatting::White,
        Formatting::Obfuscated,
        Formatting::Bold,
        Formatting::Strikethrough,
        Formatting::Underline,
        Formatting::Italic,
        Formatting::Reset,
    ];

    /// The code character, always lowercase.
    pub const fn code(self) -> char {
        match self {
            Formatting::Black => '0',
            Formatting::DarkBlue => '1',
            Formatting::DarkGreen => '2',
            Formatting::DarkAqua => '3',
            Formatting::DarkRed => '4',
            Formatting::DarkPurple => '5',
            Formatting::Gold => '6',
            Formatting::Gray => '7',
            Formatting::DarkGray => '8',
            Formatting::Blue => '9',
            Formatting::Green => 'a',
            Formatting::Aqua => 'b',
            Formatting::Red => 'c',
            Formatting::LightPurple => 'd',
            Formatting::Yellow => 'e',
            Formatting::White => 'f',
            Formatting::Obfuscated => 'k',
            Formatting::Bold => 'l',
            Formatting::Strikethrough => 'm',
            Formatting::Underline => 'n',
            Formatting::Italic => 'o',
            Formatting::Reset => 'r',
        }
    }

    /// Looks up a code character. Matching ignores case.
    pub fn from_code(code: char) -> Option<Formatting> {
        let code = code.to_ascii_lowercase();
        Formatting::ALL.into_iter().find(|f| f.code() == code)
    }

    #[inline]
    pub fn is_code(c: char) -> bool {
        Formatting::from_code(c).is_some()
    }

    pub const fn is_color(self) -> bool {
        !self.is_decoration() && !matches!(self, Formatting::Reset)
    }

    pub const fn is_decoration(self) -> bool {
        matches!(
            self,
            Formatting::Obfuscated
                | Formatting::Bold
                | Formatting::Strikethrough
                | Formatting::Underline
                | Formatting::Italic
        )
    }
}

impl fmt::Display for Formatting {
    /// Writes the two-character code sequence, e.g. `§c`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CODE_PREFIX, self.code())
    }
}
