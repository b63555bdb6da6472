/// Escape character that introduces a directive (`\f`, `\l`, `\d`).
pub const ESCAPE: u8 = b'\\';

/// Quantifier that makes a name directive consume the rest of the name.
pub const FULL_QUANTIFIER: u8 = b'+';

/// What a directive substitutes into the username.
///
/// Each class is written in a scheme as the escape character followed by
/// its meta character: `\f` (first name), `\l` (last name), `\d` (digit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NameClass {
    /// One letter of the first name, or the remainder with `+`.
    First,
    /// One letter of the last name, or the remainder with `+`.
    Last,
    /// A random digit 0 to 9.
    Digit,
}

impl NameClass {
    /// Map a meta character byte to its class.
    #[inline]
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'f' => Some(NameClass::First),
            b'l' => Some(NameClass::Last),
            b'd' => Some(NameClass::Digit),
            _ => None,
        }
    }

    /// Whether `+` may follow this directive.
    pub fn is_quantifiable(self) -> bool {
        matches!(self, NameClass::First | NameClass::Last)
    }
}
