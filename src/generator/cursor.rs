/// Read cursor over the unconsumed part of a name.
///
/// Name directives take characters from the front; a quantified directive
/// drains whatever is left. `pos` always sits on a `char` boundary.
#[derive(Debug, Clone)]
pub struct NameCursor<'a> {
    name: &'a str,
    pos: usize,
}

impl<'a> NameCursor<'a> {
    pub fn new(name: &'a str) -> Self {
        NameCursor { name, pos: 0 }
    }

    /// The part of the name not yet consumed.
    pub fn remaining(&self) -> &'a str {
        self.name.get(self.pos..).unwrap_or("")
    }

    /// Consume one character, or None once drained.
    pub fn next_char(&mut self) -> Option<char> {
        let ch = self.remaining().chars().next()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Consume and return everything left.
    pub fn drain(&mut self) -> &'a str {
        let rest = self.remaining();
        self.pos = self.name.len();
        rest
    }
}
