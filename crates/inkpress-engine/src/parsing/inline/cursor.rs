/// A byte cursor over one line of inline text.
///
/// Delimiters are all ASCII, so every position the scanner stops at to
/// slice is a char boundary even though the cursor steps bytes.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Peeks `n` bytes ahead of the current position.
    pub fn peek_at(&self, n: usize) -> Option<u8> {
        self.s.as_bytes().get(self.i + n).copied()
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Byte index of the next `needle` at or after the cursor, without
    /// moving. Stops at a newline: inline constructs never span lines.
    pub fn find(&self, needle: u8) -> Option<usize> {
        let rest = self.s.as_bytes().get(self.i..)?;
        rest.iter()
            .take_while(|&&b| b != b'\n')
            .position(|&b| b == needle)
            .map(|p| self.i + p)
    }
}
