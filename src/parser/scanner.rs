/// What `Scanner::read_until` found before stopping
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scanned<'a> {
    /// The text preceding the marker, the marker itself was consumed
    Found(&'a str),
    /// The marker doesn't occur anymore: everything left in the input
    Eof(&'a str),
}

/// Walks a template source marker by marker, keeping track of the current line
#[derive(Debug)]
pub struct Scanner<'a> {
    input: &'a str,
    /// byte position in the input
    position: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Scanner<'a> {
        Scanner { input, position: 0, line: 1 }
    }

    /// Returns the text up to the next `marker` and moves past it
    pub fn read_until(&mut self, marker: &str) -> Scanned<'a> {
        let rest = &self.input[self.position..];
        match rest.find(marker) {
            Some(idx) => {
                self.advance(idx + marker.len());
                Scanned::Found(&rest[..idx])
            }
            None => {
                self.advance(rest.len());
                Scanned::Eof(rest)
            }
        }
    }

    /// Consumes a single `\n` or `\r\n` if the input continues with one
    pub fn skip_newline(&mut self) -> bool {
        let rest = &self.input[self.position..];
        if rest.starts_with("\r\n") {
            self.advance(2);
            true
        } else if rest.starts_with('\n') {
            self.advance(1);
            true
        } else {
            false
        }
    }

    pub fn peek(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    pub fn line(&self) -> usize {
        self.line
    }

    fn advance(&mut self, len: usize) {
        let consumed = &self.input[self.position..self.position + len];
        self.line += consumed.bytes().filter(|b| *b == b'\n').count();
        self.position += len;
    }
}
