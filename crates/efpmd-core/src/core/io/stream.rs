use std::borrow::Cow;
use std::io::{self, BufRead};

/// Returns `true` for the characters the input format treats as blanks.
#[inline]
pub(crate) fn is_blank(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

/// A read position inside one line of input.
///
/// A cursor is a cheap copy of a line slice plus an offset. Readers work on a
/// scratch copy and only write it back once a value was extracted, so a failed
/// read never moves the caller's cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    line: &'a str,
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { line, position: 0 }
    }

    pub(crate) fn at(line: &'a str, position: usize) -> Self {
        Self {
            line,
            position: position.min(line.len()),
        }
    }

    /// The unread part of the line.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.line[self.position..]
    }

    /// Byte offset of the cursor from the start of the line.
    #[inline]
    pub fn offset(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rest().is_empty()
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn skip_space(&mut self) {
        let rest = self.rest();
        let trimmed = rest.trim_start_matches(is_blank);
        self.position += rest.len() - trimmed.len();
    }

    /// Moves the cursor forward by `len` bytes, clamped to the end of the line.
    ///
    /// Callers only pass lengths of text they have just matched, so the new
    /// position always lands on a character boundary.
    pub fn advance(&mut self, len: usize) {
        self.position = (self.position + len).min(self.line.len());
    }

    /// Consumes `prefix` if the unread text starts with it.
    pub fn eat(&mut self, prefix: &str) -> bool {
        if self.rest().starts_with(prefix) {
            self.advance(prefix.len());
            true
        } else {
            false
        }
    }
}

/// Line-at-a-time reader that folds every line to lowercase.
///
/// The stream holds at most one line. [`LineStream::advance`] replaces it with
/// the next one from the source; once the source is drained the stream is
/// exhausted and [`LineStream::cursor`] yields `None`.
#[derive(Debug)]
pub struct LineStream<R> {
    reader: R,
    raw: Vec<u8>,
    buffer: String,
    has_line: bool,
    valid_utf8: bool,
    position: usize,
    line_number: usize,
}

impl<R: BufRead> LineStream<R> {
    /// Wraps a reader. No line is loaded until the first call to `advance`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            raw: Vec::with_capacity(128),
            buffer: String::with_capacity(128),
            has_line: false,
            valid_utf8: true,
            position: 0,
            line_number: 0,
        }
    }

    /// Loads the next line, returning `false` once the source is exhausted.
    ///
    /// The trailing newline is stripped and ASCII letters are lowercased. A
    /// final line without a newline is still returned; an empty tail is not.
    /// Bytes are taken as they come: a line that is not valid UTF-8 is decoded
    /// lossily and flagged through [`LineStream::is_valid_utf8`].
    pub fn advance(&mut self) -> io::Result<bool> {
        self.raw.clear();
        self.buffer.clear();
        self.position = 0;

        let read = self.reader.read_until(b'\n', &mut self.raw)?;
        if read == 0 {
            self.has_line = false;
            self.valid_utf8 = true;
            return Ok(false);
        }

        if self.raw.last() == Some(&b'\n') {
            self.raw.pop();
        }
        self.raw.make_ascii_lowercase();

        let text = String::from_utf8_lossy(&self.raw);
        self.valid_utf8 = matches!(text, Cow::Borrowed(_));
        self.buffer.push_str(&text);

        self.line_number += 1;
        self.has_line = true;
        Ok(true)
    }

    /// Whether the current line decoded without replacement characters.
    pub fn is_valid_utf8(&self) -> bool {
        self.valid_utf8
    }

    pub fn is_exhausted(&self) -> bool {
        !self.has_line
    }

    /// 1-based number of the current line (the last line read once exhausted).
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// A cursor at the current read position, or `None` when exhausted.
    pub fn cursor(&self) -> Option<Cursor<'_>> {
        self.has_line.then(|| Cursor::at(&self.buffer, self.position))
    }

    /// Records how far into the current line the caller has read.
    pub fn seek(&mut self, offset: usize) {
        self.position = offset.min(self.buffer.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor as IoCursor;

    fn stream(text: &str) -> LineStream<IoCursor<Vec<u8>>> {
        LineStream::new(IoCursor::new(text.as_bytes().to_vec()))
    }

    #[test]
    fn new_stream_has_no_line_until_advanced() {
        let s = stream("run_type sp\n");
        assert!(s.is_exhausted());
        assert!(s.cursor().is_none());
        assert_eq!(s.line_number(), 0);
    }

    #[test]
    fn advance_lowercases_and_strips_newline() {
        let mut s = stream("RUN_TYPE Opt\nsecond\n");
        assert!(s.advance().unwrap());
        assert_eq!(s.cursor().unwrap().rest(), "run_type opt");
        assert_eq!(s.line_number(), 1);
        assert!(s.advance().unwrap());
        assert_eq!(s.cursor().unwrap().rest(), "second");
        assert_eq!(s.line_number(), 2);
        assert!(!s.advance().unwrap());
        assert!(s.is_exhausted());
        assert_eq!(s.line_number(), 2);
    }

    #[test]
    fn last_line_without_newline_is_returned() {
        let mut s = stream("a\nb");
        assert!(s.advance().unwrap());
        assert!(s.advance().unwrap());
        assert_eq!(s.cursor().unwrap().rest(), "b");
        assert!(!s.advance().unwrap());
    }

    #[test]
    fn empty_lines_are_lines() {
        let mut s = stream("\n\nx\n");
        assert!(s.advance().unwrap());
        assert_eq!(s.cursor().unwrap().rest(), "");
        assert!(s.advance().unwrap());
        assert!(s.advance().unwrap());
        assert_eq!(s.cursor().unwrap().rest(), "x");
    }

    #[test]
    fn very_long_lines_are_not_truncated() {
        let long = "x".repeat(100_000);
        let mut s = stream(&format!("{long}\n"));
        assert!(s.advance().unwrap());
        assert_eq!(s.cursor().unwrap().rest().len(), 100_000);
    }

    #[test]
    fn quoted_text_is_lowercased_too() {
        let mut s = stream("fraglib_path \"/Data/EFP\"\n");
        s.advance().unwrap();
        assert_eq!(s.cursor().unwrap().rest(), "fraglib_path \"/data/efp\"");
    }

    #[test]
    fn seek_moves_the_cursor_within_the_line() {
        let mut s = stream("fragment h2o\n");
        s.advance().unwrap();
        let mut cursor = s.cursor().unwrap();
        assert!(cursor.eat("fragment"));
        let offset = cursor.offset();
        s.seek(offset);
        assert_eq!(s.cursor().unwrap().rest(), " h2o");
    }

    #[test]
    fn advance_resets_the_seek_position() {
        let mut s = stream("abc\ndef\n");
        s.advance().unwrap();
        s.seek(2);
        s.advance().unwrap();
        assert_eq!(s.cursor().unwrap().rest(), "def");
    }

    #[test]
    fn non_utf8_bytes_are_decoded_lossily_and_flagged() {
        let mut s = LineStream::new(IoCursor::new(b"# Caf\xe9\nnext\n".to_vec()));
        assert!(s.advance().unwrap());
        assert!(!s.is_valid_utf8());
        assert_eq!(s.cursor().unwrap().rest(), "# caf\u{fffd}");
        assert!(s.advance().unwrap());
        assert!(s.is_valid_utf8());
        assert_eq!(s.cursor().unwrap().rest(), "next");
        assert_eq!(s.line_number(), 2);
    }

    #[test]
    fn multibyte_utf8_passes_through_unchanged() {
        let mut s = stream("# Référence\n");
        s.advance().unwrap();
        assert!(s.is_valid_utf8());
        assert_eq!(s.cursor().unwrap().rest(), "# référence");
    }

    #[test]
    fn cursor_skip_space_and_eat() {
        let mut cursor = Cursor::new(" \t\x0bmax_steps 10");
        cursor.skip_space();
        assert_eq!(cursor.peek(), Some('m'));
        assert!(!cursor.eat("print_step"));
        assert!(cursor.eat("max_steps"));
        cursor.skip_space();
        assert_eq!(cursor.rest(), "10");
        cursor.advance(10);
        assert!(cursor.is_empty());
    }
}
