use std::cmp;

use memchr::{memchr, memchr2};

use crate::error::{Error, ErrorKind, Result};
use crate::record::Record;

/// The state of the field machine.
///
/// A line is split by stepping a cursor over its bytes and dispatching on
/// the current variant. All state lives in the locals of one call, so
/// splitting is freely reentrant.
#[derive(Clone, Copy, Debug, PartialEq)]
enum State {
    /// At the position where a new field starts. This is also the state at
    /// the very beginning of a line.
    StartField,
    /// Inside a field that was opened by a quote. `quotes` counts every
    /// quote seen so far in this field, including the opening one.
    InQuotedField { quotes: usize },
    /// Inside an unquoted field.
    InField,
    /// Just consumed a comma that sat at the start of a field.
    EmptyField,
}

/// Split one line of CSV text into its fields.
///
/// The line is read up to its first `\r` or `\n`; anything after that is
/// ignored, so input can be fed straight from a buffered reader without
/// trimming the terminator first.
///
/// Splitting never fails. A line that breaks the quoting rules still comes
/// out as *some* sequence of fields; the crate documentation describes how
/// such lines are read. Use [`try_split`] to reject them instead.
///
/// # Example
///
/// ```
/// use csvsplit::split;
///
/// let record = split("a,\"b,c\",\"d\"\"e\"\n");
/// assert_eq!(record, vec!["a", "b,c", "d\"e"]);
/// ```
pub fn split(line: &str) -> Record {
    let mut record = Record::new();
    split_into(line, &mut record);
    record
}

/// Split one line of CSV text into the given record.
///
/// The record is cleared first; on return it holds exactly the fields of
/// `line`. This is otherwise identical to [`split`], but reusing one record
/// across many lines avoids allocating for each of them.
///
/// # Example
///
/// ```
/// use csvsplit::{split_into, Record};
///
/// let mut record = Record::new();
/// split_into("a,b", &mut record);
/// assert_eq!(record, vec!["a", "b"]);
///
/// split_into("c", &mut record);
/// assert_eq!(record, vec!["c"]);
/// ```
pub fn split_into(line: &str, record: &mut Record) {
    record.clear();
    // An empty line has no fields at all. Anything longer gets at least one,
    // even when all that remains after cutting at the terminator is empty:
    // splitting "\n" yields one empty field.
    if line.is_empty() {
        return;
    }
    let line = &line[..line_len(line)];
    let bytes = line.as_bytes();

    let mut state = State::StartField;
    let mut start = 0;
    let mut pos = 0;
    loop {
        match state {
            State::StartField => {
                if pos >= bytes.len() {
                    record.push_field("");
                    return;
                }
                start = pos;
                state = match bytes[pos] {
                    b'"' => State::InQuotedField { quotes: 1 },
                    b',' => State::EmptyField,
                    _ => State::InField,
                };
            }
            State::InQuotedField { quotes } => {
                if pos >= bytes.len() {
                    push_quoted_field(record, line, start, pos);
                    return;
                }
                match bytes[pos] {
                    b'"' => {
                        state = State::InQuotedField { quotes: quotes + 1 };
                    }
                    // An even count means every quote seen is paired off, so
                    // this comma separates fields. At an odd count the field
                    // is still open and the comma is data.
                    b',' if quotes % 2 == 0 => {
                        push_quoted_field(record, line, start, pos);
                        state = State::StartField;
                    }
                    _ => {}
                }
            }
            State::InField => {
                if pos >= bytes.len() {
                    record.push_field(&line[start..pos]);
                    return;
                }
                if bytes[pos] == b',' {
                    record.push_field(&line[start..pos]);
                    state = State::StartField;
                }
            }
            State::EmptyField => {
                record.push_field("");
                // The step back cancels the advance at the bottom of the
                // loop. The comma itself was consumed on the way in, so the
                // cursor resumes right after it.
                pos -= 1;
                state = State::StartField;
            }
        }
        pos += 1;
    }
}

/// Split one line of CSV text, rejecting lines that break the quoting rules.
///
/// The line is checked against a strict reading of the rules before it is
/// split: a quote may only appear inside a quoted field (doubled, to stand
/// for itself), a closing quote must be followed by a comma or the line end,
/// and every quoted field must close before the line ends. On success the
/// record is exactly what [`split`] returns. Like [`split`], the line is
/// read only up to its first `\r` or `\n`.
///
/// # Example
///
/// ```
/// use csvsplit::{try_split, ErrorKind};
///
/// assert_eq!(try_split("a,\"b,c\"").unwrap(), vec!["a", "b,c"]);
///
/// let err = try_split("a,\"b").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::UnterminatedQuote);
/// assert_eq!(err.field(), 1);
/// assert_eq!(err.offset(), 2);
/// ```
pub fn try_split(line: &str) -> Result<Record> {
    check(line)?;
    Ok(split(line))
}

/// Scan one line for quoting violations without extracting anything.
fn check(line: &str) -> Result<()> {
    let bytes = &line.as_bytes()[..line_len(line)];
    let mut field = 0;
    let mut pos = 0;
    loop {
        if pos >= bytes.len() {
            return Ok(());
        }
        if bytes[pos] != b'"' {
            // Unquoted field: runs to the next comma and may not contain a
            // quote anywhere.
            match memchr2(b',', b'"', &bytes[pos..]) {
                None => return Ok(()),
                Some(i) if bytes[pos + i] == b',' => {
                    pos += i + 1;
                    field += 1;
                }
                Some(i) => {
                    return Err(Error::new(
                        ErrorKind::UnexpectedQuote,
                        field,
                        pos + i,
                    ));
                }
            }
        } else {
            let open = pos;
            pos += 1;
            loop {
                let quote = match memchr(b'"', &bytes[pos..]) {
                    None => {
                        return Err(Error::new(
                            ErrorKind::UnterminatedQuote,
                            field,
                            open,
                        ));
                    }
                    Some(i) => pos + i,
                };
                // A quote inside a quoted field is either half of an escape
                // pair or it closes the field, in which case only a comma or
                // the line end may follow.
                match bytes.get(quote + 1) {
                    Some(&b'"') => pos = quote + 2,
                    Some(&b',') => {
                        pos = quote + 2;
                        field += 1;
                        break;
                    }
                    None => return Ok(()),
                    Some(_) => {
                        return Err(Error::new(
                            ErrorKind::UnexpectedQuote,
                            field,
                            quote,
                        ));
                    }
                }
            }
        }
    }
}

/// Returns the length of `line` up to (not including) its first `\r` or
/// `\n`, or the full length if it has neither.
fn line_len(line: &str) -> usize {
    memchr2(b'\r', b'\n', line.as_bytes()).unwrap_or(line.len())
}

/// Push the quoted field opened at `start` whose scan stopped at `pos`.
///
/// The text pushed is everything between the opening quote and the
/// character just before `pos`, which is taken to be the closing quote no
/// matter what it is. The bound is clamped so that a field holding nothing
/// but its opening quote comes out empty, and it always steps back one full
/// character so a multi-byte character before `pos` cannot split.
fn push_quoted_field(record: &mut Record, line: &str, start: usize, pos: usize) {
    let lo = start + 1;
    let hi = cmp::max(lo, prev_char_index(line, pos));
    let field = &line[lo..hi];
    if field.contains("\"\"") {
        record.push_field(&field.replace("\"\"", "\""));
    } else {
        record.push_field(field);
    }
}

/// Returns the index of the character immediately before `pos` in `line`,
/// or `0` if there is none. `pos` must lie on a character boundary.
fn prev_char_index(line: &str, pos: usize) -> usize {
    line[..pos].char_indices().next_back().map_or(0, |(i, _)| i)
}
