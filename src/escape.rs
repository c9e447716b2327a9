use std::borrow::Cow;

/// Escape one field so that splitting reads it back verbatim.
///
/// Fields are quoted only when they need to be: when they contain a quote,
/// a comma, or a line terminator. Quotes inside a quoted field are doubled.
/// Everything else is borrowed unchanged.
///
/// # Example
///
/// ```
/// use csvsplit::escape;
///
/// assert_eq!(escape("plain"), "plain");
/// assert_eq!(escape("a,b"), "\"a,b\"");
/// assert_eq!(escape("5'9\""), "\"5'9\"\"\"");
/// ```
pub fn escape(field: &str) -> Cow<'_, str> {
    if !needs_quotes(field) {
        return Cow::Borrowed(field);
    }
    let mut out = String::with_capacity(field.len() + 2);
    out.push('"');
    for c in field.chars() {
        if c == '"' {
            out.push('"');
        }
        out.push(c);
    }
    out.push('"');
    Cow::Owned(out)
}

/// Join fields into one line of CSV text that splits back into them.
///
/// Each field is escaped with [`escape`] and the results are joined with
/// commas. No line terminator is appended. A record holding exactly one
/// empty field is written as `""`, since an empty line splits into no
/// fields at all.
///
/// Any record whose fields are free of `\r` and `\n` survives the round
/// trip: splitting the returned line yields the fields given. A field with
/// a terminator in it does not, because splitting stops at the first
/// terminator it sees.
///
/// # Example
///
/// ```
/// use csvsplit::{join, split};
///
/// let line = join(&["a", "b,c", "d\"e"]);
/// assert_eq!(line, "a,\"b,c\",\"d\"\"e\"");
/// assert_eq!(split(&line), vec!["a", "b,c", "d\"e"]);
/// ```
pub fn join<I, S>(fields: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = String::new();
    let mut count = 0;
    for field in fields {
        if count > 0 {
            line.push(',');
        }
        line.push_str(&escape(field.as_ref()));
        count += 1;
    }
    // A lone empty field cannot be written bare: the empty line reads back
    // as zero fields, not one.
    if count == 1 && line.is_empty() {
        line.push_str("\"\"");
    }
    line
}

fn needs_quotes(field: &str) -> bool {
    field
        .bytes()
        .any(|b| b == b'"' || b == b',' || b == b'\r' || b == b'\n')
}
