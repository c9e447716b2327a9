/*!
This crate splits a single line of CSV text into its fields.

Fields are separated by commas. A field may be wrapped in double quotes so
that it can contain literal commas, and a quote inside a quoted field is
written as two consecutive quotes. Input stops at the first `\r` or `\n`,
so lines can be fed straight from a buffered reader without trimming the
terminator first.

# Example

```
use csvsplit::{join, split};

let record = split("hello,\"goodbye, world\",\"x \"\"y\"\" z\"");
assert_eq!(record, vec!["hello", "goodbye, world", "x \"y\" z"]);

let line = join(&record);
assert_eq!(line, "hello,\"goodbye, world\",\"x \"\"y\"\" z\"");
```

# Parsing behavior

Like most CSV parsers found in the wild, [`split`] never rejects its input.
Every line splits into *some* sequence of fields, chosen by a small set of
rules rather than by a grammar that can fail:

* An empty line has no fields. Every other line has at least one, so a
  line holding only a terminator splits into one empty field.
* A field starting with a quote ends at the first comma preceded by an
  even number of quotes. The text between the opening quote and the
  character before that comma (or before the line end) is the field, with
  doubled quotes collapsed.
* Any other field runs verbatim to the next comma.

On well-formed input these rules read exactly like RFC 4180 minus the
multi-line fields. On mangled input they still produce an answer:

```
use csvsplit::split;

// Every line splits into something, even with stray quotes:
assert_eq!(split("\"a\"b,c"), vec!["a\"", "c"]);
// A quoted field swallows commas until its quote count turns even:
assert_eq!(split("\"a\"\",b\""), vec!["a\",b"]);
```

Use [`try_split`] when malformed lines should be reported instead of
guessed at.

# Scope

One call reads one line. Quoted fields cannot contain line terminators:

```
use csvsplit::split;

// Only the first line is read:
assert_eq!(split("a,b\r\nc,d"), vec!["a", "b"]);
// An empty line has no fields, but a blank one has one:
assert!(split("").is_empty());
assert_eq!(split("\n"), vec![""]);
```

Reading whole documents, headers, other delimiters and typed records are
all jobs for a full CSV parser, not this crate.
*/

#![deny(missing_docs)]

pub use crate::error::{Error, ErrorKind, Result};
pub use crate::escape::{escape, join};
pub use crate::record::{Record, RecordIter};
pub use crate::split::{split, split_into, try_split};

mod error;
mod escape;
mod record;
#[cfg(feature = "serde")]
mod serde_impl;
mod split;
