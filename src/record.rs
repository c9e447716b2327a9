use std::fmt;
use std::iter::FromIterator;
use std::ops;

/// A single CSV record: the ordered sequence of fields split from one line.
///
/// A record may have zero fields (the result of splitting an empty line),
/// and any of its fields may be the empty string. Field order is the
/// left-to-right order of appearance in the line, and repeated values are
/// kept as is.
///
/// All fields in a record are stored contiguously in one buffer, so a
/// record makes at most two allocations no matter how many fields it has.
/// Reusing one record across calls to [`split_into`](crate::split_into)
/// amortizes even those.
///
/// # Example
///
/// ```
/// use csvsplit::Record;
///
/// let record: Record = ["a", "b"].iter().collect();
/// assert_eq!(record.len(), 2);
/// assert_eq!(record.get(0), Some("a"));
/// assert_eq!(record.get(2), None);
/// ```
#[derive(Clone, Eq, PartialEq)]
pub struct Record {
    /// All fields in this record, stored contiguously.
    fields: String,
    /// The end offset of each field within `fields`.
    ///
    /// Offsets always fall on UTF-8 boundaries since whole fields are
    /// appended at a time.
    ends: Vec<usize>,
}

impl Record {
    /// Create a new empty record.
    pub fn new() -> Record {
        Record { fields: String::new(), ends: Vec::new() }
    }

    /// Create a new empty record with the given capacities.
    ///
    /// `data` is the capacity, in bytes, of the buffer holding all field
    /// data, and `fields` is the number of fields to reserve room for.
    pub fn with_capacity(data: usize, fields: usize) -> Record {
        Record {
            fields: String::with_capacity(data),
            ends: Vec::with_capacity(fields),
        }
    }

    /// Return the field at index `i`.
    ///
    /// If no field at index `i` exists, then this returns `None`.
    pub fn get(&self, i: usize) -> Option<&str> {
        let end = *self.ends.get(i)?;
        let start = i.checked_sub(1).map_or(0, |i| self.ends[i]);
        Some(&self.fields[start..end])
    }

    /// Returns true if and only if this record has no fields.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of fields in this record.
    pub fn len(&self) -> usize {
        self.ends.len()
    }

    /// Clear this record so that it has zero fields.
    ///
    /// This keeps the underlying allocations for reuse.
    pub fn clear(&mut self) {
        self.fields.clear();
        self.ends.clear();
    }

    /// Add a new field to the end of this record.
    pub fn push_field(&mut self, field: &str) {
        self.fields.push_str(field);
        self.ends.push(self.fields.len());
    }

    /// Returns an iterator over all fields in this record.
    pub fn iter(&self) -> RecordIter<'_> {
        RecordIter { record: self, i: 0, j: self.len() }
    }
}

impl Default for Record {
    fn default() -> Record {
        Record::new()
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let fields: Vec<&str> = self.iter().collect();
        write!(f, "Record({:?})", fields)
    }
}

impl ops::Index<usize> for Record {
    type Output = str;
    fn index(&self, i: usize) -> &str {
        self.get(i).unwrap()
    }
}

impl<S: AsRef<str>> Extend<S> for Record {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for field in iter {
            self.push_field(field.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Record {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Record {
        let mut record = Record::new();
        record.extend(iter);
        record
    }
}

impl<'a> IntoIterator for &'a Record {
    type IntoIter = RecordIter<'a>;
    type Item = &'a str;

    fn into_iter(self) -> RecordIter<'a> {
        self.iter()
    }
}

impl<S: AsRef<str>> PartialEq<Vec<S>> for Record {
    fn eq(&self, other: &Vec<S>) -> bool {
        eq_fields(self, other)
    }
}

impl<S: AsRef<str>> PartialEq<[S]> for Record {
    fn eq(&self, other: &[S]) -> bool {
        eq_fields(self, other)
    }
}

impl<'a, S: AsRef<str>> PartialEq<&'a [S]> for Record {
    fn eq(&self, other: &&'a [S]) -> bool {
        eq_fields(self, other)
    }
}

fn eq_fields<S: AsRef<str>>(record: &Record, other: &[S]) -> bool {
    record.len() == other.len()
        && record.iter().zip(other).all(|(a, b)| a == b.as_ref())
}

/// An iterator over the fields in a record.
///
/// The lifetime parameter `'a` refers to the lifetime of the record being
/// iterated over.
#[derive(Clone)]
pub struct RecordIter<'a> {
    record: &'a Record,
    /// The index of the next field from the front.
    i: usize,
    /// One past the index of the next field from the back.
    j: usize,
}

impl<'a> Iterator for RecordIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.i >= self.j {
            return None;
        }
        let field = self.record.get(self.i);
        self.i += 1;
        field
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.j - self.i;
        (len, Some(len))
    }
}

impl<'a> DoubleEndedIterator for RecordIter<'a> {
    fn next_back(&mut self) -> Option<&'a str> {
        if self.i >= self.j {
            return None;
        }
        self.j -= 1;
        self.record.get(self.j)
    }
}

impl<'a> ExactSizeIterator for RecordIter<'a> {}
