use std::fmt;

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::record::Record;

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for field in self {
            seq.serialize_element(field)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Record, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a sequence of strings")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Record, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut record = match seq.size_hint() {
            Some(size) => Record::with_capacity(0, size),
            None => Record::new(),
        };
        while let Some(field) = seq.next_element::<String>()? {
            record.push_field(&field);
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use crate::record::Record;

    #[test]
    fn roundtrip() {
        let rec: Record = ["a", "", "b,c"].iter().collect();
        let json = serde_json::to_string(&rec).unwrap();
        assert_eq!(json, r#"["a","","b,c"]"#);

        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec);
    }

    #[test]
    fn deserialize_empty() {
        let rec: Record = serde_json::from_str("[]").unwrap();
        assert!(rec.is_empty());
    }

    #[test]
    fn deserialize_rejects_non_sequence() {
        let got: Result<Record, _> = serde_json::from_str(r#""a,b""#);
        assert!(got.is_err());
    }
}
