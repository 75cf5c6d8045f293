use crate::input::parse::parse_number;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

//flat record of raw form values keyed by field name
//insertion order is kept so records print the way they were entered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputRecord {
    fields: IndexMap<String, String>,
}

impl InputRecord {
    pub fn new() -> Self {
        InputRecord {
            fields: IndexMap::new(),
        }
    }

    //builds a record from (field, value) pairs
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut record = InputRecord::new();
        for (key, value) in pairs {
            record.set(key, value);
        }
        record
    }

    //sets a field, replacing any earlier value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    //builder form of set
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    //returns the raw string for a field
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    //returns the numeric value of a field, 0.0 when missing or unparseable
    pub fn number(&self, key: &str) -> f64 {
        match self.fields.get(key) {
            Some(raw) => {
                let value = parse_number(raw);
                if value == 0.0 && !raw.trim().is_empty() {
                    tracing::trace!(field = key, raw = raw.as_str(), "input coerced to zero");
                }
                value
            }
            None => 0.0,
        }
    }

    //like number, but falls back when the field reads as zero
    pub fn number_or(&self, key: &str, fallback: f64) -> f64 {
        let value = self.number(key);
        if value == 0.0 {
            fallback
        } else {
            value
        }
    }

    //overlays every field of `other` on top of this record
    pub fn merge(&mut self, other: &InputRecord) {
        for (key, value) in other.iter() {
            self.set(key, value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InputRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        InputRecord::from_pairs(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_bad_fields_read_as_zero() {
        let record = InputRecord::new().with("income", "5000").with("food", "lots");

        assert_eq!(record.number("income"), 5000.0);
        assert_eq!(record.number("food"), 0.0);
        assert_eq!(record.number("housing"), 0.0);
    }

    #[test]
    fn number_or_falls_back_on_zero() {
        let record = InputRecord::new().with("compoundingFrequency", "");
        assert_eq!(record.number_or("compoundingFrequency", 12.0), 12.0);
        assert_eq!(record.number_or("missing", 12.0), 12.0);

        let record = record.with("compoundingFrequency", "4");
        assert_eq!(record.number_or("compoundingFrequency", 12.0), 4.0);
    }

    #[test]
    fn merge_overrides_and_keeps_order() {
        let mut base = InputRecord::from_pairs([("a", "1"), ("b", "2")]);
        let overlay = InputRecord::from_pairs([("b", "3"), ("c", "4")]);
        base.merge(&overlay);

        let keys: Vec<&str> = base.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(base.raw("b"), Some("3"));
    }

    #[test]
    fn deserializes_from_flat_json_object() {
        let record: InputRecord =
            serde_json::from_str(r#"{"amount": "25000", "termYears": "5"}"#).unwrap();
        assert_eq!(record.len(), 2);
        assert_eq!(record.number("amount"), 25000.0);
    }
}
