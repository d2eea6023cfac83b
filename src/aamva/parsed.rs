use std::collections::{BTreeMap, HashMap};

use serde::{ser::SerializeMap, Serialize, Serializer};

use super::field::{Field, CRITICAL_FIELDS};

/// Fields recovered from one barcode payload.
///
/// Fields that were not found have no entry. Callers must read a missing
/// entry as "unknown", not as an error.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedFields {
    entries: BTreeMap<Field, String>,
}

impl ParsedFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    /// Looks up a field by its canonical output key (e.g. `"firstName"`).
    pub fn get_by_name(&self, name: &str) -> Option<&str> {
        Field::from_name(name).and_then(|f| self.get(f))
    }

    pub fn contains(&self, field: Field) -> bool {
        self.entries.contains_key(&field)
    }

    /// Stores `value`, replacing any previous value for `field`.
    pub(crate) fn set(&mut self, field: Field, value: String) {
        self.entries.insert(field, value);
    }

    /// Appends a continuation segment to the value of `field`, separated by
    /// a single space.
    pub(crate) fn append(&mut self, field: Field, segment: &str) {
        let value = self.entries.entry(field).or_default();
        value.push(' ');
        value.push_str(segment);
    }

    /// Iterates over the present fields in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.entries.iter().map(|(f, v)| (*f, v.as_str()))
    }

    /// Critical fields that are absent or empty.
    pub fn missing_critical(&self) -> Vec<Field> {
        CRITICAL_FIELDS
            .into_iter()
            .filter(|f| self.get(*f).map_or(true, str::is_empty))
            .collect()
    }

    /// Converts into a plain map keyed by canonical field names.
    pub fn into_map(self) -> HashMap<String, String> {
        self.entries
            .into_iter()
            .map(|(f, v)| (f.name().to_owned(), v))
            .collect()
    }
}

impl Serialize for ParsedFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (f, v) in &self.entries {
            map.serialize_entry(f.name(), v)?;
        }
        map.end()
    }
}
