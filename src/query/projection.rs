//! Result rows and field projection

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use super::Record;

/// A reduced-field copy of a record.
///
/// Holds exactly the requested names in request order. A name the source
/// record lacks is kept as an absent marker (`None`), so the key set always
/// matches the request. Absent fields are left out when serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    fields: Vec<(String, Option<Value>)>,
}

impl Projection {
    /// Project `record` onto `names` (top-level lookup only).
    ///
    /// A repeated name keeps its first position.
    pub fn project(record: &Record, names: &[&str]) -> Self {
        let mut fields: Vec<(String, Option<Value>)> = Vec::with_capacity(names.len());
        for name in names {
            if fields.iter().any(|(existing, _)| existing == name) {
                continue;
            }
            fields.push((name.to_string(), record.get(*name).cloned()));
        }
        Self { fields }
    }

    /// Requested field names, in order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Value of a field; `None` when absent or not requested
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .and_then(|(_, value)| value.as_ref())
    }

    /// True if `name` was requested but the source record lacked it
    pub fn is_absent(&self, name: &str) -> bool {
        self.fields
            .iter()
            .any(|(field, value)| field == name && value.is_none())
    }

    /// Number of requested fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Convert to a plain record, dropping absent fields
    pub fn into_record(self) -> Record {
        self.fields
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| (name, v)))
            .collect()
    }
}

impl Serialize for Projection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let present = self.fields.iter().filter(|(_, v)| v.is_some()).count();
        let mut map = serializer.serialize_map(Some(present))?;
        for (name, value) in &self.fields {
            if let Some(value) = value {
                map.serialize_entry(name, value)?;
            }
        }
        map.end()
    }
}

/// One row of a query result.
///
/// Without `select`, rows borrow the stored record untouched. With `select`,
/// each row is a freshly built [`Projection`].
#[derive(Debug, Clone, PartialEq)]
pub enum Row<'a> {
    Stored(&'a Record),
    Projected(Projection),
}

impl Row<'_> {
    /// Top-level field value, if present
    pub fn get(&self, field: &str) -> Option<&Value> {
        match self {
            Row::Stored(record) => record.get(field),
            Row::Projected(projection) => projection.get(field),
        }
    }

    /// Owned JSON value for this row
    pub fn to_value(&self) -> Value {
        match self {
            Row::Stored(record) => Value::Object((*record).clone()),
            Row::Projected(projection) => Value::Object(projection.clone().into_record()),
        }
    }
}

impl Serialize for Row<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Row::Stored(record) => record.serialize(serializer),
            Row::Projected(projection) => projection.serialize(serializer),
        }
    }
}
