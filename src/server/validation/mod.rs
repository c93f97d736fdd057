//! Field schemas and request body validation.
//!
//! Every entity kind declares a static [`EntitySchema`]: its fields with a primitive type, a
//! required flag and a uniqueness flag, plus the order in which each kind of check visits them.
//! Validation turns an untyped JSON object into a [`FieldSet`] of typed values, stopping at the
//! first violation.
//!
//! Uniqueness is declared here but checked against storage by the service layer, at the unique
//! field's position in the update order; the storage layer's unique constraint backs it up.

pub mod schema;

use std::fmt;

use serde_json::{Map, Value};

use crate::server::error::validation::ValidationError;

/// Primitive type accepted for a field.
///
/// JSON floats and booleans never match, even where the value is integral (`1.0`) or could be
/// read as a number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Integer,
}

impl FieldType {
    /// Converts `value` into a typed field value if it has this type.
    fn coerce(self, value: &Value) -> Option<FieldValue> {
        match (self, value) {
            (Self::Text, Value::String(s)) => Some(FieldValue::Text(s.clone())),
            (Self::Integer, Value::Number(n)) => n.as_i64().map(FieldValue::Integer),
            _ => None,
        }
    }

    fn default_value(self) -> FieldValue {
        match self {
            Self::Text => FieldValue::Text(String::new()),
            Self::Integer => FieldValue::Integer(0),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("string"),
            Self::Integer => f.write_str("integer"),
        }
    }
}

/// Declaration of one entity field.
#[derive(Clone, Copy, Debug)]
pub struct FieldSchema {
    pub name: &'static str,
    pub field_type: FieldType,
    pub required: bool,
    pub unique: bool,
}

impl FieldSchema {
    /// A required string field.
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            field_type: FieldType::Text,
            required: true,
            unique: false,
        }
    }

    /// A required integer field.
    pub const fn integer(name: &'static str) -> Self {
        Self {
            name,
            field_type: FieldType::Integer,
            required: true,
            unique: false,
        }
    }

    /// Marks the field as unique across all rows of the entity.
    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Marks the field as optional; an omitted optional field is defaulted on create.
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// Static field layout of an entity kind.
///
/// The check orders list field names. An empty order means declared order.
#[derive(Debug)]
pub struct EntitySchema {
    /// Entity label used in messages, e.g. `"Planet"`
    pub entity: &'static str,
    /// Fields in declared order; presence checks on create walk them in this order
    pub fields: &'static [FieldSchema],
    /// Order of the type checks on create
    pub create_type_order: &'static [&'static str],
    /// Order in which an update body is checked field by field
    pub update_order: &'static [&'static str],
}

impl EntitySchema {
    /// The field participating in a uniqueness constraint, if the entity has one.
    pub fn unique_field(&self) -> Option<&FieldSchema> {
        self.fields.iter().find(|field| field.unique)
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|field| field.name == name)
    }

    fn in_order<'s>(
        &'s self,
        order: &'s [&'static str],
    ) -> Box<dyn Iterator<Item = &'s FieldSchema> + 's> {
        if order.is_empty() {
            Box::new(self.fields.iter())
        } else {
            Box::new(order.iter().filter_map(move |name| self.field(name)))
        }
    }

    /// Validates a create request body.
    ///
    /// All presence checks run before any type check, so a body missing a late field and
    /// carrying a wrongly typed early field reports the missing field. Types are then checked
    /// in the schema's create type order. Omitted optional fields are defaulted; keys not in
    /// the schema are ignored.
    ///
    /// # Returns
    /// - `Ok(FieldSet)` - Every schema field, typed, in type-check order
    /// - `Err(ValidationError::MissingField)` - First required field absent from the body
    /// - `Err(ValidationError::WrongType)` - First field in type-check order with the wrong type
    pub fn validate_create(&self, body: &Map<String, Value>) -> Result<FieldSet, ValidationError> {
        if let Some(missing) = self
            .fields
            .iter()
            .find(|field| field.required && !body.contains_key(field.name))
        {
            return Err(ValidationError::MissingField(missing.name));
        }

        let mut fields = FieldSet::default();
        for field in self.in_order(self.create_type_order) {
            let value = match body.get(field.name) {
                Some(raw) => check_type(field, raw)?,
                None => field.field_type.default_value(),
            };
            fields.push(field.name, value);
        }

        Ok(fields)
    }

    /// Validates a partial update body.
    ///
    /// Only fields present in the body are checked and returned; the first wrongly typed field
    /// in update order fails the whole update.
    ///
    /// # Returns
    /// - `Ok(FieldSet)` - The delta to apply, possibly empty
    /// - `Err(ValidationError::WrongType)` - First present field with the wrong type
    pub fn validate_update(&self, body: &Map<String, Value>) -> Result<FieldSet, ValidationError> {
        let check = self.check_update(body);

        match check.violation {
            Some(err) => Err(err),
            None => Ok(check.accepted),
        }
    }

    /// Walks an update body in update order up to the first violation.
    ///
    /// Callers with checks of their own at a field's position, such as uniqueness against
    /// storage, run them over `accepted`: it holds exactly the fields visited before the
    /// violation.
    pub fn check_update(&self, body: &Map<String, Value>) -> UpdateCheck {
        let mut accepted = FieldSet::default();
        for field in self.in_order(self.update_order) {
            if let Some(raw) = body.get(field.name) {
                match check_type(field, raw) {
                    Ok(value) => accepted.push(field.name, value),
                    Err(err) => {
                        return UpdateCheck {
                            accepted,
                            violation: Some(err),
                        }
                    }
                }
            }
        }

        UpdateCheck {
            accepted,
            violation: None,
        }
    }
}

/// Outcome of walking an update body.
#[derive(Debug)]
pub struct UpdateCheck {
    /// Typed fields that passed, in update order
    pub accepted: FieldSet,
    /// The first violation, which stopped the walk
    pub violation: Option<ValidationError>,
}

fn check_type(field: &FieldSchema, raw: &Value) -> Result<FieldValue, ValidationError> {
    field
        .field_type
        .coerce(raw)
        .ok_or(ValidationError::WrongType {
            field: field.name,
            expected: field.field_type,
        })
}

/// A validated, typed field value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{}", i),
        }
    }
}

impl From<FieldValue> for sea_orm::Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Text(s) => s.into(),
            FieldValue::Integer(i) => i.into(),
        }
    }
}

/// Ordered set of validated fields, keyed by schema field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldSet(Vec<(&'static str, FieldValue)>);

impl FieldSet {
    fn push(&mut self, name: &'static str, value: FieldValue) {
        self.0.push((name, value));
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.0.iter().map(|(name, value)| (*name, value))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
