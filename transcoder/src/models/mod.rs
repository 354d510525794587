//! Domain models for the transcoder.
//!
//! - [`Scalar`] - a single field value (null, boolean, number or text)
//! - [`Field`] - the nine known record fields and their target columns
//! - [`ColumnRule`] - how a field is rendered into SQL
//! - [`Record`] - one input row

use serde_json::{Map, Number, Value};

use crate::error::{json_kind, InputError, InputResult};

// =============================================================================
// Scalar values
// =============================================================================

/// A flat field value as read from the JSON input.
///
/// Absent keys and explicit `null` both map to [`Scalar::Null`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Scalar {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
}

impl Scalar {
    /// Convert a JSON value, rejecting arrays and objects.
    ///
    /// Returns the JSON type name on rejection so the caller can attach
    /// record and field context.
    pub fn from_json(value: &Value) -> Result<Self, &'static str> {
        match value {
            Value::Null => Ok(Scalar::Null),
            Value::Bool(b) => Ok(Scalar::Bool(*b)),
            Value::Number(n) => Ok(Scalar::Number(n.clone())),
            Value::String(s) => Ok(Scalar::Text(s.clone())),
            other => Err(json_kind(other)),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Number(n.into())
    }
}

// =============================================================================
// Fields and column layout
// =============================================================================

/// How a field's value becomes a SQL token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRule {
    /// Quoted string literal via the value escaper.
    Escaped,
    /// `TRY_CONVERT` expression via the date normalizer.
    Date,
    /// Emitted as-is, unquoted.
    Raw,
}

impl ColumnRule {
    pub fn describe(self) -> &'static str {
        match self {
            ColumnRule::Escaped => "escaped literal ('text', number or NULL)",
            ColumnRule::Date => "DD/MM/YYYY -> TRY_CONVERT(DATE, ..., 103) or NULL",
            ColumnRule::Raw => "raw unquoted value or NULL",
        }
    }
}

/// The record fields, in output column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Phase,
    Task,
    Milestone,
    Start,
    End,
    Completion,
    Dependencies,
    Assignee,
    Time,
}

impl Field {
    /// All fields in the order they appear in the `INSERT` column list.
    pub const ALL: [Field; 9] = [
        Field::Phase,
        Field::Task,
        Field::Milestone,
        Field::Start,
        Field::End,
        Field::Completion,
        Field::Dependencies,
        Field::Assignee,
        Field::Time,
    ];

    /// JSON key in the input records.
    pub fn key(self) -> &'static str {
        match self {
            Field::Phase => "phase",
            Field::Task => "task",
            Field::Milestone => "milestone",
            Field::Start => "start",
            Field::End => "end",
            Field::Completion => "completion",
            Field::Dependencies => "dependencies",
            Field::Assignee => "assignee",
            Field::Time => "time",
        }
    }

    /// Column name in the target table. Reserved words are bracket-quoted.
    pub fn column(self) -> &'static str {
        match self {
            Field::Start => "[start]",
            Field::End => "[end]",
            Field::Time => "[time]",
            other => other.key(),
        }
    }

    pub fn rule(self) -> ColumnRule {
        match self {
            Field::Start | Field::End => ColumnRule::Date,
            Field::Completion | Field::Time => ColumnRule::Raw,
            _ => ColumnRule::Escaped,
        }
    }
}

/// Comma-separated column list used by every `INSERT` header.
pub fn column_list() -> String {
    Field::ALL
        .iter()
        .map(|f| f.column())
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Record
// =============================================================================

/// One input row. Unknown JSON keys are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub phase: Scalar,
    pub task: Scalar,
    pub milestone: Scalar,
    pub start: Scalar,
    pub end: Scalar,
    pub completion: Scalar,
    pub dependencies: Scalar,
    pub assignee: Scalar,
    pub time: Scalar,
}

impl Record {
    /// Build a record from a JSON object.
    ///
    /// `index` is the position in the input array, used for error context.
    pub fn from_object(index: usize, obj: &Map<String, Value>) -> InputResult<Self> {
        let mut record = Record::default();
        for field in Field::ALL {
            if let Some(value) = obj.get(field.key()) {
                let scalar = Scalar::from_json(value).map_err(|found| {
                    InputError::UnsupportedValue {
                        index,
                        field: field.key().to_string(),
                        found,
                    }
                })?;
                *record.get_mut(field) = scalar;
            }
        }
        Ok(record)
    }

    pub fn get(&self, field: Field) -> &Scalar {
        match field {
            Field::Phase => &self.phase,
            Field::Task => &self.task,
            Field::Milestone => &self.milestone,
            Field::Start => &self.start,
            Field::End => &self.end,
            Field::Completion => &self.completion,
            Field::Dependencies => &self.dependencies,
            Field::Assignee => &self.assignee,
            Field::Time => &self.time,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut Scalar {
        match field {
            Field::Phase => &mut self.phase,
            Field::Task => &mut self.task,
            Field::Milestone => &mut self.milestone,
            Field::Start => &mut self.start,
            Field::End => &mut self.end,
            Field::Completion => &mut self.completion,
            Field::Dependencies => &mut self.dependencies,
            Field::Assignee => &mut self.assignee,
            Field::Time => &mut self.time,
        }
    }
}
