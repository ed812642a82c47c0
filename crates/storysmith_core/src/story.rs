//! The user-story record and its schema.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use storysmith_error::{SchemaError, SchemaErrorKind};

/// Minimum number of characters in a story title.
pub const TITLE_MIN_CHARS: usize = 3;

/// A structured user story produced by the model.
///
/// Stories only come into existence through schema validation: either
/// [`Story::from_value`] (what deserialization uses) or [`StoryBuilder`],
/// which applies the same title constraint. Fields are read-only.
///
/// # Examples
///
/// ```
/// use storysmith_core::Story;
/// use serde_json::json;
///
/// let story = Story::from_value(&json!({
///     "title": "Password reset",
///     "description": "User can reset password via email link",
///     "acceptance_criteria": ["Link expires in 1 hour"]
/// }))
/// .unwrap();
///
/// assert_eq!(story.title(), "Password reset");
/// assert!(story.labels().is_empty());
/// assert_eq!(*story.story_points(), None);
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, derive_getters::Getters,
)]
#[serde(try_from = "Value")]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Story {
    /// Short summary, at least three characters
    title: String,
    /// Narrative description of the story
    description: String,
    /// Ordered acceptance criteria
    acceptance_criteria: Vec<String>,
    /// Estimate, when the model supplied one
    #[builder(setter(into, strip_option), default)]
    story_points: Option<i64>,
    /// Free-form labels
    #[builder(default)]
    labels: Vec<String>,
    /// Owning epic, when the model supplied one
    #[builder(setter(into, strip_option), default)]
    epic: Option<String>,
}

impl Story {
    /// Creates a new story builder.
    pub fn builder() -> StoryBuilder {
        StoryBuilder::default()
    }

    /// Validate a candidate JSON value and build a story from it.
    ///
    /// Required fields are `title` (string, at least three characters),
    /// `description` (string) and `acceptance_criteria` (array of strings).
    /// `story_points`, `labels` and `epic` may be absent or null but must be
    /// well typed when present. Unknown fields are ignored and no type
    /// coercion takes place.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] naming the first field that violates a
    /// constraint.
    pub fn from_value(value: &Value) -> Result<Self, SchemaError> {
        let object = value.as_object().ok_or_else(|| {
            SchemaError::new(SchemaErrorKind::NotAnObject {
                found: json_type(value).to_string(),
            })
        })?;

        let title = text(required(object, "title")?, "title")?;
        let title_chars = title.chars().count();
        if title_chars < TITLE_MIN_CHARS {
            return Err(SchemaError::new(SchemaErrorKind::TooShort {
                field: "title".to_string(),
                min: TITLE_MIN_CHARS,
                actual: title_chars,
            }));
        }

        let description = text(required(object, "description")?, "description")?;
        let acceptance_criteria = text_list(
            required(object, "acceptance_criteria")?,
            "acceptance_criteria",
        )?;

        let story_points = optional(object, "story_points")
            .map(|v| integer(v, "story_points"))
            .transpose()?;
        let labels = optional(object, "labels")
            .map(|v| text_list(v, "labels"))
            .transpose()?
            .unwrap_or_default();
        let epic = optional(object, "epic")
            .map(|v| text(v, "epic"))
            .transpose()?;

        Ok(Self {
            title,
            description,
            acceptance_criteria,
            story_points,
            labels,
            epic,
        })
    }
}

impl StoryBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(title) = &self.title {
            let count = title.chars().count();
            if count < TITLE_MIN_CHARS {
                return Err(format!(
                    "title must be at least {} characters, found {}",
                    TITLE_MIN_CHARS, count
                ));
            }
        }
        Ok(())
    }
}

impl TryFrom<Value> for Story {
    type Error = SchemaError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}

/// Name of a JSON value's type, as used in error messages.
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn required<'a>(object: &'a Map<String, Value>, field: &str) -> Result<&'a Value, SchemaError> {
    optional(object, field).ok_or_else(|| {
        SchemaError::new(SchemaErrorKind::MissingField {
            field: field.to_string(),
        })
    })
}

fn optional<'a>(object: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    object.get(field).filter(|value| !value.is_null())
}

fn wrong_type(field: &str, expected: &str, found: &Value) -> SchemaError {
    SchemaError::new(SchemaErrorKind::WrongType {
        field: field.to_string(),
        expected: expected.to_string(),
        found: json_type(found).to_string(),
    })
}

fn text(value: &Value, field: &str) -> Result<String, SchemaError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| wrong_type(field, "a string", value))
}

fn integer(value: &Value, field: &str) -> Result<i64, SchemaError> {
    value
        .as_i64()
        .ok_or_else(|| wrong_type(field, "an integer", value))
}

fn text_list(value: &Value, field: &str) -> Result<Vec<String>, SchemaError> {
    let items = value
        .as_array()
        .ok_or_else(|| wrong_type(field, "an array of strings", value))?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| text(item, &format!("{}[{}]", field, i)))
        .collect()
}
