//! Turning a raw model reply into validated stories.

use crate::{Story, story::json_type};
use serde_json::Value;
use storysmith_error::{ParseError, ParseErrorKind};
use tracing::{debug, instrument, warn};

/// Parse a model reply as a JSON array of stories.
///
/// All or nothing: the reply must be strict JSON (no prose, no code
/// fences), the top-level value must be an array, and every element must
/// pass [`Story::from_value`]. The first failure aborts the whole parse.
///
/// # Errors
///
/// Returns a [`ParseError`] whose kind is
/// - [`ParseErrorKind::Syntax`] when the reply is not JSON,
/// - [`ParseErrorKind::NotArray`] when it is JSON but not an array,
/// - [`ParseErrorKind::InvalidStory`] for the first element failing validation.
///
/// # Examples
///
/// ```
/// use storysmith_core::parse_stories;
///
/// assert!(parse_stories("[]").unwrap().is_empty());
/// assert!(parse_stories("```json\n[]\n```").is_err());
/// ```
#[instrument(skip(raw), fields(raw_len = raw.len()))]
pub fn parse_stories(raw: &str) -> Result<Vec<Story>, ParseError> {
    let value: Value = serde_json::from_str(raw).map_err(|e| {
        warn!(error = %e, "Model reply is not valid JSON");
        ParseError::new(ParseErrorKind::Syntax {
            message: e.to_string(),
            raw: raw.to_string(),
        })
    })?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            let found = json_type(&other);
            warn!(found, "Model reply is not a JSON array");
            return Err(ParseError::new(ParseErrorKind::NotArray {
                found: found.to_string(),
            }));
        }
    };

    let stories = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            Story::from_value(item).map_err(|error| {
                warn!(index, error = %error, "Story failed schema validation");
                ParseError::new(ParseErrorKind::InvalidStory { index, error })
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = stories.len(), "Parsed stories");
    Ok(stories)
}
