//! Instruction template sent to the completion service.

/// Marker in [`PROMPT_TEMPLATE`] that receives the requirement text.
pub const REQUIREMENTS_PLACEHOLDER: &str = "{requirements}";

/// Instructions for the model. Contains [`REQUIREMENTS_PLACEHOLDER`] exactly once.
///
/// The output contract here is requested, not enforced: the reply parser
/// rejects anything that is not a bare JSON array of stories.
pub const PROMPT_TEMPLATE: &str = r#"
You are a user-story generator. Given the requirements below, return ONLY a JSON array of stories.
Each story must contain: title, description, acceptance_criteria (array), story_points (int|null), labels (array), epic (string|null).

Response Output Constraint:
 - Return valid, parseable JSON only and include no text that is not part of the JSON.
 - Output a JSON array ONLY.
 - Do not include any explanations, comments, or markdown fences like ```json or ```
Requirements:
{requirements}

"#;

/// Render the instruction template around a requirement.
///
/// The requirement is inserted verbatim: no escaping, trimming or
/// truncation. Placeholder-like text inside the requirement is not expanded.
///
/// # Examples
///
/// ```
/// use storysmith_core::build_prompt;
///
/// let prompt = build_prompt("As a user I want to reset my password");
/// assert!(prompt.contains("As a user I want to reset my password"));
/// assert!(prompt.contains("JSON array"));
/// ```
pub fn build_prompt(requirement_text: &str) -> String {
    PROMPT_TEMPLATE.replacen(REQUIREMENTS_PLACEHOLDER, requirement_text, 1)
}
