//! Outline request template for a text-generation collaborator.
//!
//! Only the text is produced here; sending it anywhere is the caller's business.

use crate::{Error, Result};

pub const TOPIC_SLOT: &str = "{topic}";

pub const MIND_MAP_PROMPT: &str = r#"You are an expert mind map creator.
Your task is to generate a hierarchical mind map outline for the given topic.
The output must be a markdown-formatted nested list.
Each item in the list represents a node in the mind map.
Use indentation (two spaces per level) to represent the hierarchy.
Do not include any other text, explanations, or markdown formatting like headers or backticks.
The root of the mind map should be the topic itself.

**Example for "Data Structures":**
- Data Structures
  - Linear
    - Array
    - Linked List
    - Stack
    - Queue
  - Non-Linear
    - Tree
      - Binary Tree
      - B-Tree
    - Graph

**Generate a mind map for the topic:** "{topic}"
"#;

/// Renders [`MIND_MAP_PROMPT`] for `topic`.
pub fn render_prompt(topic: &str) -> String {
    MIND_MAP_PROMPT.replace(TOPIC_SLOT, topic.trim())
}

/// Renders a custom template; it must contain at least one `{topic}` slot.
pub fn render_prompt_with(template: &str, topic: &str) -> Result<String> {
    if !template.contains(TOPIC_SLOT) {
        return Err(Error::MissingTopicSlot);
    }
    Ok(template.replace(TOPIC_SLOT, topic.trim()))
}
