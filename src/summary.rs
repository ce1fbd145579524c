//! Summary struct - the text returned by the generation service.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary produced by the LLM.
///
/// The text is kept exactly as the model returned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Generated summary text
    pub text: String,
    /// Model that produced the summary
    pub model: String,
}

impl Summary {
    /// Create a new summary
    pub fn new(text: String, model: impl Into<String>) -> Self {
        Self {
            text,
            model: model.into(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
