use crate::TypesError;

/// A user-supplied field value that is known to be non-empty.
///
/// Edits treat empty input as "keep the current value", so prompt answers are turned into
/// `Option<EditText>` with [`EditText::from_input`] before they reach the catalog. The text
/// is kept as typed apart from the trailing line terminator; whitespace-only text is a
/// value like any other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditText(String);

impl EditText {
    /// Creates a new `EditText`.
    ///
    /// # Errors
    ///
    /// Returns [`TypesError::EmptyText`] if nothing is left after removing the line
    /// terminator.
    pub fn new(input: impl Into<String>) -> Result<Self, TypesError> {
        let mut text = input.into();
        let kept = text.trim_end_matches(['\r', '\n']).len();
        text.truncate(kept);
        if text.is_empty() {
            return Err(TypesError::EmptyText);
        }
        Ok(Self(text))
    }

    /// Converts a raw prompt answer, mapping empty input to `None`.
    pub fn from_input(input: &str) -> Option<Self> {
        Self::new(input).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
