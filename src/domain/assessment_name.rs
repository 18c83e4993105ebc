use unicode_segmentation::UnicodeSegmentation;

/// The display name of an assessment, as accepted by the platform's
/// assessment-creation form.
#[derive(Debug, Clone)]
pub struct AssessmentName(String);

impl AssessmentName {
    /// Returns an instance of `AssessmentName` if the input satisfies all
    /// our validation constraints on assessment names.
    /// It returns an error message otherwise.
    pub fn parse(s: String) -> Result<AssessmentName, String> {
        // `.trim()` returns a view over the input `s` without trailing
        // whitespace-like characters.
        // `.is_empty` checks if the view contains any character.
        let is_empty_or_whitespace = s.trim().is_empty();

        // A grapheme is defined by the Unicode standard as a "user-perceived"
        // character: `å` is a single grapheme, but it is composed of two
        // characters (`a` and `̊`).
        //
        // The platform caps assessment names at 256 graphemes.
        let is_too_long = s.graphemes(true).count() > 256;

        // These characters are rejected by the assessment-creation form.
        let forbidden_characters = ['/', '(', ')', '"', '<', '>', '\\', '{', '}'];
        let contains_forbidden_characters = s.chars().any(|g| forbidden_characters.contains(&g));

        if is_empty_or_whitespace || is_too_long || contains_forbidden_characters {
            Err(format!("{} is not a valid assessment name.", s))
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for AssessmentName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
