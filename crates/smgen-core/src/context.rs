//! Per-pass rendering context.

/// Immutable settings for one locale's generation pass.
///
/// Built once per pass and passed down; nothing mutates it after
/// construction. The encoding fields are pass-through configuration for the
/// writer and do not affect extraction.
#[derive(Clone, Debug)]
pub struct RenderContext {
    /// Locale this pass generates for.
    pub locale: String,
    /// Charset of input documents.
    pub input_encoding: String,
    /// Charset declared on written output.
    pub output_encoding: String,
    /// Whether produced documents are validated before being written.
    pub validate: bool,
}

impl RenderContext {
    /// Context for `locale` with the conventional encoding defaults.
    #[must_use]
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            input_encoding: "ISO-8859-1".to_owned(),
            output_encoding: "UTF-8".to_owned(),
            validate: false,
        }
    }

    /// Override both encodings.
    #[must_use]
    pub fn with_encodings(
        mut self,
        input_encoding: impl Into<String>,
        output_encoding: impl Into<String>,
    ) -> Self {
        self.input_encoding = input_encoding.into();
        self.output_encoding = output_encoding.into();
        self
    }

    /// Enable or disable output validation.
    #[must_use]
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_conventional_encoding_defaults() {
        let context = RenderContext::new("en");
        assert_eq!(context.locale, "en");
        assert_eq!(context.input_encoding, "ISO-8859-1");
        assert_eq!(context.output_encoding, "UTF-8");
        assert!(!context.validate);
    }

    #[test]
    fn test_builder_overrides() {
        let context = RenderContext::new("fr")
            .with_encodings("UTF-8", "UTF-8")
            .with_validation(true);
        assert_eq!(context.input_encoding, "UTF-8");
        assert!(context.validate);
    }
}
