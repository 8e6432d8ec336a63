//! Sitemap assembly across a decoration model.

use smgen_nav::{DecorationModel, Project};
use smgen_xml::{ChangeFreq, UrlSink};
use url::Url;

use crate::context::RenderContext;
use crate::error::GenerateError;
use crate::extractor::MenuTreeExtractor;

/// Drives menu extraction across every menu of a decoration model.
///
/// Validates inputs before any extraction, then runs one
/// [`MenuTreeExtractor`] pass per menu in model order, streaming every
/// produced record into the sink. Persistence stays with the sink; the
/// assembler never writes files.
pub struct SitemapAssembler {
    context: RenderContext,
}

impl SitemapAssembler {
    /// Create an assembler for one generation pass.
    #[must_use]
    pub fn new(context: RenderContext) -> Self {
        Self { context }
    }

    /// Settings of this pass.
    #[must_use]
    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    /// Extract every menu of `model` into `sink`.
    ///
    /// The single change frequency applies to every record of the run.
    /// A model with zero menus is valid and produces zero records.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidArgument`] — before the sink sees any
    /// record — if the project URL is empty or not a valid absolute URL.
    /// Extraction and sink failures propagate unchanged; records already
    /// forwarded before a mid-run failure stay forwarded, and only the
    /// sink's own write commits output.
    pub fn generate(
        &self,
        project: &Project,
        model: &DecorationModel,
        sink: &mut dyn UrlSink,
        change_freq: ChangeFreq,
    ) -> Result<(), GenerateError> {
        if project.url.trim().is_empty() {
            return Err(GenerateError::InvalidArgument(
                "project URL must be set".to_owned(),
            ));
        }
        if let Err(err) = Url::parse(&project.url) {
            return Err(GenerateError::InvalidArgument(format!(
                "project URL '{}' is not a valid absolute URL: {err}",
                project.url
            )));
        }

        tracing::debug!(
            locale = %self.context.locale,
            menus = model.menus.len(),
            "extracting decoration model"
        );

        let extractor = MenuTreeExtractor::new(&project.url, change_freq);
        for menu in &model.menus {
            extractor.extract(&menu.items, sink)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use smgen_nav::{Menu, MenuItem};
    use smgen_xml::{UrlEntry, WriteError};

    use super::*;

    struct RecordingSink {
        entries: Vec<UrlEntry>,
        fail_adds: bool,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self {
                entries: Vec::new(),
                fail_adds: false,
            }
        }
    }

    impl UrlSink for RecordingSink {
        fn add_url(&mut self, entry: UrlEntry) -> Result<(), WriteError> {
            if self.fail_adds {
                return Err(WriteError::OutsideBase {
                    url: entry.loc,
                    base: "https://example.org".to_owned(),
                });
            }
            self.entries.push(entry);
            Ok(())
        }

        fn write(&mut self) -> Result<Vec<PathBuf>, WriteError> {
            Ok(Vec::new())
        }
    }

    fn project(url: &str) -> Project {
        Project {
            name: "Example".to_owned(),
            url: url.to_owned(),
        }
    }

    fn model_with(hrefs: &[&[&str]]) -> DecorationModel {
        DecorationModel {
            menus: hrefs
                .iter()
                .map(|menu| Menu {
                    name: "Menu".to_owned(),
                    items: menu
                        .iter()
                        .map(|href| MenuItem {
                            name: (*href).to_owned(),
                            href: Some((*href).to_owned()),
                            items: Vec::new(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    fn assembler() -> SitemapAssembler {
        SitemapAssembler::new(RenderContext::new("en"))
    }

    #[test]
    fn test_generate_walks_menus_in_model_order() {
        let model = model_with(&[&["a.html", "b.html"], &["c.html"]]);
        let mut sink = RecordingSink::new();

        assembler()
            .generate(&project("https://example.org"), &model, &mut sink, ChangeFreq::Weekly)
            .unwrap();

        let locs: Vec<_> = sink.entries.iter().map(|e| e.loc.as_str()).collect();
        assert_eq!(
            locs,
            vec![
                "https://example.org/a.html",
                "https://example.org/b.html",
                "https://example.org/c.html",
            ]
        );
    }

    #[test]
    fn test_generate_empty_model_produces_no_records() {
        let model = DecorationModel::default();
        let mut sink = RecordingSink::new();

        assembler()
            .generate(&project("https://example.org"), &model, &mut sink, ChangeFreq::Monthly)
            .unwrap();

        assert!(sink.entries.is_empty());
    }

    #[test]
    fn test_generate_rejects_empty_project_url_before_extraction() {
        let model = model_with(&[&["a.html"]]);
        let mut sink = RecordingSink::new();

        let err = assembler()
            .generate(&project("  "), &model, &mut sink, ChangeFreq::Monthly)
            .unwrap_err();

        assert!(matches!(err, GenerateError::InvalidArgument(_)));
        assert!(sink.entries.is_empty());
    }

    #[test]
    fn test_generate_rejects_relative_project_url() {
        let model = model_with(&[&["a.html"]]);
        let mut sink = RecordingSink::new();

        let err = assembler()
            .generate(&project("docs/site"), &model, &mut sink, ChangeFreq::Monthly)
            .unwrap_err();

        assert!(matches!(err, GenerateError::InvalidArgument(_)));
        assert!(sink.entries.is_empty());
    }

    #[test]
    fn test_generate_propagates_sink_failures() {
        let model = model_with(&[&["a.html"]]);
        let mut sink = RecordingSink::new();
        sink.fail_adds = true;

        let err = assembler()
            .generate(&project("https://example.org"), &model, &mut sink, ChangeFreq::Monthly)
            .unwrap_err();

        assert!(matches!(err, GenerateError::Sink(_)));
    }
}
