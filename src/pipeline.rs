use crate::error::PipelineError;
use crate::parser::parse_markup;
use layoutimg_layout::{Element, LayoutConfig, LayoutEngine, LayoutTree};
use layoutimg_traits::{Renderer, TextMeasurer};
use std::path::Path;

/// A markup document on its way to becoming an image.
///
/// Construction parses and validates eagerly; [`generate`](Self::generate)
/// runs the inherit, layout and draw passes; [`save`](Self::save) asks the
/// renderer to persist the result and is only allowed after `generate`.
#[derive(Debug, Clone)]
pub struct LayoutImage {
    source: Element,
    tree: LayoutTree,
    engine: LayoutEngine,
    generated: bool,
}

impl LayoutImage {
    pub fn new(markup: &str) -> Result<Self, PipelineError> {
        Self::from_element(parse_markup(markup)?)
    }

    pub fn from_element(root: Element) -> Result<Self, PipelineError> {
        Self::with_config(root, LayoutConfig::default())
    }

    pub fn with_config(root: Element, config: LayoutConfig) -> Result<Self, PipelineError> {
        let engine = LayoutEngine::new(config);
        let tree = engine.build(&root)?;
        Ok(Self {
            source: root,
            tree,
            engine,
            generated: false,
        })
    }

    /// Lays out the document with `measurer` and draws it onto `renderer`.
    ///
    /// Running it again repeats every pass and draws the image a second time.
    pub fn generate<M, R>(&mut self, measurer: &M, renderer: &mut R) -> Result<(), PipelineError>
    where
        M: TextMeasurer + ?Sized,
        R: Renderer + ?Sized,
    {
        self.engine.process(&mut self.tree, measurer, renderer)?;
        self.generated = true;
        Ok(())
    }

    pub fn save<R>(&self, renderer: &R, path: impl AsRef<Path>) -> Result<(), PipelineError>
    where
        R: Renderer + ?Sized,
    {
        if !self.generated {
            return Err(PipelineError::State(
                "Cannot save before generating the image".to_string(),
            ));
        }
        renderer.save(path.as_ref())?;
        Ok(())
    }

    pub fn is_generated(&self) -> bool {
        self.generated
    }

    pub fn element(&self) -> &Element {
        &self.source
    }

    pub fn tree(&self) -> &LayoutTree {
        &self.tree
    }
}

/// Two images are equal when they were built from the same element tree.
impl PartialEq for LayoutImage {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}
