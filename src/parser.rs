//! Markup adapter: XML text to the element tree the layout engine consumes.

use crate::error::PipelineError;
use layoutimg_layout::Element;
use roxmltree::{Document, Node};

/// Parses `markup` and converts its root element.
///
/// Attributes keep their source order. The character data directly inside an
/// element is concatenated into its inline text. Outside `<text>` elements,
/// whitespace-only character data is formatting and is dropped, so
/// `<image><text>aa</text></image>` and `<image> <text>aa</text> </image>`
/// produce the same tree. Comments and processing instructions are ignored.
///
/// The vocabulary has no namespaces: an element or attribute that belongs to
/// one is rejected rather than matched by its local name.
pub fn parse_markup(markup: &str) -> Result<Element, PipelineError> {
    let document = Document::parse(markup)?;
    let root = convert(document.root_element())?;
    log::debug!("Parsed markup with {} elements", root.count());
    Ok(root)
}

fn convert(node: Node<'_, '_>) -> Result<Element, PipelineError> {
    let name = node.tag_name();
    if let Some(namespace) = name.namespace() {
        return Err(PipelineError::UnsupportedMarkup(format!(
            "element <{}> is in namespace '{}'",
            name.name(),
            namespace
        )));
    }
    let mut element = Element::new(name.name());
    for attribute in node.attributes() {
        if let Some(namespace) = attribute.namespace() {
            return Err(PipelineError::UnsupportedMarkup(format!(
                "attribute '{}' on <{}> is in namespace '{}'",
                attribute.name(),
                element.tag,
                namespace
            )));
        }
        element
            .attributes
            .insert(attribute.name().to_string(), attribute.value().to_string());
    }

    let mut text: Option<String> = None;
    for child in node.children() {
        if child.is_element() {
            element.children.push(convert(child)?);
        } else if let Some(data) = child.text().filter(|_| child.is_text()) {
            text.get_or_insert_with(String::new).push_str(data);
        }
    }

    let keeps_whitespace = element.tag == "text";
    element.text = text.filter(|t| keeps_whitespace || !t.trim().is_empty());
    Ok(element)
}
