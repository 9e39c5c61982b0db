//! Owned SVG element tree held by the canvas.
//!
//! Shapes stay editable after they are appended (animations are added to a
//! line in place), so the canvas keeps its own tree and only converts to
//! `svg` crate nodes when serializing.

use svg::Node;
use svg::node::Text as TextNode;
use svg::node::element::Element;

use crate::shapes::{Attributes, ShapeResult};

#[derive(Clone, Debug, PartialEq)]
pub struct SvgElement {
    name: String,
    attributes: Attributes,
    children: Vec<SvgElement>,
    text: Option<String>,
}

impl SvgElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
            text: None,
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes.merge(attributes);
        self
    }

    pub fn with_child(mut self, child: SvgElement) -> Self {
        self.children.push(child);
        self
    }

    /// Text content, written before any child elements.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    pub fn children(&self) -> &[SvgElement] {
        &self.children
    }

    pub fn push_child(&mut self, child: SvgElement) {
        self.children.push(child);
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Convert into an `svg` crate element, recursively.
    pub fn to_node(&self) -> Element {
        let mut element = Element::new(self.name.as_str());
        for (name, value) in &self.attributes {
            element.assign(name.as_str(), value.to_string());
        }
        if let Some(text) = &self.text {
            element.append(TextNode::new(text.as_str()));
        }
        for child in &self.children {
            element.append(child.to_node());
        }
        element
    }
}

impl From<ShapeResult> for SvgElement {
    fn from(shape: ShapeResult) -> Self {
        SvgElement::new(shape.kind.element_name()).with_attributes(shape.attributes)
    }
}
