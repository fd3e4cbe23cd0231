//! A minimal element tree for hosts without a DOM.
use std::rc::Rc;

use crate::{controls::Control, dispatch::NavTarget};

#[derive(Debug, Clone)]
struct Element {
    tag: String,
    classes: Vec<String>,
    data: Vec<(String, String)>,
    parent: Option<Node>,
}

/// Cheap to clone handle to an element and its ancestor chain
#[derive(Debug, Clone)]
pub struct Node(Rc<Element>);

impl Node {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(Rc::new(Element {
            tag: tag.into(),
            classes: Vec::new(),
            data: Vec::new(),
            parent: None,
        }))
    }

    /// The button element a rendered `control` produces
    pub fn from_control(control: &Control, button_class: &str) -> Self {
        Self::new("button")
            .with_class(button_class)
            .with_class(control.direction.modifier_class())
            .with_data("goto", control.target.to_string())
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        Rc::make_mut(&mut self.0).classes.push(class.into());
        self
    }

    pub fn with_data(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        Rc::make_mut(&mut self.0)
            .data
            .push((name.into(), value.into()));
        self
    }

    pub fn child_of(mut self, parent: &Node) -> Self {
        Rc::make_mut(&mut self.0).parent = Some(parent.clone());
        self
    }

    pub fn tag(&self) -> &str {
        &self.0.tag
    }
}

impl NavTarget for Node {
    fn has_class(&self, class: &str) -> bool {
        self.0.classes.iter().any(|c| c == class)
    }

    fn parent(&self) -> Option<Self> {
        self.0.parent.clone()
    }

    fn data_attribute(&self, name: &str) -> Option<String> {
        self.0
            .data
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }
}
