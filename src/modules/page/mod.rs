//! In-memory stand-ins for the page elements the search cycle reads and mutates.
//!
//! Handles are cheap to clone and share their state, so a `TextInput` kept by the
//! page and the copy held by a controller see the same value.

mod element;

pub use element::{Button, ClickListener, Container, DisplayRegion, Element, TextInput};

use std::collections::HashMap;
use std::sync::Arc;

pub const SEARCH_INPUT_ID: &str = "search";
pub const SEARCH_BUTTON_ID: &str = "searchBtn";
pub const RESULTS_ID: &str = "results";

#[derive(Clone)]
enum Node {
    Input(TextInput),
    Button(Button),
    Container(Arc<dyn DisplayRegion>),
}

#[derive(Clone, Default)]
pub struct Page {
    nodes: HashMap<String, Node>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page with the three elements the search controller expects.
    pub fn search_page() -> Self {
        let mut page = Self::new();
        page.insert_input(SEARCH_INPUT_ID, TextInput::new());
        page.insert_button(SEARCH_BUTTON_ID, Button::new());
        page.insert_container(RESULTS_ID, Container::new());

        page
    }

    pub fn insert_input(&mut self, id: impl Into<String>, input: TextInput) {
        self.nodes.insert(id.into(), Node::Input(input));
    }

    pub fn insert_button(&mut self, id: impl Into<String>, button: Button) {
        self.nodes.insert(id.into(), Node::Button(button));
    }

    pub fn insert_container(&mut self, id: impl Into<String>, region: impl DisplayRegion) {
        self.nodes.insert(id.into(), Node::Container(Arc::new(region)));
    }

    pub fn input(&self, id: &str) -> Option<TextInput> {
        match self.nodes.get(id) {
            Some(Node::Input(input)) => Some(input.clone()),
            _ => None,
        }
    }

    pub fn button(&self, id: &str) -> Option<Button> {
        match self.nodes.get(id) {
            Some(Node::Button(button)) => Some(button.clone()),
            _ => None,
        }
    }

    pub fn container(&self, id: &str) -> Option<Arc<dyn DisplayRegion>> {
        match self.nodes.get(id) {
            Some(Node::Container(region)) => Some(region.clone()),
            _ => None,
        }
    }
}
