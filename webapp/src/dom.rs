use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

use common::{
    element::{ElementSource, StyleTarget},
    error::PageError,
};

pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or_else(|| PageError::dom("window", "no global window exists"))
}

pub fn document() -> Result<Document, PageError> {
    window()?
        .document()
        .ok_or_else(|| PageError::dom("document", "window has no document"))
}

pub fn js_error(op: &'static str, err: JsValue) -> PageError {
    PageError::dom(op, err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

// handle to an html element on the live page
#[derive(Clone, Debug)]
pub struct DomElement(HtmlElement);

impl DomElement {
    pub fn html(&self) -> &HtmlElement {
        &self.0
    }
}

impl StyleTarget for DomElement {
    fn style(&self, property: &str) -> Result<String, PageError> {
        self.0
            .style()
            .get_property_value(property)
            .map_err(|err| js_error("getPropertyValue", err))
    }

    fn set_style(&self, property: &str, value: &str) -> Result<(), PageError> {
        self.0
            .style()
            .set_property(property, value)
            .map_err(|err| js_error("setProperty", err))
    }

    fn add_class(&self, class: &str) -> Result<(), PageError> {
        self.0
            .class_list()
            .add_1(class)
            .map_err(|err| js_error("classList.add", err))
    }

    fn remove_class(&self, class: &str) -> Result<(), PageError> {
        self.0
            .class_list()
            .remove_1(class)
            .map_err(|err| js_error("classList.remove", err))
    }
}

// selector lookups against the document
//
// an invalid selector is treated like one that matches nothing
pub struct DomPage(Document);

impl DomPage {
    pub fn new(document: Document) -> Self {
        DomPage(document)
    }
}

impl ElementSource<DomElement> for DomPage {
    fn query(&self, selector: &str) -> Option<DomElement> {
        self.0
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .map(DomElement)
    }

    fn query_all(&self, selector: &str) -> Vec<DomElement> {
        let Ok(nodes) = self.0.query_selector_all(selector) else {
            return Vec::new();
        };

        (0..nodes.length())
            .filter_map(|idx| nodes.item(idx))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .map(DomElement)
            .collect()
    }
}
