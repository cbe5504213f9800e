use std::fmt;

use tracing::{Level, debug, instrument, warn};

use crate::{config::Selectors, error::PageError};

// the elements the page markup is expected to provide, one each
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ElementRole {
    Hamburger,
    NavLinks,
    Header,
}

impl ElementRole {
    pub fn all() -> [ElementRole; 3] {
        [
            ElementRole::Hamburger,
            ElementRole::NavLinks,
            ElementRole::Header,
        ]
    }

    pub fn selector<'a>(&self, selectors: &'a Selectors) -> &'a str {
        match self {
            ElementRole::Hamburger => &selectors.hamburger,
            ElementRole::NavLinks => &selectors.nav_links,
            ElementRole::Header => &selectors.header,
        }
    }

    pub fn missing(&self, selectors: &Selectors) -> PageError {
        PageError::MissingElement {
            role: *self,
            selector: self.selector(selectors).to_owned(),
        }
    }
}

impl fmt::Display for ElementRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ElementRole::Hamburger => write!(f, "hamburger button"),
            ElementRole::NavLinks => write!(f, "nav links"),
            ElementRole::Header => write!(f, "header"),
        }
    }
}

// what the page behaviors need from an element handle
//
// dom handles are shared references into the page, so mutation goes through &self
pub trait StyleTarget {
    fn style(&self, property: &str) -> Result<String, PageError>;

    fn set_style(&self, property: &str, value: &str) -> Result<(), PageError>;

    fn add_class(&self, class: &str) -> Result<(), PageError>;

    fn remove_class(&self, class: &str) -> Result<(), PageError>;
}

// selector lookups against whatever holds the elements
pub trait ElementSource<E> {
    fn query(&self, selector: &str) -> Option<E>;

    fn query_all(&self, selector: &str) -> Vec<E>;
}

// element handles resolved once at startup and handed to each feature
//
// all lookups happen here, so this is also the one place that reports missing markup
#[derive(Clone, Debug)]
pub struct PageElements<E> {
    pub hamburger: Option<E>,
    pub nav_links: Option<E>,
    pub header: Option<E>,
    pub anchors: Vec<E>,
}

impl<E> PageElements<E> {
    #[instrument(level=Level::DEBUG, skip_all)]
    pub fn resolve<S: ElementSource<E>>(source: &S, selectors: &Selectors) -> Self {
        let elements = PageElements {
            hamburger: source.query(&selectors.hamburger),
            nav_links: source.query(&selectors.nav_links),
            header: source.query(&selectors.header),
            anchors: source.query_all(&selectors.anchors),
        };

        for role in elements.missing() {
            warn!(
                "no {role} element matches `{}`, dependent behavior is disabled",
                role.selector(selectors)
            );
        }

        debug!("found {} in-page anchors", elements.anchors.len());
        elements
    }

    pub fn get(&self, role: ElementRole) -> Option<&E> {
        match role {
            ElementRole::Hamburger => self.hamburger.as_ref(),
            ElementRole::NavLinks => self.nav_links.as_ref(),
            ElementRole::Header => self.header.as_ref(),
        }
    }

    pub fn missing(&self) -> Vec<ElementRole> {
        ElementRole::all()
            .into_iter()
            .filter(|role| self.get(*role).is_none())
            .collect()
    }
}
