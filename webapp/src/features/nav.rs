use tracing::{debug, error, warn};

use common::{
    config::{NavConfig, Selectors},
    element::{ElementRole, PageElements},
    error::PageError,
    nav::{NavBinding, NavigationToggle, nav_binding},
};

use crate::{dom::DomElement, features::Feature, listener::EventListener};

// hamburger button opens and closes the mobile nav links
pub struct NavigationFeature {
    selectors: Selectors,
    config: NavConfig,
    listener: Option<EventListener>,
}

impl NavigationFeature {
    pub fn new(selectors: &Selectors, config: &NavConfig) -> Self {
        NavigationFeature {
            selectors: selectors.clone(),
            config: config.clone(),
            listener: None,
        }
    }
}

impl Feature for NavigationFeature {
    fn name(&self) -> &'static str {
        "navigation"
    }

    fn bind(&mut self, elements: &PageElements<DomElement>) -> Result<(), PageError> {
        self.unbind();

        let binding = nav_binding(elements.hamburger.is_some(), elements.nav_links.is_some());

        let hamburger = match (binding, elements.hamburger.as_ref()) {
            (NavBinding::Bound, Some(hamburger)) => hamburger,
            (NavBinding::Unguarded, Some(hamburger)) => {
                warn!(
                    "{}, the hamburger button will fail on every click",
                    ElementRole::NavLinks.missing(&self.selectors)
                );
                hamburger
            }
            _ => {
                debug!("no hamburger button, mobile menu disabled");
                return Ok(());
            }
        };

        let toggle =
            NavigationToggle::new(elements.nav_links.clone(), &self.selectors, &self.config);

        // a failed toggle is rethrown into js so that it surfaces as an uncaught page error
        // rather than disappearing into the log
        let listener = EventListener::new(hamburger.html(), "click", move |_| {
            if let Err(err) = toggle.toggle() {
                error!("mobile menu toggle failed: {err}");
                wasm_bindgen::throw_str(&err.to_string());
            }
        })?;

        self.listener = Some(listener);
        Ok(())
    }

    fn unbind(&mut self) {
        self.listener.take();
    }

    fn is_bound(&self) -> bool {
        self.listener.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_hamburger_attaches_no_listener() {
        let mut feature = NavigationFeature::new(&Selectors::default(), &NavConfig::default());
        let elements = PageElements {
            hamburger: None,
            nav_links: None,
            header: None,
            anchors: Vec::new(),
        };

        feature.bind(&elements).unwrap();

        assert!(!feature.is_bound());
    }
}
