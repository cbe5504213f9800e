use tracing::{debug, error};

use common::{
    config::HeaderConfig, element::PageElements, error::PageError, header::HeaderScrollStyler,
};

use crate::{
    dom::{self, DomElement, js_error},
    features::Feature,
    listener::EventListener,
};

// frosted header once the page is scrolled past the threshold
//
// scroll events are not throttled, every one restyles the header
pub struct HeaderScrollFeature {
    config: HeaderConfig,
    listener: Option<EventListener>,
}

impl HeaderScrollFeature {
    pub fn new(config: &HeaderConfig) -> Self {
        HeaderScrollFeature {
            config: config.clone(),
            listener: None,
        }
    }
}

impl Feature for HeaderScrollFeature {
    fn name(&self) -> &'static str {
        "header-scroll"
    }

    fn bind(&mut self, elements: &PageElements<DomElement>) -> Result<(), PageError> {
        self.unbind();

        if elements.header.is_none() {
            debug!("no header element, header scroll styling disabled");
            return Ok(());
        }

        let styler = HeaderScrollStyler::new(elements.header.clone(), &self.config);
        let window = dom::window()?;
        let target = window.clone();

        let listener = EventListener::new(&target, "scroll", move |_| {
            let restyle = window
                .scroll_y()
                .map_err(|err| js_error("scrollY", err))
                .and_then(|offset| styler.on_scroll(offset));

            if let Err(err) = restyle {
                error!("header restyle failed: {err}");
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
