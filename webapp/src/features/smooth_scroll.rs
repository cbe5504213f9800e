use tracing::{debug, instrument};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use common::{
    config::{ScrollBlock, SmoothScrollConfig},
    element::PageElements,
    error::PageError,
    smooth::scroll_request,
};

use crate::{
    dom::{self, DomElement},
    features::Feature,
    listener::EventListener,
};

fn logical_position(block: ScrollBlock) -> ScrollLogicalPosition {
    match block {
        ScrollBlock::Start => ScrollLogicalPosition::Start,
        ScrollBlock::Center => ScrollLogicalPosition::Center,
        ScrollBlock::End => ScrollLogicalPosition::End,
        ScrollBlock::Nearest => ScrollLogicalPosition::Nearest,
    }
}

// in-page links scroll smoothly instead of jumping
//
// the browser does the animation; links whose target is not on the page keep their default
// behavior
pub struct SmoothScrollFeature {
    config: SmoothScrollConfig,
    listeners: Vec<EventListener>,
}

impl SmoothScrollFeature {
    pub fn new(config: &SmoothScrollConfig) -> Self {
        SmoothScrollFeature {
            config: config.clone(),
            listeners: Vec::new(),
        }
    }
}

impl Feature for SmoothScrollFeature {
    fn name(&self) -> &'static str {
        "smooth-scroll"
    }

    #[instrument(skip_all)]
    fn bind(&mut self, elements: &PageElements<DomElement>) -> Result<(), PageError> {
        self.unbind();

        if !self.config.enabled {
            debug!("smooth scrolling disabled by config");
            return Ok(());
        }

        if elements.anchors.is_empty() {
            debug!("no in-page links, smooth scrolling has nothing to attach to");
            return Ok(());
        }

        let page = dom::document()?;

        for anchor in &elements.anchors {
            let link = anchor.clone();
            let document = page.clone();
            let config = self.config.clone();

            let listener = EventListener::new(anchor.html(), "click", move |event| {
                let href = link.html().get_attribute("href");

                let Some(request) = scroll_request(href.as_deref(), &config) else {
                    return;
                };
                let Some(target) = document.get_element_by_id(request.target_id) else {
                    debug!("no element with id {}, leaving link alone", request.target_id);
                    return;
                };

                event.prevent_default();

                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(logical_position(request.block));
                target.scroll_into_view_with_scroll_into_view_options(&options);
            })?;

            self.listeners.push(listener);
        }

        debug!("attached to {} in-page links", self.listeners.len());
        Ok(())
    }

    fn unbind(&mut self) {
        self.listeners.clear();
    }

    fn is_bound(&self) -> bool {
        !self.listeners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_maps_onto_logical_position() {
        assert_eq!(logical_position(ScrollBlock::Start), ScrollLogicalPosition::Start);
        assert_eq!(logical_position(ScrollBlock::Center), ScrollLogicalPosition::Center);
        assert_eq!(logical_position(ScrollBlock::End), ScrollLogicalPosition::End);
        assert_eq!(logical_position(ScrollBlock::Nearest), ScrollLogicalPosition::Nearest);
    }

    #[test]
    fn no_links_or_disabled_binds_nothing() {
        let elements = PageElements {
            hamburger: None,
            nav_links: None,
            header: None,
            anchors: Vec::new(),
        };

        let mut feature = SmoothScrollFeature::new(&SmoothScrollConfig::default());
        feature.bind(&elements).unwrap();
        assert!(!feature.is_bound());

        let mut feature = SmoothScrollFeature::new(&SmoothScrollConfig {
            enabled: false,
            ..SmoothScrollConfig::default()
        });
        feature.bind(&elements).unwrap();
        assert!(!feature.is_bound());
    }
}
