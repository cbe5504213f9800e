use std::cell::RefCell;

use anyhow::Result;
use tracing::{Level, debug, info, instrument};

use common::{LOADED_MESSAGE, config::PageConfig, element::PageElements};

use crate::{
    dom::{self, DomElement, DomPage},
    features::{Feature, HeaderScrollFeature, NavigationFeature, SmoothScrollFeature},
    listener,
};

// the attached page behaviors
//
// listeners live as long as their feature, so the app is parked in a thread local for the
// rest of the page's life.  wasm in the browser is single threaded, so there is only ever one
thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[derive(Default)]
pub struct App {
    features: Vec<Box<dyn Feature>>,
}

impl App {
    pub fn mount(
        &mut self,
        mut feature: Box<dyn Feature>,
        elements: &PageElements<DomElement>,
    ) -> Result<()> {
        let name = feature.name();
        feature
            .bind(elements)
            .map_err(|err| anyhow::Error::msg(format!("failed to bind {name}: {err}")))?;

        debug!({ feature = name, bound = feature.is_bound() }, "mounted page feature");
        self.features.push(feature);
        Ok(())
    }

    // in order; the first binding failure aborts the features after it
    pub fn mount_all(
        &mut self,
        features: Vec<Box<dyn Feature>>,
        elements: &PageElements<DomElement>,
    ) -> Result<()> {
        for feature in features {
            self.mount(feature, elements)?;
        }
        Ok(())
    }

    pub fn mounted(&self) -> Vec<&'static str> {
        self.features.iter().map(|feature| feature.name()).collect()
    }

    pub fn unmount(&mut self) {
        for feature in self.features.iter_mut() {
            feature.unbind();
        }
        self.features.clear();
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.unmount();
    }
}

// fixed order: navigation, smooth scroll, header
pub fn page_features(config: &PageConfig) -> Vec<Box<dyn Feature>> {
    vec![
        Box::new(NavigationFeature::new(&config.selectors, &config.nav)),
        Box::new(SmoothScrollFeature::new(&config.smooth_scroll)),
        Box::new(HeaderScrollFeature::new(&config.header)),
    ]
}

// a wasm module usually finishes instantiating after DOMContentLoaded has already fired, so
// only wait when the document is genuinely still loading
pub fn wait_for_dom(ready_state: &str) -> bool {
    ready_state == "loading"
}

pub fn launch(config: PageConfig) -> Result<()> {
    let document = dom::document()?;

    if !wait_for_dom(&document.ready_state()) {
        return start(&config);
    }

    debug!("document still loading, waiting for DOMContentLoaded");
    listener::listen_once(&document, "DOMContentLoaded", move |_| {
        if let Err(err) = start(&config) {
            crate::report(err);
        }
    })?;

    Ok(())
}

#[instrument(level=Level::DEBUG, skip_all)]
fn start(config: &PageConfig) -> Result<()> {
    let document = dom::document()?;

    let elements = PageElements::resolve(&DomPage::new(document), &config.selectors);

    let mut app = App::default();
    app.mount_all(page_features(config), &elements)?;

    // replacing a previous app drops it, which detaches its listeners
    APP.with(|cell| cell.replace(Some(app)));

    info!("page behaviors attached");
    gloo_console::log!(LOADED_MESSAGE);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use common::error::PageError;

    use super::*;

    type Log = Rc<RefCell<Vec<&'static str>>>;

    struct Recording {
        name: &'static str,
        fail: bool,
        log: Log,
        bound: bool,
    }

    impl Recording {
        fn boxed(name: &'static str, fail: bool, log: &Log) -> Box<dyn Feature> {
            Box::new(Recording {
                name,
                fail,
                log: log.clone(),
                bound: false,
            })
        }
    }

    impl Feature for Recording {
        fn name(&self) -> &'static str {
            self.name
        }

        fn bind(&mut self, _: &PageElements<DomElement>) -> Result<(), PageError> {
            self.log.borrow_mut().push(self.name);
            if self.fail {
                return Err(PageError::dom("bind", "refused"));
            }
            self.bound = true;
            Ok(())
        }

        fn unbind(&mut self) {
            self.bound = false;
        }

        fn is_bound(&self) -> bool {
            self.bound
        }
    }

    fn empty_page() -> PageElements<DomElement> {
        PageElements {
            hamburger: None,
            nav_links: None,
            header: None,
            anchors: Vec::new(),
        }
    }

    #[test]
    fn waits_only_while_loading() {
        assert!(wait_for_dom("loading"));
        assert!(!wait_for_dom("interactive"));
        assert!(!wait_for_dom("complete"));
    }

    #[test]
    fn first_bind_failure_aborts_the_rest() {
        let log = Log::default();
        let mut app = App::default();

        let result = app.mount_all(
            vec![
                Recording::boxed("first", false, &log),
                Recording::boxed("broken", true, &log),
                Recording::boxed("never", false, &log),
            ],
            &empty_page(),
        );

        let err = result.unwrap_err();
        assert!(err.to_string().contains("failed to bind broken"));
        assert_eq!(*log.borrow(), vec!["first", "broken"]);
        assert_eq!(app.mounted(), vec!["first"]);
    }

    #[test]
    fn page_features_mount_in_fixed_order() {
        let features = page_features(&PageConfig::default());
        let names: Vec<_> = features.iter().map(|feature| feature.name()).collect();

        assert_eq!(names, vec!["navigation", "smooth-scroll", "header-scroll"]);
    }

    #[test]
    fn bare_page_mounts_everything_unbound() {
        let mut app = App::default();

        app.mount_all(page_features(&PageConfig::default()), &empty_page())
            .unwrap();

        assert_eq!(app.mounted(), vec!["navigation", "smooth-scroll", "header-scroll"]);
        assert!(app.features.iter().all(|feature| !feature.is_bound()));
    }
}
