use tracing::debug;

use crate::{
    config::{NavConfig, Selectors},
    element::{ElementRole, StyleTarget},
    error::PageError,
    style::{DISPLAY, StylePatch},
};

// mobile menu state
//
// not stored anywhere, it is read back from the container's inline display each time.  any
// display other than the open one (including unset) counts as closed
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuVisibility {
    Open,
    Closed,
}

impl MenuVisibility {
    pub fn from_display(display: &str, config: &NavConfig) -> Self {
        if display == config.open_display {
            MenuVisibility::Open
        } else {
            MenuVisibility::Closed
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuVisibility::Open => MenuVisibility::Closed,
            MenuVisibility::Closed => MenuVisibility::Open,
        }
    }
}

// the display write and the marker class always move together
pub fn toggle_patch(current: MenuVisibility, config: &NavConfig) -> (MenuVisibility, StylePatch) {
    let next = current.toggled();

    let patch = match next {
        MenuVisibility::Open => StylePatch::new()
            .set(DISPLAY, config.open_display.as_str())
            .add_class(config.marker_class.as_str()),
        MenuVisibility::Closed => StylePatch::new()
            .set(DISPLAY, config.closed_display.as_str())
            .remove_class(config.marker_class.as_str()),
    };

    (next, patch)
}

// how the click handler gets wired, given which elements the page provided
//
// the button is checked but the container is not: with a button and no container the
// handler is still attached and every click fails.  that is the long-standing page behavior
// and it is kept, the binder logs it so the broken markup gets noticed
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NavBinding {
    // no button, nothing to click
    Disabled,
    Bound,
    // button without a container
    Unguarded,
}

pub fn nav_binding(has_hamburger: bool, has_nav_links: bool) -> NavBinding {
    match (has_hamburger, has_nav_links) {
        (false, _) => NavBinding::Disabled,
        (true, true) => NavBinding::Bound,
        (true, false) => NavBinding::Unguarded,
    }
}

#[derive(Clone, Debug)]
pub struct NavigationToggle<E> {
    container: Option<E>,
    selector: String,
    config: NavConfig,
}

impl<E: StyleTarget> NavigationToggle<E> {
    pub fn new(container: Option<E>, selectors: &Selectors, config: &NavConfig) -> Self {
        NavigationToggle {
            container,
            selector: selectors.nav_links.clone(),
            config: config.clone(),
        }
    }

    fn container(&self) -> Result<&E, PageError> {
        self.container
            .as_ref()
            .ok_or_else(|| PageError::MissingElement {
                role: ElementRole::NavLinks,
                selector: self.selector.clone(),
            })
    }

    pub fn visibility(&self) -> Result<MenuVisibility, PageError> {
        let display = self.container()?.style(DISPLAY)?;
        Ok(MenuVisibility::from_display(&display, &self.config))
    }

    // flip the menu, returning the new state
    pub fn toggle(&self) -> Result<MenuVisibility, PageError> {
        let container = self.container()?;

        let current = self.visibility()?;
        let (next, patch) = toggle_patch(current, &self.config);
        patch.apply(container)?;

        debug!({ from = ?current, to = ?next }, "toggled mobile menu");
        Ok(next)
    }
}
