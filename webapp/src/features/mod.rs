use common::{element::PageElements, error::PageError};

use crate::dom::DomElement;

pub mod header;
pub mod nav;
pub mod smooth_scroll;

pub use header::HeaderScrollFeature;
pub use nav::NavigationFeature;
pub use smooth_scroll::SmoothScrollFeature;

// a page behavior that can be attached to and detached from the page
//
// elements are looked up once by the bootstrap and handed in, so a feature never queries the
// document for its own markup.  a feature whose elements are missing binds nothing
pub trait Feature {
    fn name(&self) -> &'static str;

    fn bind(&mut self, elements: &PageElements<DomElement>) -> Result<(), PageError>;

    // idempotent
    fn unbind(&mut self);

    fn is_bound(&self) -> bool;
}
