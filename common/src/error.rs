use thiserror::Error;

use crate::element::ElementRole;

// page behavior errors
//
// there is no recovery anywhere in the page scripts, so this only needs to say what broke
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PageError {
    #[error("no {role} element on the page (selector `{selector}`)")]
    MissingElement { role: ElementRole, selector: String },

    #[error("dom call {op} failed: {detail}")]
    Dom { op: &'static str, detail: String },
}

impl PageError {
    pub fn dom(op: &'static str, detail: impl Into<String>) -> Self {
        PageError::Dom {
            op,
            detail: detail.into(),
        }
    }
}
