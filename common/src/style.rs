use crate::{element::StyleTarget, error::PageError};

pub const DISPLAY: &str = "display";
pub const BACKGROUND: &str = "background";
pub const BACKDROP_FILTER: &str = "backdrop-filter";

// a single inline style write
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StyleAssignment {
    pub property: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ClassChange {
    Add(String),
    Remove(String),
}

// the visual mutation a handler decided on, kept separate from the element so that the
// decision can be checked without a page
//
// styles are written before classes, each in insertion order
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StylePatch {
    pub styles: Vec<StyleAssignment>,
    pub classes: Vec<ClassChange>,
}

impl StylePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.styles.push(StyleAssignment {
            property,
            value: value.into(),
        });
        self
    }

    pub fn add_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(ClassChange::Add(class.into()));
        self
    }

    pub fn remove_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(ClassChange::Remove(class.into()));
        self
    }

    pub fn apply<E: StyleTarget>(&self, target: &E) -> Result<(), PageError> {
        for assignment in &self.styles {
            target.set_style(assignment.property, &assignment.value)?;
        }

        for change in &self.classes {
            match change {
                ClassChange::Add(class) => target.add_class(class)?,
                ClassChange::Remove(class) => target.remove_class(class)?,
            }
        }

        Ok(())
    }
}
