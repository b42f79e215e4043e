use crate::core::elements::ElementError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("Atom {index} cannot be perceived: {source}")]
    UnknownElement {
        index: usize,
        #[source]
        source: ElementError,
    },

    #[error("Bond references atom {index}, but only {atom_count} atoms are present")]
    AtomOutOfRange { index: usize, atom_count: usize },

    #[error("Internal logic error: {0}")]
    Internal(String),
}

impl EngineError {
    pub(crate) fn unknown_element(index: usize) -> impl FnOnce(ElementError) -> Self {
        move |source| Self::UnknownElement { index, source }
    }
}
