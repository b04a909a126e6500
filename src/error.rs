use std::any::Any;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    #[error("deferred action panicked: {0}")]
    ActionPanicked(String),
    #[error("deferred action panicked with a non-string payload")]
    UnknownPanic,
}

impl Error {
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Error {
        if let Some(msg) = payload.downcast_ref::<&'static str>() {
            Error::ActionPanicked((*msg).to_string())
        } else if let Some(msg) = payload.downcast_ref::<String>() {
            Error::ActionPanicked(msg.clone())
        } else {
            Error::UnknownPanic
        }
    }
}
