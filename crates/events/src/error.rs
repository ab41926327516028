use thiserror::Error;

#[derive(Error, Debug)]
pub enum EventsError {
    #[error("Failed to serialize event message: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for EventsError {
    fn from(err: serde_json::Error) -> Self {
        EventsError::Serialization(err.to_string())
    }
}
