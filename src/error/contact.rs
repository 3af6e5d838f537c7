use std::fmt::{ Display, Formatter };
use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum ContactError {
    Validation(String),
    Config(String),
    Delivery(String),
}

impl ContactError {
    /// Text shown inside the contact modal.
    pub fn user_message(&self) -> String {
        match self {
            ContactError::Validation(msg) => msg.clone(),
            ContactError::Config(_) | ContactError::Delivery(_) =>
                "Failed to send message. Please check your email or try again later.".to_string(),
        }
    }
}

impl Display for ContactError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactError::Validation(msg) => write!(f, "Validation Error: {}", msg),
            ContactError::Config(msg) => write!(f, "Configuration Error: {}", msg),
            ContactError::Delivery(msg) => write!(f, "Delivery Error: {}", msg),
        }
    }
}

impl From<ContactError> for ServerFnError {
    fn from(err: ContactError) -> ServerFnError {
        ServerFnError::ServerError(err.to_string())
    }
}
