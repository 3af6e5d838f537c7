pub mod contact;
#[cfg(feature = "server")]
mod relay;

pub use contact::{ send_contact_message, validate_email, ContactForm };
