use dioxus::prelude::*;
use serde::{ Deserialize, Serialize };
use crate::error::ContactError;

lazy_static::lazy_static! {
    static ref EMAIL_PATTERN: regex::Regex =
        regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles");
}

pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Required fields first, then the address shape.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.is_empty() || self.message.is_empty() {
            return Err(ContactError::Validation("Please fill in all fields".to_string()));
        }
        if !validate_email(&self.email) {
            return Err(ContactError::Validation("Please enter a valid email address".to_string()));
        }
        Ok(())
    }
}

/// Relays a contact message through EmailJS.
#[server]
pub async fn send_contact_message(form: ContactForm) -> Result<(), ServerFnError> {
    form.validate()?;
    let config = crate::configs::get_emailjs_config()?;
    super::relay::deliver(&config, &form).await?;
    log::info!("Contact message from {} delivered", form.email);
    Ok(())
}
