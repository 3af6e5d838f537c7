use crate::error::ContactError;

pub const SERVICE_ID_VAR: &str = "EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_VAR: &str = "EMAILJS_TEMPLATE_ID";
pub const PUBLIC_KEY_VAR: &str = "EMAILJS_PUBLIC_KEY";

#[derive(Debug, Clone, PartialEq)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

fn required_var(name: &str) -> Result<String, ContactError> {
    let value = std::env::var(name).map_err(|e| ContactError::Config(format!("{}: {}", name, e)))?;
    if value.trim().is_empty() {
        return Err(ContactError::Config(format!("{} is empty", name)));
    }
    Ok(value.trim().to_string())
}

/// `abcd1234` -> `****1234`
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    let visible = chars.len().min(4);
    let hidden = chars.len() - visible;
    "*".repeat(hidden) + &chars[hidden..].iter().collect::<String>()
}

pub fn get_emailjs_config() -> Result<EmailJsConfig, ContactError> {
    let config = EmailJsConfig {
        service_id: required_var(SERVICE_ID_VAR)?,
        template_id: required_var(TEMPLATE_ID_VAR)?,
        public_key: required_var(PUBLIC_KEY_VAR)?,
    };

    log::info!(
        "Using EmailJS service {} / template {} (key: {})",
        config.service_id,
        config.template_id,
        mask_secret(&config.public_key)
    );

    Ok(config)
}
