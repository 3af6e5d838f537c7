use serde::Serialize;
use crate::configs::EmailJsConfig;
use crate::error::ContactError;
use super::contact::ContactForm;

const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactForm,
}

pub async fn deliver(config: &EmailJsConfig, form: &ContactForm) -> Result<(), ContactError> {
    let request = SendRequest {
        service_id: &config.service_id,
        template_id: &config.template_id,
        user_id: &config.public_key,
        template_params: form,
    };

    let response = reqwest::Client::new()
        .post(EMAILJS_SEND_URL)
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            log::error!("Email send failed: {}", e);
            ContactError::Delivery(e.to_string())
        })?;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        log::error!("Email delivery rejected: {} {}", status, body);
        return Err(ContactError::Delivery(format!("status {}: {}", status, body)));
    }

    Ok(())
}
