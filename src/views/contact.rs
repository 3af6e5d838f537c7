use dioxus::prelude::*;
use crate::content::{ CONTACT_CARDS, INSTAGRAM_URL, LINKEDIN_URL };
use crate::error::ContactError;
use crate::server::{ send_contact_message, ContactForm };
use crate::utils::{ clock::now_ms, use_deadline_timer, ThemeState };

pub const MODAL_CLOSE_MS: u64 = 300;
pub const RESULT_DISPLAY_MS: u64 = 2_200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitStatus {
    Success,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

/// Contact modal lifecycle: editing, sending, result, timed close.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactModal {
    visible: bool,
    sending: bool,
    status: Option<SubmitStatus>,
    error: Option<String>,
    form: ContactForm,
    submission: u64,
    close_at: Option<u64>,
    closing_until: Option<u64>,
}

impl ContactModal {
    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn is_closing(&self) -> bool {
        self.closing_until.is_some()
    }

    pub fn status(&self) -> Option<SubmitStatus> {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Editing any field clears a shown error.
    pub fn update(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.form.name = value,
            FormField::Email => self.form.email = value,
            FormField::Message => self.form.message = value,
        }
        self.error = None;
    }

    /// Validates and enters the sending phase; returns the submission number
    /// and the form to deliver.
    pub fn begin_submit(&mut self) -> Option<(u64, ContactForm)> {
        if self.sending {
            return None;
        }
        if let Err(e) = self.form.validate() {
            self.error = Some(e.user_message());
            return None;
        }
        self.sending = true;
        self.error = None;
        self.submission += 1;
        Some((self.submission, self.form.clone()))
    }

    /// Records the delivery result and schedules the auto-close.
    ///
    /// Results for a submission that is no longer in flight are dropped.
    pub fn finish_submit(&mut self, submission: u64, result: Result<(), String>, now: u64) {
        if !self.sending || submission != self.submission {
            log::debug!("Dropping result of stale contact submission {}", submission);
            return;
        }
        self.sending = false;
        match result {
            Ok(()) => {
                self.status = Some(SubmitStatus::Success);
                self.form = ContactForm::default();
            }
            Err(message) => {
                self.status = Some(SubmitStatus::Error);
                self.error = Some(message);
            }
        }
        self.close_at = Some(now + RESULT_DISPLAY_MS);
    }

    pub fn close(&mut self, now: u64) {
        if self.visible && self.closing_until.is_none() {
            self.close_at = None;
            self.closing_until = Some(now + MODAL_CLOSE_MS);
        }
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.closing_until.or(self.close_at)
    }

    pub fn advance(&mut self, now: u64) {
        if let Some(at) = self.close_at {
            if at <= now {
                self.close_at = None;
                self.closing_until = Some(at + MODAL_CLOSE_MS);
            }
        }
        if let Some(until) = self.closing_until {
            if until <= now {
                self.reset();
            }
        }
    }

    /// Hides the modal. Field contents and the submission counter survive.
    fn reset(&mut self) {
        let form = std::mem::take(&mut self.form);
        *self = Self { form, submission: self.submission, ..Self::default() };
    }
}

#[component]
fn ContactFormBody(mut modal: Signal<ContactModal>, mode: &'static str) -> Element {
    let form = modal.read().form().clone();
    let error = modal.read().error().map(str::to_string);
    let sending = modal.read().is_sending();

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some((submission, form)) = modal.write().begin_submit() else {
            return;
        };
        spawn(async move {
            let result = send_contact_message(form).await.map_err(|e| {
                log::error!("Email send failed: {}", e);
                ContactError::Delivery(e.to_string()).user_message()
            });
            modal.write().finish_submit(submission, result, now_ms());
        });
    };

    rsx! {
        button {
            class: "close-button",
            aria_label: "Close modal",
            onclick: move |_| modal.write().close(now_ms()),
            "✕"
        }
        h2 { "Get In Touch" }
        p { "Have a project in mind or want to collaborate? Feel free to reach out!" }
        if let Some(message) = error {
            div { class: "error-message shake-animation",
                span { "{message}" }
            }
        }
        form { class: "contact-form", onsubmit: submit,
            div { class: "form-group",
                input {
                    r#type: "text",
                    name: "name",
                    placeholder: "Your Name",
                    value: "{form.name}",
                    oninput: move |evt| modal.write().update(FormField::Name, evt.value()),
                }
            }
            div { class: "form-group",
                input {
                    r#type: "email",
                    name: "email",
                    placeholder: "Your Email",
                    value: "{form.email}",
                    oninput: move |evt| modal.write().update(FormField::Email, evt.value()),
                }
            }
            div { class: "form-group",
                textarea {
                    name: "message",
                    placeholder: "Your Message",
                    value: "{form.message}",
                    oninput: move |evt| modal.write().update(FormField::Message, evt.value()),
                }
            }
            button {
                r#type: "submit",
                class: "submit-btn {mode}",
                disabled: sending,
                if sending { "Sending..." } else { "Send Message" }
            }
        }
    }
}

/// Class, heading and body text for the result panel.
fn feedback(status: SubmitStatus, error: Option<&str>) -> (&'static str, &'static str, String) {
    match status {
        SubmitStatus::Success => (
            "submission-feedback success",
            "Thank You!",
            "Your message has been submitted successfully!".to_string(),
        ),
        SubmitStatus::Error => (
            "submission-feedback error shake-animation",
            "Delivery Failed",
            error.unwrap_or("Failed to deliver your message. Please try again later.").to_string(),
        ),
    }
}

#[component]
fn SubmissionFeedback(status: SubmitStatus, error: Option<String>) -> Element {
    let (class, title, text) = feedback(status, error.as_deref());
    rsx! {
        div { class,
            h3 { "{title}" }
            p { "{text}" }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let theme = use_context::<Signal<ThemeState>>();
    let mut modal = use_signal(ContactModal::default);

    use_deadline_timer(
        move || modal.read().next_deadline(),
        use_callback(move |now: u64| modal.write().advance(now))
    );

    let mode = theme().mode_class();
    let snapshot = modal.read().clone();
    let closing = if snapshot.is_closing() { "closing" } else { "" };

    let body = if snapshot.is_sending() {
        rsx!(
            div { class: "loading-container",
                div { class: "dots-loader",
                    div { class: "dot" }
                    div { class: "dot" }
                    div { class: "dot" }
                }
                p { "Sending your message..." }
            }
        )
    } else if let Some(status) = snapshot.status() {
        rsx!(SubmissionFeedback { status, error: snapshot.error().map(str::to_string) })
    } else {
        rsx!(ContactFormBody { modal, mode })
    };

    rsx! {
        div { class: "app-container {mode}",
            section { id: "contact", class: "contact-section {mode}",
                div { class: "contact-hero",
                    h1 { "Let's Connect" }
                    p { "Have an idea, project, or just want to say hi? I'd love to hear from you." }
                    button {
                        class: "cta-button {mode}",
                        aria_label: "Contact me",
                        onclick: move |_| modal.write().open(),
                        "Contact Me"
                    }
                }

                div { class: "contact-grid",
                    for card in CONTACT_CARDS {
                        div { class: "contact-card", key: "{card.title}",
                            h3 { "{card.title}" }
                            p { "{card.content}" }
                        }
                    }
                }

                div { class: "lets-talk",
                    h2 { "Let's Talk" }
                    p { "Connect with me on social media" }
                    div { class: "social-links",
                        a { class: "social-link", href: INSTAGRAM_URL, target: "_blank", rel: "noopener noreferrer", "Instagram" }
                        a { class: "social-link", href: LINKEDIN_URL, target: "_blank", rel: "noopener noreferrer", "LinkedIn" }
                    }
                }
            }

            if snapshot.is_visible() {
                div {
                    class: "modal-overlay {closing}",
                    onclick: move |_| modal.write().close(now_ms()),
                    div {
                        class: "modal-content {mode} {closing}",
                        onclick: move |evt| evt.stop_propagation(),
                        {body}
                    }
                }
            }
        }
    }
}
