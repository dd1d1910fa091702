// src/domain/contact.rs

use crate::errors::ServerError;
use std::borrow::Cow;
use std::thread;
use std::time::Duration;

/// The four fields of the contact form, as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    /// Builds a form from decoded `key=value` pairs, ignoring unknown keys.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Cow<'a, str>, Cow<'a, str>)>,
    {
        let mut form = ContactForm::default();
        for (key, value) in pairs {
            match key.as_ref() {
                "name" => form.name = value.into_owned(),
                "email" => form.email = value.into_owned(),
                "phone" => form.phone = value.into_owned(),
                "message" => form.message = value.into_owned(),
                _ => {}
            }
        }
        form
    }

    /// Labels of required fields left blank, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("Full Name", &self.name),
            ("Email Address", &self.email),
            ("Phone Number", &self.phone),
            ("Message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
        .collect()
    }

    pub fn validate(&self) -> Result<(), ServerError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ServerError::BadRequest(format!(
                "Please fill in: {}",
                missing.join(", ")
            )))
        }
    }
}

/// Where the contact panel is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactPhase {
    /// Empty or partially filled form.
    Idle,
    /// "Message Sent!" confirmation; the form returns after `reset_after`.
    Submitted { reset_after: Duration },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactReceipt {
    pub name: String,
    pub email: String,
}

/// Accepts contact requests on behalf of the brokerage.
pub trait ContactDesk: Send + Sync {
    fn submit(&self, form: &ContactForm) -> Result<ContactReceipt, ServerError>;
}

/// Pretends to send: waits a fixed delay and always succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedContactDesk {
    delay: Duration,
}

impl SimulatedContactDesk {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl ContactDesk for SimulatedContactDesk {
    fn submit(&self, form: &ContactForm) -> Result<ContactReceipt, ServerError> {
        form.validate()?;

        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        tracing::info!(name = %form.name, email = %form.email, "contact request received");

        Ok(ContactReceipt {
            name: form.name.clone(),
            email: form.email.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Budi Santoso".into(),
            email: "budi@example.com".into(),
            phone: "+62 812 0000 0000".into(),
            message: "Looking for a villa in Ubud.".into(),
        }
    }

    #[test]
    fn from_pairs_reads_known_fields() {
        let body = "name=Siti+Rahayu&email=siti%40example.com&phone=123&message=Hi%21&extra=x";
        let form = ContactForm::from_pairs(url::form_urlencoded::parse(body.as_bytes()));

        assert_eq!(form.name, "Siti Rahayu");
        assert_eq!(form.email, "siti@example.com");
        assert_eq!(form.phone, "123");
        assert_eq!(form.message, "Hi!");
    }

    #[test]
    fn blank_fields_are_reported_in_order() {
        let form = ContactForm {
            email: "   ".into(),
            message: String::new(),
            ..filled()
        };
        assert_eq!(form.missing_fields(), vec!["Email Address", "Message"]);

        match form.validate() {
            Err(ServerError::BadRequest(msg)) => {
                assert_eq!(msg, "Please fill in: Email Address, Message")
            }
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn simulated_desk_waits_then_succeeds() {
        let desk = SimulatedContactDesk::new(Duration::from_millis(20));
        let started = Instant::now();

        let receipt = desk.submit(&filled()).unwrap();

        assert!(started.elapsed() >= Duration::from_millis(20));
        assert_eq!(receipt.name, "Budi Santoso");
        assert_eq!(receipt.email, "budi@example.com");
    }

    #[test]
    fn simulated_desk_rejects_incomplete_forms_without_waiting() {
        let desk = SimulatedContactDesk::new(Duration::from_secs(5));
        let started = Instant::now();

        assert!(desk.submit(&ContactForm::default()).is_err());
        assert!(started.elapsed() < Duration::from_secs(1));
    }
}
