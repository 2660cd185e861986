use serde::{Deserialize, Serialize};
use urlencoding::encode;

use crate::MailSettings;

/// Fields read from the contact form.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct MailDraft {
    /// Sender's name.
    pub name: String,
    /// Sender's reply address.
    pub email: String,
    /// Message body.
    pub message: String,
}

impl MailDraft {
    /// Creates a new [`MailDraft`].
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> MailDraft {
        MailDraft {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Subject line, e.g. `Portfolio message from Ann`.
    pub fn subject(&self, settings: &MailSettings) -> String {
        format!("{} {}", settings.subject_prefix, self.name)
    }

    /// Body naming the sender above the message.
    pub fn body(&self) -> String {
        format!("From: {} <{}>\n\n{}", self.name, self.email, self.message)
    }

    /// A `mailto:` URI that opens this draft in the visitor's mail client.
    ///
    /// Subject and body are percent-encoded; the address is used verbatim.
    pub fn mailto(&self, settings: &MailSettings) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            settings.address,
            encode(&self.subject(settings)),
            encode(&self.body())
        )
    }
}
