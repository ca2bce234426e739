//! Mail drafts, validation, and the mock send.

use super::Recipient;
use crate::error::MailError;

/// An attachment carried by name and size only.
///
/// File bytes never pass through here; attachment handling belongs to the
/// surrounding application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub name: String,
    pub size_bytes: u64,
}

impl Attachment {
    /// Creates an attachment reference.
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    /// Human-readable size: bytes below 1 KB, otherwise KB or MB with one
    /// decimal.
    pub fn size_label(&self) -> String {
        const KB: u64 = 1024;
        const MB: u64 = 1024 * 1024;
        match self.size_bytes {
            b if b < KB => format!("{b} B"),
            b if b < MB => format!("{:.1} KB", b as f64 / KB as f64),
            b => format!("{:.1} MB", b as f64 / MB as f64),
        }
    }
}

/// A mass-mail draft under composition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub subject: String,
    pub body: String,
    pub attachments: Vec<Attachment>,
}

impl Draft {
    /// Creates a draft with a subject and body.
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
            attachments: Vec::new(),
        }
    }

    /// Adds an attachment reference (builder pattern).
    pub fn attach(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Checks the draft is complete enough to send.
    ///
    /// Fails when no recipients matched, the subject is empty, or the body
    /// is blank after trimming.
    pub fn validate(&self, recipients: &[Recipient]) -> Result<(), MailError> {
        if recipients.is_empty() {
            return Err(MailError::NoRecipients);
        }
        if self.subject.is_empty() {
            return Err(MailError::MissingSubject);
        }
        if self.body.trim().is_empty() {
            return Err(MailError::MissingBody);
        }
        Ok(())
    }
}

/// What a (mock) send produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReport {
    pub recipient_count: usize,
}

/// Validates and "sends" a draft.
///
/// No mail leaves the process: the send is logged and reported so the flow
/// can be exercised end to end before a delivery service exists.
pub fn send(draft: &Draft, recipients: &[Recipient]) -> Result<SendReport, MailError> {
    draft.validate(recipients)?;
    log::info!(
        "mock send '{}' to {} recipients ({} attachments)",
        draft.subject,
        recipients.len(),
        draft.attachments.len()
    );
    Ok(SendReport {
        recipient_count: recipients.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipient() -> Recipient {
        Recipient {
            name: "Helga".into(),
            email: "helga@skoli.is".into(),
        }
    }

    #[test]
    fn test_validation_order() {
        let draft = Draft::new("", "");
        assert_eq!(draft.validate(&[]), Err(MailError::NoRecipients));
        assert_eq!(draft.validate(&[recipient()]), Err(MailError::MissingSubject));

        let draft = Draft::new("Fundur", "   \n ");
        assert_eq!(draft.validate(&[recipient()]), Err(MailError::MissingBody));
    }

    #[test]
    fn test_send_reports_recipient_count() {
        let draft = Draft::new("Fundur", "Fundur á morgun kl. 9.");
        let report = send(&draft, &[recipient()]).unwrap();
        assert_eq!(report.recipient_count, 1);
    }

    #[test]
    fn test_size_labels() {
        assert_eq!(Attachment::new("a", 512).size_label(), "512 B");
        assert_eq!(Attachment::new("a", 2048).size_label(), "2.0 KB");
        assert_eq!(Attachment::new("a", 3 * 1024 * 1024).size_label(), "3.0 MB");
    }
}
