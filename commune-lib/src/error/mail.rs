//! MailError for the mass-mail composer

/// Error type for draft validation in the mass-mail composer.
///
/// Delivery itself cannot fail here: sending is mocked until an email
/// service is configured.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MailError {
    /// No recipients matched the recipient query.
    #[error("No recipients selected")]
    NoRecipients,

    /// The subject line is empty.
    #[error("Subject line is empty")]
    MissingSubject,

    /// The message body is empty or whitespace only.
    #[error("Message body is empty")]
    MissingBody,
}
