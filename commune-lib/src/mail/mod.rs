//! The mass-mail composer: recipient selection and draft sending.
//!
//! Delivery is mocked until an email service is configured; sending
//! validates the draft, logs, and reports how many recipients it would
//! have reached.

mod draft;
mod recipients;

pub use draft::Attachment;
pub use draft::Draft;
pub use draft::SendReport;
pub use draft::send;
pub use recipients::Recipient;
pub use recipients::RecipientKind;
pub use recipients::RecipientQuery;
pub use recipients::collect_recipients;
