// Contact form: validation, message composition, and dispatch through an
// injected mail capability. One outbound mail per valid submission, no retries.

pub mod handlers;
pub mod mailer;
pub mod message;
pub mod validation;

pub use mailer::{HttpMailSender, MailError, MailSender, OutgoingMail};
