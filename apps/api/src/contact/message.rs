use maud::{html, DOCTYPE};

use crate::contact::mailer::OutgoingMail;
use crate::contact::validation::ContactSubmission;

/// Builds the plain-text and HTML renderings of a submission. The submitter
/// becomes the reply-to address; user text is escaped in the HTML part.
pub fn compose_message(submission: &ContactSubmission, from: &str, to: &str) -> OutgoingMail {
    OutgoingMail {
        from: from.to_string(),
        to: to.to_string(),
        reply_to: submission.email.clone(),
        subject: format!("Contact form: {}", submission.subject),
        text: render_text(submission),
        html: render_html(submission),
    }
}

fn render_text(s: &ContactSubmission) -> String {
    format!(
        "New contact form submission\n\n\
         Name: {}\n\
         Email: {}\n\
         Subject: {}\n\n\
         Message:\n{}\n",
        s.name, s.email, s.subject, s.message
    )
}

fn render_html(s: &ContactSubmission) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            body {
                h2 { "New contact form submission" }
                p { strong { "Name: " } (s.name) }
                p {
                    strong { "Email: " }
                    a href={ "mailto:" (s.email) } { (s.email) }
                }
                p { strong { "Subject: " } (s.subject) }
                h3 { "Message" }
                @for line in s.message.lines() {
                    p { (line) }
                }
            }
        }
    }
    .into_string()
}
