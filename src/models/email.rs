use bytes::Bytes;

/// A file carried alongside an outgoing message.
#[derive(Debug, Clone)]
pub struct EmailAttachment {
    pub filename: String,
    pub content: Bytes,
    pub content_type: String,
}

impl EmailAttachment {
    pub fn pdf(filename: impl Into<String>, content: Bytes) -> Self {
        Self {
            filename: filename.into(),
            content,
            content_type: mime::APPLICATION_PDF.to_string(),
        }
    }
}

/// A rendered message ready for a mail transport. Built per request and dropped after sending.
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
    pub attachments: Vec<EmailAttachment>,
}

/// Subject and bodies produced by a template, before a recipient is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl RenderedEmail {
    pub fn into_message(self, to: impl Into<String>, attachments: Vec<EmailAttachment>) -> EmailMessage {
        EmailMessage {
            to: to.into(),
            subject: self.subject,
            text: self.text,
            html: self.html,
            attachments,
        }
    }
}
