//! Invoice email templates.
//!
//! Each payment status has its own wording and detail rows; the layout around them is
//! shared (`templates/emails/invoice.*`). All detail values go through the per-field
//! resolvers on [`OrderDetails`], so missing data never stops a render.

use askama::Template;
use chrono::NaiveDate;

use crate::errors::Result;
use crate::models::email::RenderedEmail;
use crate::models::invoice::{Invoice, OrderDetails, PaymentStatus};

const SIGNATURE: &str = "MYBIZ - Your Business Managing Partner";
const SIMPLE_SUBJECT: &str = "Your Invoice from MYBIZ";

/// Status-specific wording, before layout.
#[derive(Debug)]
struct InvoiceContent {
    subject: String,
    intro: String,
    rows: Vec<(&'static str, String)>,
    closing: &'static str,
}

#[derive(Template, Debug)]
#[template(path = "emails/invoice.html")]
struct InvoiceHtml<'a> {
    badge: &'a str,
    color: &'a str,
    customer_name: &'a str,
    content: &'a InvoiceContent,
    signature: &'a str,
}

#[derive(Template, Debug)]
#[template(path = "emails/invoice.txt")]
struct InvoiceText<'a> {
    badge: &'a str,
    customer_name: &'a str,
    content: &'a InvoiceContent,
    signature: &'a str,
}

#[derive(Template, Debug)]
#[template(path = "emails/invoice_simple.html")]
struct SimpleInvoiceHtml<'a> {
    signature: &'a str,
}

#[derive(Template, Debug)]
#[template(path = "emails/invoice_simple.txt")]
struct SimpleInvoiceText<'a> {
    signature: &'a str,
}

pub struct InvoiceService;

impl InvoiceService {
    pub fn render_invoice_email(invoice: &Invoice, today: NaiveDate) -> Result<RenderedEmail> {
        let status = invoice.status();
        let details = &invoice.order_details;
        let number = invoice.invoice_number.as_str();

        let content = match status {
            PaymentStatus::Full => fully_paid(number, details),
            PaymentStatus::Due => payment_due(number, details, today),
            PaymentStatus::Partial => partially_paid(number, details),
        };

        let text = InvoiceText {
            badge: status.badge(),
            customer_name: invoice.customer_name(),
            content: &content,
            signature: SIGNATURE,
        }
        .render()?;

        let html = InvoiceHtml {
            badge: status.badge(),
            color: status.badge_color(),
            customer_name: invoice.customer_name(),
            content: &content,
            signature: SIGNATURE,
        }
        .render()?;

        Ok(RenderedEmail {
            subject: content.subject,
            text,
            html,
        })
    }

    /// Generic message used when the request carries only a recipient and a document URL.
    pub fn render_simple_invoice_email() -> Result<RenderedEmail> {
        Ok(RenderedEmail {
            subject: SIMPLE_SUBJECT.to_string(),
            text: SimpleInvoiceText { signature: SIGNATURE }.render()?,
            html: SimpleInvoiceHtml { signature: SIGNATURE }.render()?,
        })
    }
}

fn fully_paid(number: &str, details: &OrderDetails) -> InvoiceContent {
    InvoiceContent {
        subject: format!("Payment Received: Invoice #{} - FULLY PAID", number),
        intro: format!(
            "Thank you for your payment. Invoice #{} has been paid in full.",
            number
        ),
        rows: vec![
            ("Invoice Number", number.to_string()),
            ("Amount Paid", details.total()),
            ("Payment Method", details.payment_method()),
        ],
        closing: "Your invoice is attached for your records.",
    }
}

fn payment_due(number: &str, details: &OrderDetails, today: NaiveDate) -> InvoiceContent {
    let due_date = details.due_date(today);
    InvoiceContent {
        subject: format!("Payment Reminder: Invoice #{} - PAYMENT DUE", number),
        intro: format!(
            "This is a reminder that payment for invoice #{} is due by {}.",
            number, due_date
        ),
        rows: vec![
            ("Invoice Number", number.to_string()),
            ("Total Amount", details.total()),
            ("Amount Due", details.due_amount()),
            ("Due Date", due_date),
        ],
        closing: "Please complete the payment by the due date. The invoice is attached for your reference.",
    }
}

fn partially_paid(number: &str, details: &OrderDetails) -> InvoiceContent {
    InvoiceContent {
        subject: format!("Partial Payment Received: Invoice #{} - PARTIALLY PAID", number),
        intro: format!(
            "Thank you for your payment. We have received a partial payment for invoice #{}.",
            number
        ),
        rows: vec![
            ("Invoice Number", number.to_string()),
            ("Total Amount", details.total()),
            ("Amount Paid", details.paid_amount()),
            ("Balance Due", details.due_amount()),
            ("Payment Method", details.payment_method()),
        ],
        closing: "Please pay the remaining balance at your earliest convenience. The invoice is attached for your reference.",
    }
}
