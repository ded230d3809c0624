pub mod document_service;
pub mod invoice_service;
pub mod mail_service;
pub mod otp_service;
