use crate::application::ports::email::{CompanyProfile, EmailAttachment};
use chrono::{DateTime, Utc};
use std::fmt::Write;

/// HTML body of an enquiry reply. `message` is admin-authored HTML and is
/// inserted as is; everything else is escaped.
pub(super) fn render_reply(
    reference: &str,
    message: &str,
    attachments: &[EmailAttachment],
    company: &CompanyProfile,
    now: DateTime<Utc>,
) -> String {
    let mut html = String::with_capacity(2048);
    let company_name = escape(&company.name);

    let _ = write!(
        html,
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>Enquiry Reply - {company_name}</title></head>\
         <body style=\"margin:0;padding:0;background-color:#f9fafb;font-family:Arial,sans-serif;\">\
         <div style=\"max-width:600px;margin:0 auto;padding:20px;background-color:#ffffff;\">\
         <h2 style=\"color:#1e40af;\">Re: Your Enquiry - {reference}</h2>\
         <p style=\"color:#6b7280;font-size:13px;\">Reference <strong>{reference}</strong> &middot; {date}</p>\
         <div style=\"margin:20px 0;line-height:1.6;color:#374151;\">{message}</div>",
        reference = escape(reference),
        date = now.format("%B %-d, %Y"),
    );

    if !attachments.is_empty() {
        html.push_str("<h3 style=\"color:#1f2937;font-size:16px;\">Attached Files</h3><ul>");
        for file in attachments {
            let _ = write!(
                html,
                "<li><a href=\"{url}\">{name}</a></li>",
                url = escape(&file.url),
                name = escape(&file.filename),
            );
        }
        html.push_str("</ul>");
    }

    let _ = write!(
        html,
        "<hr style=\"border:none;border-top:1px solid #e5e7eb;margin:30px 0 15px;\">\
         <p style=\"color:#1f2937;font-weight:600;margin:0;\">{company_name}</p>\
         <p style=\"color:#6b7280;font-size:13px;margin:4px 0;\">{email} &middot; {phone}</p>\
         <p style=\"color:#6b7280;font-size:13px;margin:0;\">{address}</p>\
         </div></body></html>",
        email = escape(&company.email),
        phone = escape(&company.phone),
        address = escape(&company.address),
    );

    html
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
