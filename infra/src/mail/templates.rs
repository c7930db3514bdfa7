//! Mail templates
//!
//! Renders the `register` and `retrypassword` templates into HTML and
//! plain-text bodies. Context values are HTML-escaped.

use accounts_core::domain::value_objects::{Notification, NotificationTemplate};

/// Subject and bodies of a rendered notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMail {
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Render a notification for the given brand
pub fn render_notification(notification: &Notification, brand: &str) -> RenderedMail {
    let (html, text) = match &notification.template {
        NotificationTemplate::Activation {
            name,
            activation_code,
        } => (
            render_register_html(name, activation_code, brand),
            render_register_text(name, activation_code, brand),
        ),
        NotificationTemplate::PasswordReset { name, reset_code } => (
            render_reset_html(name, reset_code, brand),
            render_reset_text(name, reset_code, brand),
        ),
    };

    RenderedMail {
        subject: notification.subject.clone(),
        html,
        text,
    }
}

fn render_register_html(name: &str, code: &str, brand: &str) -> String {
    layout(
        brand,
        &format!(
            "<p>Hello {name},</p>\
             <p>Thank you for registering at {brand}. Use the code below to activate your account:</p>\
             <p style=\"font-size:18px;font-weight:bold;letter-spacing:1px\">{code}</p>\
             <p>The code expires soon. If you did not create this account you can ignore this mail.</p>",
            name = escape_html(name),
            brand = escape_html(brand),
            code = escape_html(code),
        ),
    )
}

fn render_register_text(name: &str, code: &str, brand: &str) -> String {
    format!(
        "Hello {name},\n\n\
         Thank you for registering at {brand}. Use the code below to activate your account:\n\n\
         {code}\n\n\
         The code expires soon. If you did not create this account you can ignore this mail.\n"
    )
}

fn render_reset_html(name: &str, code: &str, brand: &str) -> String {
    layout(
        brand,
        &format!(
            "<p>Hello {name},</p>\
             <p>We received a request to change the password of your {brand} account. \
             Use the code below to choose a new password:</p>\
             <p style=\"font-size:18px;font-weight:bold;letter-spacing:1px\">{code}</p>\
             <p>If you did not ask for this you can ignore this mail.</p>",
            name = escape_html(name),
            brand = escape_html(brand),
            code = escape_html(code),
        ),
    )
}

fn render_reset_text(name: &str, code: &str, brand: &str) -> String {
    format!(
        "Hello {name},\n\n\
         We received a request to change the password of your {brand} account. \
         Use the code below to choose a new password:\n\n\
         {code}\n\n\
         If you did not ask for this you can ignore this mail.\n"
    )
}

fn layout(brand: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html><html><body style=\"font-family:Arial,sans-serif;color:#222\">\
         <h2>{brand}</h2>{body}\
         <hr/><p style=\"font-size:12px;color:#888\">{brand}</p>\
         </body></html>",
        brand = escape_html(brand),
        body = body,
    )
}

/// Escape the characters significant in HTML text and attributes
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
