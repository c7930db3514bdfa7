//! Localized API messages
//!
//! Error and success messages in English and Vietnamese, keyed by a stable
//! message key. Placeholders use `{name}` syntax.

use std::collections::HashMap;

pub use accounts_shared::types::Language;

use accounts_shared::errors::error_codes;

/// A localized error message with its wire code and HTTP status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorMessage {
    pub code: &'static str,
    pub en: &'static str,
    pub vi: &'static str,
    pub http_status: u16,
}

impl ErrorMessage {
    /// Message text for a language
    pub fn text(&self, lang: Language) -> &'static str {
        match lang {
            Language::English => self.en,
            Language::Vietnamese => self.vi,
        }
    }
}

const ERROR_MESSAGES: &[(&str, ErrorMessage)] = &[
    (
        "invalid_id",
        ErrorMessage {
            code: error_codes::INVALID_ID,
            en: "Invalid id: {id}",
            vi: "ID không hợp lệ: {id}",
            http_status: 400,
        },
    ),
    (
        "email_exists",
        ErrorMessage {
            code: error_codes::EMAIL_EXISTS,
            en: "Email {email} already exists. Please use another email",
            vi: "Email {email} đã tồn tại. Vui lòng sử dụng email khác",
            http_status: 409,
        },
    ),
    (
        "invalid_code",
        ErrorMessage {
            code: error_codes::INVALID_CODE,
            en: "The code is invalid or has expired",
            vi: "Mã code không hợp lệ hoặc đã hết hạn",
            http_status: 400,
        },
    ),
    (
        "account_not_found",
        ErrorMessage {
            code: error_codes::ACCOUNT_NOT_FOUND,
            en: "Account does not exist",
            vi: "Tài khoản không tồn tại",
            http_status: 404,
        },
    ),
    (
        "account_already_active",
        ErrorMessage {
            code: error_codes::ACCOUNT_ALREADY_ACTIVE,
            en: "Account has already been activated",
            vi: "Tài khoản đã được kích hoạt",
            http_status: 409,
        },
    ),
    (
        "password_mismatch",
        ErrorMessage {
            code: error_codes::PASSWORD_MISMATCH,
            en: "Password and password confirmation do not match.",
            vi: "Mật khẩu/xác nhận mật khẩu không chính xác.",
            http_status: 400,
        },
    ),
    (
        "notification_failure",
        ErrorMessage {
            code: error_codes::NOTIFICATION_FAILURE,
            en: "Email could not be sent. Please try again later",
            vi: "Không thể gửi email. Vui lòng thử lại sau",
            http_status: 503,
        },
    ),
    (
        "validation_error",
        ErrorMessage {
            code: error_codes::VALIDATION_ERROR,
            en: "Invalid request data",
            vi: "Dữ liệu yêu cầu không hợp lệ",
            http_status: 400,
        },
    ),
    (
        "not_found",
        ErrorMessage {
            code: error_codes::NOT_FOUND,
            en: "The requested resource was not found",
            vi: "Không tìm thấy tài nguyên được yêu cầu",
            http_status: 404,
        },
    ),
    (
        "internal_error",
        ErrorMessage {
            code: error_codes::INTERNAL_ERROR,
            en: "An internal error occurred",
            vi: "Đã xảy ra lỗi hệ thống",
            http_status: 500,
        },
    ),
];

const SUCCESS_MESSAGES: &[(&str, &str, &str)] = &[
    (
        "registered",
        "Account created. Please check your email to activate it",
        "Tạo tài khoản thành công. Vui lòng kiểm tra email để kích hoạt",
    ),
    (
        "registered_without_mail",
        "Account created, but the activation email could not be sent. Please request a new one",
        "Tạo tài khoản thành công nhưng không gửi được email kích hoạt. Vui lòng yêu cầu gửi lại",
    ),
    (
        "activated",
        "Account activated successfully",
        "Kích hoạt tài khoản thành công",
    ),
    (
        "activation_resent",
        "A new activation code has been sent to your email",
        "Mã kích hoạt mới đã được gửi tới email của bạn",
    ),
    (
        "reset_requested",
        "A password reset code has been sent to your email",
        "Mã đặt lại mật khẩu đã được gửi tới email của bạn",
    ),
    (
        "password_changed",
        "Password changed successfully",
        "Đổi mật khẩu thành công",
    ),
    ("account_updated", "Account updated", "Cập nhật tài khoản thành công"),
    ("account_removed", "Account removed", "Xóa tài khoản thành công"),
];

/// Look up an error message by key
pub fn get_error_message(key: &str) -> Option<&'static ErrorMessage> {
    ERROR_MESSAGES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, message)| message)
}

/// Look up a success message by key; unknown keys yield the key itself
pub fn success_message(key: &str, lang: Language) -> String {
    SUCCESS_MESSAGES
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, en, vi)| match lang {
            Language::English => (*en).to_string(),
            Language::Vietnamese => (*vi).to_string(),
        })
        .unwrap_or_else(|| key.to_string())
}

/// Substitute `{name}` placeholders
pub fn format_message(template: &str, params: &HashMap<&str, String>) -> String {
    let mut result = template.to_string();
    for (key, value) in params {
        let placeholder = format!("{{{}}}", key);
        result = result.replace(&placeholder, value);
    }
    result
}
