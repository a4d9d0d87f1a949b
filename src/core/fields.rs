use crate::domain::form::{FieldKind, ValidationOutcome};
use regex::Regex;
use std::sync::LazyLock;

pub const REQUIRED_FIELD_MESSAGE: &str = "Este campo é obrigatório.";
pub const INVALID_EMAIL_MESSAGE: &str = "Por favor, insira um email válido.";
pub const INVALID_PHONE_MESSAGE: &str = "Por favor, insira um telefone válido.";

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));
// 只接受 ASCII 數字
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\([0-9]{2}\)(?-u:\s)[0-9]{4,5}-[0-9]{4}$").expect("phone pattern")
});
static LANDLINE_MASK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{2})(\d{4})(\d{4})").expect("landline mask"));
static MOBILE_MASK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{2})(\d{5})(\d{4})").expect("mobile mask"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// 只接受 `(DD) DDDD-DDDD` 或 `(DD) DDDDD-DDDD`
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

/// 驗證單一欄位；規則依序檢查，第一個失敗的規則決定訊息
pub fn validate_value(kind: FieldKind, required: bool, raw: &str) -> ValidationOutcome {
    let value = raw.trim();

    if required && value.is_empty() {
        return ValidationOutcome::invalid(REQUIRED_FIELD_MESSAGE);
    }

    // 型別規則只套用在有值的欄位
    if value.is_empty() {
        return ValidationOutcome::valid();
    }

    match kind {
        FieldKind::Email if !is_valid_email(value) => {
            ValidationOutcome::invalid(INVALID_EMAIL_MESSAGE)
        }
        FieldKind::Tel if !is_valid_phone(value) => {
            ValidationOutcome::invalid(INVALID_PHONE_MESSAGE)
        }
        _ => ValidationOutcome::valid(),
    }
}

/// 輸入時的電話遮罩：移除非數字後依位數重新插入分隔符
///
/// 10 位以內用 2-4-4 分組，超過 10 位用 2-5-4。位數不足以套用遮罩時
/// 回傳純數字，多出的位數保留在遮罩之後。
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    let mask = if digits.len() <= 10 {
        &*LANDLINE_MASK
    } else {
        &*MOBILE_MASK
    };

    mask.replace(&digits, "(${1}) ${2}-${3}").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_empty_is_invalid_for_every_kind() {
        for kind in [
            FieldKind::Text,
            FieldKind::Email,
            FieldKind::Tel,
            FieldKind::Select,
            FieldKind::Textarea,
        ] {
            for value in ["", "   ", "\t\n"] {
                let outcome = validate_value(kind, true, value);
                assert!(!outcome.valid, "{:?} with {:?}", kind, value);
                assert_eq!(outcome.message.as_deref(), Some(REQUIRED_FIELD_MESSAGE));
            }
        }
    }

    #[test]
    fn test_email_rules() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("contato@expressoitaporanga.com.br"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("user name@example.com"));
        assert!(!is_valid_email("a@@b.co"));

        let outcome = validate_value(FieldKind::Email, true, "not-an-email");
        assert_eq!(outcome.message.as_deref(), Some(INVALID_EMAIL_MESSAGE));
    }

    #[test]
    fn test_email_value_is_trimmed() {
        assert!(validate_value(FieldKind::Email, true, "  a@b.co  ").valid);
    }

    #[test]
    fn test_phone_rules() {
        assert!(is_valid_phone("(11) 98765-4321"));
        assert!(is_valid_phone("(11) 3333-4444"));
        assert!(!is_valid_phone("11987654321"));
        assert!(!is_valid_phone("(11) 333-4444"));
        assert!(!is_valid_phone("(11)98765-4321"));
    }

    #[test]
    fn test_phone_rejects_non_ascii_digits_and_spaces() {
        assert!(!is_valid_phone("(١١) ٩٨٧٦٥-٤٣٢١"));
        assert!(!is_valid_phone("(１１) ９８７６５-４３２１"));
        assert!(!is_valid_phone("(11)\u{2003}98765-4321"));

        let outcome = validate_value(FieldKind::Tel, false, "(١١) ٩٨٧٦٥-٤٣٢١");
        assert_eq!(outcome.message.as_deref(), Some(INVALID_PHONE_MESSAGE));
    }

    #[test]
    fn test_optional_fields_only_checked_when_present() {
        assert!(validate_value(FieldKind::Tel, false, "").valid);
        assert!(validate_value(FieldKind::Email, false, "").valid);

        let outcome = validate_value(FieldKind::Tel, false, "1234");
        assert!(!outcome.valid);
        assert_eq!(outcome.message.as_deref(), Some(INVALID_PHONE_MESSAGE));
    }

    #[test]
    fn test_revalidation_is_idempotent() {
        let first = validate_value(FieldKind::Email, true, "a@b.co");
        for _ in 0..3 {
            assert_eq!(validate_value(FieldKind::Email, true, "a@b.co"), first);
        }
        assert!(first.valid);
    }

    #[test]
    fn test_format_phone_mobile_and_landline() {
        assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
        assert_eq!(format_phone("1133334444"), "(11) 3333-4444");
    }

    #[test]
    fn test_format_phone_strips_existing_mask() {
        assert_eq!(format_phone("(11) 98765-4321"), "(11) 98765-4321");
        assert_eq!(format_phone("(11) 3333-4444"), "(11) 3333-4444");
    }

    #[test]
    fn test_format_phone_partial_input() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("11 98"), "1198");
        assert_eq!(format_phone("abc"), "");
        // 超過 11 位時多出的數字接在遮罩後面
        assert_eq!(format_phone("119876543210"), "(11) 98765-43210");
    }
}
