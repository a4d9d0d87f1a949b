use crate::core::api::CONTACT_FAILURE_MESSAGE;
use crate::core::fields::{format_phone, validate_value};
use crate::domain::form::{FieldKind, FieldState, FormField, SubmitControl, ValidationOutcome};
use crate::domain::page::{Banner, PageState};
use crate::domain::ports::ContactGateway;

pub const FORM_INVALID_MESSAGE: &str = "Por favor, corrija os erros antes de enviar.";
pub const CONTACT_SUCCESS_MESSAGE: &str =
    "Mensagem enviada com sucesso! Entraremos em contato em breve.";
pub const SUBMIT_LABEL: &str = "Enviar Mensagem";
pub const SUBMIT_BUSY_LABEL: &str = "Enviando...";

/// 表單整體驗證結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValidation {
    pub valid: bool,
    /// 依文件順序第一個無效的欄位
    pub first_invalid: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: Vec<FormField>,
    pub submit: SubmitControl,
}

impl ContactForm {
    pub fn new(fields: Vec<FormField>, submit: SubmitControl) -> Self {
        Self { fields, submit }
    }

    /// 網站上的聯絡表單
    pub fn standard() -> Self {
        Self::new(
            vec![
                FormField::new("nome", FieldKind::Text).required(),
                FormField::new("email", FieldKind::Email).required(),
                FormField::new("telefone", FieldKind::Tel),
                FormField::new("assunto", FieldKind::Select).required(),
                FormField::new("mensagem", FieldKind::Textarea).required(),
            ],
            SubmitControl::new(SUBMIT_LABEL, SUBMIT_BUSY_LABEL),
        )
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.field(name).map(|f| f.value.as_str())
    }

    /// 使用者輸入：電話欄位即時套用遮罩，並清除錯誤狀態
    pub fn on_input(&mut self, name: &str, value: &str) -> bool {
        let Some(field) = self.field_mut(name) else {
            tracing::warn!("⚠️ Input for unknown field '{}'", name);
            return false;
        };

        field.value = match field.kind {
            FieldKind::Tel => format_phone(value),
            _ => value.to_string(),
        };
        field.state = FieldState::Untouched;
        true
    }

    /// 離開欄位時重新驗證
    pub fn on_blur(&mut self, name: &str) -> Option<ValidationOutcome> {
        let field = self.field_mut(name)?;
        Some(Self::validate_field(field))
    }

    fn validate_field(field: &mut FormField) -> ValidationOutcome {
        let outcome = validate_value(field.kind, field.required, &field.value);
        field.state = FieldState::from(&outcome);
        outcome
    }

    /// 驗證所有欄位並標記狀態
    pub fn validate_all(&mut self) -> FormValidation {
        let mut first_invalid = None;

        for field in &mut self.fields {
            let outcome = Self::validate_field(field);
            if !outcome.valid && first_invalid.is_none() {
                first_invalid = Some(field.name.clone());
            }
        }

        FormValidation {
            valid: first_invalid.is_none(),
            first_invalid,
        }
    }

    /// 送出用的欄位名稱與值
    pub fn encoded_fields(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect()
    }

    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.state = FieldState::Untouched;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// 驗證失敗，沒有送出請求
    Invalid { first_invalid: Option<String> },
    Sent { message: String },
    Failed { message: String },
}

pub struct ContactWorkflow<G: ContactGateway> {
    gateway: G,
}

impl<G: ContactGateway> ContactWorkflow<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub async fn submit(&self, form: &mut ContactForm, page: &mut PageState) -> SubmissionOutcome {
        let validation = form.validate_all();
        if !validation.valid {
            tracing::debug!(
                "📝 Contact form has invalid fields, first: {:?}",
                validation.first_invalid
            );
            page.show_banner(Banner::error(FORM_INVALID_MESSAGE));
            if let Some(name) = &validation.first_invalid {
                page.focus_field(name.clone());
            }
            return SubmissionOutcome::Invalid {
                first_invalid: validation.first_invalid,
            };
        }

        let fields = form.encoded_fields();
        let reply = {
            // guard 在區塊結束（或 future 被取消）時還原按鈕
            let _guard = form.submit.begin_submission();
            tracing::info!("📨 Sending contact message");
            self.gateway.send_contact(&fields).await
        };

        if reply.success {
            let message = if reply.message.trim().is_empty() {
                CONTACT_SUCCESS_MESSAGE.to_string()
            } else {
                reply.message
            };
            tracing::info!("✅ Contact message sent");
            page.show_banner(Banner::success(message.clone()));
            page.scroll_to_top();
            form.reset();
            SubmissionOutcome::Sent { message }
        } else {
            let message = if reply.message.trim().is_empty() {
                CONTACT_FAILURE_MESSAGE.to_string()
            } else {
                reply.message
            };
            tracing::warn!("⚠️ Contact message rejected: {}", message);
            page.show_banner(Banner::error(message.clone()));
            SubmissionOutcome::Failed { message }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fields::{INVALID_EMAIL_MESSAGE, REQUIRED_FIELD_MESSAGE};
    use crate::domain::model::ContactReply;
    use crate::domain::page::BannerKind;
    use async_trait::async_trait;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    struct MockContactGateway {
        reply: ContactReply,
        calls: Arc<Mutex<Vec<Vec<(String, String)>>>>,
    }

    impl MockContactGateway {
        fn new(reply: ContactReply) -> Self {
            Self {
                reply,
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl ContactGateway for MockContactGateway {
        async fn send_contact(&self, fields: &[(String, String)]) -> ContactReply {
            self.calls.lock().await.push(fields.to_vec());
            self.reply.clone()
        }
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::standard();
        form.on_input("nome", "Maria");
        form.on_input("email", "maria@example.com");
        form.on_input("telefone", "11987654321");
        form.on_input("assunto", "orcamento");
        form.on_input("mensagem", "Olá");
        form
    }

    #[test]
    fn test_on_input_masks_phone_and_clears_error() {
        let mut form = ContactForm::standard();
        form.on_blur("email");
        assert!(form.field("email").unwrap().state.is_invalid());

        form.on_input("email", "a");
        assert_eq!(form.field("email").unwrap().state, FieldState::Untouched);

        form.on_input("telefone", "11987654321");
        assert_eq!(form.value("telefone"), Some("(11) 98765-4321"));

        assert!(!form.on_input("inexistente", "x"));
    }

    #[test]
    fn test_on_blur_reports_messages() {
        let mut form = ContactForm::standard();
        let outcome = form.on_blur("nome").unwrap();
        assert_eq!(outcome.message.as_deref(), Some(REQUIRED_FIELD_MESSAGE));

        form.on_input("email", "not-an-email");
        let outcome = form.on_blur("email").unwrap();
        assert_eq!(outcome.message.as_deref(), Some(INVALID_EMAIL_MESSAGE));
        assert_eq!(
            form.field("email").unwrap().state.error_message(),
            Some(INVALID_EMAIL_MESSAGE)
        );

        assert!(form.on_blur("inexistente").is_none());
    }

    #[test]
    fn test_validate_all_reports_first_invalid_in_order() {
        let mut form = ContactForm::standard();
        form.on_input("nome", "Maria");
        form.on_input("email", "x");

        let validation = form.validate_all();
        assert!(!validation.valid);
        assert_eq!(validation.first_invalid.as_deref(), Some("email"));
        assert!(form.field("assunto").unwrap().state.is_invalid());
        assert_eq!(form.field("telefone").unwrap().state, FieldState::Valid);
    }

    #[tokio::test]
    async fn test_invalid_form_does_not_call_gateway() {
        let gateway = MockContactGateway::new(ContactReply {
            success: true,
            message: String::new(),
        });
        let calls = gateway.calls.clone();
        let workflow = ContactWorkflow::new(gateway);
        let mut form = ContactForm::standard();
        let mut page = PageState::new();

        let outcome = workflow.submit(&mut form, &mut page).await;

        assert_eq!(
            outcome,
            SubmissionOutcome::Invalid {
                first_invalid: Some("nome".to_string())
            }
        );
        assert!(calls.lock().await.is_empty());
        assert_eq!(page.focused_field(), Some("nome"));
        let banner = page.latest_banner().unwrap();
        assert_eq!(banner.kind, BannerKind::Error);
        assert_eq!(banner.message, FORM_INVALID_MESSAGE);
    }

    #[tokio::test]
    async fn test_successful_submission_resets_form() {
        let gateway = MockContactGateway::new(ContactReply {
            success: true,
            message: String::new(),
        });
        let calls = gateway.calls.clone();
        let workflow = ContactWorkflow::new(gateway);
        let mut form = filled_form();
        let mut page = PageState::new();

        let outcome = workflow.submit(&mut form, &mut page).await;

        assert_eq!(
            outcome,
            SubmissionOutcome::Sent {
                message: CONTACT_SUCCESS_MESSAGE.to_string()
            }
        );
        let calls = calls.lock().await;
        assert_eq!(calls.len(), 1);
        assert!(calls[0].contains(&("telefone".to_string(), "(11) 98765-4321".to_string())));

        assert!(page.scrolled_to_top());
        assert_eq!(page.latest_banner().unwrap().kind, BannerKind::Success);
        assert!(form.fields().iter().all(|f| f.value.is_empty()));
        assert_eq!(form.submit.label, SUBMIT_LABEL);
        assert!(!form.submit.disabled);
    }

    #[tokio::test]
    async fn test_failed_submission_keeps_values() {
        let workflow = ContactWorkflow::new(MockContactGateway::new(ContactReply::failure("x")));
        let mut form = filled_form();
        let mut page = PageState::new();

        let outcome = workflow.submit(&mut form, &mut page).await;

        assert_eq!(
            outcome,
            SubmissionOutcome::Failed {
                message: "x".to_string()
            }
        );
        assert_eq!(form.value("nome"), Some("Maria"));
        assert_eq!(page.latest_banner().unwrap().message, "x");
        assert!(!page.scrolled_to_top());
        assert_eq!(form.submit.label, SUBMIT_LABEL);
        assert!(!form.submit.disabled);
    }

    #[tokio::test]
    async fn test_failure_without_message_uses_generic_message() {
        let workflow = ContactWorkflow::new(MockContactGateway::new(ContactReply::failure("  ")));
        let mut form = filled_form();
        let mut page = PageState::new();

        let outcome = workflow.submit(&mut form, &mut page).await;

        assert_eq!(
            outcome,
            SubmissionOutcome::Failed {
                message: CONTACT_FAILURE_MESSAGE.to_string()
            }
        );
        let banner = page.latest_banner().unwrap();
        assert_eq!(banner.kind, BannerKind::Error);
        assert_eq!(banner.message, CONTACT_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_cancelled_submission_restores_submit_control() {
        struct PendingGateway;

        #[async_trait]
        impl ContactGateway for PendingGateway {
            async fn send_contact(&self, _fields: &[(String, String)]) -> ContactReply {
                std::future::pending().await
            }
        }

        let workflow = ContactWorkflow::new(PendingGateway);
        let mut form = filled_form();
        let mut page = PageState::new();

        let result = tokio::time::timeout(
            std::time::Duration::from_millis(20),
            workflow.submit(&mut form, &mut page),
        )
        .await;

        assert!(result.is_err());
        assert_eq!(form.submit.label, SUBMIT_LABEL);
        assert!(!form.submit.disabled);
    }
}
