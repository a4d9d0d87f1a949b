/// 欄位型別，對應 HTML input 的 `type`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Select,
    Textarea,
}

impl FieldKind {
    pub fn from_input_type(input_type: &str) -> Self {
        match input_type.trim().to_ascii_lowercase().as_str() {
            "email" => FieldKind::Email,
            "tel" => FieldKind::Tel,
            "select" | "select-one" => FieldKind::Select,
            "textarea" => FieldKind::Textarea,
            _ => FieldKind::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub message: Option<String>,
}

impl ValidationOutcome {
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Untouched,
    Valid,
    Invalid { message: String },
}

impl FieldState {
    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldState::Invalid { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FieldState::Invalid { message } => Some(message),
            _ => None,
        }
    }
}

impl From<&ValidationOutcome> for FieldState {
    fn from(outcome: &ValidationOutcome) -> Self {
        match (&outcome.message, outcome.valid) {
            (_, true) => FieldState::Valid,
            (Some(message), false) => FieldState::Invalid {
                message: message.clone(),
            },
            (None, false) => FieldState::Invalid {
                message: String::new(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
    pub state: FieldState,
}

impl FormField {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
            value: String::new(),
            state: FieldState::Untouched,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// 送出按鈕的狀態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: String,
    pub busy_label: String,
    pub disabled: bool,
}

impl SubmitControl {
    pub fn new(label: impl Into<String>, busy_label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            busy_label: busy_label.into(),
            disabled: false,
        }
    }

    /// 進入送出中狀態；回傳的 guard 被 drop 時一定會還原按鈕
    pub fn begin_submission(&mut self) -> SubmissionGuard<'_> {
        let original_label = std::mem::replace(&mut self.label, self.busy_label.clone());
        self.disabled = true;
        SubmissionGuard {
            control: self,
            original_label: Some(original_label),
        }
    }
}

pub struct SubmissionGuard<'a> {
    control: &'a mut SubmitControl,
    original_label: Option<String>,
}

impl SubmissionGuard<'_> {
    pub fn is_active(&self) -> bool {
        self.control.disabled
    }

    pub fn label(&self) -> &str {
        &self.control.label
    }
}

impl Drop for SubmissionGuard<'_> {
    fn drop(&mut self) {
        if let Some(label) = self.original_label.take() {
            self.control.label = label;
        }
        self.control.disabled = false;
    }
}
