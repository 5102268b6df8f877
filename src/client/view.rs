use serde::Serialize;
use std::time::{Duration, Instant};

pub const DEFAULT_BUTTON_LABEL: &str = "Send message";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonState {
    pub disabled: bool,
    pub label: String,
}

impl ButtonState {
    pub fn idle(label: impl Into<String>) -> Self {
        Self {
            disabled: false,
            label: label.into(),
        }
    }

    pub fn busy(label: impl Into<String>) -> Self {
        Self {
            disabled: true,
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub text: String,
    pub kind: MessageKind,
    /// 成功訊息會在一段時間後自動隱藏
    pub auto_hide_after: Option<Duration>,
}

impl FormMessage {
    pub fn success(text: impl Into<String>, auto_hide_after: Duration) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Success,
            auto_hide_after: Some(auto_hide_after),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Error,
            auto_hide_after: None,
        }
    }
}

/// 表單畫面的抽象：欄位、送出按鈕與提示訊息
pub trait FormView {
    fn read_fields(&self) -> FormFields;
    fn button(&self) -> ButtonState;
    fn set_button(&mut self, state: ButtonState);
    fn show_message(&mut self, message: FormMessage);
    fn hide_message(&mut self);
    fn reset(&mut self);
}

/// 記憶體中的表單狀態，記錄按鈕狀態的變化
#[derive(Debug, Clone)]
pub struct FormState {
    fields: FormFields,
    button: ButtonState,
    button_history: Vec<ButtonState>,
    message: Option<(FormMessage, Instant)>,
}

impl FormState {
    pub fn new(fields: FormFields) -> Self {
        Self {
            fields,
            button: ButtonState::idle(DEFAULT_BUTTON_LABEL),
            button_history: Vec::new(),
            message: None,
        }
    }

    pub fn with_button_label(mut self, label: impl Into<String>) -> Self {
        self.button = ButtonState::idle(label);
        self
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut FormFields {
        &mut self.fields
    }

    pub fn button_history(&self) -> &[ButtonState] {
        &self.button_history
    }

    /// 最後一次顯示的訊息，不考慮自動隱藏
    pub fn message(&self) -> Option<&FormMessage> {
        self.message.as_ref().map(|(message, _)| message)
    }

    pub fn visible_message(&self, now: Instant) -> Option<&FormMessage> {
        let (message, shown_at) = self.message.as_ref()?;
        match message.auto_hide_after {
            Some(after) if now.saturating_duration_since(*shown_at) >= after => None,
            _ => Some(message),
        }
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }
}

impl FormView for FormState {
    fn read_fields(&self) -> FormFields {
        self.fields.clone()
    }

    fn button(&self) -> ButtonState {
        self.button.clone()
    }

    fn set_button(&mut self, state: ButtonState) {
        self.button_history.push(state.clone());
        self.button = state;
    }

    fn show_message(&mut self, message: FormMessage) {
        self.message = Some((message, Instant::now()));
    }

    fn hide_message(&mut self) {
        self.message = None;
    }

    fn reset(&mut self) {
        self.fields = FormFields::default();
    }
}
