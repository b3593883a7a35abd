//! Dialog model shared by the Leptos components and plain HTML rendering
//!
//! A [`Modal`] is opened with a [`ModalView`] and closed by the events the
//! overlay produces. Clicks inside the content panel never close it.

use std::fmt::Write as _;

pub const CONFIRM_TITLE: &str = "Confirm";
pub const CONFIRM_LABEL: &str = "Confirm";
pub const CANCEL_LABEL: &str = "Cancel";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonStyle {
    #[default]
    Primary,
    Secondary,
}

impl ButtonStyle {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonStyle::Primary => "btn btn-primary",
            ButtonStyle::Secondary => "btn btn-secondary",
        }
    }
}

/// What a footer button reports when clicked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    Confirm,
    Cancel,
    Custom(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalButton {
    pub label: String,
    pub style: ButtonStyle,
    pub action: ModalAction,
}

impl ModalButton {
    pub fn new(label: impl Into<String>, style: ButtonStyle, action: ModalAction) -> Self {
        Self {
            label: label.into(),
            style,
            action,
        }
    }
}

/// Content of a dialog
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModalView {
    pub title: String,
    /// Plain text, escaped when rendered
    pub body: String,
    pub footer: Vec<ModalButton>,
}

impl ModalView {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            footer: Vec::new(),
        }
    }

    pub fn button(mut self, button: ModalButton) -> Self {
        self.footer.push(button);
        self
    }

    /// The "Confirm" dialog: Cancel then Confirm
    pub fn confirm(message: impl Into<String>) -> Self {
        Self::new(CONFIRM_TITLE, message)
            .button(ModalButton::new(
                CANCEL_LABEL,
                ButtonStyle::Secondary,
                ModalAction::Cancel,
            ))
            .button(ModalButton::new(
                CONFIRM_LABEL,
                ButtonStyle::Primary,
                ModalAction::Confirm,
            ))
    }

    /// Overlay markup, footer omitted when there are no buttons
    pub fn to_html(&self) -> String {
        let mut html = String::from(r#"<div class="modal show"><div class="modal-content">"#);
        let _ = write!(
            html,
            r#"<div class="modal-header"><h3>{}</h3><button class="modal-close" aria-label="Close">&times;</button></div>"#,
            escape_html(&self.title)
        );
        let _ = write!(
            html,
            r#"<div class="modal-body"><p>{}</p></div>"#,
            escape_html(&self.body)
        );
        if !self.footer.is_empty() {
            html.push_str(r#"<div class="modal-footer">"#);
            for button in &self.footer {
                let _ = write!(
                    html,
                    r#"<button class="{}">{}</button>"#,
                    button.style.class(),
                    escape_html(&button.label)
                );
            }
            html.push_str("</div>");
        }
        html.push_str("</div></div>");
        html
    }
}

/// Input from the overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalEvent {
    /// The × in the header
    CloseButton,
    /// Click on the overlay outside the content panel
    Backdrop,
    /// Click inside the content panel
    Panel,
    Button(ModalAction),
}

/// Open/closed state of one dialog
#[derive(Debug, Clone, Default)]
pub struct Modal {
    view: Option<ModalView>,
}

impl Modal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, view: ModalView) {
        self.view = Some(view);
    }

    pub fn close(&mut self) {
        self.view = None;
    }

    pub fn is_open(&self) -> bool {
        self.view.is_some()
    }

    pub fn view(&self) -> Option<&ModalView> {
        self.view.as_ref()
    }

    /// Apply an event. Returns the button action once the modal has closed.
    pub fn handle(&mut self, event: ModalEvent) -> Option<ModalAction> {
        if !self.is_open() {
            return None;
        }
        match event {
            ModalEvent::CloseButton | ModalEvent::Backdrop => {
                self.close();
                None
            }
            ModalEvent::Panel => None,
            ModalEvent::Button(action) => {
                self.close();
                Some(action)
            }
        }
    }
}

type Callback = Box<dyn FnOnce()>;

/// Confirmation prompt running a callback once the user decides
pub struct ConfirmDialog {
    modal: Modal,
    on_confirm: Option<Callback>,
    on_cancel: Option<Callback>,
}

impl ConfirmDialog {
    pub fn new(message: impl Into<String>, on_confirm: impl FnOnce() + 'static) -> Self {
        let mut modal = Modal::new();
        modal.open(ModalView::confirm(message));
        Self {
            modal,
            on_confirm: Some(Box::new(on_confirm)),
            on_cancel: None,
        }
    }

    pub fn on_cancel(mut self, on_cancel: impl FnOnce() + 'static) -> Self {
        self.on_cancel = Some(Box::new(on_cancel));
        self
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn is_open(&self) -> bool {
        self.modal.is_open()
    }

    /// Feed an overlay event. Dismissing via × or the backdrop runs neither callback.
    pub fn handle(&mut self, event: ModalEvent) {
        match self.modal.handle(event) {
            Some(ModalAction::Confirm) => {
                self.on_cancel = None;
                if let Some(callback) = self.on_confirm.take() {
                    callback();
                }
            }
            Some(ModalAction::Cancel) => {
                self.on_confirm = None;
                if let Some(callback) = self.on_cancel.take() {
                    callback();
                }
            }
            Some(ModalAction::Custom(_)) | None => {}
        }
    }
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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
