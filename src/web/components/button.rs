use maud::{html, Markup, Render};

const BASE_CLASSES: &str = "inline-flex items-center justify-center rounded-full px-5 py-0 text-sm font-medium focus:outline-none focus:ring-2 focus:ring-offset-2";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

impl ButtonVariant {
    pub fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "h-12 w-full bg-foreground text-background hover:opacity-95 md:w-[158px]"
            }
            ButtonVariant::Outline => {
                "h-12 w-full border border-solid border-black/[.08] hover:bg-black/[.04] md:w-[158px]"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
        }
    }
}

/// Stateless styled `<button>`.
///
/// Attributes are forwarded untouched. Wrappers find the element through
/// its `id` and attach behavior with [`Button::on_click`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Button {
    label: String,
    variant: ButtonVariant,
    kind: ButtonType,
    id: Option<String>,
    class: Option<String>,
    aria_label: Option<String>,
    title: Option<String>,
    name: Option<String>,
    value: Option<String>,
    on_click: Option<String>,
    disabled: bool,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn kind(mut self, kind: ButtonType) -> Self {
        self.kind = kind;
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Extra classes appended after the variant's
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn on_click(mut self, script: impl Into<String>) -> Self {
        self.on_click = Some(script.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The element's `id`, if one was assigned
    pub fn reference(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn class_list(&self) -> String {
        let mut classes = format!("{} {}", BASE_CLASSES, self.variant.classes());
        if let Some(extra) = self.class.as_deref().filter(|c| !c.trim().is_empty()) {
            classes.push(' ');
            classes.push_str(extra.trim());
        }
        classes
    }
}

impl Render for Button {
    fn render(&self) -> Markup {
        html! {
            button
                id=[self.id.as_deref()]
                type=(self.kind.as_str())
                class=(self.class_list())
                aria-label=[self.aria_label.as_deref()]
                title=[self.title.as_deref()]
                name=[self.name.as_deref()]
                value=[self.value.as_deref()]
                onclick=[self.on_click.as_deref()]
                disabled[self.disabled] {
                (self.label)
            }
        }
    }
}
