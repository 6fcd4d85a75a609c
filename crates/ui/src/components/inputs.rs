//! # Input Components
//!
//! Form inputs used by the inspector:
//! - **TextInput**: Single-line text input
//! - **TextArea**: Multi-line text input
//! - **NumberInput**: Numeric input with optional min/max
//! - **Select**: Dropdown selection
//! - **Checkbox**: Boolean checkbox
//! - **CheckboxGroup**: Subset of a fixed option list
//!
//! Every input reports each change immediately; there is no separate
//! commit step. Labels, help text and error text render the same way for
//! all of them through [`InputFrame`].

use dioxus::prelude::*;

// ============================================================================
// Shared Frame
// ============================================================================

/// Properties for InputFrame
#[derive(Props, Clone, PartialEq)]
pub struct InputFrameProps {
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub help_text: Option<String>,
    #[props(default)]
    pub error: Option<String>,
    #[props(default = false)]
    pub required: bool,
    pub children: Element,
}

/// Label above, error or help text below
#[component]
pub fn InputFrame(props: InputFrameProps) -> Element {
    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    "{label}"
                    if props.required {
                        span { class: "input-required", "*" }
                    }
                }
            }

            {props.children}

            if let Some(error) = &props.error {
                p { class: "input-error-text", "{error}" }
            } else if let Some(help) = &props.help_text {
                p { class: "input-help-text", "{help}" }
            }
        }
    }
}

fn input_class(has_error: bool, disabled: bool) -> String {
    let mut classes = vec!["input"];
    if has_error {
        classes.push("input-invalid");
    }
    if disabled {
        classes.push("input-disabled");
    }
    classes.join(" ")
}

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    pub value: String,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub help_text: Option<String>,
    #[props(default)]
    pub error: Option<String>,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub readonly: bool,
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let class = input_class(props.error.is_some(), props.readonly);

    rsx! {
        InputFrame {
            label: props.label.clone(),
            help_text: props.help_text.clone(),
            error: props.error.clone(),
            required: props.required,
            input {
                class: "{class}",
                r#type: "text",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                readonly: props.readonly,
                oninput: move |e| props.on_change.call(e.value()),
            }
        }
    }
}

// ============================================================================
// Text Area Component
// ============================================================================

/// Properties for TextArea component
#[derive(Props, Clone, PartialEq)]
pub struct TextAreaProps {
    pub value: String,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub help_text: Option<String>,
    #[props(default)]
    pub error: Option<String>,
    #[props(default = 3)]
    pub rows: u8,
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Multi-line text input component
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let class = input_class(props.error.is_some(), false);

    rsx! {
        InputFrame {
            label: props.label.clone(),
            help_text: props.help_text.clone(),
            error: props.error.clone(),
            textarea {
                class: "{class} input-textarea",
                rows: "{props.rows}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                oninput: move |e| props.on_change.call(e.value()),
            }
        }
    }
}

// ============================================================================
// Number Input Component
// ============================================================================

/// Properties for NumberInput component
#[derive(Props, Clone, PartialEq)]
pub struct NumberInputProps {
    pub value: f64,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub help_text: Option<String>,
    #[props(default)]
    pub error: Option<String>,
    #[props(default)]
    pub min: Option<f64>,
    #[props(default)]
    pub max: Option<f64>,
    #[props(default = 1.0)]
    pub step: f64,
    /// Raw text typed by the user; parsing is left to the caller
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Numeric input component
#[component]
pub fn NumberInput(props: NumberInputProps) -> Element {
    let class = input_class(props.error.is_some(), false);

    rsx! {
        InputFrame {
            label: props.label.clone(),
            help_text: props.help_text.clone(),
            error: props.error.clone(),
            input {
                class: "{class}",
                r#type: "number",
                value: "{props.value}",
                min: props.min.map(|v| v.to_string()),
                max: props.max.map(|v| v.to_string()),
                step: "{props.step}",
                oninput: move |e| props.on_change.call(e.value()),
            }
        }
    }
}

// ============================================================================
// Select Component
// ============================================================================

/// A single option for the Select and CheckboxGroup components
#[derive(Clone, PartialEq, Debug)]
pub struct InputOption {
    pub value: String,
    pub label: String,
}

impl InputOption {
    /// Create a new option
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Properties for Select component
#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    pub value: String,
    pub options: Vec<InputOption>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub help_text: Option<String>,
    #[props(default)]
    pub error: Option<String>,
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Dropdown selection component
#[component]
pub fn Select(props: SelectProps) -> Element {
    let class = input_class(props.error.is_some(), false);
    let known = props.options.iter().any(|o| o.value == props.value);

    rsx! {
        InputFrame {
            label: props.label.clone(),
            help_text: props.help_text.clone(),
            error: props.error.clone(),
            select {
                class: "{class} input-select",
                onchange: move |e| props.on_change.call(e.value()),

                // Imported values outside the option list stay visible
                if !known {
                    option {
                        value: "{props.value}",
                        selected: true,
                        disabled: true,
                        "{props.value}"
                    }
                }

                for option in props.options.iter() {
                    option {
                        key: "{option.value}",
                        value: "{option.value}",
                        selected: option.value == props.value,
                        "{option.label}"
                    }
                }
            }
        }
    }
}

// ============================================================================
// Checkbox Component
// ============================================================================

/// Properties for Checkbox component
#[derive(Props, Clone, PartialEq)]
pub struct CheckboxProps {
    pub checked: bool,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub help_text: Option<String>,
    #[props(default)]
    pub error: Option<String>,
    #[props(default)]
    pub on_change: EventHandler<bool>,
}

/// Checkbox input component
#[component]
pub fn Checkbox(props: CheckboxProps) -> Element {
    rsx! {
        div {
            class: "input-group",
            label {
                class: "checkbox-wrapper",
                input {
                    r#type: "checkbox",
                    checked: props.checked,
                    onchange: move |_| props.on_change.call(!props.checked),
                }
                if let Some(label) = &props.label {
                    span { class: "checkbox-label", "{label}" }
                }
            }
            if let Some(error) = &props.error {
                p { class: "input-error-text", "{error}" }
            } else if let Some(help) = &props.help_text {
                p { class: "input-help-text", "{help}" }
            }
        }
    }
}

// ============================================================================
// Checkbox Group Component
// ============================================================================

/// Properties for CheckboxGroup component
#[derive(Props, Clone, PartialEq)]
pub struct CheckboxGroupProps {
    pub options: Vec<InputOption>,
    pub checked: Vec<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub error: Option<String>,
    /// Called with (option value, new checked state)
    #[props(default)]
    pub on_toggle: EventHandler<(String, bool)>,
}

/// Group of checkboxes over a fixed option list
#[component]
pub fn CheckboxGroup(props: CheckboxGroupProps) -> Element {
    rsx! {
        InputFrame {
            label: props.label.clone(),
            error: props.error.clone(),
            div {
                class: "checkbox-group",
                for option in props.options.iter() {
                    {
                        let is_checked = props.checked.contains(&option.value);
                        let value = option.value.clone();
                        rsx! {
                            label {
                                key: "{option.value}",
                                class: "checkbox-wrapper",
                                input {
                                    r#type: "checkbox",
                                    checked: is_checked,
                                    onchange: move |_| props.on_toggle.call((value.clone(), !is_checked)),
                                }
                                span { class: "checkbox-label", "{option.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
