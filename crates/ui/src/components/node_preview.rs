//! # Node Preview Components
//!
//! Renders the [`NodePreview`] view model built by `weave_ir::preview`
//! inside a node card. All content is static mock-up; nothing here reads
//! live data.

use dioxus::prelude::*;
use weave_ir::preview::{
    ActionPreview, ButtonPreview, DisplayPreview, FormGroupPreview, FormPreview, InputPreview,
    PermissionPreview, RuleStatus, TablePreview,
};
use weave_ir::{NodePreview, PreviewBody};

/// Properties for NodePreviewView
#[derive(Props, Clone, PartialEq)]
pub struct NodePreviewViewProps {
    pub preview: NodePreview,
}

/// Title, body and summary footer of a node preview
#[component]
pub fn NodePreviewView(props: NodePreviewViewProps) -> Element {
    let preview = props.preview;

    rsx! {
        div {
            class: "preview",

            div {
                class: "preview-title",
                span { "{preview.title}" }
                if let Some(badge) = &preview.badge {
                    span { class: "preview-badge", "{badge}" }
                }
            }

            match preview.body {
                PreviewBody::Table(body) => rsx! { TableBody { body } },
                PreviewBody::Form(body) => rsx! { FormBody { body } },
                PreviewBody::FormGroup(body) => rsx! { FormGroupBody { body } },
                PreviewBody::Display(body) => rsx! { DisplayBody { body } },
                PreviewBody::Action(body) => rsx! { ActionBody { body } },
                PreviewBody::Permission(body) => rsx! { PermissionBody { body } },
                PreviewBody::Unknown { message } => rsx! {
                    p { class: "preview-muted", "{message}" }
                },
            }

            if !preview.summary.is_empty() {
                div {
                    class: "preview-summary",
                    for line in preview.summary.iter() {
                        span { key: "{line}", "{line}" }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Per-type Bodies
// ============================================================================

#[component]
fn TableBody(body: TablePreview) -> Element {
    rsx! {
        if !body.features.is_empty() {
            div {
                class: "preview-tags",
                for feature in body.features.iter() {
                    span { key: "{feature}", class: "preview-tag", "{feature}" }
                }
            }
        }
        if body.headers.is_empty() {
            p { class: "preview-muted", "No columns configured" }
        } else {
            table {
                class: "preview-table",
                thead {
                    tr {
                        for header in body.headers.iter() {
                            th {
                                "{header.label}"
                                if header.sortable { " ↕" }
                            }
                        }
                        if body.has_row_actions {
                            th { "Actions" }
                        }
                    }
                }
                tbody {
                    for (index, row) in body.rows.iter().enumerate() {
                        tr {
                            key: "{index}",
                            for cell in row.iter() {
                                td { "{cell}" }
                            }
                            if body.has_row_actions {
                                td { class: "preview-muted", "⋯" }
                            }
                        }
                    }
                }
            }
        }
        if let Some(pagination) = &body.pagination {
            p { class: "preview-footnote", "{pagination}" }
        }
    }
}

#[component]
fn FormBody(body: FormPreview) -> Element {
    rsx! {
        if let Some(columns) = &body.columns_badge {
            span { class: "preview-tag", "{columns}" }
        }
        if body.fields.is_empty() {
            p { class: "preview-muted", "No fields configured" }
        }
        for (index, field) in body.fields.iter().enumerate() {
            div {
                key: "{index}",
                class: "preview-field",
                label {
                    "{field.label}"
                    if field.required {
                        span { class: "input-required", "*" }
                    }
                    if field.has_pattern {
                        span { class: "preview-muted", " (pattern)" }
                    }
                }
                match &field.input {
                    InputPreview::Line { placeholder } => rsx! {
                        div { class: "preview-input", "{placeholder}" }
                    },
                    InputPreview::Area { placeholder } => rsx! {
                        div { class: "preview-input preview-input-tall", "{placeholder}" }
                    },
                    InputPreview::Select { placeholder } => rsx! {
                        div { class: "preview-input", "{placeholder} ▾" }
                    },
                    InputPreview::Checkbox { text } => rsx! {
                        div { class: "preview-check", "☐ {text}" }
                    },
                    InputPreview::Radio { options } => rsx! {
                        for option in options.iter() {
                            div { key: "{option}", class: "preview-check", "○ {option}" }
                        }
                    },
                }
            }
        }
        if let Some(more) = &body.more {
            p { class: "preview-muted", "{more}" }
        }
        div { class: "preview-button preview-button-primary", "{body.submit_label}" }
    }
}

#[component]
fn FormGroupBody(body: FormGroupPreview) -> Element {
    rsx! {
        div {
            class: "preview-group preview-group-{body.style}",
            if body.forms.is_empty() {
                p { class: "preview-muted", "No forms in this group" }
            }
            for (index, form) in body.forms.iter().enumerate() {
                div {
                    key: "{index}",
                    class: "preview-group-item",
                    span { "{form.title}" }
                    if let Some(count) = form.field_count {
                        span { class: "preview-muted", "{count} fields" }
                    }
                }
            }
        }
        if let Some(more) = &body.more {
            p { class: "preview-muted", "{more}" }
        }
    }
}

#[component]
fn DisplayBody(body: DisplayPreview) -> Element {
    rsx! {
        p { class: "preview-subtitle", "{body.heading}" }
        div {
            class: if body.monospace { "preview-content preview-code" } else { "preview-content" },
            "{body.body}"
        }
        if let Some(source) = &body.data_bound {
            p { class: "preview-footnote", "Bound to {source}" }
        }
    }
}

#[component]
fn ActionBody(body: ActionPreview) -> Element {
    rsx! {
        div {
            class: "preview-buttons",
            PreviewButton { button: body.primary.clone() }
            for (index, button) in body.secondary.iter().enumerate() {
                PreviewButton { key: "{index}", button: button.clone() }
            }
        }
        if let Some(message) = &body.confirmation {
            p { class: "preview-footnote", "Confirms: {message}" }
        }
        if let Some(roles) = &body.required_roles {
            p { class: "preview-footnote", "Requires: {roles}" }
        }
    }
}

#[component]
fn PreviewButton(button: ButtonPreview) -> Element {
    rsx! {
        div {
            class: "preview-button preview-button-{button.style}",
            title: "{button.kind}",
            "{button.label}"
            if let Some(shortcut) = &button.shortcut {
                span { class: "preview-shortcut", "{shortcut}" }
            }
        }
    }
}

#[component]
fn PermissionBody(body: PermissionPreview) -> Element {
    let grants = if body.granted_actions.is_empty() {
        "No actions".to_string()
    } else {
        body.granted_actions.join(", ")
    };

    rsx! {
        p { class: "preview-subtitle", "{body.resource}" }
        p { class: "preview-footnote", "{grants} for {body.roles}" }
        for (index, rule) in body.rules.iter().enumerate() {
            div {
                key: "{index}",
                class: "preview-rule",
                span { "{rule.action}" }
                span { class: "preview-muted", "{rule.roles}" }
                span {
                    class: match rule.status {
                        RuleStatus::Granted => "preview-status preview-status-granted",
                        RuleStatus::Denied => "preview-status preview-status-denied",
                        RuleStatus::Conditional => "preview-status preview-status-conditional",
                    },
                    match rule.status {
                        RuleStatus::Granted => "Granted",
                        RuleStatus::Denied => "Denied",
                        RuleStatus::Conditional => "Conditional",
                    }
                }
                for restriction in rule.restrictions.iter() {
                    span { key: "{restriction}", class: "preview-tag", "{restriction}" }
                }
            }
        }
        if let Some(more) = &body.more {
            p { class: "preview-muted", "{more}" }
        }
        p {
            class: "preview-footnote",
            if body.enforced { "Enforced" } else { "Audit only" }
        }
        if let Some(audit) = &body.audit {
            p { class: "preview-footnote", "{audit}" }
        }
    }
}
