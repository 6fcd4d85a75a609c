//! # Inspector Panel Component
//!
//! Right-hand panel that edits the selected node.
//!
//! The editor is generated from the node type's [`EditorSchema`]: every
//! [`FieldDescriptor`] becomes one input, grouped by [`Section`]. Each change
//! is written straight to the node through [`AppState::update_selected`];
//! values that stray from the schema are kept and flagged inline.
//!
//! With nothing selected the panel shows a workflow overview with lint
//! results.
//!
//! [`AppState::update_selected`]: crate::state::AppState::update_selected

use dioxus::prelude::*;
use weave_core::{ConfigValue, Position};
use weave_ir::schema::{
    format_comma_list, parse_comma_list, parse_number_input, toggle_option,
};
use weave_ir::{
    EditorSchema, FieldDescriptor, Node, Section, SelectOption, Widget, WorkflowGraph, lint,
};

use crate::components::inputs::{
    Checkbox, CheckboxGroup, InputOption, NumberInput, Select, TextArea, TextInput,
};
use crate::state::APP_STATE;

// ============================================================================
// Constants
// ============================================================================

/// Default panel width
pub const PANEL_WIDTH: &str = "340px";

// ============================================================================
// Inspector Panel
// ============================================================================

/// The inspector panel
#[component]
pub fn Inspector() -> Element {
    let state = APP_STATE.read();
    if !state.ui.inspector_open {
        return rsx! {};
    }
    let node = state.selected_node().cloned();
    let errors = state.ui.field_errors.clone();
    let graph = state.graph.clone();
    let edge_count = node
        .as_ref()
        .map(|n| graph.edges_for_node(&n.id).len())
        .unwrap_or_default();
    drop(state);

    rsx! {
        aside {
            class: "inspector",
            style: "width: {PANEL_WIDTH};",

            match node {
                Some(node) => rsx! {
                    NodeInspector {
                        key: "{node.id}",
                        node,
                        edge_count,
                        errors: errors.into_iter().collect::<Vec<_>>(),
                    }
                },
                None => rsx! { WorkflowOverview { graph } },
            }
        }
    }
}

// ============================================================================
// Node Inspector
// ============================================================================

/// Editor for a single node
#[component]
fn NodeInspector(node: Node, edge_count: usize, errors: Vec<(String, String)>) -> Element {
    let schema = EditorSchema::for_type(&node.node_type);
    let type_name = node.node_type.display_name().to_string();
    let connected = edge_count;

    rsx! {
        div {
            class: "panel-header",
            span { "{type_name}" }
            button {
                class: "btn btn-danger btn-sm",
                title: "Delete node (Del)",
                onclick: move |_| {
                    APP_STATE.write().delete_selected();
                },
                "Delete"
            }
        }

        div {
            class: "inspector-body",

            TextInput { value: node.id.clone(), label: "ID".to_string(), readonly: true }
            TextInput { value: node.node_type.to_string(), label: "Type".to_string(), readonly: true }
            PositionEditor { position: node.position }
            p { class: "input-help-text", "{connected} connected edge(s)" }

            for section in Section::all().iter().copied() {
                {
                    let fields: Vec<FieldDescriptor> = schema
                        .section(section)
                        .filter(|f| f.is_visible(&node.data))
                        .cloned()
                        .collect();
                    let title = section.title();
                    rsx! {
                        if !fields.is_empty() {
                            details {
                                key: "{title}",
                                class: "inspector-section",
                                open: section.open_by_default(),
                                summary { "{title}" }
                                for field in fields {
                                    FieldEditor {
                                        key: "{field.path}",
                                        value: field.read(&node.data),
                                        error: errors
                                            .iter()
                                            .find(|(path, _)| path == field.path)
                                            .map(|(_, message)| message.clone()),
                                        field,
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if !schema.has_config() {
                p { class: "preview-muted", "This node type has no configuration." }
            }
        }
    }
}

/// X/Y inputs for the node position
#[component]
fn PositionEditor(position: Position) -> Element {
    let set_x = move |text: String| {
        if let Some(x) = parse_coordinate(&text) {
            commit_position(Position::new(x, position.y));
        }
    };
    let set_y = move |text: String| {
        if let Some(y) = parse_coordinate(&text) {
            commit_position(Position::new(position.x, y));
        }
    };

    rsx! {
        div {
            class: "inspector-row",
            NumberInput { value: position.x, label: "X".to_string(), on_change: set_x }
            NumberInput { value: position.y, label: "Y".to_string(), on_change: set_y }
        }
    }
}

/// Finite number typed into a coordinate box
pub fn parse_coordinate(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn commit_position(position: Position) {
    if let Err(e) = APP_STATE.write().position_selected(position) {
        tracing::debug!("Ignoring position edit: {}", e);
    }
}

// ============================================================================
// Field Editor
// ============================================================================

/// Write one field of the selected node. Schema warnings are kept inline
/// by the state; only a missing selection or a bad path fails here.
fn commit(path: &str, value: ConfigValue) {
    if let Err(e) = APP_STATE.write().update_selected(path, value) {
        tracing::debug!("Edit of {} not applied: {}", path, e);
    }
}

fn input_options(options: &[SelectOption]) -> Vec<InputOption> {
    options
        .iter()
        .map(|o| InputOption::new(o.value.to_string(), o.label))
        .collect()
}

/// Option whose rendered value matches `raw`
pub fn option_value(options: &[SelectOption], raw: &str) -> Option<ConfigValue> {
    options
        .iter()
        .find(|o| o.value.to_string() == raw)
        .map(|o| o.value.clone())
}

/// One input generated from a field descriptor
#[component]
fn FieldEditor(field: FieldDescriptor, value: ConfigValue, error: Option<String>) -> Element {
    let path = field.path;
    let label = Some(field.label.to_string());
    let help_text = field.help.map(str::to_string);

    match field.widget.clone() {
        Widget::Text => rsx! {
            TextInput {
                value: value.as_str().unwrap_or_default().to_string(),
                label,
                help_text,
                error,
                on_change: move |text: String| commit(path, ConfigValue::from(text)),
            }
        },
        Widget::TextArea { rows } => rsx! {
            TextArea {
                value: value.as_str().unwrap_or_default().to_string(),
                label,
                help_text,
                error,
                rows,
                on_change: move |text: String| commit(path, ConfigValue::from(text)),
            }
        },
        Widget::Select { options } => {
            let inputs = input_options(&options);
            rsx! {
                Select {
                    value: value.to_string(),
                    options: inputs,
                    label,
                    help_text,
                    error,
                    on_change: move |raw: String| {
                        if let Some(chosen) = option_value(&options, &raw) {
                            commit(path, chosen);
                        }
                    },
                }
            }
        }
        Widget::Checkbox => rsx! {
            Checkbox {
                checked: value.as_bool().unwrap_or_default(),
                label,
                help_text,
                error,
                on_change: move |checked: bool| commit(path, ConfigValue::from(checked)),
            }
        },
        Widget::Number { min, max } => {
            let fallback = value.as_int().unwrap_or_default();
            rsx! {
                NumberInput {
                    value: value.as_float().unwrap_or_default(),
                    label,
                    help_text,
                    error,
                    min,
                    max,
                    on_change: move |text: String| commit(path, parse_number_input(&text, fallback)),
                }
            }
        }
        Widget::CheckboxGroup { options } => {
            let inputs = input_options(&options);
            let checked = value.as_string_list().unwrap_or_default();
            rsx! {
                CheckboxGroup {
                    options: inputs,
                    checked,
                    label,
                    error,
                    on_toggle: move |(option, on): (String, bool)| {
                        commit(path, toggle_option(&value, &option, on));
                    },
                }
            }
        }
        Widget::CommaList => rsx! {
            TextInput {
                value: format_comma_list(&value),
                label,
                placeholder: "a, b, c".to_string(),
                help_text: help_text.or_else(|| Some("Comma-separated".to_string())),
                error,
                on_change: move |text: String| commit(path, parse_comma_list(&text)),
            }
        },
    }
}

// ============================================================================
// Workflow Overview
// ============================================================================

/// Shown when no node is selected
#[component]
fn WorkflowOverview(graph: WorkflowGraph) -> Element {
    let report = lint(&graph);
    let summary = graph.summary();
    let lint_summary = report.summary();
    let dangling = graph.dangling_edges().len();
    let messages: Vec<(bool, String)> = report
        .errors
        .iter()
        .map(|e| (true, e.message.clone()))
        .chain(report.warnings.iter().map(|w| (false, w.message.clone())))
        .collect();

    rsx! {
        div {
            class: "panel-header",
            span { "Workflow" }
        }
        div {
            class: "inspector-body",
            p { "{summary}" }
            p { class: "input-help-text", "Select a node to edit it." }

            div {
                class: "inspector-section",
                h4 { "Checks: {lint_summary}" }
                for (index, (is_error, message)) in messages.iter().enumerate() {
                    p {
                        key: "{index}",
                        class: if *is_error { "lint-error" } else { "lint-warning" },
                        "{message}"
                    }
                }
            }

            if dangling > 0 {
                button {
                    class: "btn btn-secondary btn-sm",
                    onclick: move |_| {
                        APP_STATE.write().prune_dangling_edges();
                    },
                    "Remove {dangling} dangling edge(s)"
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use weave_ir::NodeType;

    fn select_options(node_type: NodeType, path: &str) -> Vec<SelectOption> {
        let schema = EditorSchema::for_type(&node_type);
        let field = schema
            .fields
            .iter()
            .find(|f| f.path == path)
            .expect("field declared");
        match &field.widget {
            Widget::Select { options } => options.clone(),
            other => panic!("expected a select, got {:?}", other),
        }
    }

    #[test]
    fn test_option_value_maps_rendered_text_back() {
        let options = select_options(NodeType::from("displayNode"), "config.content.type");
        let first = options[0].value.clone();
        assert_eq!(option_value(&options, &first.to_string()), Some(first));
        assert_eq!(option_value(&options, "no-such-option"), None);
    }

    #[test]
    fn test_option_value_keeps_integer_options_numeric() {
        let options = select_options(NodeType::from("formNode"), "config.layout.columns");
        let chosen = option_value(&options, "2").expect("two columns offered");
        assert_eq!(chosen, ConfigValue::Int(2));
    }

    #[test]
    fn test_parse_coordinate_only_finite() {
        assert_eq!(parse_coordinate(" 12.5 "), Some(12.5));
        assert_eq!(parse_coordinate("-3"), Some(-3.0));
        assert_eq!(parse_coordinate("NaN"), None);
        assert_eq!(parse_coordinate("inf"), None);
        assert_eq!(parse_coordinate("-infinity"), None);
        assert_eq!(parse_coordinate("abc"), None);
    }

    #[test]
    fn test_input_options_keep_order() {
        let options = select_options(NodeType::from("displayNode"), "config.content.type");
        let inputs = input_options(&options);
        assert_eq!(inputs.len(), options.len());
        assert_eq!(inputs[0].label, options[0].label);
    }
}
