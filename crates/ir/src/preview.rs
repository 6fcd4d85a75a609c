//! Read-only node previews
//!
//! Each node card shows a small summary of its config. The builders here
//! turn a node into a view model; every config read is a lookup with a
//! named fallback, so partial or malformed configs (typically from imported
//! files) still render. Nothing here reads live data: data sources, charts
//! and media are shown as placeholders.

use crate::config::FieldType;
use crate::graph::WorkflowGraph;
use crate::node::{Node, NodeType};
use weave_core::ConfigValue;

/// Columns shown in a table preview
pub const TABLE_PREVIEW_COLUMNS: usize = 3;
/// Mock rows shown in a table preview
pub const TABLE_PREVIEW_ROWS: usize = 3;
/// Total item count claimed by the pagination line
pub const TABLE_PREVIEW_TOTAL: i64 = 100;
/// Fields shown in a form preview
pub const FORM_PREVIEW_FIELDS: usize = 4;
/// Radio options shown per field
pub const FORM_PREVIEW_OPTIONS: usize = 2;
/// Child forms shown in a form group preview
pub const GROUP_PREVIEW_FORMS: usize = 3;
/// Secondary buttons shown in an action preview
pub const ACTION_PREVIEW_SECONDARY: usize = 3;
/// Rules shown in a permission preview
pub const PERMISSION_PREVIEW_RULES: usize = 4;

// ============================================================================
// View models
// ============================================================================

/// Everything a node card renders
#[derive(Debug, Clone, PartialEq)]
pub struct NodePreview {
    pub title: String,
    /// Small tag next to the title, e.g. the content type
    pub badge: Option<String>,
    pub body: PreviewBody,
    /// Footer lines, e.g. "Columns: 3"
    pub summary: Vec<String>,
}

/// Type-specific part of a preview
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewBody {
    Table(TablePreview),
    Form(FormPreview),
    FormGroup(FormGroupPreview),
    Display(DisplayPreview),
    Action(ActionPreview),
    Permission(PermissionPreview),
    Unknown { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TablePreview {
    /// Capability tags: Filterable, Sortable, Search
    pub features: Vec<&'static str>,
    pub headers: Vec<ColumnHeader>,
    pub rows: Vec<Vec<&'static str>>,
    pub has_row_actions: bool,
    pub pagination: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnHeader {
    pub label: String,
    pub sortable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormPreview {
    pub fields: Vec<FieldPreview>,
    pub more: Option<String>,
    pub columns_badge: Option<String>,
    pub submit_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldPreview {
    pub label: String,
    pub required: bool,
    pub input: InputPreview,
    /// Field declares a pattern rule
    pub has_pattern: bool,
}

/// Mock input drawn for a form field
#[derive(Debug, Clone, PartialEq)]
pub enum InputPreview {
    Line { placeholder: String },
    Area { placeholder: String },
    Select { placeholder: String },
    Checkbox { text: String },
    Radio { options: Vec<String> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormGroupPreview {
    pub style: String,
    pub forms: Vec<ChildFormPreview>,
    pub more: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChildFormPreview {
    pub title: String,
    /// Field count when the child id resolves to a form node
    pub field_count: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayPreview {
    pub content_type: String,
    pub heading: String,
    pub body: String,
    /// Raw markup/template text rendered in a code box
    pub monospace: bool,
    pub data_bound: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionPreview {
    pub primary: ButtonPreview,
    pub secondary: Vec<ButtonPreview>,
    pub confirmation: Option<String>,
    pub required_roles: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonPreview {
    pub label: String,
    pub kind: String,
    pub style: String,
    pub shortcut: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PermissionPreview {
    pub resource: String,
    pub granted_actions: Vec<String>,
    pub roles: String,
    pub rules: Vec<RulePreview>,
    pub more: Option<String>,
    pub enforced: bool,
    pub audit: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RulePreview {
    pub action: String,
    pub roles: String,
    pub status: RuleStatus,
    pub restrictions: Vec<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleStatus {
    Granted,
    Denied,
    Conditional,
}

impl RuleStatus {
    fn from_effect(effect: &str) -> Self {
        match effect {
            "allow" => RuleStatus::Granted,
            "deny" => RuleStatus::Denied,
            _ => RuleStatus::Conditional,
        }
    }
}

// ============================================================================
// Builders
// ============================================================================

impl NodePreview {
    /// Build the preview of `node`. The graph is used to resolve the child
    /// forms of a form group.
    pub fn build(node: &Node, graph: &WorkflowGraph) -> Self {
        let config = node.config();
        match &node.node_type {
            NodeType::Table => table_preview(config),
            NodeType::Form => form_preview(config),
            NodeType::FormGroup => form_group_preview(config, graph),
            NodeType::Display => display_preview(config),
            NodeType::Action => action_preview(config),
            NodeType::Permission => permission_preview(config),
            NodeType::Other(raw) => NodePreview {
                title: node.data.label().to_string(),
                badge: Some(raw.clone()),
                body: PreviewBody::Unknown {
                    message: format!("No preview available for '{}' nodes", raw),
                },
                summary: Vec::new(),
            },
        }
    }
}

fn table_preview(config: &ConfigValue) -> NodePreview {
    let sortable = config.bool_or("sortable", false);
    let columns = config.items("columns");
    let shown = &columns[..columns.len().min(TABLE_PREVIEW_COLUMNS)];
    let actions = config.items("actions");

    let mut features = Vec::new();
    if config.bool_or("filterable", false) {
        features.push("Filterable");
    }
    if sortable {
        features.push("Sortable");
    }
    if config.bool_or("searchable", false) {
        features.push("Search");
    }

    let headers = shown
        .iter()
        .map(|c| ColumnHeader {
            label: c.str_or("label", "").to_string(),
            sortable: sortable && c.bool_or("sortable", false),
        })
        .collect();
    let row: Vec<&'static str> = shown.iter().map(|c| mock_cell(c.str_or("type", "text"))).collect();

    let pagination = config.bool_or("pagination", false).then(|| {
        format!(
            "Showing 1-{} of {} items",
            config.int_or("pageSize", 10),
            TABLE_PREVIEW_TOTAL
        )
    });

    NodePreview {
        title: config.text_or("title", "Data Table").to_string(),
        badge: None,
        body: PreviewBody::Table(TablePreview {
            features,
            headers,
            rows: vec![row; TABLE_PREVIEW_ROWS],
            has_row_actions: !actions.is_empty(),
            pagination,
        }),
        summary: vec![
            format!("Columns: {}", columns.len()),
            format!("Actions: {}", actions.len()),
            format!("Source: {}", config.text_or("dataSource", "static")),
        ],
    }
}

fn mock_cell(column_type: &str) -> &'static str {
    match column_type {
        "number" => "123",
        "date" => "2024-01-01",
        "boolean" => "✓",
        _ => "Sample data",
    }
}

fn form_preview(config: &ConfigValue) -> NodePreview {
    let fields = config.items("fields");
    let shown = fields
        .iter()
        .take(FORM_PREVIEW_FIELDS)
        .map(field_preview)
        .collect();
    let columns = config.int_or("layout.columns", 1);

    NodePreview {
        title: config.text_or("title", "Form").to_string(),
        badge: config
            .bool_or("validation.required", false)
            .then(|| "Required".to_string()),
        body: PreviewBody::Form(FormPreview {
            fields: shown,
            more: more_line(fields.len(), FORM_PREVIEW_FIELDS, "fields"),
            columns_badge: (columns > 1).then(|| format!("{} columns", columns)),
            submit_label: config.text_or("submitButton.label", "Submit Form").to_string(),
        }),
        summary: vec![
            format!("Fields: {}", fields.len()),
            format!("Submit: {}", config.text_or("submitAction", "save")),
        ],
    }
}

fn field_preview(field: &ConfigValue) -> FieldPreview {
    let raw_type = field.str_or("type", "text");
    let field_type = ConfigValue::from(raw_type).to_typed::<FieldType>().ok();
    let placeholder = |fallback: String| field.text_or("placeholder", &fallback).to_string();

    let input = match field_type {
        Some(FieldType::Textarea) => InputPreview::Area {
            placeholder: placeholder("Enter text...".to_string()),
        },
        Some(FieldType::Select | FieldType::Multiselect) => InputPreview::Select {
            placeholder: placeholder("Select option...".to_string()),
        },
        Some(FieldType::Checkbox) => InputPreview::Checkbox {
            text: placeholder("Check this option".to_string()),
        },
        Some(FieldType::Radio) => InputPreview::Radio {
            options: field
                .items("options")
                .iter()
                .take(FORM_PREVIEW_OPTIONS)
                .map(|o| o.str_or("label", "").to_string())
                .collect(),
        },
        Some(other) => InputPreview::Line {
            placeholder: placeholder(other.placeholder().to_string()),
        },
        None => InputPreview::Line {
            placeholder: placeholder(format!("Enter {}...", raw_type)),
        },
    };

    FieldPreview {
        label: field.str_or("label", "").to_string(),
        required: field.bool_or("required", false),
        input,
        has_pattern: field
            .items("validation")
            .iter()
            .any(|rule| rule.str_or("type", "") == "pattern"),
    }
}

fn form_group_preview(config: &ConfigValue, graph: &WorkflowGraph) -> NodePreview {
    let style = config.text_or("layout.style", "tabs").to_string();
    let child_ids = config.items("childForms");

    let forms = child_ids
        .iter()
        .take(GROUP_PREVIEW_FORMS)
        .enumerate()
        .map(|(index, id)| {
            let fallback = format!("Form {}", index + 1);
            match id.as_str().and_then(|id| graph.node(id)) {
                Some(child) => ChildFormPreview {
                    title: child.config().text_or("title", child.label()).to_string(),
                    field_count: Some(child.config().items("fields").len()),
                },
                None => ChildFormPreview {
                    title: fallback,
                    field_count: None,
                },
            }
        })
        .collect();

    let mut summary = vec![
        format!("Forms: {}", child_ids.len()),
        format!("Layout: {}", style),
    ];
    if config.bool_or("validation.validateAll", false) {
        summary.push("Validates all forms".to_string());
    }
    if config.bool_or("submission.confirmBeforeSubmit", false) {
        summary.push("Confirms before submit".to_string());
    }
    if config.bool_or("layout.showProgress", false) {
        summary.push("Progress tracking".to_string());
    }

    NodePreview {
        title: config.text_or("title", "Form Group").to_string(),
        badge: Some(style.clone()),
        body: PreviewBody::FormGroup(FormGroupPreview {
            style,
            forms,
            more: more_line(child_ids.len(), GROUP_PREVIEW_FORMS, "forms"),
        }),
        summary,
    }
}

fn display_preview(config: &ConfigValue) -> NodePreview {
    let content_type = config.text_or("content.type", "text").to_string();
    let value = config.text_or("content.value", "");

    let (body, monospace) = match content_type.as_str() {
        "html" => (non_empty_or(value, "<div>HTML content preview</div>"), true),
        "markdown" => (format!("Markdown content: {} characters", value.chars().count()), false),
        "template" => (
            config
                .text_or("content.template", non_empty_or(value, "Template: {{variable}}").as_str())
                .to_string(),
            true,
        ),
        "image" | "video" => (
            non_empty_or(config.text_or("content.mediaConfig.src", ""), "No media"),
            false,
        ),
        "chart" => (
            format!(
                "{} chart from {}",
                capitalize(config.text_or("content.chartConfig.type", "bar")),
                config.text_or("content.chartConfig.dataSource", "no source")
            ),
            false,
        ),
        "iframe" => (non_empty_or(value, "Embedded content"), false),
        _ => (non_empty_or(value, "No content"), false),
    };

    let data_bound = config.bool_or("dataBinding.enabled", false).then(|| {
        config
            .text_or("dataBinding.dataSource", "unbound source")
            .to_string()
    });

    NodePreview {
        title: config.text_or("title", "Display").to_string(),
        badge: Some(content_type.clone()),
        body: PreviewBody::Display(DisplayPreview {
            heading: format!("{} Content", capitalize(&content_type)),
            content_type: content_type.clone(),
            body,
            monospace,
            data_bound,
        }),
        summary: vec![
            format!("Type: {}", content_type),
            format!("Theme: {}", config.text_or("styling.theme", "default")),
            format!("Width: {}", config.text_or("layout.width", "auto")),
            format!("Align: {}", config.text_or("layout.alignment", "left")),
        ],
    }
}

fn action_preview(config: &ConfigValue) -> NodePreview {
    let primary = ButtonPreview {
        label: config.text_or("label", "Click Me").to_string(),
        kind: config.text_or("actionType", "button").to_string(),
        style: config.text_or("style", "primary").to_string(),
        shortcut: None,
    };
    let extra = config.items("actions");
    let secondary = extra
        .iter()
        .take(ACTION_PREVIEW_SECONDARY)
        .map(|a| ButtonPreview {
            label: a.str_or("label", "").to_string(),
            kind: a.text_or("type", "button").to_string(),
            style: a.text_or("style", "secondary").to_string(),
            shortcut: a.lookup("shortcut").and_then(|s| s.as_str()).map(str::to_string),
        })
        .collect();

    let confirmation = config
        .bool_or("confirmation.enabled", false)
        .then(|| config.text_or("confirmation.message", "Are you sure?").to_string());

    let required_roles = config.bool_or("permissions.enabled", false).then(|| {
        let roles = config
            .lookup("permissions.requiredRoles")
            .and_then(|r| r.as_string_list())
            .unwrap_or_default();
        if roles.is_empty() {
            "Authentication".to_string()
        } else {
            roles.join(", ")
        }
    });

    let mut summary = vec![
        format!("Actions: {}", 1 + extra.len()),
        format!("Type: {}", primary.kind),
    ];
    if confirmation.is_some() {
        summary.push("Confirmations".to_string());
    }
    let target = config.text_or("target", "");
    if !target.is_empty() {
        summary.push(format!("Target: {}", target));
    }

    NodePreview {
        title: config.text_or("title", "Actions").to_string(),
        badge: None,
        body: PreviewBody::Action(ActionPreview {
            primary,
            secondary,
            confirmation,
            required_roles,
        }),
        summary,
    }
}

fn permission_preview(config: &ConfigValue) -> NodePreview {
    let rules = config.items("rules");
    let shown = rules
        .iter()
        .take(PERMISSION_PREVIEW_RULES)
        .map(|rule| {
            let mut restrictions = Vec::new();
            if !rule.items("timeRestrictions").is_empty() {
                restrictions.push("Time limits");
            }
            if !rule.items("deviceRestrictions").is_empty() {
                restrictions.push("Device limits");
            }
            RulePreview {
                action: capitalize(rule.text_or("action", "custom")),
                roles: roles_line(rule),
                status: RuleStatus::from_effect(rule.str_or("type", "conditional")),
                restrictions,
            }
        })
        .collect();

    let mode = config.text_or("enforcement.mode", "strict").to_string();
    let audit = config.bool_or("audit.enabled", false).then(|| {
        format!(
            "Audit logging, {} days retention",
            config.int_or("audit.retentionDays", 30)
        )
    });

    NodePreview {
        title: config
            .text_or("title", config.text_or("name", "Access Control"))
            .to_string(),
        badge: None,
        body: PreviewBody::Permission(PermissionPreview {
            resource: config.text_or("resource", "any resource").to_string(),
            granted_actions: config
                .lookup("actions")
                .and_then(|a| a.as_string_list())
                .unwrap_or_default()
                .iter()
                .map(|a| capitalize(a))
                .collect(),
            roles: roles_line(config),
            rules: shown,
            more: more_line(rules.len(), PERMISSION_PREVIEW_RULES, "rules"),
            enforced: mode != "audit-only",
            audit,
        }),
        summary: vec![format!("Rules: {}", rules.len()), format!("Mode: {}", mode)],
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn roles_line(value: &ConfigValue) -> String {
    let roles = value
        .lookup("roles")
        .and_then(|r| r.as_string_list())
        .unwrap_or_default();
    if roles.is_empty() {
        "All users".to_string()
    } else {
        roles.join(", ")
    }
}

fn more_line(total: usize, shown: usize, noun: &str) -> Option<String> {
    (total > shown).then(|| format!("+{} more {}", total - shown, noun))
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_node_data;
    use crate::node::NodeData;
    use pretty_assertions::assert_eq;
    use weave_core::Position;

    fn node_with(node_type: NodeType, config: &str) -> Node {
        let config: ConfigValue = serde_json::from_str(config).unwrap();
        Node::new("n", node_type, Position::zero(), NodeData::new("Label", config))
    }

    fn preview(node: &Node) -> NodePreview {
        NodePreview::build(node, &WorkflowGraph::new())
    }

    #[test]
    fn test_every_default_renders() {
        for node_type in NodeType::BUILTIN.iter() {
            let node = Node::new("n", node_type.clone(), Position::zero(), default_node_data(node_type).unwrap());
            let p = preview(&node);
            assert!(!p.title.is_empty());
            assert!(!matches!(p.body, PreviewBody::Unknown { .. }));
        }
    }

    #[test]
    fn test_table_preview() {
        let node = node_with(
            NodeType::Table,
            r#"{
                "title": "Orders", "sortable": true, "pagination": true, "pageSize": 25,
                "columns": [
                    { "label": "Id", "type": "number", "sortable": true },
                    { "label": "Placed", "type": "date" },
                    { "label": "Paid", "type": "boolean" },
                    { "label": "Note", "type": "text" }
                ],
                "actions": [ { "id": "edit", "label": "Edit" } ]
            }"#,
        );
        let p = preview(&node);
        assert_eq!(p.title, "Orders");
        let PreviewBody::Table(table) = p.body else { panic!("not a table preview") };
        assert_eq!(table.headers.len(), 3);
        assert!(table.headers[0].sortable);
        assert!(!table.headers[1].sortable);
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[0], vec!["123", "2024-01-01", "✓"]);
        assert!(table.has_row_actions);
        assert_eq!(table.pagination.as_deref(), Some("Showing 1-25 of 100 items"));
        assert_eq!(table.features, vec!["Sortable"]);
        assert_eq!(p.summary, vec!["Columns: 4", "Actions: 1", "Source: static"]);
    }

    #[test]
    fn test_empty_config_falls_back() {
        let p = preview(&node_with(NodeType::Table, "{}"));
        assert_eq!(p.title, "Data Table");
        let PreviewBody::Table(table) = p.body else { panic!("not a table preview") };
        assert!(table.headers.is_empty());
        assert!(table.pagination.is_none());

        assert_eq!(preview(&node_with(NodeType::Permission, "{}")).title, "Access Control");
        assert_eq!(preview(&node_with(NodeType::Action, r#"{ "title": 5 }"#)).title, "Actions");
    }

    #[test]
    fn test_form_preview() {
        let node = node_with(
            NodeType::Form,
            r#"{
                "fields": [
                    { "label": "Email", "type": "email", "required": true },
                    { "label": "Bio", "type": "textarea", "placeholder": "About you" },
                    { "label": "Plan", "type": "radio", "options": [
                        { "label": "Free", "value": "f" }, { "label": "Pro", "value": "p" }, { "label": "Team", "value": "t" }
                    ] },
                    { "label": "Code", "type": "barcode", "validation": [ { "type": "pattern", "value": "^\\d+$" } ] },
                    { "label": "Extra 1" }, { "label": "Extra 2" }
                ],
                "layout": { "columns": 2 },
                "validation": { "required": true }
            }"#,
        );
        let p = preview(&node);
        assert_eq!(p.title, "Form");
        assert_eq!(p.badge.as_deref(), Some("Required"));
        let PreviewBody::Form(form) = p.body else { panic!("not a form preview") };
        assert_eq!(form.fields.len(), 4);
        assert!(form.fields[0].required);
        assert_eq!(
            form.fields[0].input,
            InputPreview::Line { placeholder: "user@example.com".to_string() }
        );
        assert_eq!(form.fields[1].input, InputPreview::Area { placeholder: "About you".to_string() });
        assert_eq!(
            form.fields[2].input,
            InputPreview::Radio { options: vec!["Free".to_string(), "Pro".to_string()] }
        );
        assert_eq!(
            form.fields[3].input,
            InputPreview::Line { placeholder: "Enter barcode...".to_string() }
        );
        assert!(form.fields[3].has_pattern);
        assert_eq!(form.more.as_deref(), Some("+2 more fields"));
        assert_eq!(form.columns_badge.as_deref(), Some("2 columns"));
        assert_eq!(form.submit_label, "Submit Form");
    }

    #[test]
    fn test_form_group_resolves_children() {
        let mut graph = WorkflowGraph::new();
        graph.insert_node(node_with(
            NodeType::Form,
            r#"{ "title": "Contact", "fields": [ { "label": "A" }, { "label": "B" } ] }"#,
        ));
        let group = node_with(
            NodeType::FormGroup,
            r#"{ "childForms": ["n", "gone", "x", "y"], "layout": { "style": "wizard" } }"#,
        );

        let p = NodePreview::build(&group, &graph);
        assert_eq!(p.badge.as_deref(), Some("wizard"));
        let PreviewBody::FormGroup(body) = p.body else { panic!("not a group preview") };
        assert_eq!(
            body.forms[0],
            ChildFormPreview { title: "Contact".to_string(), field_count: Some(2) }
        );
        assert_eq!(body.forms[1].title, "Form 2");
        assert_eq!(body.forms.len(), 3);
        assert_eq!(body.more.as_deref(), Some("+1 more forms"));
        assert_eq!(p.summary[0], "Forms: 4");
    }

    #[test]
    fn test_display_preview_by_type() {
        let text = preview(&node_with(NodeType::Display, r#"{ "content": { "type": "text", "value": "" } }"#));
        let PreviewBody::Display(body) = text.body else { panic!("not a display preview") };
        assert_eq!(body.body, "No content");
        assert_eq!(body.heading, "Text Content");

        let md = preview(&node_with(NodeType::Display, r##"{ "content": { "type": "markdown", "value": "# Hi" } }"##));
        let PreviewBody::Display(body) = md.body else { panic!("not a display preview") };
        assert_eq!(body.body, "Markdown content: 4 characters");

        let chart = preview(&node_with(
            NodeType::Display,
            r#"{ "content": { "type": "chart", "chartConfig": { "type": "pie", "dataSource": "sales" } },
                 "dataBinding": { "enabled": true, "dataSource": "orders" } }"#,
        ));
        assert_eq!(chart.badge.as_deref(), Some("chart"));
        let PreviewBody::Display(body) = chart.body else { panic!("not a display preview") };
        assert_eq!(body.body, "Pie chart from sales");
        assert_eq!(body.data_bound.as_deref(), Some("orders"));
    }

    #[test]
    fn test_action_preview() {
        let node = node_with(
            NodeType::Action,
            r#"{
                "label": "Save", "actionType": "submit", "style": "success",
                "confirmation": { "enabled": true, "message": "" },
                "actions": [
                    { "id": "a", "label": "One", "type": "link", "shortcut": "Ctrl+1" },
                    { "id": "b", "label": "Two" }, { "id": "c", "label": "Three" }, { "id": "d", "label": "Four" }
                ],
                "permissions": { "enabled": true, "requiredRoles": [] }
            }"#,
        );
        let p = preview(&node);
        let PreviewBody::Action(body) = p.body else { panic!("not an action preview") };
        assert_eq!(body.primary.label, "Save");
        assert_eq!(body.primary.kind, "submit");
        assert_eq!(body.secondary.len(), 3);
        assert_eq!(body.secondary[0].shortcut.as_deref(), Some("Ctrl+1"));
        assert_eq!(body.secondary[1].kind, "button");
        assert_eq!(body.confirmation.as_deref(), Some("Are you sure?"));
        assert_eq!(body.required_roles.as_deref(), Some("Authentication"));
        assert_eq!(p.summary, vec!["Actions: 5", "Type: submit", "Confirmations"]);
    }

    #[test]
    fn test_permission_preview() {
        let node = node_with(
            NodeType::Permission,
            r#"{
                "name": "Editors", "resource": "posts", "actions": ["read", "update"], "roles": [],
                "rules": [
                    { "id": "1", "action": "read", "type": "allow", "roles": ["editor"] },
                    { "id": "2", "action": "delete", "type": "deny" },
                    { "id": "3", "action": "update", "type": "conditional",
                      "timeRestrictions": [ { "type": "hours" } ] },
                    { "id": "4", "action": "create" }, { "id": "5", "action": "execute" }
                ],
                "enforcement": { "mode": "audit-only" },
                "audit": { "enabled": true }
            }"#,
        );
        let p = preview(&node);
        assert_eq!(p.title, "Editors");
        let PreviewBody::Permission(body) = p.body else { panic!("not a permission preview") };
        assert_eq!(body.granted_actions, vec!["Read", "Update"]);
        assert_eq!(body.roles, "All users");
        assert_eq!(body.rules.len(), 4);
        assert_eq!(body.rules[0].roles, "editor");
        assert_eq!(body.rules[0].status, RuleStatus::Granted);
        assert_eq!(body.rules[1].status, RuleStatus::Denied);
        assert_eq!(body.rules[2].restrictions, vec!["Time limits"]);
        assert_eq!(body.rules[3].status, RuleStatus::Conditional);
        assert_eq!(body.more.as_deref(), Some("+1 more rules"));
        assert!(!body.enforced);
        assert_eq!(body.audit.as_deref(), Some("Audit logging, 30 days retention"));
        assert_eq!(p.summary, vec!["Rules: 5", "Mode: audit-only"]);
    }

    #[test]
    fn test_unknown_type_preview() {
        let p = preview(&node_with(NodeType::from("chartNode"), "{}"));
        assert_eq!(p.title, "Label");
        assert_eq!(
            p.body,
            PreviewBody::Unknown { message: "No preview available for 'chartNode' nodes".to_string() }
        );
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("read"), "Read");
        assert_eq!(capitalize(""), "");
    }
}
