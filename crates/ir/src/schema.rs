//! Inspector editor schema
//!
//! Each node type declares the fields its inspector edits as a list of
//! [`FieldDescriptor`]s. The inspector renders them generically, and
//! [`WorkflowGraph::check_node_data`](crate::WorkflowGraph::check_node_data)
//! reports writes that stray from the declared paths or kinds. Select and checkbox-group options
//! come from the [`Choice`] enums of the config schema, so editor and
//! schema cannot drift apart.

use crate::config::{
    ActionKind, ActionStyle, Alignment, Choice, ContentType, DataSource, DisplayWidth,
    GroupStyle, PermissionAction, SubmitAction,
};
use crate::node::{NodeData, NodeType};
use crate::rules::{ValidationRule, check_all};
use weave_core::{ConfigPath, ConfigValue, ValueKind, WeaveError, WeaveResult};

// ============================================================================
// Sections
// ============================================================================

/// Collapsible inspector section a field is shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Basic,
    Configuration,
    Styling,
    Advanced,
}

impl Section {
    /// All sections in display order
    pub fn all() -> &'static [Section] {
        &[
            Section::Basic,
            Section::Configuration,
            Section::Styling,
            Section::Advanced,
        ]
    }

    /// Section heading
    pub fn title(&self) -> &'static str {
        match self {
            Section::Basic => "Basic Properties",
            Section::Configuration => "Configuration",
            Section::Styling => "Styling",
            Section::Advanced => "Advanced",
        }
    }

    /// Whether the section starts expanded
    pub fn open_by_default(&self) -> bool {
        matches!(self, Section::Basic | Section::Configuration)
    }
}

// ============================================================================
// Widgets
// ============================================================================

/// One option of a select or checkbox group
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: ConfigValue,
    pub label: &'static str,
}

impl SelectOption {
    fn from_choice<T: Choice>(choice: &T) -> Self {
        Self {
            value: ConfigValue::from(choice.as_str()),
            label: choice.display_name(),
        }
    }
}

/// Input widget used to edit a field
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    /// Single-line text
    Text,
    /// Multi-line text
    TextArea { rows: u8 },
    /// One value out of a fixed list
    Select { options: Vec<SelectOption> },
    /// Boolean toggle
    Checkbox,
    /// Numeric input
    Number { min: Option<f64>, max: Option<f64> },
    /// Any subset of a fixed list, stored as an array of strings
    CheckboxGroup { options: Vec<SelectOption> },
    /// Comma-separated text stored as an array of trimmed, non-empty strings
    CommaList,
}

impl Widget {
    /// Select over every value of a choice enum
    pub fn select<T: Choice>() -> Self {
        Widget::Select {
            options: T::all().iter().map(SelectOption::from_choice).collect(),
        }
    }

    /// Checkbox group over every value of a choice enum
    pub fn checkbox_group<T: Choice>() -> Self {
        Widget::CheckboxGroup {
            options: T::all().iter().map(SelectOption::from_choice).collect(),
        }
    }

    /// Kind of value the widget writes
    pub fn value_kind(&self) -> ValueKind {
        match self {
            Widget::Text | Widget::TextArea { .. } => ValueKind::String,
            Widget::Select { options } => options
                .first()
                .map(|o| o.value.kind())
                .unwrap_or(ValueKind::String),
            Widget::Checkbox => ValueKind::Bool,
            Widget::Number { .. } => ValueKind::Number,
            Widget::CheckboxGroup { .. } | Widget::CommaList => ValueKind::Array,
        }
    }

    /// Check the shape of a value without running validation rules
    fn accepts(&self, path: &str, value: &ConfigValue) -> WeaveResult<()> {
        let expected = self.value_kind();
        if value.kind() != expected {
            return Err(WeaveError::type_mismatch(
                path,
                expected.to_string(),
                value.kind().to_string(),
            ));
        }

        match self {
            Widget::Select { options } => {
                if !options.iter().any(|o| &o.value == value) {
                    return Err(WeaveError::validation(format!(
                        "'{}' is not an option for {}",
                        value, path
                    )));
                }
            }
            Widget::CheckboxGroup { options } => {
                for item in value.as_array().map(Vec::as_slice).unwrap_or(&[]) {
                    if !options.iter().any(|o| &o.value == item) {
                        return Err(WeaveError::validation(format!(
                            "'{}' is not an option for {}",
                            item, path
                        )));
                    }
                }
            }
            Widget::CommaList => {
                if value
                    .as_array()
                    .is_some_and(|items| items.iter().any(|i| i.as_str().is_none()))
                {
                    return Err(WeaveError::type_mismatch(path, "array of strings", "mixed array"));
                }
            }
            _ => {}
        }
        Ok(())
    }
}

// ============================================================================
// FieldDescriptor
// ============================================================================

/// Shows a field only while another field holds a given value
#[derive(Debug, Clone, PartialEq)]
pub struct Visibility {
    pub path: &'static str,
    pub equals: ConfigValue,
}

/// Declarative description of one editable field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Dotted path into node data
    pub path: &'static str,
    pub label: &'static str,
    pub widget: Widget,
    pub section: Section,
    pub rules: Vec<ValidationRule>,
    /// Value shown when the node has none (or one of the wrong kind)
    pub default: ConfigValue,
    pub visible_when: Option<Visibility>,
    pub help: Option<&'static str>,
}

impl FieldDescriptor {
    fn new(path: &'static str, label: &'static str, widget: Widget, default: ConfigValue) -> Self {
        Self {
            path,
            label,
            widget,
            section: Section::Configuration,
            rules: Vec::new(),
            default,
            visible_when: None,
            help: None,
        }
    }

    /// Single-line text field
    pub fn text(path: &'static str, label: &'static str) -> Self {
        Self::new(path, label, Widget::Text, ConfigValue::from(""))
    }

    /// Multi-line text field
    pub fn text_area(path: &'static str, label: &'static str, rows: u8) -> Self {
        Self::new(path, label, Widget::TextArea { rows }, ConfigValue::from(""))
    }

    /// Select over a choice enum; the default is the enum's first value
    pub fn select<T: Choice>(path: &'static str, label: &'static str) -> Self {
        let default = T::all()
            .first()
            .map(|c| ConfigValue::from(c.as_str()))
            .unwrap_or_default();
        Self::new(path, label, Widget::select::<T>(), default)
    }

    /// Select over explicit integer options
    pub fn int_select(
        path: &'static str,
        label: &'static str,
        options: &[(i64, &'static str)],
    ) -> Self {
        let options: Vec<SelectOption> = options
            .iter()
            .map(|(value, label)| SelectOption {
                value: ConfigValue::Int(*value),
                label,
            })
            .collect();
        let default = options.first().map(|o| o.value.clone()).unwrap_or_default();
        Self::new(path, label, Widget::Select { options }, default)
    }

    /// Boolean checkbox
    pub fn checkbox(path: &'static str, label: &'static str) -> Self {
        Self::new(path, label, Widget::Checkbox, ConfigValue::Bool(false))
    }

    /// Bounded numeric input; bounds are also enforced as validation rules
    pub fn number(path: &'static str, label: &'static str, min: f64, max: f64) -> Self {
        let mut field = Self::new(
            path,
            label,
            Widget::Number {
                min: Some(min),
                max: Some(max),
            },
            ConfigValue::Int(min as i64),
        );
        field.rules = vec![ValidationRule::min(min), ValidationRule::max(max)];
        field
    }

    /// Checkbox group over a choice enum
    pub fn checkbox_group<T: Choice>(path: &'static str, label: &'static str) -> Self {
        Self::new(
            path,
            label,
            Widget::checkbox_group::<T>(),
            ConfigValue::Array(Vec::new()),
        )
    }

    /// Comma-separated list of strings
    pub fn comma_list(path: &'static str, label: &'static str) -> Self {
        Self::new(path, label, Widget::CommaList, ConfigValue::Array(Vec::new()))
    }

    /// Place the field in another section
    pub fn in_section(mut self, section: Section) -> Self {
        self.section = section;
        self
    }

    /// Add a validation rule
    pub fn with_rule(mut self, rule: ValidationRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Override the fallback value
    pub fn with_default(mut self, default: impl Into<ConfigValue>) -> Self {
        self.default = default.into();
        self
    }

    /// Only show the field while `path` holds `equals`
    pub fn visible_when(mut self, path: &'static str, equals: impl Into<ConfigValue>) -> Self {
        self.visible_when = Some(Visibility {
            path,
            equals: equals.into(),
        });
        self
    }

    /// Hint shown under the input
    pub fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }

    /// Parsed path
    pub fn config_path(&self) -> WeaveResult<ConfigPath> {
        ConfigPath::parse(self.path)
    }

    /// Current value in `data`, or the declared default when absent or of
    /// the wrong kind
    pub fn read(&self, data: &NodeData) -> ConfigValue {
        match data.lookup(self.path) {
            Some(value) if value.kind() == self.widget.value_kind() => value.clone(),
            _ => self.default.clone(),
        }
    }

    /// Whether the field should be shown for `data`
    pub fn is_visible(&self, data: &NodeData) -> bool {
        match &self.visible_when {
            Some(cond) => data.lookup(cond.path) == Some(&cond.equals),
            None => true,
        }
    }

    /// Check a candidate value: widget kind, option membership, then rules
    pub fn check(&self, node_id: &str, value: &ConfigValue) -> WeaveResult<()> {
        self.widget.accepts(self.path, value)?;
        let failures = check_all(&self.rules, value);
        if failures.is_empty() {
            Ok(())
        } else {
            Err(WeaveError::field_validation(node_id, self.path, failures.join("; ")))
        }
    }
}

// ============================================================================
// EditorSchema
// ============================================================================

/// All editable fields of one node type
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSchema {
    pub node_type: NodeType,
    pub fields: Vec<FieldDescriptor>,
}

impl EditorSchema {
    /// Schema for a node type. Unknown types only expose the label.
    pub fn for_type(node_type: &NodeType) -> Self {
        let mut fields = vec![
            FieldDescriptor::text("label", "Label")
                .in_section(Section::Basic)
                .with_rule(ValidationRule::max_length(120)),
        ];
        fields.extend(config_fields(node_type));
        Self {
            node_type: node_type.clone(),
            fields,
        }
    }

    /// Descriptor declared for `path`
    pub fn field(&self, path: &ConfigPath) -> Option<&FieldDescriptor> {
        let wanted = path.to_string();
        self.fields.iter().find(|f| f.path == wanted)
    }

    /// Descriptors in a section, in declaration order
    pub fn section(&self, section: Section) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(move |f| f.section == section)
    }

    /// Whether the type has any config fields beyond the basics
    pub fn has_config(&self) -> bool {
        self.fields.iter().any(|f| f.section != Section::Basic)
    }

    /// Look up the descriptor for `path` and check `value` against it
    pub fn check(&self, node_id: &str, path: &ConfigPath, value: &ConfigValue) -> WeaveResult<()> {
        let field = self.field(path).ok_or_else(|| WeaveError::UnknownField {
            node_type: self.node_type.to_string(),
            path: path.to_string(),
        })?;
        field.check(node_id, value)
    }
}

fn config_fields(node_type: &NodeType) -> Vec<FieldDescriptor> {
    match node_type {
        NodeType::Table => vec![
            FieldDescriptor::text("config.title", "Table Title").with_default("Data Table"),
            FieldDescriptor::select::<DataSource>("config.dataSource", "Data Source"),
            FieldDescriptor::checkbox("config.pagination", "Enable Pagination").with_default(true),
            FieldDescriptor::number("config.pageSize", "Page Size", 1.0, 100.0)
                .with_default(10)
                .visible_when("config.pagination", true),
            FieldDescriptor::checkbox("config.sortable", "Sortable Columns"),
            FieldDescriptor::checkbox("config.filterable", "Filterable"),
            FieldDescriptor::checkbox("config.searchable", "Searchable"),
            FieldDescriptor::checkbox("config.selectable", "Row Selection")
                .in_section(Section::Advanced),
            FieldDescriptor::checkbox("config.exportable", "Allow Export")
                .in_section(Section::Advanced),
            FieldDescriptor::checkbox("config.refreshable", "Allow Refresh")
                .in_section(Section::Advanced),
        ],
        NodeType::Form => vec![
            FieldDescriptor::text("config.title", "Form Title").with_default("Form"),
            FieldDescriptor::select::<SubmitAction>("config.submitAction", "Submit Action"),
            FieldDescriptor::int_select(
                "config.layout.columns",
                "Layout Columns",
                &[(1, "Single Column"), (2, "Two Columns"), (3, "Three Columns")],
            ),
            FieldDescriptor::checkbox("config.validation.required", "Require All Fields"),
        ],
        NodeType::FormGroup => vec![
            FieldDescriptor::text("config.title", "Group Title").with_default("Form Group"),
            FieldDescriptor::select::<GroupStyle>("config.layout.style", "Layout Style"),
            FieldDescriptor::checkbox("config.validation.validateAll", "Validate All Forms"),
            FieldDescriptor::checkbox(
                "config.submission.confirmBeforeSubmit",
                "Confirm Before Submit",
            ),
        ],
        NodeType::Display => vec![
            FieldDescriptor::text("config.title", "Display Title").with_default("Display"),
            FieldDescriptor::select::<ContentType>("config.content.type", "Content Type"),
            FieldDescriptor::text_area("config.content.value", "Content", 4),
            FieldDescriptor::select::<DisplayWidth>("config.layout.width", "Width")
                .in_section(Section::Styling),
            FieldDescriptor::select::<Alignment>("config.layout.alignment", "Alignment")
                .in_section(Section::Styling),
        ],
        NodeType::Action => vec![
            FieldDescriptor::text("config.label", "Button Label")
                .with_default("Click Me")
                .with_rule(ValidationRule::required()),
            FieldDescriptor::select::<ActionKind>("config.actionType", "Action Type"),
            FieldDescriptor::text("config.target", "Target")
                .with_help("URL, route or action name"),
            FieldDescriptor::checkbox("config.confirmation.enabled", "Require Confirmation"),
            FieldDescriptor::text_area("config.confirmation.message", "Confirmation Message", 2)
                .with_default("Are you sure?")
                .visible_when("config.confirmation.enabled", true),
            FieldDescriptor::select::<ActionStyle>("config.style", "Button Style")
                .in_section(Section::Styling),
        ],
        NodeType::Permission => vec![
            FieldDescriptor::text("config.name", "Permission Name")
                .with_rule(ValidationRule::required()),
            FieldDescriptor::text("config.resource", "Resource").with_rule(
                ValidationRule::pattern(
                    "^[A-Za-z][A-Za-z0-9_.-]*$",
                    "Use letters, digits, '.', '-' or '_'",
                ),
            ),
            FieldDescriptor::checkbox_group::<PermissionAction>("config.actions", "Actions"),
            FieldDescriptor::comma_list("config.roles", "Roles")
                .with_help("Comma-separated, e.g. admin, editor"),
        ],
        NodeType::Other(_) => Vec::new(),
    }
}

// ============================================================================
// Input helpers
// ============================================================================

/// Split comma-separated text into trimmed, non-empty strings
pub fn parse_comma_list(text: &str) -> ConfigValue {
    ConfigValue::Array(
        text.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ConfigValue::from)
            .collect(),
    )
}

/// Render a string array as comma-separated text
pub fn format_comma_list(value: &ConfigValue) -> String {
    value.as_string_list().unwrap_or_default().join(", ")
}

/// Add or remove `option` from a string array, keeping existing order
pub fn toggle_option(current: &ConfigValue, option: &str, checked: bool) -> ConfigValue {
    let mut items = current.as_string_list().unwrap_or_default();
    let present = items.iter().any(|i| i == option);
    if checked && !present {
        items.push(option.to_string());
    } else if !checked {
        items.retain(|i| i != option);
    }
    ConfigValue::from(items)
}

/// Parse numeric text typed into an input, falling back on bad input
pub fn parse_number_input(text: &str, fallback: i64) -> ConfigValue {
    let trimmed = text.trim();
    match trimmed.parse::<i64>() {
        Ok(n) => ConfigValue::Int(n),
        Err(_) => match trimmed.parse::<f64>() {
            Ok(f) if f.is_finite() => ConfigValue::Int(f.trunc() as i64),
            _ => ConfigValue::Int(fallback),
        },
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_node_data;
    use pretty_assertions::assert_eq;

    fn path(s: &str) -> ConfigPath {
        ConfigPath::parse(s).unwrap()
    }

    #[test]
    fn test_defaults_cover_every_declared_field() {
        for node_type in NodeType::BUILTIN.iter() {
            let schema = EditorSchema::for_type(node_type);
            let data = default_node_data(node_type).unwrap();
            for field in &schema.fields {
                let value = data.lookup(field.path).unwrap_or_else(|| {
                    panic!("{} default config lacks {}", node_type, field.path)
                });
                assert_eq!(
                    value.kind(),
                    field.widget.value_kind(),
                    "{} field {} has wrong kind",
                    node_type,
                    field.path
                );
                assert!(
                    field.check("new", value).is_ok(),
                    "{} default for {} fails its own rules",
                    node_type,
                    field.path
                );
            }
        }
    }

    #[test]
    fn test_unknown_type_has_only_label() {
        let schema = EditorSchema::for_type(&NodeType::from("chartNode"));
        assert_eq!(schema.fields.len(), 1);
        assert!(!schema.has_config());
        assert!(EditorSchema::for_type(&NodeType::Table).has_config());
    }

    #[test]
    fn test_schema_check_rejects_undeclared_path() {
        let schema = EditorSchema::for_type(&NodeType::Table);
        let err = schema
            .check("t1", &path("config.bogus"), &ConfigValue::from("x"))
            .unwrap_err();
        assert!(matches!(err, WeaveError::UnknownField { .. }));
    }

    #[test]
    fn test_schema_check_kind_and_options() {
        let schema = EditorSchema::for_type(&NodeType::Table);
        let err = schema
            .check("t1", &path("config.pagination"), &ConfigValue::from("yes"))
            .unwrap_err();
        assert!(matches!(err, WeaveError::TypeMismatch { .. }));

        assert!(schema
            .check("t1", &path("config.dataSource"), &ConfigValue::from("ftp"))
            .is_err());
        assert!(schema
            .check("t1", &path("config.dataSource"), &ConfigValue::from("api"))
            .is_ok());
    }

    #[test]
    fn test_page_size_bounds() {
        let schema = EditorSchema::for_type(&NodeType::Table);
        let page_size = path("config.pageSize");
        assert!(schema.check("t1", &page_size, &ConfigValue::Int(50)).is_ok());
        let err = schema.check("t1", &page_size, &ConfigValue::Int(0)).unwrap_err();
        assert!(matches!(err, WeaveError::FieldValidation { .. }));
        assert!(schema.check("t1", &page_size, &ConfigValue::Int(101)).is_err());
    }

    #[test]
    fn test_form_columns_int_select() {
        let schema = EditorSchema::for_type(&NodeType::Form);
        let columns = path("config.layout.columns");
        assert!(schema.check("f", &columns, &ConfigValue::Int(3)).is_ok());
        assert!(schema.check("f", &columns, &ConfigValue::Int(4)).is_err());
        assert!(schema.check("f", &columns, &ConfigValue::from("2")).is_err());
    }

    #[test]
    fn test_permission_actions_group() {
        let schema = EditorSchema::for_type(&NodeType::Permission);
        let actions = path("config.actions");
        let ok = ConfigValue::from(vec!["read", "delete"]);
        let bad = ConfigValue::from(vec!["read", "fly"]);
        assert!(schema.check("p", &actions, &ok).is_ok());
        assert!(schema.check("p", &actions, &bad).is_err());
    }

    #[test]
    fn test_visibility() {
        let schema = EditorSchema::for_type(&NodeType::Table);
        let page_size = schema.field(&path("config.pageSize")).unwrap();
        let mut data = default_node_data(&NodeType::Table).unwrap();
        assert!(page_size.is_visible(&data));

        data.set(&path("config.pagination"), ConfigValue::Bool(false)).unwrap();
        assert!(!page_size.is_visible(&data));
    }

    #[test]
    fn test_read_falls_back_to_default() {
        let schema = EditorSchema::for_type(&NodeType::Display);
        let title = schema.field(&path("config.title")).unwrap();
        let mut data = NodeData::default();
        assert_eq!(title.read(&data), ConfigValue::from("Display"));

        data.set(&path("config.title"), ConfigValue::Int(3)).unwrap();
        assert_eq!(title.read(&data), ConfigValue::from("Display"));

        data.set(&path("config.title"), ConfigValue::from("Welcome")).unwrap();
        assert_eq!(title.read(&data), ConfigValue::from("Welcome"));
    }

    #[test]
    fn test_sections() {
        let schema = EditorSchema::for_type(&NodeType::Display);
        let styling: Vec<_> = schema.section(Section::Styling).map(|f| f.path).collect();
        assert_eq!(styling, vec!["config.layout.width", "config.layout.alignment"]);
        assert!(Section::Basic.open_by_default());
        assert!(!Section::Advanced.open_by_default());
    }

    #[test]
    fn test_comma_list_helpers() {
        let roles = parse_comma_list(" admin, ,editor ,  ");
        assert_eq!(roles, ConfigValue::from(vec!["admin", "editor"]));
        assert_eq!(format_comma_list(&roles), "admin, editor");
        assert_eq!(parse_comma_list(""), ConfigValue::Array(Vec::new()));
    }

    #[test]
    fn test_toggle_option() {
        let current = ConfigValue::from(vec!["read"]);
        let added = toggle_option(&current, "create", true);
        assert_eq!(added, ConfigValue::from(vec!["read", "create"]));
        assert_eq!(toggle_option(&added, "create", true), added);
        assert_eq!(toggle_option(&added, "read", false), ConfigValue::from(vec!["create"]));
    }

    #[test]
    fn test_parse_number_input() {
        assert_eq!(parse_number_input("25", 10), ConfigValue::Int(25));
        assert_eq!(parse_number_input(" 12.9 ", 10), ConfigValue::Int(12));
        assert_eq!(parse_number_input("abc", 0), ConfigValue::Int(0));
        assert_eq!(parse_number_input("", 10), ConfigValue::Int(10));
    }
}
