//! Node configuration schema
//!
//! Typed shapes for the config object of each of the six node types, plus
//! the enumerated choices their inspector editors offer. Node data itself is
//! stored loosely as a [`ConfigValue`] tree; these types describe what that
//! tree is expected to contain, supply the defaults for new nodes, and are
//! used by the graph lint to spot configs that drifted from the schema.

use crate::node::{NodeData, NodeType};
use crate::rules::ValidationRule;
use serde::{Deserialize, Serialize};
use weave_core::{ConfigValue, WeaveResult};

// ============================================================================
// Choices
// ============================================================================

/// A closed set of string values offered as a select or checkbox group
pub trait Choice: Copy + Sized + 'static {
    /// Every value, in display order
    fn all() -> &'static [Self];

    /// Serialized value
    fn as_str(&self) -> &'static str;

    /// Label shown in editors
    fn display_name(&self) -> &'static str;
}

/// Table column data type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    #[default]
    Text,
    Number,
    Date,
    Boolean,
    Email,
    Select,
    Image,
    Link,
    Custom,
}

impl Choice for ColumnType {
    fn all() -> &'static [Self] {
        &[
            ColumnType::Text,
            ColumnType::Number,
            ColumnType::Date,
            ColumnType::Boolean,
            ColumnType::Email,
            ColumnType::Select,
            ColumnType::Image,
            ColumnType::Link,
            ColumnType::Custom,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Text => "text",
            ColumnType::Number => "number",
            ColumnType::Date => "date",
            ColumnType::Boolean => "boolean",
            ColumnType::Email => "email",
            ColumnType::Select => "select",
            ColumnType::Image => "image",
            ColumnType::Link => "link",
            ColumnType::Custom => "custom",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            ColumnType::Text => "Text",
            ColumnType::Number => "Number",
            ColumnType::Date => "Date",
            ColumnType::Boolean => "Boolean",
            ColumnType::Email => "Email",
            ColumnType::Select => "Select",
            ColumnType::Image => "Image",
            ColumnType::Link => "Link",
            ColumnType::Custom => "Custom",
        }
    }
}

/// Where a table gets its rows from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    #[default]
    Static,
    Api,
    Database,
    Form,
}

impl Choice for DataSource {
    fn all() -> &'static [Self] {
        &[
            DataSource::Static,
            DataSource::Api,
            DataSource::Database,
            DataSource::Form,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            DataSource::Static => "static",
            DataSource::Api => "api",
            DataSource::Database => "database",
            DataSource::Form => "form",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            DataSource::Static => "Static Data",
            DataSource::Api => "API Endpoint",
            DataSource::Database => "Database",
            DataSource::Form => "Form Data",
        }
    }
}

/// What a form does on submit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitAction {
    #[default]
    Save,
    Email,
    Api,
    Redirect,
}

impl Choice for SubmitAction {
    fn all() -> &'static [Self] {
        &[
            SubmitAction::Save,
            SubmitAction::Email,
            SubmitAction::Api,
            SubmitAction::Redirect,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            SubmitAction::Save => "save",
            SubmitAction::Email => "email",
            SubmitAction::Api => "api",
            SubmitAction::Redirect => "redirect",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            SubmitAction::Save => "Save to Database",
            SubmitAction::Email => "Send Email",
            SubmitAction::Api => "Call API",
            SubmitAction::Redirect => "Redirect",
        }
    }
}

/// Input type of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Email,
    Password,
    Number,
    Date,
    Datetime,
    Time,
    Select,
    Multiselect,
    Radio,
    Checkbox,
    Textarea,
    File,
    Image,
    Url,
    Phone,
    Currency,
    Relation,
}

impl FieldType {
    /// Placeholder text shown in form previews
    pub fn placeholder(&self) -> &'static str {
        match self {
            FieldType::Email => "user@example.com",
            FieldType::Password => "••••••••",
            FieldType::Number | FieldType::Currency => "0",
            FieldType::Date => "YYYY-MM-DD",
            FieldType::Datetime => "YYYY-MM-DD HH:MM",
            FieldType::Time => "HH:MM",
            FieldType::Url => "https://",
            FieldType::Phone => "+1 (555) 000-0000",
            FieldType::Textarea => "Enter text...",
            FieldType::File | FieldType::Image => "Choose file...",
            FieldType::Select | FieldType::Multiselect | FieldType::Relation => "Select...",
            _ => "Enter value...",
        }
    }
}

impl Choice for FieldType {
    fn all() -> &'static [Self] {
        &[
            FieldType::Text,
            FieldType::Email,
            FieldType::Password,
            FieldType::Number,
            FieldType::Date,
            FieldType::Datetime,
            FieldType::Time,
            FieldType::Select,
            FieldType::Multiselect,
            FieldType::Radio,
            FieldType::Checkbox,
            FieldType::Textarea,
            FieldType::File,
            FieldType::Image,
            FieldType::Url,
            FieldType::Phone,
            FieldType::Currency,
            FieldType::Relation,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Password => "password",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Datetime => "datetime",
            FieldType::Time => "time",
            FieldType::Select => "select",
            FieldType::Multiselect => "multiselect",
            FieldType::Radio => "radio",
            FieldType::Checkbox => "checkbox",
            FieldType::Textarea => "textarea",
            FieldType::File => "file",
            FieldType::Image => "image",
            FieldType::Url => "url",
            FieldType::Phone => "phone",
            FieldType::Currency => "currency",
            FieldType::Relation => "relation",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            FieldType::Text => "Text",
            FieldType::Email => "Email",
            FieldType::Password => "Password",
            FieldType::Number => "Number",
            FieldType::Date => "Date",
            FieldType::Datetime => "Date & Time",
            FieldType::Time => "Time",
            FieldType::Select => "Select",
            FieldType::Multiselect => "Multi-select",
            FieldType::Radio => "Radio",
            FieldType::Checkbox => "Checkbox",
            FieldType::Textarea => "Text Area",
            FieldType::File => "File",
            FieldType::Image => "Image",
            FieldType::Url => "URL",
            FieldType::Phone => "Phone",
            FieldType::Currency => "Currency",
            FieldType::Relation => "Relation",
        }
    }
}

/// Presentation of the forms inside a form group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupStyle {
    #[default]
    Tabs,
    Accordion,
    Wizard,
    Grid,
}

impl Choice for GroupStyle {
    fn all() -> &'static [Self] {
        &[
            GroupStyle::Tabs,
            GroupStyle::Accordion,
            GroupStyle::Wizard,
            GroupStyle::Grid,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            GroupStyle::Tabs => "tabs",
            GroupStyle::Accordion => "accordion",
            GroupStyle::Wizard => "wizard",
            GroupStyle::Grid => "grid",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            GroupStyle::Tabs => "Tabs",
            GroupStyle::Accordion => "Accordion",
            GroupStyle::Wizard => "Wizard",
            GroupStyle::Grid => "Grid",
        }
    }
}

/// What a display node shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Text,
    Html,
    Markdown,
    Template,
    Chart,
    Image,
    Video,
    Iframe,
}

impl Choice for ContentType {
    fn all() -> &'static [Self] {
        &[
            ContentType::Text,
            ContentType::Html,
            ContentType::Markdown,
            ContentType::Template,
            ContentType::Chart,
            ContentType::Image,
            ContentType::Video,
            ContentType::Iframe,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            ContentType::Text => "text",
            ContentType::Html => "html",
            ContentType::Markdown => "markdown",
            ContentType::Template => "template",
            ContentType::Chart => "chart",
            ContentType::Image => "image",
            ContentType::Video => "video",
            ContentType::Iframe => "iframe",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            ContentType::Text => "Text",
            ContentType::Html => "HTML",
            ContentType::Markdown => "Markdown",
            ContentType::Template => "Template",
            ContentType::Chart => "Chart",
            ContentType::Image => "Image",
            ContentType::Video => "Video",
            ContentType::Iframe => "Embedded Page",
        }
    }
}

/// Chart flavour for chart content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Line,
    Bar,
    Pie,
    Doughnut,
    Scatter,
    Area,
}

impl Choice for ChartType {
    fn all() -> &'static [Self] {
        &[
            ChartType::Line,
            ChartType::Bar,
            ChartType::Pie,
            ChartType::Doughnut,
            ChartType::Scatter,
            ChartType::Area,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            ChartType::Line => "line",
            ChartType::Bar => "bar",
            ChartType::Pie => "pie",
            ChartType::Doughnut => "doughnut",
            ChartType::Scatter => "scatter",
            ChartType::Area => "area",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            ChartType::Line => "Line",
            ChartType::Bar => "Bar",
            ChartType::Pie => "Pie",
            ChartType::Doughnut => "Doughnut",
            ChartType::Scatter => "Scatter",
            ChartType::Area => "Area",
        }
    }
}

/// Width mode of a display node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayWidth {
    #[default]
    Auto,
    Full,
    Fixed,
}

impl Choice for DisplayWidth {
    fn all() -> &'static [Self] {
        &[DisplayWidth::Auto, DisplayWidth::Full, DisplayWidth::Fixed]
    }

    fn as_str(&self) -> &'static str {
        match self {
            DisplayWidth::Auto => "auto",
            DisplayWidth::Full => "full",
            DisplayWidth::Fixed => "fixed",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            DisplayWidth::Auto => "Auto",
            DisplayWidth::Full => "Full Width",
            DisplayWidth::Fixed => "Fixed",
        }
    }
}

/// Horizontal alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Choice for Alignment {
    fn all() -> &'static [Self] {
        &[Alignment::Left, Alignment::Center, Alignment::Right]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Alignment::Left => "Left",
            Alignment::Center => "Center",
            Alignment::Right => "Right",
        }
    }
}

/// Kind of trigger an action node renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    #[default]
    Button,
    Link,
    Submit,
    Api,
    Navigation,
}

impl Choice for ActionKind {
    fn all() -> &'static [Self] {
        &[
            ActionKind::Button,
            ActionKind::Link,
            ActionKind::Submit,
            ActionKind::Api,
            ActionKind::Navigation,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Button => "button",
            ActionKind::Link => "link",
            ActionKind::Submit => "submit",
            ActionKind::Api => "api",
            ActionKind::Navigation => "navigation",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            ActionKind::Button => "Button",
            ActionKind::Link => "Link",
            ActionKind::Submit => "Submit",
            ActionKind::Api => "API Call",
            ActionKind::Navigation => "Navigation",
        }
    }
}

/// Visual tone of an action button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStyle {
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
    Outline,
}

impl Choice for ActionStyle {
    fn all() -> &'static [Self] {
        &[
            ActionStyle::Primary,
            ActionStyle::Secondary,
            ActionStyle::Success,
            ActionStyle::Warning,
            ActionStyle::Danger,
            ActionStyle::Outline,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            ActionStyle::Primary => "primary",
            ActionStyle::Secondary => "secondary",
            ActionStyle::Success => "success",
            ActionStyle::Warning => "warning",
            ActionStyle::Danger => "danger",
            ActionStyle::Outline => "outline",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            ActionStyle::Primary => "Primary",
            ActionStyle::Secondary => "Secondary",
            ActionStyle::Success => "Success",
            ActionStyle::Warning => "Warning",
            ActionStyle::Danger => "Danger",
            ActionStyle::Outline => "Outline",
        }
    }
}

/// Operation covered by a permission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionAction {
    Create,
    Read,
    Update,
    Delete,
    Execute,
}

impl Choice for PermissionAction {
    fn all() -> &'static [Self] {
        &[
            PermissionAction::Create,
            PermissionAction::Read,
            PermissionAction::Update,
            PermissionAction::Delete,
            PermissionAction::Execute,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            PermissionAction::Create => "create",
            PermissionAction::Read => "read",
            PermissionAction::Update => "update",
            PermissionAction::Delete => "delete",
            PermissionAction::Execute => "execute",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            PermissionAction::Create => "Create",
            PermissionAction::Read => "Read",
            PermissionAction::Update => "Update",
            PermissionAction::Delete => "Delete",
            PermissionAction::Execute => "Execute",
        }
    }
}

/// Effect of a permission rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleEffect {
    #[default]
    Allow,
    Deny,
    Conditional,
}

impl Choice for RuleEffect {
    fn all() -> &'static [Self] {
        &[RuleEffect::Allow, RuleEffect::Deny, RuleEffect::Conditional]
    }

    fn as_str(&self) -> &'static str {
        match self {
            RuleEffect::Allow => "allow",
            RuleEffect::Deny => "deny",
            RuleEffect::Conditional => "conditional",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            RuleEffect::Allow => "Allow",
            RuleEffect::Deny => "Deny",
            RuleEffect::Conditional => "Conditional",
        }
    }
}

/// How strictly permission rules would be applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnforcementMode {
    #[default]
    Strict,
    Permissive,
    AuditOnly,
}

impl Choice for EnforcementMode {
    fn all() -> &'static [Self] {
        &[
            EnforcementMode::Strict,
            EnforcementMode::Permissive,
            EnforcementMode::AuditOnly,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            EnforcementMode::Strict => "strict",
            EnforcementMode::Permissive => "permissive",
            EnforcementMode::AuditOnly => "audit-only",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            EnforcementMode::Strict => "Strict",
            EnforcementMode::Permissive => "Permissive",
            EnforcementMode::AuditOnly => "Audit Only",
        }
    }
}

/// Device class named in a device restriction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Desktop,
    Mobile,
    Tablet,
}

/// Shape of a time restriction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeRestrictionKind {
    #[default]
    Hours,
    Days,
    DateRange,
    Recurring,
}

// ============================================================================
// Table
// ============================================================================

/// Config of a `tableNode`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableNodeConfig {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub columns: Vec<TableColumn>,
    pub data_source: DataSource,
    pub pagination: bool,
    pub page_size: u32,
    pub sortable: bool,
    pub filterable: bool,
    pub searchable: bool,
    pub selectable: bool,
    pub exportable: bool,
    pub refreshable: bool,
    pub actions: Vec<TableAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styling: Option<TableStyling>,
}

impl Default for TableNodeConfig {
    fn default() -> Self {
        Self {
            title: "New Table".to_string(),
            subtitle: None,
            columns: vec![TableColumn::new("col1", "Column 1", ColumnType::Text)],
            data_source: DataSource::Static,
            pagination: true,
            page_size: 10,
            sortable: true,
            filterable: true,
            searchable: true,
            selectable: false,
            exportable: true,
            refreshable: true,
            actions: Vec::new(),
            styling: None,
        }
    }
}

/// A table column definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableColumn {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type", default)]
    pub column_type: ColumnType,
    #[serde(default)]
    pub sortable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filterable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

impl TableColumn {
    /// Sortable column with the given id, label and type
    pub fn new(id: impl Into<String>, label: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            column_type,
            sortable: true,
            filterable: None,
            width: None,
        }
    }
}

/// A per-row table action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableAction {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type", default = "default_table_action_type")]
    pub action_type: String,
    #[serde(default)]
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<ConfirmationDialog>,
}

fn default_table_action_type() -> String {
    "button".to_string()
}

impl TableAction {
    /// Row button running the named action
    pub fn button(id: impl Into<String>, label: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            action: id.clone(),
            id,
            label: label.into(),
            action_type: default_table_action_type(),
            confirmation: None,
        }
    }
}

/// Confirmation dialog text
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfirmationDialog {
    pub title: String,
    pub message: String,
    pub confirm_text: String,
    pub cancel_text: String,
}

/// Optional table styling
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableStyling {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_background: Option<String>,
}

// ============================================================================
// Form
// ============================================================================

/// Config of a `formNode`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormNodeConfig {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub fields: Vec<FormField>,
    pub layout: FormLayout,
    pub validation: FormValidation,
    pub submit_action: SubmitAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit_button: Option<FormButton>,
}

impl Default for FormNodeConfig {
    fn default() -> Self {
        Self {
            title: "New Form".to_string(),
            subtitle: None,
            fields: vec![FormField::new("field1", "Field 1", FieldType::Text)],
            layout: FormLayout::default(),
            validation: FormValidation::default(),
            submit_action: SubmitAction::Save,
            submit_button: None,
        }
    }
}

/// A form input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<ConfigValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validation: Vec<ValidationRule>,
}

impl FormField {
    /// Optional field with the given id, label and type
    pub fn new(id: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            id: id.into(),
            name: None,
            label: label.into(),
            field_type,
            required: false,
            placeholder: None,
            default_value: None,
            options: Vec::new(),
            validation: Vec::new(),
        }
    }
}

/// Choice offered by select, radio and multiselect fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: ConfigValue,
    pub label: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

/// Form layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormLayout {
    pub columns: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<String>,
}

impl Default for FormLayout {
    fn default() -> Self {
        Self {
            columns: 1,
            spacing: None,
        }
    }
}

/// Form-level validation switches
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormValidation {
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validate_on_change: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_errors_inline: Option<bool>,
}

/// Submit button appearance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormButton {
    pub label: String,
    pub color: ActionStyle,
}

impl Default for FormButton {
    fn default() -> Self {
        Self {
            label: "Submit".to_string(),
            color: ActionStyle::Primary,
        }
    }
}

// ============================================================================
// Form Group
// ============================================================================

/// Config of a `formGroupNode`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormGroupNodeConfig {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ids of the form nodes this group contains
    pub child_forms: Vec<String>,
    pub layout: GroupLayout,
    pub validation: GroupValidation,
    pub submission: GroupSubmission,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation: Option<GroupNavigation>,
}

impl Default for FormGroupNodeConfig {
    fn default() -> Self {
        Self {
            title: "New Form Group".to_string(),
            subtitle: None,
            description: None,
            child_forms: Vec::new(),
            layout: GroupLayout::default(),
            validation: GroupValidation::default(),
            submission: GroupSubmission::default(),
            navigation: None,
        }
    }
}

/// Form group layout
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupLayout {
    pub style: GroupStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_progress: Option<bool>,
}

/// Form group validation switches
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupValidation {
    pub validate_all: bool,
}

/// Form group submission behavior
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupSubmission {
    pub confirm_before_submit: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_message: Option<String>,
}

/// Step navigation inside a group
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupNavigation {
    pub show_step_numbers: bool,
    pub allow_skip: bool,
}

// ============================================================================
// Display
// ============================================================================

/// Config of a `displayNode`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplayNodeConfig {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub content: DisplayContent,
    pub layout: DisplayLayout,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styling: Option<DisplayStyling>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_binding: Option<DataBinding>,
}

impl Default for DisplayNodeConfig {
    fn default() -> Self {
        Self {
            title: "New Display".to_string(),
            subtitle: None,
            content: DisplayContent::default(),
            layout: DisplayLayout::default(),
            styling: None,
            data_binding: None,
        }
    }
}

/// What a display node renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplayContent {
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_config: Option<ChartConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_config: Option<MediaConfig>,
}

impl Default for DisplayContent {
    fn default() -> Self {
        Self {
            content_type: ContentType::Text,
            value: "Sample content".to_string(),
            template: None,
            chart_config: None,
            media_config: None,
        }
    }
}

/// Chart settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub data_source: String,
}

/// Image/video settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MediaConfig {
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Display node layout
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplayLayout {
    pub width: DisplayWidth,
    pub alignment: Alignment,
}

/// Display node styling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplayStyling {
    pub theme: String,
}

impl Default for DisplayStyling {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
        }
    }
}

/// Live data binding (previewed only)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DataBinding {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,
    pub auto_refresh: bool,
}

// ============================================================================
// Action
// ============================================================================

/// Config of an `actionNode`
///
/// The top-level `label`/`actionType`/`style` describe the primary trigger;
/// `actions` lists further triggers rendered as secondary buttons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActionNodeConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub label: String,
    pub action_type: ActionKind,
    pub style: ActionStyle,
    pub target: String,
    pub confirmation: ActionConfirmation,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<ActionDefinition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<ActionPermissions>,
}

impl Default for ActionNodeConfig {
    fn default() -> Self {
        Self {
            title: None,
            label: "Click Me".to_string(),
            action_type: ActionKind::Button,
            style: ActionStyle::Primary,
            target: String::new(),
            confirmation: ActionConfirmation::default(),
            actions: Vec::new(),
            permissions: None,
        }
    }
}

/// Confirmation prompt before an action runs
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActionConfirmation {
    pub enabled: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_text: Option<String>,
}

/// An additional trigger on an action node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionDefinition {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type", default)]
    pub action_type: ActionKind,
    #[serde(default)]
    pub style: ActionStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<String>,
}

/// Role gating for an action (previewed only)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActionPermissions {
    pub enabled: bool,
    pub required_roles: Vec<String>,
}

// ============================================================================
// Permission
// ============================================================================

/// Config of a `permissionNode`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PermissionNodeConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub name: String,
    pub resource: String,
    pub actions: Vec<PermissionAction>,
    pub roles: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<PermissionRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enforcement: Option<Enforcement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit: Option<AuditSettings>,
}

impl Default for PermissionNodeConfig {
    fn default() -> Self {
        Self {
            title: None,
            name: "New Permission".to_string(),
            resource: "users".to_string(),
            actions: vec![PermissionAction::Read],
            roles: vec!["user".to_string()],
            rules: Vec::new(),
            enforcement: None,
            audit: None,
        }
    }
}

/// A single access rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionRule {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub effect: RuleEffect,
    pub action: PermissionAction,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub priority: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub time_restrictions: Vec<TimeRestriction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub device_restrictions: Vec<DeviceRestriction>,
}

/// When a rule applies
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimeRestriction {
    #[serde(rename = "type")]
    pub kind: TimeRestrictionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// 0-6, Sunday to Saturday
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub days: Vec<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// Which devices a rule applies to
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeviceRestriction {
    #[serde(rename = "type")]
    pub effect: RuleEffect,
    pub device_types: Vec<DeviceType>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub browsers: Vec<String>,
}

/// Enforcement settings (previewed only)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Enforcement {
    pub mode: EnforcementMode,
}

/// Audit settings (previewed only)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuditSettings {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_days: Option<u32>,
}

// ============================================================================
// Any config
// ============================================================================

/// A config parsed against the schema of its node type
#[derive(Debug, Clone, PartialEq)]
pub enum AnyNodeConfig {
    Table(TableNodeConfig),
    Form(FormNodeConfig),
    FormGroup(FormGroupNodeConfig),
    Display(DisplayNodeConfig),
    Action(ActionNodeConfig),
    Permission(PermissionNodeConfig),
}

impl AnyNodeConfig {
    /// Typed default config for a built-in node type
    pub fn default_for(node_type: &NodeType) -> Option<Self> {
        let config = match node_type {
            NodeType::Table => AnyNodeConfig::Table(TableNodeConfig::default()),
            NodeType::Form => AnyNodeConfig::Form(FormNodeConfig::default()),
            NodeType::FormGroup => AnyNodeConfig::FormGroup(FormGroupNodeConfig::default()),
            NodeType::Display => AnyNodeConfig::Display(DisplayNodeConfig::default()),
            NodeType::Action => AnyNodeConfig::Action(ActionNodeConfig::default()),
            NodeType::Permission => AnyNodeConfig::Permission(PermissionNodeConfig::default()),
            NodeType::Other(_) => return None,
        };
        Some(config)
    }

    /// Parse a loose config tree against the schema of `node_type`.
    ///
    /// Returns `Ok(None)` for node types without a schema.
    pub fn parse(node_type: &NodeType, config: &ConfigValue) -> WeaveResult<Option<Self>> {
        let parsed = match node_type {
            NodeType::Table => AnyNodeConfig::Table(config.to_typed()?),
            NodeType::Form => AnyNodeConfig::Form(config.to_typed()?),
            NodeType::FormGroup => AnyNodeConfig::FormGroup(config.to_typed()?),
            NodeType::Display => AnyNodeConfig::Display(config.to_typed()?),
            NodeType::Action => AnyNodeConfig::Action(config.to_typed()?),
            NodeType::Permission => AnyNodeConfig::Permission(config.to_typed()?),
            NodeType::Other(_) => return Ok(None),
        };
        Ok(Some(parsed))
    }

    /// Serialize back into a loose config tree
    pub fn to_value(&self) -> WeaveResult<ConfigValue> {
        match self {
            AnyNodeConfig::Table(c) => ConfigValue::from_serializable(c),
            AnyNodeConfig::Form(c) => ConfigValue::from_serializable(c),
            AnyNodeConfig::FormGroup(c) => ConfigValue::from_serializable(c),
            AnyNodeConfig::Display(c) => ConfigValue::from_serializable(c),
            AnyNodeConfig::Action(c) => ConfigValue::from_serializable(c),
            AnyNodeConfig::Permission(c) => ConfigValue::from_serializable(c),
        }
    }
}

/// Label given to freshly created nodes
pub fn default_label(node_type: &NodeType) -> &'static str {
    match node_type {
        NodeType::Table => "New Table",
        NodeType::Form => "New Form",
        NodeType::FormGroup => "New Form Group",
        NodeType::Display => "New Display",
        NodeType::Action => "New Action",
        NodeType::Permission => "New Permission",
        NodeType::Other(_) => "New Node",
    }
}

/// Label and default config for a freshly created node
pub fn default_node_data(node_type: &NodeType) -> WeaveResult<NodeData> {
    let config = match AnyNodeConfig::default_for(node_type) {
        Some(typed) => typed.to_value()?,
        None => ConfigValue::object(),
    };
    Ok(NodeData::new(default_label(node_type), config))
}

/// Data of the sample table shown when the builder opens
pub fn sample_table_data() -> WeaveResult<NodeData> {
    let config = TableNodeConfig {
        title: "Sample Table".to_string(),
        columns: vec![
            TableColumn::new("name", "Name", ColumnType::Text),
            TableColumn::new("email", "Email", ColumnType::Email),
            TableColumn::new("status", "Status", ColumnType::Select),
        ],
        actions: vec![
            TableAction::button("edit", "Edit"),
            TableAction::button("delete", "Delete"),
        ],
        ..TableNodeConfig::default()
    };
    Ok(NodeData::new(
        "Sample Table",
        ConfigValue::from_serializable(&config)?,
    ))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_table_default_json() {
        let data = default_node_data(&NodeType::Table).unwrap();
        assert_eq!(data.label(), "New Table");

        let config = serde_json::to_value(data.config()).unwrap();
        assert_eq!(config["title"], "New Table");
        assert_eq!(config["dataSource"], "static");
        assert_eq!(config["pageSize"], 10);
        assert_eq!(config["pagination"], true);
        assert_eq!(config["selectable"], false);
        assert_eq!(config["columns"][0]["id"], "col1");
        assert_eq!(config["columns"][0]["type"], "text");
        assert_eq!(config["actions"], serde_json::json!([]));
    }

    #[test]
    fn test_form_and_group_defaults() {
        let form = default_node_data(&NodeType::Form).unwrap();
        assert_eq!(form.config().int_or("layout.columns", 0), 1);
        assert!(!form.config().bool_or("validation.required", true));
        assert_eq!(form.config().str_or("submitAction", ""), "save");
        assert_eq!(form.config().str_or("fields.0.label", ""), "Field 1");

        let group = default_node_data(&NodeType::FormGroup).unwrap();
        assert_eq!(group.config().str_or("layout.style", ""), "tabs");
        assert!(group.config().lookup("submission.confirmBeforeSubmit").is_some());
        assert!(group.config().items("childForms").is_empty());
    }

    #[test]
    fn test_action_and_permission_defaults() {
        let action = default_node_data(&NodeType::Action).unwrap();
        assert_eq!(action.config().str_or("label", ""), "Click Me");
        assert_eq!(action.config().str_or("target", "x"), "");
        assert!(!action.config().bool_or("confirmation.enabled", true));

        let permission = default_node_data(&NodeType::Permission).unwrap();
        assert_eq!(
            permission.config().lookup("actions").and_then(|v| v.as_string_list()),
            Some(vec!["read".to_string()])
        );
        assert_eq!(permission.config().str_or("resource", ""), "users");
    }

    #[test]
    fn test_unknown_type_default() {
        let data = default_node_data(&NodeType::from("chartNode")).unwrap();
        assert_eq!(data.label(), "New Node");
        assert!(data.config().as_object().is_some_and(|m| m.is_empty()));
    }

    #[test]
    fn test_parse_partial_config_fills_defaults() {
        let loose: ConfigValue =
            serde_json::from_str(r#"{ "title": "Orders", "pageSize": 25 }"#).unwrap();
        let parsed = AnyNodeConfig::parse(&NodeType::Table, &loose).unwrap();
        match parsed {
            Some(AnyNodeConfig::Table(table)) => {
                assert_eq!(table.title, "Orders");
                assert_eq!(table.page_size, 25);
                assert!(table.pagination);
            }
            other => panic!("unexpected parse result: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_bad_choice() {
        let loose: ConfigValue =
            serde_json::from_str(r#"{ "content": { "type": "hologram" } }"#).unwrap();
        assert!(AnyNodeConfig::parse(&NodeType::Display, &loose).is_err());
        assert!(AnyNodeConfig::parse(&NodeType::from("x"), &loose).unwrap().is_none());
    }

    #[test]
    fn test_choice_strings_match_serde() {
        fn check<T: Choice + Serialize>() {
            for choice in T::all() {
                let json = serde_json::to_value(choice).unwrap();
                assert_eq!(json, serde_json::Value::from(choice.as_str()));
            }
        }
        check::<ColumnType>();
        check::<DataSource>();
        check::<SubmitAction>();
        check::<FieldType>();
        check::<GroupStyle>();
        check::<ContentType>();
        check::<ChartType>();
        check::<DisplayWidth>();
        check::<Alignment>();
        check::<ActionKind>();
        check::<ActionStyle>();
        check::<PermissionAction>();
        check::<RuleEffect>();
        check::<EnforcementMode>();
    }

    #[test]
    fn test_sample_table() {
        let data = sample_table_data().unwrap();
        assert_eq!(data.label(), "Sample Table");
        assert_eq!(data.config().items("columns").len(), 3);
        assert_eq!(data.config().str_or("columns.1.type", ""), "email");
        assert_eq!(data.config().str_or("actions.1.action", ""), "delete");
    }

    #[test]
    fn test_permission_rule_parse() {
        let loose: ConfigValue = serde_json::from_str(
            r#"{
                "name": "Admins",
                "rules": [{
                    "id": "r1", "name": "Office hours", "type": "conditional",
                    "action": "update", "roles": ["admin"],
                    "timeRestrictions": [{ "type": "hours", "startTime": "09:00", "endTime": "17:00" }],
                    "deviceRestrictions": [{ "type": "deny", "deviceTypes": ["mobile"] }]
                }]
            }"#,
        )
        .unwrap();
        let parsed: PermissionNodeConfig = loose.to_typed().unwrap();
        let rule = &parsed.rules[0];
        assert_eq!(rule.effect, RuleEffect::Conditional);
        assert_eq!(rule.time_restrictions[0].start_time.as_deref(), Some("09:00"));
        assert_eq!(rule.device_restrictions[0].device_types, vec![DeviceType::Mobile]);
        assert_eq!(parsed.resource, "users");
    }
}
