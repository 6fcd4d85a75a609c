//! Workflow graph linting
//!
//! Imports adopt whatever the file contains, so the lint never blocks
//! anything. It reports structural problems (dangling edges, repeated ids)
//! and config problems (nodes whose data no longer matches their type's
//! schema) so the UI can surface them.

use crate::config::AnyNodeConfig;
use crate::graph::WorkflowGraph;
use crate::schema::EditorSchema;
use std::collections::HashSet;
use weave_core::{Validatable, WeaveError, WeaveResult};

// ============================================================================
// ValidationResult
// ============================================================================

/// Result of linting a graph
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether no errors were found (warnings allowed)
    pub valid: bool,

    /// Problems that leave parts of the graph unaddressable
    pub errors: Vec<ValidationError>,

    /// Problems the builder tolerates
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Create a clean result
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add an error to the result
    pub fn add_error(&mut self, error: ValidationError) {
        self.valid = false;
        self.errors.push(error);
    }

    /// Add a warning to the result
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Merge another result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        if !other.valid {
            self.valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Whether nothing at all was reported
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Short count line for the status bar, e.g. "1 error, 2 warnings"
    pub fn summary(&self) -> String {
        fn plural(n: usize, word: &str) -> String {
            if n == 1 {
                format!("1 {}", word)
            } else {
                format!("{} {}s", n, word)
            }
        }
        match (self.errors.len(), self.warnings.len()) {
            (0, 0) => "No problems".to_string(),
            (0, w) => plural(w, "warning"),
            (e, 0) => plural(e, "error"),
            (e, w) => format!("{}, {}", plural(e, "error"), plural(w, "warning")),
        }
    }

    /// Convert to a `WeaveResult` (fails if any errors)
    pub fn to_result(self) -> WeaveResult<()> {
        if self.valid {
            Ok(())
        } else {
            let msg = self
                .errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            Err(WeaveError::validation(msg))
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

// ============================================================================
// ValidationError
// ============================================================================

/// A lint error
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub code: ValidationErrorCode,
    pub message: String,
    /// Where the problem is, e.g. `nodes.formNode-17`
    pub path: Option<String>,
    pub suggestion: Option<String>,
}

impl ValidationError {
    /// Create a new error
    pub fn new(code: ValidationErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
            suggestion: None,
        }
    }

    /// Add a path to the error
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add a suggested fix
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(path) = &self.path {
            write!(f, "[{}] {}", path, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

/// Error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorCode {
    EmptyNodeId,
    DuplicateNodeId,
    EmptyEdgeId,
}

// ============================================================================
// ValidationWarning
// ============================================================================

/// A lint warning
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub code: ValidationWarningCode,
    pub message: String,
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Create a new warning
    pub fn new(code: ValidationWarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Add a path
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(path) = &self.path {
            write!(f, "[{}] Warning: {}", path, self.message)
        } else {
            write!(f, "Warning: {}", self.message)
        }
    }
}

/// Warning codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationWarningCode {
    DanglingEdge,
    SelfLoop,
    DuplicateEdgeId,
    UnknownNodeType,
    InvalidConfig,
    MissingField,
    InvalidFieldValue,
}

// ============================================================================
// LintRule trait
// ============================================================================

/// One check run over a whole graph
pub trait LintRule {
    /// Rule name
    fn name(&self) -> &'static str;

    /// What the rule checks
    fn description(&self) -> &'static str;

    /// Check the graph
    fn check(&self, graph: &WorkflowGraph) -> ValidationResult;
}

// ============================================================================
// Linter
// ============================================================================

/// Runs a set of lint rules over a graph
#[derive(Default)]
pub struct Linter {
    rules: Vec<Box<dyn LintRule>>,
}

impl Linter {
    /// Create a linter with no rules
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a linter with the built-in rules
    pub fn with_default_rules() -> Self {
        let mut linter = Self::new();
        linter.add_rule(Box::new(NodeIdsRule));
        linter.add_rule(Box::new(EdgesRule));
        linter.add_rule(Box::new(NodeTypesRule));
        linter.add_rule(Box::new(NodeConfigRule));
        linter
    }

    /// Add a rule
    pub fn add_rule(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(rule);
    }

    /// Names of the configured rules
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run every rule
    pub fn lint(&self, graph: &WorkflowGraph) -> ValidationResult {
        let mut result = ValidationResult::ok();
        for rule in &self.rules {
            result.merge(rule.check(graph));
        }
        result
    }
}

/// Lint a graph with the built-in rules
pub fn lint(graph: &WorkflowGraph) -> ValidationResult {
    Linter::with_default_rules().lint(graph)
}

impl Validatable for WorkflowGraph {
    fn validate(&self) -> WeaveResult<()> {
        lint(self).to_result()
    }
}

// ============================================================================
// Built-in rules
// ============================================================================

/// Rule: node ids are non-empty and unique
pub struct NodeIdsRule;

impl LintRule for NodeIdsRule {
    fn name(&self) -> &'static str {
        "node_ids"
    }

    fn description(&self) -> &'static str {
        "Checks that every node has a unique, non-empty id"
    }

    fn check(&self, graph: &WorkflowGraph) -> ValidationResult {
        let mut result = ValidationResult::ok();
        let mut seen = HashSet::new();

        for (index, node) in graph.nodes.iter().enumerate() {
            if node.id.is_empty() {
                result.add_error(
                    ValidationError::new(ValidationErrorCode::EmptyNodeId, "Node has an empty id")
                        .with_path(format!("nodes[{}]", index)),
                );
                continue;
            }
            if !seen.insert(node.id.as_str()) {
                result.add_error(
                    ValidationError::new(
                        ValidationErrorCode::DuplicateNodeId,
                        format!("Duplicate node id '{}'", node.id),
                    )
                    .with_path(format!("nodes.{}", node.id))
                    .with_suggestion("Only the first node with this id can be selected or edited"),
                );
            }
        }

        result
    }
}

/// Rule: edges have unique ids and point at existing nodes
pub struct EdgesRule;

impl LintRule for EdgesRule {
    fn name(&self) -> &'static str {
        "edges"
    }

    fn description(&self) -> &'static str {
        "Checks edge ids and that both endpoints exist"
    }

    fn check(&self, graph: &WorkflowGraph) -> ValidationResult {
        let mut result = ValidationResult::ok();
        let node_ids: HashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        let mut seen = HashSet::new();

        for (index, edge) in graph.edges.iter().enumerate() {
            if edge.id.is_empty() {
                result.add_error(
                    ValidationError::new(ValidationErrorCode::EmptyEdgeId, "Edge has an empty id")
                        .with_path(format!("edges[{}]", index)),
                );
            } else if !seen.insert(edge.id.as_str()) {
                result.add_warning(
                    ValidationWarning::new(
                        ValidationWarningCode::DuplicateEdgeId,
                        format!("Duplicate edge id '{}'", edge.id),
                    )
                    .with_path(format!("edges.{}", edge.id)),
                );
            }

            for (end, id) in [("source", &edge.source), ("target", &edge.target)] {
                if !node_ids.contains(id.as_str()) {
                    result.add_warning(
                        ValidationWarning::new(
                            ValidationWarningCode::DanglingEdge,
                            format!("Edge {} '{}' does not exist", end, id),
                        )
                        .with_path(format!("edges.{}", edge.id)),
                    );
                }
            }

            if edge.is_self_loop() {
                result.add_warning(
                    ValidationWarning::new(
                        ValidationWarningCode::SelfLoop,
                        format!("Edge connects '{}' to itself", edge.source),
                    )
                    .with_path(format!("edges.{}", edge.id)),
                );
            }
        }

        result
    }
}

/// Rule: node types are known
pub struct NodeTypesRule;

impl LintRule for NodeTypesRule {
    fn name(&self) -> &'static str {
        "node_types"
    }

    fn description(&self) -> &'static str {
        "Flags nodes whose type has no preview or editor"
    }

    fn check(&self, graph: &WorkflowGraph) -> ValidationResult {
        let mut result = ValidationResult::ok();
        for node in graph.nodes.iter().filter(|n| !n.node_type.is_builtin()) {
            result.add_warning(
                ValidationWarning::new(
                    ValidationWarningCode::UnknownNodeType,
                    format!("Unknown node type '{}'", node.node_type),
                )
                .with_path(format!("nodes.{}", node.id)),
            );
        }
        result
    }
}

/// Rule: node data matches the config schema and editor fields
pub struct NodeConfigRule;

impl LintRule for NodeConfigRule {
    fn name(&self) -> &'static str {
        "node_config"
    }

    fn description(&self) -> &'static str {
        "Checks node configs against their type's schema and editor fields"
    }

    fn check(&self, graph: &WorkflowGraph) -> ValidationResult {
        let mut result = ValidationResult::ok();

        for node in graph.nodes.iter().filter(|n| n.node_type.is_builtin()) {
            let node_path = format!("nodes.{}", node.id);

            if let Err(e) = AnyNodeConfig::parse(&node.node_type, node.config()) {
                result.add_warning(
                    ValidationWarning::new(
                        ValidationWarningCode::InvalidConfig,
                        format!("Config does not match {} schema: {}", node.node_type, e),
                    )
                    .with_path(&node_path),
                );
            }

            for field in &EditorSchema::for_type(&node.node_type).fields {
                let field_path = format!("{}.data.{}", node_path, field.path);
                match node.data.lookup(field.path) {
                    None => result.add_warning(
                        ValidationWarning::new(
                            ValidationWarningCode::MissingField,
                            format!("'{}' is missing; '{}' will be shown", field.label, field.default),
                        )
                        .with_path(field_path),
                    ),
                    Some(value) => {
                        if let Err(e) = field.check(&node.id, value) {
                            result.add_warning(
                                ValidationWarning::new(
                                    ValidationWarningCode::InvalidFieldValue,
                                    e.to_string(),
                                )
                                .with_path(field_path),
                            );
                        }
                    }
                }
            }
        }

        result
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::{Connection, Edge};
    use crate::node::{Node, NodeData, NodeType};
    use weave_core::{ConfigValue, Position};

    fn codes(result: &ValidationResult) -> Vec<ValidationWarningCode> {
        result.warnings.iter().map(|w| w.code).collect()
    }

    #[test]
    fn test_fresh_graph_is_clean() {
        let mut graph = WorkflowGraph::with_sample().unwrap();
        for node_type in NodeType::BUILTIN.iter() {
            graph.add_node(node_type.clone()).unwrap();
        }
        let result = lint(&graph);
        assert!(result.is_clean(), "{:?}", result);
        assert_eq!(result.summary(), "No problems");
        assert!(graph.is_valid());
    }

    #[test]
    fn test_dangling_and_self_loop() {
        let mut graph = WorkflowGraph::new();
        let id = graph.add_node(NodeType::Action).unwrap();
        graph.connect(Connection::new(id.as_str(), id.as_str()));
        graph.insert_edge(Edge::new("e-ghost", id.as_str(), "ghost"));

        let result = lint(&graph);
        assert!(result.valid);
        assert_eq!(
            codes(&result),
            vec![ValidationWarningCode::SelfLoop, ValidationWarningCode::DanglingEdge]
        );
        assert_eq!(result.summary(), "2 warnings");
    }

    #[test]
    fn test_duplicate_ids() {
        let mut graph = WorkflowGraph::new();
        for _ in 0..2 {
            graph.insert_node(Node::new("n", NodeType::from("mystery"), Position::zero(), NodeData::default()));
            graph.insert_edge(Edge::new("e", "n", "n"));
        }

        let result = lint(&graph);
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].code, ValidationErrorCode::DuplicateNodeId);
        assert!(codes(&result).contains(&ValidationWarningCode::DuplicateEdgeId));
        assert!(codes(&result).contains(&ValidationWarningCode::UnknownNodeType));
        assert!(graph.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_config_problems() {
        let mut graph = WorkflowGraph::new();
        let bare = Node::new("t", NodeType::Table, Position::zero(), NodeData::new("T", ConfigValue::object()));
        graph.insert_node(bare);

        let mut broken = Node::new(
            "d",
            NodeType::Display,
            Position::zero(),
            crate::config::default_node_data(&NodeType::Display).unwrap(),
        );
        broken
            .data
            .set(&weave_core::ConfigPath::parse("config.content.type").unwrap(), ConfigValue::from("hologram"))
            .unwrap();
        graph.insert_node(broken);

        let result = lint(&graph);
        let found = codes(&result);
        assert!(found.contains(&ValidationWarningCode::MissingField));
        assert!(found.contains(&ValidationWarningCode::InvalidConfig));
        assert!(found.contains(&ValidationWarningCode::InvalidFieldValue));
        assert!(result.valid);
    }

    #[test]
    fn test_custom_linter() {
        let mut linter = Linter::new();
        linter.add_rule(Box::new(NodeTypesRule));
        assert_eq!(linter.rule_names(), vec!["node_types"]);
        assert!(linter.lint(&WorkflowGraph::new()).is_clean());
    }

    #[test]
    fn test_summary_wording() {
        let mut result = ValidationResult::ok();
        result.add_error(ValidationError::new(ValidationErrorCode::EmptyNodeId, "x"));
        result.add_warning(ValidationWarning::new(ValidationWarningCode::SelfLoop, "y"));
        assert_eq!(result.summary(), "1 error, 1 warning");
        assert_eq!(result.warnings[0].to_string(), "Warning: y");
    }
}
