//! Palette templates
//!
//! The palette lists one template per built-in node type. Instantiating a
//! template produces a node with that type's default label and config.

use crate::node::NodeType;

/// Upper bound (exclusive) of the random x/y offset given to new nodes
pub const SPAWN_RANGE: f64 = 400.0;

/// A draggable entry in the node palette
#[derive(Debug, Clone, PartialEq)]
pub struct NodeTemplate {
    pub node_type: NodeType,
    pub label: &'static str,
    pub description: &'static str,
    /// Decorative glyph shown on the palette tile and node header
    pub glyph: &'static str,
    /// Accent colour, also used for minimap dots
    pub color: &'static str,
}

impl NodeTemplate {
    const fn new(
        node_type: NodeType,
        label: &'static str,
        description: &'static str,
        glyph: &'static str,
        color: &'static str,
    ) -> Self {
        Self {
            node_type,
            label,
            description,
            glyph,
            color,
        }
    }
}

/// Every palette template, in palette order
pub fn templates() -> &'static [NodeTemplate] {
    static TEMPLATES: [NodeTemplate; 6] = [
        NodeTemplate::new(
            NodeType::Table,
            "Table",
            "Display data in a grid format",
            "▦",
            "#3b82f6",
        ),
        NodeTemplate::new(
            NodeType::Form,
            "Form",
            "Create input forms",
            "✎",
            "#22c55e",
        ),
        NodeTemplate::new(
            NodeType::FormGroup,
            "Form Group",
            "Group multiple forms",
            "❐",
            "#a855f7",
        ),
        NodeTemplate::new(
            NodeType::Display,
            "Display",
            "Show content and media",
            "◉",
            "#f97316",
        ),
        NodeTemplate::new(
            NodeType::Action,
            "Action",
            "Buttons and triggers",
            "⚡",
            "#ef4444",
        ),
        NodeTemplate::new(
            NodeType::Permission,
            "Permission",
            "Access control",
            "⚿",
            "#6b7280",
        ),
    ];
    &TEMPLATES
}

/// Template for a node type, if it has one
pub fn template_for(node_type: &NodeType) -> Option<&'static NodeTemplate> {
    templates().iter().find(|t| &t.node_type == node_type)
}

/// Accent colour for a node type, grey for unknown types
pub fn color_for(node_type: &NodeType) -> &'static str {
    template_for(node_type).map(|t| t.color).unwrap_or("#9ca3af")
}

/// Glyph for a node type, a plain square for unknown types
pub fn glyph_for(node_type: &NodeType) -> &'static str {
    template_for(node_type).map(|t| t.glyph).unwrap_or("□")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_one_template_per_builtin_type() {
        let types: Vec<_> = templates().iter().map(|t| t.node_type.clone()).collect();
        assert_eq!(types, NodeType::BUILTIN.to_vec());
    }

    #[test]
    fn test_template_lookup() {
        let form_group = template_for(&NodeType::FormGroup).unwrap();
        assert_eq!(form_group.label, "Form Group");
        assert_eq!(form_group.description, "Group multiple forms");

        assert!(template_for(&NodeType::from("chartNode")).is_none());
        assert_eq!(color_for(&NodeType::from("chartNode")), "#9ca3af");
        assert_eq!(glyph_for(&NodeType::Table), "▦");
    }
}
