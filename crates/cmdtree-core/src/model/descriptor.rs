use serde::Serialize;

use crate::settings::USAGE_PLACEHOLDER;

use super::alias::AliasSet;

/// Read-only snapshot of a command tree, suitable for help listings
///
/// Handlers and predicates cannot be serialized; a descriptor only records
/// whether a predicate is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    pub description: String,
    pub usage: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
    pub has_predicate: bool,
    pub min_args: Option<usize>,
    pub max_args: Option<usize>,
    pub player_only: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ChildDescriptor>,
}

/// A child entry of a `CommandDescriptor`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChildDescriptor {
    pub aliases: AliasSet,
    pub command: CommandDescriptor,
}

impl CommandDescriptor {
    /// Rendered usage of this node and every descendant, depth first
    ///
    /// Every line substitutes the same `label`, matching what the dispatcher
    /// sends: the placeholder always stands for the word typed at the root.
    pub fn usage_lines(&self, label: &str) -> Vec<String> {
        let mut lines = Vec::new();
        self.collect_usage(label, &mut lines);
        lines
    }

    fn collect_usage(&self, label: &str, lines: &mut Vec<String>) {
        lines.push(self.usage.replace(USAGE_PLACEHOLDER, label));
        for child in &self.children {
            child.command.collect_usage(label, lines);
        }
    }
}
