//! Plain nested form of a hierarchy, as stored in JSON or YAML.
//!
//! ```json
//! {
//!   "alternatives": ["Tech Upgrade", "Enhanced Training"],
//!   "root": {
//!     "id": "goal",
//!     "judgments": [["Case Complexity", "Staffing Levels", 3]],
//!     "children": [
//!       {"id": "Case Complexity", "judgments": [["Tech Upgrade", "Enhanced Training", 7]],
//!        "children": ["Tech Upgrade", "Enhanced Training"]},
//!       {"id": "Staffing Levels", "rows": [[1, 0.5], [2, 1]],
//!        "children": ["Tech Upgrade", "Enhanced Training"]}
//!     ]
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::{ComparisonMatrix, Hierarchy, HierarchyChild, HierarchyNode, ValidationError};

/// One ordered judgment: `row` is `value` times as important as `column`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgmentDefinition(pub String, pub String, pub f64);

/// A child entry: a bare string is an alternative, an object is a criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChildDefinition {
    Alternative(String),
    Criterion(NodeDefinition),
}

impl ChildDefinition {
    fn label(&self) -> &str {
        match self {
            ChildDefinition::Alternative(id) => id,
            ChildDefinition::Criterion(node) => &node.id,
        }
    }
}

/// A decision node in nested form. Matrix items follow child order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDefinition {
    pub id: String,
    #[serde(default)]
    pub judgments: Vec<JudgmentDefinition>,
    /// Explicit matrix rows; mutually exclusive with `judgments`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<Vec<f64>>>,
    pub children: Vec<ChildDefinition>,
}

/// A complete hierarchy in nested form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyDefinition {
    /// Alternatives to rank, including any no matrix mentions.
    #[serde(default)]
    pub alternatives: Vec<String>,
    pub root: NodeDefinition,
}

impl NodeDefinition {
    fn to_node(&self, tolerance: f64) -> Result<HierarchyNode, ValidationError> {
        let labels: Vec<&str> = self.children.iter().map(|c| c.label()).collect();

        let matrix = match &self.rows {
            Some(_) if !self.judgments.is_empty() => {
                return Err(ValidationError::AmbiguousMatrixSource {
                    node: self.id.clone(),
                })
            }
            Some(rows) => ComparisonMatrix::from_rows(labels, rows.clone(), tolerance)?,
            None => ComparisonMatrix::builder()
                .items(labels)
                .judgments(
                    self.judgments
                        .iter()
                        .map(|JudgmentDefinition(row, column, value)| {
                            (row.as_str(), column.as_str(), *value)
                        }),
                )
                .tolerance(tolerance)
                .build()?,
        };

        let children = self
            .children
            .iter()
            .map(|child| match child {
                ChildDefinition::Alternative(id) => Ok(HierarchyChild::Alternative(id.clone())),
                ChildDefinition::Criterion(node) => {
                    node.to_node(tolerance).map(HierarchyChild::Criterion)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(HierarchyNode::new(self.id.clone(), matrix, children))
    }
}

impl HierarchyDefinition {
    /// Builds and validates the matrices of every node.
    pub fn to_hierarchy(&self, tolerance: f64) -> Result<Hierarchy, ValidationError> {
        let root = self.root.to_node(tolerance)?;
        Ok(Hierarchy::new(root).with_alternatives(self.alternatives.clone()))
    }
}
