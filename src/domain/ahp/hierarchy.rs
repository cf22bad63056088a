//! Decision hierarchy: goal -> criteria -> sub-criteria -> alternatives.

use serde::Serialize;
use std::collections::HashSet;

use super::{ComparisonMatrix, ValidationError};

/// A child of a hierarchy node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HierarchyChild {
    /// A further decision level with its own comparison matrix.
    Criterion(HierarchyNode),
    /// A terminal alternative, referenced by id.
    Alternative(String),
}

impl HierarchyChild {
    /// The label this child is compared under in its parent's matrix.
    pub fn label(&self) -> &str {
        match self {
            HierarchyChild::Criterion(node) => &node.id,
            HierarchyChild::Alternative(id) => id,
        }
    }
}

/// One decision level: a matrix comparing its children, and the children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HierarchyNode {
    pub id: String,
    pub matrix: ComparisonMatrix,
    pub children: Vec<HierarchyChild>,
}

impl HierarchyNode {
    pub fn new(id: impl Into<String>, matrix: ComparisonMatrix, children: Vec<HierarchyChild>) -> Self {
        Self {
            id: id.into(),
            matrix,
            children,
        }
    }

    /// Creates a node whose children are all alternatives, in matrix order.
    pub fn leaf(id: impl Into<String>, matrix: ComparisonMatrix) -> Self {
        let children = matrix
            .items()
            .iter()
            .cloned()
            .map(HierarchyChild::Alternative)
            .collect();
        Self::new(id, matrix, children)
    }

    /// Visits this node and every criterion below it, depth first.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a HierarchyNode)) {
        visit(self);
        for child in &self.children {
            if let HierarchyChild::Criterion(node) = child {
                node.walk(visit);
            }
        }
    }

    fn validate(&self, tolerance: f64, seen: &mut HashSet<String>) -> Result<(), ValidationError> {
        if !seen.insert(self.id.clone()) {
            return Err(ValidationError::DuplicateNode {
                node: self.id.clone(),
            });
        }

        self.matrix.validate(tolerance)?;

        let mut labels: Vec<&str> = self.children.iter().map(|c| c.label()).collect();
        let mut items: Vec<&str> = self.matrix.items().iter().map(|s| s.as_str()).collect();
        labels.sort_unstable();
        items.sort_unstable();
        if labels != items {
            return Err(ValidationError::ChildMismatch {
                node: self.id.clone(),
                items: self.matrix.items().to_vec(),
                children: self.children.iter().map(|c| c.label().to_string()).collect(),
            });
        }

        for child in &self.children {
            if let HierarchyChild::Criterion(node) = child {
                node.validate(tolerance, seen)?;
            }
        }
        Ok(())
    }
}

/// A complete decision hierarchy plus the set of alternatives being ranked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hierarchy {
    pub root: HierarchyNode,
    alternatives: Vec<String>,
}

impl Hierarchy {
    /// Creates a hierarchy ranking every alternative found under `root`.
    pub fn new(root: HierarchyNode) -> Self {
        Self {
            root,
            alternatives: Vec::new(),
        }
    }

    /// Declares alternatives up front.
    ///
    /// Declared alternatives that no leaf matrix compares still appear in
    /// the ranking, with a score of 0.
    pub fn with_alternatives(mut self, alternatives: Vec<impl Into<String>>) -> Self {
        self.alternatives = alternatives.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Declared alternatives followed by any others reachable from the root,
    /// without duplicates.
    pub fn alternatives(&self) -> Vec<String> {
        let mut all = self.alternatives.clone();
        self.root.walk(&mut |node| {
            for child in &node.children {
                if let HierarchyChild::Alternative(id) = child {
                    if !all.contains(id) {
                        all.push(id.clone());
                    }
                }
            }
        });
        all
    }

    /// Number of decision nodes (root and criteria).
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.root.walk(&mut |_| count += 1);
        count
    }

    /// Checks every matrix and that each node's children match its matrix.
    ///
    /// # Errors
    ///
    /// - Any matrix invariant broken (propagated from the matrix)
    /// - Children labels differ from the matrix items
    /// - Two decision nodes share an id
    pub fn validate(&self, tolerance: f64) -> Result<(), ValidationError> {
        let mut seen = HashSet::new();
        self.root.validate(tolerance, &mut seen)
    }
}
