//! Default judgments for ranking corrective actions on fix-case KPIs.
//!
//! These are the comparisons the dashboard starts from before a user
//! moves any slider.

use super::{ComparisonMatrix, HierarchyNode, ValidationError};

pub const CASE_COMPLEXITY: &str = "Case Complexity";
pub const STAFFING_LEVELS: &str = "Staffing Levels";
pub const PROCESS_CHANGES: &str = "Process Changes";
pub const TECHNOLOGY_ADJUSTMENTS: &str = "Technology Adjustments";

/// Criteria in display order.
pub const CRITERIA: [&str; 4] = [
    CASE_COMPLEXITY,
    STAFFING_LEVELS,
    PROCESS_CHANGES,
    TECHNOLOGY_ADJUSTMENTS,
];

pub const ENHANCED_TRAINING: &str = "Enhanced Training";
pub const PROCESS_REVISION: &str = "Process Revision";
pub const STAFF_AUGMENTATION: &str = "Staff Augmentation";
pub const TECH_UPGRADE: &str = "Tech Upgrade";

/// Candidate corrective actions in display order.
pub const ALTERNATIVES: [&str; 4] = [
    ENHANCED_TRAINING,
    PROCESS_REVISION,
    STAFF_AUGMENTATION,
    TECH_UPGRADE,
];

const CRITERIA_JUDGMENTS: [(&str, &str, f64); 6] = [
    (CASE_COMPLEXITY, STAFFING_LEVELS, 3.0),
    (CASE_COMPLEXITY, PROCESS_CHANGES, 5.0),
    (CASE_COMPLEXITY, TECHNOLOGY_ADJUSTMENTS, 7.0),
    (STAFFING_LEVELS, PROCESS_CHANGES, 3.0),
    (STAFFING_LEVELS, TECHNOLOGY_ADJUSTMENTS, 5.0),
    (PROCESS_CHANGES, TECHNOLOGY_ADJUSTMENTS, 3.0),
];

const CASE_COMPLEXITY_JUDGMENTS: [(&str, &str, f64); 6] = [
    (ENHANCED_TRAINING, PROCESS_REVISION, 1.0 / 3.0),
    (ENHANCED_TRAINING, STAFF_AUGMENTATION, 1.0 / 5.0),
    (ENHANCED_TRAINING, TECH_UPGRADE, 1.0 / 7.0),
    (PROCESS_REVISION, STAFF_AUGMENTATION, 3.0),
    (PROCESS_REVISION, TECH_UPGRADE, 1.0 / 2.0),
    (STAFF_AUGMENTATION, TECH_UPGRADE, 1.0 / 3.0),
];

/// Builds the criteria matrix, replacing defaults with `overrides`.
///
/// An override replaces the default judgment for the same pair in either
/// direction, so `("Staffing Levels", "Case Complexity", 2.0)` supersedes
/// the default `("Case Complexity", "Staffing Levels", 3.0)`.
pub fn criteria_matrix(overrides: &[(&str, &str, f64)]) -> Result<ComparisonMatrix, ValidationError> {
    let mut judgments: Vec<(&str, &str, f64)> = CRITERIA_JUDGMENTS.to_vec();
    for &(row, column, value) in overrides {
        judgments.retain(|&(r, c, _)| !((r == row && c == column) || (r == column && c == row)));
        judgments.push((row, column, value));
    }

    ComparisonMatrix::builder()
        .items(CRITERIA.to_vec())
        .judgments(judgments)
        .build()
}

/// Alternatives judged against "Case Complexity".
pub fn case_complexity_alternatives() -> Result<ComparisonMatrix, ValidationError> {
    ComparisonMatrix::builder()
        .items(ALTERNATIVES.to_vec())
        .judgments(CASE_COMPLEXITY_JUDGMENTS)
        .build()
}

/// Leaf node ranking the corrective actions under "Case Complexity".
pub fn case_complexity_node() -> Result<HierarchyNode, ValidationError> {
    Ok(HierarchyNode::leaf(
        CASE_COMPLEXITY,
        case_complexity_alternatives()?,
    ))
}
