use kpi_ahp::domain::ahp::{
    AhpEngine, ComparisonMatrix, ConsistencyChecker, ConsistencyConfig, EigenSolver, Hierarchy,
    HierarchyChild, HierarchyNode, SolverConfig, ValidationError, DEFAULT_RECIPROCAL_TOLERANCE,
};
use proptest::prelude::*;

/// A Saaty judgment: `(strength, favors_row)`.
fn judgment() -> impl Strategy<Value = (u8, bool)> {
    (1u8..=9, any::<bool>())
}

fn labels(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{}{}", prefix, i)).collect()
}

/// Builds a reciprocal matrix from upper-triangle judgments.
fn reciprocal_matrix(items: &[String], judgments: &[(u8, bool)]) -> ComparisonMatrix {
    let mut pairs = Vec::new();
    let mut next = judgments.iter();
    for i in 0..items.len() {
        for j in (i + 1)..items.len() {
            let (strength, favors_row) = *next.next().unwrap();
            let value = if favors_row {
                f64::from(strength)
            } else {
                1.0 / f64::from(strength)
            };
            pairs.push((items[i].clone(), items[j].clone(), value));
        }
    }
    ComparisonMatrix::builder()
        .items(items.to_vec())
        .judgments(pairs)
        .build()
        .unwrap()
}

fn upper_triangle(n: usize) -> usize {
    n * (n - 1) / 2
}

fn random_matrix() -> impl Strategy<Value = ComparisonMatrix> {
    (1usize..8).prop_flat_map(|n| {
        prop::collection::vec(judgment(), upper_triangle(n))
            .prop_map(move |js| reciprocal_matrix(&labels("item", n), &js))
    })
}

/// Goal over `k` criteria, each judging the same `m` alternatives.
fn two_level_tree() -> impl Strategy<Value = Hierarchy> {
    (1usize..5, 1usize..6).prop_flat_map(|(k, m)| {
        (
            prop::collection::vec(judgment(), upper_triangle(k)),
            prop::collection::vec(prop::collection::vec(judgment(), upper_triangle(m)), k),
        )
            .prop_map(move |(goal, leaves)| {
                let criteria = labels("crit", k);
                let alternatives = labels("alt", m);
                let children = criteria
                    .iter()
                    .zip(leaves.iter())
                    .map(|(id, js)| {
                        HierarchyChild::Criterion(HierarchyNode::leaf(
                            id.clone(),
                            reciprocal_matrix(&alternatives, js),
                        ))
                    })
                    .collect();
                let mut declared = alternatives.clone();
                declared.push("unjudged".to_string());
                Hierarchy::new(HierarchyNode::new(
                    "goal",
                    reciprocal_matrix(&criteria, &goal),
                    children,
                ))
                .with_alternatives(declared)
            })
    })
}

/// Tree shape: a criterion carries enough judgments for up to four children.
#[derive(Debug, Clone)]
enum Shape {
    Alternative,
    Criterion(Vec<Shape>, Vec<(u8, bool)>),
}

fn shape() -> impl Strategy<Value = Shape> {
    Just(Shape::Alternative).prop_recursive(3, 40, 4, |inner| {
        (
            prop::collection::vec(inner, 1..5),
            prop::collection::vec(judgment(), 6),
        )
            .prop_map(|(children, js)| Shape::Criterion(children, js))
    })
}

/// Alternatives are named by position so they recur across criteria.
fn build_node(
    id: String,
    children: &[Shape],
    judgments: &[(u8, bool)],
    next_id: &mut usize,
) -> HierarchyNode {
    let mut labels = Vec::new();
    let mut nodes = Vec::new();
    for (i, child) in children.iter().enumerate() {
        match child {
            Shape::Alternative => {
                let label = format!("alt{}", i);
                labels.push(label.clone());
                nodes.push(HierarchyChild::Alternative(label));
            }
            Shape::Criterion(grandchildren, js) => {
                *next_id += 1;
                let label = format!("crit{}", next_id);
                labels.push(label.clone());
                nodes.push(HierarchyChild::Criterion(build_node(
                    label,
                    grandchildren,
                    js,
                    next_id,
                )));
            }
        }
    }
    HierarchyNode::new(id, reciprocal_matrix(&labels, judgments), nodes)
}

/// Random tree that always holds a goal -> criterion -> criterion chain,
/// next to randomly shaped siblings of mixed kinds.
fn deep_tree() -> impl Strategy<Value = Hierarchy> {
    (
        prop::collection::vec(shape(), 1..4),
        prop::collection::vec(shape(), 1..4),
        prop::collection::vec(judgment(), 6),
        prop::collection::vec(judgment(), 6),
        prop::collection::vec(judgment(), 6),
    )
        .prop_map(|(siblings, nested, goal_js, chain_js, nested_js)| {
            let chain = Shape::Criterion(
                vec![Shape::Criterion(nested, nested_js), Shape::Alternative],
                chain_js,
            );
            let mut children = vec![chain];
            children.extend(siblings.into_iter().take(3));

            let mut next_id = 0;
            Hierarchy::new(build_node("goal".to_string(), &children, &goal_js, &mut next_id))
                .with_alternatives(vec!["unjudged"])
        })
}

proptest! {
    #[test]
    fn priorities_are_positive_and_sum_to_one(matrix in random_matrix()) {
        let solution = EigenSolver::solve(&matrix, &SolverConfig::default());

        prop_assert_eq!(solution.priorities.len(), matrix.dimension());
        prop_assert!((solution.priorities.sum() - 1.0).abs() < 1e-9);
        for w in solution.priorities.weights() {
            prop_assert!(*w > 0.0);
        }
    }

    #[test]
    fn consistency_ratio_is_never_negative(matrix in random_matrix()) {
        let solution = EigenSolver::solve(&matrix, &SolverConfig::default());
        let check = ConsistencyChecker::check(&matrix, &solution.priorities, &ConsistencyConfig::default());

        prop_assert!(check.verdict.ci >= 0.0);
        prop_assert!(check.verdict.cr >= 0.0);
        if matrix.dimension() <= 2 {
            prop_assert!(check.verdict.is_acceptable);
            prop_assert_eq!(check.verdict.cr, 0.0);
        }
    }

    #[test]
    fn ratio_matrices_recover_their_weights(weights in prop::collection::vec(0.1f64..10.0, 2..8)) {
        let n = weights.len();
        let rows: Vec<Vec<f64>> = weights
            .iter()
            .map(|wi| weights.iter().map(|wj| wi / wj).collect())
            .collect();
        let matrix = ComparisonMatrix::from_rows(labels("item", n), rows, DEFAULT_RECIPROCAL_TOLERANCE).unwrap();

        let report = AhpEngine::default().compare("ratio", &matrix).unwrap();
        let total: f64 = weights.iter().sum();

        prop_assert!(report.verdict.cr < 1e-6);
        prop_assert!(report.verdict.is_acceptable);
        for (i, w) in weights.iter().enumerate() {
            let got = report.priorities[&format!("item{}", i)];
            prop_assert!((got - w / total).abs() < 1e-6, "item{}: {} vs {}", i, got, w / total);
        }
    }

    #[test]
    fn breaking_reciprocity_fails_validation(
        weights in prop::collection::vec(0.1f64..10.0, 2..6),
        factor in 1.5f64..4.0,
    ) {
        let n = weights.len();
        let mut rows: Vec<Vec<f64>> = weights
            .iter()
            .map(|wi| weights.iter().map(|wj| wi / wj).collect())
            .collect();
        rows[0][1] *= factor;

        let result = ComparisonMatrix::from_rows(labels("item", n), rows, DEFAULT_RECIPROCAL_TOLERANCE);
        let is_mismatch = matches!(result, Err(ValidationError::ReciprocalMismatch { .. }));
        prop_assert!(is_mismatch);
    }

    #[test]
    fn global_scores_sum_to_one(tree in two_level_tree()) {
        let result = AhpEngine::default().rank(&tree).unwrap();

        let total: f64 = result.scores.values().sum();
        prop_assert!((total - 1.0).abs() < 1e-6);
        for score in result.scores.values() {
            prop_assert!((0.0..=1.0 + 1e-9).contains(score));
        }
        prop_assert_eq!(result.scores["unjudged"], 0.0);
        prop_assert_eq!(result.consistency.len(), tree.node_count());
    }

    #[test]
    fn global_scores_sum_to_one_at_any_depth(tree in deep_tree()) {
        prop_assert!(tree.node_count() >= 3);

        let result = AhpEngine::default().rank(&tree).unwrap();

        let total: f64 = result.scores.values().sum();
        prop_assert!((total - 1.0).abs() < 1e-6, "total {}", total);
        for score in result.scores.values() {
            prop_assert!(*score >= 0.0);
        }
        prop_assert_eq!(result.scores["unjudged"], 0.0);
        prop_assert_eq!(result.consistency.len(), tree.node_count());
    }

    #[test]
    fn ranking_is_idempotent(tree in two_level_tree()) {
        let engine = AhpEngine::default();
        prop_assert_eq!(engine.rank(&tree).unwrap(), engine.rank(&tree).unwrap());
    }
}
