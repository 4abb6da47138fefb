use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cards::deal_with_rng;
use crate::expression::Expression;
use crate::solver::{DEFAULT_TARGET, EPSILON, ExpressionSolver, Operator, SolverConfig, Term};

fn terms(values: &[f64]) -> Vec<Term> {
    values.iter().map(|&v| Term::from_value(v)).collect()
}

fn solve(values: &[f64], target: f64) -> Option<String> {
    ExpressionSolver::new().solve(&terms(values), target)
}

/// Parse the solver output back and check value, card usage and divisors.
fn assert_valid_solution(expression: &str, values: &[f64], target: f64) {
    let parsed = expression.parse::<Expression>();
    assert!(parsed.is_ok(), "unparseable solution {}", expression);
    let Ok(expr) = parsed else { return };

    let value = expr.evaluate();
    assert!(value.is_ok(), "solution {} failed to evaluate", expression);
    if let Ok(value) = value {
        assert!(
            (value - target).abs() < EPSILON,
            "{} = {}, expected {}",
            expression,
            value,
            target
        );
    }

    let mut used = expr.literals();
    let mut expected = values.to_vec();
    used.sort_by(f64::total_cmp);
    expected.sort_by(f64::total_cmp);
    assert_eq!(used, expected, "cards used by {}", expression);

    assert_divisors_not_negligible(&expr);
}

fn assert_divisors_not_negligible(expr: &Expression) {
    match expr {
        Expression::Number(_) => {}
        Expression::Neg(e) => assert_divisors_not_negligible(e),
        Expression::Add(l, r) | Expression::Sub(l, r) | Expression::Mul(l, r) => {
            assert_divisors_not_negligible(l);
            assert_divisors_not_negligible(r);
        }
        Expression::Div(l, r) => {
            if let Ok(divisor) = r.evaluate() {
                assert!(divisor.abs() >= EPSILON, "divides by {} in {}", divisor, expr);
            }
            assert_divisors_not_negligible(l);
            assert_divisors_not_negligible(r);
        }
    }
}

#[test]
fn test_classic_hands_are_solved() {
    let hands: [&[f64]; 6] = [
        &[4.0, 4.0, 10.0, 10.0],
        &[3.0, 3.0, 8.0, 8.0],
        &[1.0, 5.0, 5.0, 5.0],
        &[6.0, 6.0, 6.0, 6.0],
        &[1.0, 2.0, 3.0, 4.0],
        &[13.0, 1.0, 5.0, 12.0, 11.0],
    ];
    for hand in hands {
        let result = solve(hand, DEFAULT_TARGET);
        assert!(result.is_some(), "no solution for {:?}", hand);
        if let Some(expression) = result {
            assert_valid_solution(&expression, hand, DEFAULT_TARGET);
        }
    }
}

#[test]
fn test_first_found_order_is_fixed() {
    assert_eq!(
        solve(&[4.0, 4.0, 10.0, 10.0], 24.0).as_deref(),
        Some("(((10 * 10) - 4) / 4)")
    );
    assert_eq!(
        solve(&[3.0, 3.0, 8.0, 8.0], 24.0).as_deref(),
        Some("(8 / (3 - (8 / 3)))")
    );
    assert_eq!(
        solve(&[1.0, 2.0, 3.0, 4.0], 24.0).as_deref(),
        Some("(4 * (3 + (1 + 2)))")
    );
    assert_eq!(
        solve(&[6.0, 6.0, 6.0, 6.0], 24.0).as_deref(),
        Some("((6 + 6) + (6 + 6))")
    );
}

#[test]
fn test_both_orderings_of_a_pair_are_tried() {
    assert_eq!(solve(&[2.0, 3.0], 5.0).as_deref(), Some("(2 + 3)"));
    assert_eq!(solve(&[3.0, 2.0], 1.0).as_deref(), Some("(3 - 2)"));
    assert_eq!(solve(&[2.0, 3.0], 1.0).as_deref(), Some("(3 - 2)"));
    assert_eq!(solve(&[2.0, 6.0], 3.0).as_deref(), Some("(6 / 2)"));
}

#[test]
fn test_no_solution_cases() {
    assert_eq!(solve(&[1.0, 1.0, 1.0, 1.0], 24.0), None);
    assert_eq!(solve(&[8.0], 7.0), None);
    assert_eq!(solve(&[], 24.0), None);
    assert_eq!(solve(&[], 0.0), None);
}

#[test]
fn test_single_term() {
    assert_eq!(solve(&[8.0], 8.0).as_deref(), Some("8"));
    assert_eq!(solve(&[24.0], 24.0).as_deref(), Some("24"));
}

#[test]
fn test_exhausts_five_card_hand_without_solution() {
    assert_eq!(solve(&[1.0, 1.0, 1.0, 1.0, 1.0], 100.0), None);
}

#[test]
fn test_six_card_hands() {
    let hands: [&[f64]; 3] = [
        &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        &[13.0, 13.0, 13.0, 13.0, 13.0, 13.0],
        &[1.0, 1.0, 2.0, 2.0, 3.0, 3.0],
    ];
    for hand in hands {
        let result = solve(hand, 24.0);
        assert!(result.is_some(), "no solution for {:?}", hand);
        if let Some(expression) = result {
            assert_valid_solution(&expression, hand, 24.0);
        }
    }
}

#[test]
fn test_division_by_zero_is_skipped() {
    // 5 / (3 - 3) would be infinite; the only way to 0 is multiplication.
    let hand = [5.0, 3.0, 3.0];
    let result = solve(&hand, 0.0);
    assert!(result.is_some());
    if let Some(expression) = result {
        assert_valid_solution(&expression, &hand, 0.0);
    }

    assert_eq!(solve(&[4.0, 0.0], 4.0).as_deref(), Some("(4 + 0)"));
    let result = solve(&[1.0, 0.0], f64::INFINITY);
    assert_eq!(result, None);
}

#[test]
fn test_fractional_values_and_targets() {
    assert_eq!(solve(&[2.5, 4.0], 10.0).as_deref(), Some("(2.5 * 4)"));

    let hand = [1.0, 3.0, 4.0, 6.0];
    let result = solve(&hand, 24.0);
    assert!(result.is_some());
    if let Some(expression) = result {
        assert_valid_solution(&expression, &hand, 24.0);
    }

    let hand = [1.0, 2.0];
    let result = solve(&hand, 0.5);
    assert_eq!(result.as_deref(), Some("(1 / 2)"));
}

#[test]
fn test_results_are_deterministic() {
    let hand = [13.0, 1.0, 5.0, 12.0, 11.0];
    let first = solve(&hand, 24.0);
    let second = solve(&hand, 24.0);
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn test_custom_tolerance() {
    let loose = ExpressionSolver::with_config(SolverConfig { tolerance: 0.5 });
    assert_eq!(loose.config().tolerance, 0.5);
    assert_eq!(
        loose.solve(&terms(&[1.0, 1.0]), 2.4).as_deref(),
        Some("(1 + 1)")
    );
    assert_eq!(solve(&[1.0, 1.0], 2.4), None);
}

#[test]
fn test_display_text_is_preserved() {
    let hand = vec![Term::new(11.0, "J"), Term::new(13.0, "K")];
    let result = ExpressionSolver::new().solve(&hand, 24.0);
    assert_eq!(result.as_deref(), Some("(J + K)"));
}

#[test]
fn test_term_combination() {
    let ten = Term::from_value(10.0);
    let four = Term::from_value(4.0);
    let product = ten.combine(Operator::Mul, &ten);
    let difference = product.combine(Operator::Sub, &four);
    assert_eq!(difference.value(), 96.0);
    assert_eq!(difference.expression(), "((10 * 10) - 4)");
    assert_eq!(format!("{}", difference), "((10 * 10) - 4)");

    let half = Term::from(0.5);
    assert_eq!(half.expression(), "0.5");
}

#[test]
fn test_dealt_hands_give_valid_solutions() {
    let mut rng = StdRng::seed_from_u64(24);
    let solver = ExpressionSolver::new();
    // six-card hands are nearly always solvable, but a miss costs a full search
    for (num_cards, hands) in [(2, 40), (3, 40), (4, 40), (5, 20), (6, 3)] {
        for _ in 0..hands {
            let dealt = deal_with_rng(num_cards, &mut rng);
            assert!(dealt.is_ok());
            let Ok(dealt) = dealt else { continue };

            let hand: Vec<Term> = dealt.iter().map(Term::from).collect();
            let values: Vec<f64> = hand.iter().map(Term::value).collect();
            let first = solver.solve(&hand, DEFAULT_TARGET);
            assert_eq!(first, solver.solve(&hand, DEFAULT_TARGET));
            if let Some(expression) = first {
                assert_valid_solution(&expression, &values, DEFAULT_TARGET);
            }
        }
    }
}

#[test]
fn test_hand_can_be_solved_on_another_thread() {
    let hand = terms(&[3.0, 3.0, 8.0, 8.0]);
    let worker = std::thread::spawn(move || ExpressionSolver::new().solve(&hand, 24.0));
    let result = worker.join();
    assert!(result.is_ok());
    if let Ok(solution) = result {
        assert_eq!(solution.as_deref(), Some("(8 / (3 - (8 / 3)))"));
    }
}

#[test]
fn test_operator_order_and_symbols() {
    let symbols: Vec<&str> = Operator::ALL.iter().map(|op| op.symbol()).collect();
    assert_eq!(symbols, vec!["+", "-", "*", "/"]);
    assert_eq!(Operator::Sub.apply(3.0, 8.0), -5.0);
    assert_eq!(Operator::Div.apply(8.0, 2.0), 4.0);
}
