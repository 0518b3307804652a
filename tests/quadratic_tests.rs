#![allow(clippy::unwrap_used, clippy::panic)]

use classroom_bots::bot::commands::utility::{quadratic_reply, solve_quadratic};
use classroom_bots::error::{BotError, ErrorKind};
use classroom_bots::utils::validation::parse_coefficients;

fn residual(a: i64, b: i64, c: i64, x: f64) -> f64 {
    let (a, b, c) = (a as f64, b as f64, c as f64);
    a * x * x + b * x + c
}

#[test]
fn test_roots_satisfy_equation() {
    let cases = [
        (1, -3, 2),
        (2, 5, -3),
        (-1, 2, 3),
        (-4, 0, 9),
        (3, 6, 3),
        (1, 0, 0),
        (5, 1, -7),
        (-2, -7, 4),
    ];

    for (a, b, c) in cases {
        let (x1, x2) = solve_quadratic(a, b, c).unwrap_or_else(|e| panic!("{a} {b} {c}: {e}"));
        for x in [x1, x2] {
            assert!(
                residual(a, b, c, x).abs() < 1e-9,
                "root {x} of {a}x^2 + {b}x + {c} leaves residual {}",
                residual(a, b, c, x)
            );
        }
    }
}

#[test]
fn test_negative_leading_coefficient_uses_full_denominator() {
    // -x^2 + 2x + 3 = 0 has roots -1 and 3
    let (x1, x2) = solve_quadratic(-1, 2, 3).unwrap();
    assert_eq!((x1, x2), (-1.0, 3.0));
}

#[test]
fn test_reply_text() {
    assert_eq!(
        quadratic_reply("1 -3 2"),
        Ok("Your roots are 2 and 1".to_string())
    );
    assert_eq!(
        quadratic_reply("4 0 -1"),
        Ok("Your roots are 0.5 and -0.5".to_string())
    );
}

#[test]
fn test_zero_roots_print_without_sign() {
    assert_eq!(
        quadratic_reply("1 0 0"),
        Ok("Your roots are 0 and 0".to_string())
    );
    assert_eq!(
        quadratic_reply("-3 0 0"),
        Ok("Your roots are 0 and 0".to_string())
    );
    let (x1, x2) = solve_quadratic(1, 0, 0).unwrap();
    assert!(x1.is_sign_positive() && x2.is_sign_positive());
}

#[test]
fn test_zero_leading_coefficient_is_validation_error() {
    let err = solve_quadratic(0, 2, 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn test_negative_discriminant_is_validation_error() {
    let err = quadratic_reply("1 0 1").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.to_string().contains("no real roots"));
}

#[test]
fn test_large_coefficients_do_not_overflow() {
    let big = i64::MAX / 2;
    assert!(solve_quadratic(1, big, 1).is_ok());
    assert!(matches!(solve_quadratic(big, 1, big), Err(BotError::InvalidInput(_))));
}

#[test]
fn test_malformed_payloads() {
    for payload in ["", "1 2", "1 2 3 4", "1 two 3", "1.5 2 3"] {
        let result = parse_coefficients(payload);
        assert!(
            matches!(result, Err(BotError::InvalidInput(_))),
            "payload {payload:?} should be rejected, got {result:?}"
        );
    }
}
