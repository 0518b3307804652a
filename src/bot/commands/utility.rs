use rand::Rng;
use reqwest::Url;

use crate::error::BotError;
use crate::utils::validation::parse_coefficients;

pub const START_TEXT: &str = "Hi!";
pub const CAT_BASE_URL: &str = "https://cataas.com/cat";
/// Cat ids are drawn from `0..CAT_ID_RANGE`.
pub const CAT_ID_RANGE: u32 = 100_000;

/// Real roots of `a*x^2 + b*x + c = 0`, larger-numerator root first.
pub fn solve_quadratic(a: i64, b: i64, c: i64) -> Result<(f64, f64), BotError> {
    if a == 0 {
        return Err(BotError::InvalidInput(
            "Coefficient a must be non-zero for a quadratic".to_string(),
        ));
    }

    let (a, b, c) = (i128::from(a), i128::from(b), i128::from(c));
    let discriminant = b * b - 4 * a * c;
    if discriminant < 0 {
        return Err(BotError::InvalidInput(
            "The equation has no real roots (negative discriminant)".to_string(),
        ));
    }

    let sqrt_disc = (discriminant as f64).sqrt();
    let (a, b) = (a as f64, b as f64);
    let denominator = 2.0 * a;

    Ok((
        without_negative_zero((-b + sqrt_disc) / denominator),
        without_negative_zero((-b - sqrt_disc) / denominator),
    ))
}

/// `-0.0 == 0.0`, but it prints as "-0".
fn without_negative_zero(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x
    }
}

/// Parses a `/quadratic` payload and renders the reply text.
pub fn quadratic_reply(payload: &str) -> Result<String, BotError> {
    let (a, b, c) = parse_coefficients(payload)?;
    let (x1, x2) = solve_quadratic(a, b, c)?;
    Ok(format!("Your roots are {x1} and {x2}"))
}

pub fn random_cat_id<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(0..CAT_ID_RANGE)
}

pub fn cat_photo_url(id: u32) -> Result<Url, BotError> {
    Url::parse_with_params(CAT_BASE_URL, &[("id", id.to_string())])
        .map_err(|e| BotError::InvalidInput(format!("Bad cat URL: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cat_photo_url() {
        let url = cat_photo_url(4242).unwrap();
        assert_eq!(url.as_str(), "https://cataas.com/cat?id=4242");
    }

    #[test]
    fn test_random_cat_id_in_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            assert!(random_cat_id(&mut rng) < CAT_ID_RANGE);
        }
    }
}
