use crate::error::BotError;
use crate::store::ClassRoster;

/// Parses the `/quadratic` payload: exactly three whitespace-separated
/// integers `a b c`.
pub fn parse_coefficients(payload: &str) -> Result<(i64, i64, i64), BotError> {
    let tokens: Vec<&str> = payload.split_whitespace().collect();

    if tokens.len() != 3 {
        return Err(BotError::InvalidInput(format!(
            "Expected 3 coefficients, got {}",
            tokens.len()
        )));
    }

    let mut coefficients = [0i64; 3];
    for (slot, token) in coefficients.iter_mut().zip(&tokens) {
        *slot = token
            .parse()
            .map_err(|_| BotError::InvalidInput(format!("'{}' is not an integer", token)))?;
    }

    Ok((coefficients[0], coefficients[1], coefficients[2]))
}

/// Checks free text sent as a class choice against the roster and returns
/// the trimmed class name.
pub fn validate_class_choice(roster: &ClassRoster, text: &str) -> Result<String, BotError> {
    let class = text.trim();

    if class.is_empty() {
        return Err(BotError::EmptyClassChoice);
    }

    if !roster.contains_class(class) {
        return Err(BotError::UnknownClass(class.to_string()));
    }

    Ok(class.to_string())
}
