use std::time::Duration;

use crate::domain::QuoteError;

pub(crate) fn read_env_var(name: &str) -> Result<Option<String>, QuoteError> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(error) => Err(QuoteError::validation(format!(
            "{name} could not be read: {error}"
        ))),
    }
}

pub(crate) fn parse_timeout_seconds(name: &str, value: &str) -> Result<Duration, QuoteError> {
    let parsed = value.trim().parse::<u64>().map_err(|_| {
        QuoteError::validation(format!("{name} must be a positive integer in seconds"))
    })?;
    if parsed == 0 {
        return Err(QuoteError::validation(format!(
            "{name} must be greater than 0 seconds"
        )));
    }
    Ok(Duration::from_secs(parsed))
}

pub(crate) fn read_timeout_from_env(name: &str) -> Result<Option<Duration>, QuoteError> {
    let Some(value) = read_env_var(name)? else {
        return Ok(None);
    };
    Ok(Some(parse_timeout_seconds(name, &value)?))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::domain::QuoteError;

    use super::parse_timeout_seconds;

    #[test]
    fn parse_timeout_seconds_accepts_positive_integer_values() {
        let timeout = parse_timeout_seconds("TEST_TIMEOUT", "30")
            .expect("positive integer timeout should parse");
        assert_eq!(timeout, Duration::from_secs(30));
    }

    #[test]
    fn parse_timeout_seconds_rejects_invalid_values() {
        let zero = parse_timeout_seconds("TEST_TIMEOUT", "0")
            .expect_err("zero timeout should fail validation");
        assert!(matches!(
            zero,
            QuoteError::Validation { message }
            if message == "TEST_TIMEOUT must be greater than 0 seconds"
        ));

        let invalid = parse_timeout_seconds("TEST_TIMEOUT", "abc")
            .expect_err("non-integer timeout should fail validation");
        assert!(matches!(
            invalid,
            QuoteError::Validation { message }
            if message == "TEST_TIMEOUT must be a positive integer in seconds"
        ));
    }
}
