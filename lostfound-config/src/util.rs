use std::time::Duration;

/// Treat blank values as unset.
pub fn non_blank(raw: Option<&String>) -> Option<String> {
    raw.map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Parse a duration such as `15s` or `1m 30s`. `0`, `off` and `none`
/// disable the timeout.
pub fn parse_timeout(raw: &str) -> anyhow::Result<Option<Duration>> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "off" | "none" => Ok(None),
        other => humantime::parse_duration(other)
            .map(Some)
            .map_err(|err| anyhow::anyhow!("invalid duration '{raw}': {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_unset() {
        assert_eq!(non_blank(Some(&"  ".to_string())), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(
            non_blank(Some(&" proj ".to_string())),
            Some("proj".to_string())
        );
    }

    #[test]
    fn timeout_accepts_humantime_and_disable_words() {
        assert_eq!(parse_timeout("15s").unwrap(), Some(Duration::from_secs(15)));
        assert_eq!(
            parse_timeout("1m 30s").unwrap(),
            Some(Duration::from_secs(90))
        );
        assert_eq!(parse_timeout("off").unwrap(), None);
        assert_eq!(parse_timeout("0").unwrap(), None);
        assert!(parse_timeout("soon").is_err());
    }
}
