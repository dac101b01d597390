#[cfg(test)]
pub mod tests {
    use crate::config::{Config, ConfigError, parse_debug};

    #[test]
    fn missing_token_is_fatal() {
        let result = Config::from_vars(None, None);
        assert_eq!(result.unwrap_err(), ConfigError::MissingToken);
    }

    #[test]
    fn blank_token_is_fatal() {
        let result = Config::from_vars(Some("   ".to_string()), None);
        assert_eq!(result.unwrap_err(), ConfigError::MissingToken);
    }

    #[test]
    fn token_and_debug_flag_are_read() {
        let config = Config::from_vars(Some("abc123".to_string()), Some("true".to_string()))
            .expect("config should parse");

        assert_eq!(config.token, "abc123");
        assert!(config.debug);
    }

    #[test]
    fn debug_defaults_to_off() {
        let config =
            Config::from_vars(Some("abc123".to_string()), None).expect("config should parse");

        assert!(!config.debug);
    }

    #[test]
    fn debug_parsing_accepts_common_truthy_forms() {
        for value in ["1", "true", "TRUE", "yes", "on", " True "] {
            assert!(parse_debug(value), "expected '{}' to enable debug", value);
        }

        for value in ["", "0", "false", "no", "off", "nonsense"] {
            assert!(!parse_debug(value), "expected '{}' to keep debug off", value);
        }
    }
}
