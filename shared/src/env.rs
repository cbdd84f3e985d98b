use std::env;

use strum::EnumString;

#[derive(Debug, Default, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub fn default_log_level(&self) -> &'static str {
        match self {
            Environment::Development => "debug",
            Environment::Production => "info",
        }
    }
}

/// Resolves the running environment from `ENV`, falling back to the build profile.
pub fn which() -> Environment {
    #[cfg(debug_assertions)]
    let default_env = Environment::Development;
    #[cfg(not(debug_assertions))]
    let default_env = Environment::Production;

    match env::var("ENV") {
        Ok(v) => v.parse().unwrap_or(default_env),
        Err(_) => default_env,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_parses_lowercase_names() {
        assert_eq!(
            "development".parse::<Environment>().ok(),
            Some(Environment::Development)
        );
        assert_eq!(
            "production".parse::<Environment>().ok(),
            Some(Environment::Production)
        );
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn log_level_follows_environment() {
        assert_eq!(Environment::Development.default_log_level(), "debug");
        assert_eq!(Environment::Production.default_log_level(), "info");
    }
}
