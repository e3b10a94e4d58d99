use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq)]
pub struct AdapterConfig {
    pub log_level: String,
    pub strict: bool,
    pub donut_inner_radius: f64,
    pub donut_outer_radius: f64,
}

/// Load configuration from the process environment, reading `.env` first when present.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to a value that cannot be parsed.
pub fn load_config() -> Result<AdapterConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_config(|key| std::env::var(key))
}

fn build_config<F>(lookup: F) -> Result<AdapterConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        let value = raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })?;
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected a non-negative radius, got {raw}"),
            });
        }
        Ok(value)
    };

    let log_level = or_default("SEO_ADAPTER_LOG_LEVEL", "info");
    let strict = parse_bool("SEO_ADAPTER_STRICT", &or_default("SEO_ADAPTER_STRICT", "false"))?;
    let donut_inner_radius = parse_f64("SEO_ADAPTER_DONUT_INNER_RADIUS", "60")?;
    let donut_outer_radius = parse_f64("SEO_ADAPTER_DONUT_OUTER_RADIUS", "100")?;

    if donut_inner_radius >= donut_outer_radius {
        return Err(ConfigError::InvalidEnvVar {
            var: "SEO_ADAPTER_DONUT_INNER_RADIUS".to_string(),
            reason: format!(
                "inner radius {donut_inner_radius} must be smaller than outer radius {donut_outer_radius}"
            ),
        });
    }

    Ok(AdapterConfig {
        log_level,
        strict,
        donut_inner_radius,
        donut_outer_radius,
    })
}

fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected a boolean, got {other:?}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let map = HashMap::new();
        let config = build_config(lookup_from_map(&map)).expect("config");
        assert_eq!(config.log_level, "info");
        assert!(!config.strict);
        assert_eq!(config.donut_inner_radius, 60.0);
        assert_eq!(config.donut_outer_radius, 100.0);
    }

    #[test]
    fn reads_overrides() {
        let map = HashMap::from([
            ("SEO_ADAPTER_LOG_LEVEL", "debug"),
            ("SEO_ADAPTER_STRICT", "TRUE"),
            ("SEO_ADAPTER_DONUT_INNER_RADIUS", "40"),
            ("SEO_ADAPTER_DONUT_OUTER_RADIUS", "120.5"),
        ]);
        let config = build_config(lookup_from_map(&map)).expect("config");
        assert_eq!(config.log_level, "debug");
        assert!(config.strict);
        assert_eq!(config.donut_inner_radius, 40.0);
        assert_eq!(config.donut_outer_radius, 120.5);
    }

    #[test]
    fn rejects_unparseable_strict_flag() {
        let map = HashMap::from([("SEO_ADAPTER_STRICT", "sometimes")]);
        let result = build_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SEO_ADAPTER_STRICT"),
            "got: {result:?}"
        );
    }

    #[test]
    fn rejects_inverted_radii() {
        let map = HashMap::from([
            ("SEO_ADAPTER_DONUT_INNER_RADIUS", "150"),
            ("SEO_ADAPTER_DONUT_OUTER_RADIUS", "100"),
        ]);
        let result = build_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SEO_ADAPTER_DONUT_INNER_RADIUS"),
            "got: {result:?}"
        );
    }

    #[test]
    fn rejects_negative_radius() {
        let map = HashMap::from([("SEO_ADAPTER_DONUT_OUTER_RADIUS", "-3")]);
        assert!(build_config(lookup_from_map(&map)).is_err());
    }
}
