use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default, so the service starts with an empty environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on the upload request body, in bytes.
    pub max_upload_bytes: usize,
    /// Keep the mis-decoded bullet characters (`â`, `€`, `¢`) in the skills delimiter set.
    pub skills_legacy_bullets: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|_| (10 * 1024 * 1024).to_string())
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a non-negative integer")?,
            skills_legacy_bullets: parse_flag(
                "SKILLS_LEGACY_BULLETS",
                std::env::var("SKILLS_LEGACY_BULLETS").ok().as_deref(),
                true,
            )?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8000,
            rust_log: "info".to_string(),
            max_upload_bytes: 10 * 1024 * 1024,
            skills_legacy_bullets: true,
        }
    }
}

fn parse_flag(key: &str, value: Option<&str>, default: bool) -> Result<bool> {
    let Some(raw) = value else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("{key} must be a boolean, got '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_missing_uses_default() {
        assert!(parse_flag("X", None, true).unwrap());
        assert!(!parse_flag("X", None, false).unwrap());
    }

    #[test]
    fn test_flag_accepts_common_spellings() {
        assert!(parse_flag("X", Some("TRUE"), false).unwrap());
        assert!(parse_flag("X", Some(" on "), false).unwrap());
        assert!(!parse_flag("X", Some("0"), true).unwrap());
        assert!(!parse_flag("X", Some("no"), true).unwrap());
    }

    #[test]
    fn test_flag_rejects_garbage() {
        let err = parse_flag("SKILLS_LEGACY_BULLETS", Some("maybe"), true).unwrap_err();
        assert!(err.to_string().contains("SKILLS_LEGACY_BULLETS"));
    }
}
