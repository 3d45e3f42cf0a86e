use crate::config::Config;
use crate::resume::pipeline::ParseOptions;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Heuristic switches derived from `config` once at startup.
    pub parse_options: ParseOptions,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let mut parse_options = ParseOptions::default();
        parse_options.skills.legacy_bullets = config.skills_legacy_bullets;
        Self {
            config,
            parse_options,
        }
    }
}
