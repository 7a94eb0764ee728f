//! Runtime configuration for the exporter.

use std::env;

/// Port the exporter listens on when nothing else is configured.
pub const DEFAULT_PORT: u16 = 45555;

#[derive(Debug, Clone)]
pub struct Settings {
    /// TCP port the HTTP server binds on `0.0.0.0`.
    pub port: u16,
    /// Zero every series after each scrape (sliding-window reporting).
    ///
    /// This makes the exported counter non-cumulative, which most scrapers
    /// do not expect. Off by default; enable only when the collector is
    /// configured for delta semantics.
    pub clean_after_scrape: bool,
    /// Register the request-duration histogram alongside the counter.
    pub include_histogram: bool,
}

impl Settings {
    /// Environment defaults overridden by positional arguments:
    /// `nodejs-request-exporter [port] [clean]`.
    pub fn load() -> Self {
        let args: Vec<String> = env::args().skip(1).collect();

        let port = resolve_port(
            args.first().map(String::as_str),
            env::var("EXPORTER_PORT").ok(),
        );

        let clean_after_scrape = args.get(1).map(|v| v == "clean").unwrap_or(false)
            || env::var("EXPORTER_CLEAN")
                .map(|v| truthy(&v))
                .unwrap_or(false);

        let include_histogram = env::var("EXPORTER_HISTOGRAM")
            .map(|v| truthy(&v))
            .unwrap_or(true);

        Settings {
            port,
            clean_after_scrape,
            include_histogram,
        }
    }
}

/// The positional argument wins; an unparseable argument is reported and
/// the environment value or default is used instead.
fn resolve_port(arg: Option<&str>, env_port: Option<String>) -> u16 {
    if let Some(arg) = arg {
        match arg.parse::<u16>() {
            Ok(p) => return p,
            Err(_) => log::warn!("ignoring unparseable port argument {arg:?}"),
        }
    }

    env_port
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

fn truthy(v: &str) -> bool {
    matches!(
        v.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::{resolve_port, truthy, DEFAULT_PORT};

    #[test]
    fn port_argument_wins_over_environment() {
        assert_eq!(resolve_port(Some("8081"), Some("9000".into())), 8081);
    }

    #[test]
    fn unparseable_port_argument_falls_back() {
        assert_eq!(resolve_port(Some("abc"), Some("9000".into())), 9000);
        assert_eq!(resolve_port(Some("abc"), None), DEFAULT_PORT);
    }

    #[test]
    fn default_port_without_argument_or_environment() {
        assert_eq!(resolve_port(None, None), DEFAULT_PORT);
    }

    #[test]
    fn truthy_values() {
        assert!(truthy("1"));
        assert!(truthy("true"));
        assert!(truthy(" Yes "));
        assert!(!truthy("0"));
        assert!(!truthy("false"));
        assert!(!truthy(""));
    }
}
