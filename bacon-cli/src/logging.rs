use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when neither RUST_LOG nor --verbose says otherwise
const DEFAULT_FILTER: &str = "bacon=warn,bacon_store=warn";
const VERBOSE_FILTER: &str = "bacon=debug,bacon_store=debug";

/// Logging configuration for the Bacon CLI
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filter directives used when RUST_LOG is unset
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
        }
    }
}

impl LogConfig {
    /// Create a verbose log configuration (debug for both crates)
    pub fn verbose() -> Self {
        Self {
            filter: VERBOSE_FILTER.to_string(),
            ..Default::default()
        }
    }

    pub fn from_verbosity(verbose: bool) -> Self {
        if verbose {
            Self::verbose()
        } else {
            Self::default()
        }
    }
}

/// Initialize tracing with the given configuration.
///
/// Logs go to stderr so they never interleave with prompts on stdout.
pub fn init_logging(config: &LogConfig) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()?;

    tracing::debug!("Logging initialized: filter={}", config.filter);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_selects_filter() {
        assert_eq!(LogConfig::from_verbosity(false).filter, DEFAULT_FILTER);
        assert_eq!(LogConfig::from_verbosity(true).filter, VERBOSE_FILTER);
    }
}
