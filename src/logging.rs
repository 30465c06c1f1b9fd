use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialise the global subscriber. `METRO_LOG` overrides the level chosen here.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> anyhow::Result<()> {
    let level = match (verbose, log_level) {
        (_, Some(level)) => level,
        (true, None) => "debug",
        (false, None) => "warn",
    };

    let filter =
        EnvFilter::try_from_env("METRO_LOG").unwrap_or_else(|_| EnvFilter::new(directive(level)));
    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(fmt::format::FmtSpan::CLOSE),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    }

    Ok(())
}

/// A bare level applies to this crate only; anything with `=` is passed through.
fn directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("metro_routing={level}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_level_is_scoped_to_crate() {
        assert_eq!(directive("debug"), "metro_routing=debug");
        assert_eq!(directive("info,metro_routing=trace"), "info,metro_routing=trace");
    }
}
