use tracing_subscriber::EnvFilter;

/// Initialise logging to stderr.
///
/// The level follows the `-v` count: `warn` by default, `info` with `-v`,
/// `debug` with `-vv` and `trace` beyond. From `-vv` on, `RUST_LOG` can
/// override the filter.
pub fn init(verbose: u8) {
    let level = level_for(verbose);

    // Below debug we ignore `RUST_LOG` so a stray variable in the user's
    // environment cannot clutter normal output.
    let filter = if verbose >= 2 {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
