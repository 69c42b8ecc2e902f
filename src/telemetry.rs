/// Install the global tracing subscriber.
///
/// `RUST_LOG` picks the filter (default `info`); `LOG_FORMAT=json` switches to
/// JSON lines. Panics are routed through `tracing::error!` as well.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Load `.env` if present, then start logging. Every demo binary calls this first.
pub fn init() {
    // Missing .env is the normal case.
    let _ = dotenvy::dotenv();
    init_tracing();
}
