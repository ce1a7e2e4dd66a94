//! Logging integration for dynaform.
//!
//! Provides a helper for installing a [`tracing`] subscriber and for creating
//! per-form spans, so every diagnostic a form emits carries its name.

/// Sets up the global tracing subscriber.
///
/// `level` is an `EnvFilter` directive (e.g. "debug", "info", or
/// `"dynaform_forms=debug"`); an unparsable directive falls back to "info".
/// With `pretty` set, a human-readable multi-line format is used; otherwise
/// one JSON object per event.
///
/// Installing twice is harmless: the second call is ignored.
pub fn setup_logging(level: &str, pretty: bool) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    if pretty {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stderr)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for one form instance.
///
/// # Examples
///
/// ```
/// use dynaform_core::logging::form_span;
///
/// let span = form_span("register_form");
/// let _guard = span.enter();
/// tracing::debug!("rendering");
/// ```
pub fn form_span(form_name: &str) -> tracing::Span {
    tracing::debug_span!("form", form = form_name)
}
