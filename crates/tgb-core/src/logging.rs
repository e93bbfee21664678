use crate::Result;

/// Initialize a `tracing` subscriber for binaries built on this crate.
///
/// Without the `subscriber` feature this is a no-op so embedding applications
/// keep control of their own subscriber.
pub fn init(service_name: &str) -> Result<()> {
    let _ = service_name;

    #[cfg(feature = "subscriber")]
    {
        use tracing_subscriber::{fmt, EnvFilter};

        // Default: info for our crates. `RUST_LOG=tgb_core=debug` shows every call.
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "info,tgb=info,tgb_core=info,tgb_http=info,{service_name}=info"
            ))
        });

        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(true)
            .try_init()
            .map_err(|e| crate::Error::Config(format!("logging init failed: {e}")))?;
    }

    Ok(())
}
