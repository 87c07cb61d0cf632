use tracing::{subscriber::set_global_default, Subscriber};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{fmt::MakeWriter, layer::SubscriberExt, EnvFilter, Registry};

use crate::config::Stage;

/// Compose the subscriber for the given stage.
///
/// `prod` emits Bunyan JSON lines, `dev` the human readable fmt output.
/// `RUST_LOG` takes precedence over `env_filter`.
pub fn build_telemetry<Sink>(
    name: String,
    env_filter: String,
    stage: Stage,
    sink: Sink,
) -> impl Subscriber + Send + Sync + 'static
where
    Sink: for<'a> MakeWriter<'a> + Clone + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));

    let json = stage == Stage::Prod;

    Registry::default()
        .with(env_filter)
        .with(json.then_some(JsonStorageLayer))
        .with(json.then(|| BunyanFormattingLayer::new(name, sink.clone())))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(sink)))
}

/// Register telemetry as global default to process span data.
///
/// It should only be called once
pub fn register_telemetry(
    subscriber: impl Subscriber + Send + Sync + 'static,
) -> anyhow::Result<()> {
    set_global_default(subscriber)?;
    Ok(())
}

/// Default filter directives when `RUST_LOG` is not set.
pub fn default_env_filter() -> String {
    // axum logs rejections from built-in extractors with the `axum::rejection`
    // target, at `TRACE` level. `axum::rejection=trace` enables showing those events
    format!(
        "{}=info,tower_http=info,axum::rejection=trace",
        env!("CARGO_CRATE_NAME")
    )
}
