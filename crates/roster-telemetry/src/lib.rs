//! Tracing setup shared by the Roster binaries.
//!
//! [`init`] installs a global subscriber made of an `EnvFilter`, a fmt layer
//! (plain text or JSON) and, when an OTLP endpoint is configured, an
//! OpenTelemetry layer exporting spans over gRPC. Records emitted through the
//! `log` facade are bridged into tracing.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::{SpanExporter, WithExportConfig};
use opentelemetry_sdk::trace::SdkTracerProvider;
use opentelemetry_sdk::Resource;
use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Layer};
use typed_builder::TypedBuilder;

pub const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    #[error("failed to build OTLP exporter: {0}")]
    Exporter(#[from] opentelemetry_otlp::ExporterBuildError),
    #[error("failed to install log bridge: {0}")]
    LogBridge(#[from] tracing_log::log::SetLoggerError),
    #[error("failed to install global subscriber: {0}")]
    Subscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Output format of the fmt layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, TypedBuilder)]
pub struct TelemetrySettings {
    #[builder(setter(into))]
    service_name: String,
    #[builder(default)]
    format: LogFormat,
    /// Used when `RUST_LOG` is unset.
    #[builder(default = DEFAULT_FILTER.to_string(), setter(into))]
    default_filter: String,
    /// Spans are only exported when set.
    #[builder(default)]
    otlp_endpoint: Option<String>,
}

/// Flushes and shuts down span export when dropped.
#[must_use = "dropping the guard stops span export"]
#[derive(Debug)]
pub struct TelemetryGuard {
    provider: Option<SdkTracerProvider>,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        if let Some(provider) = self.provider.take() {
            if let Err(err) = provider.shutdown() {
                tracing::warn!(error = %err, "failed to shut down tracer provider");
            }
        }
    }
}

fn env_filter(default_filter: &str) -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(default_filter)?),
    }
}

fn tracer_provider(
    service_name: &str,
    endpoint: &str,
) -> Result<SdkTracerProvider, TelemetryError> {
    let exporter = SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()?;

    Ok(SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .with_resource(
            Resource::builder()
                .with_service_name(service_name.to_string())
                .build(),
        )
        .build())
}

/// Installs the global tracing subscriber.
///
/// Must be called once, before any span is created.
pub fn init(settings: TelemetrySettings) -> Result<TelemetryGuard, TelemetryError> {
    tracing_log::LogTracer::init()?;

    let filter = env_filter(&settings.default_filter)?;

    let fmt_layer = match settings.format {
        LogFormat::Text => tracing_subscriber::fmt::layer().boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer().json().boxed(),
    };

    let provider = settings
        .otlp_endpoint
        .as_deref()
        .map(|endpoint| tracer_provider(&settings.service_name, endpoint))
        .transpose()?;

    let otel_layer = provider.as_ref().map(|provider| {
        opentelemetry::global::set_tracer_provider(provider.clone());
        let tracer = provider.tracer(settings.service_name.clone());
        tracing_opentelemetry::layer().with_tracer(tracer)
    });

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(otel_layer);
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(TelemetryGuard { provider })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_defaults() {
        let settings = TelemetrySettings::builder()
            .service_name("roster-gateway")
            .build();

        assert_eq!(settings.format, LogFormat::Text);
        assert_eq!(settings.default_filter, DEFAULT_FILTER);
        assert!(settings.otlp_endpoint.is_none());
    }

    #[test]
    fn guard_without_provider_drops_cleanly() {
        drop(TelemetryGuard { provider: None });
    }
}
