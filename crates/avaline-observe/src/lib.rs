//! Observability support for Avaline: tracing subscriber setup with
//! optional OpenTelemetry trace export.

pub mod tracing_setup;
