// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, Registry, registry::LookupSpan};

use crate::{CommonResult, TracingConfig, WriterConfig, ok,
            rolling_file_appender_impl};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer. Log files
/// are plain text, so there are no ANSI escape sequences in them.
#[macro_export]
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_target(false)
            .with_thread_ids(false)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Returns the layers, without installing them. `None` when the level filter is `OFF`,
/// or there is no writer.
///
/// # Errors
///
/// If the log file can't be opened.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> CommonResult<Option<Vec<Box<DynLayer<Registry>>>>> {
    let level_filter = tracing_config.get_level_filter();
    if level_filter == LevelFilter::OFF {
        return ok!(None);
    }

    let Some(file_layer) =
        try_create_file_layer(level_filter, tracing_config.get_writer_config())?
    else {
        return ok!(None);
    };

    // The level filter also applies to layers that don't have their own filter.
    let layers: Vec<Box<DynLayer<Registry>>> = vec![Box::new(level_filter), file_layer];
    ok!(Some(layers))
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// # Errors
///
/// If the log file can't be opened.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> CommonResult<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!();

    ok!(match writer_config {
        WriterConfig::File(file_path) => {
            let file = rolling_file_appender_impl::try_create(&file_path)?;
            Some(Box::new(fmt_layer.with_writer(file).with_filter(level_filter)))
        }
        WriterConfig::None => None,
    })
}
