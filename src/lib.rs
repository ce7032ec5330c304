// Value Formats - Core Library
// Exposes the unit-formatting registry for use in CLI, API server, and tests

pub mod numeric;
pub mod symbols;
pub mod arithmetic;
pub mod date_time;
pub mod formatter;
pub mod categories;
pub mod registry;
pub mod decimals;
pub mod display;
pub mod batch;
pub mod error;
pub mod config;
pub mod build_info;
pub mod azure_monitor;
pub mod panel_stats;

// Re-export commonly used types
pub use numeric::{
    DecimalCount, PLACEHOLDER,
    to_fixed, to_fixed_scaled, to_fixed_unit, scaled_units, simple_count_unit, currency, locale,
};
pub use formatter::ValueFormatter;
pub use date_time::{TimeUnit, Interval, DateStyle};
pub use registry::{
    FormatRegistry, FormatCategory, FormatDescriptor, MenuCategory, MenuItem,
    default_registry,
};
pub use decimals::{DecimalInfo, decimals_for_value};
pub use display::{parse_value, display_value, display_text};
pub use batch::{BatchOptions, BatchSummary, format_csv};
pub use error::{Error, Result};
pub use config::AppConfig;
pub use build_info::BuildInfo;
pub use azure_monitor::{ResourcePath, metrics_query_url, metric_definitions_url};
pub use panel_stats::{
    PanelSummary, PanelStats, PanelLogos, SourceCount, RemovalPrompt,
    collect_stats, icon_for, removal_prompt,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
