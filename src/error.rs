use thiserror::Error;

/// Invalid widget configuration. Widgets log it and render statically.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{widget}: {field} must be greater than zero")]
    NotPositive {
        widget: &'static str,
        field: &'static str,
    },
    #[error("toast roster has no {0}")]
    EmptyRoster(&'static str),
}
