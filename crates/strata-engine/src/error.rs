use thiserror::Error;

/// Fatal generation failures. Budget overrun is deliberately absent: the
/// refiner reports it as a soft flag on its result instead.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// The requested mode name is not in the registry. No fallback mode is
    /// ever substituted.
    #[error("unknown geometry mode '{0}'")]
    UnknownMode(String),

    /// A builder emitted unusable geometry. This signals an implementation
    /// bug in the mode library, not bad caller input.
    #[error("mode '{mode}' emitted degenerate geometry: {reason}")]
    DegenerateGeometry { mode: &'static str, reason: String },
}
