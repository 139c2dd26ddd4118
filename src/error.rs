// MIT/Apache2 License

use std::fmt;

/// Sum error type for clipping operations.
pub struct Error {
    kind: Kind,
}

enum Kind {
    /// A clip mask was requested over an area with no pixels in it.
    InvalidDimensions { width: f64, height: f64 },
}

impl Error {
    /// Create a new error for a clip mask with unusable dimensions.
    pub(crate) fn invalid_dimensions(width: f64, height: f64) -> Self {
        Error {
            kind: Kind::InvalidDimensions { width, height },
        }
    }

    /// Is this error caused by a clip area with no pixels in it?
    #[inline]
    pub fn is_invalid_dimensions(&self) -> bool {
        matches!(self.kind, Kind::InvalidDimensions { .. })
    }

    /// The rejected width and height, if this error is caused by invalid dimensions.
    #[inline]
    pub fn dimensions(&self) -> Option<(f64, f64)> {
        match self.kind {
            Kind::InvalidDimensions { width, height } => Some((width, height)),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct KindFmt<'a>(&'a Kind);

        impl<'a> fmt::Debug for KindFmt<'a> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.0 {
                    Kind::InvalidDimensions { width, height } => f
                        .debug_struct("InvalidDimensions")
                        .field("width", width)
                        .field("height", height)
                        .finish(),
                }
            }
        }

        f.debug_tuple("Error").field(&KindFmt(&self.kind)).finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Kind::InvalidDimensions { width, height } => write!(
                f,
                "Clip area of {}x{} does not contain any pixels",
                width, height
            ),
        }
    }
}

impl std::error::Error for Error {}

/// Convenience result type.
pub type Result<T = ()> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions() {
        let err = Error::invalid_dimensions(0.0, 12.5);
        assert!(err.is_invalid_dimensions());
        assert_eq!(err.dimensions(), Some((0.0, 12.5)));
        assert_eq!(
            err.to_string(),
            "Clip area of 0x12.5 does not contain any pixels"
        );
        assert_eq!(
            format!("{:?}", err),
            "Error(InvalidDimensions { width: 0.0, height: 12.5 })"
        );
    }
}
