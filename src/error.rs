use crate::message::{self, Catalog};

/// Shorthand for results of fallible arithmetic operations.
pub type MathResult<T> = Result<T, MathError>;

/// Template for operations that are mathematically undefined.
const UNSUPPORTED_TEMPLATE: &str = "The requested function is not defined for $0.";
/// Template for reserved operations that are not implemented yet.
const NOT_IMPLEMENTED_TEMPLATE: &str = "Not yet done.";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that the arithmetic operations can raise.
pub enum MathError {
    /// The operation is mathematically undefined for the given kind of
    /// number, such as ordering or integer division for complex numbers.
    Unsupported {
        /// What the operation is not defined for (e.g. "complex numbers").
        subject: &'static str,
    },
    /// The operation is reserved but has not been implemented yet.
    NotImplemented,
}

impl MathError {
    /// Renders the error text through a translation catalog.
    ///
    /// [`MathError`]'s `Display` implementation produces the untranslated
    /// text; use this when a caller supplies localized message templates.
    ///
    /// # Example
    /// ```
    /// use minimath::{error::MathError, message::Catalog};
    ///
    /// let catalog =
    ///     Catalog::with_translations([("The requested function is not defined for $0.",
    ///                                  "Die angeforderte Funktion ist für $0 nicht definiert.")]);
    /// let error = MathError::Unsupported { subject: "complex numbers" };
    ///
    /// assert_eq!(error.localized(&catalog),
    ///            "Die angeforderte Funktion ist für complex numbers nicht definiert.");
    /// ```
    #[must_use]
    pub fn localized(&self, catalog: &Catalog) -> String {
        match self {
            Self::Unsupported { subject } => {
                catalog.message(UNSUPPORTED_TEMPLATE, &[catalog.translate(subject)])
            },
            Self::NotImplemented => catalog.message(NOT_IMPLEMENTED_TEMPLATE, &[]),
        }
    }
}

impl std::fmt::Display for MathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsupported { subject } => {
                write!(f, "{}", message::message(UNSUPPORTED_TEMPLATE, &[*subject]))
            },
            Self::NotImplemented => write!(f, "{NOT_IMPLEMENTED_TEMPLATE}"),
        }
    }
}

impl std::error::Error for MathError {}
