use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// This enum covers the error conditions that can occur while turning raw project-file text
/// into structured documents and while assembling the reference graph. Each variant provides
/// specific context about the failure mode to enable appropriate error handling.
///
/// # Error Categories
///
/// ## Document Parsing Errors
/// - [`Error::Malformed`] - Corrupted or invalid project-file XML
/// - [`Error::Empty`] - Empty input provided
///
/// ## Batch Errors
/// - [`Error::Error`] - Generic failures, including strict-mode batch aborts
///
/// Unresolved references are deliberately NOT errors: a declared reference that matches zero
/// or several loaded files simply produces no edge (see [`crate::graph`]).
///
/// # Examples
///
/// ```rust
/// use projscope::{document::ProjectDocument, Error};
///
/// match ProjectDocument::parse("<NotAProject/>") {
///     Ok(_) => println!("parsed"),
///     Err(Error::Malformed { message, file, line }) => {
///         eprintln!("Malformed document: {} ({}:{})", message, file, line);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The document is damaged and could not be parsed.
    ///
    /// This error indicates that the input is not well-formed XML or does not carry the
    /// expected `<Project>` document root. The error includes the source location where the
    /// malformation was detected for debugging purposes.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// Provided input was empty.
    ///
    /// This error occurs when an empty text buffer is provided where actual project-file
    /// content was expected.
    #[error("Provided input was empty")]
    Empty,

    /// Generic error for miscellaneous failures.
    ///
    /// Used for errors that don't fit into other categories, such as strict-mode batch
    /// loading aborts that wrap a per-file failure with additional context.
    #[error("{0}")]
    Error(String),
}
