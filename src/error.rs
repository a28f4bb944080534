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

/// The generic Error type, which covers every failure a render call can report.
///
/// Rendering is a deterministic function of a [`crate::LanguageDescriptor`] and one metadata
/// node, so an error is never transient: retrying the same call reproduces it. A failed
/// render never hands back partial text, success and failure are always distinguishable.
///
/// # Error Categories
///
/// - [`Error::UnsupportedOperation`] - the requested output cannot be produced by this crate
/// - [`Error::RenderDepthExceeded`] - generic argument or constraint expansion nested too deep
/// - [`Error::Malformed`] - the metadata graph is inconsistent (e.g. a dropped constraint)
/// - [`Error::UnknownLanguage`] - a language name could not be mapped to a descriptor
///
/// # Examples
///
/// ```rust
/// use declscope::{prelude::*, Error};
///
/// let int32 = TypeReference::new("System", "Int32");
/// let method = MethodDefinition::new("Add", int32);
/// let renderer = Renderer::new(Language::VisualBasic.descriptor());
///
/// match renderer.generate_source_code(&method, &[]) {
///     Err(Error::UnsupportedOperation(what)) => println!("not available: {what}"),
///     Err(e) => println!("other error: {e}"),
///     Ok(_) => unreachable!(),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The requested operation is not supported.
    ///
    /// Raised for full statement-level source generation. Only declarations and stub
    /// bodies are produced; the operation is never attempted partially.
    #[error("Operation is not supported - {0}")]
    UnsupportedOperation(&'static str),

    /// Recursion limit reached while expanding generic arguments or constraints.
    ///
    /// Self-referential generic constraints (e.g. `T : IComparable<T>` rendered with
    /// usage-site constraints enabled) would otherwise recurse forever. The associated
    /// value is the configured limit that was exceeded.
    #[error("Reached the maximum render depth allowed - {0}")]
    RenderDepthExceeded(usize),

    /// The metadata graph handed to the renderer is inconsistent.
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

    /// No language descriptor is registered under the given name.
    #[error("Unknown target language - {0}")]
    UnknownLanguage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_macro_captures_location() {
        let err = malformed_error!("constraint {} dropped", "T");
        match err {
            Error::Malformed {
                message,
                file,
                line,
            } => {
                assert_eq!(message, "constraint T dropped");
                assert!(file.ends_with("error.rs"));
                assert!(line > 0);
            }
            _ => panic!("Expected Malformed variant"),
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::RenderDepthExceeded(64).to_string(),
            "Reached the maximum render depth allowed - 64"
        );
        assert_eq!(
            Error::UnknownLanguage("cobol".into()).to_string(),
            "Unknown target language - cobol"
        );
    }
}
