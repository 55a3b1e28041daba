use std::fs;
use std::io::{self, Read};
use thiserror::Error;

/// Upper bound for a single message read from a file or stdin.
pub const MAX_MESSAGE_SIZE: usize = 64 * 1024;

/// A message that cannot be sent as given.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Message is empty")]
    Empty,

    #[error(
        "Message size ({size} bytes) exceeds maximum allowed size ({MAX_MESSAGE_SIZE} bytes)"
    )]
    TooLarge { size: usize },

    #[error("Failed to read {source_name}: {source}")]
    Io {
        source_name: String,
        #[source]
        source: io::Error,
    },

    #[error("Message from {source_name} is not valid UTF-8")]
    NotUtf8 { source_name: String },
}

/// Where a one-shot message comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSource<'a> {
    Arg(&'a str),
    File(&'a str),
    Stdin,
}

pub struct InputReader;

impl InputReader {
    /// Reads the message and rejects blank input.
    ///
    /// The returned text is not trimmed; blankness is only checked.
    pub fn read(source: MessageSource<'_>) -> Result<String, InputError> {
        let message = match source {
            MessageSource::Arg(text) => text.to_string(),
            MessageSource::File(path) => Self::read_file(path)?,
            MessageSource::Stdin => Self::read_stdin()?,
        };

        if message.trim().is_empty() {
            return Err(InputError::Empty);
        }
        if message.len() > MAX_MESSAGE_SIZE {
            return Err(InputError::TooLarge {
                size: message.len(),
            });
        }
        Ok(message)
    }

    fn read_file(path: &str) -> Result<String, InputError> {
        let io_error = |source| InputError::Io {
            source_name: format!("file {path}"),
            source,
        };

        let size = fs::metadata(path).map_err(io_error)?.len() as usize;
        if size > MAX_MESSAGE_SIZE {
            return Err(InputError::TooLarge { size });
        }

        let bytes = fs::read(path).map_err(io_error)?;
        String::from_utf8(bytes).map_err(|_| InputError::NotUtf8 {
            source_name: format!("file {path}"),
        })
    }

    #[allow(clippy::significant_drop_tightening)]
    fn read_stdin() -> Result<String, InputError> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];
        let mut stdin = io::stdin().lock();

        loop {
            let bytes_read = stdin.read(&mut chunk).map_err(|source| InputError::Io {
                source_name: "stdin".to_string(),
                source,
            })?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);

            if buffer.len() > MAX_MESSAGE_SIZE {
                return Err(InputError::TooLarge { size: buffer.len() });
            }
        }

        // Piped input usually ends with a newline the user never meant to send.
        if buffer.ends_with(b"\n") {
            buffer.pop();
            if buffer.ends_with(b"\r") {
                buffer.pop();
            }
        }

        String::from_utf8(buffer).map_err(|_| InputError::NotUtf8 {
            source_name: "stdin".to_string(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_arg_keeps_text_untrimmed() {
        let message = InputReader::read(MessageSource::Arg("  rainfall in Pune ")).unwrap();
        assert_eq!(message, "  rainfall in Pune ");
    }

    #[test]
    fn test_read_blank_arg_is_empty() {
        assert!(matches!(
            InputReader::read(MessageSource::Arg(" \t\n")),
            Err(InputError::Empty)
        ));
    }

    #[test]
    fn test_read_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "groundwater level in Chennai").unwrap();

        let path = temp_file.path().to_str().unwrap();
        let message = InputReader::read(MessageSource::File(path)).unwrap();
        assert_eq!(message, "groundwater level in Chennai");
    }

    #[test]
    fn test_read_file_unicode() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "पानी का स्तर क्या है?").unwrap();

        let path = temp_file.path().to_str().unwrap();
        let message = InputReader::read(MessageSource::File(path)).unwrap();
        assert_eq!(message, "पानी का स्तर क्या है?");
    }

    #[test]
    fn test_read_nonexistent_file() {
        let result = InputReader::read(MessageSource::File("/nonexistent/path/message.txt"));
        assert!(matches!(result, Err(InputError::Io { .. })));
    }

    #[test]
    fn test_read_file_exceeds_max_size() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", "x".repeat(MAX_MESSAGE_SIZE + 1)).unwrap();

        let path = temp_file.path().to_str().unwrap();
        let err = InputReader::read(MessageSource::File(path)).unwrap_err();
        assert!(err.to_string().contains("exceeds maximum"));
    }

    #[test]
    fn test_read_arg_exceeds_max_size() {
        let text = "x".repeat(MAX_MESSAGE_SIZE + 1);
        assert!(matches!(
            InputReader::read(MessageSource::Arg(&text)),
            Err(InputError::TooLarge { .. })
        ));
    }
}
