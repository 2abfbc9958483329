/// Errors that can occur while draining an encoded frame.
///
/// Appending units never fails: values that do not fit their field wrap
/// silently. The only failure left is the sink refusing bytes.
///
/// ```text
///   EncodeError
///   └── Io(std::io::Error)   ← from the writer passed to write_to
/// ```
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
