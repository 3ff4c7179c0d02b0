use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Shifts a character by a signed code-point offset, if and only if the
/// result is a valid character.
///
/// ## Errors
/// Returns `RuntimeError::CharOutOfRange` when the shifted code point is
/// negative, beyond the highest scalar value, or inside the surrogate
/// range.
///
/// ## Parameters
/// - `c`: The character to shift.
/// - `offset`: The signed code-point offset to apply.
/// - `line`: Source code line number for error reporting.
///
/// ## Returns
/// - `Ok(char)`: The shifted character if the result is valid.
/// - `Err(RuntimeError::CharOutOfRange { line })`: Otherwise.
///
/// ## Example
/// ```
/// use jawa::util::num::char_offset_checked;
///
/// assert_eq!(char_offset_checked('a', 1, 0).unwrap(), 'b');
/// assert_eq!(char_offset_checked('b', -1, 0).unwrap(), 'a');
///
/// // Shifting below code point zero is invalid.
/// assert!(char_offset_checked('a', -1000, 0).is_err());
/// ```
pub fn char_offset_checked(c: char, offset: i64, line: usize) -> EvalResult<char> {
    let code = i64::from(u32::from(c)) + offset;

    u32::try_from(code).ok()
                       .and_then(char::from_u32)
                       .ok_or(RuntimeError::CharOutOfRange { line })
}

/// Converts a signed repetition count to a `usize` if and only if it is
/// non-negative.
///
/// ## Errors
/// Returns `RuntimeError::InvalidRepetition` for negative counts.
///
/// ## Parameters
/// - `count`: The repetition count as computed by the program.
/// - `line`: Source code line number for error reporting.
///
/// ## Returns
/// - `Ok(usize)`: The count if it is usable.
/// - `Err(RuntimeError::InvalidRepetition { count, line })`: If negative.
///
/// ## Example
/// ```
/// use jawa::util::num::repeat_count_checked;
///
/// assert_eq!(repeat_count_checked(3, 0).unwrap(), 3);
/// assert!(repeat_count_checked(-1, 0).is_err());
/// ```
pub fn repeat_count_checked(count: i32, line: usize) -> EvalResult<usize> {
    usize::try_from(count).map_err(|_| RuntimeError::InvalidRepetition { count, line })
}
