/// Unwraps an `Ok` value or runs `$block` with the error bound to `$err`.
///
/// Only usable inside the crate:
///
/// ```compile_fail
/// let n = bytesize::ok_or!("7".parse::<i32>(), _e => 0);
/// ```
macro_rules! ok_or {
    ($result: expr, $err: pat => $block: expr) => {
        match $result {
            Ok(val) => val,
            Err($err) => $block,
        }
    };
}

/// Unwraps a `Some` value or runs `$block`.
///
/// ```compile_fail
/// let n = bytesize::some_or!(None::<i32>, 3);
/// ```
macro_rules! some_or {
    ($option: expr, $block: expr) => {
        match $option {
            Some(val) => val,
            None => $block,
        }
    };
}

pub(crate) use ok_or;
pub(crate) use some_or;
