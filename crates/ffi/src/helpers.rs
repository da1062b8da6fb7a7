use crate::error::{with_last_error_mut, CookSimError, CookSimErrorCode, DefaultCookSimError};
use crate::instance::CookSimInstance;
use cook_sim_core::Kitchen;
use std::ffi::CString;

/// Set the thread-local error message and code.
pub(crate) fn set_last_error(error: &impl CookSimError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Clear the thread-local error after a successful call.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = CookSimErrorCode::Ok;
    });
}

/// Record an error and return its code.
#[inline]
pub(crate) fn track_error(error: &impl CookSimError) -> CookSimErrorCode {
    set_last_error(error);
    error.code()
}

/// Record the error of a failed result, keeping the success value.
pub(crate) fn track_result<T, E: CookSimError>(result: Result<T, E>) -> Result<T, CookSimErrorCode> {
    match result {
        Ok(value) => {
            clear_last_error();
            Ok(value)
        }
        Err(error) => Err(track_error(&error)),
    }
}

/// Run an FFI body and turn its result into an error code.
pub(crate) fn handle_ffi_result_error<F, E>(body: F) -> CookSimErrorCode
where
    F: FnOnce() -> Result<(), E>,
    E: CookSimError,
{
    match track_result(body()) {
        Ok(()) => CookSimErrorCode::Ok,
        Err(code) => code,
    }
}

/// Borrow the instance behind `ptr`.
///
/// The caller guarantees `ptr` is null or came from `cook_sim_new` and has not
/// been destroyed.
pub(crate) fn instance_from_ptr<'a>(
    ptr: *const CookSimInstance,
) -> Result<&'a CookSimInstance, DefaultCookSimError> {
    // SAFETY: non-null pointers are only ever produced by `cook_sim_new`
    unsafe { ptr.as_ref() }.ok_or_else(|| DefaultCookSimError::null_pointer("ptr"))
}

/// Run `f` under the kitchen read lock.
pub(crate) fn with_kitchen<F, T>(instance: &CookSimInstance, f: F) -> Result<T, DefaultCookSimError>
where
    F: FnOnce(&Kitchen) -> T,
{
    let kitchen = instance
        .kitchen
        .read()
        .map_err(|_| DefaultCookSimError::lock_poisoned("kitchen"))?;
    Ok(f(&kitchen))
}

/// Run `f` under the kitchen write lock.
pub(crate) fn with_kitchen_mut<F, T>(
    instance: &CookSimInstance,
    f: F,
) -> Result<T, DefaultCookSimError>
where
    F: FnOnce(&mut Kitchen) -> T,
{
    let mut kitchen = instance
        .kitchen
        .write()
        .map_err(|_| DefaultCookSimError::lock_poisoned("kitchen"))?;
    Ok(f(&mut kitchen))
}
