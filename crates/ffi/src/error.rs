use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// - `code()` is what crosses the FFI boundary
/// - `msg()` is stored for `cook_sim_get_last_error`
pub(crate) trait CookSimError {
    fn code(&self) -> CookSimErrorCode;

    fn msg(&self) -> &str;
}

/// Default `CookSimError` carrying a code and a formatted message
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultCookSimError {
    code: CookSimErrorCode,
    msg: String,
}

impl DefaultCookSimError {
    /// Null pointer passed where non-null is required.
    ///
    /// # Arguments
    /// * `param_name` - The parameter that was null (e.g. `"ptr"`, `"out_id"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: CookSimErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// The kitchen lock was poisoned by a panic in another thread.
    pub fn lock_poisoned(lock_name: &str) -> Self {
        Self {
            code: CookSimErrorCode::LockPoisoned,
            msg: format!("Lock '{lock_name}' was poisoned by a panic in another thread"),
        }
    }

    /// No object with `id`, or the object is not of the `expected` kind.
    pub fn unknown_object(id: u32, expected: &str) -> Self {
        Self {
            code: CookSimErrorCode::UnknownObject,
            msg: format!("No {expected} with id {id}"),
        }
    }

    pub fn invalid_parameter(message: String) -> Self {
        Self {
            code: CookSimErrorCode::InvalidParameter,
            msg: message,
        }
    }
}

impl CookSimError for DefaultCookSimError {
    fn code(&self) -> CookSimErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by cooking simulation functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookSimErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Null pointer passed where non-null required.
    NullPointer = 1,

    /// Internal lock was poisoned by a panic.
    LockPoisoned = 2,

    /// Object id does not exist or refers to the wrong kind of object.
    UnknownObject = 3,

    /// Invalid parameter passed to function.
    InvalidParameter = 4,
}

impl From<DefaultCookSimError> for CookSimErrorCode {
    fn from(error: DefaultCookSimError) -> Self {
        error.code
    }
}

thread_local! {
    /// Most recent FFI error on this thread (C string, error code).
    /// The CString is owned here so the pointer handed out stays valid.
    static LAST_ERROR: RefCell<(Option<CString>, CookSimErrorCode)> = const { RefCell::new((None, CookSimErrorCode::Ok)) };
}

pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, CookSimErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, CookSimErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns null if the last call on this thread succeeded.
///
/// # Lifetime
/// The pointer is valid until the next FFI call on this thread.
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```cpp
/// CookSimInstance* sim = nullptr;
/// cook_sim_new(&sim);
/// uint32_t burner = 0;
/// if (cook_sim_burner_turn_on(sim, 42) != CookSimErrorCode::Ok) {
///     printf("turn on failed: %s\n", cook_sim_get_last_error());
/// }
/// ```
#[no_mangle]
pub extern "C" fn cook_sim_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code (`Ok` if the last call succeeded).
///
/// Error state is thread-local: each thread sees only its own calls.
#[no_mangle]
pub extern "C" fn cook_sim_get_last_error_code() -> CookSimErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
