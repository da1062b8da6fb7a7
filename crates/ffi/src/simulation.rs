use cook_sim_core::{ContactEvent, ContactPhase, ObjectId};

use crate::error::{CookSimErrorCode, DefaultCookSimError};
use crate::helpers::{handle_ffi_result_error, instance_from_ptr, with_kitchen_mut};
use crate::instance::CookSimInstance;

/// Advance the kitchen by `dt` seconds.
///
/// Thread-safe: acquires the write lock for the update.
///
/// - If `ptr` is null or `dt` is non-finite or negative this function is a no-op.
/// - Contact events reported since the last call are applied first.
#[no_mangle]
pub extern "C" fn cook_sim_update(ptr: *const CookSimInstance, dt: f32) {
    if !dt.is_finite() || dt < 0.0 {
        return;
    }

    // Silently ignore errors for void-returning function
    let _ = handle_ffi_result_error(|| {
        let instance = instance_from_ptr(ptr)?;

        with_kitchen_mut(instance, |kitchen| {
            kitchen.update(dt);
        })?;

        Ok::<(), DefaultCookSimError>(())
    });
}

/// Report a contact from the host's collision system.
///
/// - `phase`: 0 = Enter, 1 = Stay, 2 = Exit
/// - `receiver`: the pan or steak whose contact changes
/// - `other`: the burner or pan it touches
///
/// The event is queued and applied on the next `cook_sim_update`. Pairs that
/// cannot touch (a steak on a burner) are dropped there without an error.
///
/// Returns
/// - `CookSimErrorCode::Ok` when the event was queued
/// - `CookSimErrorCode::InvalidParameter` for an unknown `phase`
/// - `CookSimErrorCode::UnknownObject` if `receiver` does not exist
/// - `CookSimErrorCode::NullPointer` if `ptr` is null
#[no_mangle]
pub extern "C" fn cook_sim_contact(
    ptr: *const CookSimInstance,
    phase: u8,
    receiver: u32,
    other: u32,
) -> CookSimErrorCode {
    handle_ffi_result_error(|| {
        let phase = ContactPhase::from_u8(phase).ok_or_else(|| {
            DefaultCookSimError::invalid_parameter(format!(
                "Contact phase must be 0 (Enter), 1 (Stay) or 2 (Exit), got {phase}"
            ))
        })?;
        let instance = instance_from_ptr(ptr)?;

        with_kitchen_mut(instance, |kitchen| {
            if kitchen.kind_of(ObjectId(receiver)).is_none() {
                return Err(DefaultCookSimError::unknown_object(receiver, "object"));
            }
            kitchen.submit_contact(ContactEvent::new(
                phase,
                ObjectId(receiver),
                ObjectId(other),
            ));
            Ok(())
        })?
    })
}
