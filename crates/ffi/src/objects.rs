use cook_sim_core::{Kitchen, KitchenPreset, ObjectId};

use crate::error::{CookSimErrorCode, DefaultCookSimError};
use crate::helpers::{handle_ffi_result_error, instance_from_ptr, track_error, with_kitchen_mut};
use crate::instance::CookSimInstance;

/// Shared body of the `cook_sim_add_*` functions.
///
/// # Safety
/// `out_id` must be null or valid for writes.
unsafe fn add_object<F>(ptr: *const CookSimInstance, out_id: *mut u32, add: F) -> CookSimErrorCode
where
    F: FnOnce(&mut Kitchen, &KitchenPreset) -> ObjectId,
{
    if out_id.is_null() {
        return track_error(&DefaultCookSimError::null_pointer("out_id"));
    }

    handle_ffi_result_error(|| {
        let instance = instance_from_ptr(ptr)?;
        let id = with_kitchen_mut(instance, |kitchen| add(kitchen, &instance.preset))?;
        unsafe {
            *out_id = id.raw();
        }
        Ok::<(), DefaultCookSimError>(())
    })
}

/// Add a burner (off, intensity 0) and write its id to `out_id`.
///
/// Returns
/// - `CookSimErrorCode::Ok` on success
/// - `CookSimErrorCode::NullPointer` if `ptr` or `out_id` is null
/// - `CookSimErrorCode::LockPoisoned` if the kitchen lock is poisoned
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `cook_sim_new` or null.
/// - `out_id` must be a valid, non-null pointer to a `u32`.
#[no_mangle]
pub unsafe extern "C" fn cook_sim_add_burner(
    ptr: *const CookSimInstance,
    out_id: *mut u32,
) -> CookSimErrorCode {
    unsafe { add_object(ptr, out_id, |kitchen, preset| kitchen.add_burner(preset.burner)) }
}

/// Add a pan at its initial temperature and write its id to `out_id`.
///
/// # Safety
/// Same contract as `cook_sim_add_burner`.
#[no_mangle]
pub unsafe extern "C" fn cook_sim_add_pan(
    ptr: *const CookSimInstance,
    out_id: *mut u32,
) -> CookSimErrorCode {
    unsafe { add_object(ptr, out_id, |kitchen, preset| kitchen.add_pan(preset.pan)) }
}

/// Add a raw steak and write its id to `out_id`.
///
/// # Safety
/// Same contract as `cook_sim_add_burner`.
#[no_mangle]
pub unsafe extern "C" fn cook_sim_add_steak(
    ptr: *const CookSimInstance,
    out_id: *mut u32,
) -> CookSimErrorCode {
    unsafe { add_object(ptr, out_id, |kitchen, preset| kitchen.add_steak(preset.steak)) }
}

/// Remove any object. Objects resting on it cool down from the next update.
///
/// Returns `CookSimErrorCode::UnknownObject` if `id` does not exist.
#[no_mangle]
pub extern "C" fn cook_sim_remove(ptr: *const CookSimInstance, id: u32) -> CookSimErrorCode {
    handle_ffi_result_error(|| {
        let instance = instance_from_ptr(ptr)?;
        if with_kitchen_mut(instance, |kitchen| kitchen.remove(ObjectId(id)))? {
            Ok(())
        } else {
            Err(DefaultCookSimError::unknown_object(id, "object"))
        }
    })
}

fn control_burner<F>(ptr: *const CookSimInstance, burner: u32, control: F) -> CookSimErrorCode
where
    F: FnOnce(&mut Kitchen, ObjectId) -> bool,
{
    handle_ffi_result_error(|| {
        let instance = instance_from_ptr(ptr)?;
        if with_kitchen_mut(instance, |kitchen| control(kitchen, ObjectId(burner)))? {
            Ok(())
        } else {
            Err(DefaultCookSimError::unknown_object(burner, "burner"))
        }
    })
}

/// Switch a burner on. Intensity is left unchanged.
#[no_mangle]
pub extern "C" fn cook_sim_burner_turn_on(
    ptr: *const CookSimInstance,
    burner: u32,
) -> CookSimErrorCode {
    control_burner(ptr, burner, Kitchen::turn_on)
}

/// Switch a burner off. Intensity drops to 0.
#[no_mangle]
pub extern "C" fn cook_sim_burner_turn_off(
    ptr: *const CookSimInstance,
    burner: u32,
) -> CookSimErrorCode {
    control_burner(ptr, burner, Kitchen::turn_off)
}

/// Set a burner's intensity. Values are clamped to [0, 1]; NaN becomes 0.
#[no_mangle]
pub extern "C" fn cook_sim_burner_set_intensity(
    ptr: *const CookSimInstance,
    burner: u32,
    intensity: f32,
) -> CookSimErrorCode {
    control_burner(ptr, burner, |kitchen, id| kitchen.set_intensity(id, intensity))
}
