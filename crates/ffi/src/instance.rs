use cook_sim_core::{Kitchen, KitchenPreset};
use std::sync::RwLock;

use crate::error::{CookSimErrorCode, DefaultCookSimError};
use crate::helpers::{clear_last_error, track_error};

/// The cooking simulation context handed to the host engine.
///
/// # Thread Safety
/// The kitchen sits behind an `RwLock`:
/// - queries take a read lock and may run concurrently
/// - `cook_sim_update`, controls and contact events take the write lock
///
/// ## Unity Example
/// ```csharp
/// [DllImport("cook_sim_ffi")] static extern CookSimErrorCode cook_sim_new(out IntPtr sim);
///
/// IntPtr sim;
/// void Start() { cook_sim_new(out sim); }
/// void Update() { cook_sim_update(sim, Time.deltaTime); }
/// void OnDestroy() { cook_sim_destroy(sim); }
/// ```
///
/// ## Unreal Engine Example
/// ```cpp
/// CookSimInstance* Sim = nullptr;
///
/// void AStove::BeginPlay() {
///     if (cook_sim_new(&Sim) != CookSimErrorCode::Ok) {
///         UE_LOG(LogTemp, Error, TEXT("%s"), UTF8_TO_TCHAR(cook_sim_get_last_error()));
///     }
/// }
///
/// void AStove::Tick(float DeltaTime) { cook_sim_update(Sim, DeltaTime); }
///
/// void AStove::EndPlay(const EEndPlayReason::Type) {
///     cook_sim_destroy(Sim);
///     Sim = nullptr;
/// }
/// ```
pub struct CookSimInstance {
    pub(crate) kitchen: RwLock<Kitchen>,
    /// Configs used by `cook_sim_add_*`
    pub(crate) preset: KitchenPreset,
}

impl CookSimInstance {
    pub(crate) fn new(preset: KitchenPreset) -> Self {
        Self {
            kitchen: RwLock::new(Kitchen::new()),
            preset: preset.sanitized(),
        }
    }
}

/// Create a new kitchen with the default burner/pan/steak configuration.
///
/// Returns
/// - `CookSimErrorCode::Ok` with a valid instance in `out_instance`
/// - `CookSimErrorCode::NullPointer` if `out_instance` is null
///
/// # Safety
/// - `out_instance` must be a valid, non-null pointer to writable memory.
/// - The caller owns the instance and MUST call `cook_sim_destroy` exactly once.
#[no_mangle]
pub unsafe extern "C" fn cook_sim_new(out_instance: *mut *mut CookSimInstance) -> CookSimErrorCode {
    if out_instance.is_null() {
        return track_error(&DefaultCookSimError::null_pointer("out_instance"));
    }

    let instance = Box::new(CookSimInstance::new(KitchenPreset::default()));
    unsafe {
        *out_instance = Box::into_raw(instance);
    }
    clear_last_error();
    CookSimErrorCode::Ok
}

/// Destroy an instance created by `cook_sim_new`. Null is a no-op.
///
/// # Safety
/// - `ptr` must come from `cook_sim_new` and must not have been destroyed.
/// - The pointer must not be used after this call.
#[no_mangle]
pub unsafe extern "C" fn cook_sim_destroy(ptr: *mut CookSimInstance) {
    if ptr.is_null() {
        return;
    }

    // SAFETY: `ptr` was produced by `Box::into_raw` in `cook_sim_new`
    unsafe {
        drop(Box::from_raw(ptr));
    }
}
