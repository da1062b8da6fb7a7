use cook_sim_core::{
    ConductorState, Doneness, HeatSource, Kitchen, KitchenStats, ObjectId, SmokeSignal,
    ThermalConductor, ThermalLoad,
};

use crate::error::{CookSimErrorCode, DefaultCookSimError};
use crate::helpers::{handle_ffi_result_error, instance_from_ptr, track_error, with_kitchen};
use crate::instance::CookSimInstance;

/// Pan state as seen by C consumers.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanState {
    #[default]
    Cold = 0,
    Heating = 1,
    Ready = 2,
    TooHot = 3,
}

impl From<ConductorState> for PanState {
    fn from(state: ConductorState) -> Self {
        match state {
            ConductorState::Cold => PanState::Cold,
            ConductorState::Heating => PanState::Heating,
            ConductorState::Ready => PanState::Ready,
            ConductorState::TooHot => PanState::TooHot,
        }
    }
}

/// Smoke level the particle layer should show.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanSmoke {
    #[default]
    None = 0,
    Light = 1,
    Heavy = 2,
}

impl From<SmokeSignal> for PanSmoke {
    fn from(smoke: SmokeSignal) -> Self {
        match smoke {
            SmokeSignal::None => PanSmoke::None,
            SmokeSignal::Light => PanSmoke::Light,
            SmokeSignal::Heavy => PanSmoke::Heavy,
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SteakDoneness {
    #[default]
    Raw = 0,
    Rare = 1,
    Medium = 2,
    WellDone = 3,
    Burnt = 4,
}

impl From<Doneness> for SteakDoneness {
    fn from(doneness: Doneness) -> Self {
        match doneness {
            Doneness::Raw => SteakDoneness::Raw,
            Doneness::Rare => SteakDoneness::Rare,
            Doneness::Medium => SteakDoneness::Medium,
            Doneness::WellDone => SteakDoneness::WellDone,
            Doneness::Burnt => SteakDoneness::Burnt,
        }
    }
}

/// FFI-friendly snapshot of a burner.
/// Keep this layout stable for C/C++/C# consumers.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BurnerStats {
    pub is_on: bool,
    /// 0.0 - 1.0
    pub intensity: f32,
    /// Temperature offered to a pan (Celsius), 0 when off
    pub effective_output: f32,
    /// Flame particles should play
    pub flame_active: bool,
    /// Colour interpolation factor for the burner ring (0.0 - 1.0)
    pub glow_level: f32,
}

impl From<&HeatSource> for BurnerStats {
    fn from(burner: &HeatSource) -> Self {
        Self {
            is_on: burner.is_on(),
            intensity: burner.intensity(),
            effective_output: *burner.effective_output(),
            flame_active: burner.flame_active(),
            glow_level: burner.glow_level(),
        }
    }
}

/// FFI-friendly snapshot of a pan.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanStats {
    /// Celsius
    pub temperature: f32,
    pub state: PanState,
    pub smoke: PanSmoke,
    /// 0 at ambient, 1 at max temperature
    pub heat_ratio: f32,
    pub is_glowing: bool,
    pub in_contact: bool,
}

impl From<&ThermalConductor> for PanStats {
    fn from(pan: &ThermalConductor) -> Self {
        Self {
            temperature: *pan.temperature(),
            state: pan.state().into(),
            smoke: pan.smoke().into(),
            heat_ratio: pan.heat_ratio(),
            is_glowing: pan.is_glowing(),
            in_contact: pan.is_in_contact(),
        }
    }
}

/// FFI-friendly snapshot of a steak.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SteakStats {
    /// Celsius
    pub core_temp: f32,
    pub doneness: SteakDoneness,
    pub is_cooking: bool,
    pub on_pan: bool,
    /// Seconds since the current contact began
    pub contact_duration: f32,
}

impl From<&ThermalLoad> for SteakStats {
    fn from(steak: &ThermalLoad) -> Self {
        Self {
            core_temp: *steak.core_temp(),
            doneness: steak.doneness().into(),
            is_cooking: steak.is_cooking(),
            on_pan: steak.is_on_conductor(),
            contact_duration: *steak.contact_duration(),
        }
    }
}

/// Aggregate kitchen statistics.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimStats {
    /// Seconds simulated so far
    pub simulation_time: f32,
    pub ticks: u64,
    pub burners: u32,
    pub pans: u32,
    pub steaks: u32,
    /// Steaks currently cooking
    pub cooking: u32,
}

impl From<KitchenStats> for SimStats {
    fn from(stats: KitchenStats) -> Self {
        let count = |n: usize| u32::try_from(n).unwrap_or(u32::MAX);
        Self {
            simulation_time: *stats.simulation_time,
            ticks: stats.ticks,
            burners: count(stats.burners),
            pans: count(stats.pans),
            steaks: count(stats.steaks),
            cooking: count(stats.cooking),
        }
    }
}

/// Read a value out of the kitchen into `out`.
///
/// # Safety
/// `out` must be null or valid for writes.
unsafe fn query<T, F>(
    ptr: *const CookSimInstance,
    out: *mut T,
    out_name: &str,
    read: F,
) -> CookSimErrorCode
where
    F: FnOnce(&Kitchen) -> Result<T, DefaultCookSimError>,
{
    if out.is_null() {
        return track_error(&DefaultCookSimError::null_pointer(out_name));
    }

    handle_ffi_result_error(|| {
        let instance = instance_from_ptr(ptr)?;
        let value = with_kitchen(instance, read)??;
        unsafe {
            out.write(value);
        }
        Ok::<(), DefaultCookSimError>(())
    })
}

/// Fill `out_stats` with a snapshot of a burner.
///
/// Returns
/// - `CookSimErrorCode::Ok` on success
/// - `CookSimErrorCode::UnknownObject` if `burner` is not a burner id
/// - `CookSimErrorCode::NullPointer` if `ptr` or `out_stats` is null
/// - `CookSimErrorCode::LockPoisoned` if the kitchen lock is poisoned
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `cook_sim_new` or null.
/// - `out_stats` must be a valid, non-null pointer to a `BurnerStats`.
#[no_mangle]
pub unsafe extern "C" fn cook_sim_get_burner_stats(
    ptr: *const CookSimInstance,
    burner: u32,
    out_stats: *mut BurnerStats,
) -> CookSimErrorCode {
    unsafe {
        query(ptr, out_stats, "out_stats", |kitchen| {
            kitchen
                .burner(ObjectId(burner))
                .map(BurnerStats::from)
                .ok_or_else(|| DefaultCookSimError::unknown_object(burner, "burner"))
        })
    }
}

/// Fill `out_stats` with a snapshot of a pan.
///
/// # Safety
/// Same contract as `cook_sim_get_burner_stats`.
#[no_mangle]
pub unsafe extern "C" fn cook_sim_get_pan_stats(
    ptr: *const CookSimInstance,
    pan: u32,
    out_stats: *mut PanStats,
) -> CookSimErrorCode {
    unsafe {
        query(ptr, out_stats, "out_stats", |kitchen| {
            kitchen
                .pan(ObjectId(pan))
                .map(PanStats::from)
                .ok_or_else(|| DefaultCookSimError::unknown_object(pan, "pan"))
        })
    }
}

/// Fill `out_stats` with a snapshot of a steak.
///
/// # Safety
/// Same contract as `cook_sim_get_burner_stats`.
#[no_mangle]
pub unsafe extern "C" fn cook_sim_get_steak_stats(
    ptr: *const CookSimInstance,
    steak: u32,
    out_stats: *mut SteakStats,
) -> CookSimErrorCode {
    unsafe {
        query(ptr, out_stats, "out_stats", |kitchen| {
            kitchen
                .steak(ObjectId(steak))
                .map(SteakStats::from)
                .ok_or_else(|| DefaultCookSimError::unknown_object(steak, "steak"))
        })
    }
}

/// Fill `out_stats` with aggregate kitchen statistics.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `cook_sim_new` or null.
/// - `out_stats` must be a valid, non-null pointer to a `SimStats`.
#[no_mangle]
pub unsafe extern "C" fn cook_sim_get_stats(
    ptr: *const CookSimInstance,
    out_stats: *mut SimStats,
) -> CookSimErrorCode {
    unsafe { query(ptr, out_stats, "out_stats", |kitchen| Ok(kitchen.stats().into())) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::{cook_sim_destroy, cook_sim_new};
    use crate::objects::{cook_sim_add_burner, cook_sim_burner_set_intensity, cook_sim_burner_turn_on};
    use crate::simulation::cook_sim_update;
    use std::ptr;

    #[test]
    fn burner_query_reflects_controls() {
        let mut sim = ptr::null_mut();
        let mut burner = 0;
        unsafe {
            cook_sim_new(&mut sim);
            cook_sim_add_burner(sim, &mut burner);
        }
        cook_sim_burner_set_intensity(sim, burner, 2.0);
        cook_sim_burner_turn_on(sim, burner);

        let mut stats = BurnerStats::default();
        let code = unsafe { cook_sim_get_burner_stats(sim, burner, &mut stats) };
        assert_eq!(code, CookSimErrorCode::Ok);
        assert!(stats.is_on);
        assert_eq!(stats.intensity, 1.0);
        assert_eq!(stats.effective_output, 250.0);
        assert!(stats.flame_active);

        let code = unsafe { cook_sim_get_burner_stats(sim, burner + 1, &mut stats) };
        assert_eq!(code, CookSimErrorCode::UnknownObject);
        let code = unsafe { cook_sim_get_burner_stats(sim, burner, ptr::null_mut()) };
        assert_eq!(code, CookSimErrorCode::NullPointer);

        cook_sim_update(sim, 0.5);
        cook_sim_update(sim, 0.25);
        let mut totals = SimStats::default();
        let code = unsafe { cook_sim_get_stats(sim, &mut totals) };
        assert_eq!(code, CookSimErrorCode::Ok);
        assert_eq!(totals.ticks, 2);
        assert_eq!(totals.burners, 1);
        assert_eq!(totals.simulation_time, 0.75);

        unsafe { cook_sim_destroy(sim); }
    }
}
