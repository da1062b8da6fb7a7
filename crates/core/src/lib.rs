//! Cooking Simulation Core Library
//!
//! A chained thermal model for a stovetop: a burner heats a pan, the pan
//! cooks a steak. Each stage tracks its own temperature and classifies
//! itself into discrete states (cold/ready/too hot, raw → burnt) that a host
//! application maps onto visuals, smoke and flame effects.
//!
//! ## Layout
//!
//! - [`thermal`]: the three simulated objects and their configuration
//! - [`simulation`]: the [`Kitchen`] scene that owns objects, routes contact
//!   events and steps everything once per frame
//! - [`core_types`]: temperature/time units and object identities
//!
//! The library never detects collisions itself. The host reports contacts as
//! enter/stay/exit events and drives time through [`Kitchen::update`].

// Core types and utilities
pub mod core_types;

// Thermal models
pub mod thermal;

// Scene and per-tick stepping
pub mod simulation;

// Re-export core types
pub use core_types::{Celsius, CelsiusDelta, ObjectId, ObjectKind, Seconds};

// Re-export thermal types
pub use thermal::{
    ConductorConfig, ConductorState, ConfigIssue, ContactPhase, Doneness, HeatSource,
    HeatSourceConfig, KitchenPreset, LoadConfig, SmokeSignal, ThermalConductor, ThermalLoad,
};

// Re-export simulation types
pub use simulation::{
    ContactEvent, Kitchen, KitchenStats, SignalChange, SignalTransition, Station, TickReport,
};
