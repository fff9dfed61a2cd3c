//! Vehicle state and the fleet registry.
//!
//! The registry is the only owner of mutable vehicle state.  The dispatch
//! engine goes through the two transition operations — [`assign`](Fleet::assign)
//! and [`release`](Fleet::release) — never through ad-hoc field writes, so
//! every availability change is observable at one seam.
//!
//! The service model is instantaneous: a dispatched vehicle is assigned and
//! released within the same call, ending up available at its staging
//! location before the next call is processed.

use ems_core::{NodeId, VehicleId};

use crate::{DispatchError, DispatchResult};

/// A single emergency vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    /// External identifier from the input data (e.g. `"A3"`).
    pub label: String,
    /// Home base the vehicle returns to after every dispatch.
    pub staging: NodeId,
    /// Where the vehicle currently is.  Equals `staging` except for the
    /// instant between assign and release.
    pub current: NodeId,
    /// `false` only while assigned to a call.
    pub available: bool,
}

/// Registry of all vehicles, indexed by [`VehicleId`] in registration order.
///
/// Registration order doubles as the deterministic enumeration order for
/// dispatch tie-breaking: [`available_pool`](Self::available_pool) always
/// yields ascending `VehicleId`s.
#[derive(Debug, Default, Clone)]
pub struct Fleet {
    vehicles: Vec<Vehicle>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a vehicle, initially available at its staging location.
    pub fn register(&mut self, label: impl Into<String>, staging: NodeId) -> VehicleId {
        let id = VehicleId(self.vehicles.len() as u32);
        self.vehicles.push(Vehicle {
            label: label.into(),
            staging,
            current: staging,
            available: true,
        });
        id
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    #[inline]
    pub fn get(&self, id: VehicleId) -> &Vehicle {
        &self.vehicles[id.index()]
    }

    /// Iterator over all vehicles in ascending `VehicleId` order.
    pub fn iter(&self) -> impl Iterator<Item = (VehicleId, &Vehicle)> {
        self.vehicles
            .iter()
            .enumerate()
            .map(|(i, v)| (VehicleId(i as u32), v))
    }

    /// Snapshot of all currently available vehicles, ascending `VehicleId`.
    pub fn available_pool(&self) -> Vec<VehicleId> {
        self.iter()
            .filter(|(_, v)| v.available)
            .map(|(id, _)| id)
            .collect()
    }

    // ── Transition operations ─────────────────────────────────────────────

    /// Mark `id` as assigned (unavailable).
    ///
    /// Fails if the vehicle is already assigned — the engine only assigns
    /// out of its own availability snapshot, so this firing indicates a
    /// bookkeeping bug.
    pub fn assign(&mut self, id: VehicleId) -> DispatchResult<()> {
        let v = &mut self.vehicles[id.index()];
        if !v.available {
            return Err(DispatchError::VehicleUnavailable(id));
        }
        v.available = false;
        Ok(())
    }

    /// Mark `id` as available again and relocate it to its staging location.
    ///
    /// Idempotent: releasing an already-available vehicle just re-pins it to
    /// staging.
    pub fn release(&mut self, id: VehicleId) {
        let v = &mut self.vehicles[id.index()];
        v.available = true;
        v.current = v.staging;
    }
}
