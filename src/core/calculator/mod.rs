pub mod costs;
pub mod distance;
pub mod duration;

pub use costs::{UnitCosts, compute_unit_costs};
pub use distance::compute_distance_added;
pub use duration::{compute_duration, duration_minutes};

use crate::models::ChargeFields;

/// Refresh every derived field of `fields` from its inputs.
///
/// Distance is computed first because the per-distance cost divides by it.
pub fn recompute_derived(fields: &mut ChargeFields) {
    fields.duration = compute_duration(&fields.starting_time, &fields.ending_time);
    fields.distance_added =
        compute_distance_added(&fields.starting_distance, &fields.ending_distance);

    let costs = compute_unit_costs(
        &fields.charging_fee,
        &fields.parking_fee,
        &fields.energy_added,
        &fields.distance_added,
    );
    fields.cost_per_energy = costs.cost_per_energy;
    fields.cost_per_distance = costs.cost_per_distance;
}
