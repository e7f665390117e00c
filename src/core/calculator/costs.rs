use crate::core::coerce::{format_decimal, parse_decimal, parse_money};

pub const COST_PRECISION: usize = 2;

/// Unit costs derived from the fees of one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitCosts {
    pub cost_per_energy: String,
    pub cost_per_distance: String,
}

/// Total fee divided by energy and by distance.
///
/// Each cost stays empty unless its divisor parses to a nonzero number.
pub fn compute_unit_costs(
    charging_fee: &str,
    parking_fee: &str,
    energy_added: &str,
    distance_added: &str,
) -> UnitCosts {
    let total = parse_money(charging_fee) + parse_money(parking_fee);

    UnitCosts {
        cost_per_energy: cost_per_unit(total, energy_added),
        cost_per_distance: cost_per_unit(total, distance_added),
    }
}

fn cost_per_unit(total: f64, divisor: &str) -> String {
    match parse_decimal(divisor) {
        Some(d) if d != 0.0 => format_decimal(total / d, COST_PRECISION),
        _ => String::new(),
    }
}
