//! Solar Home System catalog lookup and standalone pricing.
//!
//! The catalog is caller-supplied reference data: a list of purchasable SHS
//! units, each with a price, a battery capacity, and a maximum power output.
//! Pricing a node means finding the cheapest unit that covers both its
//! required capacity and its peak power.
//!
//! The scan sorts by capacity and takes the first entry covering both
//! requirements. Capacity tiers usually track power tiers in real catalogs,
//! but nothing guarantees it, so both conditions are checked per entry
//! rather than assumed monotone. Finding no qualifying unit is a valid
//! outcome, not an error: it is reported as [`ShsPrice::Infeasible`] and
//! callers must handle it before aggregating prices arithmetically.

use ren_core::{Dollars, NodeSet, PlanError, PlanResult, WattHours, Watts};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// One purchasable Solar Home System unit from the reference catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShsUnit {
    /// Purchase price
    pub price: Dollars,
    /// Battery capacity
    pub capacity: WattHours,
    /// Maximum deliverable power
    pub max_power: Watts,
}

impl ShsUnit {
    /// Create a unit from raw $ / Wh / W values
    pub fn new(price: f64, capacity: f64, max_power: f64) -> Self {
        Self {
            price: Dollars(price),
            capacity: WattHours(capacity),
            max_power: Watts(max_power),
        }
    }

    /// True if this unit meets both requirements
    fn covers(&self, capacity: WattHours, max_power: Watts) -> bool {
        self.capacity >= capacity && self.max_power >= max_power
    }
}

/// Ordered catalog of SHS units.
///
/// Duplicates and shared capacity/power tiers are allowed; ties are broken
/// by catalog order after the stable sort by capacity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShsCatalog {
    units: Vec<ShsUnit>,
}

impl ShsCatalog {
    /// Create a catalog from a list of units, kept in the given order
    pub fn new(units: Vec<ShsUnit>) -> Self {
        Self { units }
    }

    /// All units in catalog order
    pub fn units(&self) -> &[ShsUnit] {
        &self.units
    }

    /// Number of units
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// True if the catalog holds no units
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Price of the cheapest unit meeting both requirements.
    ///
    /// Scans the catalog in ascending capacity order (stable, so catalog
    /// order breaks ties) and returns the first unit whose capacity *and*
    /// max power both suffice; [`ShsPrice::Infeasible`] when none does.
    pub fn cheapest(&self, capacity: WattHours, max_power: Watts) -> ShsPrice {
        let mut by_capacity: Vec<&ShsUnit> = self.units.iter().collect();
        by_capacity.sort_by(|a, b| a.capacity.value().total_cmp(&b.capacity.value()));

        for unit in by_capacity {
            if unit.covers(capacity, max_power) {
                trace!(
                    capacity_wh = capacity.value(),
                    max_power_w = max_power.value(),
                    price = unit.price.value(),
                    "catalog match"
                );
                return ShsPrice::Quoted(unit.price);
            }
        }
        trace!(
            capacity_wh = capacity.value(),
            max_power_w = max_power.value(),
            "no catalog unit covers the requirement"
        );
        ShsPrice::Infeasible
    }
}

/// Outcome of an SHS price lookup.
///
/// Standalone service can genuinely be unavailable (no catalog unit covers
/// the requirement), so the price is a tagged result rather than a bare
/// number with an infinity convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ShsPrice {
    /// The cheapest qualifying unit costs this much
    Quoted(Dollars),
    /// No catalog unit covers the requirement
    Infeasible,
}

impl ShsPrice {
    /// True if a qualifying unit exists
    pub fn is_feasible(&self) -> bool {
        matches!(self, ShsPrice::Quoted(_))
    }

    /// The quoted price, if any
    pub fn quote(&self) -> Option<Dollars> {
        match self {
            ShsPrice::Quoted(price) => Some(*price),
            ShsPrice::Infeasible => None,
        }
    }

    /// Numeric view for callers aggregating prices: the quoted value, or
    /// `f64::INFINITY` for an infeasible lookup
    pub fn value(&self) -> f64 {
        match self {
            ShsPrice::Quoted(price) => price.value(),
            ShsPrice::Infeasible => f64::INFINITY,
        }
    }
}

/// Price standalone service for one labeled node.
///
/// Reads the node's demand figures and delegates to
/// [`ShsCatalog::cheapest`]. Fails when the label is absent from the node
/// set or the node carries no demand figures; an infeasible lookup is *not*
/// an error and comes back as [`ShsPrice::Infeasible`].
pub fn standalone_price(
    nodes: &NodeSet,
    label: &str,
    catalog: &ShsCatalog,
) -> PlanResult<ShsPrice> {
    let node = nodes.require(label)?;
    let demand = node
        .demand
        .ok_or_else(|| PlanError::MissingDemand(label.to_string()))?;
    Ok(catalog.cheapest(demand.required_capacity, demand.max_power))
}
