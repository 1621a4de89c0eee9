use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use polydemo_core::{DomainError, DomainResult};

/// Safety charge added to a bike rental when a helmet is provided.
pub const HELMET_CHARGE: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Truck surcharge per ton of load capacity.
pub const TRUCK_CHARGE_PER_TON: Decimal = Decimal::from_parts(200, 0, 0, false, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    Car,
    Bike,
    Truck,
}

/// Car comfort level, drives the flat car surcharge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LuxuryTier {
    #[default]
    Standard,
    Premium,
    Luxury,
}

impl LuxuryTier {
    pub fn surcharge(self) -> Decimal {
        match self {
            LuxuryTier::Standard => Decimal::ZERO,
            LuxuryTier::Premium => Decimal::from(300),
            LuxuryTier::Luxury => Decimal::from(600),
        }
    }
}

impl FromStr for LuxuryTier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(LuxuryTier::Standard),
            "premium" => Ok(LuxuryTier::Premium),
            "luxury" => Ok(LuxuryTier::Luxury),
            other => Err(DomainError::validation(format!("unknown luxury tier: {other}"))),
        }
    }
}

/// Priced rental with its breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentalQuote {
    pub model: String,
    pub kind: VehicleKind,
    pub duration_hours: u32,
    pub base: Decimal,
    pub surcharge: Decimal,
    pub total: Decimal,
}

impl RentalQuote {
    fn new(
        vehicle: &(impl Vehicle + ?Sized),
        duration_hours: u32,
        surcharge: Option<Decimal>,
    ) -> DomainResult<Self> {
        let overflow = || DomainError::overflow(format!("rental of {}", vehicle.model()));
        let surcharge = surcharge.ok_or_else(overflow)?;
        let base = vehicle
            .rental_rate()
            .checked_mul(Decimal::from(duration_hours))
            .ok_or_else(overflow)?;
        let total = base.checked_add(surcharge).ok_or_else(overflow)?;
        Ok(Self {
            model: vehicle.model().to_string(),
            kind: vehicle.kind(),
            duration_hours,
            base,
            surcharge,
            total,
        })
    }
}

/// Rental pricing capability every vehicle variant must supply.
pub trait Vehicle {
    fn model(&self) -> &str;

    fn kind(&self) -> VehicleKind;

    /// Base rate per hour.
    fn rental_rate(&self) -> Decimal;

    /// Price a rental of `duration_hours`. Pure; fails only on decimal overflow.
    fn quote(&self, duration_hours: u32) -> DomainResult<RentalQuote>;

    fn calculate_rental(&self, duration_hours: u32) -> DomainResult<Decimal> {
        Ok(self.quote(duration_hours)?.total)
    }
}

/// Model name and rate shared by all variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Listing {
    model: String,
    rental_rate: Decimal,
}

impl Listing {
    fn new(model: String, rental_rate: Decimal) -> DomainResult<Self> {
        let model = model.trim();
        if model.is_empty() {
            return Err(DomainError::validation("vehicle model cannot be empty"));
        }
        if rental_rate < Decimal::ZERO {
            return Err(DomainError::validation("rental rate cannot be negative"));
        }
        Ok(Self {
            model: model.to_string(),
            rental_rate,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Car {
    #[serde(flatten)]
    listing: Listing,
    tier: LuxuryTier,
}

impl Car {
    pub fn new(model: impl Into<String>, rental_rate: Decimal, tier: LuxuryTier) -> DomainResult<Self> {
        Ok(Self {
            listing: Listing::new(model.into(), rental_rate)?,
            tier,
        })
    }

    pub fn tier(&self) -> LuxuryTier {
        self.tier
    }
}

impl Vehicle for Car {
    fn model(&self) -> &str {
        &self.listing.model
    }

    fn kind(&self) -> VehicleKind {
        VehicleKind::Car
    }

    fn rental_rate(&self) -> Decimal {
        self.listing.rental_rate
    }

    fn quote(&self, duration_hours: u32) -> DomainResult<RentalQuote> {
        RentalQuote::new(self, duration_hours, Some(self.tier.surcharge()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bike {
    #[serde(flatten)]
    listing: Listing,
    helmet_required: bool,
}

impl Bike {
    pub fn new(
        model: impl Into<String>,
        rental_rate: Decimal,
        helmet_required: bool,
    ) -> DomainResult<Self> {
        Ok(Self {
            listing: Listing::new(model.into(), rental_rate)?,
            helmet_required,
        })
    }

    /// Bike with a helmet included.
    pub fn with_helmet(model: impl Into<String>, rental_rate: Decimal) -> DomainResult<Self> {
        Self::new(model, rental_rate, true)
    }

    pub fn helmet_required(&self) -> bool {
        self.helmet_required
    }
}

impl Vehicle for Bike {
    fn model(&self) -> &str {
        &self.listing.model
    }

    fn kind(&self) -> VehicleKind {
        VehicleKind::Bike
    }

    fn rental_rate(&self) -> Decimal {
        self.listing.rental_rate
    }

    fn quote(&self, duration_hours: u32) -> DomainResult<RentalQuote> {
        let surcharge = if self.helmet_required {
            HELMET_CHARGE
        } else {
            Decimal::ZERO
        };
        RentalQuote::new(self, duration_hours, Some(surcharge))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Truck {
    #[serde(flatten)]
    listing: Listing,
    /// Tons.
    load_capacity: Decimal,
}

impl Truck {
    pub fn new(
        model: impl Into<String>,
        rental_rate: Decimal,
        load_capacity: Decimal,
    ) -> DomainResult<Self> {
        if load_capacity < Decimal::ZERO {
            return Err(DomainError::validation("load capacity cannot be negative"));
        }
        Ok(Self {
            listing: Listing::new(model.into(), rental_rate)?,
            load_capacity,
        })
    }

    pub fn load_capacity(&self) -> Decimal {
        self.load_capacity
    }
}

impl Vehicle for Truck {
    fn model(&self) -> &str {
        &self.listing.model
    }

    fn kind(&self) -> VehicleKind {
        VehicleKind::Truck
    }

    fn rental_rate(&self) -> Decimal {
        self.listing.rental_rate
    }

    fn quote(&self, duration_hours: u32) -> DomainResult<RentalQuote> {
        let surcharge = self.load_capacity.checked_mul(TRUCK_CHARGE_PER_TON);
        RentalQuote::new(self, duration_hours, surcharge)
    }
}
