//! Vehicle rental pricing domain module.
//!
//! Every vehicle variant prices a rental as `rate × duration` plus its own
//! surcharge.

pub mod vehicle;

pub use vehicle::{
    Bike, Car, HELMET_CHARGE, LuxuryTier, RentalQuote, TRUCK_CHARGE_PER_TON, Truck, Vehicle,
    VehicleKind,
};
