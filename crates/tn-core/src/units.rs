// tn-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, HeatCapacity as UomHeatCapacity, HeatTransfer as UomHeatTransfer,
    Length as UomLength, MassDensity as UomMassDensity, Power as UomPower, Ratio as UomRatio,
    SpecificHeatCapacity as UomSpecificHeatCapacity, TemperatureInterval as UomTemperatureInterval,
    ThermalConductance as UomThermalConductance, ThermalConductivity as UomThermalConductivity,
    ThermodynamicTemperature as UomThermodynamicTemperature, Time as UomTime,
    Volume as UomVolume, VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Conductance = UomThermalConductance;
pub type Conductivity = UomThermalConductivity;
pub type Density = UomMassDensity;
pub type FilmCoefficient = UomHeatTransfer;
pub type HeatCapacity = UomHeatCapacity;
pub type Length = UomLength;
pub type Power = UomPower;
pub type Ratio = UomRatio;
pub type SpecificHeat = UomSpecificHeatCapacity;
pub type TempInterval = UomTemperatureInterval;
pub type Temperature = UomThermodynamicTemperature;
pub type Time = UomTime;
pub type Volume = UomVolume;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn m3(v: f64) -> Volume {
    use uom::si::volume::cubic_meter;
    Volume::new::<cubic_meter>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn w(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}

#[inline]
pub fn w_per_k(v: f64) -> Conductance {
    use uom::si::thermal_conductance::watt_per_kelvin;
    Conductance::new::<watt_per_kelvin>(v)
}

#[inline]
pub fn w_per_m_k(v: f64) -> Conductivity {
    use uom::si::thermal_conductivity::watt_per_meter_kelvin;
    Conductivity::new::<watt_per_meter_kelvin>(v)
}

#[inline]
pub fn w_per_m2_k(v: f64) -> FilmCoefficient {
    use uom::si::heat_transfer::watt_per_square_meter_kelvin;
    FilmCoefficient::new::<watt_per_square_meter_kelvin>(v)
}

#[inline]
pub fn j_per_k(v: f64) -> HeatCapacity {
    use uom::si::heat_capacity::joule_per_kelvin;
    HeatCapacity::new::<joule_per_kelvin>(v)
}

#[inline]
pub fn j_per_kg_k(v: f64) -> SpecificHeat {
    use uom::si::specific_heat_capacity::joule_per_kilogram_kelvin;
    SpecificHeat::new::<joule_per_kilogram_kelvin>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

pub mod constants {
    /// Stefan-Boltzmann constant, W/(m² K⁴).
    pub const SIGMA_W_PER_M2_K4: f64 = 5.67e-8;

    /// Seconds per hour, for air-change-rate conversions.
    pub const SECONDS_PER_HOUR: f64 = 3600.0;
}
