// ao-core/src/units.rs

use uom::si::f64::{
    DynamicViscosity as UomDynamicViscosity, Length as UomLength, MassDensity as UomMassDensity,
    Pressure as UomPressure, Ratio as UomRatio, ThermalConductivity as UomThermalConductivity,
    ThermodynamicTemperature as UomThermodynamicTemperature, Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type DynVisc = UomDynamicViscosity;
pub type Length = UomLength;
pub type Density = UomMassDensity;
pub type Pressure = UomPressure;
pub type Ratio = UomRatio;
pub type Temperature = UomThermodynamicTemperature;
pub type ThermalCond = UomThermalConductivity;
pub type Velocity = UomVelocity;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn kgpm3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn pa_s(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(v)
}

#[inline]
pub fn w_per_m_k(v: f64) -> ThermalCond {
    use uom::si::thermal_conductivity::watt_per_meter_kelvin;
    ThermalCond::new::<watt_per_meter_kelvin>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

/// CODATA 2018 values (SI).
pub mod constants {
    pub const G0_MPS2: f64 = 9.806_65;

    /// Planck constant [J s]
    pub const PLANCK: f64 = 6.626_070_15e-34;
    /// Speed of light in vacuum [m/s]
    pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;
    /// Boltzmann constant [J/K]
    pub const BOLTZMANN: f64 = 1.380_649e-23;
    /// Avogadro constant [1/mol]
    pub const AVOGADRO: f64 = 6.022_140_76e23;
    /// Molar gas constant [J/(mol K)]
    pub const GAS_CONSTANT: f64 = 8.314_462_618;
    /// Vacuum electric permittivity [F/m]
    pub const EPSILON_0: f64 = 8.854_187_812_8e-12;
    /// Elementary charge [C]
    pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;
    /// Electron volt [J]
    pub const ELECTRON_VOLT: f64 = ELEMENTARY_CHARGE;
    /// Electron molar mass [g/mol]
    pub const ELECTRON_MOLAR_MASS: f64 = 5.485_799_090_65e-4;
}
