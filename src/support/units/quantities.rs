use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P1, Z0},
};

/// Volumetric heat capacity (`ρ·c`), J/m³·K in SI.
pub type VolumetricHeatCapacity = Quantity<ISQ<N1, P1, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Energy stored per unit volume, J/m³ in SI.
pub type EnergyDensity = Quantity<ISQ<N1, P1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Energy per unit area, J/m² in SI.
pub type ArealEnergy = Quantity<ISQ<Z0, P1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Energy per unit length, J/m in SI.
pub type LinearEnergy = Quantity<ISQ<P1, P1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
