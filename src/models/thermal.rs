//! Thermal models.
//!
//! - [`transient`]: transient conduction in plates, cylinders and spheres.

pub mod transient;
