//! Supporting utilities used by the conduction models.
//!
//! These modules are public because they are useful on their own, but their
//! APIs are not yet stable.

pub mod constraint;
pub mod special;
pub mod units;
