//! Public Twine models.
//!
//! Each model lives in its own module with an internal `core` submodule that
//! holds the computation. The [`twine_core::Model`] implementation is a thin
//! adapter over that core, and any wire format lives beside it.

pub mod thermal;
