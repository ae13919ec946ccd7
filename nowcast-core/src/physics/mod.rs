//! Physical models behind the rules
//!
//! - [`pressure`]: the tropospheric barometric formula, used to express every
//!   pressure of a session at one reference altitude
//! - [`cloud_base`]: the dew-point-depression estimate of the cloud base

pub mod cloud_base;
pub mod pressure;

pub use cloud_base::CloudBaseComparison;
pub use pressure::BarometricModel;
