//! 단위 정의 및 변환 모듈 모음.

pub mod area;
pub mod constants;
pub mod density;
pub mod force;
pub mod length;
pub mod mass;
pub mod power;
pub mod pressure;
pub mod velocity;
pub mod volume;

pub use area::{convert_area, AreaUnit};
pub use constants::unit_factor;
pub use density::{convert_density, DensityUnit};
pub use force::{convert_force, ForceUnit};
pub use length::{convert_length, LengthUnit};
pub use mass::{convert_mass, MassUnit};
pub use power::{convert_power, PowerUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use velocity::{convert_velocity, VelocityUnit};
pub use volume::{convert_volume, VolumeUnit};
