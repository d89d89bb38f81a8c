/// PulseAudio type conversions
pub mod conversion;
/// Audio device types
pub mod device;
/// Audio error types
pub mod error;
/// Blocking PulseAudio session
pub mod pulse;
/// Audio control trait definitions
pub mod service;
/// Volume types
pub mod volume;

pub use device::*;
pub use error::*;
pub use pulse::*;
pub use service::*;
pub use volume::*;
