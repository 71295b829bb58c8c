pub mod bridge;
pub mod encoder;
pub mod writer;

pub use crate::domain::model::{Acknowledgement, Event, EventCategory, Forwarded, WireLine};
pub use crate::domain::ports::{ConfigProvider, LineSink};
pub use crate::utils::error::Result;
