pub mod models;
pub mod enums;
pub mod video;

pub use models::*;
pub use enums::*;
pub use video::*;
