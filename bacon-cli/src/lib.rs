pub mod app;
pub mod game;
pub mod logging;

pub use app::App;
