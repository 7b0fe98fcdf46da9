pub mod game;
pub mod sensor;
pub mod ui;
