pub mod logging;
pub mod quote;
pub mod ui;
