pub mod app;
pub mod csv_export;
pub mod income_loader;
pub mod logging;
pub mod utils;
