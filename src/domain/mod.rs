pub mod bands;
pub mod comfort;
pub mod day_view;
pub mod hourly;
pub mod summary;
pub mod trend;
pub mod weather;
pub mod window;
