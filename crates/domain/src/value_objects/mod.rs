//! Value objects shared by the view models

mod humidity;

pub use humidity::Humidity;
