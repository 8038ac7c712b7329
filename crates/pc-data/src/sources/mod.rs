pub mod csv_source;

pub use csv_source::{load_csv, read_csv};
