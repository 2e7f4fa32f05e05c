mod dashboard;

pub use dashboard::write_dashboard;
