pub mod dashboard;

pub use dashboard::FloodPreventionDashboard;
