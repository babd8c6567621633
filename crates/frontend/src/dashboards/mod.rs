pub mod d410_flood_prevention;

pub use d410_flood_prevention::ui::FloodPreventionDashboard;
