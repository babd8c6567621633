pub mod d410_flood_prevention;
