pub mod lead;
pub mod offer;
