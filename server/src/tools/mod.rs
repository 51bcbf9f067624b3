pub mod hits;
pub mod list;
