pub mod delivery;
pub mod earning;
