pub mod cme;
pub mod fleet;
pub mod impacts;
pub mod orbit;
