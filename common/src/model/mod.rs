pub mod audience;
pub mod campaign;
pub mod care_gap;
