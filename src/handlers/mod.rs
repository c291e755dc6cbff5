pub mod evaluations;
pub mod meta;
pub mod surveys;
