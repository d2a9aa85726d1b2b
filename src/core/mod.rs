pub mod equality;
pub mod morphology;
