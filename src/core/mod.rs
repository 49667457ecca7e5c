pub mod backup;
pub mod calendar;
pub mod planner;
pub mod slots;
