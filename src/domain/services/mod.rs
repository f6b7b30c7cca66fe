pub mod calendar;
pub mod events;
pub mod homework;
pub mod marks;
pub mod resolve;
