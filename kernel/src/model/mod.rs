pub mod booking;
pub mod id;
