pub mod chart;
pub mod conversation;
pub mod network;
pub mod persona;
pub mod surface;
