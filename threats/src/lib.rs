pub mod threat_map;

pub use threat_map::*;
