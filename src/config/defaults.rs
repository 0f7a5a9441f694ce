//! Default value functions for serde deserialization.

pub fn retry_limit() -> u32 {
    6
}

pub fn history_len() -> usize {
    2
}

pub fn obstacle_rate() -> u8 {
    10
}
