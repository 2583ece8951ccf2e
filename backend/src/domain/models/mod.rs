pub mod cell;
pub mod match_state;
pub mod record;
