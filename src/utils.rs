pub mod common_prefix_len;
pub mod side;
