mod fixed_point;
pub mod formula;

pub use fixed_point::{inv_exp2, log2, mul_div, ONE};
pub use formula::calculate_sale_amount;
