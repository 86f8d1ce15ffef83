pub mod cbrt;
pub mod complex;
pub mod cubic;
pub mod is_zero;
pub mod poly;
pub mod quadratic;
pub mod roots;
