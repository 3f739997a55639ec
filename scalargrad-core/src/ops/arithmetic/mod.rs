pub mod add;
pub mod div;
pub mod mul;
pub mod neg;
pub mod pow;
pub mod sub;

pub use add::add;
pub use div::div;
pub use mul::mul;
pub use neg::neg;
pub use pow::pow;
pub use sub::sub;
