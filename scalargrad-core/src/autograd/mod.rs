pub mod grad_check;
pub(crate) mod graph;

pub use grad_check::check_grad;
