pub mod init;
pub mod layer;
pub mod mlp;
pub mod module;
pub mod neuron;
pub mod parameter;

pub use layer::Layer;
pub use mlp::Mlp;
pub use module::Module;
pub use neuron::Neuron;
pub use parameter::Parameter;
