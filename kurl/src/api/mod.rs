mod container;
mod root;

pub use container::ApiContainer;
pub use root::Api;
