mod context;

mod opaque;
pub use opaque::OpaqueError;
