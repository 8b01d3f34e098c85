pub mod policy;

pub use policy::BackoffPolicy;
