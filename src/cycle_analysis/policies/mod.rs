mod namespace_policy;

pub use namespace_policy::NamespacePolicy;
