/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound (driven) ports exist: the check is driven directly by the
/// CLI through `CheckCircularDependenciesUseCase`.
pub mod outbound;
