/// Use cases module containing application business logic orchestration
mod check_circular_dependencies;

pub use check_circular_dependencies::CheckCircularDependenciesUseCase;
