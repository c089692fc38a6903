/// Application layer - the check use case and what it exchanges with callers
///
/// The use case drives the domain services and reaches infrastructure only
/// through the outbound ports. Factories pick report adapters for `main`.
pub mod dto;
pub mod factories;
pub mod use_cases;
