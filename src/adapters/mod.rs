/// Adapters layer - concrete implementations of the outbound ports
///
/// Process execution, the file system, the system clock and the terminal.
pub mod outbound;
