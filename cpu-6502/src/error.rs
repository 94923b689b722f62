use thiserror::Error;

/// The one fallible boundary this crate has: constructing a CPU over a
/// caller-supplied buffer that turns out not to be exactly 64 KiB.
#[derive(Debug, Error)]
pub enum Cpu6502Error {
    #[error("memory image must be exactly 65536 bytes, got {actual}")]
    InvalidMemorySize { actual: usize },
}
