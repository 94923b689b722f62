//! Builds a 64 KiB memory image with a program dropped at a chosen address
//! and the reset vector pointed at it, so tests can drive the CPU straight
//! from raw opcode bytes without an assembler.

pub fn cpu_with_program(reset_vector: u16, program: &[u8]) -> [u8; 0x10000] {
    let mut memory = [0u8; 0x10000];
    let start = reset_vector as usize;
    memory[start..start + program.len()].copy_from_slice(program);
    let [lo, hi] = reset_vector.to_le_bytes();
    memory[0xFFFC] = lo;
    memory[0xFFFD] = hi;
    memory
}
