use bitflags::bitflags;

bitflags! {
    /// The 6502 status register, packed the way real hardware keeps it.
    ///
    /// http://wiki.nesdev.com/w/index.php/Status_flags
    ///
    ///   7  bit  0
    /// ---- ----
    /// NVUB DIZC
    /// |||| ||||
    /// |||| |||+- Carry
    /// |||| ||+-- Zero
    /// |||| |+--- Interrupt Disable
    /// |||| +---- Decimal
    /// |||+------ Break (only meaningful in a byte that was pushed to the stack)
    /// ||+------- Unused, always reads back as 1
    /// |+-------- Overflow
    /// +--------- Negative
    pub struct Status: u8 {
        const CARRY     = 0b0000_0001;
        const ZERO      = 0b0000_0010;
        const INTERRUPT = 0b0000_0100;
        const DECIMAL   = 0b0000_1000;
        const BREAK     = 0b0001_0000;
        const UNUSED    = 0b0010_0000;
        const OVERFLOW  = 0b0100_0000;
        const NEGATIVE  = 0b1000_0000;
    }
}

impl Status {
    /// The flag state `reset()` puts the CPU in: I set, U set, everything else clear.
    pub const RESET: Status = Status::from_bits_truncate(Status::INTERRUPT.bits | Status::UNUSED.bits);

    /// The live status byte. `BREAK` never lives in `self` (it is only ever OR'd
    /// into a byte at the moment it is pushed), so this always reads B back as 0
    /// and U back as 1.
    pub fn to_byte(self) -> u8 {
        (self | Status::UNUSED).bits()
    }

    /// The byte PHP/BRK push to the stack: same as `to_byte`, but with B set,
    /// matching real hardware's "B is a fact about the push, not the CPU" behavior.
    pub fn to_pushed_byte(self) -> u8 {
        (self | Status::UNUSED | Status::BREAK).bits()
    }

    /// Restores flags from a byte pulled by PLP/RTI. B is discarded and U is
    /// forced back to 1, regardless of what was actually pushed.
    pub fn from_pulled_byte(byte: u8) -> Status {
        (Status::from_bits_truncate(byte) - Status::BREAK) | Status::UNUSED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unused_always_reads_as_one() {
        let status = Status::empty();
        assert_eq!(status.to_byte() & Status::UNUSED.bits(), Status::UNUSED.bits());
    }

    #[test]
    fn pushed_byte_sets_break() {
        let status = Status::CARRY | Status::ZERO;
        let pushed = status.to_pushed_byte();
        assert_eq!(pushed & Status::BREAK.bits(), Status::BREAK.bits());
    }

    #[test]
    fn pulled_byte_discards_break_and_forces_unused() {
        let pulled = Status::from_pulled_byte(0b0011_0001);
        assert!(pulled.contains(Status::CARRY));
        assert!(!pulled.contains(Status::BREAK));
        assert!(pulled.contains(Status::UNUSED));
    }

    #[test]
    fn push_then_pull_round_trips_every_flag_but_break() {
        let status = Status::CARRY | Status::DECIMAL | Status::OVERFLOW | Status::NEGATIVE;
        let round_tripped = Status::from_pulled_byte(status.to_pushed_byte());
        assert_eq!(round_tripped.to_byte(), (status | Status::UNUSED).to_byte());
    }
}
