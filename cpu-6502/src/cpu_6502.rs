use crate::constants::{memory_range, Vector};
use crate::error::Cpu6502Error;
use crate::flags::Status;
use crate::opcodes::{self, Mode};

pub mod opcodes_illegal;
pub mod opcodes_jump;
pub mod opcodes_logical;
pub mod opcodes_move;

#[cfg(test)]
mod test_helpers;

/// Where a read-modify-write opcode's operand lives: the accumulator has no
/// address, so ASL/ROL/LSR/ROR (and their illegal composites) need a
/// representation that covers both forms without a dummy memory address.
#[derive(Debug, Clone, Copy)]
enum Target {
    Accumulator,
    Memory(u16),
}

/// This struct implements the Ricoh 2A03's CPU core: a MOS 6502 with
/// decimal mode wired off.
///
/// http://www.6502.org/
/// https://en.wikipedia.org/wiki/MOS_Technology_6502
/// http://wiki.nesdev.com/w/index.php/CPU
pub struct Cpu6502<'mem> {
    memory: &'mem mut [u8; 0x10000],

    /// "A" register - the accumulator. Typical results of operations are
    /// stored here.
    a: u8,
    /// "X" register. Used for several addressing modes, loop counters, and
    /// has limited load/store modes of its own.
    x: u8,
    /// "Y" register.
    y: u8,
    /// "PC" - the program counter.
    pc: u16,
    /// "SP" - the stack pointer. Indexes the page-$0100 stack, which grows
    /// down, so it's initialized at the top.
    sp: u8,
    /// "P" - the packed status register.
    flags: Status,
}

impl<'mem> Cpu6502<'mem> {
    /// Builds a CPU over a caller-owned 64 KiB memory image. Registers and
    /// flags start zeroed; call `reset()` to bring the CPU to a defined
    /// entry point before running it.
    pub fn new(memory: &'mem mut [u8; 0x10000]) -> Self {
        Cpu6502 {
            memory,
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: 0,
            flags: Status::empty(),
        }
    }

    /// As `new`, but over a slice whose length isn't known to be exactly
    /// 65536 bytes at compile time (e.g. a `Vec<u8>` a loader assembled).
    pub fn from_slice(memory: &'mem mut [u8]) -> Result<Self, Cpu6502Error> {
        let actual = memory.len();
        let array: &mut [u8; 0x10000] = memory
            .try_into()
            .map_err(|_| Cpu6502Error::InvalidMemorySize { actual })?;
        Ok(Self::new(array))
    }

    /// Brings the CPU to the state real hardware powers up in after the
    /// reset line is pulsed: SP=$FD, I and U set and every other flag
    /// clear, PC loaded from the reset vector.
    pub fn reset(&mut self) {
        self.sp = 0xFD;
        self.flags = Status::RESET;
        self.pc = self.read_u16(Vector::Reset as u16);
    }

    /// Executes exactly one instruction: reads the opcode at PC, advances
    /// PC past it, and dispatches. The handler is responsible for any
    /// further PC advance its own operand requires.
    pub fn step(&mut self) {
        let opcode = self.next_u8();
        let mode = opcodes::ADDRESSING_MODE_TABLE[opcode as usize];
        let operation = opcodes::OPERATION_TABLE[opcode as usize];
        operation(self, mode);
    }

    /// Seeds every register and writable flag with an arbitrary value, for
    /// differential testing against a reference implementation. `U` always
    /// comes back set; `BREAK` never becomes live state.
    pub fn randomize(&mut self) {
        self.a = rand::random();
        self.x = rand::random();
        self.y = rand::random();
        self.sp = rand::random();
        self.pc = rand::random();
        let random_byte: u8 = rand::random();
        self.flags = (Status::from_bits_truncate(random_byte) - Status::BREAK) | Status::UNUSED;
    }

    pub fn a(&self) -> u8 {
        self.a
    }

    pub fn x(&self) -> u8 {
        self.x
    }

    pub fn y(&self) -> u8 {
        self.y
    }

    pub fn sp(&self) -> u8 {
        self.sp
    }

    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// The derived status byte: C Z I D B U V N from bit 0 to bit 7, with
    /// B read back as 0 and U read back as 1.
    pub fn status(&self) -> u8 {
        self.flags.to_byte()
    }

    /// A trace line in a format a differential-testing harness can line up byte-for-byte: PC, the
    /// opcode byte about to execute (with its mnemonic for human readers), A/X/Y, the derived
    /// status byte, and SP.
    pub fn trace(&self) -> String {
        let opcode = self.read_u8(self.pc);
        format!(
            "{:04X}  {:02X} {} A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X}",
            self.pc,
            opcode,
            opcodes::MNEMONIC_TABLE[opcode as usize],
            self.a,
            self.x,
            self.y,
            self.flags.to_byte(),
            self.sp
        )
    }

    /// Reads the byte at PC without advancing it.
    fn peek_u8(&self) -> u8 {
        self.read_u8(self.pc)
    }

    /// Reads the byte at PC, then advances PC past it.
    fn next_u8(&mut self) -> u8 {
        let value = self.peek_u8();
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Reads the little-endian word at PC, then advances PC past it. This
    /// is a pair of ordinary byte reads; it never exhibits the indirect-JMP
    /// page-wrap bug, which lives only in the JMP-indirect resolver.
    fn next_u16(&mut self) -> u16 {
        let lo = self.next_u8();
        let hi = self.next_u8();
        u16::from_le_bytes([lo, hi])
    }

    /// A byte read, masked into the $2000-$3FFF/$4000-$401F PPU/APU/IO
    /// stub windows: those always read as 0, everything else reads
    /// the backing memory directly.
    fn read_u8(&self, address: u16) -> u8 {
        if memory_range::PPU_REGISTERS.contains(address) || memory_range::APU_AND_IO.contains(address) {
            0
        } else {
            self.memory[address as usize]
        }
    }

    /// A byte write, discarded in the same stub windows `read_u8` zeroes.
    fn write_u8(&mut self, address: u16, value: u8) {
        if memory_range::PPU_REGISTERS.contains(address) || memory_range::APU_AND_IO.contains(address) {
            return;
        }
        self.memory[address as usize] = value;
    }

    /// An ordinary little-endian word read: two byte reads at `address` and
    /// `address + 1`, wrapping mod 65536. Used for the reset/IRQ/BRK
    /// vectors, never for JMP indirect.
    fn read_u16(&self, address: u16) -> u16 {
        let lo = self.read_u8(address);
        let hi = self.read_u8(address.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    /// Resolves an addressing mode to an effective address, advancing PC
    /// past whatever operand bytes the mode consumes. Not valid for
    /// `Immediate`, `Accumulator`, `Implied`, or the JMP-only `Indirect`
    /// mode (JMP implements its page-wrap bug itself, in
    /// `opcodes_jump::jmp`).
    fn resolve_address(&mut self, mode: Mode) -> u16 {
        match mode {
            Mode::ZeroPage => self.next_u8() as u16,
            // 6502 bug: zero-page indexing never leaves the zero page. The
            // wrapping add keeps the sum inside u8 space before widening.
            Mode::ZeroPageX => self.next_u8().wrapping_add(self.x) as u16,
            Mode::ZeroPageY => self.next_u8().wrapping_add(self.y) as u16,
            Mode::Absolute => self.next_u16(),
            Mode::AbsoluteX => self.next_u16().wrapping_add(self.x as u16),
            Mode::AbsoluteY => self.next_u16().wrapping_add(self.y as u16),
            // (zp,X): the pointer itself wraps within the zero page, and so
            // does the high-byte fetch one past it.
            Mode::IndirectX => {
                let ptr = self.next_u8().wrapping_add(self.x);
                let lo = self.read_u8(ptr as u16);
                let hi = self.read_u8(ptr.wrapping_add(1) as u16);
                u16::from_le_bytes([lo, hi])
            }
            // (zp),Y: the base address wraps within the zero page when
            // fetched, but adding Y to it is a full 16-bit wrap.
            Mode::IndirectY => {
                let ptr = self.next_u8();
                let lo = self.read_u8(ptr as u16);
                let hi = self.read_u8(ptr.wrapping_add(1) as u16);
                let base = u16::from_le_bytes([lo, hi]);
                base.wrapping_add(self.y as u16)
            }
            Mode::Relative => {
                let offset = self.next_u8() as i8;
                self.pc.wrapping_add(offset as i16 as u16)
            }
            Mode::Immediate | Mode::Accumulator | Mode::Implied | Mode::Indirect => {
                unreachable!("{mode:?} has no generic effective address")
            }
        }
    }

    /// Reads an operand by value: the next byte for `Immediate`, the
    /// accumulator for `Accumulator`, otherwise a memory read through
    /// `resolve_address`.
    fn fetch_operand(&mut self, mode: Mode) -> u8 {
        match mode {
            Mode::Immediate => self.next_u8(),
            Mode::Accumulator => self.a,
            _ => {
                let address = self.resolve_address(mode);
                self.read_u8(address)
            }
        }
    }

    /// Resolves a read-modify-write opcode's target: the accumulator, or a
    /// memory address.
    fn resolve_target(&mut self, mode: Mode) -> Target {
        match mode {
            Mode::Accumulator => Target::Accumulator,
            _ => Target::Memory(self.resolve_address(mode)),
        }
    }

    fn read_target(&self, target: Target) -> u8 {
        match target {
            Target::Accumulator => self.a,
            Target::Memory(address) => self.read_u8(address),
        }
    }

    fn write_target(&mut self, target: Target, value: u8) {
        match target {
            Target::Accumulator => self.a = value,
            Target::Memory(address) => self.write_u8(address, value),
        }
    }

    /// Pushes a byte to the stack. The stack page is fixed at $0100; SP
    /// wraps mod 256 with no overflow detection, matching hardware.
    fn push_u8(&mut self, value: u8) {
        let address = memory_range::STACK_PAGE + self.sp as u16;
        self.memory[address as usize] = value;
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pulls a byte from the stack. SP is incremented before the read, the
    /// mirror image of `push_u8`'s post-decrement.
    fn pull_u8(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        let address = memory_range::STACK_PAGE + self.sp as u16;
        self.memory[address as usize]
    }

    /// Pushes a 16-bit value high-byte-first, matching JSR/BRK's documented
    /// push order.
    fn push_u16(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.push_u8(hi);
        self.push_u8(lo);
    }

    fn pull_u16(&mut self) -> u16 {
        let lo = self.pull_u8();
        let hi = self.pull_u8();
        u16::from_le_bytes([lo, hi])
    }

    /// Z/N from a result byte; shared by every handler that touches those
    /// two flags.
    fn update_nz(&mut self, value: u8) {
        self.flags.set(Status::ZERO, value == 0);
        self.flags.set(Status::NEGATIVE, value & 0x80 != 0);
    }

    /// ADC's nine-bit add, shared with SBC (which calls it with the
    /// operand's bits inverted) and RRA (which feeds it ROR's result).
    fn adc_with(&mut self, operand: u8) {
        let carry_in = self.flags.contains(Status::CARRY) as u16;
        let sum = self.a as u16 + operand as u16 + carry_in;
        let result = sum as u8;
        let overflow = (!(self.a ^ operand) & (self.a ^ result) & 0x80) != 0;
        self.flags.set(Status::CARRY, sum > 0xFF);
        self.flags.set(Status::OVERFLOW, overflow);
        self.a = result;
        self.update_nz(self.a);
    }

    /// CMP/CPX/CPY's shared compare: C = reg >= operand, NZ from the
    /// wrapping difference.
    fn compare(&mut self, register: u8, operand: u8) {
        self.flags.set(Status::CARRY, register >= operand);
        self.update_nz(register.wrapping_sub(operand));
    }

    /// ASL's kernel. Returns the new value so composites (SLO) can feed it
    /// into a second operation without duplicating the shift.
    fn shift_left(&mut self, value: u8) -> u8 {
        self.flags.set(Status::CARRY, value & 0x80 != 0);
        let result = value << 1;
        self.update_nz(result);
        result
    }

    /// ROL's kernel; the incoming bit is the previous carry.
    fn rotate_left(&mut self, value: u8) -> u8 {
        let carry_in = self.flags.contains(Status::CARRY) as u8;
        self.flags.set(Status::CARRY, value & 0x80 != 0);
        let result = (value << 1) | carry_in;
        self.update_nz(result);
        result
    }

    /// LSR's kernel; the incoming bit is always 0.
    fn shift_right(&mut self, value: u8) -> u8 {
        self.flags.set(Status::CARRY, value & 0x01 != 0);
        let result = value >> 1;
        self.update_nz(result);
        result
    }

    /// ROR's kernel; the incoming bit is the previous carry, shifted to bit 7.
    fn rotate_right(&mut self, value: u8) -> u8 {
        let carry_in = self.flags.contains(Status::CARRY) as u8;
        self.flags.set(Status::CARRY, value & 0x01 != 0);
        let result = (value >> 1) | (carry_in << 7);
        self.update_nz(result);
        result
    }
}
