//! The `Mode` enum and the 256-entry opcode dispatch tables.
//!
//! The tables below are the standard NMOS 6502 opcode matrix, including the
//! documented illegal-opcode set. Every opcode not named by the MOS
//! datasheet still gets a addressing mode real hardware gives it (so `step`
//! advances PC by the right operand width) and is dispatched to the shared
//! `nop` handler, whether it is a stable unofficial NOP or one of the
//! unstable composites (ANC, ALR, ARR, XAA, AXS, AHX, SHX, SHY,
//! TAS, LAS) or JAM/KIL.

use crate::cpu_6502::opcodes_illegal::*;
use crate::cpu_6502::opcodes_jump::*;
use crate::cpu_6502::opcodes_logical::*;
use crate::cpu_6502::opcodes_move::*;
use crate::cpu_6502::Cpu6502;

/// An addressing mode, as named by the datasheet. These are design labels, not
/// mnemonics - the assembler-style "zp,rel" hybrid some references use for
/// unresolved branch operands doesn't exist here, since the CPU always knows
/// which mode an opcode byte maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndirectX,
    IndirectY,
    Relative,
}

type OperationFn = fn(&mut Cpu6502, Mode);

pub const ADDRESSING_MODE_TABLE: [Mode; 256] = [
    Mode::Implied,
    Mode::IndirectX,
    Mode::Implied,
    Mode::IndirectX,
    Mode::ZeroPage,
    Mode::ZeroPage,
    Mode::ZeroPage,
    Mode::ZeroPage,
    Mode::Implied,
    Mode::Immediate,
    Mode::Accumulator,
    Mode::Immediate,
    Mode::Absolute,
    Mode::Absolute,
    Mode::Absolute,
    Mode::Absolute,
    Mode::Relative,
    Mode::IndirectY,
    Mode::Implied,
    Mode::IndirectY,
    Mode::ZeroPageX,
    Mode::ZeroPageX,
    Mode::ZeroPageX,
    Mode::ZeroPageX,
    Mode::Implied,
    Mode::AbsoluteY,
    Mode::Implied,
    Mode::AbsoluteY,
    Mode::AbsoluteX,
    Mode::AbsoluteX,
    Mode::AbsoluteX,
    Mode::AbsoluteX,
    Mode::Absolute,
    Mode::IndirectX,
    Mode::Implied,
    Mode::IndirectX,
    Mode::ZeroPage,
    Mode::ZeroPage,
    Mode::ZeroPage,
    Mode::ZeroPage,
    Mode::Implied,
    Mode::Immediate,
    Mode::Accumulator,
    Mode::Immediate,
    Mode::Absolute,
    Mode::Absolute,
    Mode::Absolute,
    Mode::Absolute,
    Mode::Relative,
    Mode::IndirectY,
    Mode::Implied,
    Mode::IndirectY,
    Mode::ZeroPageX,
    Mode::ZeroPageX,
    Mode::ZeroPageX,
    Mode::ZeroPageX,
    Mode::Implied,
    Mode::AbsoluteY,
    Mode::Implied,
    Mode::AbsoluteY,
    Mode::AbsoluteX,
    Mode::AbsoluteX,
    Mode::AbsoluteX,
    Mode::AbsoluteX,
    Mode::Implied,
    Mode::IndirectX,
    Mode::Implied,
    Mode::IndirectX,
    Mode::ZeroPage,
    Mode::ZeroPage,
    Mode::ZeroPage,
    Mode::ZeroPage,
    Mode::Implied,
    Mode::Immediate,
    Mode::Accumulator,
    Mode::Immediate,
    Mode::Absolute,
    Mode::Absolute,
    Mode::Absolute,
    Mode::Absolute,
    Mode::Relative,
    Mode::IndirectY,
    Mode::Implied,
    Mode::IndirectY,
    Mode::ZeroPageX,
    Mode::ZeroPageX,
    Mode::ZeroPageX,
    Mode::ZeroPageX,
    Mode::Implied,
    Mode::AbsoluteY,
    Mode::Implied,
    Mode::AbsoluteY,
    Mode::AbsoluteX,
    Mode::AbsoluteX,
    Mode::AbsoluteX,
    Mode::AbsoluteX,
    Mode::Implied,
    Mode::IndirectX,
    Mode::Implied,
    Mode::IndirectX,
    Mode::ZeroPage,
    Mode::ZeroPage,
    Mode::ZeroPage,
    Mode::ZeroPage,
    Mode::Implied,
    Mode::Immediate,
    Mode::Accumulator,
    Mode::Immediate,
    Mode::Indirect,
    Mode::Absolute,
    Mode::Absolute,
    Mode::Absolute,
    Mode::Relative,
    Mode::IndirectY,
    Mode::Implied,
    Mode::IndirectY,
    Mode::ZeroPageX,
    Mode::ZeroPageX,
    Mode::ZeroPageX,
    Mode::ZeroPageX,
    Mode::Implied,
    Mode::AbsoluteY,
    Mode::Implied,
    Mode::AbsoluteY,
    Mode::AbsoluteX,
    Mode::AbsoluteX,
    Mode::AbsoluteX,
    Mode::AbsoluteX,
    Mode::Immediate,
    Mode::IndirectX,
    Mode::Immediate,
    Mode::IndirectX,
    Mode::ZeroPage,
    Mode::ZeroPage,
    Mode::ZeroPage,
    Mode::ZeroPage,
    Mode::Implied,
    Mode::Immediate,
    Mode::Implied,
    Mode::Immediate,
    Mode::Absolute,
    Mode::Absolute,
    Mode::Absolute,
    Mode::Absolute,
    Mode::Relative,
    Mode::IndirectY,
    Mode::Implied,
    Mode::IndirectY,
    Mode::ZeroPageX,
    Mode::ZeroPageX,
    Mode::ZeroPageY,
    Mode::ZeroPageY,
    Mode::Implied,
    Mode::AbsoluteY,
    Mode::Implied,
    Mode::AbsoluteY,
    Mode::AbsoluteX,
    Mode::AbsoluteX,
    Mode::AbsoluteY,
    Mode::AbsoluteY,
    Mode::Immediate,
    Mode::IndirectX,
    Mode::Immediate,
    Mode::IndirectX,
    Mode::ZeroPage,
    Mode::ZeroPage,
    Mode::ZeroPage,
    Mode::ZeroPage,
    Mode::Implied,
    Mode::Immediate,
    Mode::Implied,
    Mode::Immediate,
    Mode::Absolute,
    Mode::Absolute,
    Mode::Absolute,
    Mode::Absolute,
    Mode::Relative,
    Mode::IndirectY,
    Mode::Implied,
    Mode::IndirectY,
    Mode::ZeroPageX,
    Mode::ZeroPageX,
    Mode::ZeroPageY,
    Mode::ZeroPageY,
    Mode::Implied,
    Mode::AbsoluteY,
    Mode::Implied,
    Mode::AbsoluteY,
    Mode::AbsoluteX,
    Mode::AbsoluteX,
    Mode::AbsoluteY,
    Mode::AbsoluteY,
    Mode::Immediate,
    Mode::IndirectX,
    Mode::Immediate,
    Mode::IndirectX,
    Mode::ZeroPage,
    Mode::ZeroPage,
    Mode::ZeroPage,
    Mode::ZeroPage,
    Mode::Implied,
    Mode::Immediate,
    Mode::Implied,
    Mode::Immediate,
    Mode::Absolute,
    Mode::Absolute,
    Mode::Absolute,
    Mode::Absolute,
    Mode::Relative,
    Mode::IndirectY,
    Mode::Implied,
    Mode::IndirectY,
    Mode::ZeroPageX,
    Mode::ZeroPageX,
    Mode::ZeroPageX,
    Mode::ZeroPageX,
    Mode::Implied,
    Mode::AbsoluteY,
    Mode::Implied,
    Mode::AbsoluteY,
    Mode::AbsoluteX,
    Mode::AbsoluteX,
    Mode::AbsoluteX,
    Mode::AbsoluteX,
    Mode::Immediate,
    Mode::IndirectX,
    Mode::Immediate,
    Mode::IndirectX,
    Mode::ZeroPage,
    Mode::ZeroPage,
    Mode::ZeroPage,
    Mode::ZeroPage,
    Mode::Implied,
    Mode::Immediate,
    Mode::Implied,
    Mode::Immediate,
    Mode::Absolute,
    Mode::Absolute,
    Mode::Absolute,
    Mode::Absolute,
    Mode::Relative,
    Mode::IndirectY,
    Mode::Implied,
    Mode::IndirectY,
    Mode::ZeroPageX,
    Mode::ZeroPageX,
    Mode::ZeroPageX,
    Mode::ZeroPageX,
    Mode::Implied,
    Mode::AbsoluteY,
    Mode::Implied,
    Mode::AbsoluteY,
    Mode::AbsoluteX,
    Mode::AbsoluteX,
    Mode::AbsoluteX,
    Mode::AbsoluteX,
];

/// Lower-case 6502 mnemonic for each opcode byte, for trace/debug formatting.
pub const MNEMONIC_TABLE: [&str; 256] = [
    "brk", "ora", "kil", "slo", "nop", "ora", "asl", "slo", "php", "ora", "asl", "anc",
    "nop", "ora", "asl", "slo", "bpl", "ora", "kil", "slo", "nop", "ora", "asl", "slo",
    "clc", "ora", "nop", "slo", "nop", "ora", "asl", "slo", "jsr", "and", "kil", "rla",
    "bit", "and", "rol", "rla", "plp", "and", "rol", "anc", "bit", "and", "rol", "rla",
    "bmi", "and", "kil", "rla", "nop", "and", "rol", "rla", "sec", "and", "nop", "rla",
    "nop", "and", "rol", "rla", "rti", "eor", "kil", "sre", "nop", "eor", "lsr", "sre",
    "pha", "eor", "lsr", "alr", "jmp", "eor", "lsr", "sre", "bvc", "eor", "kil", "sre",
    "nop", "eor", "lsr", "sre", "cli", "eor", "nop", "sre", "nop", "eor", "lsr", "sre",
    "rts", "adc", "kil", "rra", "nop", "adc", "ror", "rra", "pla", "adc", "ror", "arr",
    "jmp", "adc", "ror", "rra", "bvs", "adc", "kil", "rra", "nop", "adc", "ror", "rra",
    "sei", "adc", "nop", "rra", "nop", "adc", "ror", "rra", "nop", "sta", "nop", "sax",
    "sty", "sta", "stx", "sax", "dey", "nop", "txa", "xaa", "sty", "sta", "stx", "sax",
    "bcc", "sta", "kil", "ahx", "sty", "sta", "stx", "sax", "tya", "sta", "txs", "tas",
    "shy", "sta", "shx", "ahx", "ldy", "lda", "ldx", "lax", "ldy", "lda", "ldx", "lax",
    "tay", "lda", "tax", "lxa", "ldy", "lda", "ldx", "lax", "bcs", "lda", "kil", "lax",
    "ldy", "lda", "ldx", "lax", "clv", "lda", "tsx", "las", "ldy", "lda", "ldx", "lax",
    "cpy", "cmp", "nop", "dcp", "cpy", "cmp", "dec", "dcp", "iny", "cmp", "dex", "axs",
    "cpy", "cmp", "dec", "dcp", "bne", "cmp", "kil", "dcp", "nop", "cmp", "dec", "dcp",
    "cld", "cmp", "nop", "dcp", "nop", "cmp", "dec", "dcp", "cpx", "sbc", "nop", "isc",
    "cpx", "sbc", "inc", "isc", "inx", "sbc", "nop", "sbc", "cpx", "sbc", "inc", "isc",
    "beq", "sbc", "kil", "isc", "nop", "sbc", "inc", "isc", "sed", "sbc", "nop", "isc",
    "nop", "sbc", "inc", "isc",
];

pub const OPERATION_TABLE: [OperationFn; 256] = [
    brk, ora, nop, slo, nop, ora, asl, slo, php, ora, asl, nop, nop, ora, asl, slo, bpl,
    ora, nop, slo, nop, ora, asl, slo, clc, ora, nop, slo, nop, ora, asl, slo, jsr, and,
    nop, rla, bit, and, rol, rla, plp, and, rol, nop, bit, and, rol, rla, bmi, and, nop,
    rla, nop, and, rol, rla, sec, and, nop, rla, nop, and, rol, rla, rti, eor, nop, sre,
    nop, eor, lsr, sre, pha, eor, lsr, nop, jmp, eor, lsr, sre, bvc, eor, nop, sre, nop,
    eor, lsr, sre, cli, eor, nop, sre, nop, eor, lsr, sre, rts, adc, nop, rra, nop, adc,
    ror, rra, pla, adc, ror, nop, jmp, adc, ror, rra, bvs, adc, nop, rra, nop, adc, ror,
    rra, sei, adc, nop, rra, nop, adc, ror, rra, nop, sta, nop, sax, sty, sta, stx, sax,
    dey, nop, txa, nop, sty, sta, stx, sax, bcc, sta, nop, nop, sty, sta, stx, sax, tya,
    sta, txs, nop, nop, sta, nop, nop, ldy, lda, ldx, lax, ldy, lda, ldx, lax, tay, lda,
    tax, nop, ldy, lda, ldx, lax, bcs, lda, nop, lax, ldy, lda, ldx, lax, clv, lda, tsx,
    nop, ldy, lda, ldx, lax, cpy, cmp, nop, dcp, cpy, cmp, dec, dcp, iny, cmp, dex, nop,
    cpy, cmp, dec, dcp, bne, cmp, nop, dcp, nop, cmp, dec, dcp, cld, cmp, nop, dcp, nop,
    cmp, dec, dcp, cpx, sbc, nop, isc, cpx, sbc, inc, isc, inx, sbc, nop, sbc, cpx, sbc,
    inc, isc, beq, sbc, nop, isc, nop, sbc, inc, isc, sed, sbc, nop, isc, nop, sbc, inc,
    isc,
];
