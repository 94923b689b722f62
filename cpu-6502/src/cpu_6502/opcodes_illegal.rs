//! Undocumented opcodes that combine two documented effects on the same
//! memory operand. Each reuses the primitive the equivalent legal opcode
//! uses, applying the memory effect first and the register effect second,
//! matching how the extra decoder lines actually fire on real silicon.

use super::Cpu6502;
use crate::opcodes::Mode;

/// ASL {adr} then ORA {adr}.
pub fn slo(cpu: &mut Cpu6502, mode: Mode) {
    let target = cpu.resolve_target(mode);
    let value = cpu.read_target(target);
    let shifted = cpu.shift_left(value);
    cpu.write_target(target, shifted);
    cpu.a |= shifted;
    cpu.update_nz(cpu.a);
}

/// ROL {adr} then AND {adr}.
pub fn rla(cpu: &mut Cpu6502, mode: Mode) {
    let target = cpu.resolve_target(mode);
    let value = cpu.read_target(target);
    let rotated = cpu.rotate_left(value);
    cpu.write_target(target, rotated);
    cpu.a &= rotated;
    cpu.update_nz(cpu.a);
}

/// LSR {adr} then EOR {adr}.
pub fn sre(cpu: &mut Cpu6502, mode: Mode) {
    let target = cpu.resolve_target(mode);
    let value = cpu.read_target(target);
    let shifted = cpu.shift_right(value);
    cpu.write_target(target, shifted);
    cpu.a ^= shifted;
    cpu.update_nz(cpu.a);
}

/// ROR {adr} then ADC {adr}.
pub fn rra(cpu: &mut Cpu6502, mode: Mode) {
    let target = cpu.resolve_target(mode);
    let value = cpu.read_target(target);
    let rotated = cpu.rotate_right(value);
    cpu.write_target(target, rotated);
    cpu.adc_with(rotated);
}

/// DEC {adr} then CMP {adr}.
pub fn dcp(cpu: &mut Cpu6502, mode: Mode) {
    let address = cpu.resolve_address(mode);
    let result = cpu.read_u8(address).wrapping_sub(1);
    cpu.write_u8(address, result);
    cpu.compare(cpu.a, result);
}

/// INC {adr} then SBC {adr}.
pub fn isc(cpu: &mut Cpu6502, mode: Mode) {
    let address = cpu.resolve_address(mode);
    let result = cpu.read_u8(address).wrapping_add(1);
    cpu.write_u8(address, result);
    cpu.adc_with(!result);
}

/// LDA {adr} then TAX: loads both A and X from the same memory read.
pub fn lax(cpu: &mut Cpu6502, mode: Mode) {
    let value = cpu.fetch_operand(mode);
    cpu.a = value;
    cpu.x = value;
    cpu.update_nz(value);
}

/// Stores A AND X, leaving both registers and every flag untouched.
pub fn sax(cpu: &mut Cpu6502, mode: Mode) {
    let address = cpu.resolve_address(mode);
    cpu.write_u8(address, cpu.a & cpu.x);
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::cpu_with_program;
    use crate::flags::Status;

    #[test]
    fn slo_shifts_memory_then_ors_into_a() {
        // $10 = $C1, A = $02, C = 0; SLO $10 -> mem[$10]=$82, C=1, A=$82.
        let mut memory = cpu_with_program(0xC000, &[0xA9, 0x02, 0x07, 0x10]);
        memory[0x0010] = 0xC1;
        let mut cpu = crate::Cpu6502::new(&mut memory);
        cpu.reset();
        cpu.step(); // LDA #$02
        cpu.step(); // SLO $10
        assert_eq!(memory[0x0010], 0x82);
        assert_eq!(cpu.a(), 0x82);
        assert_eq!(cpu.status() & Status::CARRY.bits(), Status::CARRY.bits());
        assert_eq!(cpu.status() & Status::NEGATIVE.bits(), Status::NEGATIVE.bits());
        assert_eq!(cpu.status() & Status::ZERO.bits(), 0);
    }

    #[test]
    fn lax_loads_a_and_x_together() {
        let mut memory = cpu_with_program(0xC000, &[0xA7, 0x10]);
        memory[0x0010] = 0x42;
        let mut cpu = crate::Cpu6502::new(&mut memory);
        cpu.reset();
        cpu.step();
        assert_eq!(cpu.a(), 0x42);
        assert_eq!(cpu.x(), 0x42);
    }

    #[test]
    fn sax_stores_a_and_x_without_touching_flags() {
        let mut memory = cpu_with_program(0xC000, &[0xA9, 0xFF, 0xA2, 0x0F, 0x87, 0x20]);
        let mut cpu = crate::Cpu6502::new(&mut memory);
        cpu.reset();
        cpu.step(); // LDA #$FF
        cpu.step(); // LDX #$0F
        let status_before = cpu.status();
        cpu.step(); // SAX $20
        assert_eq!(memory[0x0020], 0x0F);
        assert_eq!(cpu.status(), status_before);
    }

    #[test]
    fn dcp_decrements_then_compares() {
        let mut memory = cpu_with_program(0xC000, &[0xA9, 0x05, 0xC7, 0x10]);
        memory[0x0010] = 0x05;
        let mut cpu = crate::Cpu6502::new(&mut memory);
        cpu.reset();
        cpu.step(); // LDA #$05
        cpu.step(); // DCP $10 -> mem becomes $04, compare A($05) to $04
        assert_eq!(memory[0x0010], 0x04);
        assert_eq!(cpu.status() & Status::CARRY.bits(), Status::CARRY.bits());
    }
}
