use super::Cpu6502;
use crate::opcodes::Mode;

/// Logical "or" against A.
/// Function: A:=A or {adr}
/// Flags: N Z
pub fn ora(cpu: &mut Cpu6502, mode: Mode) {
    let value = cpu.fetch_operand(mode);
    cpu.a |= value;
    cpu.update_nz(cpu.a);
}

/// Logical "and" against A.
/// Function: A:=A&{adr}
/// Flags: N Z
pub fn and(cpu: &mut Cpu6502, mode: Mode) {
    let value = cpu.fetch_operand(mode);
    cpu.a &= value;
    cpu.update_nz(cpu.a);
}

/// Logical exclusive-or against A.
/// Function: A:=A exor {adr}
/// Flags: N Z
pub fn eor(cpu: &mut Cpu6502, mode: Mode) {
    let value = cpu.fetch_operand(mode);
    cpu.a ^= value;
    cpu.update_nz(cpu.a);
}

/// Add with carry.
/// Function: A:=A+{adr}+C
/// Flags: N V Z C
pub fn adc(cpu: &mut Cpu6502, mode: Mode) {
    let value = cpu.fetch_operand(mode);
    cpu.adc_with(value);
}

/// Subtract with carry. Computed as ADC against the operand's bits
/// inverted, with the incoming carry doing duty as a borrow-complement -
/// the same trick real 6502 silicon uses, so SEC before a subtract chain is
/// load-bearing here exactly as it is on hardware.
/// Function: A:=A-{adr}-(1-C)
/// Flags: N V Z C
pub fn sbc(cpu: &mut Cpu6502, mode: Mode) {
    let value = cpu.fetch_operand(mode);
    cpu.adc_with(!value);
}

/// Compare A with the operand.
/// Function: A-{adr}
/// Flags: N Z C
pub fn cmp(cpu: &mut Cpu6502, mode: Mode) {
    let value = cpu.fetch_operand(mode);
    cpu.compare(cpu.a, value);
}

/// Compare X with the operand.
/// Function: X-{adr}
/// Flags: N Z C
pub fn cpx(cpu: &mut Cpu6502, mode: Mode) {
    let value = cpu.fetch_operand(mode);
    cpu.compare(cpu.x, value);
}

/// Compare Y with the operand.
/// Function: Y-{adr}
/// Flags: N Z C
pub fn cpy(cpu: &mut Cpu6502, mode: Mode) {
    let value = cpu.fetch_operand(mode);
    cpu.compare(cpu.y, value);
}

/// Decrement memory.
/// Function: {adr}:={adr}-1
/// Flags: N Z
pub fn dec(cpu: &mut Cpu6502, mode: Mode) {
    let address = cpu.resolve_address(mode);
    let result = cpu.read_u8(address).wrapping_sub(1);
    cpu.write_u8(address, result);
    cpu.update_nz(result);
}

/// Decrement X.
/// Function: X:=X-1
/// Flags: N Z
pub fn dex(cpu: &mut Cpu6502, _mode: Mode) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.update_nz(cpu.x);
}

/// Decrement Y.
/// Function: Y:=Y-1
/// Flags: N Z
pub fn dey(cpu: &mut Cpu6502, _mode: Mode) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.update_nz(cpu.y);
}

/// Increment memory.
/// Function: {adr}:={adr}+1
/// Flags: N Z
pub fn inc(cpu: &mut Cpu6502, mode: Mode) {
    let address = cpu.resolve_address(mode);
    let result = cpu.read_u8(address).wrapping_add(1);
    cpu.write_u8(address, result);
    cpu.update_nz(result);
}

/// Increment X.
/// Function: X:=X+1
/// Flags: N Z
pub fn inx(cpu: &mut Cpu6502, _mode: Mode) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.update_nz(cpu.x);
}

/// Increment Y.
/// Function: Y:=Y+1
/// Flags: N Z
pub fn iny(cpu: &mut Cpu6502, _mode: Mode) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.update_nz(cpu.y);
}

/// Arithmetic shift left, accumulator or memory form.
/// Function: {adr}:={adr}*2
/// Flags: N Z C
pub fn asl(cpu: &mut Cpu6502, mode: Mode) {
    let target = cpu.resolve_target(mode);
    let value = cpu.read_target(target);
    let result = cpu.shift_left(value);
    cpu.write_target(target, result);
}

/// Rotate left, accumulator or memory form.
/// Function: {adr}:={adr}*2+C
/// Flags: N Z C
pub fn rol(cpu: &mut Cpu6502, mode: Mode) {
    let target = cpu.resolve_target(mode);
    let value = cpu.read_target(target);
    let result = cpu.rotate_left(value);
    cpu.write_target(target, result);
}

/// Logical shift right, accumulator or memory form.
/// Function: {adr}:={adr}/2
/// Flags: N Z C
pub fn lsr(cpu: &mut Cpu6502, mode: Mode) {
    let target = cpu.resolve_target(mode);
    let value = cpu.read_target(target);
    let result = cpu.shift_right(value);
    cpu.write_target(target, result);
}

/// Rotate right, accumulator or memory form.
/// Function: {adr}:={adr}/2+C*128
/// Flags: N Z C
pub fn ror(cpu: &mut Cpu6502, mode: Mode) {
    let target = cpu.resolve_target(mode);
    let value = cpu.read_target(target);
    let result = cpu.rotate_right(value);
    cpu.write_target(target, result);
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::cpu_with_program;
    use crate::flags::Status;

    #[test]
    fn adc_overflow_scenario() {
        // A=$50, C=0; ADC #$50 -> A=$A0, C=0, V=1, N=1, Z=0.
        let mut memory = cpu_with_program(0xC000, &[0xA9, 0x50, 0x69, 0x50]);
        let mut cpu = crate::Cpu6502::new(&mut memory);
        cpu.reset();
        cpu.step(); // LDA #$50
        cpu.step(); // ADC #$50
        assert_eq!(cpu.a(), 0xA0);
        assert_eq!(cpu.status() & Status::CARRY.bits(), 0);
        assert_eq!(cpu.status() & Status::OVERFLOW.bits(), Status::OVERFLOW.bits());
        assert_eq!(cpu.status() & Status::NEGATIVE.bits(), Status::NEGATIVE.bits());
        assert_eq!(cpu.status() & Status::ZERO.bits(), 0);
    }

    #[test]
    fn sbc_borrow_scenario() {
        // A=$50, C=1; SBC #$B0 -> A=$A0, C=0, V=1, N=1, Z=0.
        let mut memory = cpu_with_program(0xC000, &[0xA9, 0x50, 0x38, 0xE9, 0xB0]);
        let mut cpu = crate::Cpu6502::new(&mut memory);
        cpu.reset();
        cpu.step(); // LDA
        cpu.step(); // SEC
        cpu.step(); // SBC
        assert_eq!(cpu.a(), 0xA0);
        assert_eq!(cpu.status() & Status::CARRY.bits(), 0);
        assert_eq!(cpu.status() & Status::OVERFLOW.bits(), Status::OVERFLOW.bits());
        assert_eq!(cpu.status() & Status::NEGATIVE.bits(), Status::NEGATIVE.bits());
    }

    #[test]
    fn bit_reads_n_and_v_from_memory_not_a() {
        let mut memory = cpu_with_program(0xC000, &[0xA9, 0x00, 0x24, 0x10]);
        memory[0x0010] = 0b1100_0000;
        let mut cpu = crate::Cpu6502::new(&mut memory);
        cpu.reset();
        cpu.step();
        cpu.step();
        assert_eq!(cpu.status() & Status::NEGATIVE.bits(), Status::NEGATIVE.bits());
        assert_eq!(cpu.status() & Status::OVERFLOW.bits(), Status::OVERFLOW.bits());
        assert_eq!(cpu.status() & Status::ZERO.bits(), Status::ZERO.bits());
        assert_eq!(cpu.a(), 0); // A must be untouched
    }

    #[test]
    fn asl_accumulator_does_not_touch_memory() {
        let mut memory = cpu_with_program(0xC000, &[0xA9, 0x81, 0x0A]);
        let mut cpu = crate::Cpu6502::new(&mut memory);
        cpu.reset();
        cpu.step(); // LDA #$81
        cpu.step(); // ASL A
        assert_eq!(cpu.a(), 0x02);
        assert_eq!(cpu.status() & Status::CARRY.bits(), Status::CARRY.bits());
        assert_eq!(memory[0x0000], 0); // no stray write to address 0
    }

    #[test]
    fn dey_updates_y_not_x() {
        let mut memory = cpu_with_program(0xC000, &[0xA0, 0x01, 0x88]);
        let mut cpu = crate::Cpu6502::new(&mut memory);
        cpu.reset();
        cpu.step();
        cpu.step();
        assert_eq!(cpu.y(), 0x00);
        assert_eq!(cpu.status() & Status::ZERO.bits(), Status::ZERO.bits());
    }
}
