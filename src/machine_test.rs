use super::*;

#[test]
fn executing_without_a_loaded_rom_is_an_error() {
    let mut machine = Machine::new();
    assert!(machine.execute().is_err());
    assert!(machine.disassemble().is_err());
}

#[test]
fn runs_a_tiny_program_to_completion() {
    let mut machine = Machine::new();
    machine.memory.load_rom(&[0x3E, 0x05, 0x3C, 0x76]).unwrap(); // MVI A,5 / INR A / HLT
    // load_rom_file goes through disk I/O; poke rom_loaded via a direct load
    // so this test stays self-contained.
    machine.cpu.reset();
    machine.step().unwrap(); // MVI A,5
    assert_eq!(machine.cpu.regs.a, 0x05);
    machine.step().unwrap(); // INR A
    assert_eq!(machine.cpu.regs.a, 0x06);
    assert!(!machine.cpu.halted);
    machine.step().unwrap(); // HLT
    assert!(machine.cpu.halted);
}

#[test]
fn an_instruction_that_would_run_past_the_top_of_memory_is_an_error() {
    let mut machine = Machine::new();
    machine.memory.load_rom(&[0x00]).unwrap();
    machine.memory.write_u8(0xFFFF, 0xC3); // JMP, a 3-byte instruction with no room left
    machine.cpu.reset();
    machine.cpu.pc = 0xFFFF;
    assert!(machine.step().is_err());
}

#[test]
fn a_one_byte_instruction_at_the_top_of_memory_does_not_wrap_silently() {
    let mut machine = Machine::new();
    machine.memory.load_rom(&[0x00]).unwrap();
    machine.cpu.reset();
    machine.cpu.pc = 0xFFFF; // NOP here: the default advance would wrap to 0x0000
    assert!(machine.step().is_err());
}

#[test]
fn a_rom_without_halt_terminates_instead_of_looping_on_the_zero_padded_tail() {
    let mut machine = Machine::new();
    machine.memory.load_rom(&[0x00]).unwrap(); // NOP, then all zero (NOP) padding
    machine.cpu.reset();
    machine.rom_loaded = true;
    assert!(machine.execute().is_err());
    assert!(!machine.cpu.halted);
}

#[test]
fn a_jump_to_address_zero_from_the_top_of_memory_is_not_mistaken_for_a_wrap() {
    let mut machine = Machine::new();
    machine.memory.load_rom(&[0x00]).unwrap();
    machine.memory.write_u8(0xFFFD, 0xC3); // JMP $0001
    machine.memory.write_u8(0xFFFE, 0x01);
    machine.memory.write_u8(0xFFFF, 0x00);
    machine.cpu.reset();
    machine.cpu.pc = 0xFFFD;
    machine.step().unwrap();
    assert_eq!(machine.cpu.pc, 0x0001);
}

#[test]
fn load_rom_file_resets_the_cpu_and_runs_to_halt() {
    let mut path = std::env::temp_dir();
    path.push("i8080emu_machine_test.rom");
    std::fs::write(&path, [0x3E, 0x07, 0x76]).unwrap(); // MVI A,7 / HLT

    let mut machine = Machine::new();
    machine.load_rom_file(path.to_str().unwrap()).unwrap();
    machine.execute().unwrap();

    assert_eq!(machine.cpu.regs.a, 0x07);
    assert!(machine.cpu.halted);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn disassemble_renders_every_instruction_on_its_own_line() {
    let mut machine = Machine::new();
    machine.memory.load_rom(&[0x00, 0x76]).unwrap(); // NOP, HLT
    machine.cpu.reset();
    let decoder = crate::cpu::Decoder::new();
    let text = decoder.disassemble(&machine.memory);
    let mut lines = text.lines();
    assert!(lines.next().unwrap().ends_with("NOP"));
    assert!(lines.next().unwrap().ends_with("HLT"));
}
