use crate::cpu::{decode_opcode, Cpu, Decoder, IoBus};
use crate::errors::{Error, Result};
use crate::memory::Memory;
use crate::tools;

#[cfg(test)]
#[path = "./machine_test.rs"]
mod machine_test;

/// Ties the CPU, the flat address space and the I/O port bus together and
/// drives the fetch-decode-execute loop. This is the thing a front end
/// (the CLI binary, a future debugger) actually holds on to.
#[derive(Clone)]
pub struct Machine {
    pub cpu: Cpu,
    pub memory: Memory,
    pub io: IoBus,
    rom_loaded: bool,
}

impl Default for Machine {
    fn default() -> Self {
        Machine {
            cpu: Cpu::new(),
            memory: Memory::new(),
            io: IoBus::new(),
            rom_loaded: false,
        }
    }
}

impl Machine {
    pub fn new() -> Self {
        Machine::default()
    }

    /// Reads `path` off disk and copies it into memory at address 0,
    /// resetting the CPU so execution starts from a clean reset vector.
    pub fn load_rom_file(&mut self, path: &str) -> Result<()> {
        let rom = tools::read_binary(path)?;
        self.memory.load_rom(&rom)?;
        self.cpu.reset();
        self.rom_loaded = true;
        Ok(())
    }

    pub fn disassemble(&self) -> Result<String> {
        if !self.rom_loaded {
            return Err(Error::Rom("no ROM loaded".to_owned()));
        }
        let decoder = Decoder::new();
        Ok(decoder.disassemble(&self.memory))
    }

    /// Runs the fetch-decode-execute loop until the CPU halts. Unknown and
    /// unimplemented opcodes are logged by the interpreter and treated as
    /// no-ops rather than aborting the run. A program that runs its
    /// program counter past the end of the 64 KiB address space without
    /// ever executing HALT is reported as an error rather than looping
    /// forever on wrapped addresses.
    pub fn execute(&mut self) -> Result<()> {
        if !self.rom_loaded {
            return Err(Error::Rom("no ROM loaded".to_owned()));
        }
        self.cpu.halted = false;
        while !self.cpu.halted {
            self.step()?;
        }
        Ok(())
    }

    /// Fetches, decodes and executes a single instruction at the current
    /// program counter, advancing it past the instruction's operand bytes
    /// before handing control to the interpreter (so CALL/RST push the
    /// address of the *next* instruction, matching real 8080 behavior).
    ///
    /// The *linear* advance `pc + length` is tracked as a 32-bit value
    /// rather than the wrapped 16-bit `Cpu::pc`, so that an instruction
    /// sitting at the very top of the address space is told apart from
    /// one that legitimately branches to address 0: a ROM with no HALT
    /// that runs into its own zero-padding (all NOPs) eventually reaches
    /// `0xFFFF` and would otherwise wrap back to `0x0000` and loop
    /// forever, rather than ending the run the way a linear PC running
    /// off real memory should.
    pub fn step(&mut self) -> Result<()> {
        let pc = self.cpu.pc;
        let opcode = self.memory.read_u8(pc);
        let row = decode_opcode(opcode);

        let linear_next = u32::from(pc) + u32::from(row.length);
        if linear_next > 0x1_0000 {
            return Err(Error::EmulatorRuntime(
                opcode,
                "instruction runs past the end of the 64 KiB address space".to_owned(),
            ));
        }

        let operand_len = row.length as usize - 1;
        let mut operand = [0u8; 2];
        for (i, slot) in operand.iter_mut().enumerate().take(operand_len) {
            *slot = self.memory.read_u8(pc.wrapping_add(1 + i as u16));
        }

        log::trace!("{:04X}: {:02X} {}", pc, opcode, row.mnemonic);
        let default_next = pc.wrapping_add(u16::from(row.length));
        self.cpu.pc = default_next;

        // A single instruction's own fault (e.g. an `M` operand resolving
        // past the end of memory) is logged and the run continues, per the
        // error-kind contract: it does not abort the whole fetch-execute
        // loop the way a genuine PC overrun below does.
        if let Err(err) =
            self.cpu.execute(opcode, &row, &operand[..operand_len], &mut self.memory, &mut self.io)
        {
            log::warn!("{:04X}: {:02X} {} - {}", pc, opcode, row.mnemonic, err);
        }

        // `linear_next == 0x1_0000` means this instruction's default advance
        // sits exactly past the top of memory. If nothing redirected `pc`
        // away from that wrapped default (no branch taken, or HALT), the
        // program counter has genuinely run off the end of the 64 KiB
        // address space rather than been steered to address 0 on purpose.
        if linear_next == 0x1_0000 && self.cpu.pc == default_next && !self.cpu.halted {
            return Err(Error::EmulatorRuntime(
                opcode,
                "program counter ran off the end of the 64 KiB address space".to_owned(),
            ));
        }
        Ok(())
    }
}
