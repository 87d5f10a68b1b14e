use std::io;

quick_error! {
    /// Errors produced by loading, disassembling and running an 8080 ROM image.
    #[derive(Debug)]
    pub enum Error {
        /// The ROM file could not be opened or read.
        RomLoad(err: String) {
            display("failed to load ROM: {}", err)
        }
        /// An operation that requires a loaded ROM was invoked before `load()`.
        Rom(msg: String) {
            display("{}", msg)
        }
        /// A `Memory::read` call extended past address 0xFFFF.
        OutOfMemory {
            display("read extends past the end of the 64 KiB address space")
        }
        /// A single instruction could not be carried out; the opcode and a
        /// description of the problem are carried along for logging.
        EmulatorRuntime(opcode: u8, msg: String) {
            display("error processing instruction {:02X}: {}", opcode, msg)
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::RomLoad(err.to_string())
    }
}

pub type Result<T> = ::std::result::Result<T, Error>;
