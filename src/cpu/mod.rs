// these modules are re-exported as a single module

pub use self::register::*;
mod register;

pub use self::flags::*;
mod flags;

pub use self::op::*;
mod op;

pub use self::arith::*;
mod arith;

pub use self::decoder::*;
mod decoder;

pub use self::interpreter::*;
mod interpreter;

pub use self::io::*;
mod io;
