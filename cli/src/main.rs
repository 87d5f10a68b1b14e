use clap::{App, Arg, SubCommand};
use i8080emu::machine::Machine;

fn main() {
    env_logger::init();

    let matches = App::new("i8080-cli")
        .version("0.1")
        .subcommand(
            SubCommand::with_name("disassemble")
                .about("Prints a flat disassembly listing of a ROM image")
                .arg(Arg::with_name("ROM").help("Path to the ROM image").required(true).index(1))
                .arg(
                    Arg::with_name("flat")
                        .long("flat")
                        .help("Kept for interface parity with other front ends; this is the only listing mode"),
                ),
        )
        .subcommand(
            SubCommand::with_name("emulate")
                .about("Loads a ROM image and runs it until the CPU halts")
                .arg(Arg::with_name("ROM").help("Path to the ROM image").required(true).index(1)),
        )
        .get_matches();

    let code = match matches.subcommand() {
        ("disassemble", Some(sub)) => disassemble(sub.value_of("ROM").unwrap()),
        ("emulate", Some(sub)) => emulate(sub.value_of("ROM").unwrap()),
        _ => {
            eprintln!("expected a subcommand: disassemble <ROM> or emulate <ROM>");
            1
        }
    };

    std::process::exit(code);
}

fn disassemble(path: &str) -> i32 {
    let mut machine = Machine::new();
    if let Err(err) = machine.load_rom_file(path) {
        log::error!("{}", err);
        return 1;
    }
    match machine.disassemble() {
        Ok(text) => {
            print!("{}", text);
            0
        }
        Err(err) => {
            log::error!("{}", err);
            1
        }
    }
}

fn emulate(path: &str) -> i32 {
    let mut machine = Machine::new();
    if let Err(err) = machine.load_rom_file(path) {
        log::error!("{}", err);
        return 1;
    }
    match machine.execute() {
        Ok(()) => 0,
        Err(err) => {
            log::error!("{}", err);
            1
        }
    }
}
