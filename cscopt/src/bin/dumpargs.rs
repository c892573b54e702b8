// Prints the parsed form of its own command line, one field per line.

use std::io::{self, Write};

use cscopt::CompilerArguments;

fn dump<W: Write>(out: &mut W, args: &CompilerArguments) -> io::Result<()> {
    let lists: [(&str, &[String]); 5] = [
        ("file", args.files()),
        ("reference", args.references()),
        ("resource", args.resources()),
        ("define", args.defines()),
        ("nowarn", args.warning_filters()),
    ];
    for (label, values) in lists {
        for value in values {
            writeln!(out, "{}: '{}'", label, value)?;
        }
    }

    let optional = [
        ("output", args.output()),
        ("pdb", args.pdb_output()),
        ("win32icon", args.win32_icon()),
        ("win32res", args.win32_resource()),
        ("main", args.main()),
        ("platform", args.platform()),
    ];
    for (label, value) in optional {
        if let Some(v) = value {
            writeln!(out, "{}: '{}'", label, v)?;
        }
    }

    writeln!(out, "target: '{}'", args.target())?;
    writeln!(out, "alignment: {}", args.alignment())?;
    writeln!(out, "warn: {}", args.warning_level())?;
    writeln!(out, "debug: {}", args.debug_level())?;
    writeln!(out, "optimize: {}", args.optimize())?;
    writeln!(out, "checked: {}", args.checked())?;
    writeln!(out, "nostdlib: {}", args.no_std_lib())?;
    writeln!(out, "noconfig: {}", args.no_config())?;

    for err in args.errors() {
        writeln!(out, "error: '{}'", err)?;
    }
    Ok(())
}

fn main() {
    let args = cscopt::parse(std::env::args_os().skip(1));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = dump(&mut out, &args) {
        eprintln!("dumpargs: {}", e);
        std::process::exit(1);
    }

    if args.has_errors() {
        std::process::exit(2);
    }
}
