use std::io::{self, Write};

use cscopt::{CompilerArguments, IntoToken};
use tracing::info;

use later::compilation::Compilation;
use later::diagnostics::{self, Diagnostic};

use crate::arguments;

/// Report parse and build diagnostics on `err`, the compilation on `out`.
/// Returns whether no errors were found.
fn compile<W: Write, E: Write>(
    args: &CompilerArguments,
    out: &mut W,
    err: &mut E,
) -> io::Result<bool> {
    let mut found: Vec<Diagnostic> = args.errors().iter().map(Diagnostic::from).collect();

    let (compilation, build_diagnostics) = Compilation::from_arguments(args);
    found.extend(build_diagnostics);

    diagnostics::write_diagnostics(err, &found)?;
    compilation.write_summary(out)?;

    let ok = !diagnostics::has_errors(&found);
    info!(assembly = %compilation.assembly_name, ok, "done");
    Ok(ok)
}

// ===========================================================================
// Main entry point
// ===========================================================================

pub fn run() -> i32 {
    let argv: Vec<String> = std::env::args_os()
        .skip(1)
        .map(IntoToken::into_token)
        .collect();

    if arguments::wants_help(&argv) {
        print!("{}", arguments::USAGE);
        return 0;
    }

    let args = match arguments::parse_args(argv) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    match compile(&args, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(e) => {
            eprintln!("later: {}", e);
            1
        }
    }
}
