use cscopt::CompilerArguments;
use tracing::debug;

use later::error::Result;
use later::profile::{self, Profile};

pub const USAGE: &str = r#"Usage: later [OPTION]... FILE...
Compile source files into an assembly.

Output files:
  /out:FILE              Output file name (also /output:).
  /target:exe            Build a console executable.
  /target:winexe         Build a windowed executable.
  /target:library        Build a library (default).
  /pdb:FILE              Debug symbol file name.
  /platform:NAME         Target platform (x86, x64, anycpu).

Input files:
  /reference:FILE        Reference metadata from FILE (short: /r:).
  /resource:FILE         Embed FILE as a resource (short: /res:).
  /win32icon:FILE        Use FILE as the Win32 icon.
  /win32res:FILE         Use FILE as the Win32 resource file.

Code generation:
  /debug[+|-]            Emit full debug information, or none.
  /debug:{full|pdbonly}  Choose the kind of debug information.
  /optimize[+|-]         Enable optimizations.
  /filealign:N           Section alignment in bytes (also /align:).

Errors and warnings:
  /warn:N                Warning level (0-4).
  /nowarn:LIST           Suppress the listed warnings (, or ; separated).

Language:
  /checked[+|-]          Overflow-check integer arithmetic.
  /define:SYMBOLS        Define conditional compilation symbols (short: /d:).

Miscellaneous:
  /main:TYPE             Type that contains the entry point.
  /nostdlib[+|-]         Do not reference the standard library.
  /noconfig              Do not read the configuration profile.
  /help, /?              This help.

Values containing spaces may be quoted: /out:"My App.exe"

Configuration: switches from profile $LATER_PROFILE (default "default") in
~/.laterrc or /etc/later.conf are applied before the command line.
Environment variables: LATER_PROFILE, LATER_LOG.
"#;

/// `/?` or `/help` anywhere on the command line.
pub fn wants_help(argv: &[String]) -> bool {
    argv.iter()
        .any(|arg| arg == "/?" || arg.eq_ignore_ascii_case("/help"))
}

/// Profile switches first, then the command line, so the command line wins.
fn with_profile(argv: Vec<String>, profile: Option<&Profile>) -> CompilerArguments {
    match profile {
        Some(profile) => {
            let mut tokens = profile.to_tokens();
            debug!(profile = %profile.name, switches = tokens.len(), "applying profile");
            tokens.extend(argv);
            cscopt::parse(tokens)
        }
        None => cscopt::parse(argv),
    }
}

pub fn parse_args(argv: Vec<String>) -> Result<CompilerArguments> {
    let cli = cscopt::parse(&argv);
    if cli.no_config() {
        return Ok(cli);
    }

    let profile_name = std::env::var("LATER_PROFILE")
        .ok()
        .filter(|name| !name.is_empty());
    let profile = profile::load_profile(&profile::default_config_paths(), profile_name.as_deref())?;

    Ok(with_profile(argv, profile.as_ref()))
}
