use tracing::{debug, trace};

use crate::arguments::{ArgumentsBuilder, CompilerArguments, DEBUG_FULL, DEBUG_NONE};
use crate::quoted::read_possibly_quoted;
use crate::switch::{Suffix, Switch};
use crate::token::{IntoToken, TokenQueue};

const ALIGNMENT_NOT_NUMERIC: &str = "Alignment must be a numeric value";
const WARNING_LEVEL_NOT_NUMERIC: &str = "Warning Level must be a numeric value";

/// Parse a compiler command line (without the program name).
///
/// Never fails: bad numeric values are reported through
/// [`CompilerArguments::errors`] and leave the field at `0`.
pub fn parse<I>(args: I) -> CompilerArguments
where
    I: IntoIterator,
    I::Item: IntoToken,
{
    let mut tokens = TokenQueue::new(args);
    let mut builder = ArgumentsBuilder::new();

    while let Some(current) = tokens.next_token() {
        match Switch::classify(&current) {
            Some((switch, rest)) => {
                trace!(?switch, token = %current, "switch");
                apply_switch(&mut builder, switch, rest, &mut tokens);
            }
            None => {
                trace!(token = %current, "file");
                let file = read_possibly_quoted(&current, &mut tokens);
                builder.files.push(file);
            }
        }
    }

    builder.build()
}

fn apply_switch(
    builder: &mut ArgumentsBuilder,
    switch: Switch,
    rest: &str,
    tokens: &mut TokenQueue,
) {
    match switch {
        Switch::Reference => builder.references.push(read_possibly_quoted(rest, tokens)),
        Switch::Resource => builder.resources.push(read_possibly_quoted(rest, tokens)),
        Switch::Define => builder.defines.push(read_possibly_quoted(rest, tokens)),
        Switch::Output => builder.output = Some(read_possibly_quoted(rest, tokens)),
        Switch::Pdb => builder.pdb_output = Some(read_possibly_quoted(rest, tokens)),
        Switch::FileAlign => {
            let value = read_possibly_quoted(rest, tokens);
            builder.alignment = parse_int(builder, &value, ALIGNMENT_NOT_NUMERIC);
        }
        Switch::WarningLevel => {
            let value = read_possibly_quoted(rest, tokens);
            builder.warning_level = parse_int(builder, &value, WARNING_LEVEL_NOT_NUMERIC);
        }
        Switch::Target => builder.target = read_possibly_quoted(rest, tokens),
        Switch::Win32Icon => builder.win32_icon = Some(read_possibly_quoted(rest, tokens)),
        Switch::Win32Resource => {
            builder.win32_resource = Some(read_possibly_quoted(rest, tokens))
        }
        Switch::Main => builder.main = Some(read_possibly_quoted(rest, tokens)),
        Switch::Platform => builder.platform = Some(read_possibly_quoted(rest, tokens)),
        Switch::Optimize => builder.optimize = Suffix::read(rest, false).toggle(true, false),
        Switch::Checked => builder.checked = Suffix::read(rest, false).toggle(true, false),
        Switch::NoStdLib => builder.no_std_lib = Suffix::read(rest, false).toggle(true, false),
        Switch::NoConfig => builder.no_config = true,
        Switch::NoWarn => {
            let list = read_possibly_quoted(rest, tokens);
            builder.add_warning_filters(&list);
        }
        Switch::Debug => match Suffix::read(rest, true) {
            Suffix::Enable => builder.debug_level = DEBUG_FULL.to_string(),
            Suffix::Disable => builder.debug_level = DEBUG_NONE.to_string(),
            Suffix::Value(value) => {
                builder.debug_level = read_possibly_quoted(value, tokens).to_uppercase();
            }
            Suffix::Other => {}
        },
    }
}

/// Parse a 32-bit integer, recording `message` and yielding 0 on failure.
fn parse_int(builder: &mut ArgumentsBuilder, value: &str, message: &str) -> i32 {
    match value.trim_matches(|c: char| c.is_ascii_whitespace()).parse::<i32>() {
        Ok(n) => n,
        Err(_) => {
            debug!(value, "{}", message);
            builder.add_error(message);
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- files --

    #[test]
    fn can_find_files_on_command_line() {
        let args = parse(["foo.cs", "foo2.cs"]);
        assert_eq!(args.files(), ["foo.cs", "foo2.cs"]);
        assert!(args.references().is_empty());
        assert!(args.errors().is_empty());
    }

    #[test]
    fn quoted_file_spanning_two_tokens() {
        let args = parse(["\"My", "foo.cs\""]);
        assert_eq!(args.files(), ["My foo.cs"]);
    }

    #[test]
    fn quoted_file_with_no_spaces() {
        let args = parse(["\"Myfoo.cs\""]);
        assert_eq!(args.files(), ["Myfoo.cs"]);
    }

    #[test]
    fn missing_token_is_an_empty_file() {
        let args = parse([None::<&str>]);
        assert_eq!(args.files(), [""]);
    }

    #[test]
    fn file_paths_with_colons_are_kept_whole() {
        let args = parse(["C:/src/a.cs", "D:\\b.cs"]);
        assert_eq!(args.files(), ["C:/src/a.cs", "D:\\b.cs"]);
    }

    #[test]
    fn unknown_switch_is_a_file() {
        let args = parse(["/unsafe", "/langversion:7"]);
        assert_eq!(args.files(), ["/unsafe", "/langversion:7"]);
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse(Vec::<String>::new()), CompilerArguments::default());
    }

    // -- list switches --

    #[test]
    fn references_long_and_short() {
        let args = parse(["/reference:C:\\foo.dll", "/r:C:\\foo2.dll"]);
        assert_eq!(args.references(), ["C:\\foo.dll", "C:\\foo2.dll"]);
        assert!(args.files().is_empty());
    }

    #[test]
    fn quoted_reference_spanning_tokens() {
        let args = parse(["/reference:\"C:\\Program", "Files\\foo.dll\""]);
        assert_eq!(args.references(), ["C:\\Program Files\\foo.dll"]);
    }

    #[test]
    fn quoted_reference_with_no_spaces() {
        let args = parse(["/reference:\"C:\\ProgramFiles\\foo.dll\""]);
        assert_eq!(args.references(), ["C:\\ProgramFiles\\foo.dll"]);
    }

    #[test]
    fn resources_keep_order() {
        let args = parse(["/resource:foo.dll", "/res:foo2.dll"]);
        assert_eq!(args.resources(), ["foo.dll", "foo2.dll"]);
    }

    #[test]
    fn unterminated_quoted_resource() {
        let args = parse(["/resource:\"C:\\Program", "Files\\foo.cs"]);
        assert_eq!(args.resources(), ["C:\\Program Files\\foo.cs"]);
        assert!(args.files().is_empty());
    }

    #[test]
    fn defines() {
        let args = parse(["/define:DEBUG", "/d:debug2", "/define:\"DEBUG", "ME\""]);
        assert_eq!(args.defines(), ["DEBUG", "debug2", "DEBUG ME"]);
    }

    #[test]
    fn switch_case_is_ignored() {
        let args = parse(["/REFERENCE:A.dll", "/Define:X", "/OUT:App.exe"]);
        assert_eq!(args.references(), ["A.dll"]);
        assert_eq!(args.defines(), ["X"]);
        assert_eq!(args.output(), Some("App.exe"));
    }

    // -- scalar switches --

    #[test]
    fn output_both_spellings() {
        assert_eq!(parse(["/out:foo.dll"]).output(), Some("foo.dll"));
        assert_eq!(parse(["/output:foo.dll"]).output(), Some("foo.dll"));
        assert_eq!(
            parse(["/output:\"C:\\Program", "Files\\foo.dll\""]).output(),
            Some("C:\\Program Files\\foo.dll")
        );
    }

    #[test]
    fn later_scalars_win() {
        let args = parse(["/out:a.exe", "/target:library", "/out:b.exe", "/target:exe"]);
        assert_eq!(args.output(), Some("b.exe"));
        assert_eq!(args.target(), "exe");
    }

    #[test]
    fn pdb_output() {
        assert_eq!(parse(["/pdb:Foo.pdb"]).pdb_output(), Some("Foo.pdb"));
        assert_eq!(
            parse(["/pdb:\"C:\\Program", "Files\\Foo.pdb\""]).pdb_output(),
            Some("C:\\Program Files\\Foo.pdb")
        );
    }

    #[test]
    fn target() {
        assert_eq!(parse(["/target:exe"]).target(), "exe");
        assert_eq!(parse(["/target:\"e", "xe\""]).target(), "e xe");
        assert_eq!(parse(["/target:\"exe\""]).target(), "exe");
    }

    #[test]
    fn win32_icon_and_resource() {
        let args = parse(["/win32icon:foo.ico", "/win32res:\"C:\\Program", "Files\\foo.rs"]);
        assert_eq!(args.win32_icon(), Some("foo.ico"));
        assert_eq!(args.win32_resource(), Some("C:\\Program Files\\foo.rs"));
    }

    #[test]
    fn main_and_platform() {
        let args = parse(["/main:Foo.Bar.Main", "/platform:anycpu"]);
        assert_eq!(args.main(), Some("Foo.Bar.Main"));
        assert_eq!(args.platform(), Some("anycpu"));
    }

    #[test]
    fn empty_value_is_kept() {
        let args = parse(["/out:", "/r:"]);
        assert_eq!(args.output(), Some(""));
        assert_eq!(args.references(), [""]);
    }

    // -- numbers --

    #[test]
    fn alignment() {
        let args = parse(["/align:512"]);
        assert_eq!(args.alignment(), 512);
        assert!(args.errors().is_empty());

        assert_eq!(parse(["/filealign:4096"]).alignment(), 4096);
    }

    #[test]
    fn non_numeric_alignment_is_an_error() {
        let args = parse(["/align:GREG"]);
        assert_eq!(args.alignment(), 0);
        assert_eq!(args.errors().len(), 1);
        assert_eq!(args.errors()[0].message(), "Alignment must be a numeric value");
    }

    #[test]
    fn bad_alignment_resets_earlier_value() {
        let args = parse(["/align:512", "/align:x"]);
        assert_eq!(args.alignment(), 0);
        assert_eq!(args.errors().len(), 1);
    }

    #[test]
    fn warning_level() {
        let args = parse(["/warn:4"]);
        assert_eq!(args.warning_level(), 4);
        assert!(!args.has_errors());

        let args = parse(["/warn:high"]);
        assert_eq!(args.warning_level(), 0);
        assert_eq!(args.errors()[0].message(), "Warning Level must be a numeric value");
    }

    #[test]
    fn numbers_accept_sign_and_padding() {
        assert_eq!(parse(["/warn:-1"]).warning_level(), -1);
        assert_eq!(parse(["/warn:+2"]).warning_level(), 2);
        assert_eq!(parse(["/align:\" 512\""]).alignment(), 512);
    }

    #[test]
    fn numbers_reject_empty_and_overflow() {
        let args = parse(["/align:", "/warn:99999999999"]);
        assert_eq!(args.alignment(), 0);
        assert_eq!(args.warning_level(), 0);
        assert_eq!(args.errors().len(), 2);
        assert_eq!(args.errors()[1].message(), "Warning Level must be a numeric value");
    }

    #[test]
    fn errors_do_not_stop_parsing() {
        let args = parse(["/align:x", "a.cs", "/warn:y", "b.cs"]);
        assert_eq!(args.files(), ["a.cs", "b.cs"]);
        assert_eq!(args.errors().len(), 2);
    }

    // -- toggles --

    #[test]
    fn last_optimize_wins() {
        assert!(parse(["/optimize-", "/optimize+"]).optimize());
        assert!(!parse(["/optimize+", "/optimize-"]).optimize());
        assert!(parse(["/optimize"]).optimize());
        assert!(!parse(Vec::<String>::new()).optimize());
    }

    #[test]
    fn checked_and_nostdlib() {
        let args = parse(["/checked", "/nostdlib+"]);
        assert!(args.checked());
        assert!(args.no_std_lib());

        let args = parse(["/checked+", "/checked-", "/nostdlib-"]);
        assert!(!args.checked());
        assert!(!args.no_std_lib());
    }

    #[test]
    fn noconfig() {
        assert!(parse(["/noconfig"]).no_config());
        assert!(!parse(["a.cs"]).no_config());
    }

    // -- debug --

    #[test]
    fn debug_levels() {
        assert_eq!(parse(["/debug"]).debug_level(), "FULL");
        assert_eq!(parse(["/debug+"]).debug_level(), "FULL");
        assert_eq!(parse(["/debug-"]).debug_level(), "NONE");
        assert_eq!(parse(["a.cs"]).debug_level(), "NONE");
        assert_eq!(parse(["/debug:pdbonly"]).debug_level(), "PDBONLY");
    }

    #[test]
    fn debug_can_be_downgraded() {
        assert_eq!(parse(["/debug+", "/debug:pdbonly"]).debug_level(), "PDBONLY");
        assert_eq!(parse(["/debug:full", "/debug-"]).debug_level(), "NONE");
    }

    #[test]
    fn plus_in_debug_value_means_full() {
        assert_eq!(parse(["/debug:pdbonly+"]).debug_level(), "FULL");
        assert_eq!(parse(["/debug:full+"]).debug_level(), "FULL");
    }

    #[test]
    fn plus_anywhere_enables_toggle() {
        assert!(parse(["/optimize+x"]).optimize());
        assert!(!parse(["/optimize-x"]).optimize());
    }

    #[test]
    fn unrecognized_debug_tail_is_ignored() {
        let args = parse(["/debug:full", "/debugger"]);
        assert_eq!(args.debug_level(), "FULL");
        assert!(args.files().is_empty());
    }

    // -- nowarn --

    #[test]
    fn nowarn_split_and_repeated_are_equivalent() {
        let split = parse(["/nowarn:1701,1702"]);
        let repeated = parse(["/nowarn:1701", "/nowarn:1702"]);
        assert_eq!(split.warning_filters(), ["1701", "1702"]);
        assert_eq!(repeated.warning_filters(), ["1701", "1702"]);
    }

    #[test]
    fn nowarn_semicolons() {
        let args = parse(["/nowarn:CS0168;CS0219,,"]);
        assert_eq!(args.warning_filters(), ["CS0168", "CS0219"]);
    }

    // -- mixed --

    #[test]
    fn full_command_line() {
        let args = parse([
            "/noconfig",
            "/target:exe",
            "/out:\"bin\\My",
            "App.exe\"",
            "/r:System.dll",
            "/debug:pdbonly",
            "/optimize+",
            "/nowarn:1591",
            "Program.cs",
            "\"Helpers",
            "Extra.cs\"",
        ]);
        assert!(args.no_config());
        assert_eq!(args.target(), "exe");
        assert_eq!(args.output(), Some("bin\\My App.exe"));
        assert_eq!(args.references(), ["System.dll"]);
        assert_eq!(args.debug_level(), "PDBONLY");
        assert!(args.optimize());
        assert_eq!(args.warning_filters(), ["1591"]);
        assert_eq!(args.files(), ["Program.cs", "Helpers Extra.cs"]);
        assert!(!args.has_errors());
    }
}
