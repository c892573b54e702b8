//! Parser for `csc`-style compiler command lines.
//!
//! Turns a raw argument vector into a [`CompilerArguments`] snapshot:
//! - `/name:value` switches in long and short form, matched case-insensitively
//! - values split across several argv entries by an embedded, quoted space
//! - `+`/`-` toggles and the `/debug` family
//! - non-fatal [`ParseError`]s collected next to the parsed values
//!
//! ```
//! let args = cscopt::parse(["/target:exe", "/r:\"C:\\Program", "Files\\lib.dll\"", "main.cs"]);
//! assert_eq!(args.target(), "exe");
//! assert_eq!(args.references(), ["C:\\Program Files\\lib.dll"]);
//! assert_eq!(args.files(), ["main.cs"]);
//! ```

mod arguments;
mod parser;
mod quoted;
mod switch;
mod token;

pub use arguments::{
    ArgumentsBuilder, AssemblyKind, CompilerArguments, ParseError, DEBUG_FULL, DEBUG_NONE,
};
pub use parser::parse;
pub use switch::{Suffix, Switch};
pub use token::{IntoToken, TokenQueue};
