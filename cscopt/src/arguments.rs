/// Debug level set by `/debug` and `/debug+`.
pub const DEBUG_FULL: &str = "FULL";
/// Debug level set by `/debug-`, and the default.
pub const DEBUG_NONE: &str = "NONE";

/// A non-fatal problem found while parsing. Parsing always continues.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        ParseError {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Kind of assembly a `/target:` value asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyKind {
    ConsoleApplication,
    WindowsApplication,
    DynamicallyLinkedLibrary,
}

impl AssemblyKind {
    /// `exe` and `winexe` (any case) select applications; everything else,
    /// including no target at all, is a library.
    pub fn from_target(target: &str) -> AssemblyKind {
        if target.eq_ignore_ascii_case("exe") {
            AssemblyKind::ConsoleApplication
        } else if target.eq_ignore_ascii_case("winexe") {
            AssemblyKind::WindowsApplication
        } else {
            AssemblyKind::DynamicallyLinkedLibrary
        }
    }
}

// ============================================================================
// ArgumentsBuilder — mutable accumulator used while parsing
// ============================================================================

/// Accumulates parsed values in arrival order. Scalars are last-write-wins.
/// [`ArgumentsBuilder::build`] freezes it into [`CompilerArguments`].
#[derive(Debug, Clone)]
pub struct ArgumentsBuilder {
    pub files: Vec<String>,
    pub references: Vec<String>,
    pub resources: Vec<String>,
    pub defines: Vec<String>,
    pub warning_filters: Vec<String>,
    pub errors: Vec<ParseError>,
    pub output: Option<String>,
    pub pdb_output: Option<String>,
    pub alignment: i32,
    pub target: String,
    pub win32_icon: Option<String>,
    pub win32_resource: Option<String>,
    pub optimize: bool,
    pub platform: Option<String>,
    pub main: Option<String>,
    pub checked: bool,
    pub debug_level: String,
    pub warning_level: i32,
    pub no_std_lib: bool,
    pub no_config: bool,
}

impl ArgumentsBuilder {
    pub fn new() -> Self {
        ArgumentsBuilder {
            files: Vec::new(),
            references: Vec::new(),
            resources: Vec::new(),
            defines: Vec::new(),
            warning_filters: Vec::new(),
            errors: Vec::new(),
            output: None,
            pdb_output: None,
            alignment: 0,
            target: String::new(),
            win32_icon: None,
            win32_resource: None,
            optimize: false,
            platform: None,
            main: None,
            checked: false,
            debug_level: DEBUG_NONE.to_string(),
            warning_level: 0,
            no_std_lib: false,
            no_config: false,
        }
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(ParseError::new(message));
    }

    /// Append the non-empty pieces of a `,`/`;` separated list.
    pub fn add_warning_filters(&mut self, list: &str) {
        self.warning_filters.extend(
            list.split([',', ';'])
                .filter(|piece| !piece.is_empty())
                .map(str::to_string),
        );
    }

    pub fn build(self) -> CompilerArguments {
        CompilerArguments {
            files: self.files.into_boxed_slice(),
            references: self.references.into_boxed_slice(),
            resources: self.resources.into_boxed_slice(),
            defines: self.defines.into_boxed_slice(),
            warning_filters: self.warning_filters.into_boxed_slice(),
            errors: self.errors.into_boxed_slice(),
            output: self.output,
            pdb_output: self.pdb_output,
            alignment: self.alignment,
            target: self.target,
            win32_icon: self.win32_icon,
            win32_resource: self.win32_resource,
            optimize: self.optimize,
            platform: self.platform,
            main: self.main,
            checked: self.checked,
            debug_level: self.debug_level,
            warning_level: self.warning_level,
            no_std_lib: self.no_std_lib,
            no_config: self.no_config,
        }
    }
}

impl Default for ArgumentsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// CompilerArguments — frozen parse result
// ============================================================================

/// Everything parsed from one command line. Read-only; build a new one
/// through [`ArgumentsBuilder`] to change anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerArguments {
    files: Box<[String]>,
    references: Box<[String]>,
    resources: Box<[String]>,
    defines: Box<[String]>,
    warning_filters: Box<[String]>,
    errors: Box<[ParseError]>,
    output: Option<String>,
    pdb_output: Option<String>,
    alignment: i32,
    target: String,
    win32_icon: Option<String>,
    win32_resource: Option<String>,
    optimize: bool,
    platform: Option<String>,
    main: Option<String>,
    checked: bool,
    debug_level: String,
    warning_level: i32,
    no_std_lib: bool,
    no_config: bool,
}

impl CompilerArguments {
    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn references(&self) -> &[String] {
        &self.references
    }

    pub fn resources(&self) -> &[String] {
        &self.resources
    }

    pub fn defines(&self) -> &[String] {
        &self.defines
    }

    pub fn warning_filters(&self) -> &[String] {
        &self.warning_filters
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn pdb_output(&self) -> Option<&str> {
        self.pdb_output.as_deref()
    }

    pub fn alignment(&self) -> i32 {
        self.alignment
    }

    /// Raw `/target:` value; empty when none was given.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn assembly_kind(&self) -> AssemblyKind {
        AssemblyKind::from_target(&self.target)
    }

    pub fn win32_icon(&self) -> Option<&str> {
        self.win32_icon.as_deref()
    }

    pub fn win32_resource(&self) -> Option<&str> {
        self.win32_resource.as_deref()
    }

    pub fn optimize(&self) -> bool {
        self.optimize
    }

    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }

    pub fn main(&self) -> Option<&str> {
        self.main.as_deref()
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    /// `"NONE"`, `"FULL"`, or the upper-cased `/debug:` value.
    pub fn debug_level(&self) -> &str {
        &self.debug_level
    }

    pub fn warning_level(&self) -> i32 {
        self.warning_level
    }

    pub fn no_std_lib(&self) -> bool {
        self.no_std_lib
    }

    pub fn no_config(&self) -> bool {
        self.no_config
    }
}

impl Default for CompilerArguments {
    fn default() -> Self {
        ArgumentsBuilder::new().build()
    }
}
