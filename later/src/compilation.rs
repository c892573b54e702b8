//! Translation of parsed switches into a compilation request.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use cscopt::{AssemblyKind, CompilerArguments};
use tracing::debug;

use crate::diagnostics::Diagnostic;

/// Assembly name used when neither `/out:` nor a source file names one.
const FALLBACK_ASSEMBLY_NAME: &str = "output";

/// One source file and its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    pub path: PathBuf,
    pub text: String,
}

/// A metadata reference given with `/reference:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyReference {
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationOptions {
    pub assembly_kind: AssemblyKind,
    pub optimize: bool,
    pub check_overflow: bool,
    pub main_type_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compilation {
    pub assembly_name: String,
    pub output_path: Option<PathBuf>,
    pub syntax_trees: Vec<SourceText>,
    pub references: Vec<AssemblyReference>,
    pub options: CompilationOptions,
}

impl Compilation {
    /// Build a compilation from parsed arguments, reading every source file.
    ///
    /// Unreadable sources are left out and reported; missing references are
    /// reported but kept, so the reference list mirrors the command line.
    pub fn from_arguments(args: &CompilerArguments) -> (Compilation, Vec<Diagnostic>) {
        let mut diagnostics = Vec::new();

        let mut syntax_trees = Vec::with_capacity(args.files().len());
        for file in args.files() {
            match std::fs::read_to_string(file) {
                Ok(text) => syntax_trees.push(SourceText {
                    path: PathBuf::from(file),
                    text,
                }),
                Err(e) => {
                    let message = format!("source file could not be read: {}", e);
                    diagnostics.push(Diagnostic::error(message).at(file));
                }
            }
        }
        if args.files().is_empty() {
            diagnostics.push(Diagnostic::warning("no source files specified"));
        }

        let references: Vec<AssemblyReference> = args
            .references()
            .iter()
            .map(|r| AssemblyReference {
                path: PathBuf::from(r),
            })
            .collect();
        for reference in &references {
            if !reference.path.exists() {
                diagnostics.push(Diagnostic::error(format!(
                    "metadata file '{}' could not be found",
                    reference.path.display()
                )));
            }
        }

        let options = CompilationOptions {
            assembly_kind: args.assembly_kind(),
            optimize: args.optimize(),
            check_overflow: args.checked(),
            main_type_name: args.main().map(str::to_string),
        };

        let compilation = Compilation {
            assembly_name: assembly_name(args),
            output_path: args.output().map(PathBuf::from),
            syntax_trees,
            references,
            options,
        };
        debug!(
            assembly = %compilation.assembly_name,
            sources = compilation.syntax_trees.len(),
            references = compilation.references.len(),
            "compilation created"
        );

        (compilation, diagnostics)
    }

    pub fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "assembly: {} ({:?})", self.assembly_name, self.options.assembly_kind)?;
        if let Some(ref path) = self.output_path {
            writeln!(out, "output: {}", path.display())?;
        }
        for source in &self.syntax_trees {
            writeln!(out, "source: {} ({} bytes)", source.path.display(), source.text.len())?;
        }
        for reference in &self.references {
            writeln!(out, "reference: {}", reference.path.display())?;
        }
        writeln!(out, "optimize: {}", self.options.optimize)?;
        writeln!(out, "checked: {}", self.options.check_overflow)?;
        if let Some(ref main) = self.options.main_type_name {
            writeln!(out, "main: {}", main)?;
        }
        Ok(())
    }
}

/// File stem of `/out:`, else of the first source file.
fn assembly_name(args: &CompilerArguments) -> String {
    args.output()
        .or_else(|| args.files().first().map(String::as_str))
        .and_then(|p| Path::new(p).file_stem())
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_ASSEMBLY_NAME.to_string())
}
