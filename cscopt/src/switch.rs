// ============================================================================
// Switch — every switch the parser recognizes
// ============================================================================

/// A recognized compiler switch. Anything that does not classify as one of
/// these is a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Switch {
    Reference,
    Resource,
    Define,
    Output,
    Pdb,
    FileAlign,
    WarningLevel,
    Target,
    Win32Icon,
    Win32Resource,
    Main,
    Platform,
    Optimize,
    Checked,
    NoWarn,
    NoStdLib,
    NoConfig,
    Debug,
}

/// Prefix rules in match order. Prefixes are lower-case; tokens are compared
/// ASCII case-insensitively against the start of the token.
const SWITCH_TABLE: &[(&str, Switch)] = &[
    ("/reference:", Switch::Reference),
    ("/r:", Switch::Reference),
    ("/resource:", Switch::Resource),
    ("/res:", Switch::Resource),
    ("/define:", Switch::Define),
    ("/d:", Switch::Define),
    ("/out:", Switch::Output),
    ("/output:", Switch::Output),
    ("/pdb:", Switch::Pdb),
    ("/filealign:", Switch::FileAlign),
    ("/align:", Switch::FileAlign),
    ("/warn:", Switch::WarningLevel),
    ("/target:", Switch::Target),
    ("/win32icon:", Switch::Win32Icon),
    ("/win32res:", Switch::Win32Resource),
    ("/main:", Switch::Main),
    ("/platform:", Switch::Platform),
    ("/optimize", Switch::Optimize),
    ("/checked", Switch::Checked),
    ("/nowarn:", Switch::NoWarn),
    ("/nostdlib", Switch::NoStdLib),
    ("/noconfig", Switch::NoConfig),
    ("/debug", Switch::Debug),
];

impl Switch {
    /// Find the switch a token starts with. Returns the switch and the part
    /// of the token after the matched prefix, in its original case.
    pub fn classify(token: &str) -> Option<(Switch, &str)> {
        SWITCH_TABLE.iter().find_map(|&(prefix, switch)| {
            let head = token.get(..prefix.len())?;
            if head.eq_ignore_ascii_case(prefix) {
                Some((switch, &token[prefix.len()..]))
            } else {
                None
            }
        })
    }

    /// All spellings of this switch, long form first.
    #[cfg(test)]
    fn prefixes(self) -> impl Iterator<Item = &'static str> {
        SWITCH_TABLE
            .iter()
            .filter(move |(_, s)| *s == self)
            .map(|(prefix, _)| *prefix)
    }
}

// ============================================================================
// Suffix — `+`, `-` or `:value` after a switch name
// ============================================================================

/// What follows the name of a toggle-like switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suffix<'a> {
    /// Bare name, or a `+` anywhere in the tail.
    Enable,
    /// Ends in `-`.
    Disable,
    /// `:value`, only when the switch takes one.
    Value(&'a str),
    /// Anything else.
    Other,
}

impl<'a> Suffix<'a> {
    /// Read the tail of a token after the switch name. A `+` anywhere wins,
    /// so `/debug:full+` enables. A `:value` tail is only recognized when
    /// `accepts_value` is set.
    pub fn read(rest: &'a str, accepts_value: bool) -> Suffix<'a> {
        if rest.is_empty() || rest.contains('+') {
            return Suffix::Enable;
        }
        if accepts_value {
            if let Some(value) = rest.strip_prefix(':') {
                return Suffix::Value(value);
            }
        }
        if rest.ends_with('-') {
            Suffix::Disable
        } else {
            Suffix::Other
        }
    }

    /// Pick `on` or `off`; anything but an explicit enable is `off`.
    pub fn toggle<T>(self, on: T, off: T) -> T {
        match self {
            Suffix::Enable => on,
            _ => off,
        }
    }
}
