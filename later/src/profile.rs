//! Configuration profiles.
//!
//! A configuration file holds named profiles of default switches:
//!
//! ```text
//! # comment
//! profile default
//! target: exe
//! reference: lib/Common.dll
//! optimize: yes
//!
//! profile release
//! debug: pdbonly
//! ```
//!
//! A profile ends at the next blank line. Each `key: value` line stands for
//! one switch on the command line.

use std::path::{Path, PathBuf};

use cscopt::Switch;
use tracing::debug;

use crate::error::{LaterError, Result};

pub const DEFAULT_PROFILE: &str = "default";

/// One named section of a configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub settings: Vec<(String, String)>,
}

impl Profile {
    pub fn new(name: &str) -> Profile {
        Profile {
            name: name.to_string(),
            settings: Vec::new(),
        }
    }

    /// Last value for `key`, if any.
    #[cfg(test)]
    fn get(&self, key: &str) -> Option<&str> {
        self.settings
            .iter()
            .rev()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// The settings as command-line tokens, in file order.
    ///
    /// `file` lines become bare source files. On toggle switches `yes`/`no`
    /// become `+`/`-`; everything else becomes `/key:value`.
    pub fn to_tokens(&self) -> Vec<String> {
        self.settings
            .iter()
            .map(|(key, value)| {
                if key.eq_ignore_ascii_case("file") {
                    return value.clone();
                }
                let toggle = is_toggle(key);
                if toggle && value == "yes" {
                    format!("/{}+", key)
                } else if toggle && value == "no" {
                    format!("/{}-", key)
                } else {
                    format!("/{}:{}", key, value)
                }
            })
            .collect()
    }
}

/// Whether `key` names a switch that takes `+`/`-`.
fn is_toggle(key: &str) -> bool {
    matches!(
        Switch::classify(&format!("/{}", key)),
        Some((Switch::Optimize | Switch::Checked | Switch::NoStdLib | Switch::Debug, ""))
    )
}

/// Parse every profile in `content`. `path` is only used for error messages.
pub fn parse_profiles(content: &str, path: &Path) -> Result<Vec<Profile>> {
    let config_error = |line: usize, message: &str| LaterError::Config {
        path: path.to_path_buf(),
        line,
        message: message.to_string(),
    };

    let mut profiles = Vec::new();
    let mut current: Option<Profile> = None;

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim_end();

        if line.is_empty() {
            profiles.extend(current.take());
            continue;
        }
        if line.trim_start().starts_with('#') {
            continue;
        }

        if let Some(name) = line.strip_prefix("profile ") {
            profiles.extend(current.take());
            current = Some(Profile::new(name.trim()));
            continue;
        }

        let Some(profile) = current.as_mut() else {
            return Err(config_error(line_no, "expected 'profile NAME'"));
        };
        let Some((key, value)) = line.split_once(':') else {
            return Err(config_error(line_no, "expected 'key: value'"));
        };
        let key = key.trim();
        let value = value.trim_start();
        if key.is_empty() {
            return Err(config_error(line_no, "empty key"));
        }
        if value.contains('"') {
            return Err(config_error(line_no, "quotes are not allowed in values"));
        }
        profile.settings.push((key.to_string(), value.to_string()));
    }
    profiles.extend(current);

    Ok(profiles)
}

/// Search `content` for the profile called `name`.
/// Returns Ok(None) if there is none; a name defined twice is an error.
pub fn find_profile(content: &str, path: &Path, name: &str) -> Result<Option<Profile>> {
    let mut found: Option<Profile> = None;
    for profile in parse_profiles(content, path)? {
        if profile.name == name {
            if found.is_some() {
                return Err(LaterError::DuplicateProfile(name.to_string()));
            }
            found = Some(profile);
        }
    }
    Ok(found)
}

/// `$HOME/.laterrc`, then `/etc/later.conf`.
pub fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(home) = std::env::var_os("HOME") {
        paths.push(Path::new(&home).join(".laterrc"));
    }
    paths.push(PathBuf::from("/etc/later.conf"));
    paths
}

/// Read the first existing file of `paths` and look up a profile in it.
///
/// Without an explicit `profile_name` the `default` profile is used, and a
/// missing file or profile is not an error.
pub fn load_profile(paths: &[PathBuf], profile_name: Option<&str>) -> Result<Option<Profile>> {
    let name = profile_name.unwrap_or(DEFAULT_PROFILE);

    let Some(path) = paths.iter().find(|p| p.is_file()) else {
        if profile_name.is_some() {
            return Err(LaterError::ConfigNotFound);
        }
        return Ok(None);
    };
    debug!(path = %path.display(), profile = name, "reading configuration");

    let content = std::fs::read_to_string(path).map_err(|source| LaterError::Io {
        path: path.clone(),
        source,
    })?;

    let found = find_profile(&content, path, name)?;
    if found.is_none() && profile_name.is_some() {
        return Err(LaterError::ProfileNotFound(name.to_string()));
    }
    Ok(found)
}
