//! Configuration management for jarlaunch.
use regex::{Captures, Regex};
use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::{
    error::LauncherError, guard::DuplicateSignature, resolver::ArtifactPattern,
    supervisor::LaunchCommand,
};

/// Config file picked up from the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "jarlaunch.yaml";

/// Everything the launcher needs to find, guard and start the artifact.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LauncherConfig {
    /// Base directory for relative paths. `None` means the working directory.
    pub root: Option<PathBuf>,
    /// Directory scanned for artifacts.
    pub artifacts_dir: PathBuf,
    /// File name prefix of the artifact.
    pub prefix: String,
    /// File name suffix of the artifact.
    pub suffix: String,
    /// Substring identifying the launch invocation in a command line.
    pub launch_token: String,
    /// Program used to run the artifact.
    pub interpreter: String,
    /// Heap dump file name, written next to the artifact.
    pub heap_dump_file: String,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        let command = LaunchCommand::default();
        Self {
            root: None,
            artifacts_dir: PathBuf::from("resources"),
            prefix: "wynn-discord-bot-".into(),
            suffix: "-withDependencies.jar".into(),
            launch_token: "java -jar".into(),
            interpreter: command.interpreter,
            heap_dump_file: command.heap_dump_file,
        }
    }
}

impl LauncherConfig {
    /// Directory to scan, with relative paths resolved against the root.
    pub fn artifacts_path(&self) -> PathBuf {
        match &self.root {
            Some(root) if self.artifacts_dir.is_relative() => root.join(&self.artifacts_dir),
            _ => self.artifacts_dir.clone(),
        }
    }

    pub fn pattern(&self) -> ArtifactPattern {
        ArtifactPattern::new(&self.prefix, &self.suffix)
    }

    pub fn signature(&self) -> DuplicateSignature {
        DuplicateSignature::new(&self.launch_token, &self.prefix)
    }

    pub fn launch_command(&self) -> LaunchCommand {
        LaunchCommand {
            interpreter: self.interpreter.clone(),
            heap_dump_file: self.heap_dump_file.clone(),
        }
    }

    /// Substitutes environment references in every string-valued setting.
    fn expand_env(&mut self) -> Result<(), LauncherError> {
        let expander = EnvExpander::new()?;
        for value in [
            &mut self.prefix,
            &mut self.suffix,
            &mut self.launch_token,
            &mut self.interpreter,
            &mut self.heap_dump_file,
        ] {
            *value = expander.expand(value)?;
        }
        for path in [self.root.as_mut(), Some(&mut self.artifacts_dir)]
            .into_iter()
            .flatten()
        {
            let expanded = expander.expand(&path.to_string_lossy())?;
            *path = PathBuf::from(expanded);
        }
        Ok(())
    }
}

/// Expands `$VAR` and `${VAR}` references from the environment.
struct EnvExpander {
    pattern: Regex,
}

impl EnvExpander {
    fn new() -> Result<Self, LauncherError> {
        let pattern = Regex::new(
            r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}|\$([A-Za-z_][A-Za-z0-9_]*)",
        )
        .map_err(|e| LauncherError::Config(e.to_string()))?;
        Ok(Self { pattern })
    }

    fn expand(&self, input: &str) -> Result<String, LauncherError> {
        let mut missing = None;
        let expanded = self.pattern.replace_all(input, |caps: &Captures| {
            let name = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
            env::var(name).unwrap_or_else(|_| {
                missing.get_or_insert_with(|| name.to_string());
                String::new()
            })
        });

        match missing {
            Some(name) => Err(LauncherError::Config(format!(
                "Missing environment variable: {name}"
            ))),
            None => Ok(expanded.into_owned()),
        }
    }
}

/// Parses YAML configuration text, then expands environment references in
/// the parsed values.
pub fn parse_config(content: &str) -> Result<LauncherConfig, LauncherError> {
    let mut config = if content.trim().is_empty() {
        LauncherConfig::default()
    } else {
        serde_yaml::from_str(content)?
    };
    config.expand_env()?;
    Ok(config)
}

/// Loads the configuration.
///
/// With no explicit path, `jarlaunch.yaml` in the working directory is used if
/// it exists; otherwise built-in defaults apply. A relative `root` set in a
/// file is resolved against the file's directory; an absent one stays the
/// working directory.
pub fn load_config(config_path: Option<&Path>) -> Result<LauncherConfig, LauncherError> {
    let config_path = match config_path {
        Some(path) => path.to_path_buf(),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => PathBuf::from(DEFAULT_CONFIG_FILE),
        None => return Ok(LauncherConfig::default()),
    };

    let content = fs::read_to_string(&config_path).map_err(|e| {
        LauncherError::Config(format!("{} ({})", e, config_path.display()))
    })?;
    let mut config = parse_config(&content)?;

    if let Some(root) = config.root.as_mut()
        && root.is_relative()
    {
        let base = config_path.parent().unwrap_or_else(|| Path::new("."));
        *root = base.join(&*root);
    }

    Ok(config)
}
