//! pip-style requirement specifiers.

use std::fmt;

use super::AppError;

/// Packages installed into the experiment environment, in install order.
pub const DEFAULT_REQUIREMENTS: &[&str] = &[
    "torch>=1.12.0",
    "torchvision>=0.13.0",
    "timm>=0.6.12",
    "opencv-python>=4.6.0",
    "Pillow>=9.2.0",
    "albumentations>=1.3.0",
    "numpy>=1.21.0",
    "pandas>=1.4.0",
    "matplotlib>=3.5.0",
    "seaborn>=0.11.0",
    "scikit-learn>=1.1.0",
    "tqdm>=4.64.0",
    "jupyter>=1.0.0",
];

/// Characters that end the package name: comparison operators and `@` direct references.
const OPERATOR_CHARS: &[char] = &['<', '>', '=', '!', '~', '@'];

/// A validated `name[extras]<op>version` or `name@url` specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    name: String,
    constraint: Option<String>,
}

impl Requirement {
    pub fn parse(spec: &str) -> Result<Self, AppError> {
        let invalid = |reason: &str| AppError::InvalidRequirement {
            spec: spec.to_string(),
            reason: reason.to_string(),
        };

        if spec.is_empty() {
            return Err(invalid("specifier is empty"));
        }
        if spec.chars().any(char::is_whitespace) {
            return Err(invalid("specifier must not contain whitespace"));
        }

        let split = spec.find(OPERATOR_CHARS).unwrap_or(spec.len());
        let (name, constraint) = spec.split_at(split);

        if name.is_empty() {
            return Err(invalid("package name is missing"));
        }
        if !name.chars().all(is_name_char) {
            return Err(invalid("package name must be alphanumeric with '-', '_', '.' or [extras]"));
        }

        if constraint.is_empty() {
            return Ok(Self { name: name.to_string(), constraint: None });
        }
        if constraint.trim_start_matches(OPERATOR_CHARS).is_empty() {
            return Err(invalid("version constraint has no version"));
        }

        Ok(Self { name: name.to_string(), constraint: Some(constraint.to_string()) })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn constraint(&self) -> Option<&str> {
        self.constraint.as_deref()
    }

    /// Parse a list of specifiers, failing on the first invalid entry.
    pub fn parse_all<S: AsRef<str>>(specs: &[S]) -> Result<Vec<Self>, AppError> {
        specs.iter().map(|spec| Self::parse(spec.as_ref())).collect()
    }

    pub fn defaults() -> Vec<Self> {
        DEFAULT_REQUIREMENTS.iter().filter_map(|spec| Self::parse(spec).ok()).collect()
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '[' | ']' | ',')
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.constraint {
            Some(constraint) => write!(f, "{}{}", self.name, constraint),
            None => write!(f, "{}", self.name),
        }
    }
}
