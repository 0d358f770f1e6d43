use std::fmt;
use std::str::FromStr;

use crate::errors::{Result, SelectError};

/// One buildable configuration of a solution: a project, a build type
/// (e.g. Debug/Release) and a target type (the board or core built for).
/// Any component may be empty; the canonical string form is
/// `Project.BuildType+TargetType` with empty components left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextItem {
    pub project_name: String,
    pub build_type: String,
    pub target_type: String,
}

/// Split a context string into its three components.
///
/// Accepts at most one `.` and one `+`, in that order. A leading or trailing
/// separator yields an empty component, so `".Build+"` is the same as
/// `".Build"`. `Parse` does not give `*` any meaning; filter strings go
/// through the same grammar as concrete contexts.
pub fn parse_context(input: &str) -> Result<ContextItem> {
    if input.is_empty() {
        return Err(SelectError::EmptyContext);
    }
    if input.matches('.').count() > 1 || input.matches('+').count() > 1 {
        return Err(SelectError::MalformedSeparators {
            context: input.to_string(),
        });
    }

    let item = match (input.find('.'), input.find('+')) {
        (None, None) => ContextItem {
            project_name: input.to_string(),
            ..Default::default()
        },
        (Some(dot), None) => ContextItem {
            project_name: input[..dot].to_string(),
            build_type: input[dot + 1..].to_string(),
            ..Default::default()
        },
        (None, Some(plus)) => ContextItem {
            project_name: input[..plus].to_string(),
            target_type: input[plus + 1..].to_string(),
            ..Default::default()
        },
        (Some(dot), Some(plus)) => {
            if plus < dot {
                return Err(SelectError::SeparatorOrder {
                    context: input.to_string(),
                });
            }
            ContextItem {
                project_name: input[..dot].to_string(),
                build_type: input[dot + 1..plus].to_string(),
                target_type: input[plus + 1..].to_string(),
            }
        }
    };
    Ok(item)
}

impl FromStr for ContextItem {
    type Err = SelectError;

    fn from_str(s: &str) -> Result<Self> {
        parse_context(s)
    }
}

/// Canonical serialization: separators are only emitted in front of
/// non-empty components, so the all-empty item renders as `""`.
impl fmt::Display for ContextItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.project_name)?;
        if !self.build_type.is_empty() {
            write!(f, ".{}", self.build_type)?;
        }
        if !self.target_type.is_empty() {
            write!(f, "+{}", self.target_type)?;
        }
        Ok(())
    }
}
