//! Build index and context set documents.
//!
//! A build index enumerates every buildable context of a solution and is the
//! source of the resolver's universe. A context set records a chosen subset,
//! either hand-written and used as a list of filters, or written back out
//! after a resolution. Both are small YAML documents with a single top-level
//! key.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{Result, SelectError};
use crate::list::remove_duplicates;

/// Top-level `build-index` document.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildIndexFile {
    #[serde(rename = "build-index")]
    pub build_index: BuildIndex,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuildIndex {
    #[serde(rename = "generated-by", default)]
    pub generated_by: String,
    /// Solution file this index was generated from.
    #[serde(default)]
    pub solution: String,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub builds: Vec<BuildEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectEntry {
    pub project: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuildEntry {
    /// Context built by this entry, e.g. `app_core.Debug+EVK`.
    pub context: String,
    /// Build recipe for the context, relative to the index file.
    #[serde(default)]
    pub file: String,
}

/// Top-level `context-set` document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextSetFile {
    #[serde(rename = "context-set")]
    pub context_set: ContextSet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextSet {
    #[serde(rename = "generated-by", default)]
    pub generated_by: String,
    #[serde(default)]
    pub contexts: Vec<ContextEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiler: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextEntry {
    pub context: String,
}

impl BuildIndexFile {
    /// Ordered universe of known contexts, in document order; a context
    /// listed twice keeps its first slot.
    pub fn contexts(&self) -> Vec<String> {
        let all: Vec<String> = self
            .build_index
            .builds
            .iter()
            .map(|entry| entry.context.clone())
            .collect();
        remove_duplicates(&all)
    }
}

impl ContextSetFile {
    /// Build a fresh set document for `contexts`, stamped with this crate's
    /// name and version.
    pub fn from_contexts(contexts: &[String]) -> Self {
        Self {
            context_set: ContextSet {
                generated_by: concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"))
                    .to_string(),
                contexts: contexts
                    .iter()
                    .map(|context| ContextEntry {
                        context: context.clone(),
                    })
                    .collect(),
                compiler: None,
            },
        }
    }

    /// Contexts recorded in the set, in document order, deduplicated.
    pub fn contexts(&self) -> Vec<String> {
        let all: Vec<String> = self
            .context_set
            .contexts
            .iter()
            .map(|entry| entry.context.clone())
            .collect();
        remove_duplicates(&all)
    }
}

/// Read and decode a build index document.
pub fn load_build_index(path: &Path) -> Result<BuildIndexFile> {
    let file: BuildIndexFile = decode(&read(path)?, path)?;
    debug!(
        path = %path.display(),
        builds = file.build_index.builds.len(),
        "loaded build index"
    );
    Ok(file)
}

/// Read and decode a context set document.
pub fn load_context_set(path: &Path) -> Result<ContextSetFile> {
    let file: ContextSetFile = decode(&read(path)?, path)?;
    debug!(
        path = %path.display(),
        contexts = file.context_set.contexts.len(),
        "loaded context set"
    );
    Ok(file)
}

/// Write `contexts` out as a context set document.
pub fn write_context_set(path: &Path, contexts: &[String]) -> Result<()> {
    let file = ContextSetFile::from_contexts(contexts);
    let text = serde_yaml::to_string(&file).map_err(|source| SelectError::Yaml {
        path: path.display().to_string(),
        source,
    })?;
    fs::write(path, text).map_err(|source| SelectError::Write {
        path: path.display().to_string(),
        source,
    })
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| SelectError::Read {
        path: path.display().to_string(),
        source,
    })
}

fn decode<T: DeserializeOwned>(text: &str, path: &Path) -> Result<T> {
    serde_yaml::from_str(text).map_err(|source| SelectError::Yaml {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn inline() -> &'static Path {
        Path::new("inline.yml")
    }

    #[test]
    fn decodes_a_build_index() {
        let yaml = r#"
build-index:
  generated-by: solution-tool 0.4.0
  solution: demo.solution.yml
  projects:
    - project: core/app_core.project.yml
    - project: boot/app_boot.project.yml
  builds:
    - context: app_core.Debug+EVK
      file: core/app_core.Debug+EVK.build.yml
    - context: app_core.Release+EVK
      file: core/app_core.Release+EVK.build.yml
    - context: app_boot.Debug+EVK
"#;
        let file: BuildIndexFile = decode(yaml, inline()).unwrap();
        assert_eq!(file.build_index.generated_by, "solution-tool 0.4.0");
        assert_eq!(file.build_index.solution, "demo.solution.yml");
        assert_eq!(file.build_index.projects.len(), 2);
        assert_eq!(
            file.build_index.projects[1].project,
            "boot/app_boot.project.yml"
        );
        assert_eq!(file.build_index.builds[0].file, "core/app_core.Debug+EVK.build.yml");
        // The last entry omits the optional recipe file.
        assert_eq!(file.build_index.builds[2].file, "");
        assert_eq!(
            file.contexts(),
            vec!["app_core.Debug+EVK", "app_core.Release+EVK", "app_boot.Debug+EVK"]
        );
    }

    #[test]
    fn index_contexts_are_deduplicated_in_order() {
        let yaml = r#"
build-index:
  builds:
    - context: app.Debug+EVK
    - context: app.Release+EVK
    - context: app.Debug+EVK
"#;
        let file: BuildIndexFile = decode(yaml, inline()).unwrap();
        assert_eq!(file.contexts(), vec!["app.Debug+EVK", "app.Release+EVK"]);
    }

    #[test]
    fn decodes_a_context_set() {
        let yaml = r#"
context-set:
  generated-by: solution-tool 0.4.0
  contexts:
    - context: app_core.Debug+EVK
    - context: app_boot.Debug+EVK
  compiler: GCC
"#;
        let file: ContextSetFile = decode(yaml, inline()).unwrap();
        assert_eq!(file.context_set.compiler.as_deref(), Some("GCC"));
        assert_eq!(
            file.contexts(),
            vec!["app_core.Debug+EVK", "app_boot.Debug+EVK"]
        );
    }

    #[test]
    fn context_set_optional_keys_may_be_absent() {
        let yaml = r#"
context-set:
  contexts:
    - context: app.Debug
"#;
        let file: ContextSetFile = decode(yaml, inline()).unwrap();
        assert_eq!(file.context_set.generated_by, "");
        assert_eq!(file.context_set.compiler, None);
    }

    #[test]
    fn build_entry_requires_a_context() {
        let yaml = r#"
build-index:
  builds:
    - file: core/app.build.yml
"#;
        let err = decode::<BuildIndexFile>(yaml, inline()).unwrap_err();
        assert!(matches!(err, SelectError::Yaml { .. }));
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = load_build_index(Path::new("Unknown.build-index.yml")).unwrap_err();
        match err {
            SelectError::Read { path, .. } => assert_eq!(path, "Unknown.build-index.yml"),
            other => panic!("expected Read error, got {other:?}"),
        }
    }

    #[test]
    fn unwritable_path_reports_a_write_error() {
        let missing_dir = Path::new("this-directory-does-not-exist/out.context-set.yml");
        let err = write_context_set(missing_dir, &["app.Debug".to_string()]).unwrap_err();
        assert!(matches!(err, SelectError::Write { .. }));
    }

    #[test]
    fn freshly_built_set_round_trips() {
        let contexts = vec!["app_core.Debug+EVK".to_string(), "app_boot.Debug+EVK".to_string()];
        let rendered = serde_yaml::to_string(&ContextSetFile::from_contexts(&contexts)).unwrap();
        let reparsed: ContextSetFile = decode(&rendered, inline()).unwrap();
        assert_eq!(reparsed.contexts(), contexts);
        assert_eq!(
            reparsed.context_set.generated_by,
            concat!("build-context-selection ", env!("CARGO_PKG_VERSION"))
        );
    }
}
