//! Run configuration.

use std::path::PathBuf;

use uibind_ingest::DEFAULT_OBJECT_TYPE;

/// Recognized options for one binding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingOptions {
    /// Directory holding the header and the generated files.
    pub working_dir: PathBuf,
    /// Header to scan, relative to `working_dir`.
    pub include_file: String,
    /// Stem of the generated `.cpp` and `.json` files.
    pub binding_name: String,
    /// Removed once from the front of every identifier before classifying.
    pub constant_prefix: String,
    /// Accept symbols with unrecognized prefixes as labels.
    pub accept_all: bool,
    /// Pointee type of the declarations to pick up.
    pub object_type: String,
}

impl Default for BindingOptions {
    fn default() -> Self {
        Self {
            working_dir: PathBuf::from("."),
            include_file: "ui.h".to_string(),
            binding_name: "ui_binding".to_string(),
            constant_prefix: "ui_".to_string(),
            accept_all: false,
            object_type: DEFAULT_OBJECT_TYPE.to_string(),
        }
    }
}

impl BindingOptions {
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = dir.into();
        self
    }

    pub fn with_accept_all(mut self, enable: bool) -> Self {
        self.accept_all = enable;
        self
    }

    pub fn header_path(&self) -> PathBuf {
        self.working_dir.join(&self.include_file)
    }

    pub fn document_path(&self) -> PathBuf {
        self.output_path("json")
    }

    pub fn source_path(&self) -> PathBuf {
        self.output_path("cpp")
    }

    fn output_path(&self, extension: &str) -> PathBuf {
        self.working_dir
            .join(format!("{}.{extension}", self.binding_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_paths_share_working_dir() {
        let options = BindingOptions::default().with_working_dir("proj/main");
        assert_eq!(options.header_path(), PathBuf::from("proj/main/ui.h"));
        assert_eq!(
            options.document_path(),
            PathBuf::from("proj/main/ui_binding.json")
        );
        assert_eq!(
            options.source_path(),
            PathBuf::from("proj/main/ui_binding.cpp")
        );
    }
}
