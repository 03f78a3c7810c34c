//! Declaration scanning.
//!
//! Only lines of the form `extern <object-type> *<identifier>` matter;
//! everything else in the header is skipped without comment.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{IngestError, Result};

/// Object type declared by generated UI headers.
pub const DEFAULT_OBJECT_TYPE: &str = "lv_obj_t";

static DEFAULT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bextern\s+lv_obj_t\s*\*\s*([A-Za-z_]\w*)")
        .expect("Invalid declaration regex")
});

/// One matching declaration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolDeclaration {
    /// Raw identifier as written in the header.
    pub identifier: String,
    /// 1-based line number.
    pub line: usize,
}

/// Read the whole header; failure here is fatal for the run.
pub fn read_header(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| IngestError::HeaderRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Scans header text for external object-pointer declarations.
///
/// The scanner owns the text, so [`DeclarationScanner::declarations`]
/// can be called any number of times and always starts from line one.
#[derive(Debug, Clone)]
pub struct DeclarationScanner {
    text: String,
    pattern: Regex,
}

impl DeclarationScanner {
    /// Scanner for `lv_obj_t` declarations.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pattern: DEFAULT_PATTERN.clone(),
        }
    }

    /// Scanner for a different declared object type.
    pub fn with_object_type(text: impl Into<String>, object_type: &str) -> Result<Self> {
        Ok(Self {
            text: text.into(),
            pattern: declaration_pattern(object_type)?,
        })
    }

    pub fn declarations(&self) -> Declarations<'_> {
        Declarations {
            lines: self.text.lines().enumerate(),
            pattern: &self.pattern,
        }
    }
}

fn declaration_pattern(object_type: &str) -> Result<Regex> {
    let source = format!(
        r"\bextern\s+{}\s*\*\s*([A-Za-z_]\w*)",
        regex::escape(object_type.trim())
    );
    Regex::new(&source).map_err(|e| IngestError::Pattern {
        object_type: object_type.to_string(),
        source: e,
    })
}

/// Lazy iterator over the declarations of one header.
pub struct Declarations<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    pattern: &'a Regex,
}

impl Iterator for Declarations<'_> {
    type Item = SymbolDeclaration;

    fn next(&mut self) -> Option<Self::Item> {
        for (index, line) in self.lines.by_ref() {
            if let Some(captures) = self.pattern.captures(line) {
                return Some(SymbolDeclaration {
                    identifier: captures[1].to_string(),
                    line: index + 1,
                });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerates_whitespace_around_pointer() {
        let scanner = DeclarationScanner::new(
            "extern lv_obj_t *ui_btn_a;\nextern lv_obj_t* ui_btn_b;\nextern  lv_obj_t  *  ui_btn_c;\n",
        );
        let ids: Vec<String> = scanner.declarations().map(|d| d.identifier).collect();
        assert_eq!(ids, vec!["ui_btn_a", "ui_btn_b", "ui_btn_c"]);
    }

    #[test]
    fn skips_other_declarations() {
        let scanner = DeclarationScanner::new(
            "#pragma once\nvoid ui_init(void);\nextern lv_style_t *ui_style;\nlv_obj_t *ui_local;\n",
        );
        assert_eq!(scanner.declarations().count(), 0);
    }

    #[test]
    fn custom_object_type_is_escaped() {
        let scanner =
            DeclarationScanner::with_object_type("extern my.obj *ui_btn_x;\n", "my.obj").unwrap();
        assert_eq!(scanner.declarations().count(), 1);
        let scanner =
            DeclarationScanner::with_object_type("extern myXobj *ui_btn_x;\n", "my.obj").unwrap();
        assert_eq!(scanner.declarations().count(), 0);
    }
}
