//! Rendering of the generated C++ source.

use std::fmt::Write;

use chrono::NaiveDate;
use uibind_model::{BindingEntry, BindingStore};

/// Header that declares the host class receiving registrations.
pub const HOST_INCLUDE: &str = "LvglHost.h";
/// Header that declares the two generated functions.
pub const BINDING_INCLUDE: &str = "LvglBinding.h";
pub const REGISTRATION_SIGNATURE: &str = "void LvglBindingInit(LvglHost& host)";
pub const GROUP_SIGNATURE: &str = "void LvglGroupInit(lv_group_t* group)";

const INDENT: &str = "    ";

/// Leading comment recording who generated the file and when.
///
/// The banner is the only part of the output that may differ between two
/// runs over the same store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub tool: String,
    pub version: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// UI header included by the generated file (e.g. `ui.h`).
    pub include_file: String,
    /// Emit commented placeholders for calls that are switched off.
    pub diagnostic: bool,
    pub banner: Option<Banner>,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            include_file: "ui.h".to_string(),
            diagnostic: false,
            banner: None,
        }
    }
}

/// Render the complete generated file.
pub fn generate_binding_source(store: &BindingStore, options: &EmitOptions) -> String {
    let mut out = String::new();
    if let Some(banner) = &options.banner {
        let _ = writeln!(
            out,
            "// Generated by {} {} on {}",
            banner.tool,
            banner.version,
            banner.date.format("%Y-%m-%d")
        );
    }
    let _ = writeln!(out, "#include \"{HOST_INCLUDE}\"");
    let _ = writeln!(out, "#include \"{}\"", options.include_file);
    let _ = writeln!(out, "#include \"{BINDING_INCLUDE}\"");
    out.push('\n');

    let _ = writeln!(out, "{REGISTRATION_SIGNATURE}\n{{");
    out.push_str(&registration_body(store, options.diagnostic));
    out.push_str("}\n\n");

    let _ = writeln!(out, "{GROUP_SIGNATURE}\n{{");
    out.push_str(&group_body(store, options.diagnostic));
    out.push_str("}\n");
    out
}

/// Producer/consumer calls, one line per call, in store order.
pub fn registration_body(store: &BindingStore, diagnostic: bool) -> String {
    let mut out = String::new();
    for entry in store {
        emit_call(&mut out, entry.produce, diagnostic, &producer_call(entry));
        emit_call(&mut out, entry.consume, diagnostic, &consumer_call(entry));
    }
    out
}

/// Group membership calls, one line per grouped entry, in store order.
pub fn group_body(store: &BindingStore, diagnostic: bool) -> String {
    let mut out = String::new();
    for entry in store {
        emit_call(&mut out, entry.group, diagnostic, &group_call(entry));
    }
    out
}

fn emit_call(out: &mut String, enabled: bool, diagnostic: bool, call: &str) {
    if enabled {
        let _ = writeln!(out, "{INDENT}{call}");
    } else if diagnostic {
        let _ = writeln!(out, "{INDENT}// {call}");
    }
}

pub fn producer_call(entry: &BindingEntry) -> String {
    format!(
        "host.AddProducer(\"{}\", {}, {}, {});",
        escape_c_string(&entry.display_name),
        entry.identifier(),
        entry.control_type,
        entry.event
    )
}

pub fn consumer_call(entry: &BindingEntry) -> String {
    format!(
        "host.AddConsumer(\"{}\", {}, {});",
        escape_c_string(&entry.display_name),
        entry.identifier(),
        entry.control_type
    )
}

pub fn group_call(entry: &BindingEntry) -> String {
    format!("lv_group_add_obj(group, {});", entry.identifier())
}

/// Escape text for a C string literal.
///
/// Control characters without a short escape are written as three-digit
/// octal, which unlike `\x` cannot swallow a following hex digit.
fn escape_c_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_ascii_control() => {
                let _ = write!(escaped, "\\{:03o}", u32::from(c));
            }
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_quotes_and_backslashes() {
        assert_eq!(escape_c_string(r#"a"b\c"#), r#"a\"b\\c"#);
        assert_eq!(escape_c_string("plain"), "plain");
    }

    #[test]
    fn escapes_control_characters() {
        assert_eq!(escape_c_string("a\rb\tc\nd"), r"a\rb\tc\nd");
        assert_eq!(escape_c_string("\u{1b}1"), r"\0331");
        assert_eq!(escape_c_string("\0\u{7f}"), r"\000\177");
    }
}
