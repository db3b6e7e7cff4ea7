//! Call-site resolution
//!
//! Walks the current thread's stack with the `backtrace` crate and reports the
//! frame that called into the logger, plus an optional bounded list of its
//! ancestors. The logger's own frames (and the unwinder's) are discarded
//! before `skip` is applied, so `skip == 0` always names the direct caller of
//! a logging entry point. Resolution never fails: a missing frame becomes
//! [`Frame::unknown`].
//!
//! File and line come from the binary's debug info. Builds that strip it
//! (the default `release` profile) report the placeholder instead of a
//! misattributed frame; keep at least `debug = "line-tables-only"` where
//! call sites matter.

use std::fmt;

/// Upper bound on frames collected for a stack trace
pub const DEFAULT_STACK_DEPTH: usize = 10;

/// Placeholder used when frame information is unavailable
pub const UNKNOWN: &str = "???";

/// A resolved source location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Source path as recorded in debug info
    pub file: String,
    pub line: u32,
    /// Short function name, module path stripped
    pub function: String,
}

impl Frame {
    pub fn new(file: impl Into<String>, line: u32, function: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            function: function.into(),
        }
    }

    /// The `???:0` location reported when introspection comes up empty
    pub fn unknown() -> Self {
        Self::new(UNKNOWN, 0, UNKNOWN)
    }

    pub fn is_unknown(&self) -> bool {
        self.file == UNKNOWN && self.line == 0
    }

    /// Last directory plus file name, e.g. `core/logger.rs`
    pub fn short_path(&self) -> &str {
        short_path(&self.file)
    }

    /// File name without any directory
    pub fn file_name(&self) -> &str {
        file_name(&self.file)
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::unknown()
    }
}

/// Renders as `file:line (function)`, the form used for stack trace entries.
impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} ({})", self.file, self.line, self.function)
    }
}

/// Resolve the frame `skip` levels above the logger's caller.
pub fn resolve_caller(skip: usize) -> Frame {
    walk(skip, 1).into_iter().next().unwrap_or_default()
}

/// Resolve up to `max_depth` frames starting `skip` levels above the caller.
///
/// Each call walks the stack afresh. An empty vector means no frame could be
/// resolved.
pub fn resolve_stack(skip: usize, max_depth: usize) -> Vec<Frame> {
    walk(skip, max_depth)
}

fn walk(skip: usize, max_depth: usize) -> Vec<Frame> {
    let mut frames = Vec::with_capacity(max_depth.min(DEFAULT_STACK_DEPTH));
    if max_depth == 0 {
        return frames;
    }

    let mut in_prologue = true;
    let mut skipped = 0usize;

    backtrace::trace(|raw| {
        // Inlined calls show up as several symbols on one physical frame.
        backtrace::resolve_frame(raw, |symbol| {
            if frames.len() >= max_depth {
                return;
            }
            let name = symbol.name().map(|n| format!("{:#}", n));

            if in_prologue {
                if is_internal(name.as_deref()) {
                    return;
                }
                in_prologue = false;
            }

            if skipped < skip {
                skipped += 1;
                return;
            }

            frames.push(symbol_frame(
                name.as_deref(),
                symbol.filename().map(|p| p.display().to_string()),
                symbol.lineno(),
            ));
        });
        frames.len() < max_depth
    });

    frames
}

/// Frames that belong to the unwinder or to this crate's logging path.
fn is_internal(name: Option<&str>) -> bool {
    let Some(name) = name else {
        // Unnamed frames before the caller are runtime trampolines.
        return true;
    };
    let name = name.trim_start_matches('<');
    if name.starts_with("backtrace::") || name.starts_with("_Unwind") {
        return true;
    }
    // Generic adapters such as `FnMut::call_mut` between the unwinder and us.
    if name.starts_with("core::") || name.starts_with("std::") || name.starts_with("alloc::") {
        return true;
    }
    let crate_prefix = concat!(env!("CARGO_CRATE_NAME"), "::");
    name.starts_with(crate_prefix) && !name.contains("::tests::")
}

/// Build a frame from resolved symbol parts.
///
/// Without a file and a line the symbol name alone is not trusted: in builds
/// without line tables it usually names whatever the caller was inlined into.
fn symbol_frame(name: Option<&str>, file: Option<String>, line: Option<u32>) -> Frame {
    match (file, line) {
        (None, None) => Frame::unknown(),
        (file, line) => Frame {
            file: file.unwrap_or_else(|| UNKNOWN.to_string()),
            line: line.unwrap_or(0),
            function: name.map(short_function_name).unwrap_or(UNKNOWN).to_string(),
        },
    }
}

/// Strip the module path from a demangled symbol, keeping the function name.
///
/// Trailing generic arguments (`get::<String>`) are dropped, the type prefix of
/// `<Type>::method` is ignored, and closure or shim markers (`{{closure}}`,
/// `{closure#0}`, `{shim:vtable#0}`) are folded into their enclosing function
/// so that a call from inside `main`'s closure reports `main`.
pub fn short_function_name(full: &str) -> &str {
    let mut name = full;
    loop {
        let trimmed = strip_trailing_marker(name);
        if trimmed.len() == name.len() {
            break;
        }
        name = trimmed;
    }
    match last_top_level_separator(name) {
        Some(idx) => &name[idx + 2..],
        None => name,
    }
}

/// Remove one trailing `::{...}` marker or `::<...>` argument list.
fn strip_trailing_marker(name: &str) -> &str {
    if name.ends_with('}') {
        if let Some(idx) = name.rfind("::{") {
            return &name[..idx];
        }
        return name;
    }
    if name.ends_with('>') && !name.ends_with("->") {
        if let Some(open) = matching_open_angle(name) {
            if let Some(stripped) = name[..open].strip_suffix("::") {
                return stripped;
            }
        }
    }
    name
}

/// Index of the `<` matching the final `>` of `name`.
fn matching_open_angle(name: &str) -> Option<usize> {
    let bytes = name.as_bytes();
    let mut depth = 0usize;
    for i in (0..bytes.len()).rev() {
        match bytes[i] {
            b'>' if i == 0 || bytes[i - 1] != b'-' => depth += 1,
            b'<' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Byte index of the last `::` outside any `<...>`.
fn last_top_level_separator(name: &str) -> Option<usize> {
    let bytes = name.as_bytes();
    let mut depth = 0usize;
    let mut last = None;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' if i == 0 || bytes[i - 1] != b'-' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                last = Some(i);
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }
    last
}

/// Last path component of `path`, accepting either separator.
pub fn file_name(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Last directory plus file name of `path`.
pub fn short_path(path: &str) -> &str {
    let Some(last) = path.rfind(['/', '\\']) else {
        return path;
    };
    match path[..last].rfind(['/', '\\']) {
        Some(prev) => &path[prev + 1..],
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_function_name() {
        assert_eq!(short_function_name("my_app::handlers::create_user"), "create_user");
        assert_eq!(short_function_name("my_app::main::{{closure}}"), "main");
        assert_eq!(short_function_name("my_app::run::{{closure}}::{{closure}}"), "run");
        assert_eq!(short_function_name("main"), "main");
    }

    #[test]
    fn test_short_function_name_generics_and_markers() {
        assert_eq!(short_function_name("my_app::cache::get::<alloc::string::String>"), "get");
        assert_eq!(short_function_name("<my_app::Svc>::run::<u8>"), "run");
        assert_eq!(short_function_name("my_app::main::{closure#0}"), "main");
        assert_eq!(
            short_function_name("my_app::run::<u8>::{closure#1}::{closure#0}"),
            "run"
        );
        assert_eq!(
            short_function_name("<my_app::Svc as core::fmt::Display>::fmt"),
            "fmt"
        );
        assert_eq!(
            short_function_name("<my_app::Job as core::ops::FnOnce<()>>::call_once::{shim:vtable#0}"),
            "call_once"
        );
        assert_eq!(
            short_function_name("my_app::apply::<fn(u8) -> u8, alloc::vec::Vec<u8>>"),
            "apply"
        );
        assert_eq!(
            short_function_name("std::sys::backtrace::__rust_begin_short_backtrace::<fn(), ()>"),
            "__rust_begin_short_backtrace"
        );
    }

    #[test]
    fn test_symbol_frame_needs_location() {
        assert_eq!(symbol_frame(Some("test::run_test"), None, None), Frame::unknown());

        let frame = symbol_frame(
            Some("my_app::cache::get::<u8>"),
            Some("/src/cache.rs".to_string()),
            Some(9),
        );
        assert_eq!(frame, Frame::new("/src/cache.rs", 9, "get"));

        let frame = symbol_frame(None, Some("/src/cache.rs".to_string()), None);
        assert_eq!(frame, Frame::new("/src/cache.rs", 0, UNKNOWN));
    }

    #[test]
    fn test_paths() {
        assert_eq!(file_name("/a/b/c/d.rs"), "d.rs");
        assert_eq!(file_name("d.rs"), "d.rs");
        assert_eq!(file_name("C:\\src\\lib.rs"), "lib.rs");
        assert_eq!(short_path("/a/b/c/d.rs"), "c/d.rs");
        assert_eq!(short_path("src/lib.rs"), "src/lib.rs");
        assert_eq!(short_path("lib.rs"), "lib.rs");
    }

    #[test]
    fn test_unknown_frame() {
        let frame = Frame::unknown();
        assert!(frame.is_unknown());
        assert_eq!(frame.to_string(), "???:0 (???)");
        assert_eq!(Frame::default(), frame);
    }

    #[test]
    fn test_frame_display() {
        let frame = Frame::new("/src/app/main.rs", 12, "run");
        assert_eq!(frame.to_string(), "/src/app/main.rs:12 (run)");
        assert_eq!(frame.short_path(), "app/main.rs");
        assert_eq!(frame.file_name(), "main.rs");
    }

    #[test]
    fn test_is_internal() {
        assert!(is_internal(None));
        assert!(is_internal(Some("backtrace::backtrace::trace")));
        assert!(is_internal(Some("_Unwind_Backtrace")));
        assert!(is_internal(Some("core::ops::function::FnOnce::call_once")));
        assert!(is_internal(Some("leveled_log::core::logger::Logger::output")));
        assert!(!is_internal(Some("leveled_log::core::frame::tests::test_is_internal")));
        assert!(!is_internal(Some("my_app::main")));
    }

    #[test]
    fn test_resolve_stack_is_bounded() {
        let frames = resolve_stack(0, 3);
        assert!(frames.len() <= 3);
        assert!(resolve_stack(0, 0).is_empty());
    }

    #[test]
    fn test_resolve_caller_never_fails() {
        // Skipping past the top of the stack yields the placeholder.
        let frame = resolve_caller(10_000);
        assert!(frame.is_unknown());
    }

    #[test]
    fn test_resolve_caller_names_this_test() {
        let expected = line!() + 1;
        let frame = resolve_caller(0);
        assert_eq!(frame.function, "test_resolve_caller_names_this_test");
        assert!(frame.file.ends_with("frame.rs"), "file was {}", frame.file);
        assert_eq!(frame.line, expected);
    }
}
