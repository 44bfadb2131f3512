//! Pure POSIX-style path string operations.
//!
//! These functions reproduce the host path library's lexical semantics —
//! trailing-separator preservation in `normalize`, `..` accumulation above
//! the root for relative paths, `dirname`'s double-slash root case,
//! `extname`'s dotfile rules — without ever touching a filesystem. One
//! departure: [`resolve`] never falls back to the process working
//! directory, so a fully-relative input resolves to a relative path.

/// Collapses `.`/`..`/empty segments of `path`.
///
/// With `allow_above_root`, unmatched `..` segments accumulate at the
/// front; otherwise they are dropped. The result carries no leading or
/// trailing separator.
fn normalize_parts(path: &str, allow_above_root: bool) -> Vec<&str> {
    let mut parts: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if parts.last().copied() == Some("..") {
                    parts.push("..");
                } else if parts.is_empty() {
                    if allow_above_root {
                        parts.push("..");
                    }
                } else {
                    parts.pop();
                }
            }
            _ => parts.push(segment),
        }
    }
    parts
}

/// Normalizes a path, resolving `.` and `..` segments and collapsing
/// repeated separators. A trailing separator is preserved; an empty input
/// normalizes to `.`.
#[must_use]
pub fn normalize(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }
    let is_absolute = path.starts_with('/');
    let trailing_separator = path.ends_with('/');

    let normalized = normalize_parts(path, !is_absolute).join("/");
    if normalized.is_empty() {
        if is_absolute {
            return "/".to_string();
        }
        return if trailing_separator { "./" } else { "." }.to_string();
    }

    let mut out = String::with_capacity(normalized.len() + 2);
    if is_absolute {
        out.push('/');
    }
    out.push_str(&normalized);
    if trailing_separator {
        out.push('/');
    }
    out
}

/// Joins the given parts with `/` and normalizes the result. All-empty
/// input joins to `.`.
#[must_use]
pub fn join(parts: &[&str]) -> String {
    let mut joined: Option<String> = None;
    for part in parts {
        if !part.is_empty() {
            match joined.as_mut() {
                Some(acc) => {
                    acc.push('/');
                    acc.push_str(part);
                }
                None => joined = Some((*part).to_string()),
            }
        }
    }
    match joined {
        Some(acc) => normalize(&acc),
        None => ".".to_string(),
    }
}

/// Resolves the given parts right to left into a single path: the
/// rightmost absolute part wins and everything after it accumulates on
/// top. The result never keeps a trailing separator.
///
/// Unlike the usual library call there is no working-directory fallback:
/// when no part is absolute the result is simply relative (or `.` when
/// empty).
#[must_use]
pub fn resolve(parts: &[&str]) -> String {
    let mut resolved = String::new();
    let mut absolute = false;
    for part in parts.iter().rev() {
        if part.is_empty() {
            continue;
        }
        resolved = format!("{part}/{resolved}");
        if part.starts_with('/') {
            absolute = true;
            break;
        }
    }

    let normalized = normalize_parts(&resolved, !absolute).join("/");
    if absolute {
        format!("/{normalized}")
    } else if normalized.is_empty() {
        ".".to_string()
    } else {
        normalized
    }
}

/// Returns the directory portion of `path`.
///
/// Trailing separators are ignored; a path with no directory component
/// yields `.`, and the roots `/` and `//` are preserved.
#[must_use]
pub fn dirname(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }
    let bytes = path.as_bytes();
    let has_root = bytes[0] == b'/';
    let mut end = None;
    let mut matched_slash = true;
    for i in (1..bytes.len()).rev() {
        if bytes[i] == b'/' {
            if !matched_slash {
                end = Some(i);
                break;
            }
        } else {
            matched_slash = false;
        }
    }
    match end {
        None => {
            if has_root {
                "/"
            } else {
                "."
            }
        }
        Some(1) if has_root => "//",
        Some(end) => &path[..end],
    }
}

/// Returns the last portion of `path`, ignoring trailing separators.
#[must_use]
pub fn basename(path: &str) -> &str {
    let bytes = path.as_bytes();
    let mut start = 0;
    let mut end = None;
    let mut matched_slash = true;
    for i in (0..bytes.len()).rev() {
        if bytes[i] == b'/' {
            if !matched_slash {
                start = i + 1;
                break;
            }
        } else if end.is_none() {
            matched_slash = false;
            end = Some(i + 1);
        }
    }
    match end {
        Some(end) => &path[start..end],
        None => "",
    }
}

/// Returns the extension of `path`, from the last `.` of the final
/// segment to its end. Dotfiles and a segment's leading dots carry no
/// extension.
#[must_use]
pub fn extname(path: &str) -> &str {
    let bytes = path.as_bytes();
    let mut start_dot: Option<usize> = None;
    let mut start_part = 0;
    let mut end: Option<usize> = None;
    let mut matched_slash = true;
    // Drives the dotfile and all-dots exclusions below.
    let mut pre_dot_state = 0_i8;

    for i in (0..bytes.len()).rev() {
        let code = bytes[i];
        if code == b'/' {
            if !matched_slash {
                start_part = i + 1;
                break;
            }
            continue;
        }
        if end.is_none() {
            matched_slash = false;
            end = Some(i + 1);
        }
        if code == b'.' {
            if start_dot.is_none() {
                start_dot = Some(i);
            } else if pre_dot_state != 1 {
                pre_dot_state = 1;
            }
        } else if start_dot.is_some() {
            pre_dot_state = -1;
        }
    }

    match (start_dot, end) {
        (Some(start_dot), Some(end)) => {
            if pre_dot_state == 0
                || (pre_dot_state == 1 && start_dot == end - 1 && start_dot == start_part + 1)
            {
                ""
            } else {
                &path[start_dot..end]
            }
        }
        _ => "",
    }
}
