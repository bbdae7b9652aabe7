//! Text boxes: measuring and wrapping lists of lines.

/// Width of a box, in characters.
pub fn width(lines: &[String]) -> usize {
    lines.iter().map(|line| line.chars().count()).max().unwrap_or(0)
}

pub fn height(lines: &[String]) -> usize {
    lines.len()
}

/// Split lines longer than `max_width` into continuation lines.
///
/// Splitting counts characters, not bytes. Empty lines are kept. A zero
/// width leaves the box untouched.
///
/// # Example
///
/// ```rust
/// use assist::ui::text::wrap;
///
/// let lines = vec!["abcdef".to_string(), String::new(), "gh".to_string()];
/// assert_eq!(wrap(&lines, 4), vec!["abcd", "ef", "", "gh"]);
/// ```
pub fn wrap(lines: &[String], max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return lines.to_vec();
    }
    let mut wrapped = Vec::with_capacity(lines.len());
    for line in lines {
        let chars: Vec<char> = line.chars().collect();
        if chars.is_empty() {
            wrapped.push(String::new());
            continue;
        }
        wrapped.extend(chars.chunks(max_width).map(|chunk| chunk.iter().collect::<String>()));
    }
    wrapped
}
