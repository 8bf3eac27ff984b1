/*!
render.rs

Terminal rendering of `&x` colour tags.

Command output carries two-character tags (`&a`, `&b`, `&c`, ...) that the
tree never interprets. This module turns them into ANSI escapes for a
terminal, or strips them when colour is disabled.

Tag table:
  &0..&9, &a..&f   16 colours (classic palette order)
  &l               bold
  &n               underline
  &o               italic
  &r               reset

Unknown tags and a trailing `&` are passed through untouched.

Style decision:
  - NO_COLOR env set  -> plain (tags stripped)
  - `--plain` flag    -> plain (see main.rs)
*/

/* -------------------------------------------------------------------------- */
/* Style Options                                                              */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Clone)]
pub struct StyleOptions {
    pub use_color: bool,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self::detect()
    }
}

impl StyleOptions {
    pub fn detect() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some();
        StyleOptions {
            use_color: !no_color,
        }
    }

    pub fn plain() -> Self {
        StyleOptions { use_color: false }
    }
}

/* -------------------------------------------------------------------------- */
/* Tags                                                                       */
/* -------------------------------------------------------------------------- */

const RESET: &str = "\x1b[0m";

fn ansi_code(tag: char) -> Option<&'static str> {
    let code = match tag.to_ascii_lowercase() {
        '0' => "30",       // black
        '1' => "34",       // dark blue
        '2' => "32",       // dark green
        '3' => "36",       // dark aqua
        '4' => "31",       // dark red
        '5' => "35",       // dark purple
        '6' => "33",       // gold
        '7' => "37",       // gray
        '8' => "90",       // dark gray
        '9' => "94",       // blue
        'a' => "92",       // green
        'b' => "96",       // aqua
        'c' => "91",       // red
        'd' => "95",       // light purple
        'e' => "93",       // yellow
        'f' => "97",       // white
        'l' => "1",
        'n' => "4",
        'o' => "3",
        'r' => "0",
        _ => return None,
    };
    Some(code)
}

/// Render tags as ANSI (or strip them when colour is off).
pub fn render(text: &str, style: &StyleOptions) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut chars = text.chars().peekable();
    let mut styled = false;

    while let Some(c) = chars.next() {
        if c == '&'
            && let Some(&tag) = chars.peek()
            && let Some(code) = ansi_code(tag)
        {
            chars.next();
            if style.use_color {
                out.push_str(&format!("\x1b[{code}m"));
                styled = code != "0";
            }
            continue;
        }
        out.push(c);
    }

    if styled {
        out.push_str(RESET);
    }
    out
}

/// Remove every recognised tag.
pub fn strip_tags(text: &str) -> String {
    render(text, &StyleOptions::plain())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color() -> StyleOptions {
        StyleOptions { use_color: true }
    }

    #[test]
    fn strips_known_tags() {
        assert_eq!(strip_tags("&aHello &bworld&r!"), "Hello world!");
        assert_eq!(strip_tags("&A&B"), "", "tags are case-insensitive");
    }

    #[test]
    fn leaves_unknown_and_trailing_ampersands() {
        assert_eq!(strip_tags("a & b &z c&"), "a & b &z c&");
    }

    #[test]
    fn renders_ansi_and_resets_at_end() {
        assert_eq!(render("&apong", &color()), "\x1b[92mpong\x1b[0m");
        assert_eq!(
            render("&lx&r", &color()),
            "\x1b[1mx\x1b[0m",
            "explicit reset is not doubled"
        );
        assert_eq!(render("plain", &color()), "plain");
    }

    #[test]
    fn plain_style_matches_strip() {
        let s = "&c--- &b/root commands &c---";
        assert_eq!(render(s, &StyleOptions::plain()), strip_tags(s));
    }
}
