//! Static site content
//!
//! Copy, figures and image URLs rendered by the pages. Kept as plain data so
//! both the server and the browser bundle render identical markup.

pub mod company;
pub mod facilities;
pub mod investor;
pub mod manufacture;
pub mod quality;

/// Heading plus short text, used by feature and highlight cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

/// Figure shown in a stats strip, e.g. `25+ Years Experience`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// Thousands-separated integer, e.g. `138,000`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(138_000), "138,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
