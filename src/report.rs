//! Plain-text rendering of contact listings for diagnostics.
//!
//! One line per contact, in the [`Contact`] display format (name, three
//! spaces, phone). Used by the directory's `display_*` operations; also
//! handy for callers assembling their own dumps.

use crate::contact::Contact;

/// One line per contact, in iteration order.
pub fn render_lines<'a>(contacts: impl IntoIterator<Item = &'a Contact>) -> Vec<String> {
    contacts.into_iter().map(Contact::to_string).collect()
}

/// The full listing as one newline-joined string.
pub fn render<'a>(contacts: impl IntoIterator<Item = &'a Contact>) -> String {
    render_lines(contacts).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lines() {
        let contacts = vec![
            Contact::new("Harry", "04 22179380"),
            Contact::new("Jack", "04 22189900"),
        ];
        let lines = render_lines(&contacts);
        assert_eq!(lines, vec!["Harry   04 22179380", "Jack   04 22189900"]);
    }

    #[test]
    fn test_render_joins_with_newlines() {
        let contacts = vec![
            Contact::new("Harry", "04 22179380"),
            Contact::new("Jack", "04 22189900"),
        ];
        assert_eq!(
            render(&contacts),
            "Harry   04 22179380\nJack   04 22189900"
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]), "");
        assert!(render_lines(&[]).is_empty());
    }
}
