const ELLIPSIS: char = '…';

// shortens text to at most max_chars characters, marking the cut with an
// ellipsis; whitespace runs are collapsed first
pub fn truncate(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut cut: String = collapsed.chars().take(max_chars - 1).collect();
    let trimmed_len = cut.trim_end().len();
    cut.truncate(trimmed_len);
    cut.push(ELLIPSIS);
    cut
}

pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use crate::utils::text::{pluralize, truncate};

    #[tokio::test]
    async fn test_should_keep_short_text() {
        assert_eq!("A desert planet", truncate("A desert planet", 40));
        assert_eq!("A desert planet", truncate("A  desert\n planet", 15));
    }

    #[tokio::test]
    async fn test_should_truncate_long_text() {
        let res = truncate("A desert planet and its spice", 10);
        assert_eq!("A desert…", res);
        assert_eq!(9, res.chars().count());
        assert_eq!("", truncate("anything", 0));
    }

    #[tokio::test]
    async fn test_should_truncate_on_char_boundaries() {
        let res = truncate("ééééé", 3);
        assert_eq!("éé…", res);
    }

    #[tokio::test]
    async fn test_should_pluralize() {
        assert_eq!("1 book", pluralize(1, "book", "books"));
        assert_eq!("0 books", pluralize(0, "book", "books"));
        assert_eq!("3 books", pluralize(3, "book", "books"));
    }
}
