use crate::application::ports::util::SlugGenerator;

/// Lowercases, collapses every run of characters outside `[a-z0-9]` into one
/// hyphen and trims hyphens from both ends.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let mut slug = String::with_capacity(input.len());
        let mut pending_hyphen = false;

        for ch in input.chars().flat_map(char::to_lowercase) {
            if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
                if pending_hyphen && !slug.is_empty() {
                    slug.push('-');
                }
                pending_hyphen = false;
                slug.push(ch);
            } else {
                pending_hyphen = true;
            }
        }

        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slug(input: &str) -> String {
        DefaultSlugGenerator.slugify(input)
    }

    #[test]
    fn punctuation_runs_collapse() {
        assert_eq!(slug("Hello, World!"), "hello-world");
        assert_eq!(slug("Hello, World! (Copy)"), "hello-world-copy");
        assert_eq!(slug("  --About   Us--  "), "about-us");
    }

    #[test]
    fn digits_are_kept() {
        assert_eq!(slug("Top 10 Tips"), "top-10-tips");
    }

    #[test]
    fn non_ascii_letters_act_as_separators() {
        assert_eq!(slug("Café Crème"), "caf-cr-me");
        assert_eq!(slug("日本語"), "");
    }

    #[test]
    fn empty_input_gives_empty_slug() {
        assert_eq!(slug(""), "");
        assert_eq!(slug("!!!"), "");
    }
}
