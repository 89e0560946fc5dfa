//! Slug normalization.

/// Normalize a title or candidate slug into the stored slug form:
/// lowercase, spaces replaced with underscores, apostrophes removed.
pub fn slugify(input: &str) -> String {
    input.to_lowercase().replace(' ', "_").replace('\'', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_replaces_spaces() {
        assert_eq!(slugify("Classic Tee Shirt"), "classic_tee_shirt");
    }

    #[test]
    fn test_strips_apostrophes() {
        assert_eq!(slugify("Men's Running Shoes"), "mens_running_shoes");
    }

    #[test]
    fn test_leaves_normalized_input_unchanged() {
        assert_eq!(slugify("kids_hoodie"), "kids_hoodie");
    }
}
