//! Extraction of ingredient tokens from the raw `ingredients` column.
//!
//! The column holds either a serialized list literal such as
//! `['soy sauce', "rice"]` or a plain comma-separated string. Parsing is two
//! staged: the structured form is attempted first and the comma split is the
//! fallback. Callers get an explicit [`IngredientParse::Unparsable`] instead
//! of an error and decide for themselves whether to skip the recipe.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngredientParse {
    Parsed(Vec<String>),
    Unparsable,
}

pub fn parse_ingredients(text: &str) -> IngredientParse {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return IngredientParse::Unparsable;
    }

    if let Some(tokens) = parse_list_literal(trimmed) {
        return IngredientParse::Parsed(tokens);
    }

    split_ingredients(trimmed)
}

/// Comma split only: no list-literal handling, so brackets and quotes stay
/// attached to the outer tokens. Blank text is `Unparsable`.
pub fn split_ingredients(text: &str) -> IngredientParse {
    let tokens: Vec<String> = text
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect();

    if tokens.is_empty() {
        IngredientParse::Unparsable
    } else {
        IngredientParse::Parsed(tokens)
    }
}

/// Trim and lower-case a user- or catalog-supplied token.
pub fn normalize_token(token: &str) -> String {
    token.trim().to_lowercase()
}

/// Parse `[ 'a', "b", ... ]`. Every element must be a quoted string; a
/// trailing comma is accepted. Returns `None` on anything else.
fn parse_list_literal(text: &str) -> Option<Vec<String>> {
    let inner = text.strip_prefix('[')?.strip_suffix(']')?;
    let mut chars = inner.chars().peekable();
    let mut items = Vec::new();

    loop {
        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }

        let quote = match chars.next() {
            None => break,
            Some(q @ ('\'' | '"')) => q,
            Some(_) => return None,
        };

        let mut item = String::new();
        loop {
            match chars.next()? {
                '\\' => item.push(chars.next()?),
                c if c == quote => break,
                c => item.push(c),
            }
        }
        items.push(item.trim().to_string());

        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }
        match chars.next() {
            None => break,
            Some(',') => continue,
            Some(_) => return None,
        }
    }

    Some(items.into_iter().filter(|item| !item.is_empty()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(tokens: &[&str]) -> IngredientParse {
        IngredientParse::Parsed(tokens.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn test_comma_separated() {
        assert_eq!(
            parse_ingredients("chicken,  rice , garlic"),
            parsed(&["chicken", "rice", "garlic"])
        );
    }

    #[test]
    fn test_list_literal_single_quotes() {
        assert_eq!(
            parse_ingredients("['tofu', 'rice', 'soy sauce']"),
            parsed(&["tofu", "rice", "soy sauce"])
        );
    }

    #[test]
    fn test_list_literal_mixed_quotes_and_escapes() {
        assert_eq!(
            parse_ingredients(r#"[ "chef's salt", 'it\'s pepper', ]"#),
            parsed(&["chef's salt", "it's pepper"])
        );
    }

    #[test]
    fn test_list_literal_keeps_commas_inside_items() {
        assert_eq!(
            parse_ingredients("['tomatoes, diced', 'basil']"),
            parsed(&["tomatoes, diced", "basil"])
        );
    }

    #[test]
    fn test_malformed_literal_falls_back_to_split() {
        assert_eq!(
            parse_ingredients("['chicken', rice]"),
            parsed(&["['chicken'", "rice]"])
        );
    }

    #[test]
    fn test_empty_list_literal_parses_to_nothing() {
        assert_eq!(parse_ingredients("[]"), parsed(&[]));
    }

    #[test]
    fn test_blank_is_unparsable() {
        assert_eq!(parse_ingredients(""), IngredientParse::Unparsable);
        assert_eq!(parse_ingredients("   "), IngredientParse::Unparsable);
        assert_eq!(parse_ingredients(" , ,"), IngredientParse::Unparsable);
    }

    #[test]
    fn test_split_keeps_literal_punctuation() {
        assert_eq!(
            split_ingredients("['tofu', 'soy sauce']"),
            parsed(&["['tofu'", "'soy sauce']"])
        );
        assert_eq!(split_ingredients(" , "), IngredientParse::Unparsable);
    }

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token("  Soy Sauce "), "soy sauce");
    }
}
