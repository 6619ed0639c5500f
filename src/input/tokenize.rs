use super::InputError;

/// A whitespace-delimited word, after prefix removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    width: i64,
}

impl Token {
    pub fn new(text: &str) -> Self {
        Token {
            width: text.chars().count() as i64,
            text: text.to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Scalar character count; the column cost of this token on a line.
    pub fn width(&self) -> i64 {
        self.width
    }
}

/// Splits prefix-stripped lines into one flat, ordered token sequence.
///
/// A token wider than the usable width means no valid line partition exists
/// at all, so the whole run must abort rather than silently drop the word.
pub fn tokenize(lines: &[String], width: i64) -> Result<Vec<Token>, InputError> {
    let mut tokens = Vec::new();
    for line in lines {
        for word in line.split_whitespace() {
            let token = Token::new(word);
            if token.width() > width {
                return Err(InputError::WordTooLong(word.to_string()));
            }
            tokens.push(token);
        }
    }

    Ok(tokens)
}
