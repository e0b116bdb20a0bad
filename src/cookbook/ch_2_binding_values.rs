use crate::prelude::*;

#[derive(PartialEq, Debug)]
pub struct QuotedText {
    quote: char,
    text: String,
}

impl QuotedText {
    fn new(quote: char, text: &str) -> Self {
        Self {
            quote,
            text: text.to_string(),
        }
    }
}

/// eg "'Hello World!', said Ferris"
///
/// the parser for the text depends on which quote was found, so `bind` is used to build it from
/// the value of the first parser
pub fn quoted_text() -> Parser<QuotedText> {
    char_in("\"'").bind(|quote| {
        let text = many(char_not_in(&quote.to_string())).map(|cs| cs.into_iter().collect());
        followed_by(text, char(quote)).map(move |text: String| QuotedText::new(quote, &text))
    })
}

/// alternative implementation as a block of steps
pub fn quoted_text_v2() -> Parser<QuotedText> {
    sequential("quoted text", |steps| {
        let quote = steps.run(&char_in("\"'"))?;
        let text: Vec<char> = steps.run(&many(char_not_in(&quote.to_string())))?;
        steps.run(&char(quote))?;
        Ok(QuotedText::new(quote, &text.into_iter().collect::<String>()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_quoted_text() -> Result<(), Failure> {
        for p in [quoted_text(), quoted_text_v2()] {
            let (rest, qt) = p.parse("'Hello World!', said Ferris")?.into_parts();
            assert_eq!(qt, QuotedText::new('\'', "Hello World!"));
            assert_eq!(rest, ", said Ferris");

            let (rest, qt) = p.parse("\"Hi\", he said")?.into_parts();
            assert_eq!(qt, QuotedText::new('"', "Hi"));
            assert_eq!(rest, ", he said");

            let (_, qt) = p.parse("\"it's\"")?.into_parts();
            assert_eq!(qt.text, "it's");

            let f = p.parse("'Hi, ").unwrap_err();
            assert_eq!(f.pos, 5);
        }
        Ok(())
    }
}
