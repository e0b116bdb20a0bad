use std::fmt;

use regex::RegexBuilder;

use crate::{
    cursor::Cursor,
    error::{Detail, Failure, GrammarError},
    parser::Parser,
    result::{ParseResult, Success},
    sequence,
};

/// Always fails.
pub fn void<T: 'static>() -> Parser<T> {
    Parser::new("void", |cur| Err(Failure::new("Void parser", cur.point())))
}

/// Always fails, with the given reason.
pub fn fail<T: 'static>(reason: impl Into<String>) -> Parser<T> {
    let reason = reason.into();
    Parser::new(format!("fails({reason})"), move |cur| {
        Err(Failure::new(reason.clone(), cur.point()))
    })
}

/// Succeeds with `x` without consuming anything.
pub fn pure<T: Clone + Send + Sync + 'static>(x: T) -> Parser<T> {
    Parser::new("pure", move |cur| Ok(Success::new(x.clone(), cur)))
}

pub fn end_of_input() -> Parser<bool> {
    Parser::new("eof", |cur| match cur.require(1) {
        Ok(_) => Err(Failure::new("Expected end of input", cur.point())),
        Err(_) => Ok(Success::new(true, cur)),
    })
}

fn one_char(cur: &Cursor<'_>) -> Option<char> {
    cur.require(1).ok().and_then(|s| s.chars().next())
}

fn single<'a>(cur: Cursor<'a>, c: char) -> ParseResult<'a, char> {
    Ok(Success::new(c, cur.advance(c.len_utf8())))
}

pub fn any_char() -> Parser<char> {
    Parser::new("any_char", |cur| match one_char(&cur) {
        Some(c) => single(cur, c),
        None => Err(Failure::new("Expected a character", cur.point())),
    })
}

pub fn char(c: char) -> Parser<char> {
    Parser::new(format!("char({c})"), move |cur| match one_char(&cur) {
        Some(next) if next == c => single(cur, c),
        _ => Err(Failure::new(format!("Expected character {c}"), cur.point())
            .with("expected", Detail::Text(c.to_string()))),
    })
}

pub fn char_in(chars: &str) -> Parser<char> {
    let chars = chars.to_string();
    Parser::new(format!("char_in({chars})"), move |cur| match one_char(&cur) {
        Some(next) if chars.contains(next) => single(cur, next),
        _ => Err(Failure::new(format!("Expected character in [{chars}]"), cur.point())
            .with("expected", Detail::Text(chars.clone()))),
    })
}

pub fn char_not_in(chars: &str) -> Parser<char> {
    let chars = chars.to_string();
    Parser::new(format!("char_not_in({chars})"), move |cur| match one_char(&cur) {
        Some(next) if !chars.contains(next) => single(cur, next),
        _ => Err(
            Failure::new(format!("Expected character not in [{chars}]"), cur.point())
                .with("not expected", Detail::Text(chars.clone())),
        ),
    })
}

pub fn char_satisfies<F>(pred: F, description: &str) -> Parser<char>
where
    F: Fn(char) -> bool + Send + Sync + 'static,
{
    let description = description.to_string();
    Parser::new(format!("char_satisfies({description})"), move |cur| {
        match one_char(&cur) {
            Some(next) if pred(next) => single(cur, next),
            _ => Err(Failure::new(
                format!("Expected character satisfying {description}"),
                cur.point(),
            )),
        }
    })
}

/// Matches `s` exactly.
pub fn literal(s: &str) -> Parser<String> {
    let s = s.to_string();
    let n = s.chars().count();
    Parser::new(format!("string({s})"), move |cur| match cur.require(n) {
        Ok(input) if input == s => Ok(Success::new(s.clone(), cur.advance(input.len()))),
        _ => Err(Failure::new(format!("Expected string {s}"), cur.point())
            .with("expected", Detail::Text(s.clone()))),
    })
}

/// Matches the next `len(s)` characters when `transform` maps them to `s`.
/// The value is the input text as it appeared, before the transform.
pub fn literal_with<F>(s: &str, transform: F, transform_name: &str) -> Parser<String>
where
    F: Fn(&str) -> String + Send + Sync + 'static,
{
    let s = s.to_string();
    let n = s.chars().count();
    Parser::new(format!("string({s}, {transform_name})"), move |cur| {
        match cur.require(n) {
            Ok(input) if transform(input) == s => {
                Ok(Success::new(input.to_string(), cur.advance(input.len())))
            }
            _ => Err(Failure::new(format!("Expected string {s}"), cur.point())
                .with("expected", Detail::Text(s.clone()))),
        }
    })
}

pub fn literal_case_insensitive(s: &str) -> Parser<String> {
    literal_with(&s.to_lowercase(), |input| input.to_lowercase(), "lower")
        .with_label(format!("istring({s})"))
}

/// Matches any one of `choices`, preferring the longest.
pub fn string_in<I, S>(choices: I) -> Parser<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let strs: Vec<String> = choices.into_iter().map(Into::into).collect();
    let mut longest_first = strs.clone();
    longest_first.sort_by_key(|s| std::cmp::Reverse(s.len()));
    let joined = strs.join(", ");
    Parser::new(format!("string_in({joined})"), move |cur| {
        let input = cur.view(None);
        match longest_first.iter().find(|s| input.starts_with(s.as_str())) {
            Some(s) => Ok(Success::new(s.clone(), cur.advance(s.len()))),
            None => Err(Failure::new(format!("Expected one of {joined}"), cur.point())
                .with("expected", Detail::Texts(strs.clone()))),
        }
    })
}

pub fn strings(choices: &[&str]) -> Parser<String> {
    string_in(choices.iter().copied()).with_label(format!("strings({})", choices.join(", ")))
}

fn run_of<'a>(
    cur: Cursor<'a>,
    pred: fn(char) -> bool,
    expected: &str,
) -> ParseResult<'a, String> {
    let len: usize = cur
        .view(None)
        .chars()
        .take_while(|c| pred(*c))
        .map(|c| c.len_utf8())
        .sum();
    if len == 0 {
        return Err(Failure::new(format!("Expected {expected}"), cur.point()));
    }
    let next = cur.advance(len);
    Ok(Success::new(cur.view(None)[..len].to_string(), next))
}

fn is_vertical(c: char) -> bool {
    matches!(
        c,
        '\n' | '\u{0b}' | '\u{0c}' | '\r' | '\u{2028}' | '\u{2029}'
    )
}

/// One or more whitespace characters.
pub fn space() -> Parser<String> {
    Parser::new("whitespace", |cur| run_of(cur, char::is_whitespace, "whitespace"))
}

/// One or more whitespace characters that do not end a line.
pub fn hspace() -> Parser<String> {
    Parser::new("horizontal-space", |cur| {
        run_of(cur, |c| c.is_whitespace() && !is_vertical(c), "horizontal space")
    })
}

/// One or more line-ending characters.
pub fn vspace() -> Parser<String> {
    Parser::new("vertical-space", |cur| run_of(cur, is_vertical, "vertical space"))
}

/// `s` followed by whitespace, keeping `s`.
pub fn symbol(s: &str) -> Parser<String> {
    symbol_with(s, space())
}

/// `s` followed by whatever `spacep` accepts, keeping `s`.
pub fn symbol_with<S: 'static>(s: &str, spacep: Parser<S>) -> Parser<String> {
    sequence::followed_by(literal(s), spacep)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegexFlags {
    pub case_insensitive: bool,
    pub multi_line: bool,
    pub dot_matches_new_line: bool,
    pub ignore_whitespace: bool,
}

impl RegexFlags {
    pub fn ignore_case() -> Self {
        Self {
            case_insensitive: true,
            ..Self::default()
        }
    }
}

impl fmt::Display for RegexFlags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (set, letter) in [
            (self.case_insensitive, 'i'),
            (self.multi_line, 'm'),
            (self.dot_matches_new_line, 's'),
            (self.ignore_whitespace, 'x'),
        ] {
            if set {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

/// Matches `pattern` at the current point.
///
/// The value is the text of capture `group` (0 for the whole match, empty if
/// the group took no part in the match) but the cursor always moves over the
/// whole match. A leading `^` is redundant and ignored.
pub fn regex_match(
    pattern: &str,
    flags: RegexFlags,
    group: usize,
) -> Result<Parser<String>, GrammarError> {
    let pattern = pattern.strip_prefix('^').unwrap_or(pattern).to_string();
    let build = |source: &str| {
        RegexBuilder::new(source)
            .case_insensitive(flags.case_insensitive)
            .multi_line(flags.multi_line)
            .dot_matches_new_line(flags.dot_matches_new_line)
            .ignore_whitespace(flags.ignore_whitespace)
            .build()
    };
    // the bare pattern must stand alone, so it cannot close the anchoring group early
    build(&pattern)?;
    // in x-mode the newline ends a trailing comment and is otherwise ignored
    let eol = if flags.ignore_whitespace { "\n" } else { "" };
    let re = build(&format!(r"\A(?:{pattern}{eol})"))?;
    if group >= re.captures_len() {
        return Err(GrammarError::Group {
            group,
            groups: re.captures_len() - 1,
        });
    }

    Ok(Parser::new(
        format!("regex(/{pattern}/{flags}[{group}])"),
        move |cur| {
            let input = cur.view(None);
            let matched = if group == 0 {
                re.find(input).map(|m| (m.as_str(), m.end()))
            } else {
                re.captures(input).map(|caps| {
                    let whole = caps.get(0).map_or(0, |m| m.end());
                    let value = caps.get(group).map_or("", |m| m.as_str());
                    (value, whole)
                })
            };
            match matched {
                Some((value, consumed)) => {
                    Ok(Success::new(value.to_string(), cur.advance(consumed)))
                }
                None => Err(Failure::new(
                    format!("Expected match of regex /{pattern}/ with flags {flags}"),
                    cur.point(),
                )
                .with("pattern", Detail::Text(pattern.clone()))
                .with("flags", Detail::Text(flags.to_string()))
                .with("group", Detail::Number(group))),
            }
        },
    ))
}

/// [`regex_match`] with default flags, yielding the whole match.
pub fn regex(pattern: &str) -> Result<Parser<String>, GrammarError> {
    regex_match(pattern, RegexFlags::default(), 0)
}

/// Matches text balanced with respect to `opening` and `closing`.
///
/// The value is the balanced text together with the offset of every
/// delimiter, relative to the starting point, positive for an opening and
/// negative for a closing. With `seen_opening` the opening delimiter is taken
/// as already consumed and the match runs up to and including the closing
/// delimiter that balances it.
pub fn balanced_delimiters(
    opening: &str,
    closing: &str,
    seen_opening: bool,
) -> Result<Parser<(String, Vec<isize>)>, GrammarError> {
    if opening.is_empty() || closing.is_empty() || opening == closing {
        return Err(GrammarError::Delimiters {
            opening: opening.to_string(),
            closing: closing.to_string(),
        });
    }
    let (opening, closing) = (opening.to_string(), closing.to_string());

    Ok(Parser::new(
        format!("balanced(\"{opening}\", \"{closing}\")"),
        move |cur| {
            let input = cur.view(None);
            let n = input.len();
            let needed = if seen_opening {
                closing.len()
            } else {
                opening.len() + closing.len()
            };
            if n < needed {
                return Err(Failure::new(
                    format!("Expected balanced delimiters {opening}..{closing}: insufficient input."),
                    cur.point(),
                ));
            }
            if !seen_opening && !input.starts_with(opening.as_str()) {
                return Err(Failure::new(
                    format!("Expected balanced delimiters {opening}..{closing}: missing {opening}."),
                    cur.point(),
                ));
            }

            let mut index = if seen_opening { 0 } else { opening.len() };
            let mut count = 1_usize;
            let mut positions: Vec<isize> = if seen_opening { vec![] } else { vec![0] };
            while count > 0 && index < n {
                let rest = &input[index..];
                if rest.starts_with(opening.as_str()) {
                    count += 1;
                    positions.push(index as isize);
                    index += opening.len();
                } else if rest.starts_with(closing.as_str()) {
                    count -= 1;
                    positions.push(-(index as isize));
                    index += closing.len();
                } else {
                    index += rest.chars().next().map_or(1, |c| c.len_utf8());
                }
            }
            if count != 0 {
                return Err(Failure::new(
                    format!("Expected balanced delimiters {opening}..{closing}"),
                    cur.point(),
                ));
            }
            Ok(Success::new(
                (input[..index].to_string(), positions),
                cur.advance(index),
            ))
        },
    ))
}

/// Matches the name of any variant of `E`, longest name first.
#[cfg(feature = "strum")]
pub fn enum_variant<E>() -> Parser<E>
where
    E: strum::VariantNames + std::str::FromStr + 'static,
{
    let name = crate::util::type_suffix(std::any::type_name::<E>()).to_string();
    let variants = string_in(E::VARIANTS.iter().copied());
    Parser::new(format!("enum({name})"), move |cur| {
        let found = variants.run(cur)?;
        match E::from_str(&found.value) {
            Ok(e) => Ok(Success::new(e, found.cursor)),
            Err(_) => Err(Failure::new(
                format!("{v} is not a variant of {name}", v = found.value),
                cur.point(),
            )),
        }
    })
}
