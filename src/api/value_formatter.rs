//! Number formatting for the target label and tooltips.
//!
//! Understands the common subset of host format strings: up to three
//! `;`-separated sections (positive, negative, zero), `0`/`#` digit
//! placeholders, `,` grouping and thousands scaling, `%`, quoted or
//! backslash-escaped literals. An empty format string uses general formatting.

use num_format::{Locale, ToFormattedString};
use smallvec::SmallVec;

#[derive(Debug, Clone, PartialEq)]
struct FormatSection {
    prefix: String,
    suffix: String,
    has_number: bool,
    min_integer_digits: usize,
    min_decimals: usize,
    max_decimals: usize,
    grouping: bool,
    percent: bool,
    thousands_scale: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Literal(char),
    Digit(char),
    Comma,
    Point,
    Percent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValueFormatter {
    sections: SmallVec<[FormatSection; 3]>,
}

impl ValueFormatter {
    #[must_use]
    pub fn parse(format_string: &str) -> Self {
        if format_string.trim().is_empty() {
            return Self {
                sections: SmallVec::new(),
            };
        }
        let sections = split_sections(format_string)
            .into_iter()
            .take(3)
            .map(|section| parse_section(&tokenize(&section)))
            .collect();
        Self { sections }
    }

    #[must_use]
    pub fn is_general(&self) -> bool {
        self.sections.is_empty()
    }

    #[must_use]
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let Some(positive) = self.sections.first() else {
            return format_general(value);
        };

        match (self.sections.get(1), self.sections.get(2)) {
            (Some(negative), _) if value < 0.0 => negative.render(value.abs()),
            (Some(_), Some(zero)) if value == 0.0 => zero.render(0.0),
            _ if value < 0.0 => {
                let body = positive.render(value.abs());
                if positive.rounds_to_zero(value.abs()) {
                    body
                } else {
                    format!("-{body}")
                }
            }
            _ => positive.render(value),
        }
    }
}

impl Default for ValueFormatter {
    fn default() -> Self {
        Self::parse("")
    }
}

impl FormatSection {
    fn scaled(&self, magnitude: f64) -> f64 {
        let percent = if self.percent { 100.0 } else { 1.0 };
        magnitude * percent / 1000_f64.powi(self.thousands_scale)
    }

    fn rounds_to_zero(&self, magnitude: f64) -> bool {
        if !self.has_number {
            return true;
        }
        let factor = 10_f64.powi(self.max_decimals as i32);
        (self.scaled(magnitude) * factor).round() == 0.0
    }

    fn render(&self, magnitude: f64) -> String {
        if !self.has_number {
            return format!("{}{}", self.prefix, self.suffix);
        }

        let fixed = format!("{:.*}", self.max_decimals, self.scaled(magnitude));
        let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

        let mut fraction = fraction.to_owned();
        while fraction.len() > self.min_decimals && fraction.ends_with('0') {
            fraction.pop();
        }

        let integer = if integer == "0" && self.min_integer_digits == 0 {
            String::new()
        } else if self.grouping {
            let mut grouped = integer
                .parse::<u128>()
                .map(|digits| digits.to_formatted_string(&Locale::en))
                .unwrap_or_else(|_| integer.to_owned());
            // Leading zeros are grouped like significant digits.
            for width in integer.len()..self.min_integer_digits {
                if width % 3 == 0 {
                    grouped.insert_str(0, Locale::en.separator());
                }
                grouped.insert(0, '0');
            }
            grouped
        } else {
            format!("{integer:0>width$}", width = self.min_integer_digits)
        };

        let mut out = String::with_capacity(self.prefix.len() + integer.len() + fraction.len() + 4);
        out.push_str(&self.prefix);
        out.push_str(&integer);
        if !fraction.is_empty() {
            out.push('.');
            out.push_str(&fraction);
        }
        out.push_str(&self.suffix);
        out
    }
}

fn split_sections(format_string: &str) -> Vec<String> {
    let mut sections = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut escaped = false;
    for ch in format_string.chars() {
        if escaped {
            escaped = false;
        } else if ch == '\\' && !in_quotes {
            escaped = true;
        } else if ch == '"' {
            in_quotes = !in_quotes;
        } else if ch == ';' && !in_quotes {
            sections.push(std::mem::take(&mut current));
            continue;
        }
        current.push(ch);
    }
    sections.push(current);
    sections
}

fn tokenize(section: &str) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(section.len());
    let mut chars = section.chars();
    let mut in_quotes = false;
    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                in_quotes = false;
            } else {
                tokens.push(Token::Literal(ch));
            }
            continue;
        }
        match ch {
            '"' => in_quotes = true,
            '\\' => {
                if let Some(next) = chars.next() {
                    tokens.push(Token::Literal(next));
                }
            }
            '0' | '#' => tokens.push(Token::Digit(ch)),
            ',' => tokens.push(Token::Comma),
            '.' => tokens.push(Token::Point),
            '%' => tokens.push(Token::Percent),
            other => tokens.push(Token::Literal(other)),
        }
    }
    tokens
}

fn parse_section(tokens: &[Token]) -> FormatSection {
    let percent = tokens.contains(&Token::Percent);
    let first_digit = tokens.iter().position(|t| matches!(t, Token::Digit(_)));
    let last_digit = tokens.iter().rposition(|t| matches!(t, Token::Digit(_)));

    let (Some(first_digit), Some(last_digit)) = (first_digit, last_digit) else {
        return FormatSection {
            prefix: render_literals(tokens),
            suffix: String::new(),
            has_number: false,
            min_integer_digits: 0,
            min_decimals: 0,
            max_decimals: 0,
            grouping: false,
            percent,
            thousands_scale: 0,
        };
    };

    // A point directly before the first digit (".00") belongs to the number.
    let start = if first_digit > 0 && tokens[first_digit - 1] == Token::Point {
        first_digit - 1
    } else {
        first_digit
    };
    let mut end = last_digit + 1;
    while end < tokens.len() && tokens[end] == Token::Comma {
        end += 1;
    }
    let end_commas = end - (last_digit + 1);

    let number = &tokens[start..=last_digit];
    let point = number.iter().position(|t| *t == Token::Point);
    let (integer, fraction) = match point {
        Some(index) => (&number[..index], &number[index + 1..]),
        None => (number, &number[number.len()..]),
    };

    // Commas right of the last integer digit scale by 1000 each instead of grouping.
    let integer_trailing_commas = integer
        .iter()
        .rev()
        .take_while(|t| **t == Token::Comma)
        .count();
    let grouping = integer[..integer.len() - integer_trailing_commas].contains(&Token::Comma);
    let trailing_commas = integer_trailing_commas + end_commas;

    FormatSection {
        prefix: render_literals(&tokens[..start]),
        suffix: render_literals(&tokens[end..]),
        has_number: true,
        min_integer_digits: integer
            .iter()
            .filter(|t| **t == Token::Digit('0'))
            .count(),
        min_decimals: fraction
            .iter()
            .filter(|t| **t == Token::Digit('0'))
            .count(),
        max_decimals: fraction
            .iter()
            .filter(|t| matches!(t, Token::Digit(_)))
            .count(),
        grouping,
        percent,
        thousands_scale: trailing_commas as i32,
    }
}

fn render_literals(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| match token {
            Token::Literal(ch) | Token::Digit(ch) => *ch,
            Token::Comma => ',',
            Token::Point => '.',
            Token::Percent => '%',
        })
        .collect()
}

fn format_general(value: f64) -> String {
    let fixed = format!("{value:.10}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}
