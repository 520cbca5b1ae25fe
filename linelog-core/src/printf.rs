//! `printf`-compatible message rendering with runtime-checked arguments.
//!
//! The format string is parsed into literal and conversion fragments, then
//! every conversion is matched against a tagged [`Arg`]. A conversion that
//! does not fit its argument, or an argument count that does not match the
//! number of conversions, is reported as a [`FormatError`] instead of being
//! rendered.
//!
//! ```
//! use linelog::printf::sprintf;
//!
//! let line = sprintf("Unable to create renderer: %s", &["Unsupported renderer flag.".into()]);
//! assert_eq!(line.unwrap(), "Unable to create renderer: Unsupported renderer flag.");
//! ```

use nom::{
    branch::alt,
    bytes::complete::{tag, take_till1, take_while},
    character::complete::{anychar, digit0, digit1},
    combinator::{map, map_opt, map_res, opt},
    multi::many0,
    sequence::preceded,
    IResult, Parser,
};
use thiserror::Error;

/// One runtime-tagged `printf` argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arg<'a> {
    Int(i64),
    Uint(u64),
    Float(f64),
    Char(char),
    Str(&'a str),
}

impl Arg<'_> {
    fn kind(&self) -> &'static str {
        match self {
            Arg::Int(_) => "a signed integer",
            Arg::Uint(_) => "an unsigned integer",
            Arg::Float(_) => "a float",
            Arg::Char(_) => "a char",
            Arg::Str(_) => "a string",
        }
    }
}

macro_rules! arg_from {
    ($variant:ident as $target:ty: $($source:ty),*) => {
        $(
            impl From<$source> for Arg<'_> {
                fn from(value: $source) -> Self {
                    Arg::$variant(value as $target)
                }
            }
        )*
    };
}

arg_from!(Int as i64: i8, i16, i32, i64, isize);
arg_from!(Uint as u64: u8, u16, u32, u64, usize);
arg_from!(Float as f64: f32, f64);

impl From<char> for Arg<'_> {
    fn from(value: char) -> Self {
        Arg::Char(value)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Arg::Str(value)
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(value: &'a String) -> Self {
        Arg::Str(value.as_str())
    }
}

/// Mismatch between a format string and its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("invalid conversion specification at byte {offset}")]
    InvalidSpec { offset: usize },

    #[error("format string expects {expected} argument(s), {given} given")]
    ArgumentCount { expected: usize, given: usize },

    #[error("argument {index} is {found}, but %{conversion} expects {expected}")]
    ArgumentType {
        index: usize,
        conversion: char,
        expected: &'static str,
        found: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conversion {
    Signed(char),
    Unsigned,
    Octal,
    Hex { upper: bool },
    Char,
    Str,
    Fixed { upper: bool },
    Exponent { upper: bool },
    General { upper: bool },
}

impl Conversion {
    fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'd' | 'i' => Conversion::Signed(c),
            'u' => Conversion::Unsigned,
            'o' => Conversion::Octal,
            'x' => Conversion::Hex { upper: false },
            'X' => Conversion::Hex { upper: true },
            'c' => Conversion::Char,
            's' => Conversion::Str,
            'f' => Conversion::Fixed { upper: false },
            'F' => Conversion::Fixed { upper: true },
            'e' => Conversion::Exponent { upper: false },
            'E' => Conversion::Exponent { upper: true },
            'g' => Conversion::General { upper: false },
            'G' => Conversion::General { upper: true },
            _ => return None,
        })
    }

    fn letter(self) -> char {
        match self {
            Conversion::Signed(c) => c,
            Conversion::Unsigned => 'u',
            Conversion::Octal => 'o',
            Conversion::Hex { upper } => if upper { 'X' } else { 'x' },
            Conversion::Char => 'c',
            Conversion::Str => 's',
            Conversion::Fixed { upper } => if upper { 'F' } else { 'f' },
            Conversion::Exponent { upper } => if upper { 'E' } else { 'e' },
            Conversion::General { upper } => if upper { 'G' } else { 'g' },
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Flags {
    left: bool,
    plus: bool,
    space: bool,
    alternate: bool,
    zero: bool,
}

impl From<&str> for Flags {
    fn from(set: &str) -> Self {
        Self {
            left: set.contains('-'),
            plus: set.contains('+'),
            space: set.contains(' '),
            alternate: set.contains('#'),
            zero: set.contains('0'),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Spec {
    flags: Flags,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: Conversion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fragment<'a> {
    Literal(&'a str),
    Percent,
    Spec(Spec),
}

fn literal(input: &str) -> IResult<&str, Fragment<'_>> {
    map(take_till1(|c: char| c == '%'), Fragment::Literal).parse(input)
}

fn percent(input: &str) -> IResult<&str, Fragment<'_>> {
    map(tag("%%"), |_| Fragment::Percent).parse(input)
}

fn flags(input: &str) -> IResult<&str, Flags> {
    map(
        take_while(|c: char| matches!(c, '-' | '+' | ' ' | '#' | '0')),
        Flags::from,
    )
    .parse(input)
}

fn width(input: &str) -> IResult<&str, Option<usize>> {
    opt(map_res(digit1, str::parse::<usize>)).parse(input)
}

// A bare "." means precision zero.
fn precision(input: &str) -> IResult<&str, Option<usize>> {
    opt(preceded(
        tag("."),
        map_res(digit0, |digits: &str| {
            if digits.is_empty() {
                Ok(0)
            } else {
                digits.parse::<usize>()
            }
        }),
    ))
    .parse(input)
}

// Length modifiers are accepted for source compatibility; arguments carry
// their own width.
fn length(input: &str) -> IResult<&str, Option<&str>> {
    opt(alt((
        tag("hh"),
        tag("h"),
        tag("ll"),
        tag("l"),
        tag("L"),
        tag("j"),
        tag("z"),
        tag("t"),
    )))
    .parse(input)
}

fn spec(input: &str) -> IResult<&str, Fragment<'_>> {
    let (input, _) = tag("%").parse(input)?;
    let (input, (flags, width, precision, _length, conversion)) = (
        flags,
        width,
        precision,
        length,
        map_opt(anychar, Conversion::from_char),
    )
        .parse(input)?;

    Ok((
        input,
        Fragment::Spec(Spec {
            flags,
            width,
            precision,
            conversion,
        }),
    ))
}

fn parse(format: &str) -> Result<Vec<Fragment<'_>>, FormatError> {
    match many0(alt((literal, percent, spec))).parse(format) {
        Ok(("", fragments)) => Ok(fragments),
        Ok((rest, _)) => Err(FormatError::InvalidSpec {
            offset: format.len() - rest.len(),
        }),
        Err(_) => Err(FormatError::InvalidSpec { offset: 0 }),
    }
}

/// Renders `format` with `args` into a new string.
pub fn sprintf(format: &str, args: &[Arg<'_>]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(format.len());
    write_printf(&mut out, format, args)?;
    Ok(out)
}

/// Appends `format` rendered with `args` to `out`.
///
/// Nothing is appended when an error is returned.
pub fn write_printf(out: &mut String, format: &str, args: &[Arg<'_>]) -> Result<(), FormatError> {
    let fragments = parse(format)?;
    let expected = fragments
        .iter()
        .filter(|fragment| matches!(fragment, Fragment::Spec(_)))
        .count();
    if expected != args.len() {
        return Err(FormatError::ArgumentCount {
            expected,
            given: args.len(),
        });
    }

    let mut rendered = String::with_capacity(format.len());
    let mut args = args.iter().enumerate();
    for fragment in fragments {
        match fragment {
            Fragment::Literal(text) => rendered.push_str(text),
            Fragment::Percent => rendered.push('%'),
            Fragment::Spec(spec) => {
                // Counts matched above, so the iterator cannot run dry here.
                if let Some((index, arg)) = args.next() {
                    render(&mut rendered, &spec, index, arg)?;
                }
            }
        }
    }
    out.push_str(&rendered);
    Ok(())
}

fn mismatch(index: usize, spec: &Spec, expected: &'static str, arg: &Arg<'_>) -> FormatError {
    FormatError::ArgumentType {
        index,
        conversion: spec.conversion.letter(),
        expected,
        found: arg.kind(),
    }
}

fn render(out: &mut String, spec: &Spec, index: usize, arg: &Arg<'_>) -> Result<(), FormatError> {
    match spec.conversion {
        Conversion::Signed(_) => {
            let (negative, magnitude) = match *arg {
                Arg::Int(v) => (v < 0, v.unsigned_abs()),
                Arg::Uint(v) => (false, v),
                _ => return Err(mismatch(index, spec, "an integer", arg)),
            };
            let sign = sign(spec, negative);
            let digits = integer_digits(spec, magnitude.to_string(), magnitude == 0);
            pad(out, spec, sign, "", &digits, spec.precision.is_none());
        }
        Conversion::Unsigned | Conversion::Octal | Conversion::Hex { .. } => {
            // Negative values are reinterpreted as their 64-bit pattern.
            let value = match *arg {
                Arg::Int(v) => v as u64,
                Arg::Uint(v) => v,
                _ => return Err(mismatch(index, spec, "an integer", arg)),
            };
            let (body, prefix) = match spec.conversion {
                Conversion::Octal => (format!("{value:o}"), ""),
                Conversion::Hex { upper: false } => {
                    (format!("{value:x}"), if value != 0 { "0x" } else { "" })
                }
                Conversion::Hex { upper: true } => {
                    (format!("{value:X}"), if value != 0 { "0X" } else { "" })
                }
                _ => (value.to_string(), ""),
            };
            let mut digits = integer_digits(spec, body, value == 0);
            let mut prefix = if spec.flags.alternate { prefix } else { "" };
            if spec.flags.alternate
                && spec.conversion == Conversion::Octal
                && !digits.starts_with('0')
            {
                digits.insert(0, '0');
                prefix = "";
            }
            pad(out, spec, "", prefix, &digits, spec.precision.is_none());
        }
        Conversion::Char => match *arg {
            Arg::Char(c) => pad(out, spec, "", "", c.encode_utf8(&mut [0; 4]), false),
            _ => return Err(mismatch(index, spec, "a char", arg)),
        },
        Conversion::Str => match *arg {
            Arg::Str(s) => {
                let s = match spec.precision {
                    Some(max) => s.char_indices().nth(max).map_or(s, |(end, _)| &s[..end]),
                    None => s,
                };
                pad(out, spec, "", "", s, false);
            }
            _ => return Err(mismatch(index, spec, "a string", arg)),
        },
        Conversion::Fixed { .. } | Conversion::Exponent { .. } | Conversion::General { .. } => {
            let value = match *arg {
                Arg::Float(v) => v,
                Arg::Int(v) => v as f64,
                Arg::Uint(v) => v as f64,
                _ => return Err(mismatch(index, spec, "a number", arg)),
            };
            let negative = value.is_sign_negative() && !value.is_nan();
            let sign = sign(spec, negative);
            let body = float_body(spec, value.abs());
            pad(out, spec, sign, "", &body, value.is_finite());
        }
    }
    Ok(())
}

fn sign(spec: &Spec, negative: bool) -> &'static str {
    if negative {
        "-"
    } else if spec.flags.plus {
        "+"
    } else if spec.flags.space {
        " "
    } else {
        ""
    }
}

// Integer precision is a minimum digit count; ".0" with a zero value prints nothing.
fn integer_digits(spec: &Spec, digits: String, is_zero: bool) -> String {
    match spec.precision {
        Some(0) if is_zero => String::new(),
        Some(min) if digits.len() < min => format!("{}{digits}", "0".repeat(min - digits.len())),
        _ => digits,
    }
}

fn pad(out: &mut String, spec: &Spec, sign: &str, prefix: &str, body: &str, zero_fill: bool) {
    let len = sign.len() + prefix.len() + body.chars().count();
    let fill = spec.width.unwrap_or(0).saturating_sub(len);
    if spec.flags.left {
        out.push_str(sign);
        out.push_str(prefix);
        out.push_str(body);
        out.extend(std::iter::repeat(' ').take(fill));
    } else if spec.flags.zero && zero_fill {
        out.push_str(sign);
        out.push_str(prefix);
        out.extend(std::iter::repeat('0').take(fill));
        out.push_str(body);
    } else {
        out.extend(std::iter::repeat(' ').take(fill));
        out.push_str(sign);
        out.push_str(prefix);
        out.push_str(body);
    }
}

fn float_body(spec: &Spec, magnitude: f64) -> String {
    let (upper, alternate) = match spec.conversion {
        Conversion::Fixed { upper }
        | Conversion::Exponent { upper }
        | Conversion::General { upper } => (upper, spec.flags.alternate),
        _ => (false, false),
    };

    if !magnitude.is_finite() {
        let text = if magnitude.is_nan() { "nan" } else { "inf" };
        return if upper { text.to_ascii_uppercase() } else { text.to_string() };
    }

    match spec.conversion {
        Conversion::Fixed { .. } => {
            let precision = spec.precision.unwrap_or(6);
            let mut body = format!("{magnitude:.precision$}");
            if alternate && precision == 0 {
                body.push('.');
            }
            body
        }
        Conversion::Exponent { .. } => {
            exponential(magnitude, spec.precision.unwrap_or(6), upper, alternate)
        }
        _ => general(magnitude, spec.precision, upper, alternate),
    }
}

// C style exponent: at least two digits and an explicit sign.
fn exponential(magnitude: f64, precision: usize, upper: bool, alternate: bool) -> String {
    let raw = format!("{magnitude:.precision$e}");
    let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let dot = if alternate && precision == 0 { "." } else { "" };
    format!(
        "{mantissa}{dot}{}{}{:02}",
        if upper { 'E' } else { 'e' },
        if exponent < 0 { '-' } else { '+' },
        exponent.unsigned_abs()
    )
}

fn decimal_exponent(magnitude: f64, precision: usize) -> i64 {
    if magnitude == 0.0 {
        return 0;
    }
    format!("{magnitude:.precision$e}")
        .split_once('e')
        .and_then(|(_, exponent)| exponent.parse().ok())
        .unwrap_or(0)
}

fn general(magnitude: f64, precision: Option<usize>, upper: bool, alternate: bool) -> String {
    let significant = match precision {
        None => 6,
        Some(0) => 1,
        Some(p) => p,
    };
    let exponent = decimal_exponent(magnitude, significant - 1);
    let body = if exponent >= -4 && exponent < significant as i64 {
        let decimals = (significant as i64 - 1 - exponent) as usize;
        format!("{magnitude:.decimals$}")
    } else {
        exponential(magnitude, significant - 1, upper, false)
    };
    if alternate {
        body
    } else {
        strip_fraction_zeros(&body)
    }
}

fn strip_fraction_zeros(body: &str) -> String {
    let (number, exponent) = match body.find(|c| c == 'e' || c == 'E') {
        Some(at) => body.split_at(at),
        None => (body, ""),
    };
    let number = if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    };
    format!("{number}{exponent}")
}
