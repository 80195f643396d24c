//! The built-in coercions, one per [`SemanticType`].
//!
//! Each coercion takes the option as it was displayed (ex: `--count`), the raw value, and the problems of the current parse.
//! On failure the coercion reports a problem and returns `None`; it never panics.
//! The typed variants are public so that custom coercions may build on them.
use crate::error::Problems;
use crate::model::{EnumMember, SemanticType, TypedValue};

/// Coerce `value` by the built-in coercion for `semantic_type`.
///
/// [`SemanticType::Custom`] has no built-in coercion; it always reports a problem.
pub fn coerce(
    semantic_type: &SemanticType,
    option: &str,
    value: &str,
    problems: &mut Problems,
) -> Option<TypedValue> {
    match semantic_type {
        SemanticType::String => parse_string(option, value, problems).map(TypedValue::String),
        SemanticType::Bool => parse_bool(option, value, problems).map(TypedValue::Bool),
        SemanticType::Byte => parse_byte(option, value, problems).map(TypedValue::Byte),
        SemanticType::Char => parse_char(option, value, problems).map(TypedValue::Char),
        SemanticType::Short => parse_short(option, value, problems).map(TypedValue::Short),
        SemanticType::Int => parse_int(option, value, problems).map(TypedValue::Int),
        SemanticType::Long => parse_long(option, value, problems).map(TypedValue::Long),
        SemanticType::Float => parse_float(option, value, problems).map(TypedValue::Float),
        SemanticType::Double => parse_double(option, value, problems).map(TypedValue::Double),
        SemanticType::Enum(members) => {
            parse_enum(members, option, value, problems).map(TypedValue::Enum)
        }
        SemanticType::Custom => {
            problems.invalid(semantic_type.kind(), option, value);
            None
        }
    }
}

/// The value, unchanged.
pub fn parse_string(_option: &str, value: &str, _problems: &mut Problems) -> Option<String> {
    Some(value.to_string())
}

/// `true` or `false`, ignoring case.
pub fn parse_bool(option: &str, value: &str, problems: &mut Problems) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        problems.invalid("boolean", option, value);
        None
    }
}

/// An `i8` integer literal.
pub fn parse_byte(option: &str, value: &str, problems: &mut Problems) -> Option<i8> {
    decode_or_report("byte", option, value, problems)
}

/// An `i16` integer literal.
pub fn parse_short(option: &str, value: &str, problems: &mut Problems) -> Option<i16> {
    decode_or_report("short", option, value, problems)
}

/// See [`decode_integer`] for the accepted literal forms.
pub fn parse_int(option: &str, value: &str, problems: &mut Problems) -> Option<i32> {
    decode_or_report("int", option, value, problems)
}

/// An `i64` integer literal.
pub fn parse_long(option: &str, value: &str, problems: &mut Problems) -> Option<i64> {
    decode_or_report("long", option, value, problems)
}

/// An `f32`, ignoring surrounding whitespace.
pub fn parse_float(option: &str, value: &str, problems: &mut Problems) -> Option<f32> {
    match value.trim().parse::<f32>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            problems.invalid("float", option, value);
            None
        }
    }
}

/// An `f64`, ignoring surrounding whitespace.
pub fn parse_double(option: &str, value: &str, problems: &mut Problems) -> Option<f64> {
    match value.trim().parse::<f64>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            problems.invalid("double", option, value);
            None
        }
    }
}

/// The value must be precisely one character.
pub fn parse_char(option: &str, value: &str, problems: &mut Problems) -> Option<char> {
    let mut chars = value.chars();

    match (chars.next(), chars.next()) {
        (Some(single), None) => Some(single),
        _ => {
            problems.invalid("char", option, value);
            None
        }
    }
}

/// Match `value` against the `members`, ignoring case.
pub fn parse_enum(
    members: &'static [&'static str],
    option: &str,
    value: &str,
    problems: &mut Problems,
) -> Option<EnumMember> {
    match members
        .iter()
        .position(|member| member.eq_ignore_ascii_case(value))
    {
        Some(index) => Some(EnumMember {
            index,
            name: members[index],
        }),
        None => {
            problems.invalid("enum", option, value);
            None
        }
    }
}

fn decode_or_report<T: TryFrom<i128>>(
    kind: &str,
    option: &str,
    value: &str,
    problems: &mut Problems,
) -> Option<T> {
    let decoded = decode_integer(value);

    if decoded.is_none() {
        problems.invalid(kind, option, value);
    }

    decoded
}

/// Decode an integer literal that fits `T`.
///
/// Accepts an optional sign, followed by:
/// * `0x`, `0X`, or `#` for hexadecimal digits,
/// * a leading `0` for octal digits,
/// * decimal digits otherwise.
pub fn decode_integer<T: TryFrom<i128>>(value: &str) -> Option<T> {
    let (negative, rest) = if let Some(rest) = value.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = value.strip_prefix('+') {
        (false, rest)
    } else {
        (false, value)
    };

    let (radix, digits) = if let Some(digits) = rest
        .strip_prefix("0x")
        .or_else(|| rest.strip_prefix("0X"))
        .or_else(|| rest.strip_prefix('#'))
    {
        (16, digits)
    } else if rest.len() > 1 && rest.starts_with('0') {
        (8, &rest[1..])
    } else {
        (10, rest)
    };

    // The sign may only lead the literal.
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }

    let magnitude = i128::from_str_radix(digits, radix).ok()?;
    let signed = if negative { -magnitude } else { magnitude };
    T::try_from(signed).ok()
}
