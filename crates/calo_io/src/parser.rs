//! Parser for text channel-id lists.
//!
//! Each line holds at most one id. Ids may be written in decimal, in
//! hexadecimal with a `0x` prefix or in binary with a `0b` prefix, and digits
//! may be grouped with `_`. Blank lines are skipped and `#` starts a comment
//! that runs to the end of the line.

use anyhow::{Context, Result, anyhow};
use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, one_of, space0};
use nom::combinator::{all_consuming, map_res, opt, recognize, rest};
use nom::multi::{many0, many1};
use nom::sequence::{preceded, terminated, tuple};
use std::fs;
use std::path::Path;

fn digits<'a>(alphabet: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    recognize(many1(terminated(one_of(alphabet), many0(char('_')))))
}

fn from_radix(digits: &str, radix: u32) -> Result<u64, std::num::ParseIntError> {
    u64::from_str_radix(&digits.replace('_', ""), radix)
}

fn hexadecimal(input: &str) -> IResult<&str, u64> {
    preceded(
        tag_no_case("0x"),
        map_res(digits("0123456789abcdefABCDEF"), |s| from_radix(s, 16)),
    )(input)
}

fn binary(input: &str) -> IResult<&str, u64> {
    preceded(tag_no_case("0b"), map_res(digits("01"), |s| from_radix(s, 2)))(input)
}

fn decimal(input: &str) -> IResult<&str, u64> {
    map_res(digits("0123456789"), |s| from_radix(s, 10))(input)
}

/// Parses a single channel id in any supported notation.
pub fn channel_id(input: &str) -> IResult<&str, u64> {
    alt((hexadecimal, binary, decimal))(input)
}

/// Parses a standalone id such as a command-line argument.
pub fn parse_id(text: &str) -> Result<u64> {
    all_consuming(channel_id)(text.trim())
        .map(|(_, id)| id)
        .map_err(|e| anyhow!("invalid channel id {:?}: {}", text, e))
}

fn comment(input: &str) -> IResult<&str, &str> {
    preceded(char('#'), rest)(input)
}

/// Parses one line: optional id, optional trailing comment.
fn line(input: &str) -> IResult<&str, Option<u64>> {
    let (input, (_, id, _, _)) = tuple((space0, opt(channel_id), space0, opt(comment)))(input)?;
    Ok((input, id))
}

/// Parses a whole text id list.
///
/// # Errors
///
/// Returns an error naming the first line that is not blank, a comment or a
/// single valid id. Values that overflow 64 bits are rejected.
pub fn parse_id_list(text: &str) -> Result<Vec<u64>> {
    let mut ids = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let (_, id) = all_consuming(line)(raw.trim_end())
            .map_err(|e| anyhow!("line {}: invalid channel id {:?}: {}", index + 1, raw.trim(), e))?;
        if let Some(id) = id {
            ids.push(id);
        }
    }
    Ok(ids)
}

/// Reads and parses a text id list from `path`.
pub fn load_id_list<P: AsRef<Path>>(path: P) -> Result<Vec<u64>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read id list {}", path.display()))?;
    parse_id_list(&text).with_context(|| format!("Failed to parse id list {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_notations() {
        assert_eq!(channel_id("1234"), Ok(("", 1234)));
        assert_eq!(channel_id("0x3F"), Ok(("", 0x3F)));
        assert_eq!(channel_id("0XdeadBEEF"), Ok(("", 0xDEAD_BEEF)));
        assert_eq!(channel_id("0b1010"), Ok(("", 0b1010)));
        assert_eq!(channel_id("0x0010_0000"), Ok(("", 0x0010_0000)));
        assert_eq!(channel_id("1_000"), Ok(("", 1000)));
        assert_eq!(channel_id("0"), Ok(("", 0)));
    }

    #[test]
    fn standalone_ids() {
        assert_eq!(parse_id(" 0x180000 ").unwrap(), 0x18_0000);
        assert_eq!(parse_id("0b1_0000").unwrap(), 16);
        assert!(parse_id("0x").is_err());
        assert!(parse_id("12 # comment").is_err());
    }

    #[test]
    fn full_width_and_overflow() {
        assert_eq!(channel_id("0xFFFFFFFFFFFFFFFF"), Ok(("", u64::MAX)));
        assert_eq!(channel_id("18446744073709551615"), Ok(("", u64::MAX)));
        assert!(channel_id("18446744073709551616").is_err());
        assert!(parse_id_list("0x1_0000_0000_0000_0000").is_err());
    }

    #[test]
    fn comments_and_blank_lines() {
        let text = "# fiber ids\n\n  0x800000000  # iair=0 itype=1\n\t42\n   \n";
        assert_eq!(parse_id_list(text).unwrap(), vec![0x8_0000_0000, 42]);
    }

    #[test]
    fn malformed_line_is_reported() {
        let err = parse_id_list("1\n2\n0xZZ\n").unwrap_err();
        assert!(err.to_string().starts_with("line 3:"), "{err}");

        let err = parse_id_list("12 13").unwrap_err();
        assert!(err.to_string().starts_with("line 1:"), "{err}");

        assert!(parse_id_list("0b102").is_err());
        assert!(parse_id_list("-5").is_err());
    }

    #[test]
    fn empty_input() {
        assert!(parse_id_list("").unwrap().is_empty());
        assert!(parse_id_list("# nothing\n").unwrap().is_empty());
    }
}
