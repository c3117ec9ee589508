use nom::{
    IResult,
    bytes::complete::tag_no_case,
    character::complete::{char, digit1},
    combinator::{map_res, opt, recognize},
    sequence::{pair, tuple},
};

/// Parse a floating point or integer number.
fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            opt(char('-')),
            digit1,
            opt(pair(char('.'), digit1)),
        ))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

/// Parse a pixel length: a number with an optional `px` suffix.
///
/// The sign is parsed here so that `-4` fails validation as a negative
/// length rather than as a syntax error.
pub fn parse_px_value(input: &str) -> IResult<&str, f64> {
    let input = input.trim_start();
    let (input, value) = parse_number(input)?;
    let (input, _) = opt(tag_no_case("px"))(input)?;
    Ok((input, value))
}
