//! Common parser combinators for literal text

use winnow::ascii::multispace0;
use winnow::combinator::{cut_err, opt, preceded, terminated};
use winnow::error::{ContextError, ErrMode, StrContext, StrContextValue};
use winnow::token::{one_of, take_while};
use winnow::{ModalResult, Parser};

pub(crate) type Input<'a> = &'a str;
pub(crate) type PResult<O> = ModalResult<O>;

/// Calendar components as written, before range validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DateParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Time-of-day components as written, before range validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TimeParts {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub nanos: u32,
}

/// Exactly `width` decimal digits
pub(crate) fn fixed_digits<'a>(
    width: usize,
    label: &'static str,
) -> impl Parser<Input<'a>, u32, ErrMode<ContextError>> {
    take_while(width, '0'..='9')
        .try_map(|digits: &str| digits.parse::<u32>())
        .context(StrContext::Label(label))
}

/// A single expected separator character
pub(crate) fn separator<'a>(c: char) -> impl Parser<Input<'a>, char, ErrMode<ContextError>> {
    c.context(StrContext::Expected(StrContextValue::CharLiteral(c)))
}

/// One to nine fraction digits, scaled to nanoseconds ("5" is 500ms)
pub(crate) fn fraction_nanos(input: &mut Input<'_>) -> PResult<u32> {
    take_while(1..=9, '0'..='9')
        .try_map(|digits: &str| {
            digits
                .parse::<u32>()
                .map(|value| value * 10u32.pow(9 - digits.len() as u32))
        })
        .context(StrContext::Label("fraction of second"))
        .parse_next(input)
}

/// Zero to nine fraction digits after an ISO decimal point; `"10:15:30."` is
/// a whole second
pub(crate) fn iso_fraction(input: &mut Input<'_>) -> PResult<u32> {
    take_while(0..=9, '0'..='9')
        .try_map(|digits: &str| match digits {
            "" => Ok(0),
            digits => digits
                .parse::<u32>()
                .map(|value| value * 10u32.pow(9 - digits.len() as u32)),
        })
        .context(StrContext::Label("fraction of second"))
        .parse_next(input)
}

/// ISO year: four digits, or a sign and four to ten digits
///
/// More than four digits need an explicit sign; `+` is only allowed then.
pub(crate) fn iso_year(input: &mut Input<'_>) -> PResult<i32> {
    (opt(one_of(['+', '-'])), take_while(4..=10, '0'..='9'))
        .verify(|(sign, digits): &(Option<char>, &str)| match sign {
            None => digits.len() == 4,
            Some('+') => digits.len() > 4,
            Some(_) => true,
        })
        .try_map(|(sign, digits): (Option<char>, &str)| {
            digits
                .parse::<i32>()
                .map(|year| if sign == Some('-') { -year } else { year })
        })
        .context(StrContext::Label("year"))
        .parse_next(input)
}

fn month_day(input: &mut Input<'_>) -> PResult<(u32, u32)> {
    separator('-').parse_next(input)?;
    let month = fixed_digits(2, "month").parse_next(input)?;
    separator('-').parse_next(input)?;
    let day = fixed_digits(2, "day").parse_next(input)?;
    Ok((month, day))
}

/// `yyyy-MM-dd` with the ISO year rules of [`iso_year`]
pub(crate) fn iso_date(input: &mut Input<'_>) -> PResult<DateParts> {
    let year = iso_year.parse_next(input)?;
    let (month, day) = month_day(input)?;
    Ok(DateParts { year, month, day })
}

/// `yyyy-MM-dd` inside a JDBC escape: unsigned four-digit year
pub(crate) fn jdbc_date(input: &mut Input<'_>) -> PResult<DateParts> {
    let year = fixed_digits(4, "year").parse_next(input)?;
    let (month, day) = month_day(input)?;
    Ok(DateParts {
        year: year as i32,
        month,
        day,
    })
}

/// `HH:mm[:ss[.[fffffffff]]]`
pub(crate) fn iso_time(input: &mut Input<'_>) -> PResult<TimeParts> {
    let hour = fixed_digits(2, "hour").parse_next(input)?;
    separator(':').parse_next(input)?;
    let minute = fixed_digits(2, "minute").parse_next(input)?;
    let seconds = opt(preceded(
        ':',
        cut_err((
            fixed_digits(2, "second"),
            opt(preceded('.', iso_fraction)),
        )),
    ))
    .parse_next(input)?;

    let (second, nanos) = match seconds {
        Some((second, nanos)) => (second, nanos.unwrap_or(0)),
        None => (0, 0),
    };

    Ok(TimeParts {
        hour,
        minute,
        second,
        nanos,
    })
}

/// `HH:mm:ss`, the JDBC escape clock grammar (seconds required)
pub(crate) fn jdbc_clock(input: &mut Input<'_>) -> PResult<TimeParts> {
    let hour = fixed_digits(2, "hour").parse_next(input)?;
    separator(':').parse_next(input)?;
    let minute = fixed_digits(2, "minute").parse_next(input)?;
    separator(':').parse_next(input)?;
    let second = fixed_digits(2, "second").parse_next(input)?;

    Ok(TimeParts {
        hour,
        minute,
        second,
        nanos: 0,
    })
}

/// `{keyword 'body'}`
///
/// Once the opening `{keyword '` matched, a failing body is a hard error.
pub(crate) fn jdbc_escape<'a, O>(
    keyword: &'static str,
    body: impl Parser<Input<'a>, O, ErrMode<ContextError>>,
) -> impl Parser<Input<'a>, O, ErrMode<ContextError>> {
    preceded(
        ('{', multispace0, keyword, separator(' '), multispace0, '\''),
        cut_err(terminated(
            body,
            (separator('\''), multispace0, separator('}')),
        )),
    )
}
