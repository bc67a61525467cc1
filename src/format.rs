/// Options controlling how [`format_number`] renders a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Character separating the integer part from the fractional part.
    pub decimal: char,
    /// Character separating groups of three digits before the decimal point.
    pub sep:     char,
    /// Round to this number of decimal places, or `None` to leave the value
    /// floating. Overridden by the `places` argument of [`format_number`]
    /// when that is given.
    pub places:  Option<usize>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { decimal: '.',
               sep:     ',',
               places:  None, }
    }
}

/// Formats a number with grouped digits and a configurable decimal separator.
///
/// `places` rounds to a fixed number of decimal places and takes precedence
/// over `options.places`; when both are `None` the value is rendered with as
/// many digits as it needs. The integer digits are grouped in threes with
/// `options.sep`, and the sign is never grouped.
///
/// # Example
/// ```
/// use minimath::format::{FormatOptions, format_number};
///
/// let options = FormatOptions::default();
/// assert_eq!(format_number(1234567.891, None, &options), "1,234,567.891");
/// assert_eq!(format_number(1234567.891, Some(1), &options), "1,234,567.9");
/// assert_eq!(format_number(-1234.0, Some(0), &options), "-1,234");
///
/// let european = FormatOptions { decimal: ',',
///                                sep:     ' ',
///                                places:  Some(2), };
/// assert_eq!(format_number(1234.5, None, &european), "1 234,50");
/// ```
#[must_use]
pub fn format_number(n: f64, places: Option<usize>, options: &FormatOptions) -> String {
    let places = places.or(options.places);
    let rendered = places.map_or_else(|| n.to_string(), |p| format!("{n:.p$}"));

    let (sign, digits) = rendered.strip_prefix('-')
                                 .map_or(("", rendered.as_str()), |rest| ("-", rest));
    let (int_part, frac_part) = digits.split_once('.')
                                      .map_or((digits, None), |(i, f)| (i, Some(f)));

    let mut text = String::with_capacity(rendered.len() + int_part.len() / 3);
    text.push_str(sign);
    push_grouped(&mut text, int_part, options.sep);
    if let Some(frac) = frac_part {
        text.push(options.decimal);
        text.push_str(frac);
    }

    text
}

/// Appends the integer digits with a separator before every group of three.
fn push_grouped(text: &mut String, digits: &str, sep: char) {
    let count = digits.chars().count();

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (count - i) % 3 == 0 && c.is_ascii_digit() {
            text.push(sep);
        }
        text.push(c);
    }
}
