//! XPM (X PixMap) reader and writer.
//!
//! The reader works on the already extracted lines of the image:
//! a value line `<width> <height> <color count> <chars per pixel>`,
//! one color line `<key> c <#rrggbb|None>` per color and one row per image line.

use std::collections::HashMap;

use crate::{Color, EngineError, ParseError, Pixmap, Result};

use super::super::XpmOptions;
use super::c_source;

/// Characters used for generated color keys. Space, `"` and `\` are left out
/// so rows survive trimming editors and C string literals.
const KEY_ALPHABET: &[char] = &[
    '.', '#', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B',
    'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5',
    '6', '7', '8', '9', '+', '@', '$', '%', '&', '*', '=', '-', ';', ':', '<', '>', ',', '?', '!', '~', '^', '/', '|', '(', ')', '[', ']', '{', '}', '_',
    '\'', '`',
];

const TRANSPARENT_VALUE: &str = "None";

struct ValueLine {
    width: usize,
    height: usize,
    colors: usize,
    chars_per_pixel: usize,
}

/// Parses the lines of an XPM image.
pub(crate) fn load_xpm<I, S>(lines: I) -> std::result::Result<Pixmap, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lines = lines.into_iter();

    let value_line = lines.next().ok_or(ParseError::ValueLineMissing)?;
    let ValueLine {
        width,
        height,
        colors,
        chars_per_pixel,
    } = parse_value_line(value_line.as_ref())?;

    let mut keys: HashMap<String, usize> = HashMap::new();
    let mut palette = Vec::new();
    for _ in 0..colors {
        let line = lines.next().ok_or(ParseError::ColorLinesMissing)?;
        let (key, color) = parse_color_line(line.as_ref(), chars_per_pixel)?;
        if keys.contains_key(&key) {
            return Err(ParseError::ColorDuplicated { key });
        }
        keys.insert(key, palette.len());
        palette.push(color);
    }

    let mut pixels = Vec::new();
    for _ in 0..height {
        let line = lines.next().ok_or(ParseError::PixelRowsMissing)?;
        parse_pixel_row(line.as_ref(), width, chars_per_pixel, &keys, &mut pixels)?;
    }

    if lines.next().is_some() {
        return Err(ParseError::ExtraPixelRows);
    }

    Ok(Pixmap::from_parts(width, height, pixels, palette))
}

fn parse_value_line(line: &str) -> std::result::Result<ValueLine, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 4 {
        return Err(ParseError::ValueLineFormat);
    }
    let mut values = [0usize; 4];
    for (value, token) in values.iter_mut().zip(&tokens) {
        *value = match token.parse::<usize>() {
            Ok(v) if v > 0 => v,
            _ => return Err(ParseError::ValueLineNotInteger),
        };
    }
    let [width, height, colors, chars_per_pixel] = values;
    Ok(ValueLine {
        width,
        height,
        colors,
        chars_per_pixel,
    })
}

fn parse_color_line(line: &str, chars_per_pixel: usize) -> std::result::Result<(String, Color), ParseError> {
    let (key, rest) = match line.char_indices().nth(chars_per_pixel) {
        Some((i, ' ')) => (&line[..i], &line[i + 1..]),
        _ => return Err(ParseError::ColorKeySpaceMissing),
    };

    let mut tokens = rest.split_whitespace();
    match tokens.next() {
        Some("c") => {}
        other => {
            return Err(ParseError::ColorKeyUnsupported {
                key: other.unwrap_or_default().to_string(),
            });
        }
    }
    let value = tokens.next().ok_or(ParseError::ColorValueMissing)?;
    if let Some(other_key) = tokens.next() {
        return Err(ParseError::ColorKeyUnsupported { key: other_key.to_string() });
    }

    Ok((key.to_string(), parse_color_value(value)?))
}

/// `None` or `#` followed by up to 8 hex digits, of which the lowest 24 bits are the rgb value.
fn parse_color_value(value: &str) -> std::result::Result<Color, ParseError> {
    if value.eq_ignore_ascii_case(TRANSPARENT_VALUE) {
        return Ok(Color::transparent());
    }
    let invalid = || ParseError::ColorValueInvalid { value: value.to_string() };

    let hex = value.strip_prefix('#').ok_or_else(invalid)?;
    if hex.is_empty() || hex.len() > 8 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let rgb = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
    Ok(Color::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8))
}

fn parse_pixel_row(
    line: &str,
    width: usize,
    chars_per_pixel: usize,
    keys: &HashMap<String, usize>,
    pixels: &mut Vec<usize>,
) -> std::result::Result<(), ParseError> {
    let chars: Vec<char> = line.chars().collect();
    if chars.len() % chars_per_pixel != 0 {
        return Err(ParseError::PixelRowBroken);
    }
    match width.checked_mul(chars_per_pixel) {
        Some(len) if chars.len() > len => return Err(ParseError::PixelRowTooLarge),
        Some(len) if chars.len() == len => {}
        _ => return Err(ParseError::PixelRowTooSmall),
    }

    for chunk in chars.chunks(chars_per_pixel) {
        let key: String = chunk.iter().collect();
        match keys.get(&key) {
            Some(&index) => pixels.push(index),
            None => return Err(ParseError::PixelValueInvalid { key }),
        }
    }
    Ok(())
}

/// Number of distinct keys `chars_per_pixel` characters can form.
fn key_capacity(chars_per_pixel: usize) -> usize {
    u32::try_from(chars_per_pixel)
        .ok()
        .and_then(|exp| KEY_ALPHABET.len().checked_pow(exp))
        .unwrap_or(usize::MAX)
}

/// Smallest key length that can address `colors` palette entries.
pub(crate) fn chars_per_pixel_for(colors: usize) -> usize {
    let mut chars_per_pixel = 1;
    while key_capacity(chars_per_pixel) < colors {
        chars_per_pixel += 1;
    }
    chars_per_pixel
}

/// Longest key length that is still needed for any palette size.
pub(crate) fn max_chars_per_pixel() -> usize {
    chars_per_pixel_for(usize::MAX)
}

/// Key for palette entry `index`, written as a fixed width number in base `KEY_ALPHABET.len()`.
fn color_key(index: usize, chars_per_pixel: usize) -> String {
    let base = KEY_ALPHABET.len();
    let mut digits = vec![KEY_ALPHABET[0]; chars_per_pixel];
    let mut rest = index;
    for digit in digits.iter_mut().rev() {
        *digit = KEY_ALPHABET[rest % base];
        rest /= base;
    }
    digits.into_iter().collect()
}

/// Writes the pixmap as XPM text.
pub(crate) fn save_xpm(pixmap: &Pixmap, options: &XpmOptions) -> Result<String> {
    let count = pixmap.color_count();
    let chars_per_pixel = match options.chars_per_pixel {
        Some(chars_per_pixel) => {
            let max = max_chars_per_pixel();
            if chars_per_pixel > max {
                return Err(EngineError::CharsPerPixelOutOfRange { chars_per_pixel, max });
            }
            if chars_per_pixel == 0 || key_capacity(chars_per_pixel) < count {
                return Err(EngineError::TooManyColors { count, chars_per_pixel });
            }
            chars_per_pixel
        }
        None => chars_per_pixel_for(count),
    };

    let lines = xpm_lines(pixmap, chars_per_pixel);
    if options.c_source {
        return Ok(c_source::wrap_lines(&options.image_name, &lines));
    }
    Ok(join_lines(&lines))
}

/// The XPM lines of the image. `chars_per_pixel` must be able to key the whole palette.
pub(crate) fn xpm_lines(pixmap: &Pixmap, chars_per_pixel: usize) -> Vec<String> {
    let keys: Vec<String> = (0..pixmap.color_count()).map(|i| color_key(i, chars_per_pixel)).collect();

    let mut lines = Vec::with_capacity(1 + keys.len() + pixmap.height());
    lines.push(format!("{} {} {} {}", pixmap.width(), pixmap.height(), keys.len(), chars_per_pixel));
    for (key, color) in keys.iter().zip(pixmap.palette()) {
        if color.is_transparent() {
            lines.push(format!("{key} c {TRANSPARENT_VALUE}"));
        } else {
            lines.push(format!("{key} c {}", color.to_hex()));
        }
    }
    for row in pixmap.pixels().chunks(pixmap.width()) {
        lines.push(row.iter().map(|&index| keys[index].as_str()).collect());
    }
    lines
}

pub(crate) fn join_lines(lines: &[String]) -> String {
    let mut result = lines.join("\n");
    result.push('\n');
    result
}
