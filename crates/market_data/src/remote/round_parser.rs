use crate::error::FeedError;

const MULTIPLIER_SIGN: char = '×';

/// Extracts round multipliers from a feed body, in document order.
///
/// A body that looks like a JSON array is decoded as a list of numbers.
/// Anything else is treated as page markup and every number directly
/// followed by `×` is taken as one round.
pub fn parse_rounds(body: &str) -> Result<Vec<f64>, FeedError> {
    if body.trim_start().starts_with('[') {
        return Ok(serde_json::from_str::<Vec<f64>>(body)?);
    }
    Ok(scan_multipliers(body))
}

fn scan_multipliers(text: &str) -> Vec<f64> {
    let mut values = Vec::new();

    for (idx, ch) in text.char_indices() {
        if ch != MULTIPLIER_SIGN {
            continue;
        }

        let head = text[..idx].trim_end();
        let start = head
            .char_indices()
            .rev()
            .take_while(|(_, c)| c.is_ascii_digit() || *c == '.' || *c == ',')
            .last()
            .map(|(i, _)| i);

        let Some(start) = start else {
            continue;
        };

        let number: String = head[start..].chars().filter(|c| *c != ',').collect();
        if let Ok(value) = number.parse::<f64>() {
            values.push(value);
        }
    }

    values
}
