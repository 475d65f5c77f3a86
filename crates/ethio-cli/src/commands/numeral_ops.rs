use ethio_core::numeral::{self, NumeralError};

/// Parse a decimal argument, keeping fractional input so it is reported as
/// non-integral rather than as a parse failure.
pub fn encode_arg(value: &str) -> Result<String, String> {
    let value = value.trim();
    let result = match value.parse::<i64>() {
        Ok(n) => numeral::encode(n),
        Err(_) => {
            let f: f64 = value
                .parse()
                .map_err(|_| format!("not a number: {value:?}"))?;
            numeral::encode_f64(f)
        }
    };
    result.map_err(|e: NumeralError| e.to_string())
}

/// Note for encodings that decode to a different value, if any.
pub fn shared_form_note(value: &str) -> Option<String> {
    let n: i64 = value.trim().parse::<f64>().ok()? as i64;
    if numeral::has_unique_form(n) {
        return None;
    }
    let glyphs = numeral::encode(n).ok()?;
    Some(format!(
        "note: {glyphs} also reads as {}",
        numeral::decode(&glyphs)
    ))
}

pub fn encode(value: &str) {
    let glyphs = die!(encode_arg(value), "Error: {}");
    println!("{glyphs}");
    if let Some(note) = shared_form_note(value) {
        eprintln!("{note}");
    }
}

pub fn decode_arg(glyphs: &str, strict: bool) -> Result<u64, String> {
    if strict && !numeral::is_valid_glyph_string(glyphs) {
        return Err(format!("{glyphs:?} contains non-numeral characters"));
    }
    Ok(numeral::decode(glyphs))
}

pub fn decode(glyphs: &str, strict: bool) {
    let value = die!(decode_arg(glyphs, strict), "Error: {}");
    println!("{value}");
}
