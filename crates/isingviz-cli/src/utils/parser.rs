use isingviz::render::config::RGBColor;

/// Parses a `#rrggbb` hex color.
pub fn parse_hex_color(value: &str) -> Result<RGBColor, String> {
    let invalid = || format!("Invalid color '{}'. Expected '#rrggbb'.", value);

    let hex = value.trim().strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok(RGBColor(channel(0)?, channel(2)?, channel(4)?))
}

/// Parses the per-page palette: exactly one color per report page.
pub fn parse_color_list(values: &[String]) -> Result<[RGBColor; 3], String> {
    if values.len() != 3 {
        return Err(format!(
            "Expected exactly 3 colors (one per page), found {}.",
            values.len()
        ));
    }
    Ok([
        parse_hex_color(&values[0])?,
        parse_hex_color(&values[1])?,
        parse_hex_color(&values[2])?,
    ])
}
