use anyhow::{anyhow, Context, Result};
use tas_route_core::{Angle, StickInput};

/// Angle in game units, decimal or `0x` hex.
pub fn parse_angle(input: &str) -> Result<Angle> {
    let s = input.trim();
    if s.is_empty() {
        return Err(anyhow!("empty angle"));
    }
    let units = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u16::from_str_radix(hex, 16).with_context(|| format!("invalid hex angle: {s}"))?
    } else {
        s.parse::<u16>()
            .with_context(|| format!("invalid decimal angle: {s}"))?
    };
    Ok(Angle(units))
}

/// `"x,z;x,z;..."`. Empty segments are skipped; at least one input is required.
pub fn parse_inputs(input: &str) -> Result<Vec<StickInput>> {
    let mut inputs = Vec::new();
    for token in input.split(';') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let token = token.trim_start_matches('(').trim_end_matches(')');
        let (x, z) = token
            .split_once(',')
            .ok_or_else(|| anyhow!("input {token:?} is not of the form x,z"))?;
        let x = x
            .trim()
            .parse::<i8>()
            .with_context(|| format!("invalid stick x in {token:?}"))?;
        let z = z
            .trim()
            .parse::<i8>()
            .with_context(|| format!("invalid stick z in {token:?}"))?;
        inputs.push(StickInput::new(x, z));
    }
    if inputs.is_empty() {
        return Err(anyhow!("no inputs parsed from --inputs"));
    }
    Ok(inputs)
}
