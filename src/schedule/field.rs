use anyhow::{bail, Context, Result};

/// Expand one cron-style field into the sorted set of integers it denotes.
///
/// `max` is the inclusive upper bound of the field's domain (23 for an hour
/// field, 59 for a minute field); the domain decides what `*` means, never
/// the field's name. Malformed text is a hard error here; the occurrence
/// expander is the recovery boundary.
pub fn parse_field(text: &str, max: u32) -> Result<Vec<u32>> {
    let text = text.trim();

    if text == "*" {
        return Ok((0..=max).collect());
    }

    if let Some((range, step)) = text.split_once('/') {
        let step: u32 = step
            .trim()
            .parse()
            .with_context(|| format!("bad step in field {:?}", text))?;
        if step == 0 {
            bail!("step of zero in field {:?}", text);
        }
        return if let Some((start, end)) = range.split_once('-') {
            let start = parse_value(start, max)?;
            let end = parse_value(end, max)?;
            // An inverted range denotes the empty set; no wrap-around.
            Ok((start..=end).step_by(step as usize).collect())
        } else {
            // A bare value with a step does not expand; only range/step does.
            Ok(vec![parse_value(range, max)?])
        };
    }

    if let Some((start, end)) = text.split_once('-') {
        let start = parse_value(start, max)?;
        let end = parse_value(end, max)?;
        return Ok((start..=end).collect());
    }

    if text.contains(',') {
        let mut values = text
            .split(',')
            .map(|token| parse_value(token, max))
            .collect::<Result<Vec<_>>>()?;
        values.sort_unstable();
        values.dedup();
        return Ok(values);
    }

    Ok(vec![parse_value(text, max)?])
}

fn parse_value(token: &str, max: u32) -> Result<u32> {
    let value: u32 = token
        .trim()
        .parse()
        .with_context(|| format!("bad field value {:?}", token))?;
    if value > max {
        bail!("field value {} outside 0-{}", value, max);
    }
    Ok(value)
}
