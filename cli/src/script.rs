use anyhow::{Context, bail};
use sweeper_core::InputEvent;

/// Parses one script line: `L <x> <y>`, `R <x> <y>` or `G`, with `#` comments.
pub(crate) fn parse_line(line: &str) -> anyhow::Result<Option<InputEvent>> {
    let line = line.split('#').next().unwrap_or_default();
    let mut tokens = line.split_whitespace();
    let Some(command) = tokens.next() else {
        return Ok(None);
    };

    let event = match command.to_ascii_uppercase().as_str() {
        "L" => {
            let (x, y) = parse_position(&mut tokens)?;
            InputEvent::PrimaryClick { x, y }
        }
        "R" => {
            let (x, y) = parse_position(&mut tokens)?;
            InputEvent::SecondaryClick { x, y }
        }
        "G" => InputEvent::DebugToggle,
        other => bail!("Unknown event {:?}", other),
    };

    if let Some(extra) = tokens.next() {
        bail!("Unexpected trailing {:?}", extra);
    }
    Ok(Some(event))
}

fn parse_position<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> anyhow::Result<(i32, i32)> {
    let mut coordinate = |axis: &str| -> anyhow::Result<i32> {
        let token = tokens.next().with_context(|| format!("Missing {} pixel", axis))?;
        token
            .parse()
            .with_context(|| format!("Invalid {} pixel {:?}", axis, token))
    };
    let x = coordinate("x")?;
    let y = coordinate("y")?;
    Ok((x, y))
}
