use super::{init, print_json};
use clap::Parser;
use pagebridge::cursor::{self, Position};
use pagebridge_lib::config::GatewayArgs;
use serde_json::{json, Value};

#[derive(Debug, Parser)]
pub struct Command {
    /// Connection cursors.
    #[clap(required = true)]
    pub cursor: Vec<String>,

    #[clap(flatten)]
    pub gateway: GatewayArgs,
}

fn describe(cursor: &str) -> anyhow::Result<Value> {
    let position = cursor::decode_position(cursor)?;
    Ok(match position {
        Position::BeforeStart => json!({
            "cursor": cursor,
            "index": null,
            "offsetAfter": position.offset_after(),
        }),
        Position::Index(index) => json!({
            "cursor": cursor,
            "index": index,
            "offsetAfter": position.offset_after(),
        }),
    })
}

pub fn exec(command: Command) -> anyhow::Result<()> {
    init(command.gateway)?;

    let decoded = command
        .cursor
        .iter()
        .map(|c| describe(c))
        .collect::<anyhow::Result<Vec<_>>>()?;

    print_json(&decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_cursors() {
        assert_eq!(
            describe("YXJyYXljb25uZWN0aW9uOjU5OQ==").unwrap(),
            json!({ "cursor": "YXJyYXljb25uZWN0aW9uOjU5OQ==", "index": 599, "offsetAfter": 600 })
        );
        assert_eq!(
            describe("YXJyYXljb25uZWN0aW9uOi0x").unwrap()["index"],
            Value::Null
        );
        assert!(describe("not a cursor").is_err());
    }
}
