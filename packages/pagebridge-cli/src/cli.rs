pub(crate) use crate::commands::{cursors, decode, encode, normalize};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(
    name = "pagebridge",
    about = "Inspect pagebridge cursors and paging",
    version,
    rename_all = "kebab-case"
)]
pub struct Opt {
    #[clap(subcommand)]
    command: Pagebridge,
}

#[derive(Debug, Subcommand)]
pub enum Pagebridge {
    /// Encode array indexes as connection cursors.
    Encode(encode::Command),
    /// Decode connection cursors into array indexes.
    Decode(decode::Command),
    /// Normalize connection arguments into backend paging.
    Normalize(normalize::Command),
    /// Build the page cursors for a page of a result set.
    Cursors(cursors::Command),
}

pub fn run_cli() -> anyhow::Result<()> {
    let opt = Opt::try_parse();

    match opt {
        Ok(opt) => match opt.command {
            Pagebridge::Encode(command) => encode::exec(command),
            Pagebridge::Decode(command) => decode::exec(command),
            Pagebridge::Normalize(command) => normalize::exec(command),
            Pagebridge::Cursors(command) => cursors::exec(command),
        },
        Err(e) => {
            // Prints the error and exits.
            e.exit()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_subcommands() {
        let opt = Opt::try_parse_from(["pagebridge", "encode", "0", "599"]).unwrap();
        assert!(matches!(opt.command, Pagebridge::Encode(c) if c.index == vec![0, 599]));

        let opt = Opt::try_parse_from([
            "pagebridge",
            "normalize",
            "--first",
            "20",
            "--page",
            "30",
            "--after",
            "",
        ])
        .unwrap();
        assert!(matches!(
            opt.command,
            Pagebridge::Normalize(c) if c.first == Some(20) && c.page == Some(30)
        ));

        let opt = Opt::try_parse_from([
            "pagebridge",
            "cursors",
            "--page",
            "2",
            "--size",
            "10",
            "--total-count",
            "35",
            "--page-cursor-window",
            "7",
        ])
        .unwrap();
        assert!(matches!(
            opt.command,
            Pagebridge::Cursors(c) if c.total_count == 35 && c.gateway.page_cursor_window == 7
        ));
    }

    #[test]
    fn test_rejects_unknown_subcommand() {
        assert!(Opt::try_parse_from(["pagebridge", "serve"]).is_err());
    }
}
