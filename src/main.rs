// SPDX-License-Identifier: MPL-2.0
use guess_board::app::{self, paths, Flags};
use guess_board::logging;
use std::path::PathBuf;

const HELP: &str = "\
guess_board - a Guess Who style card board

USAGE:
  guess_board [OPTIONS] [CHARACTERS_DIR]

ARGS:
  <CHARACTERS_DIR>     Folder of character portraits (png, jpg, jpeg, webp)

OPTIONS:
  --lang <LOCALE>      Interface language (e.g. en-US, fr)
  --config-dir <DIR>   Directory holding settings.toml
  --data-dir <DIR>     Directory for logs
  -h, --help           Print this help
";

struct Args {
    flags: Flags,
    config_dir: Option<String>,
    data_dir: Option<String>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang: Option<String> = args.opt_value_from_str("--lang")?;
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir")?;
    let data_dir: Option<String> = args.opt_value_from_str("--data-dir")?;
    let characters_dir: Option<PathBuf> = args.opt_free_from_str()?;

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("Warning: ignoring unused arguments: {rest:?}");
    }

    Ok(Some(Args {
        flags: Flags {
            lang,
            characters_dir,
        },
        config_dir,
        data_dir,
    }))
}

fn main() -> iced::Result {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(args.data_dir, args.config_dir);
    let _logging = logging::init();

    app::run(args.flags)
}
