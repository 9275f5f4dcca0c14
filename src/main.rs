// SPDX-License-Identifier: MPL-2.0
use portfolio_lens::app::{self, paths, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let lang = optional_arg(&mut args, "--lang");
    let config_dir = optional_arg(&mut args, "--config-dir");
    let catalog_path = optional_arg(&mut args, "--catalog");

    paths::init_cli_override(config_dir);

    let flags = Flags {
        lang,
        project_id: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
        catalog_path,
    };

    app::run(flags)
}

/// Reads an optional `--key value` argument, warning about unusable values.
fn optional_arg(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("[WARN] Ignoring {key}: {err}");
            None
        }
    }
}
