// SPDX-License-Identifier: MPL-2.0
use iced_carousel::app::{self, paths, Flags};
use iced_carousel::domain::carousel::Orientation;

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        orientation: parse_or_warn::<Orientation>(&mut args, "--orientation"),
        item_width: parse_or_warn(&mut args, "--item-width"),
        item_height: parse_or_warn(&mut args, "--item-height"),
        default_index: parse_or_warn(&mut args, "--default-index"),
        items: parse_or_warn(&mut args, "--items"),
        pagination: args.contains("--pagination"),
        config_dir: parse_or_warn(&mut args, "--config-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring unexpected arguments: {remaining:?}");
    }

    paths::init_cli_override(flags.config_dir.clone());

    app::run(flags)
}

fn parse_or_warn<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("Ignoring {key}: {err}");
            None
        }
    }
}
