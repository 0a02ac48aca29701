use std::path::PathBuf;

use argh::FromArgs;

#[derive(FromArgs, Debug, PartialEq)]
/// Duplicate the edges of every spritesheet tile into a 1 pixel border.
///
/// Legacy spellings `-tw`/`--tileWidth` and `-th`/`--tileHeight` are accepted.
pub struct Args {
    /// path to the spritesheet to fix
    #[argh(option, short = 'i')]
    pub input: Option<PathBuf>,

    /// path of the fixed spritesheet, defaults to `<input>Fixed.<ext>`
    #[argh(option, short = 'o')]
    pub output: Option<PathBuf>,

    /// tile width in pixels
    #[argh(option)]
    pub tile_width: Option<i64>,

    /// tile height in pixels, defaults to the tile width
    #[argh(option)]
    pub tile_height: Option<i64>,
}

/// Rewrite the raw arguments into the canonical form understood by [`Args`].
///
/// Arguments are read in flag/value pairs. Unknown flags are dropped together
/// with their value slot, and a repeated flag keeps its last value.
///
/// # Example
///
/// ```
/// use tileseam_cli::args::normalize_args;
///
/// let args = normalize_args(&["-i", "a.png", "-tw", "16", "-x", "y"]);
/// assert_eq!(args, ["--input", "a.png", "--tile-width", "16"]);
/// ```
pub fn normalize_args<S: AsRef<str>>(args: &[S]) -> Vec<String> {
    let mut options: Vec<(&'static str, String)> = Vec::new();

    for pair in args.chunks(2) {
        let flag = pair[0].as_ref();

        let Some(canonical) = canonical_flag(flag) else {
            log::debug!("ignoring unknown argument {flag:?}");
            continue;
        };

        let Some(value) = pair.get(1) else {
            log::debug!("ignoring {flag:?}, no value given");
            continue;
        };

        options.retain(|(name, _)| *name != canonical);
        options.push((canonical, value.as_ref().to_string()));
    }

    options
        .into_iter()
        .flat_map(|(name, value)| [name.to_string(), value])
        .collect()
}

fn canonical_flag(flag: &str) -> Option<&'static str> {
    match flag {
        "-i" | "--input" => Some("--input"),
        "-o" | "--output" => Some("--output"),
        "-tw" | "--tileWidth" | "--tile-width" => Some("--tile-width"),
        "-th" | "--tileHeight" | "--tile-height" => Some("--tile-height"),
        _ => None,
    }
}

/// Parse normalized arguments with argh.
///
/// On failure the argh message is returned, e.g. for a non numeric tile size.
pub fn parse_args(command: &str, args: &[String]) -> Result<Args, String> {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    Args::from_args(&[command], &args).map_err(|exit| exit.output.trim_end().to_string())
}

/// The usage text printed for `-h` and `--help`.
pub fn help(command: &str) -> String {
    match Args::from_args(&[command], &["--help"]) {
        Ok(_) => String::new(),
        Err(exit) => exit.output,
    }
}

/// Whether the raw arguments ask for the usage text.
pub fn is_help<S: AsRef<str>>(args: &[S]) -> bool {
    matches!(args, [arg] if matches!(arg.as_ref(), "-h" | "--help"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_flags_are_rewritten() {
        let args = normalize_args(&[
            "--input",
            "a.png",
            "--tileWidth",
            "32",
            "-th",
            "16",
            "-o",
            "b.png",
        ]);
        assert_eq!(
            args,
            [
                "--input",
                "a.png",
                "--tile-width",
                "32",
                "--tile-height",
                "16",
                "--output",
                "b.png"
            ]
        );
    }

    #[test]
    fn last_value_wins() {
        let args = normalize_args(&["-tw", "8", "-tw", "4"]);
        assert_eq!(args, ["--tile-width", "4"]);
    }

    #[test]
    fn unknown_and_dangling_flags_are_dropped() {
        assert_eq!(
            normalize_args(&["-q", "x", "-i", "a.png", "-tw"]),
            ["--input", "a.png"]
        );
        // the unknown flag swallows the following slot
        assert!(normalize_args(&["-q", "-i", "a.png"]).is_empty());
    }

    #[test]
    fn parse_negative_and_numeric() -> Result<(), String> {
        let args = parse_args("tileseam", &normalize_args(&["-i", "a.png", "-tw", "-5"]))?;
        assert_eq!(args.input, Some(PathBuf::from("a.png")));
        assert_eq!(args.tile_width, Some(-5));
        assert_eq!(args.tile_height, None);
        Ok(())
    }

    #[test]
    fn parse_non_numeric_fails() {
        let res = parse_args("tileseam", &normalize_args(&["-tw", "abc"]));
        let Err(message) = res else {
            panic!("non numeric tile width was accepted");
        };
        assert!(message.contains("--tile-width"), "{message}");
    }

    #[test]
    fn help_detection() {
        assert!(is_help(&["-h"]));
        assert!(is_help(&["--help"]));
        assert!(!is_help(&["-h", "-i"]));
        assert!(!is_help::<&str>(&[]));
        assert!(help("tileseam").contains("--tile-width"));
    }
}
