use std::collections::BTreeSet;
use std::path::PathBuf;

#[derive(Debug, Default, PartialEq)]
pub struct Args {
    /// Markdown file to show instead of the built-in sample
    pub file: Option<PathBuf>,
    /// Json file with a `MarkdownStyle`
    pub style: Option<PathBuf>,
    pub font: Option<PathBuf>,
    pub bold_font: Option<PathBuf>,
}

impl Args {
    // parse arguments, return set of unrecognized args
    pub fn parse(args: &[String]) -> (Self, BTreeSet<String>) {
        let mut unrecognized_args = BTreeSet::new();
        let mut res = Args::default();

        let mut i = 0;
        let len = args.len();
        while i < len {
            let arg = &args[i];

            let slot = match arg.as_str() {
                "--style" => Some(&mut res.style),
                "--font" => Some(&mut res.font),
                "--bold-font" => Some(&mut res.bold_font),
                _ => None,
            };

            if let Some(slot) = slot {
                i += 1;
                match args.get(i) {
                    Some(path) => *slot = Some(PathBuf::from(path)),
                    None => tracing::error!("{arg} argument missing a path"),
                }
            } else if arg.starts_with("--") {
                unrecognized_args.insert(arg.clone());
            } else {
                res.file = Some(PathBuf::from(arg));
            }

            i += 1;
        }

        (res, unrecognized_args)
    }
}
