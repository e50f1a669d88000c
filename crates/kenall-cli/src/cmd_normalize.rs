/// Implementation of `kenall normalize`.
///
/// Streams the input through [`normalize_stream`]: multi-row street names
/// are joined, bracketed annotations are expanded or dropped, and each
/// resulting row is written as soon as it is ready.
///
/// ```text
/// ┌──────────────┬──────────────────────────────────────────────────────┐
/// │ Flag         │ DriverConfig field                                   │
/// ├──────────────┼──────────────────────────────────────────────────────┤
/// │ --no-trim    │ trim = false                                         │
/// │ --keep-width │ fold_width = false                                   │
/// └──────────────┴──────────────────────────────────────────────────────┘
/// ```
use anyhow::{Context, Result};
use kenall_driver::{DriverConfig, normalize_stream};

use crate::NormalizeArgs;
use crate::io::{input_name, open_input, open_output};

/// Run the `kenall normalize` command.
///
/// # Errors
///
/// Returns an error if the input cannot be opened, the output cannot be
/// created, a row is malformed, or the input ends inside a multi-row
/// street name.
pub fn run(args: &NormalizeArgs) -> Result<()> {
    let reader = open_input(args.input.as_ref())?;
    let writer = open_output(args.output.as_ref())?;

    let config = DriverConfig {
        trim: !args.no_trim,
        fold_width: !args.keep_width,
    };

    normalize_stream(reader, writer, &config)
        .with_context(|| format!("failed to normalize {}", input_name(args.input.as_ref())))?;

    Ok(())
}
