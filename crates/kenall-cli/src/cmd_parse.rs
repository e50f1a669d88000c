/// Implementation of `kenall parse`.
///
/// Reads each row verbatim with [`parse_records`] and prints it as JSON.
/// The four yes/no flag columns are omitted from the JSON projection;
/// `pref_code` is included.
///
/// ```text
/// {"jis_code":"01101","old_zip_code":"060  ","zip_code":"0600000",…,"pref_code":"01"}
/// ```
use std::io::{self, Write as _};

use anyhow::{Context, Result};
use kenall_driver::parse_records;

use crate::ParseArgs;
use crate::io::{input_name, open_input};

/// Run the `kenall parse` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read, a row is malformed, or
/// stdout cannot be written.
pub fn run(args: &ParseArgs) -> Result<()> {
    let reader = open_input(args.input.as_ref())?;
    let records = parse_records(reader)
        .with_context(|| format!("failed to parse {}", input_name(args.input.as_ref())))?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    if args.pretty {
        serde_json::to_writer_pretty(&mut handle, &records).context("cannot write to stdout")?;
        writeln!(handle).context("cannot write to stdout")?;
    } else {
        for record in &records {
            serde_json::to_writer(&mut handle, record).context("cannot write to stdout")?;
            writeln!(handle).context("cannot write to stdout")?;
        }
    }

    handle.flush().context("cannot write to stdout")?;
    Ok(())
}
