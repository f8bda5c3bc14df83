use color_eyre::eyre::{bail, WrapErr};
use color_eyre::Result;
use tracing::info;

fn main() -> Result<()> {
    color_eyre::install()?;
    padtable::logger::init();

    let mut args = std::env::args_os().skip(1);
    let (Some(path), None) = (args.next(), args.next()) else {
        bail!("usage: padtable <gamecontrollerdb.txt>");
    };

    let table = padtable::convert_file(&path)
        .wrap_err_with(|| format!("converting {}", path.to_string_lossy()))?;
    info!(devices = table.len(), "writing table");
    println!("{}", table.to_json()?);
    Ok(())
}
