use std::cmp::Ordering;
use std::io::{self, BufRead, IsTerminal, Write};

use kylin_bytes::{
    Comparator, DataType, Value, compare_to, decode_value, encode_value_to_vec, from_hex,
    increment_by, iterate_on_splits, successor, to_bytes_binary, to_hex, to_string_binary,
};
use kylin_result::{Error, Result};
use tracing_subscriber::EnvFilter;

fn print_banner() {
    const NAME: &str = env!("CARGO_PKG_NAME");
    const VER: &str = env!("CARGO_PKG_VERSION");
    println!("{} version {}", NAME, VER);
    println!("Enter \".help\" for usage hints.");
    println!("Comparator strategy: {}", Comparator::global().name());
}

fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    const LINES: &[&str] = &[
        ".help                          Show this message",
        ".hex TEXT                      Printable form (\\xHH escapes) to hex",
        ".unhex HEX                     Hex to printable form",
        ".cmp HEX HEX                   Compare two keys as unsigned bytes",
        ".succ HEX                      Next key in unsigned order",
        ".incr HEX DELTA                Add a signed amount to an 8-byte value",
        ".split LOWER UPPER N [incl]    Cut a key range into N+1 pieces",
        ".enc TYPE VALUE                Encode a typed value to hex",
        ".dec TYPE HEX                  Decode hex as a typed value",
        "                               TYPE: bool short int long float double decimal utf8",
        ".strategy                      Show the active comparator",
        ".exit/.quit                    Exit the REPL",
    ];
    for line in LINES {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// What the loop should do after a line has been handled.
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Continue,
    Exit,
}

fn arg<'a>(parts: &mut impl Iterator<Item = &'a str>, what: &str) -> Result<&'a str> {
    parts
        .next()
        .ok_or_else(|| Error::InvalidArgumentError(format!("missing {what}")))
}

fn hex_arg<'a>(parts: &mut impl Iterator<Item = &'a str>, what: &str) -> Result<Vec<u8>> {
    from_hex(arg(parts, what)?)
}

/// Run one command line, writing its output to `out`.
fn execute<W: Write>(input: &str, out: &mut W) -> Result<Step> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Step::Continue);
    }
    let (cmd, rest) = input.split_once(char::is_whitespace).unwrap_or((input, ""));
    let rest = rest.trim();
    let mut parts = rest.split_whitespace();

    match cmd {
        ".help" => print_help(out)?,
        ".hex" => {
            let bytes = to_bytes_binary(rest);
            writeln!(out, "{}", to_hex(&bytes)?)?;
        }
        ".unhex" => {
            let bytes = hex_arg(&mut parts, "hex value")?;
            writeln!(out, "{}", to_string_binary(&bytes))?;
        }
        ".cmp" => {
            let a = hex_arg(&mut parts, "left key")?;
            let b = hex_arg(&mut parts, "right key")?;
            let sign = match compare_to(&a, &b) {
                Ordering::Less => "<",
                Ordering::Equal => "=",
                Ordering::Greater => ">",
            };
            writeln!(out, "{} {} {}", to_string_binary(&a), sign, to_string_binary(&b))?;
        }
        ".succ" => {
            let key = hex_arg(&mut parts, "key")?;
            writeln!(out, "{}", to_hex(&successor(&key))?)?;
        }
        ".incr" => {
            let value = hex_arg(&mut parts, "value")?;
            let delta: i64 = arg(&mut parts, "delta")?
                .parse()
                .map_err(Error::invalid_argument)?;
            writeln!(out, "{}", to_hex(&increment_by(&value, delta)?)?)?;
        }
        ".split" => {
            let lower = hex_arg(&mut parts, "lower bound")?;
            let upper = hex_arg(&mut parts, "upper bound")?;
            let n: usize = arg(&mut parts, "split count")?
                .parse()
                .map_err(Error::invalid_argument)?;
            let inclusive = matches!(parts.next(), Some("inclusive" | "incl"));
            match iterate_on_splits(&lower, &upper, inclusive, n)? {
                Some(splits) => {
                    for (i, key) in splits.iter().enumerate() {
                        writeln!(out, "{i:>4}  {}", to_hex(&key)?)?;
                    }
                }
                None => writeln!(out, "range too narrow for {n} splits")?,
            }
        }
        ".enc" => {
            let (dtype, text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            let dtype: DataType = dtype.parse()?;
            let text = if dtype == DataType::Utf8 { text } else { text.trim() };
            let bytes = encode_value_to_vec(&Value::parse(dtype, text)?)?;
            writeln!(out, "{}", to_hex(&bytes)?)?;
        }
        ".dec" => {
            let dtype: DataType = arg(&mut parts, "data type")?.parse()?;
            let bytes = hex_arg(&mut parts, "hex value")?;
            match decode_value(&bytes, dtype) {
                Some(v) => writeln!(out, "{v}")?,
                None => writeln!(out, "not a valid {dtype} encoding")?,
            }
        }
        ".strategy" => writeln!(out, "{}", Comparator::global().name())?,
        ".exit" | ".quit" => return Ok(Step::Exit),
        _ => writeln!(out, "Unknown command: {}", cmd)?,
    }
    Ok(Step::Continue)
}

fn run<R: BufRead>(reader: R, interactive: bool) -> io::Result<()> {
    let mut stdout = io::stdout();
    let mut lines = reader.lines();

    loop {
        if interactive {
            print!("kylin> ");
            stdout.flush()?;
        }
        let Some(line) = lines.next() else {
            if interactive {
                println!();
            }
            break;
        };
        match execute(&line?, &mut stdout) {
            Ok(Step::Continue) => {}
            Ok(Step::Exit) => break,
            Err(Error::Io(e)) => return Err(e),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    Ok(())
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Comparator::init(Comparator::probe());

    // Piped input runs as a script without prompts.
    let interactive = io::stdin().is_terminal();
    tracing::debug!(interactive, "starting session");
    if interactive {
        print_banner();
    }

    if let Err(e) = run(io::stdin().lock(), interactive) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
