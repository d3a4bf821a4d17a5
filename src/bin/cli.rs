use std::process;

use clap::{CommandFactory, Parser as ClapParser};

use flagpack::{
    format_debug, format_hex, format_json, HttpMethod, PackedFlags, ParserState,
};

/// flagpack CLI — pack and inspect HTTP parser state flags.
///
/// With a PACKED value (hex `0x...` or decimal), decodes it into its four
/// fields. Without one, packs the --status/--method/--errno/--upgrade
/// fields into a single 32-bit value and prints the breakdown.
///
/// Field values are not range-checked: a field wider than its slot bleeds
/// into the neighboring field, matching the packed bit layout exactly.
#[derive(ClapParser)]
#[command(name = "flagpack-cli", version, about, long_about = None)]
struct Cli {
    /// Packed 32-bit value to decode (e.g. 0x00010200 or 66048).
    #[arg(value_name = "PACKED")]
    packed: Option<String>,

    /// Status code field, bits 0-15 (intended width 16 bits).
    #[arg(short, long)]
    status: Option<u32>,

    /// Method field, bits 16-23: a numeric code or a name such as GET.
    #[arg(short, long)]
    method: Option<String>,

    /// Error number field, bits 24-30 (intended width 7 bits).
    #[arg(short, long)]
    errno: Option<u32>,

    /// Set the upgrade flag, bit 31.
    #[arg(short, long)]
    upgrade: bool,

    /// Output format.
    #[arg(short, long, default_value = "json", value_enum)]
    format: OutputFormat,

    /// Pretty-print JSON output (ignored for other formats).
    #[arg(short, long)]
    pretty: bool,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum OutputFormat {
    /// JSON breakdown of the packed fields
    Json,
    /// Human-readable debug output
    Debug,
    /// Packed value only, as zero-padded hex
    Hex,
}

fn main() {
    let cli = Cli::parse();

    // Nothing to pack and nothing to decode: show help instead of printing
    // an all-zero value.
    if cli.packed.is_none()
        && cli.status.is_none()
        && cli.method.is_none()
        && cli.errno.is_none()
        && !cli.upgrade
    {
        Cli::command().print_help().ok();
        println!();
        process::exit(0);
    }

    let flags = match &cli.packed {
        Some(raw) => match parse_packed(raw) {
            Ok(bits) => PackedFlags::new(bits),
            Err(e) => {
                eprintln!("Error: invalid packed value '{raw}': {e}");
                process::exit(1);
            }
        },
        None => {
            let method = match cli.method.as_deref().map(resolve_method).transpose() {
                Ok(m) => m.unwrap_or(0),
                Err(e) => {
                    eprintln!("Error: {e}");
                    process::exit(2);
                }
            };
            let state = ParserState {
                status_code: cli.status.unwrap_or(0),
                method,
                http_errno: cli.errno.unwrap_or(0),
                upgrade: cli.upgrade,
            };
            PackedFlags::pack(&state)
        }
    };

    let output = match cli.format {
        OutputFormat::Json => format_json(&flags, cli.pretty),
        OutputFormat::Debug => format_debug(&flags),
        OutputFormat::Hex => format_hex(&flags),
    };

    print!("{output}");
}

/// Parse a packed value from hex (`0x` / `0X` prefix) or decimal notation.
fn parse_packed(raw: &str) -> Result<u32, std::num::ParseIntError> {
    if let Some(hex) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
    } else {
        raw.parse()
    }
}

/// Resolve a method argument: a numeric code is used as-is (unchecked, so
/// out-of-range codes stay representable), a name is looked up in the
/// method table.
fn resolve_method(arg: &str) -> Result<u32, flagpack::CodeError> {
    if let Ok(code) = arg.parse::<u32>() {
        return Ok(code);
    }
    HttpMethod::from_name(arg).map(|m| u32::from(m.code()))
}
