use crate::flags::PackedFlags;

/// Serialize a [`PackedFlags`] breakdown to a JSON string.
///
/// When `pretty` is `true` the output is indented for readability.
pub fn format_json(flags: &PackedFlags, pretty: bool) -> String {
    if pretty {
        serde_json::to_string_pretty(flags).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    } else {
        serde_json::to_string(flags).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}

/// Render a [`PackedFlags`] value in a human-readable debug format.
pub fn format_debug(flags: &PackedFlags) -> String {
    let mut out = String::with_capacity(256);

    out.push_str("=== Packed Flags ===\n");
    out.push_str(&format!("Packed:  {flags}\n"));
    out.push_str(&format!("Status:  {}\n", flags.status_code()));

    match flags.method() {
        Ok(m) => out.push_str(&format!("Method:  {} ({m})\n", m.code())),
        Err(_) => out.push_str(&format!("Method:  {} (unknown)\n", flags.method_code())),
    }

    match flags.errno() {
        Ok(e) => out.push_str(&format!(
            "Errno:   {} ({}: {})\n",
            e.code(),
            e.name(),
            e.description()
        )),
        Err(_) => out.push_str(&format!("Errno:   {} (unknown)\n", flags.errno_code())),
    }

    out.push_str(&format!(
        "Upgrade: {}\n",
        if flags.upgrade() { "yes" } else { "no" }
    ));
    out.push_str("====================\n");
    out
}

/// Render only the packed value as zero-padded hex (e.g. `0x00010200`).
pub fn format_hex(flags: &PackedFlags) -> String {
    format!("{flags}\n")
}
