use std::path::Path;

/// Schematic export artifacts the ruledeck's CDL reader cannot parse.
///
/// Removed in order; `$SUB=` must go before the bare `$`.
const CDL_ARTIFACTS: [&str; 4] = ["$SUB=", "$", "[", "]"];

/// Strips quoting artifacts from a reference CDL netlist.
pub fn sanitize_netlist(netlist: &str) -> String {
    CDL_ARTIFACTS
        .iter()
        .fold(netlist.to_string(), |acc, pattern| acc.replace(pattern, ""))
}

/// Reads `src`, sanitizes it, and writes the result to `dst`.
pub fn write_clean_netlist(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> std::io::Result<()> {
    let netlist = std::fs::read_to_string(src)?;
    std::fs::write(dst, sanitize_netlist(&netlist))
}
