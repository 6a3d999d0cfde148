use std::collections::HashMap;

/// Cell values of one data line, keyed by header name.
/// Created per parse, discarded once normalized.
pub type RawRecord = HashMap<String, String>;

/// Header row plus data rows of one pasted text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRecord>,
}

/// Split raw delimited text into headers and records.
///
/// The delimiter is sniffed from the header line only: `;` wins when
/// present, `,` otherwise. One global choice for the whole input, no
/// quoting, no escaping: the expected input is a flat machine-generated
/// export, not general CSV. Too-short input degrades to an empty table
/// instead of failing; an empty batch is an inert state, not an error.
pub fn parse(text: &str) -> ParsedTable {
    let text = text.replace('\r', "");
    let lines: Vec<&str> = text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect();

    if lines.len() < 2 {
        return ParsedTable::default();
    }

    let sep = if lines[0].contains(';') { ';' } else { ',' };
    let headers: Vec<String> = lines[0].split(sep).map(|h| h.trim().to_string()).collect();

    let rows = lines[1..]
        .iter()
        .map(|line| {
            let cols: Vec<&str> = line.split(sep).map(str::trim).collect();
            // Zip positionally: short lines pad with "", extra cells are dropped
            headers
                .iter()
                .enumerate()
                .map(|(idx, h)| (h.clone(), cols.get(idx).copied().unwrap_or("").to_string()))
                .collect::<RawRecord>()
        })
        .collect();

    ParsedTable { headers, rows }
}
