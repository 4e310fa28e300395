//! Splits a neighbor report into one block per neighbor.

use log::debug;

/// Literal that opens every neighbor block.
pub const NEIGHBOR_DELIMITER: &str = "BGP neighbor is";

/// Split `text` on [`NEIGHBOR_DELIMITER`], keeping the delimiter at the
/// start of each block.
///
/// Text before the first delimiter cannot hold a neighbor and is dropped, so
/// a report with no neighbors yields no blocks. A piece that is empty or
/// never mentions "BGP" after the delimiter is dropped too. Blocks keep
/// document order.
pub fn segment_neighbors(text: &str) -> Vec<String> {
    let mut pieces = text.split(NEIGHBOR_DELIMITER);

    if let Some(preamble) = pieces.next() {
        if !preamble.trim().is_empty() {
            debug!("Skipping {} bytes before the first neighbor block", preamble.len());
        }
    }

    pieces
        .filter(|piece| {
            let keep = !piece.trim().is_empty() && piece.contains("BGP");
            if !keep {
                debug!("Skipping neighbor piece without BGP details: {:?}", piece.trim());
            }
            keep
        })
        .map(|piece| format!("{}{}", NEIGHBOR_DELIMITER, piece))
        .collect()
}
