//! Brute-force longest-match search over a bounded trailing window.

/// A back-reference candidate.
///
/// The zero value denotes "no match found"; a valid match always has
/// `length >= 1` and `offset >= 1` (length 0 never pairs with a nonzero
/// offset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Match {
    /// Distance back from the cursor to the match start.
    pub offset: usize,
    /// Number of matching bytes.
    pub length: usize,
}

impl Match {
    /// The "no match found" value.
    pub const NONE: Self = Self {
        offset: 0,
        length: 0,
    };

    /// Whether this represents an actual match.
    pub fn is_some(&self) -> bool {
        self.length > 0
    }
}

/// Longest-match finder over the classic sliding window.
///
/// Deliberately a direct O(window * lookahead) scan; this codec is a
/// reference implementation, not a production matcher.
#[derive(Debug, Clone, Copy)]
pub struct MatchFinder {
    window_size: usize,
    max_length: usize,
}

impl MatchFinder {
    /// Create a finder for the given window and lookahead bounds.
    ///
    /// Callers keep `window_size <= 65535` and `max_length <= 255` so
    /// every match the finder produces is representable in a token.
    pub fn new(window_size: usize, max_length: usize) -> Self {
        Self {
            window_size,
            max_length,
        }
    }

    /// Find the longest match for `data[pos..]` within the trailing window.
    ///
    /// Candidates are scanned from the oldest window position forward and
    /// only a strictly longer run replaces the best seen so far. Among
    /// equal-length matches this selects the one at the largest offset
    /// (farthest back) — an observable property of the format that must
    /// not be "fixed" to nearest-offset.
    pub fn find(&self, data: &[u8], pos: usize) -> Match {
        let window_start = pos.saturating_sub(self.window_size);
        let max_len = self.max_length.min(data.len() - pos);

        let mut best = Match::NONE;

        for start in window_start..pos {
            let mut len = 0;
            // The run may extend past `pos`, producing an overlapping
            // match; the decoder copies byte-by-byte so this is safe.
            while len < max_len && data[start + len] == data[pos + len] {
                len += 1;
            }

            if len > best.length {
                best = Match {
                    offset: pos - start,
                    length: len,
                };
            }
        }

        best
    }
}
