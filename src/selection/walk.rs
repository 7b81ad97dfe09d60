//! Fragment walk: map selection endpoints to absolute offsets
//!
//! Pure core of the selection resolver. A rendered line is modeled as its
//! leaves in document order, each contributing its char length; non-text
//! leaves (form controls and other inline elements between fragments)
//! contribute zero characters so absolute offsets keep matching the
//! original line string.

/// Document-order view of a rendered line's leaves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentWalk {
    /// Char length of each leaf in document order
    lengths: Vec<usize>,
}

impl FragmentWalk {
    pub fn from_lengths(lengths: Vec<usize>) -> Self {
        Self { lengths }
    }

    /// Build from the rendered text fragments of a line
    pub fn from_fragments<'a, I>(fragments: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            lengths: fragments
                .into_iter()
                .map(|f| f.chars().count())
                .collect(),
        }
    }

    /// Number of leaves in the walk
    pub fn leaf_count(&self) -> usize {
        self.lengths.len()
    }

    /// Absolute char offset of `(leaf, offset)`, or `None` if the endpoint
    /// does not lie inside the walk
    pub fn absolute_offset(&self, leaf: usize, offset: usize) -> Option<usize> {
        if leaf >= self.lengths.len() || offset > self.lengths[leaf] {
            return None;
        }
        Some(self.lengths[..leaf].iter().sum::<usize>() + offset)
    }

    /// Resolve a selection's endpoints to absolute `(start, end)` offsets.
    ///
    /// Declines (`None`) on empty or inverted resolutions rather than
    /// guessing; the caller simply takes no action.
    pub fn resolve(
        &self,
        start_leaf: usize,
        start_offset: usize,
        end_leaf: usize,
        end_offset: usize,
    ) -> Option<(usize, usize)> {
        let start = self.absolute_offset(start_leaf, start_offset)?;
        let end = self.absolute_offset(end_leaf, end_offset)?;
        if start >= end {
            return None;
        }
        Some((start, end))
    }
}
