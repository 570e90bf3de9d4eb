use log::trace;

use super::{
    Annotations, Buckets, SuffixTypes, Text, allocate,
    lcp::{MinStack, lms_common_prefixes},
};
use crate::{GsaisError, InputElement, OutputElement};

const NO_SOURCE: usize = usize::MAX;
const SENTINEL_SOURCE: usize = usize::MAX - 1;

/// Puts the separators into bucket 0 in text order, which is already their final order.
///
/// Every separator belongs to the document it terminates.
pub(crate) fn place_separators<C: InputElement, O: OutputElement>(
    text: &Text<C>,
    buckets: &mut Buckets,
    suffix_array: &mut [O],
    mut documents: Option<&mut [O]>,
) {
    if !text.is_generalized() {
        return;
    }

    buckets.reset_heads();
    let mut document = 0;

    for position in 0..text.len() {
        if !text.is_separator(position) {
            continue;
        }

        let slot = buckets.push_front(0);
        suffix_array[slot] = O::from_index(position);

        if let Some(documents) = documents.as_deref_mut() {
            documents[slot] = O::from_index(document);
        }

        document += 1;
    }
}

/// State of the LCP computation that is threaded through both induction scans.
pub(crate) struct LcpInduction<'a, O> {
    lcp: &'a mut [O],
    stack: MinStack,
    last_source: Vec<usize>,
    lms_starts: Vec<usize>,
    l_ends: Vec<usize>,
}

impl<'a, O: OutputElement> LcpInduction<'a, O> {
    fn new(lcp: &'a mut [O], buckets: &Buckets) -> Result<Self, GsaisError> {
        let alphabet_size = buckets.alphabet_size();

        Ok(Self {
            stack: MinStack::with_capacity(lcp.len())?,
            lcp,
            last_source: allocate(alphabet_size, NO_SOURCE)?,
            lms_starts: allocate(alphabet_size, 0)?,
            l_ends: allocate(alphabet_size, 0)?,
        })
    }

    fn begin_scan(&mut self) {
        self.stack.clear();
        self.last_source.fill(NO_SOURCE);
    }

    fn seed(&mut self, c: usize, slot: usize) {
        self.lcp[slot] = O::ZERO;
        self.last_source[c] = SENTINEL_SOURCE;
    }

    /// Called for every filled slot of the forward scan, returns the tick of the slot.
    fn scan_forward<C: InputElement>(
        &mut self,
        text: &Text<C>,
        types: &SuffixTypes,
        buckets: &Buckets,
        suffix_array: &[O],
        slot: usize,
        position: usize,
    ) -> usize {
        // the first LMS suffix of a bucket meets the last L-type suffix of the same bucket
        if types.is_s(position) && !text.is_separator(position) {
            let c = text.symbol(position);

            if slot == self.lms_starts[c] {
                let head = buckets.pointer(c);

                self.lcp[slot] = if head > buckets.start(c) {
                    let last_l_type = suffix_array[head - 1].as_index();
                    O::from_index(text.common_prefix_len(last_l_type, position, 0))
                } else {
                    O::ZERO
                };
            }
        }

        self.stack.push(self.lcp[slot].as_index())
    }

    fn induce_forward(&mut self, c: usize, target: usize, tick: usize) {
        let value = match self.last_source[c] {
            NO_SOURCE => 0,
            SENTINEL_SOURCE => 1,
            source => 1 + self.stack.min_after(source),
        };

        self.lcp[target] = O::from_index(value);
        self.last_source[c] = tick;
    }

    /// Called for every slot of the backward scan, returns the tick of the slot.
    fn scan_backward(&mut self, slot: usize) -> usize {
        if slot + 1 < self.lcp.len() {
            self.stack.push(self.lcp[slot + 1].as_index())
        } else {
            0
        }
    }

    fn induce_backward<C: InputElement>(
        &mut self,
        text: &Text<C>,
        buckets: &Buckets,
        suffix_array: &[O],
        c: usize,
        target: usize,
        tick: usize,
    ) {
        if self.last_source[c] != NO_SOURCE {
            self.lcp[target + 1] = O::from_index(1 + self.stack.min_after(self.last_source[c]));
        }

        // the lowest S-type suffix of a bucket meets the last L-type suffix of the same bucket
        if target == self.l_ends[c] {
            self.lcp[target] = if target > buckets.start(c) {
                let last_l_type = suffix_array[target - 1].as_index();
                let first_s_type = suffix_array[target].as_index();
                O::from_index(text.common_prefix_len(last_l_type, first_s_type, 0))
            } else {
                O::ZERO
            };
        }

        self.last_source[c] = tick;
    }
}

/// Forward scan: every suffix induces its L-type predecessor at the head of the predecessor's bucket.
pub(crate) fn induce_l_types<C: InputElement, O: OutputElement>(
    text: &Text<C>,
    types: &SuffixTypes,
    buckets: &mut Buckets,
    suffix_array: &mut [O],
    mut lcp: Option<&mut LcpInduction<'_, O>>,
    mut documents: Option<&mut [O]>,
) {
    let n = text.len();
    buckets.reset_heads();

    if let Some(lcp) = lcp.as_deref_mut() {
        lcp.begin_scan();
    }

    // the last suffix is induced by the virtual sentinel, unless it is a separator
    if !text.is_generalized() {
        let c = text.symbol(n - 1);
        let slot = buckets.push_front(c);
        suffix_array[slot] = O::from_index(n - 1);

        if let Some(lcp) = lcp.as_deref_mut() {
            lcp.seed(c, slot);
        }
        if let Some(documents) = documents.as_deref_mut() {
            documents[slot] = O::ZERO;
        }
    }

    for slot in 0..n {
        let entry = suffix_array[slot];
        if entry == O::EMPTY {
            continue;
        }

        let position = entry.as_index();
        let tick = match lcp.as_deref_mut() {
            Some(lcp) => lcp.scan_forward(text, types, buckets, suffix_array, slot, position),
            None => 0,
        };

        if position == 0 || types.is_s(position - 1) {
            continue;
        }

        let c = text.symbol(position - 1);
        let target = buckets.push_front(c);
        suffix_array[target] = O::from_index(position - 1);

        if let Some(lcp) = lcp.as_deref_mut() {
            lcp.induce_forward(c, target, tick);
        }
        if let Some(documents) = documents.as_deref_mut() {
            documents[target] = documents[slot];
        }
    }
}

/// Backward scan: every suffix induces its S-type predecessor at the tail of the predecessor's bucket.
/// Separators are never induced.
pub(crate) fn induce_s_types<C: InputElement, O: OutputElement>(
    text: &Text<C>,
    types: &SuffixTypes,
    buckets: &mut Buckets,
    suffix_array: &mut [O],
    mut lcp: Option<&mut LcpInduction<'_, O>>,
    mut documents: Option<&mut [O]>,
) {
    buckets.reset_tails();

    if let Some(lcp) = lcp.as_deref_mut() {
        lcp.begin_scan();
    }

    for slot in (0..text.len()).rev() {
        let tick = lcp.as_deref_mut().map_or(0, |lcp| lcp.scan_backward(slot));

        let entry = suffix_array[slot];
        if entry == O::EMPTY {
            continue;
        }

        let position = entry.as_index();
        if position == 0 || types.is_l(position - 1) || text.is_separator(position - 1) {
            continue;
        }

        let c = text.symbol(position - 1);
        let target = buckets.push_back(c);
        suffix_array[target] = O::from_index(position - 1);

        if let Some(lcp) = lcp.as_deref_mut() {
            lcp.induce_backward(text, buckets, suffix_array, c, target, tick);
        }
        if let Some(documents) = documents.as_deref_mut() {
            documents[target] = documents[slot];
        }
    }
}

/// The document of every LMS position, indexed like `lms_positions`.
pub(crate) fn lms_document_ids<C: InputElement, O: OutputElement>(
    text: &Text<C>,
    lms_positions: &[usize],
) -> Result<Vec<O>, GsaisError> {
    let mut document_ids = allocate(lms_positions.len(), O::ZERO)?;
    let mut next_lms = 0;
    let mut document = 0;

    for position in 0..text.len() {
        if lms_positions.get(next_lms) == Some(&position) {
            document_ids[next_lms] = O::from_index(document);
            next_lms += 1;
        }

        if text.is_separator(position) {
            document += 1;
        }
    }

    Ok(document_ids)
}

/// Builds the complete suffix array from the exact order of the LMS suffixes.
///
/// `ranking` lists indices into `lms_positions` in ascending suffix order.
pub(crate) fn induce_suffix_array<C: InputElement, O: OutputElement>(
    text: &Text<C>,
    types: &SuffixTypes,
    buckets: &mut Buckets,
    suffix_array: &mut [O],
    lms_positions: &[usize],
    ranking: &[O],
    annotations: Annotations<'_, O>,
) -> Result<(), GsaisError> {
    let Annotations {
        lcp: lcp_buffer,
        mut documents,
    } = annotations;

    let lms_lcp = if lcp_buffer.is_some() {
        Some(lms_common_prefixes(text, lms_positions, ranking)?)
    } else {
        None
    };
    let lms_documents = if documents.is_some() {
        Some(lms_document_ids::<C, O>(text, lms_positions)?)
    } else {
        None
    };

    let mut lcp = match lcp_buffer {
        Some(buffer) => {
            buffer.fill(O::ZERO);
            Some(LcpInduction::new(buffer, buckets)?)
        }
        None => None,
    };

    suffix_array.fill(O::EMPTY);
    place_separators(text, buckets, suffix_array, documents.as_deref_mut());

    buckets.reset_tails();
    for &q in ranking.iter().rev() {
        let q = q.as_index();
        let position = lms_positions[q];

        if text.is_separator(position) {
            continue;
        }

        let slot = buckets.push_back(text.symbol(position));
        suffix_array[slot] = O::from_index(position);

        if let (Some(lcp), Some(lms_lcp)) = (lcp.as_mut(), lms_lcp.as_ref()) {
            lcp.lcp[slot] = O::from_index(lms_lcp[q]);
        }
        if let (Some(documents), Some(lms_documents)) =
            (documents.as_deref_mut(), lms_documents.as_ref())
        {
            documents[slot] = lms_documents[q];
        }
    }

    if let Some(lcp) = lcp.as_mut() {
        lcp.lms_starts.copy_from_slice(buckets.pointers());
    }

    trace!("inducing L-type suffixes");
    induce_l_types(
        text,
        types,
        buckets,
        suffix_array,
        lcp.as_mut(),
        documents.as_deref_mut(),
    );

    if let Some(lcp) = lcp.as_mut() {
        lcp.l_ends.copy_from_slice(buckets.pointers());
    }

    trace!("inducing S-type suffixes");
    induce_s_types(
        text,
        types,
        buckets,
        suffix_array,
        lcp.as_mut(),
        documents.as_deref_mut(),
    );

    if let Some(first) = lcp.as_mut().and_then(|lcp| lcp.lcp.first_mut()) {
        *first = O::ZERO;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_ids_of_lms_positions() {
        // LMS positions of "bab\0bab\0": 1, 3, 5, 7
        let text = Text::new(b"bab\0bab\0".as_slice(), true);
        let document_ids = lms_document_ids::<u8, i32>(&text, &[1, 3, 5, 7]).unwrap();

        assert_eq!(document_ids, vec![0, 0, 1, 1]);
    }

    #[test]
    fn separators_in_text_order() {
        let text = Text::new(b"a\0\0b\0".as_slice(), true);
        let mut buckets = Buckets::count(&text, 256).unwrap();
        let mut suffix_array = vec![-1i64; 5];
        let mut documents = vec![-1i64; 5];

        place_separators(
            &text,
            &mut buckets,
            &mut suffix_array,
            Some(documents.as_mut_slice()),
        );

        assert_eq!(&suffix_array[..3], &[1, 2, 4]);
        assert_eq!(&documents[..3], &[0, 1, 2]);
        assert_eq!(&suffix_array[3..], &[-1, -1]);
    }
}
