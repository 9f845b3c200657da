use crate::Pipeline;

/// Drains `pipeline` while recording its size hint before every pull, then
/// checks each recorded hint against the count that was actually left at
/// that point. Returns the drained items.
pub(crate) fn drain_checking_hints<P: Pipeline>(mut pipeline: P) -> Vec<P::Item> {
    let mut hints = vec![pipeline.size_hint()];
    let mut items = Vec::new();
    while let Some(item) = pipeline.next() {
        items.push(item);
        hints.push(pipeline.size_hint());
    }

    for (yielded, hint) in hints.iter().enumerate() {
        let left = items.len() - yielded;
        assert!(
            hint.lower <= left,
            "hint {hint:?} after {yielded} pulls overshoots the {left} items actually left",
        );
        if let Some(upper) = hint.upper {
            assert!(
                left <= upper,
                "hint {hint:?} after {yielded} pulls undershoots the {left} items actually left",
            );
        }
    }
    items
}
