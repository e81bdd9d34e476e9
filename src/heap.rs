//! Binary max-heap helpers. The heap respects the invariant `parent >= child`, with the parent
//! of node `i` at `(i - 1) / 2`.

/// Builds a max-heap out of `input` by pushing one element at a time and sifting it up.
pub fn build_max_heap<F>(input: &[i64], is_less: &mut F) -> Vec<i64>
where
    F: FnMut(&i64, &i64) -> bool,
{
    let mut heap = Vec::with_capacity(input.len());

    for &elem in input {
        heap.push(elem);
        let node = heap.len() - 1;
        sift_up(&mut heap, node, is_less);
    }

    heap
}

/// Moves `heap[node]` towards the root while it is greater than its parent.
///
/// Does nothing if `node` is out of bounds.
pub fn sift_up<F>(heap: &mut [i64], mut node: usize, is_less: &mut F)
where
    F: FnMut(&i64, &i64) -> bool,
{
    if node >= heap.len() {
        return;
    }

    while node > 0 {
        let parent = (node - 1) / 2;

        // Stop if the invariant holds at `parent`.
        if !is_less(&heap[parent], &heap[node]) {
            break;
        }

        heap.swap(parent, node);
        node = parent;
    }
}

/// Moves `heap[node]` towards the leaves while one of its children is greater.
///
/// Does nothing if `node` is out of bounds.
pub fn sift_down<F>(heap: &mut [i64], mut node: usize, is_less: &mut F)
where
    F: FnMut(&i64, &i64) -> bool,
{
    let len = heap.len();

    loop {
        // Children of `node`.
        let mut child = 2 * node + 1;
        if child >= len {
            break;
        }

        // Choose the greater child.
        if child + 1 < len && is_less(&heap[child], &heap[child + 1]) {
            child += 1;
        }

        // Stop if the invariant holds at `node`.
        if !is_less(&heap[node], &heap[child]) {
            break;
        }

        heap.swap(node, child);
        node = child;
    }
}
