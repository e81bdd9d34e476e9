/// Merges the sorted slices `left` and `right` into a new sorted `Vec`.
///
/// On equal heads the element from `left` is taken first, which keeps merge sort stable. Once one
/// side runs out the remainder of the other side is appended in bulk.
pub fn merge<F>(left: &[i64], right: &[i64], is_less: &mut F) -> Vec<i64>
where
    F: FnMut(&i64, &i64) -> bool,
{
    let mut out = Vec::with_capacity(left.len() + right.len());

    let mut l = 0;
    let mut r = 0;

    while l < left.len() && r < right.len() {
        if is_less(&right[r], &left[l]) {
            out.push(right[r]);
            r += 1;
        } else {
            out.push(left[l]);
            l += 1;
        }
    }

    out.extend_from_slice(&left[l..]);
    out.extend_from_slice(&right[r..]);

    out
}
