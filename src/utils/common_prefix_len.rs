/// Number of leading tokens shared by both sequences.
pub fn common_prefix_len<T>(before: &[T], after: &[T]) -> usize
where
    T: PartialEq,
{
    before
        .iter()
        .zip(after)
        .take_while(|(old, new)| old == new)
        .count()
}
